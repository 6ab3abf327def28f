use std::fs;
use std::path::Path;

use crate::card::ProjectCard;
use crate::error::CatalogueError;
use crate::project::{Category, Project};

/// All projects from the data file, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogue {
    pub projects: Vec<Project>,
}

/// Cards for the two project grids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectGrids {
    pub major: Vec<ProjectCard>,
    pub minor: Vec<ProjectCard>,
}

impl ProjectGrids {
    pub fn for_category(&self, category: Category) -> &[ProjectCard] {
        match category {
            Category::Major => &self.major,
            Category::Minor => &self.minor,
            Category::Other => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.major.len() + self.minor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Catalogue {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let projects = serde_json::from_str(json)?;
        Ok(Self { projects })
    }

    /// Read the project file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogueError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    /// Projects of one category with their catalogue index
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = (usize, &Project)> {
        self.projects
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.category == category)
    }

    /// Build both grids. Projects outside major/minor are not shown.
    pub fn grids(&self) -> ProjectGrids {
        ProjectGrids {
            major: self.cards(Category::Major),
            minor: self.cards(Category::Minor),
        }
    }

    fn cards(&self, category: Category) -> Vec<ProjectCard> {
        self.in_category(category)
            .enumerate()
            .map(|(slot, (index, project))| ProjectCard::new(index, project, slot))
            .collect()
    }
}
