use loom_core::{MAX_REVEAL_STEP, REVEAL_STEP_MS};
use std::time::Duration;

use crate::project::{Category, Project};

/// A technology label; `key` is the lowercase form used for styling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechTag {
    pub label: String,
    pub key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Code,
    Live,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    pub kind: LinkKind,
    pub url: String,
    pub label: &'static str,
}

/// What a grid shows for one project
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    /// Position of the project in the catalogue (opens the modal)
    pub project: usize,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub tags: Vec<TechTag>,
    pub links: Vec<ProjectLink>,
    /// Stagger step for the reveal animation, 0..=MAX_REVEAL_STEP
    pub reveal_step: usize,
}

impl ProjectCard {
    /// `slot` is the card's position within its grid
    pub fn new(project_index: usize, project: &Project, slot: usize) -> Self {
        Self {
            project: project_index,
            title: project.title.clone(),
            description: project.description.clone(),
            category: project.category,
            tags: tech_tags(project),
            links: links(project, "GitHub", "Live Site"),
            reveal_step: slot.min(MAX_REVEAL_STEP),
        }
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(REVEAL_STEP_MS * self.reveal_step as u64)
    }
}

/// Detail view of one project
#[derive(Debug, Clone, PartialEq)]
pub struct ModalContent {
    pub title: String,
    pub category: Category,
    pub description: String,
    pub tags: Vec<TechTag>,
    pub links: Vec<ProjectLink>,
}

impl ModalContent {
    pub fn new(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            category: project.category,
            description: project.description.clone(),
            tags: tech_tags(project),
            links: links(project, "View Code", "Live Demo"),
        }
    }
}

fn tech_tags(project: &Project) -> Vec<TechTag> {
    project
        .technologies
        .iter()
        .map(|tech| TechTag {
            label: tech.clone(),
            key: tech.to_lowercase(),
        })
        .collect()
}

fn links(project: &Project, code_label: &'static str, live_label: &'static str) -> Vec<ProjectLink> {
    let mut out = Vec::new();
    if let Some(url) = project.github_url() {
        out.push(ProjectLink {
            kind: LinkKind::Code,
            url: url.to_string(),
            label: code_label,
        });
    }
    if let Some(url) = project.website_url() {
        out.push(ProjectLink {
            kind: LinkKind::Live,
            url: url.to_string(),
            label: live_label,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            title: "Loom".into(),
            description: "Threads".into(),
            category: Category::Major,
            technologies: vec!["Rust".into(), "WebGPU".into()],
            github: Some("https://github.com/example/loom".into()),
            website: None,
        }
    }

    #[test]
    fn test_card_tags_and_links() {
        let card = ProjectCard::new(3, &project(), 0);
        assert_eq!(card.project, 3);
        assert_eq!(card.tags[1].key, "webgpu");
        assert_eq!(card.tags[1].label, "WebGPU");
        assert_eq!(card.links.len(), 1);
        assert_eq!(card.links[0].label, "GitHub");
        assert_eq!(card.links[0].kind, LinkKind::Code);
    }

    #[test]
    fn test_reveal_step_is_capped() {
        assert_eq!(ProjectCard::new(0, &project(), 2).reveal_step, 2);
        let late = ProjectCard::new(0, &project(), 9);
        assert_eq!(late.reveal_step, MAX_REVEAL_STEP);
        assert_eq!(late.reveal_delay(), Duration::from_millis(400));
    }

    #[test]
    fn test_modal_uses_long_labels() {
        let mut p = project();
        p.website = Some("https://example.com".into());
        let modal = ModalContent::new(&p);
        let labels: Vec<&str> = modal.links.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["View Code", "Live Demo"]);
    }
}
