use serde::{Deserialize, Serialize};

/// One entry of the project data file.
///
/// Parsing is lenient: missing fields come through empty and an unknown
/// category lands in `Category::Other`, so a sloppy record shows up as an
/// odd card rather than failing the whole file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub technologies: Vec<String>,
    /// Source repository URL
    pub github: Option<String>,
    /// Live site URL
    pub website: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Major,
    Minor,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Other => "other",
        }
    }
}

impl Project {
    /// Empty link strings count as absent
    pub fn github_url(&self) -> Option<&str> {
        self.github.as_deref().filter(|url| !url.is_empty())
    }

    pub fn website_url(&self) -> Option<&str> {
        self.website.as_deref().filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record() {
        let json = r#"{
            "title": "Loom",
            "description": "Thread field",
            "category": "major",
            "technologies": ["Rust", "Bevy"],
            "github": "https://github.com/example/loom",
            "website": "https://example.com"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.category, Category::Major);
        assert_eq!(project.technologies, vec!["Rust", "Bevy"]);
        assert_eq!(project.github_url(), Some("https://github.com/example/loom"));
    }

    #[test]
    fn test_sloppy_record_still_parses() {
        let project: Project =
            serde_json::from_str(r#"{ "title": "Half done", "category": "side", "github": "" }"#)
                .unwrap();
        assert_eq!(project.category, Category::Other);
        assert!(project.technologies.is_empty());
        assert_eq!(project.description, "");
        assert_eq!(project.github_url(), None);
        assert_eq!(project.website_url(), None);
    }
}
