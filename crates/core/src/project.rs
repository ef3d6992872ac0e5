//! Project records shown in the portfolio.
//!
//! Records are read-only: they come from the compiled-in fixture
//! ([`crate::fixture`]) and are never mutated at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::ProjectId;

/// Glyph shown in place of a project image when none is set.
pub const PLACEHOLDER_GLYPH: &str = "\u{1F680}";

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Project category. A closed set; every record carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Mobile,
    Backend,
    Fullstack,
    Design,
}

impl Category {
    /// Every category, in the order the catalog lists them.
    pub const ALL: [Category; 5] = [
        Category::Web,
        Category::Mobile,
        Category::Backend,
        Category::Fullstack,
        Category::Design,
    ];

    /// Wire identifier (`"web"`, `"mobile"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Mobile => "mobile",
            Category::Backend => "backend",
            Category::Fullstack => "fullstack",
            Category::Design => "design",
        }
    }

    /// Human-readable label used by the category filter.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Web => "Web Development",
            Category::Mobile => "Mobile Apps",
            Category::Backend => "Backend",
            Category::Fullstack => "Full Stack",
            Category::Design => "Design",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Delivery status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Planned => "planned",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A single showcased project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: Option<String>,
    pub technologies: Vec<String>,
    pub tags: Vec<String>,
    pub demo_url: String,
    pub repo_url: String,
    #[serde(default)]
    pub featured: bool,
    pub category: Category,
    pub status: ProjectStatus,
    pub year: u16,
    pub duration: String,
    pub challenges: Vec<String>,
    pub achievements: Vec<String>,
}

impl Project {
    /// The project image, or [`PLACEHOLDER_GLYPH`] when the record has none.
    pub fn image_or_placeholder(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_GLYPH)
    }

    /// Case-insensitive substring match over title, description,
    /// technologies and tags.
    ///
    /// `needle` must already be lowercased; see
    /// [`crate::catalog::FilterCriteria`].
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .technologies
                .iter()
                .any(|t| t.to_lowercase().contains(needle))
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        Project {
            id: 1,
            title: "Spotify UI Clone".into(),
            description: "Music player interface".into(),
            long_description: String::new(),
            image: None,
            technologies: vec!["React".into(), "Tailwind CSS".into()],
            tags: vec!["Responsive".into(), "Music".into()],
            demo_url: String::new(),
            repo_url: String::new(),
            featured: false,
            category: Category::Web,
            status: ProjectStatus::Completed,
            year: 2024,
            duration: "1 month".into(),
            challenges: vec![],
            achievements: vec![],
        }
    }

    #[test]
    fn category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn category_rejects_unknown_and_wrong_case() {
        assert!("games".parse::<Category>().is_err());
        assert!("Web".parse::<Category>().is_err());
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn missing_image_falls_back_to_placeholder() {
        let mut project = sample();
        assert_eq!(project.image_or_placeholder(), PLACEHOLDER_GLYPH);

        project.image = Some("/img/spotify.png".into());
        assert_eq!(project.image_or_placeholder(), "/img/spotify.png");
    }

    #[test]
    fn matches_each_searched_field() {
        let project = sample();
        assert!(project.matches_lowercase("spotify"));
        assert!(project.matches_lowercase("player"));
        assert!(project.matches_lowercase("tailwind"));
        assert!(project.matches_lowercase("respons"));
    }

    #[test]
    fn does_not_search_narrative_fields() {
        let mut project = sample();
        project.long_description = "uses kubernetes".into();
        project.challenges = vec!["kubernetes rollout".into()];
        assert!(!project.matches_lowercase("kubernetes"));
    }
}
