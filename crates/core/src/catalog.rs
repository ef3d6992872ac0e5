//! Project catalog filtering and search.
//!
//! Filtering is pure and synchronous: a [`FilterCriteria`] (category
//! selection + free-text search) applied to a project list yields the
//! ordered subsequence that matches both predicates. Fixture order is always
//! preserved; no sorting is performed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::fixture;
use crate::project::{Category, Project};
use crate::types::ProjectId;

/// Number of projects shown on the landing view.
pub const PREVIEW_COUNT: usize = 6;

/// Identifier of the catch-all category selection.
pub const ALL_CATEGORIES_ID: &str = "all";

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// Category selection: either every category or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_ID,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CATEGORIES_ID {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(CoreError::Validation)
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// User-entered filter predicates. Defaults to every category, no search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub search: String,
}

impl FilterCriteria {
    pub fn new(category: CategoryFilter, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    /// Parse raw query-string values. Missing values fall back to defaults;
    /// an unknown category is a validation error.
    pub fn from_raw(category: Option<&str>, search: Option<&str>) -> Result<Self, CoreError> {
        let category = match category {
            Some(raw) => raw.parse()?,
            None => CategoryFilter::All,
        };
        Ok(Self::new(category, search.unwrap_or_default()))
    }

    /// Whether `project` passes both predicates.
    ///
    /// An empty search string skips the field check entirely.
    pub fn matches(&self, project: &Project) -> bool {
        if !self.category.admits(project.category) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        project.matches_lowercase(&self.search.to_lowercase())
    }
}

/// Apply `criteria` to `projects`, preserving input order.
pub fn filter_projects<'a>(projects: &'a [Project], criteria: &FilterCriteria) -> Vec<&'a Project> {
    if criteria.search.is_empty() {
        return projects
            .iter()
            .filter(|p| criteria.category.admits(p.category))
            .collect();
    }

    let needle = criteria.search.to_lowercase();
    projects
        .iter()
        .filter(|p| criteria.category.admits(p.category) && p.matches_lowercase(&needle))
        .collect()
}

// ---------------------------------------------------------------------------
// Category summaries
// ---------------------------------------------------------------------------

/// One selectable entry in the category filter, with its project count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub id: &'static str,
    pub name: &'static str,
    pub count: usize,
}

/// Summaries for `all` followed by every category, in fixed order.
pub fn category_summaries(projects: &[Project]) -> Vec<CategorySummary> {
    let mut summaries = Vec::with_capacity(Category::ALL.len() + 1);
    summaries.push(CategorySummary {
        id: ALL_CATEGORIES_ID,
        name: "All Projects",
        count: projects.len(),
    });
    summaries.extend(Category::ALL.into_iter().map(|category| CategorySummary {
        id: category.as_str(),
        name: category.display_name(),
        count: projects.iter().filter(|p| p.category == category).count(),
    }));
    summaries
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Read-only project list with the lookups the views need.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Catalog over the compiled-in fixture.
    pub fn fixture() -> Self {
        Self::new(fixture::projects().to_vec())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Project> {
        filter_projects(&self.projects, criteria)
    }

    /// The first `count` projects in catalog order.
    pub fn preview(&self, count: usize) -> &[Project] {
        &self.projects[..count.min(self.projects.len())]
    }

    pub fn get(&self, id: ProjectId) -> Result<&Project, CoreError> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })
    }

    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        category_summaries(&self.projects)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
