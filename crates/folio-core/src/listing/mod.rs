//! Project listing service
//!
//! Shapes stored projects into the display list shown on the listing page
//! and the JSON payload handed to client-side code.

use crate::error::Result;
use crate::project::{Project, ProjectRepository};
use crate::storage::Database;
use serde::Serialize;

/// Sentinel filter value meaning "no filtering; return every project"
pub const ALL_FILTER: &str = "all";

/// Fixed-shape record serialized for client-side consumption
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub year: u32,
    pub short_summary: String,
    pub tags: Vec<String>,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            title: project.title.clone(),
            category: project.category.as_str().to_string(),
            year: project.year,
            short_summary: project.short_summary.clone(),
            tags: project.tags().iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

/// Result of the listing operation
#[derive(Debug, Clone)]
pub struct ProjectListing {
    /// Projects to display, in store retrieval order
    pub projects: Vec<Project>,
    /// JSON array of card records for client-side code
    pub cards_json: String,
    /// The active filter reflected back to the caller (`"all"` when absent)
    pub current_filter: String,
}

/// List projects, optionally narrowed by a raw category token
///
/// The token is used verbatim: `None`, the empty string, and the sentinel
/// `"all"` all return every project; any other value is matched
/// case-sensitively against the category key. An unrecognized token yields
/// an empty listing, not an error.
pub async fn list(db: &Database, category: Option<&str>) -> Result<ProjectListing> {
    let repo = ProjectRepository::new(db);

    let filter = category.filter(|token| !token.is_empty());
    let projects = match filter {
        Some(token) if token != ALL_FILTER => repo.list_by_category(token).await?,
        _ => repo.list_all().await?,
    };

    let cards: Vec<ProjectCard> = projects.iter().map(ProjectCard::from).collect();
    let cards_json = serde_json::to_string(&cards)?;

    Ok(ProjectListing {
        projects,
        cards_json,
        current_filter: filter.unwrap_or(ALL_FILTER).to_string(),
    })
}

/// Fetch the curated set of projects surfaced on the home page
///
/// Ids missing from the store are silently omitted, never an error.
pub async fn featured(db: &Database, ids: &[i64]) -> Result<Vec<Project>> {
    ProjectRepository::new(db).by_ids(ids).await
}
