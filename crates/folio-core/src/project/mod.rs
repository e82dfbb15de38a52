//! Portfolio projects
//!
//! The `Project` entity, its category enumeration, and the repository for
//! database operations.

pub mod validator;

use crate::error::{Error, Result};
use crate::storage::Database;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Row;

/// Project category
///
/// Single source of truth for the closed category set: storage key, filter
/// token, and display label all come from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    WebDev,
    SysDesign,
    Talk,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 3] = [Category::WebDev, Category::SysDesign, Category::Talk];

    /// Storage key, also the token accepted by the category filter
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::WebDev => "WEB_DEV",
            Category::SysDesign => "SYS_DESIGN",
            Category::Talk => "TALK",
        }
    }

    /// Human-readable label for rendering
    pub fn label(&self) -> &'static str {
        match self {
            Category::WebDev => "Web Development",
            Category::SysDesign => "System Design",
            Category::Talk => "Talk",
        }
    }

    /// Parse from the storage key (case-sensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "WEB_DEV" => Some(Category::WebDev),
            "SYS_DESIGN" => Some(Category::SysDesign),
            "TALK" => Some(Category::Talk),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A portfolio project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Store-assigned identifier
    pub id: i64,
    pub title: String,
    pub category: Category,
    /// Brief description shown on the listing page
    pub short_summary: String,
    /// Role held on the project (e.g. "Lead Backend Engineer")
    pub role: String,
    pub year: u32,
    /// Whitespace-delimited technology tokens
    pub stack: String,
    /// Optional source repository URL
    pub repository: Option<String>,
    pub challenge: String,
    pub key_features: String,
    pub description: String,
    /// Relative media path of the required hero image
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Display tags derived from the stack field, in token order
    pub fn tags(&self) -> Vec<&str> {
        self.stack.split_whitespace().collect()
    }
}

/// Field set for creating a project; the store assigns the id
#[derive(Debug, Clone)]
pub struct ProjectDraft {
    pub title: String,
    pub category: Category,
    pub short_summary: String,
    pub role: String,
    pub year: u32,
    pub stack: String,
    pub repository: Option<String>,
    pub challenge: String,
    pub key_features: String,
    pub description: String,
    pub image: String,
}

/// Project repository for database operations
pub struct ProjectRepository<'a> {
    db: &'a Database,
}

impl<'a> ProjectRepository<'a> {
    /// Create a new project repository
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a new project and return it with its store-assigned id
    pub async fn create(&self, draft: &ProjectDraft) -> Result<Project> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO projects (title, category, short_summary, role, year, stack, repository, challenge, key_features, description, image, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&draft.title)
        .bind(draft.category.as_str())
        .bind(&draft.short_summary)
        .bind(&draft.role)
        .bind(draft.year)
        .bind(&draft.stack)
        .bind(&draft.repository)
        .bind(&draft.challenge)
        .bind(&draft.key_features)
        .bind(&draft.description)
        .bind(&draft.image)
        .bind(now)
        .bind(now)
        .execute(self.db.pool())
        .await?;

        Ok(Project {
            id: result.last_insert_rowid(),
            title: draft.title.clone(),
            category: draft.category,
            short_summary: draft.short_summary.clone(),
            role: draft.role.clone(),
            year: draft.year,
            stack: draft.stack.clone(),
            repository: draft.repository.clone(),
            challenge: draft.challenge.clone(),
            key_features: draft.key_features.clone(),
            description: draft.description.clone(),
            image: draft.image.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a project by id
    pub async fn get(&self, id: i64) -> Result<Option<Project>> {
        let row = sqlx::query(
            "SELECT id, title, category, short_summary, role, year, stack, repository, challenge, key_features, description, image, created_at, updated_at FROM projects WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        row.map(|r| self.row_to_project(r)).transpose()
    }

    /// List every project in store retrieval order
    pub async fn list_all(&self) -> Result<Vec<Project>> {
        let rows = sqlx::query(
            "SELECT id, title, category, short_summary, role, year, stack, repository, challenge, key_features, description, image, created_at, updated_at FROM projects ORDER BY id",
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.into_iter().map(|r| self.row_to_project(r)).collect()
    }

    /// List the projects whose category key equals `token` exactly
    ///
    /// The token is matched verbatim and case-sensitively; an unrecognized
    /// token matches nothing.
    pub async fn list_by_category(&self, token: &str) -> Result<Vec<Project>> {
        let rows = sqlx::query(
            "SELECT id, title, category, short_summary, role, year, stack, repository, challenge, key_features, description, image, created_at, updated_at FROM projects WHERE category = ? ORDER BY id",
        )
        .bind(token)
        .fetch_all(self.db.pool())
        .await?;

        rows.into_iter().map(|r| self.row_to_project(r)).collect()
    }

    /// Fetch the projects whose ids appear in `ids`
    ///
    /// Missing ids are silently omitted; results follow store order.
    pub async fn by_ids(&self, ids: &[i64]) -> Result<Vec<Project>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!(
            "SELECT id, title, category, short_summary, role, year, stack, repository, challenge, key_features, description, image, created_at, updated_at FROM projects WHERE id IN ({placeholders}) ORDER BY id",
        );

        let mut query = sqlx::query(&sql);
        for id in ids {
            query = query.bind(id);
        }
        let rows = query.fetch_all(self.db.pool()).await?;

        rows.into_iter().map(|r| self.row_to_project(r)).collect()
    }

    /// Update a project's fields
    pub async fn update(&self, project: &Project) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE projects
            SET title = ?, category = ?, short_summary = ?, role = ?, year = ?, stack = ?, repository = ?, challenge = ?, key_features = ?, description = ?, image = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&project.title)
        .bind(project.category.as_str())
        .bind(&project.short_summary)
        .bind(&project.role)
        .bind(project.year)
        .bind(&project.stack)
        .bind(&project.repository)
        .bind(&project.challenge)
        .bind(&project.key_features)
        .bind(&project.description)
        .bind(&project.image)
        .bind(Utc::now())
        .bind(project.id)
        .execute(self.db.pool())
        .await?;

        Ok(())
    }

    /// Delete a project
    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(())
    }

    /// Delete every project (used by the seed routine)
    pub async fn delete_all(&self) -> Result<()> {
        sqlx::query("DELETE FROM projects")
            .execute(self.db.pool())
            .await?;

        Ok(())
    }

    /// Check if a project exists
    pub async fn exists(&self, id: i64) -> Result<bool> {
        let row: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(row.is_some())
    }

    /// Count stored projects
    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
            .fetch_one(self.db.pool())
            .await?;

        Ok(count)
    }

    /// Convert a database row to a Project
    fn row_to_project(&self, row: sqlx::sqlite::SqliteRow) -> Result<Project> {
        let category: String = row.get("category");
        let category = Category::parse(&category)
            .ok_or_else(|| Error::Validation(format!("unknown category '{category}' in store")))?;

        Ok(Project {
            id: row.get("id"),
            title: row.get("title"),
            category,
            short_summary: row.get("short_summary"),
            role: row.get("role"),
            year: row.get("year"),
            stack: row.get("stack"),
            repository: row.get("repository"),
            challenge: row.get("challenge"),
            key_features: row.get("key_features"),
            description: row.get("description"),
            image: row.get("image"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}
