//! Project validation
//!
//! Validates project fields before administrative input reaches the store.

use crate::error::{Error, Result};
use crate::project::ProjectDraft;

/// Validator for project fields
pub struct ProjectValidator;

impl ProjectValidator {
    /// Validate a project title
    ///
    /// Rules:
    /// - Must not be empty
    /// - Must be 100 characters or less
    pub fn validate_title(title: &str) -> Result<()> {
        let title = title.trim();

        if title.is_empty() {
            return Err(Error::Validation("Project title cannot be empty".to_string()));
        }

        if title.len() > 100 {
            return Err(Error::Validation(
                "Project title must be 100 characters or less".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate a short summary
    pub fn validate_summary(summary: &str) -> Result<()> {
        if summary.trim().is_empty() {
            return Err(Error::Validation("Short summary cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Validate a project year
    ///
    /// Rules:
    /// - Must be a positive integer
    pub fn validate_year(year: u32) -> Result<()> {
        if year == 0 {
            return Err(Error::Validation("Year must be a positive integer".to_string()));
        }

        Ok(())
    }

    /// Validate the stack field
    ///
    /// Tags are derived by splitting on whitespace, so the field must hold at
    /// least one token and stay within the stored column width.
    pub fn validate_stack(stack: &str) -> Result<()> {
        if stack.split_whitespace().next().is_none() {
            return Err(Error::Validation(
                "Stack must contain at least one technology token".to_string(),
            ));
        }

        if stack.len() > 100 {
            return Err(Error::Validation(
                "Stack must be 100 characters or less".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate an optional repository URL
    ///
    /// Rules:
    /// - May be absent
    /// - Must be an http(s) URL with a non-empty host and no whitespace
    pub fn validate_repository(repository: Option<&str>) -> Result<()> {
        let Some(url) = repository else {
            return Ok(());
        };

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| {
                Error::Validation(format!(
                    "Repository URL '{url}' must start with http:// or https://"
                ))
            })?;

        let host = rest.split('/').next().unwrap_or("");
        if host.is_empty() || url.chars().any(char::is_whitespace) {
            return Err(Error::Validation(format!(
                "Repository URL '{url}' is not a valid URL"
            )));
        }

        Ok(())
    }

    /// Validate the image reference
    ///
    /// The image is required at creation time; the media store has already
    /// checked the bytes, this only guards the stored path.
    pub fn validate_image(image: &str) -> Result<()> {
        if image.trim().is_empty() {
            return Err(Error::Validation("Project image is required".to_string()));
        }

        Ok(())
    }

    /// Validate all fields of a draft at once
    pub fn validate_draft(draft: &ProjectDraft) -> Result<()> {
        Self::validate_title(&draft.title)?;
        Self::validate_summary(&draft.short_summary)?;
        Self::validate_year(draft.year)?;
        Self::validate_stack(&draft.stack)?;
        Self::validate_repository(draft.repository.as_deref())?;
        Self::validate_image(&draft.image)?;
        Ok(())
    }
}
