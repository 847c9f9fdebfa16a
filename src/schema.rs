// 📐 Shape Layer - Tool form validation
//
// The store accepts whatever it is given; these checks run in the add/edit
// workflow before a tool reaches it.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::{Category, Tool, ToolPatch};
use crate::error::CatalogError;

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub type ValidationResult = Result<(), Vec<FieldError>>;

fn required(errors: &mut Vec<FieldError>, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

fn valid_url(errors: &mut Vec<FieldError>, value: &str) {
    if url::Url::parse(value.trim()).is_err() {
        errors.push(FieldError::new("url", "Must be a valid URL"));
    }
}

fn finish(errors: Vec<FieldError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Fresh collision-resistant tool id
pub fn new_tool_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current time in the catalog's `createdAt` format (`2024-05-01T12:00:00.000Z`)
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ============================================================================
// TOOL DRAFT (add / edit form)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub developer: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub pricing: Option<String>,
    #[serde(default)]
    pub api_access: bool,
}

impl ToolDraft {
    /// Pre-fill the edit form from an existing tool
    pub fn from_tool(tool: &Tool) -> Self {
        ToolDraft {
            name: tool.name.clone(),
            description: tool.description.clone(),
            url: tool.url.clone(),
            developer: tool.developer.clone(),
            category: tool.category.as_str().to_string(),
            tags: tool.tags.clone(),
            rating: tool.rating,
            pricing: tool.pricing.clone(),
            api_access: tool.api_access,
        }
    }

    /// Add a tag; blank and already-present tags are ignored.
    /// Returns whether the tag was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        required(&mut errors, "name", &self.name, "Name is required");
        required(&mut errors, "description", &self.description, "Description is required");
        valid_url(&mut errors, &self.url);
        required(&mut errors, "developer", &self.developer, "Developer is required");

        if self.category.trim().is_empty() {
            errors.push(FieldError::new("category", "Category is required"));
        } else if self.category.parse::<Category>().is_err() {
            errors.push(FieldError::new(
                "category",
                &format!("Unknown category: {}", self.category),
            ));
        }

        finish(errors)
    }

    /// Validate and turn the draft into a new tool with a fresh id and the
    /// current time as `createdAt`.
    pub fn into_tool(self) -> Result<Tool, CatalogError> {
        self.validate().map_err(CatalogError::InvalidFields)?;

        let category = self
            .category
            .parse::<Category>()
            .map_err(|e| CatalogError::InvalidFields(vec![FieldError::new("category", &e.to_string())]))?;

        Ok(Tool {
            id: new_tool_id(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            url: self.url.trim().to_string(),
            developer: self.developer.trim().to_string(),
            category,
            tags: self.tags,
            rating: self.rating,
            pricing: self.pricing.filter(|p| !p.trim().is_empty()),
            api_access: self.api_access,
            created_at: now_timestamp(),
        })
    }
}

// ============================================================================
// PATCH VALIDATION
// ============================================================================

impl ToolPatch {
    /// Same rules as the add form, for the fields an edit supplies
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        if let Some(name) = &self.name {
            required(&mut errors, "name", name, "Name is required");
        }
        if let Some(description) = &self.description {
            required(&mut errors, "description", description, "Description is required");
        }
        if let Some(url) = &self.url {
            valid_url(&mut errors, url);
        }
        if let Some(developer) = &self.developer {
            required(&mut errors, "developer", developer, "Developer is required");
        }

        finish(errors)
    }
}

// ============================================================================
// TESTS
// ============================================================================
