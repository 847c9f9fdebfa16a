// 🧰 Tool Entity - one entry in the catalog
//
// Identity: `id` (assigned once, never changes)
// Values: name, description, url, ... (editable through ToolPatch)
// Time: `created_at` is fixed at creation and only used for ordering

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::Category;

// ============================================================================
// TOOL
// ============================================================================

/// A catalog entry describing a third-party tool.
///
/// Field names serialize in camelCase (`apiAccess`, `createdAt`), which is the
/// persisted record format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    // ========================================================================
    // IDENTITY (never changes)
    // ========================================================================
    pub id: String,

    // ========================================================================
    // VALUES (editable)
    // ========================================================================
    pub name: String,
    pub description: String,
    pub url: String,
    pub developer: String,
    pub category: Category,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<String>,

    #[serde(default)]
    pub api_access: bool,

    // ========================================================================
    // TIME (fixed at creation)
    // ========================================================================
    pub created_at: String,
}

impl Tool {
    /// Parsed `created_at`, if it is a valid RFC 3339 timestamp
    pub fn created_at_time(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Rating used for ordering: absent (or NaN) counts as zero, and both
    /// zeros are the same zero
    pub fn rating_or_zero(&self) -> f64 {
        match self.rating {
            // + 0.0 turns -0.0 into 0.0
            Some(r) if !r.is_nan() => r + 0.0,
            _ => 0.0,
        }
    }

    /// Case-insensitive substring match over name, description, developer
    /// and tags. An empty query matches everything.
    pub fn matches_text(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }

        let needle = query.to_lowercase();
        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

        contains(&self.name)
            || contains(&self.description)
            || contains(&self.developer)
            || self.tags.iter().any(|tag| contains(tag))
    }

    /// Apply an edit. Identity and creation time are not part of a patch.
    pub fn apply(&mut self, patch: ToolPatch) {
        let ToolPatch {
            name,
            description,
            url,
            developer,
            category,
            tags,
            rating,
            pricing,
            api_access,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(url) = url {
            self.url = url;
        }
        if let Some(developer) = developer {
            self.developer = developer;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        if let Some(rating) = rating {
            self.rating = rating;
        }
        if let Some(pricing) = pricing {
            self.pricing = pricing;
        }
        if let Some(api_access) = api_access {
            self.api_access = api_access;
        }
    }
}

// ============================================================================
// TOOL PATCH
// ============================================================================

/// Sparse set of fields to overwrite on an existing tool.
///
/// `None` leaves a field untouched. The optional fields (`rating`, `pricing`)
/// take `Some(None)` to clear them; in JSON that is an explicit `null`.
/// `id` and `createdAt` have no slot here and are dropped when decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<Option<f64>>,
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub pricing: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_access: Option<bool>,
}

impl ToolPatch {
    pub fn is_empty(&self) -> bool {
        *self == ToolPatch::default()
    }

    pub fn category(category: Category) -> Self {
        ToolPatch {
            category: Some(category),
            ..ToolPatch::default()
        }
    }
}

/// Distinguishes a missing key (outer `None`) from `null` (`Some(None)`)
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_tool(id: &str, name: &str) -> Tool {
        Tool {
            id: id.to_string(),
            name: name.to_string(),
            description: "Writes code for you".to_string(),
            url: "https://example.com".to_string(),
            developer: "Example Labs".to_string(),
            category: Category::Code,
            tags: vec!["coding".to_string(), "Autocomplete".to_string()],
            rating: Some(4.5),
            pricing: Some("$10 per month".to_string()),
            api_access: true,
            created_at: "2023-03-14T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_tool_json_uses_camel_case() {
        let tool = create_test_tool("1", "Copilot");
        let json = serde_json::to_value(&tool).unwrap();

        assert_eq!(json["apiAccess"], serde_json::json!(true));
        assert_eq!(json["createdAt"], serde_json::json!("2023-03-14T10:00:00Z"));
        assert_eq!(json["category"], serde_json::json!("code"));
        assert!(json.get("api_access").is_none());
    }

    #[test]
    fn test_tool_optional_fields_default() {
        let json = r#"{
            "id": "9",
            "name": "Bare",
            "description": "Minimal record",
            "url": "https://bare.example",
            "developer": "Nobody",
            "category": "other",
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;

        let tool: Tool = serde_json::from_str(json).unwrap();
        assert!(tool.tags.is_empty());
        assert_eq!(tool.rating, None);
        assert_eq!(tool.pricing, None);
        assert!(!tool.api_access);
    }

    #[test]
    fn test_matches_text_fields_and_tags() {
        let tool = create_test_tool("1", "Copilot");

        assert!(tool.matches_text(""));
        assert!(tool.matches_text("copi"));
        assert!(tool.matches_text("WRITES"));
        assert!(tool.matches_text("example labs"));
        assert!(tool.matches_text("autocomplete"));
        assert!(!tool.matches_text("example.com")); // url is not searched
        assert!(!tool.matches_text("music"));
    }

    #[test]
    fn test_apply_patch_only_touches_given_fields() {
        let mut tool = create_test_tool("1", "Copilot");
        let before = tool.clone();

        tool.apply(ToolPatch::category(Category::Text));

        assert_eq!(tool.category, Category::Text);
        assert_eq!(tool.tags, before.tags);
        assert_eq!(tool.name, before.name);
        assert_eq!(tool.rating, before.rating);
        assert_eq!(tool.created_at, before.created_at);
    }

    #[test]
    fn test_patch_explicit_null_clears_optional_fields() {
        let patch: ToolPatch = serde_json::from_str(r#"{"rating": null}"#).unwrap();
        assert_eq!(patch.rating, Some(None));
        assert_eq!(patch.pricing, None);

        let mut tool = create_test_tool("1", "Copilot");
        tool.apply(patch);
        assert_eq!(tool.rating, None);
        assert_eq!(tool.pricing, Some("$10 per month".to_string()));
    }

    #[test]
    fn test_patch_drops_identity_fields() {
        let patch: ToolPatch = serde_json::from_str(
            r#"{"id": "hijack", "createdAt": "1999-01-01T00:00:00Z", "name": "Renamed"}"#,
        )
        .unwrap();

        let mut tool = create_test_tool("1", "Copilot");
        tool.apply(patch);

        assert_eq!(tool.id, "1");
        assert_eq!(tool.created_at, "2023-03-14T10:00:00Z");
        assert_eq!(tool.name, "Renamed");
    }

    #[test]
    fn test_rating_or_zero() {
        let mut tool = create_test_tool("1", "Copilot");
        assert_eq!(tool.rating_or_zero(), 4.5);
        tool.rating = None;
        assert_eq!(tool.rating_or_zero(), 0.0);
        tool.rating = Some(f64::NAN);
        assert_eq!(tool.rating_or_zero(), 0.0);
        tool.rating = Some(-0.0);
        assert!(tool.rating_or_zero().is_sign_positive());
    }

    #[test]
    fn test_created_at_time() {
        let mut tool = create_test_tool("1", "Copilot");
        assert!(tool.created_at_time().is_some());
        tool.created_at = "yesterday".to_string();
        assert!(tool.created_at_time().is_none());
    }
}
