// 🏷️ Category - the closed set of tool categories
//
// Stored as lowercase strings ("text", "image", ...) so the persisted record
// matches the catalog's JSON format exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Text,
    Image,
    Audio,
    Video,
    Multimodal,
    Code,
    Analytics,
    Other,
}

impl Category {
    /// Every category, in the order filter pickers show them
    pub const ALL: [Category; 8] = [
        Category::Text,
        Category::Image,
        Category::Audio,
        Category::Video,
        Category::Multimodal,
        Category::Code,
        Category::Analytics,
        Category::Other,
    ];

    /// Storage value (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Text => "text",
            Category::Image => "image",
            Category::Audio => "audio",
            Category::Video => "video",
            Category::Multimodal => "multimodal",
            Category::Code => "code",
            Category::Analytics => "analytics",
            Category::Other => "other",
        }
    }

    /// Human-readable label for pills and table headers
    pub fn label(&self) -> &'static str {
        match self {
            Category::Text => "Text",
            Category::Image => "Image",
            Category::Audio => "Audio",
            Category::Video => "Video",
            Category::Multimodal => "Multimodal",
            Category::Code => "Code",
            Category::Analytics => "Analytics",
            Category::Other => "Other",
        }
    }

    /// Parse a filter input.
    ///
    /// Only an exact storage value ("image", not "Image") selects a
    /// category; anything else means "no filter" rather than an error.
    pub fn parse_filter(value: &str) -> Option<Category> {
        Category::ALL.iter().find(|c| c.as_str() == value).copied()
    }

    /// Next category in picker order, wrapping back to "no filter"
    pub fn cycle(current: Option<Category>) -> Option<Category> {
        match current {
            None => Some(Category::ALL[0]),
            Some(category) => {
                let index = Category::ALL.iter().position(|c| *c == category).unwrap_or(0);
                Category::ALL.get(index + 1).copied()
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .find(|c| c.as_str() == lower)
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str_case_insensitive() {
        assert_eq!("text".parse::<Category>().unwrap(), Category::Text);
        assert_eq!("Multimodal".parse::<Category>().unwrap(), Category::Multimodal);
        assert_eq!(" CODE ".parse::<Category>().unwrap(), Category::Code);
        assert!("music".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Analytics).unwrap();
        assert_eq!(json, "\"analytics\"");

        let parsed: Category = serde_json::from_str("\"video\"").unwrap();
        assert_eq!(parsed, Category::Video);
    }

    #[test]
    fn test_parse_filter_treats_unknown_as_none() {
        assert_eq!(Category::parse_filter(""), None);
        assert_eq!(Category::parse_filter("   "), None);
        assert_eq!(Category::parse_filter("spreadsheets"), None);
        assert_eq!(Category::parse_filter("audio"), Some(Category::Audio));
    }

    #[test]
    fn test_parse_filter_is_exact() {
        assert_eq!(Category::parse_filter("IMAGE"), None);
        assert_eq!(Category::parse_filter("Image"), None);
        assert_eq!(Category::parse_filter(" image"), None);
        assert_eq!(Category::parse_filter("image"), Some(Category::Image));
    }

    #[test]
    fn test_cycle_walks_all_then_clears() {
        let mut current = None;
        let mut seen = Vec::new();
        for _ in 0..Category::ALL.len() {
            current = Category::cycle(current);
            seen.push(current.unwrap());
        }
        assert_eq!(seen, Category::ALL.to_vec());
        assert_eq!(Category::cycle(current), None);
    }

    #[test]
    fn test_labels_match_storage_values() {
        for category in Category::ALL {
            assert_eq!(category.label().to_lowercase(), category.as_str());
        }
    }
}
