// ↕️ Sort policy - ordering for query results
//
// Stateless. The store never sorts; views call `sort_tools` on what
// `ToolStore::query` returns. All orderings are stable, so ties keep the
// collection's insertion order.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::entities::Tool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "nameAsc")]
    NameAsc,
    #[serde(rename = "nameDesc")]
    NameDesc,
    #[serde(rename = "dateDesc")]
    NewestFirst,
    #[serde(rename = "dateAsc")]
    OldestFirst,
    #[serde(rename = "ratingDesc")]
    RatingDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::NewestFirst,
        SortKey::OldestFirst,
        SortKey::RatingDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "nameAsc",
            SortKey::NameDesc => "nameDesc",
            SortKey::NewestFirst => "dateDesc",
            SortKey::OldestFirst => "dateAsc",
            SortKey::RatingDesc => "ratingDesc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
            SortKey::NewestFirst => "Newest First",
            SortKey::OldestFirst => "Oldest First",
            SortKey::RatingDesc => "Rating (High to Low)",
        }
    }

    /// Unrecognized keys fall back to the default order
    pub fn parse_or_default(value: &str) -> SortKey {
        value.parse().unwrap_or_default()
    }

    pub fn next(&self) -> SortKey {
        let index = SortKey::ALL.iter().position(|k| k == self).unwrap_or(0);
        SortKey::ALL[(index + 1) % SortKey::ALL.len()]
    }

    pub fn compare(&self, a: &Tool, b: &Tool) -> Ordering {
        match self {
            SortKey::NameAsc => compare_names(&a.name, &b.name),
            SortKey::NameDesc => compare_names(&b.name, &a.name),
            SortKey::NewestFirst => compare_created(b, a),
            SortKey::OldestFirst => compare_created(a, b),
            SortKey::RatingDesc => b.rating_or_zero().total_cmp(&a.rating_or_zero()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "nameasc" | "name" => Ok(SortKey::NameAsc),
            "namedesc" => Ok(SortKey::NameDesc),
            "datedesc" | "newest" | "newestfirst" => Ok(SortKey::NewestFirst),
            "dateasc" | "oldest" | "oldestfirst" => Ok(SortKey::OldestFirst),
            "ratingdesc" | "rating" => Ok(SortKey::RatingDesc),
            _ => Err(UnknownSortKey(s.to_string())),
        }
    }
}

/// Primary collation key: accents stripped (NFD minus combining marks),
/// then lowercased.
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Locale-style name order. Accents and case are ignored first
/// ("Eagle" < "Éclair" < "Zeta"); then unaccented before accented; then
/// lowercase before uppercase ("apple" < "Apple" < "banana").
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| {
            a.chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase))
        })
        .then_with(|| b.cmp(a))
}

/// Ascending by creation time; unparseable timestamps go last.
fn compare_created(a: &Tool, b: &Tool) -> Ordering {
    match (a.created_at_time(), b.created_at_time()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort of tools (owned or borrowed) by `key`
pub fn sort_tools<T: Borrow<Tool>>(tools: &mut [T], key: SortKey) {
    tools.sort_by(|a, b| key.compare(a.borrow(), b.borrow()));
}
