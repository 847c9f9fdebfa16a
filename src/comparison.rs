// ⚖️ Comparison - side-by-side view of the selected tools

use serde::Serialize;

use crate::entities::Tool;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub values: Vec<String>,
}

/// One column per tool, one row per feature
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonTable {
    pub tool_ids: Vec<String>,
    pub tool_names: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn build(tools: &[&Tool]) -> Self {
        let row = |label: &'static str, cell: fn(&Tool) -> String| ComparisonRow {
            label,
            values: tools.iter().map(|t| cell(t)).collect(),
        };

        ComparisonTable {
            tool_ids: tools.iter().map(|t| t.id.clone()).collect(),
            tool_names: tools.iter().map(|t| t.name.clone()).collect(),
            rows: vec![
                row("Category", |t| t.category.label().to_string()),
                row("Developer", |t| t.developer.clone()),
                row("Rating", rating_cell),
                row("Tags", |t| {
                    if t.tags.is_empty() {
                        "No tags".to_string()
                    } else {
                        t.tags.join(", ")
                    }
                }),
                row("API Access", |t| (if t.api_access { "Yes" } else { "No" }).to_string()),
                row("Pricing", |t| match t.pricing.as_deref().map(str::trim) {
                    Some(p) if !p.is_empty() => p.to_string(),
                    _ => "Not specified".to_string(),
                }),
                row("Website", |t| t.url.clone()),
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tool_ids.is_empty()
    }

    pub fn row(&self, label: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

/// Unrated and zero-rated tools both show "N/A"
pub fn rating_cell(tool: &Tool) -> String {
    match tool.rating {
        Some(r) if r != 0.0 && !r.is_nan() => format!("{}", r),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::builtin_tools;

    #[test]
    fn test_build_comparison_table() {
        let tools = builtin_tools();
        let selected = vec![&tools[0], &tools[2]];

        let table = ComparisonTable::build(&selected);

        assert_eq!(table.tool_names, vec!["ChatGPT", "Midjourney"]);
        assert_eq!(table.row("Developer").unwrap().values, vec!["OpenAI", "Midjourney, Inc."]);
        assert_eq!(table.row("API Access").unwrap().values, vec!["Yes", "No"]);
        assert_eq!(table.row("Rating").unwrap().values, vec!["4.9", "4.8"]);
        assert_eq!(table.row("Category").unwrap().values, vec!["Text", "Image"]);
    }

    #[test]
    fn test_placeholders_for_missing_values() {
        let mut tool = builtin_tools().remove(0);
        tool.rating = None;
        tool.pricing = Some("  ".to_string());
        tool.tags.clear();

        let table = ComparisonTable::build(&[&tool]);

        assert_eq!(table.row("Rating").unwrap().values, vec!["N/A"]);
        assert_eq!(table.row("Pricing").unwrap().values, vec!["Not specified"]);
        assert_eq!(table.row("Tags").unwrap().values, vec!["No tags"]);
    }

    #[test]
    fn test_zero_rating_shows_na() {
        let mut tool = builtin_tools().remove(0);
        tool.rating = Some(0.0);
        assert_eq!(rating_cell(&tool), "N/A");
    }

    #[test]
    fn test_serializes_camel_case() {
        let tools = builtin_tools();
        let json = serde_json::to_value(ComparisonTable::build(&[&tools[0]])).unwrap();

        assert_eq!(json["toolIds"], serde_json::json!(["1"]));
        assert_eq!(json["toolNames"], serde_json::json!(["ChatGPT"]));
        assert!(json.get("tool_names").is_none());
    }

    #[test]
    fn test_empty_selection() {
        let table = ComparisonTable::build(&[]);
        assert!(table.is_empty());
        assert!(table.rows.iter().all(|r| r.values.is_empty()));
    }
}
