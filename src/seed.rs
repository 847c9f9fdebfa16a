// 🌱 Seed dataset - what a fresh catalog starts with
//
// Injected into ToolStore::load; used whenever storage holds no readable
// catalog.

use anyhow::{Context, Result};
use std::path::Path;

use crate::entities::{Category, Tool};

struct SeedTool {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    url: &'static str,
    developer: &'static str,
    category: Category,
    tags: &'static [&'static str],
    rating: f64,
    pricing: &'static str,
    api_access: bool,
    created_at: &'static str,
}

impl SeedTool {
    fn to_tool(&self) -> Tool {
        Tool {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            url: self.url.to_string(),
            developer: self.developer.to_string(),
            category: self.category,
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            rating: Some(self.rating),
            pricing: Some(self.pricing.to_string()),
            api_access: self.api_access,
            created_at: self.created_at.to_string(),
        }
    }
}

const BUILTIN: [SeedTool; 8] = [
    SeedTool {
        id: "1",
        name: "ChatGPT",
        description: "AI-powered chatbot developed by OpenAI, capable of generating human-like text based on context and past conversations.",
        url: "https://chat.openai.com",
        developer: "OpenAI",
        category: Category::Text,
        tags: &["chatbot", "language model", "GPT-4"],
        rating: 4.9,
        pricing: "Free / $20 per month",
        api_access: true,
        created_at: "2022-11-30T12:00:00Z",
    },
    SeedTool {
        id: "2",
        name: "DALL-E 3",
        description: "AI system that creates realistic images and art from natural language descriptions.",
        url: "https://openai.com/dall-e-3",
        developer: "OpenAI",
        category: Category::Image,
        tags: &["image generation", "art", "creative"],
        rating: 4.7,
        pricing: "Paid with credits",
        api_access: true,
        created_at: "2023-03-15T09:30:00Z",
    },
    SeedTool {
        id: "3",
        name: "Midjourney",
        description: "AI art generator that creates images from textual descriptions using a proprietary diffusion model.",
        url: "https://www.midjourney.com",
        developer: "Midjourney, Inc.",
        category: Category::Image,
        tags: &["image generation", "art", "discord"],
        rating: 4.8,
        pricing: "$10-$60 per month",
        api_access: false,
        created_at: "2022-07-12T15:45:00Z",
    },
    SeedTool {
        id: "4",
        name: "Synthesia",
        description: "AI video generation platform that can create videos with virtual presenters speaking your script in different languages.",
        url: "https://www.synthesia.io",
        developer: "Synthesia",
        category: Category::Video,
        tags: &["video generation", "virtual presenters", "business"],
        rating: 4.5,
        pricing: "$30+ per month",
        api_access: true,
        created_at: "2022-02-10T11:20:00Z",
    },
    SeedTool {
        id: "5",
        name: "GitHub Copilot",
        description: "AI pair programmer that suggests code completions based on context in your editor.",
        url: "https://github.com/features/copilot",
        developer: "GitHub (Microsoft)",
        category: Category::Code,
        tags: &["coding", "development", "autocomplete"],
        rating: 4.6,
        pricing: "$10 per month",
        api_access: false,
        created_at: "2022-06-21T08:15:00Z",
    },
    SeedTool {
        id: "6",
        name: "Claude",
        description: "A family of AI assistants created by Anthropic that are designed to be helpful, harmless, and honest.",
        url: "https://www.anthropic.com/claude",
        developer: "Anthropic",
        category: Category::Text,
        tags: &["chatbot", "language model", "assistant"],
        rating: 4.7,
        pricing: "Free / $20+ per month",
        api_access: true,
        created_at: "2023-03-14T10:00:00Z",
    },
    SeedTool {
        id: "7",
        name: "ElevenLabs",
        description: "AI voice technology for creating realistic speech synthesis with emotional and tonal control.",
        url: "https://elevenlabs.io",
        developer: "ElevenLabs",
        category: Category::Audio,
        tags: &["text-to-speech", "voice", "narration"],
        rating: 4.6,
        pricing: "Free tier / $5-$330 per month",
        api_access: true,
        created_at: "2023-01-23T14:30:00Z",
    },
    SeedTool {
        id: "8",
        name: "Runway Gen-2",
        description: "Video generation model that can create new videos from text, images, or other videos.",
        url: "https://runwayml.com",
        developer: "Runway",
        category: Category::Video,
        tags: &["video generation", "AI video", "creative"],
        rating: 4.5,
        pricing: "$15-$95 per month",
        api_access: true,
        created_at: "2023-05-10T16:45:00Z",
    },
];

/// The eight sample tools a new catalog starts with
pub fn builtin_tools() -> Vec<Tool> {
    BUILTIN.iter().map(SeedTool::to_tool).collect()
}

/// Load a replacement seed from a JSON file (same format as the stored record)
pub fn load_seed_file(path: &Path) -> Result<Vec<Tool>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let tools = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
    Ok(tools)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_tools_shape() {
        let tools = builtin_tools();
        assert_eq!(tools.len(), 8);

        let ids: HashSet<&str> = tools.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 8, "seed ids must be unique");

        for tool in &tools {
            assert!(tool.created_at_time().is_some(), "{} has a bad timestamp", tool.name);
            assert!(!tool.tags.is_empty());
        }
    }

    #[test]
    fn test_load_seed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");

        let tools = builtin_tools()[..2].to_vec();
        std::fs::write(&path, serde_json::to_string(&tools).unwrap()).unwrap();

        assert_eq!(load_seed_file(&path).unwrap(), tools);
    }

    #[test]
    fn test_load_seed_file_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_seed_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse seed file"));
    }
}
