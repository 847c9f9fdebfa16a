use clap::{Args, Parser, Subcommand};

use crate::config::StorageArgs;
use crate::entities::{Category, ToolPatch};
use crate::schema::ToolDraft;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Browse, edit and compare a catalog of AI tools",
    long_about = "Keeps a catalog of AI tools in a local SQLite file. Without a subcommand the terminal UI starts."
)]
pub struct Cli {
    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Interactive terminal UI (default)
    Ui,
    /// List tools matching a search
    List {
        #[arg(short, long, default_value = "", help = "Text to search in name, description, developer and tags")]
        query: String,
        #[arg(short, long, default_value = "", help = "Only tools in this category")]
        category: String,
        #[arg(short, long, default_value = "nameAsc", help = "nameAsc, nameDesc, dateDesc, dateAsc or ratingDesc")]
        sort: String,
        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },
    /// Show every field of one tool
    Show { id: String },
    /// Add a tool
    Add(AddArgs),
    /// Change fields of a tool
    Edit(EditArgs),
    /// Delete a tool
    Remove { id: String },
    /// Side-by-side comparison of tools
    Compare {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
    /// Categories with tool counts
    Categories,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub url: String,
    #[arg(long)]
    pub developer: String,
    #[arg(long)]
    pub category: String,
    #[arg(long = "tag", value_name = "TAG", help = "Repeat for several tags")]
    pub tags: Vec<String>,
    #[arg(long)]
    pub rating: Option<f64>,
    #[arg(long)]
    pub pricing: Option<String>,
    #[arg(long)]
    pub api_access: bool,
}

impl AddArgs {
    pub fn into_draft(self) -> ToolDraft {
        let mut draft = ToolDraft {
            name: self.name,
            description: self.description,
            url: self.url,
            developer: self.developer,
            category: self.category,
            tags: Vec::new(),
            rating: self.rating,
            pricing: self.pricing,
            api_access: self.api_access,
        };
        for tag in &self.tags {
            draft.add_tag(tag);
        }
        draft
    }
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct EditArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub developer: Option<String>,
    #[arg(long)]
    pub category: Option<Category>,
    #[arg(long = "tag", value_name = "TAG", help = "Replaces all tags; repeat for several")]
    pub tags: Vec<String>,
    #[arg(long, conflicts_with = "clear_rating")]
    pub rating: Option<f64>,
    #[arg(long)]
    pub clear_rating: bool,
    #[arg(long)]
    pub pricing: Option<String>,
    #[arg(long)]
    pub api_access: Option<bool>,
}

impl EditArgs {
    pub fn to_patch(&self) -> ToolPatch {
        let rating = if self.clear_rating {
            Some(None)
        } else {
            self.rating.map(Some)
        };

        let tags = if self.tags.is_empty() {
            None
        } else {
            let mut draft = ToolDraft::default();
            for tag in &self.tags {
                draft.add_tag(tag);
            }
            Some(draft.tags)
        };

        ToolPatch {
            name: self.name.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            developer: self.developer.clone(),
            category: self.category,
            tags,
            rating,
            pricing: self
                .pricing
                .clone()
                .map(|p| if p.trim().is_empty() { None } else { Some(p) }),
            api_access: self.api_access,
        }
    }
}
