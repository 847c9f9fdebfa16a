// AI Tool Catalog - Core Library
// Exposes all modules for use in the CLI, the terminal UI, the API server, and tests

pub mod entities;   // Tool, ToolPatch, Category
pub mod error;      // CatalogError, PersistenceWarning
pub mod schema;     // Form drafts and field validation
pub mod storage;    // Key-value persistence (SQLite + in-memory)
pub mod store;      // ToolStore - the collection, selection and subscriptions
pub mod sort;       // Sort policy
pub mod comparison; // Side-by-side comparison table
pub mod seed;       // Built-in sample tools
pub mod config;     // Storage configuration (flags + env)
pub mod cli;        // Command line definition
pub mod logging;    // tracing subscriber setup

#[cfg(feature = "tui")]
pub mod ui;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use comparison::{ComparisonRow, ComparisonTable};
pub use config::{Configuration, StorageArgs};
pub use entities::{Category, Tool, ToolPatch, UnknownCategory};
pub use error::{CatalogError, PersistenceWarning};
pub use schema::{new_tool_id, now_timestamp, FieldError, ToolDraft, ValidationResult};
pub use seed::{builtin_tools, load_seed_file};
pub use sort::{sort_tools, SortKey, UnknownSortKey};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
pub use store::{SaveStatus, StoreEvent, SubscriptionId, ToolStore, STORAGE_KEY};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
