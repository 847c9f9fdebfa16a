use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::entities::Tool;
use crate::seed::{builtin_tools, load_seed_file};
use crate::storage::SqliteStore;
use crate::store::{ToolStore, STORAGE_KEY};

/// Storage options shared by the CLI and the server
#[derive(Args, Debug, Clone)]
pub struct StorageArgs {
    #[arg(
        long = "db",
        env = "TOOL_CATALOG_DB",
        default_value = ".tool-catalog/catalog.db",
        value_name = "PATH",
        help = "SQLite file holding the catalog"
    )]
    pub db_path: PathBuf,

    #[arg(
        long,
        env = "TOOL_CATALOG_KEY",
        default_value = STORAGE_KEY,
        value_name = "KEY",
        help = "Key the catalog is stored under"
    )]
    pub storage_key: String,

    #[arg(
        long,
        env = "TOOL_CATALOG_SEED",
        value_name = "FILE",
        help = "JSON file used instead of the built-in sample tools when storage is empty"
    )]
    pub seed: Option<PathBuf>,

    #[arg(
        long,
        env = "TOOL_CATALOG_LOG_FILE",
        value_name = "FILE",
        help = "Append logs to FILE instead of stderr"
    )]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct Configuration {
    pub db_path: PathBuf,
    pub storage_key: String,
    pub seed_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl From<StorageArgs> for Configuration {
    fn from(args: StorageArgs) -> Self {
        Configuration {
            db_path: args.db_path,
            storage_key: args.storage_key,
            seed_file: args.seed,
            log_file: args.log_file,
        }
    }
}

impl Configuration {
    /// Fallback dataset: the seed file if configured, else the built-in tools
    pub fn seed(&self) -> Result<Vec<Tool>> {
        match &self.seed_file {
            Some(path) => load_seed_file(path),
            None => Ok(builtin_tools()),
        }
    }

    pub fn open_store(&self) -> Result<ToolStore> {
        let storage = SqliteStore::open(&self.db_path)
            .with_context(|| format!("Failed to open catalog storage at {}", self.db_path.display()))?;
        let seed = self.seed()?;

        Ok(ToolStore::load_with_key(Box::new(storage), &self.storage_key, seed))
    }

    /// Where the terminal UI logs when no log file is configured
    pub fn ui_log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.db_path.with_extension("log"))
    }
}
