// AI Tool Catalog - Web Server
// REST API over the catalog with Axum

use anyhow::{Context, Result};
use clap::Parser;

use tool_catalog::api::{router, AppState};
use tool_catalog::{logging, Configuration, StorageArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Serve the AI tool catalog over HTTP")]
struct ServerCli {
    #[command(flatten)]
    storage: StorageArgs,

    #[arg(
        long,
        env = "TOOL_CATALOG_ADDR",
        default_value = "0.0.0.0:3000",
        help = "Address to listen on"
    )]
    addr: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = ServerCli::parse();
    let config = Configuration::from(cli.storage);
    logging::init(config.log_file.as_deref())?;

    let store = config.open_store()?;
    tracing::info!(
        db = %config.db_path.display(),
        key = %config.storage_key,
        tools = store.len(),
        "catalog opened"
    );

    let app = router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(&cli.addr)
        .await
        .with_context(|| format!("Failed to bind to {}", cli.addr))?;

    tracing::info!(addr = %cli.addr, "server running, API under /api");

    axum::serve(listener, app)
        .await
        .context("Server stopped unexpectedly")?;

    Ok(())
}
