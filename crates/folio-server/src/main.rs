//! Folio server binary

use anyhow::Context;
use clap::Parser;
use folio_core::config::Config;
use folio_core::media::MediaStore;
use folio_core::storage::{Database, DatabaseConfig};
use folio_server::{AppState, serve};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio-server")]
#[command(author, version, about = "Folio portfolio site server", long_about = None)]
struct Cli {
    /// Address to bind (overrides configuration)
    #[arg(long)]
    bind: Option<String>,

    /// Database file (overrides configuration)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Media directory (overrides configuration)
    #[arg(long)]
    media_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("folio_core=info".parse()?)
                .add_directive("folio_server=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;

    let database_path = cli.database.unwrap_or_else(|| config.database_path());
    let media_dir = cli.media_dir.unwrap_or_else(|| config.media_dir());
    let addr = cli.bind.unwrap_or_else(|| config.bind_addr());

    let db = Database::new(DatabaseConfig::with_path(database_path)).await?;
    let media = MediaStore::new(media_dir);
    let state = AppState::new(db, media, config.site.clone());

    serve(state, &addr).await
}
