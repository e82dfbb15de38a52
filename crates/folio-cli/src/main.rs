//! Folio CLI - portfolio site administration

use anyhow::Context;
use clap::{Parser, Subcommand};
use folio_core::config::Config;
use folio_core::listing;
use folio_core::media::MediaStore;
use folio_core::project::validator::ProjectValidator;
use folio_core::project::{Category, Project, ProjectDraft, ProjectRepository};
use folio_core::storage::{Database, DatabaseConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Portfolio site administration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Database file (overrides configuration)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Media directory (overrides configuration)
    #[arg(long, global = true)]
    media_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind (overrides configuration)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Seed the store with sample projects
    Seed,

    /// Manage projects
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Run health check
    Doctor,
}

#[derive(Subcommand)]
enum ProjectAction {
    /// List all projects
    List {
        /// Narrow to a category key (WEB_DEV, SYS_DESIGN, TALK)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show project details
    Show { id: i64 },
    /// Add a new project
    Add {
        /// Project title
        title: String,
        /// Category key (WEB_DEV, SYS_DESIGN, TALK)
        #[arg(long)]
        category: String,
        /// Brief summary shown on the listing page
        #[arg(long)]
        summary: String,
        /// Role held on the project
        #[arg(long, default_value = "")]
        role: String,
        /// Project year
        #[arg(long)]
        year: u32,
        /// Whitespace-separated technology tokens
        #[arg(long)]
        stack: String,
        /// Source repository URL
        #[arg(long)]
        repository: Option<String>,
        #[arg(long, default_value = "")]
        challenge: String,
        /// Key features, one per line
        #[arg(long, default_value = "")]
        key_features: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Path to the hero image file
        #[arg(long)]
        image: PathBuf,
    },
    /// Delete a project
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file path
    Path,
    /// Show the active configuration
    Show,
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

    let database_path = cli
        .database
        .clone()
        .unwrap_or_else(|| config.database_path());
    let media_dir = cli.media_dir.clone().unwrap_or_else(|| config.media_dir());

    match cli.command {
        Commands::Serve { bind } => {
            let db = Database::new(DatabaseConfig::with_path(database_path)).await?;
            let media = MediaStore::new(media_dir);
            let state = folio_server::AppState::new(db, media, config.site.clone());
            let addr = bind.unwrap_or_else(|| config.bind_addr());
            folio_server::serve(state, &addr).await
        }

        Commands::Seed => {
            let db = Database::new(DatabaseConfig::with_path(database_path)).await?;
            let media = MediaStore::new(media_dir);
            let count = folio_core::seed::seed(&db, &media).await?;
            println!("Seeded {count} sample projects");
            Ok(())
        }

        Commands::Projects { action } => {
            let db = Database::new(DatabaseConfig::with_path(database_path)).await?;
            let media = MediaStore::new(media_dir);
            cmd_projects(&db, &media, action, cli.format).await
        }

        Commands::Config { action } => cmd_config(&config, action),

        Commands::Doctor => {
            let db = Database::new(DatabaseConfig::with_path(database_path)).await?;
            db.health_check().await?;
            let status = db.migration_status().await?;
            println!("Database OK (schema v{})", status.current_version);
            Ok(())
        }
    }
}

async fn cmd_projects(
    db: &Database,
    media: &MediaStore,
    action: ProjectAction,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let repo = ProjectRepository::new(db);

    match action {
        ProjectAction::List { category } => {
            let listing = listing::list(db, category.as_deref()).await?;
            match format {
                OutputFormat::Json => println!("{}", listing.cards_json),
                OutputFormat::Text => {
                    if listing.projects.is_empty() {
                        println!("No projects found");
                    }
                    for project in &listing.projects {
                        println!(
                            "{:>4}  {:<11} {:<5} {}",
                            project.id,
                            project.category.as_str(),
                            project.year,
                            project.title
                        );
                    }
                }
            }
            Ok(())
        }

        ProjectAction::Show { id } => {
            let project = repo
                .get(id)
                .await?
                .ok_or(folio_core::Error::ProjectNotFound(id))?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&project)?),
                OutputFormat::Text => print_project(&project),
            }
            Ok(())
        }

        ProjectAction::Add {
            title,
            category,
            summary,
            role,
            year,
            stack,
            repository,
            challenge,
            key_features,
            description,
            image,
        } => {
            let category = Category::parse(&category).ok_or_else(|| {
                folio_core::Error::Validation(format!(
                    "Unknown category '{category}'. Allowed: WEB_DEV, SYS_DESIGN, TALK"
                ))
            })?;

            let bytes = std::fs::read(&image)
                .with_context(|| format!("Failed to read image file: {}", image.display()))?;
            let filename = image
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("image");
            let stored = media.store_image(filename, &bytes)?;

            let draft = ProjectDraft {
                title,
                category,
                short_summary: summary,
                role,
                year,
                stack,
                repository,
                challenge,
                key_features,
                description,
                image: stored,
            };
            ProjectValidator::validate_draft(&draft)?;

            let project = repo.create(&draft).await?;
            println!("Created project {} '{}'", project.id, project.title);
            Ok(())
        }

        ProjectAction::Delete { id } => {
            if !repo.exists(id).await? {
                return Err(folio_core::Error::ProjectNotFound(id).into());
            }
            repo.delete(id).await?;
            println!("Deleted project {id}");
            Ok(())
        }
    }
}

fn print_project(project: &Project) {
    println!("{} ({})", project.title, project.id);
    println!("  Category:   {}", project.category.label());
    println!("  Year:       {}", project.year);
    if !project.role.is_empty() {
        println!("  Role:       {}", project.role);
    }
    println!("  Stack:      {}", project.tags().join(", "));
    if let Some(repository) = &project.repository {
        println!("  Repository: {repository}");
    }
    println!("  Image:      {}", project.image);
    println!();
    println!("  {}", project.short_summary);
}

fn cmd_config(config: &Config, action: ConfigAction) -> anyhow::Result<()> {
    match action {
        ConfigAction::Path => {
            println!("{}", Config::config_path()?.display());
            Ok(())
        }
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(config)?);
            Ok(())
        }
    }
}
