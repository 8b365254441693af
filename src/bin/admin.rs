//! CLI administration tool for vilinks.
//!
//! Manages links and inspects the database directly, without going through
//! the web pages. Uses the same configuration variables as the server.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- list
//!
//! # Add a link
//! cargo run --bin admin -- add docs https://example.com/docs --description "Team docs"
//!
//! # Remove a link (asks for confirmation unless -y)
//! cargo run --bin admin -- remove docs
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check or create the database
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db init
//! ```

use vilinks::application::services::{LinkInput, LinkService};
use vilinks::config::{self, Config};
use vilinks::error::AppError;
use vilinks::infrastructure::persistence::{SqliteLinkRepository, Store, database_exists};
use vilinks::web::views::{StatsView, format_timestamp};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

type Service = LinkService<SqliteLinkRepository>;

/// CLI tool for managing vilinks.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List all links, newest first
    List,

    /// Add a link
    Add {
        /// Alias, e.g. "docs"
        slug: String,

        /// Destination URL (http or https)
        url: String,

        /// Free-form description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Remove a link
    Remove {
        /// Alias to remove
        slug: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check that the database file exists and answers queries
    Check,

    /// Create the database file and schema if missing
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &config).await?,
        command => {
            let store = open_store(&config).await?;
            let service = LinkService::new(Arc::new(SqliteLinkRepository::new(store.clone())));

            let outcome = match command {
                Commands::List => list_links(&service, &config).await,
                Commands::Add {
                    slug,
                    url,
                    description,
                } => add_link(&service, &config, LinkInput::new(slug, url, description)).await,
                Commands::Remove { slug, yes } => remove_link(&service, &slug, yes).await,
                Commands::Stats => show_stats(&service).await,
                Commands::Db { .. } => Ok(()),
            };

            store.close().await;
            outcome?;
        }
    }

    Ok(())
}

/// Opens the configured database, creating the schema when missing.
async fn open_store(config: &Config) -> Result<Store> {
    let store = Store::open(&config.store_options())
        .await
        .with_context(|| format!("Failed to open {}", config.database_path.display()))?;
    store
        .initialize()
        .await
        .context("Failed to apply database migrations")?;
    Ok(store)
}

/// Prints every link with its hit count.
async fn list_links(service: &Service, config: &Config) -> Result<()> {
    let links = service.list_links().await?;

    if links.is_empty() {
        println!("{}", "No links yet".yellow());
        return Ok(());
    }

    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let prefix = config.base_prefix();
    for link in &links {
        let last_hit = link
            .last_hit_at
            .as_ref()
            .map(format_timestamp)
            .unwrap_or_else(|| "never".to_string());

        println!(
            "  {} → {}",
            format!("{}{}", prefix, link.slug).cyan().bold(),
            link.url.bright_white()
        );
        if !link.description.is_empty() {
            println!("    {}", link.description);
        }
        println!(
            "    {} hits, last {}, created {}",
            link.hit_count.to_string().bright_green(),
            last_hit.bright_black(),
            format_timestamp(&link.created_at).bright_black()
        );
    }
    println!();

    Ok(())
}

/// Creates a link, applying the same rules as the web form.
async fn add_link(service: &Service, config: &Config, input: LinkInput) -> Result<()> {
    match service.create_link(input).await {
        Ok(link) => {
            println!(
                "{} {}{} → {}",
                "✅ Added".green().bold(),
                config.base_prefix(),
                link.slug,
                link.url
            );
            Ok(())
        }
        Err(AppError::Validation(errors)) => {
            for error in &errors {
                println!("{} {}", "❌".red(), error.red());
            }
            anyhow::bail!("Link was not added")
        }
        Err(e) => Err(e.into()),
    }
}

/// Deletes a link after confirmation.
async fn remove_link(service: &Service, slug: &str, yes: bool) -> Result<()> {
    let link = match service.get_link(slug).await {
        Ok(link) => link,
        Err(AppError::NotFound(_)) => {
            println!("{}", format!("⚠️  No link named '{}'", slug).yellow());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("  Alias: {}", link.slug.cyan());
    println!("  URL:   {}", link.url.bright_white());
    println!("  Hits:  {}", link.hit_count.to_string().bright_black());
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Remove this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.delete_link(slug).await?;

    println!("{}", "✅ Link removed".green().bold());

    Ok(())
}

/// Displays totals and latest activity.
async fn show_stats(service: &Service) -> Result<()> {
    let stats = service.stats().await?;
    if stats.is_empty() {
        println!("{}", "No links yet".yellow());
        return Ok(());
    }
    let stats = StatsView::from(&stats);

    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();
    println!(
        "  Links:          {}",
        stats.total_links.to_string().bright_green().bold()
    );
    println!(
        "  Hits:           {}",
        stats.total_hits.to_string().bright_green().bold()
    );
    println!("  Latest created: {}", stats.latest_created.bright_white());
    println!("  Latest hit:     {}", stats.latest_hit.bright_white());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    let path = &config.database_path;

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database...".bright_blue());

            if !database_exists(path) {
                println!(
                    "{}",
                    format!("⚠️  {} does not exist (run `admin db init`)", path.display())
                        .yellow()
                );
                return Ok(());
            }

            let store = Store::open(&config.store_options())
                .await
                .with_context(|| format!("Failed to open {}", path.display()))?;
            store.ping().await.context("Database did not answer")?;
            let mode = store.journal_mode().await?;
            store.close().await;

            println!("  File:         {}", path.display().to_string().bright_white());
            println!("  Journal mode: {}", mode.bright_white());
            println!("{}", "✅ Database OK".green().bold());
        }
        DbAction::Init => {
            let store = open_store(config).await?;
            store.close().await;

            println!(
                "{} {}",
                "✅ Database ready at".green().bold(),
                path.display()
            );
        }
    }

    Ok(())
}
