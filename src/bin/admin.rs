//! CLI administration tool for tinylink.
//!
//! Works directly against the database, so it can see and repair records the
//! HTTP API hides (soft-deleted links).
//!
//! # Usage
//!
//! ```bash
//! # List live links
//! cargo run --bin admin -- link list
//!
//! # List every link, deleted ones included
//! cargo run --bin admin -- link list --all
//!
//! # Inspect a link in any state
//! cargo run --bin admin -- link show abc123
//!
//! # Undo a soft delete
//! cargo run --bin admin -- link restore abc123
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use tinylink::domain::entities::Link;
use tinylink::domain::repositories::LinkRepository;
use tinylink::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tinylink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and repair links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List links, newest first
    List {
        /// Include soft-deleted links
        #[arg(short, long)]
        all: bool,
    },

    /// Show one link regardless of its deletion state
    Show { code: String },

    /// Restore a soft-deleted link
    Restore {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));

    match action {
        LinkAction::List { all } => list_links(repo, all).await?,
        LinkAction::Show { code } => show_link(repo, &code).await?,
        LinkAction::Restore { code, yes } => restore_link(repo, &code, yes).await?,
    }

    Ok(())
}

/// Prints a table of links.
///
/// # Output Format
///
/// ```text
/// 🔗 Links
///
///   Code       Clicks   Created            Status   URL
///   ────────────────────────────────────────────────────────────────────
///   k3v91x     12       2026-01-15 10:30   LIVE     https://example.com
///   abc        0        2026-01-14 09:12   DELETED  https://a.com
/// ```
async fn list_links(repo: Arc<PgLinkRepository>, all: bool) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let links = if all {
        repo.list_all().await
    } else {
        repo.list_live().await
    }
    .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<10} {:<8} {:<18} {:<8} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<10} {:<8} {:<18} {:<8} {}",
            link.code.cyan(),
            link.clicks.to_string(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status_label(link),
            link.url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints every stored field of one link.
async fn show_link(repo: Arc<PgLinkRepository>, code: &str) -> Result<()> {
    let link = repo
        .find_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Link not found")?;

    println!("  Code:         {}", link.code.cyan());
    println!("  URL:          {}", link.url);
    println!("  Clicks:       {}", link.clicks.to_string().bright_green());
    println!(
        "  Last clicked: {}",
        link.last_clicked
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "never".to_string())
    );
    println!("  Created:      {}", link.created_at.to_rfc3339());
    println!("  Status:       {}", status_label(&link));

    Ok(())
}

/// Clears the deleted flag of a link after confirmation.
async fn restore_link(repo: Arc<PgLinkRepository>, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "♻️  Restore Link".bright_blue().bold());
    println!();

    let link = repo
        .find_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Link not found")?;

    if link.is_live() {
        println!("{}", "⚠️  This link is not deleted".yellow());
        return Ok(());
    }

    println!("  Code: {}", link.code.cyan());
    println!("  URL:  {}", link.url);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Restore this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let restored = repo
        .restore(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to restore link: {}", e))?;

    if restored {
        println!("{}", "✅ Link restored".green().bold());
    } else {
        println!("{}", "⚠️  Link was restored concurrently".yellow());
    }

    Ok(())
}

fn status_label(link: &Link) -> ColoredString {
    if link.is_live() {
        "LIVE".green()
    } else {
        "DELETED".red()
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
