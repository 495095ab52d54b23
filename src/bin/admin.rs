//! CLI administration tool for the encyclopedia.
//!
//! Works directly on the entries directory, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # List all entries
//! cargo run --bin admin -- list
//!
//! # Print an entry as Markdown, or rendered
//! cargo run --bin admin -- show Python
//! cargo run --bin admin -- show Python --html
//!
//! # Search titles
//! cargo run --bin admin -- search py
//!
//! # Import a Markdown file as an entry
//! cargo run --bin admin -- import notes/Rust.md
//! cargo run --bin admin -- import draft.md --title "Rust" --yes
//! ```
//!
//! # Environment Variables
//!
//! - `ENTRIES_DIR` (optional): entries directory, default `entries`

use encyclopedia::application::services::{EntryService, SearchOutcome, SubmitOutcome};
use encyclopedia::domain::entities::EntrySubmission;
use encyclopedia::infrastructure::markdown::PulldownRenderer;
use encyclopedia::infrastructure::persistence::FsEntryRepository;
use encyclopedia::web::dto::EntryForm;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// CLI tool for managing encyclopedia entries.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Entries directory (overrides ENTRIES_DIR)
    #[arg(long, global = true)]
    entries_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List all entry titles
    List,

    /// Print an entry
    Show {
        /// Exact entry title
        title: String,

        /// Print rendered HTML instead of Markdown
        #[arg(long)]
        html: bool,
    },

    /// Search entry titles
    Search {
        /// Text to look for
        query: String,
    },

    /// Save a Markdown file as an entry
    Import {
        /// Markdown file to import
        file: PathBuf,

        /// Entry title (defaults to the file name without extension)
        #[arg(short, long)]
        title: Option<String>,

        /// Overwrite an existing entry without asking
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let entries_dir = cli
        .entries_dir
        .or_else(|| std::env::var("ENTRIES_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("entries"));

    let repository = FsEntryRepository::open(&entries_dir)
        .await
        .with_context(|| format!("Failed to open {}", entries_dir.display()))?;

    let service = EntryService::new(Arc::new(repository), Arc::new(PulldownRenderer::new()));

    match cli.command {
        Commands::List => handle_list(&service).await?,
        Commands::Show { title, html } => handle_show(&service, &title, html).await?,
        Commands::Search { query } => handle_search(&service, &query).await?,
        Commands::Import { file, title, yes } => {
            handle_import(&service, &file, title, yes).await?
        }
    }

    Ok(())
}

/// Prints every title.
async fn handle_list(service: &EntryService) -> Result<()> {
    let titles = service.list_titles().await?;

    if titles.is_empty() {
        println!("{}", "No entries found".yellow());
        return Ok(());
    }

    println!("{}", format!("Entries ({})", titles.len()).bold());
    for title in titles {
        println!("  {}", title.cyan());
    }

    Ok(())
}

/// Prints one entry as Markdown or HTML.
async fn handle_show(service: &EntryService, title: &str, html: bool) -> Result<()> {
    let Some(entry) = service.get_entry(title).await? else {
        bail!("No entry titled '{}'", title);
    };

    if html {
        print!("{}", service.render_markdown(&entry.content));
    } else {
        println!("{}", entry.content);
    }

    Ok(())
}

/// Runs the wiki search and prints the outcome.
async fn handle_search(service: &EntryService, query: &str) -> Result<()> {
    match service.search(query).await? {
        SearchOutcome::EmptyQuery => println!("{}", "Empty query".yellow()),
        SearchOutcome::ExactMatch { title } => {
            println!("{} {}", "Exact match:".green().bold(), title.cyan())
        }
        SearchOutcome::NoResults { query } => {
            println!("{}", format!("No titles contain '{}'", query).yellow())
        }
        SearchOutcome::Matches { query, titles } => {
            println!(
                "{}",
                format!("{} titles contain '{}'", titles.len(), query).bold()
            );
            for title in titles {
                println!("  {}", title.cyan());
            }
        }
    }

    Ok(())
}

/// Imports a file, asking before overwriting an existing entry.
async fn handle_import(
    service: &EntryService,
    file: &Path,
    title: Option<String>,
    yes: bool,
) -> Result<()> {
    let content = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let title = match title {
        Some(title) => title,
        None => file
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .context("Cannot derive a title from the file name; pass --title")?,
    };

    let form = EntryForm {
        title,
        content,
        ..EntryForm::default()
    };

    let submission = match form.into_submission() {
        Ok(submission) => submission,
        Err((_, errors)) => {
            for error in errors {
                eprintln!("{} {}: {}", "✗".red(), error.field, error.message);
            }
            bail!("Entry is not valid");
        }
    };

    let submission = match service.submit(submission).await? {
        SubmitOutcome::Saved { title } => {
            println!("{} Created '{}'", "✓".green(), title.cyan());
            return Ok(());
        }
        SubmitOutcome::AlreadyExists { submission } => submission,
    };

    let overwrite = yes
        || Confirm::new()
            .with_prompt(format!(
                "Entry '{}' already exists. Overwrite?",
                submission.title
            ))
            .default(false)
            .interact()?;

    if !overwrite {
        println!("{}", "Import cancelled".yellow());
        return Ok(());
    }

    let edit = EntrySubmission {
        edit: true,
        ..submission
    };
    if let SubmitOutcome::Saved { title } = service.submit(edit).await? {
        println!("{} Updated '{}'", "✓".green(), title.cyan());
    }

    Ok(())
}
