//! Pagewright CLI
//!
//! Thin wrapper around pagewright-core functions for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Create an About record
//! pagewright about create "Our Story" "We started in a garage."
//!
//! # List all records
//! pagewright about list
//!
//! # Show one record
//! pagewright about show <id>
//!
//! # Update fields of a record
//! pagewright about update <id> --title "New Title"
//!
//! # Delete a record
//! pagewright about delete <id>
//!
//! # Upload an image and print the stored URL
//! pagewright upload photo.jpg
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use pagewright_core::{AboutDraft, AboutRecord, ContentEngine};
use tracing_subscriber::EnvFilter;

/// Pagewright - About page content manager
#[derive(Parser)]
#[command(name = "pagewright")]
#[command(version = "0.1.0")]
#[command(about = "Pagewright - local-first About page content manager")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: platform data dir + "pagewright")
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Base URL of the site serving POST /api/upload
    #[arg(short, long, global = true, default_value = "http://localhost:3000")]
    upload_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// About record management
    About {
        #[command(subcommand)]
        action: AboutAction,
    },

    /// Upload an image file and print the stored URL
    Upload {
        /// Path of the image file to upload
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum AboutAction {
    /// Create a new About record
    Create {
        /// Page title
        title: String,
        /// Page body text
        content: String,
        /// Image URL to store with the record
        #[arg(long)]
        image: Option<String>,
        /// Create the record inactive
        #[arg(long)]
        inactive: bool,
    },

    /// List all About records, newest first
    List,

    /// Show one About record in full
    Show {
        /// Record id
        id: String,
    },

    /// Update fields of an About record
    Update {
        /// Record id
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New body text
        #[arg(long)]
        content: Option<String>,
        /// New image URL
        #[arg(long)]
        image: Option<String>,
        /// Remove the stored image URL
        #[arg(long, conflicts_with = "image")]
        clear_image: bool,
        /// Set the active flag
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete an About record
    Delete {
        /// Record id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pagewright")
    });
    tracing::debug!("using data dir {:?}", data_dir);
    let engine = ContentEngine::new(&data_dir, &cli.upload_url)?;

    match cli.command {
        Commands::About { action } => run_about(&engine, action),
        Commands::Upload { file } => run_upload(&engine, file).await,
    }
}

fn run_about(engine: &ContentEngine, action: AboutAction) -> Result<()> {
    match action {
        AboutAction::Create {
            title,
            content,
            image,
            inactive,
        } => {
            let draft = AboutDraft {
                title,
                content,
                image,
                is_active: !inactive,
            };
            let record = engine.create_about(&draft)?;
            println!("Created About record {}", record.id);
            Ok(())
        }

        AboutAction::List => {
            let records = engine.list_about()?;
            if records.is_empty() {
                println!("No About records.");
                return Ok(());
            }
            for record in records {
                println!(
                    "{} {}  {}  updated {}",
                    if record.is_active { "●" } else { "○" },
                    record.id,
                    record.title,
                    format_timestamp(record.updated_at),
                );
            }
            Ok(())
        }

        AboutAction::Show { id } => {
            let record = engine
                .get_about(&id)?
                .ok_or_else(|| anyhow!("About record not found: {id}"))?;
            print_record(&record);
            Ok(())
        }

        AboutAction::Update {
            id,
            title,
            content,
            image,
            clear_image,
            active,
        } => {
            let existing = engine
                .get_about(&id)?
                .ok_or_else(|| anyhow!("About record not found: {id}"))?;

            let draft = AboutDraft {
                title: title.unwrap_or(existing.title),
                content: content.unwrap_or(existing.content),
                image: if clear_image {
                    None
                } else {
                    image.or(existing.image)
                },
                is_active: active.unwrap_or(existing.is_active),
            };
            let record = engine.update_about(&id, &draft)?;
            println!("Updated About record {}", record.id);
            Ok(())
        }

        AboutAction::Delete { id } => {
            engine.delete_about(&id)?;
            println!("Deleted About record {id}");
            Ok(())
        }
    }
}

async fn run_upload(engine: &ContentEngine, file: PathBuf) -> Result<()> {
    let bytes = std::fs::read(&file)?;
    let file_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("file has no usable name: {}", file.display()))?;

    let url = engine.upload_image(file_name, bytes).await?;
    println!("{url}");
    Ok(())
}

fn print_record(record: &AboutRecord) {
    println!("id:         {}", record.id);
    println!("title:      {}", record.title);
    println!("active:     {}", record.is_active);
    println!("image:      {}", record.image.as_deref().unwrap_or("-"));
    println!("created_at: {}", format_timestamp(record.created_at));
    println!("updated_at: {}", format_timestamp(record.updated_at));
    println!();
    println!("{}", record.content);
}

fn format_timestamp(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}
