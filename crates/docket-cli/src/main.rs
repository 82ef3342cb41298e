//! `docket` — admin CLI for the precedent catalogue.
//!
//! Operates directly on the SQLite store, bypassing the HTTP server.
//!
//! # Usage
//!
//! ```
//! docket add --title "Smith v. Johnson" --case-number 2023-CV-001 \
//!   --year 2023 --court "Supreme Court" --description "..."
//! docket list
//! docket search "judicial review"
//! docket delete 3
//! docket seed
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use docket_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(name = "docket", about = "Precedent catalogue management tool")]
struct Cli {
  /// Path of the SQLite database file.
  #[arg(long, env = "DOCKET_STORE", default_value = "precedents.db")]
  store: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Add a new precedent.
  Add {
    /// Case title (must be unique).
    #[arg(long)]
    title:       String,
    #[arg(long)]
    case_number: String,
    #[arg(long)]
    year:        i32,
    /// Name of the issuing court.
    #[arg(long)]
    court:       String,
    #[arg(long)]
    description: String,
    /// Comma-separated keywords.
    #[arg(long)]
    keywords:    Option<String>,
    /// Statute/section cross-reference.
    #[arg(long)]
    section:     Option<String>,
    /// Article cross-reference.
    #[arg(long)]
    article:     Option<String>,
  },
  /// List all precedents.
  List,
  /// Delete a precedent by id.
  Delete {
    id: i64,
  },
  /// Search precedents by free-text query.
  Search {
    query: String,
  },
  /// Load the sample precedents into an empty catalogue.
  Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  let store = SqliteStore::open(&cli.store).await?;

  match cli.command {
    Command::Add {
      title,
      case_number,
      year,
      court,
      description,
      keywords,
      section,
      article,
    } => {
      commands::add(&store, docket_core::precedent::NewPrecedent {
        title,
        case_number,
        year,
        court,
        description,
        keywords,
        section,
        article,
      })
      .await
    }
    Command::List => commands::list(&store).await,
    Command::Delete { id } => commands::delete(&store, id).await,
    Command::Search { query } => commands::search(&store, &query).await,
    Command::Seed => commands::seed(&store).await,
  }
}
