//! # todo-cli
//!
//! CLI for driving a todo-sync controller against a collection store.
//!
//! ## Commands
//!
//! - `init`: Point the CLI at a collection store
//! - `list`: Refresh and print the task list
//! - `add`: Add a new task
//! - `done` / `undone`: Set a task's completion flag
//! - `rm`: Delete a task
//! - `edit`: Replace a task's text
//!
//! ## Example
//!
//! ```bash
//! # Configure the store
//! todo-cli init https://todos.example.com
//!
//! # Add and list tasks
//! todo-cli add "walk dog"
//! todo-cli list
//!
//! # Complete, edit, delete
//! todo-cli done <id>
//! todo-cli edit <id> "walk the dog"
//! todo-cli rm <id>
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{add, edit, init, list, remove, toggle};

/// CLI for driving a todo-sync controller against a collection store.
#[derive(Parser, Debug)]
#[command(name = "todo-cli")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Data directory for the stored server configuration
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use an in-memory mock store instead of the remote server (for testing/demo)
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Point the CLI at a collection store
    Init {
        /// Base URL of the store, e.g. https://todos.example.com
        url: String,
    },

    /// Refresh and print the task list
    List,

    /// Add a new task
    Add {
        /// Task text
        text: String,
    },

    /// Mark a task complete
    Done {
        /// Task identity
        id: String,
    },

    /// Mark a task not complete
    Undone {
        /// Task identity
        id: String,
    },

    /// Delete a task
    Rm {
        /// Task identity
        id: String,
    },

    /// Replace a task's text
    Edit {
        /// Task identity
        id: String,
        /// New text
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();

    let cli = Cli::parse();

    // Determine data directory
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };

    // Ensure data directory exists
    tokio::fs::create_dir_all(&data_dir)
        .await
        .context("Failed to create data directory")?;

    match cli.command {
        Commands::Init { url } => {
            init::run(&data_dir, &url).await?;
        }
        Commands::List => {
            list::run(&data_dir, cli.mock).await?;
        }
        Commands::Add { text } => {
            add::run(&data_dir, &text, cli.mock).await?;
        }
        Commands::Done { id } => {
            toggle::run(&data_dir, &id, true, cli.mock).await?;
        }
        Commands::Undone { id } => {
            toggle::run(&data_dir, &id, false, cli.mock).await?;
        }
        Commands::Rm { id } => {
            remove::run(&data_dir, &id, cli.mock).await?;
        }
        Commands::Edit { id, text } => {
            edit::run(&data_dir, &id, &text, cli.mock).await?;
        }
    }

    Ok(())
}

/// Get the default data directory for todo-cli.
fn default_data_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("io", "ydun", "todo-cli")
        .context("Could not determine home directory")?;
    Ok(dirs.data_dir().to_path_buf())
}
