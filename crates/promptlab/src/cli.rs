//! CLI command structure using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "promptlab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new template document
    New {
        /// Path of the document to create (e.g., "blog-post.md")
        file: PathBuf,

        /// Template title
        #[arg(long)]
        title: Option<String>,

        /// Template description
        #[arg(long)]
        description: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show a template's metadata and body
    Show {
        /// Template document to read
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the declared fields of a template
    Fields {
        /// Template document to read
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fill a template's placeholders and print the result
    Render {
        /// Template document to render
        file: PathBuf,

        /// Values file (.json or .toml) mapping field names to values
        #[arg(long)]
        values: Option<PathBuf>,

        /// Set a single value (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a template for structural and coverage problems
    Check {
        /// Template document to check
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List template documents in a directory
    List {
        /// Directory to scan (defaults to the current directory)
        dir: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
