//! CLI interface using clap.
//!
//! Provides command-line arguments and subcommands for the tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::OutputFormat;

/// Render assistant chat markdown as styled terminal text.
#[derive(Parser, Debug)]
#[command(name = "chat-markdown-renderer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format: ansi, json, or plain.
    #[arg(short, long, default_value = "ansi")]
    pub format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a markdown document (stdin if no file given).
    Render {
        /// Input markdown file.
        file: Option<PathBuf>,

        /// Output file path (stdout if not specified).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the text/code segments of a document.
    Segments {
        /// Input markdown file.
        file: Option<PathBuf>,
    },

    /// Extract and materialize every pipe table in a document.
    Tables {
        /// Input markdown file.
        file: Option<PathBuf>,
    },

    /// Show rendering statistics for a document.
    Stats {
        /// Input markdown file.
        file: Option<PathBuf>,
    },

    /// Show the theme file path, creating the default theme if missing.
    Theme {
        /// Rewrite the theme file with default values.
        #[arg(long)]
        reset: bool,
    },
}

impl Cli {
    /// Parse the output format argument.
    pub fn output_format(&self) -> Result<OutputFormat, String> {
        self.format.parse()
    }
}
