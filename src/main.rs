//! Chat Markdown Renderer - render assistant chat markdown as styled text.
//!
//! Converts the restricted markdown dialect emitted by chat assistants
//! (headers, bold/italic, inline code, links, lists, pipe tables, fenced
//! code blocks) into styled terminal output, JSON, or plain text.
//!
//! Quick start:
//!   chat-markdown-renderer render reply.md          # styled terminal output
//!   chat-markdown-renderer -f json render < in.md   # styled runs as JSON
//!   chat-markdown-renderer segments reply.md        # fence segmentation
//!   chat-markdown-renderer tables reply.md          # pipe tables as grids
//!   chat-markdown-renderer stats reply.md           # run/segment counts

mod application;
mod cli;
mod domain;
mod infrastructure;

use std::io::{Read, Write};
use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{
    extract_tables, format_document_json, format_grids_json, format_segments_json,
    format_segments_table, format_stats, render_document, segment_markdown, OutputFormat,
    RenderOptions, StyleOptions,
};
use cli::{Cli, Commands};
use domain::TableCell;
use infrastructure::{
    ensure_theme_exists, load_theme, render_document_ansi, render_grid, save_theme,
    theme_file_path,
};

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(cli: Cli) -> domain::Result<()> {
    let format = cli
        .output_format()
        .map_err(|e| domain::AppError::Config { message: e })?;

    match cli.command {
        Commands::Render { file, output } => {
            cmd_render(file.as_deref(), output.as_deref(), format)?;
        }
        Commands::Segments { file } => {
            cmd_segments(file.as_deref(), format)?;
        }
        Commands::Tables { file } => {
            cmd_tables(file.as_deref(), format)?;
        }
        Commands::Stats { file } => {
            cmd_stats(file.as_deref())?;
        }
        Commands::Theme { reset } => {
            cmd_theme(reset)?;
        }
    }

    Ok(())
}

/// Render a document command.
fn cmd_render(
    file: Option<&Path>,
    output: Option<&Path>,
    format: OutputFormat,
) -> domain::Result<()> {
    let input = read_input(file)?;
    let theme = load_theme()?;

    let options = RenderOptions { theme: theme.clone() };
    let (document, stats) = render_document(&input, &options);

    tracing::info!(
        segments = stats.segment_count,
        tables = stats.table_count,
        "Document rendered"
    );

    let content = match format {
        OutputFormat::Ansi => render_document_ansi(&document, &theme),
        OutputFormat::Json => format_document_json(&document)?,
        OutputFormat::Plain => document.plain_text(),
    };

    match output {
        Some(path) => {
            let mut file = std::fs::File::create(path).map_err(|e| {
                domain::AppError::io(format!("Failed to create {}", path.display()), e)
            })?;
            file.write_all(content.as_bytes())
                .map_err(|e| domain::AppError::io("Failed to write file", e))?;
            println!(
                "{} Rendered {} blocks to {}",
                "✓".green().bold(),
                document.blocks.len(),
                path.display()
            );
        }
        None => {
            println!("{content}");
        }
    }

    Ok(())
}

/// List segments command.
fn cmd_segments(file: Option<&Path>, format: OutputFormat) -> domain::Result<()> {
    let input = read_input(file)?;
    let segments = segment_markdown(&input);

    let output = match format {
        OutputFormat::Json => format_segments_json(&segments)?,
        OutputFormat::Ansi | OutputFormat::Plain => format_segments_table(&segments),
    };

    println!("{output}");
    println!("Total: {} segment(s)", segments.len());

    Ok(())
}

/// Extract tables command.
fn cmd_tables(file: Option<&Path>, format: OutputFormat) -> domain::Result<()> {
    let input = read_input(file)?;
    let theme = load_theme()?;
    let grids = extract_tables(&input, &StyleOptions::from(&theme));

    if grids.is_empty() {
        println!("No pipe tables found");
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            println!("{}", format_grids_json(&grids)?);
        }
        OutputFormat::Ansi => {
            for grid in &grids {
                println!("{}", render_grid(grid, &theme));
                println!();
            }
        }
        OutputFormat::Plain => {
            for grid in &grids {
                for row in &grid.rows {
                    let cells: Vec<String> = row.iter().map(TableCell::plain_text).collect();
                    println!("{}", cells.join("  "));
                }
                println!();
            }
        }
    }

    Ok(())
}

/// Show statistics command.
fn cmd_stats(file: Option<&Path>) -> domain::Result<()> {
    let input = read_input(file)?;

    let (_, stats) = render_document(&input, &RenderOptions::default());
    println!("{}", format_stats(&stats));

    Ok(())
}

/// Show theme path command.
fn cmd_theme(reset: bool) -> domain::Result<()> {
    if reset {
        save_theme(&domain::Theme::default())?;
        println!("{} Theme reset to defaults", "✓".green().bold());
    }

    ensure_theme_exists()?;

    let path = theme_file_path();
    let theme = load_theme()?;

    println!("{}", "Theme".bold());
    println!();
    println!("  File:         {}", path.display());
    println!("  Accent:       {}", theme.accent_color);
    println!("  Bullet:       {:?}", theme.bullet_marker);
    println!("  Table header: {}", theme.table_header_color);

    Ok(())
}

/// Reads the input document from a file or stdin.
fn read_input(file: Option<&Path>) -> domain::Result<String> {
    match file {
        Some(path) => {
            if !path.exists() {
                return Err(domain::AppError::InputNotFound {
                    path: path.to_path_buf(),
                });
            }
            std::fs::read_to_string(path).map_err(|e| {
                domain::AppError::io(format!("Failed to read {}", path.display()), e)
            })
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| domain::AppError::io("Failed to read stdin", e))?;
            Ok(buf)
        }
    }
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
