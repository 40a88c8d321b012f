//! Infrastructure layer - external adapters (config files, terminal).
//!
//! This layer handles all I/O and terminal-specific concerns.

pub mod config;
pub mod terminal;

pub use config::{ensure_theme_exists, load_theme, save_theme, theme_file_path};
pub use terminal::{render_document_ansi, render_grid, render_text};
