//! Theme configuration file management.
//!
//! Handles loading and saving the TOML theme file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Result, Theme};

/// Default theme file content.
const DEFAULT_THEME: &str = r##"# chat-markdown-renderer theme
# Auto-generated - edit as needed

# Accent color for inline code (hex)
accent_color = "#4CAF50"

# Marker prefixed to bullet list items
bullet_marker = "• "

# Table header foreground color (hex)
table_header_color = "#90A4AE"
"##;

/// Directory holding the theme file, under the platform config dir.
#[must_use]
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chat-markdown-renderer")
}

/// Get the path to the theme file.
#[must_use]
pub fn theme_file_path() -> PathBuf {
    default_config_dir().join("theme.toml")
}

/// Load the theme from file, falling back to defaults when absent.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_theme() -> Result<Theme> {
    let path = theme_file_path();

    if path.exists() {
        load_theme_from_file(&path)
    } else {
        Ok(Theme::default())
    }
}

/// Load the theme from a specific file.
///
/// # Errors
/// Returns error if the file cannot be read or parsed.
pub fn load_theme_from_file(path: &Path) -> Result<Theme> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read theme file: {}", path.display()), e))?;

    toml::from_str(&content).map_err(|e| AppError::Config {
        message: format!("Failed to parse theme file: {e}"),
    })
}

/// Save the theme to its default location.
///
/// # Errors
/// Returns error if the file cannot be written.
pub fn save_theme(theme: &Theme) -> Result<()> {
    let path = theme_file_path();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::io("Failed to create config directory", e))?;
    }

    let content = toml::to_string_pretty(theme).map_err(|e| AppError::Config {
        message: format!("Failed to serialize theme: {e}"),
    })?;

    fs::write(&path, content)
        .map_err(|e| AppError::io(format!("Failed to write theme file: {}", path.display()), e))?;

    tracing::info!(path = %path.display(), "Theme saved");

    Ok(())
}

/// Create the default theme file if it doesn't exist.
///
/// # Errors
/// Returns error if the file cannot be created.
pub fn ensure_theme_exists() -> Result<()> {
    let path = theme_file_path();

    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::io("Failed to create config directory", e))?;
        }

        fs::write(&path, DEFAULT_THEME)
            .map_err(|e| AppError::io("Failed to create default theme", e))?;

        tracing::info!(path = %path.display(), "Created default theme");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_theme_parses() {
        let theme: Theme = toml::from_str(DEFAULT_THEME).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.toml");

        let theme = Theme {
            accent_color: "#123456".to_string(),
            ..Theme::default()
        };

        let content = toml::to_string_pretty(&theme).unwrap();
        fs::write(&path, content).unwrap();

        let loaded = load_theme_from_file(&path).unwrap();
        assert_eq!(loaded, theme);
    }

    #[test]
    fn test_malformed_theme_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(&path, "accent_color = 42").unwrap();

        let err = load_theme_from_file(&path).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }
}
