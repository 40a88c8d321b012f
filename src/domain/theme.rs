//! Presentation theme configuration.
//!
//! Controls the colors and markers the terminal renderer uses. Loaded
//! from a TOML file by the infrastructure layer; all fields have
//! defaults so a partial file is fine.

use serde::{Deserialize, Serialize};

/// Theme settings for terminal output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Accent color for inline code, as `#RRGGBB`.
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Marker prefixed to bullet list items.
    #[serde(default = "default_bullet_marker")]
    pub bullet_marker: String,

    /// Table header foreground color, as `#RRGGBB`.
    #[serde(default = "default_table_header_color")]
    pub table_header_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            bullet_marker: default_bullet_marker(),
            table_header_color: default_table_header_color(),
        }
    }
}

fn default_accent_color() -> String {
    "#4CAF50".to_string()
}

fn default_bullet_marker() -> String {
    "\u{2022} ".to_string() // "• "
}

fn default_table_header_color() -> String {
    "#90A4AE".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.accent_color, "#4CAF50");
        assert!(theme.bullet_marker.starts_with('\u{2022}'));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let theme: Theme = toml::from_str("accent_color = \"#FF0000\"").unwrap();
        assert_eq!(theme.accent_color, "#FF0000");
        assert_eq!(theme.bullet_marker, Theme::default().bullet_marker);
    }
}
