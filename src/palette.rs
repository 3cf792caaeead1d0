//! Color palette for the slide mockups
//!
//! Every slide draws from the same small set of named colors. The default
//! palette is the dark keynote look; a TOML file can override any subset of
//! the colors without touching the rest.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing a palette
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("failed to read palette file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse palette TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid color for '{token}': {value:?}")]
    InvalidColor { token: &'static str, value: String },
}

/// Named colors used by the slide routines
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Colors {
    /// Canvas background
    pub background: String,
    /// Card and panel fill
    pub surface: String,
    /// Primary text
    pub text: String,
    /// Secondary text, borders, inactive bars
    pub text_muted: String,
    /// Tertiary text on dark panels
    pub text_soft: String,
    pub accent_blue: String,
    pub accent_aqua: String,
    pub accent_green: String,
    pub accent_orange: String,
    pub accent_purple: String,
    /// Light half of the before/after split
    pub paper: String,
    /// Text drawn on `paper`
    pub ink: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            background: "#000000".to_string(),
            surface: "#121212".to_string(),
            text: "#FFFFFF".to_string(),
            text_muted: "#A1A1AA".to_string(),
            text_soft: "#E5E5EA".to_string(),
            accent_blue: "#0A84FF".to_string(),
            accent_aqua: "#0FD6FF".to_string(),
            accent_green: "#30D158".to_string(),
            accent_orange: "#FF9F0A".to_string(),
            accent_purple: "#8B5CF6".to_string(),
            paper: "#D1D5DB".to_string(),
            ink: "#1F2937".to_string(),
        }
    }
}

impl Colors {
    fn entries(&self) -> [(&'static str, &str); 12] {
        [
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("text", self.text.as_str()),
            ("text-muted", self.text_muted.as_str()),
            ("text-soft", self.text_soft.as_str()),
            ("accent-blue", self.accent_blue.as_str()),
            ("accent-aqua", self.accent_aqua.as_str()),
            ("accent-green", self.accent_green.as_str()),
            ("accent-orange", self.accent_orange.as_str()),
            ("accent-purple", self.accent_purple.as_str()),
            ("paper", self.paper.as_str()),
            ("ink", self.ink.as_str()),
        ]
    }
}

/// A palette with optional metadata
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    pub colors: Colors,
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: Colors,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl Palette {
    /// Load a palette from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Iterate over `(token, value)` pairs in a fixed order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.colors.entries().into_iter()
    }

    /// Reject anything that is not a plain color token
    ///
    /// Values land both in attributes and in the embedded style rule, so
    /// only hex colors, `rgb()`/`rgba()` and bare color names are accepted.
    fn validate(&self) -> Result<(), PaletteError> {
        for (token, value) in self.iter() {
            if !is_color_token(value) {
                return Err(PaletteError::InvalidColor {
                    token,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, `rgb(..)`, `rgba(..)` or a name
fn is_color_token(value: &str) -> bool {
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8)
            && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    let args = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'));
    if let Some(args) = args {
        return !args.trim().is_empty()
            && args
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '%' | ' '));
    }
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

impl FromStr for Palette {
    type Err = PaletteError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let parsed: TomlPalette = toml::from_str(content)?;

        let palette = Palette {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        };
        palette.validate()?;
        Ok(palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.colors.background, "#000000");
        assert_eq!(palette.colors.accent_aqua, "#0FD6FF");
        assert_eq!(palette.name, None);
        assert_eq!(palette.iter().count(), 12);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let toml_str = r##"
[colors]
background = "#101010"
accent-blue = "#2563eb"
"##;
        let palette: Palette = toml_str.parse().expect("Should parse");
        assert_eq!(palette.colors.background, "#101010");
        assert_eq!(palette.colors.accent_blue, "#2563eb");
        assert_eq!(palette.colors.text, "#FFFFFF");
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Midnight"
description = "Navy keynote"

[colors]
surface = "#121d36"
"##;
        let palette: Palette = toml_str.parse().expect("Should parse");
        assert_eq!(palette.name, Some("Midnight".to_string()));
        assert_eq!(palette.description, Some("Navy keynote".to_string()));
        assert_eq!(palette.colors.surface, "#121d36");
    }

    #[test]
    fn test_empty_document_is_default() {
        let palette: Palette = "".parse().expect("Should parse");
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn test_unknown_color_rejected() {
        let result = "[colors]\nhotpink = \"#ff69b4\"\n".parse::<Palette>();
        assert!(matches!(result, Err(PaletteError::Parse(_))));
    }

    #[test]
    fn test_attribute_breaking_color_rejected() {
        let result = "[colors]\ntext = \"red\\\" onload=\\\"x\"\n".parse::<Palette>();
        match result {
            Err(PaletteError::InvalidColor { token, .. }) => assert_eq!(token, "text"),
            other => panic!("expected InvalidColor, got {:?}", other),
        }
    }

    #[test]
    fn test_style_breaking_color_rejected() {
        let result = "[colors]\ntext = \"#fff; } rect { display: none\"\n".parse::<Palette>();
        match result {
            Err(PaletteError::InvalidColor { token, value }) => {
                assert_eq!(token, "text");
                assert_eq!(value, "#fff; } rect { display: none");
            }
            other => panic!("expected InvalidColor, got {:?}", other),
        }
    }

    #[test]
    fn test_color_token_forms() {
        let accepted = [
            "#fff",
            "#ffff",
            "#0A84FF",
            "#0A84FF80",
            "rgb(10, 132, 255)",
            "rgba(0,0,0,0.5)",
            "white",
        ];
        for value in accepted {
            assert!(is_color_token(value), "{:?} should be accepted", value);
        }
        let rejected = [
            "", " #fff", "#ff", "#12345", "#ggg", "rgb()", "rgb(1;2)", "url(#x)", "red;", "a{b}",
        ];
        for value in rejected {
            assert!(!is_color_token(value), "{:?} should be rejected", value);
        }
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = "this is not valid toml {{{{".parse::<Palette>();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = Palette::from_file(Path::new("/nonexistent/palette.toml"));
        assert!(matches!(result, Err(PaletteError::Io(_))));
    }
}
