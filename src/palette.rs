//! Per-project accent palette.
//!
//! The portfolio assigns each project card a base color from a fixed list;
//! hovering paints the card with that color's complementary accent.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{Accent, Color, complementary_accent, parse_hex6};
use crate::error::{Error, Result};

/// Card background the accents are painted over when nothing else is given.
pub const DEFAULT_BACKGROUND: Color = Color::rgb(0x11, 0x10, 0x14);

const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    ("Helix", "#6B4EFF"),
    ("Tidepool", "#00A6A6"),
    ("Ember", "#FF6B35"),
    ("Fieldnotes", "#2E7D32"),
    ("Lumen", "#F4C430"),
    ("Quartz", "#C2185B"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    /// Six hex digits, `#` optional.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(rename = "entry", default)]
    pub entries: Vec<PaletteEntry>,
}

fn default_background() -> Color {
    DEFAULT_BACKGROUND
}

/// A palette entry with its colors resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteAccent {
    pub name: String,
    pub base: Color,
    pub accent: Accent,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            entries: DEFAULT_ENTRIES
                .iter()
                .map(|(name, color)| PaletteEntry {
                    name: (*name).to_string(),
                    color: (*color).to_string(),
                })
                .collect(),
        }
    }
}

impl Palette {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let palette: Palette = toml::from_str(s)?;
        palette.validate()?;
        tracing::debug!(
            entries = palette.entries.len(),
            background = %palette.background,
            "parsed palette"
        );
        Ok(palette)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading palette");
        Self::from_toml_str(&text)
    }

    /// Names must be non-empty and unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if entry.name.trim().is_empty() {
                return Err(Error::InvalidPalette("entry with empty name".into()));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(Error::InvalidPalette(format!(
                    "duplicate entry '{}'",
                    entry.name
                )));
            }
        }
        Ok(())
    }

    /// Resolve every entry; the first bad color aborts with its entry name.
    pub fn accents(&self) -> Result<Vec<PaletteAccent>> {
        self.entries
            .iter()
            .map(|entry| -> Result<PaletteAccent> {
                let base =
                    parse_hex6(&entry.color).map_err(|e| Error::entry(&entry.name, e))?;
                Ok(PaletteAccent {
                    name: entry.name.clone(),
                    base,
                    accent: complementary_accent(base),
                })
            })
            .collect()
    }
}
