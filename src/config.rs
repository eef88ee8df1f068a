//! Configuration file loading.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::{Catalog, MonsterDescriptor};
use crate::error::SpriteError;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "SPRITEGEN_CONFIG";

/// Config file looked up in the working directory when the variable is unset.
const DEFAULT_CONFIG_FILE: &str = "spritegen.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Directory sprites are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Canvas settings.
    #[serde(default)]
    pub render: RenderConfig,

    /// Label settings.
    #[serde(default)]
    pub label: LabelConfig,

    /// Replaces the built-in roster when present.
    #[serde(default)]
    pub monsters: Option<Vec<MonsterEntry>>,
}

/// Canvas settings.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Side length of every sprite, in pixels.
    pub size: u32,
    /// Number of border rings.
    pub border_width: u32,
}

/// Label settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Whether to look for a font and stamp labels at all.
    pub enabled: bool,
    /// Font file to use instead of searching system font locations.
    pub font: Option<PathBuf>,
    /// Glyph height in pixels.
    pub font_size: f32,
}

/// One `[[monsters]]` table, as written in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct MonsterEntry {
    /// Output file stem.
    pub identifier: String,
    /// `#RRGGBB` base color.
    pub color: String,
    /// Rarity tier name.
    pub rarity: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            render: RenderConfig::default(),
            label: LabelConfig::default(),
            monsters: None,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { size: 128, border_width: 4 }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self { enabled: true, font: None, font_size: 12.0 }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// The catalog for this run: configured entries, or the built-in roster.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry has a malformed color or the identifiers are invalid.
    pub fn catalog(&self) -> Result<Catalog, SpriteError> {
        let Some(entries) = &self.monsters else {
            return Catalog::builtin();
        };
        let monsters = entries
            .iter()
            .map(|e| MonsterDescriptor::parse(&e.identifier, &e.color, &e.rarity))
            .collect::<Result<Vec<_>, _>>()?;
        Catalog::new(monsters)
    }
}

/// Discover the config file path:
/// 1. `SPRITEGEN_CONFIG` environment variable
/// 2. `spritegen.toml` in the working directory
#[must_use]
pub fn discover_config_path() -> PathBuf {
    config_path_from(std::env::var_os(CONFIG_ENV))
}

fn config_path_from(env_value: Option<OsString>) -> PathBuf {
    match env_value {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}
