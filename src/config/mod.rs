//! Configuration file support for drawing sessions.
//!
//! Sessions are configured from a TOML file (by default
//! `~/.config/inkmark/config.toml`); when no file exists, sensible defaults
//! are used automatically. Settings cover drawing defaults and redraw
//! throttling.

pub mod types;

// Re-export commonly used types at module level
pub use types::{DrawingDefaults, PerformanceTuning};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::draw::DrawKind;

/// Root configuration deserialized from the TOML file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_type = "circle"
/// default_color = "yellow"
/// draw_text = "EDIT ME"
/// capture_radius = 8.0
///
/// [performance]
/// redraw_interval_ms = 20
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Drawing defaults (kind, color, text, capture radius)
    #[serde(default)]
    pub drawing: DrawingDefaults,

    /// Redraw throttling
    #[serde(default)]
    pub performance: PerformanceTuning,
}

impl SessionConfig {
    /// Loads configuration from the default path, falling back to defaults
    /// when no file exists.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(path) => {
                debug!("no config file at {}; using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                warn!("could not determine config directory; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads and validates configuration from a specific file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate();
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(contents).context("failed to parse config")?;
        config.validate();
        Ok(config)
    }

    /// `~/.config/inkmark/config.toml`, if a config directory is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("inkmark").join("config.toml"))
    }

    /// Clamps values to acceptable ranges and repairs unusable settings,
    /// warning about each adjustment.
    pub fn validate(&mut self) {
        if self.drawing.default_type.parse::<DrawKind>().is_err() {
            warn!(
                "unknown default_type '{}', using 'point'",
                self.drawing.default_type
            );
            self.drawing.default_type = "point".to_string();
        }

        if !(1.0..=64.0).contains(&self.drawing.capture_radius) {
            let clamped = self.drawing.capture_radius.clamp(1.0, 64.0);
            warn!(
                "capture_radius {} out of range, clamping to {}",
                self.drawing.capture_radius, clamped
            );
            self.drawing.capture_radius = clamped;
        }

        if self.performance.redraw_interval_ms > 1000 {
            warn!(
                "redraw_interval_ms {} out of range, clamping to 1000",
                self.performance.redraw_interval_ms
            );
            self.performance.redraw_interval_ms = 1000;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let mut config = SessionConfig::default();
        let before = format!("{config:?}");
        config.validate();
        assert_eq!(before, format!("{config:?}"));
        assert_eq!(config.drawing.default_type, "point");
        assert_eq!(config.performance.redraw_interval_ms, 20);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config = SessionConfig::from_toml_str(
            r#"
            [drawing]
            default_type = "circle"
            "#,
        )
        .unwrap();
        assert_eq!(config.drawing.default_type, "circle");
        assert_eq!(config.drawing.draw_text, "EDIT ME");
        assert_eq!(config.performance.redraw_interval_ms, 20);
    }

    #[test]
    fn validate_repairs_bad_values() {
        let config = SessionConfig::from_toml_str(
            r#"
            [drawing]
            default_type = "scribble"
            capture_radius = 500.0

            [performance]
            redraw_interval_ms = 99999
            "#,
        )
        .unwrap();
        assert_eq!(config.drawing.default_type, "point");
        assert_eq!(config.drawing.capture_radius, 64.0);
        assert_eq!(config.performance.redraw_interval_ms, 1000);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(SessionConfig::from_toml_str("drawing = 3").is_err());
    }

    #[test]
    fn load_reads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[drawing]\ndefault_color = \"red\"\n").unwrap();

        let config = SessionConfig::load(&path).unwrap();
        assert_eq!(config.drawing.default_color, "red");

        assert!(SessionConfig::load(&dir.path().join("missing.toml")).is_err());
    }
}
