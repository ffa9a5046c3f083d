//! Configuration for a dominant color request.
//!
//! Controls how many colors the quantizer is asked for and the shape of the
//! histogram it emits. Configuration can be loaded from JSON files or
//! constructed programmatically:
//!
//! ```no_run
//! use dominant_colors::PaletteConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = PaletteConfig::from_json_file(Path::new("palette.json"))?;
//!
//! // Or use defaults with a different color count
//! let config = PaletteConfig::with_colors(8)?;
//! # Ok::<(), dominant_colors::PaletteError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::quantizer::{DEFAULT_COLORS, DEPTH, MAX_COLORS};
use crate::{PaletteError, Result};

/// Parameters handed to the quantizer collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Number of colors to reduce the image to
    pub colors: u32,

    /// Keep the alpha channel in the histogram
    ///
    /// When disabled, histogram entries carry three channels and every
    /// color reports an alpha of 1.0.
    pub alpha: bool,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS,
            alpha: true,
        }
    }
}

impl PaletteConfig {
    /// Default configuration with a specific color count
    pub fn with_colors(colors: u32) -> Result<Self> {
        let config = Self {
            colors,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the values can be passed to a quantizer
    pub fn validate(&self) -> Result<()> {
        if self.colors == 0 || self.colors > MAX_COLORS {
            return Err(PaletteError::invalid_parameter("colors", self.colors));
        }
        Ok(())
    }

    /// Quantizer arguments producing histogram text the parser understands
    ///
    /// The image path goes before these arguments.
    pub fn quantizer_args(&self) -> Vec<String> {
        vec![
            "-format".to_string(),
            "%c".to_string(),
            "-colors".to_string(),
            self.colors.to_string(),
            "-depth".to_string(),
            DEPTH.to_string(),
            "-alpha".to_string(),
            if self.alpha { "on" } else { "off" }.to_string(),
            "histogram:info:".to_string(),
        ]
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PaletteError::config_io(format!("cannot read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            PaletteError::config_format(format!("cannot parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PaletteError::config_format("cannot serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            PaletteError::config_io(format!("cannot write {}", path.display()), e)
        })?;
        Ok(())
    }
}
