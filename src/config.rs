//! Configuration for the palette extraction pipeline
//!
//! Bundles the extraction parameters with the requested output space so a
//! run can be described by a single JSON document:
//!
//! ```no_run
//! use hue_palette::ExtractionConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ExtractionConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = ExtractionConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::extract::{OutputSpace, PaletteParams};

/// Complete configuration for one extraction run
///
/// Serializable to/from JSON for reproducible runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Extraction parameters
    pub palette: PaletteParams,

    /// Color space of the returned palette
    pub output_space: OutputSpace,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            palette: PaletteParams::default(),
            output_space: OutputSpace::Hex,
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
