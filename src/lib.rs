//! # Hue Palette
//!
//! A Rust crate for extracting a small, visually distinct color palette
//! from a raster image.
//!
//! This library analyzes the hue distribution of an image by:
//! - Binning the hue channel into a 180-bin histogram (OpenCV-style 0-179 range)
//! - Greedily selecting dominant hues under a minimum-separation constraint
//! - Sampling representative saturation/value per hue via quantile statistics
//! - Converting the resulting HSV triples into RGB, BGR, and hex representations
//!
//! ## Example
//!
//! ```rust
//! use hue_palette::{extract_palette, PaletteParams, PixelGrid, PixelSample};
//!
//! // A 2x2 image of pure red pixels
//! let grid = PixelGrid::filled(2, 2, PixelSample::new(0, 255, 255));
//! let palette = extract_palette(&grid, &PaletteParams::default())?;
//! assert_eq!(palette.hex_labels(), vec!["#ff0000".to_string()]);
//! # Ok::<(), hue_palette::PaletteError>(())
//! ```
//!
//! For end-to-end use, [`extract_palette_from_image`] decodes an image file
//! into a [`PixelGrid`] first; [`render::swatch_sheet`] draws the result as
//! a tile sheet.

use std::path::Path;

pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod grid;
pub mod image_loader;
pub mod render;

pub use config::ExtractionConfig;
pub use error::{PaletteError, Result};
pub use extract::{
    extract_palette, OutputSpace, Palette, PaletteColor, PaletteEntry, PaletteParams,
};
pub use grid::{PixelGrid, PixelSample};

/// Extract a dominant-hue palette from an image file
///
/// This is the end-to-end entry point: it decodes the image, converts it to
/// an HSV sample grid, and runs the extraction pipeline.
///
/// # Arguments
///
/// * `image_path` - Path to the image file
/// * `params` - Extraction parameters
///
/// # Returns
///
/// A `Palette` of entries in dominance order, each carrying its HSV origin
/// and derived RGB/BGR/hex representations
///
/// # Errors
///
/// Returns `PaletteError` if:
/// - The image cannot be loaded or decoded
/// - A quantile parameter falls outside [0, 1]
/// - No hue can be selected (degenerate image or `max_colors` of zero)
pub fn extract_palette_from_image(image_path: &Path, params: &PaletteParams) -> Result<Palette> {
    let grid = image_loader::load_image(image_path)?;
    extract_palette(&grid, params)
}
