//! Swatch sheet rendering
//!
//! Optional consumer of an extracted palette: draws each entry as a solid
//! color tile in a fixed grid and pairs the sheet with the per-entry hex
//! labels from [`Palette::hex_labels`]. The extraction pipeline never
//! depends on this module.

use std::path::Path;

use image::{Rgb, RgbImage};
use tracing::debug;

use crate::error::{PaletteError, Result};
use crate::extract::Palette;

/// Tile grid shape for a palette of `n` entries
///
/// Nine colors draw as 3x3 and four as 2x2; anything else is a single
/// horizontal strip.
fn sheet_dims(n: usize) -> (usize, usize) {
    match n {
        9 => (3, 3),
        4 => (2, 2),
        _ => (1, n),
    }
}

/// Render a palette as a grid of solid color tiles
///
/// # Arguments
///
/// * `palette` - Extracted palette, drawn in entry order
/// * `tile_size` - Edge length of each square tile, in pixels
///
/// # Errors
///
/// Returns `PaletteError::RenderError` if the palette is empty or
/// `tile_size` is zero.
pub fn swatch_sheet(palette: &Palette, tile_size: u32) -> Result<RgbImage> {
    if palette.is_empty() {
        return Err(PaletteError::RenderError {
            message: "cannot render an empty palette".to_string(),
        });
    }
    if tile_size == 0 {
        return Err(PaletteError::RenderError {
            message: "tile_size must be at least 1 pixel".to_string(),
        });
    }

    let (tile_rows, tile_cols) = sheet_dims(palette.len());
    let mut sheet = RgbImage::new(tile_cols as u32 * tile_size, tile_rows as u32 * tile_size);

    for (i, entry) in palette.iter().enumerate() {
        let tile_row = (i / tile_cols) as u32;
        let tile_col = (i % tile_cols) as u32;
        let fill = Rgb([entry.rgb.0, entry.rgb.1, entry.rgb.2]);

        for y in 0..tile_size {
            for x in 0..tile_size {
                sheet.put_pixel(tile_col * tile_size + x, tile_row * tile_size + y, fill);
            }
        }
    }

    debug!(
        entries = palette.len(),
        width = sheet.width(),
        height = sheet.height(),
        "swatch sheet rendered"
    );
    Ok(sheet)
}

/// Render a palette and write the sheet to disk as an image file
///
/// The format follows the file extension, per the `image` crate.
pub fn save_swatch_sheet(palette: &Palette, tile_size: u32, path: &Path) -> Result<()> {
    let sheet = swatch_sheet(palette, tile_size)?;
    sheet.save(path).map_err(|e| PaletteError::RenderError {
        message: format!("failed to write swatch sheet to {}: {}", path.display(), e),
    })
}
