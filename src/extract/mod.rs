//! Palette extraction pipeline
//!
//! Four stages run strictly forward over a read-only pixel grid: histogram
//! construction, greedy hue selection, per-hue quantile sampling, and color
//! formatting. Each invocation is a pure function of the grid and the
//! parameters.

pub mod formatter;
pub mod histogram;
pub mod sampling;
pub mod selection;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::defaults;
use crate::error::{PaletteError, Result};
use crate::grid::PixelGrid;

pub use formatter::{OutputSpace, PaletteColor, PaletteEntry};
pub use histogram::{HueHistogram, RankedHue};

/// Tunable parameters for palette extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteParams {
    /// Upper bound on the number of palette colors (`max_number_of_colors`)
    pub max_colors: usize,
    /// Minimum absolute hue distance between any two chosen hues
    pub hue_separation: u16,
    /// Saturation quantile represented per hue, in [0, 1]
    pub saturation_quantile: f64,
    /// Value quantile represented per hue, in [0, 1]
    pub value_quantile: f64,
}

impl Default for PaletteParams {
    fn default() -> Self {
        Self {
            max_colors: defaults::MAX_COLORS,
            hue_separation: defaults::HUE_SEPARATION,
            saturation_quantile: defaults::SATURATION_QUANTILE,
            value_quantile: defaults::VALUE_QUANTILE,
        }
    }
}

impl PaletteParams {
    /// Validate parameter ranges
    ///
    /// Out-of-range quantiles fail explicitly rather than being clamped, so
    /// a typo'd `1.5` never silently becomes "the maximum sample".
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::InvalidParameter` naming the offending
    /// quantile when it falls outside [0, 1].
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.saturation_quantile) {
            return Err(PaletteError::invalid_parameter(
                "saturation_quantile",
                self.saturation_quantile,
            ));
        }
        if !(0.0..=1.0).contains(&self.value_quantile) {
            return Err(PaletteError::invalid_parameter(
                "value_quantile",
                self.value_quantile,
            ));
        }
        Ok(())
    }
}

/// Ordered sequence of extracted palette entries
///
/// Order is hue acceptance order: dominance rank filtered by separation,
/// not numeric hue order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Entries in acceptance order
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Number of palette entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in acceptance order
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// Every entry projected into the requested output space
    pub fn colors(&self, space: OutputSpace) -> Vec<PaletteColor> {
        self.entries.iter().map(|entry| entry.color(space)).collect()
    }

    /// Per-entry hex labels, for swatch rendering and display
    pub fn hex_labels(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.hex.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Extract a dominant-hue palette from a pixel grid
///
/// Runs the full pipeline: 180-bin hue histogram, greedy selection of up to
/// `max_colors` mutually-separated hues, quantile sampling of saturation and
/// value per chosen hue, and formatting into palette entries.
///
/// # Errors
///
/// - `PaletteError::InvalidParameter` when a quantile is outside [0, 1]
/// - `PaletteError::NoHuesSelected` when no hue can be chosen (empty grid,
///   all-zero histogram, or `max_colors` of zero)
pub fn extract_palette(grid: &PixelGrid, params: &PaletteParams) -> Result<Palette> {
    params.validate()?;

    let hist = HueHistogram::build(grid);
    debug!(
        pixels = grid.len(),
        distinct_hues = hist.distinct_hues(),
        "hue histogram built"
    );

    let chosen = selection::select_hues(&hist.ranked(), params.max_colors, params.hue_separation);
    if chosen.is_empty() {
        let reason = if params.max_colors == 0 {
            "max_colors is 0".to_string()
        } else {
            format!("hue histogram is empty ({} pixels)", grid.len())
        };
        return Err(PaletteError::NoHuesSelected { reason });
    }

    let index = sampling::HueSampleIndex::build(grid, &chosen);

    let mut saturations = Vec::with_capacity(chosen.len());
    let mut values = Vec::with_capacity(chosen.len());
    for &hue in &chosen {
        // A hue with no matching pixels contributes no samples; the zip in
        // the formatter truncates the palette accordingly instead of
        // producing a malformed entry.
        if let (Some(s), Some(v)) = (
            index.saturation_quantile(hue, params.saturation_quantile),
            index.value_quantile(hue, params.value_quantile),
        ) {
            saturations.push(s);
            values.push(v);
        }
    }

    let entries = formatter::format_entries(&chosen, &saturations, &values);
    debug!(entries = entries.len(), "palette formatted");

    Ok(Palette { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::PixelSample;

    fn grid_of_hues(hues: &[u8]) -> PixelGrid {
        let samples: Vec<PixelSample> = hues
            .iter()
            .map(|&h| PixelSample::new(h, 255, 255))
            .collect();
        PixelGrid::new(1, samples.len(), samples).unwrap()
    }

    #[test]
    fn test_params_default_is_valid() {
        assert!(PaletteParams::default().validate().is_ok());
    }

    #[test]
    fn test_params_reject_out_of_range_quantiles() {
        let params = PaletteParams {
            saturation_quantile: 1.5,
            ..PaletteParams::default()
        };
        match params.validate().unwrap_err() {
            PaletteError::InvalidParameter { parameter, value } => {
                assert_eq!(parameter, "saturation_quantile");
                assert_eq!(value, "1.5");
            }
            other => panic!("Expected InvalidParameter, got: {:?}", other),
        }

        let params = PaletteParams {
            value_quantile: -0.1,
            ..PaletteParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_extract_orders_entries_by_dominance() {
        let grid = grid_of_hues(&[60, 60, 60, 0, 0, 120]);
        let params = PaletteParams {
            max_colors: 3,
            hue_separation: 10,
            ..PaletteParams::default()
        };
        let palette = extract_palette(&grid, &params).unwrap();

        let hues: Vec<u8> = palette.iter().map(|e| e.hue).collect();
        assert_eq!(hues, vec![60, 0, 120]);
    }

    #[test]
    fn test_extract_empty_grid_fails_distinctly() {
        let grid = PixelGrid::new(0, 0, Vec::new()).unwrap();
        let err = extract_palette(&grid, &PaletteParams::default()).unwrap_err();
        assert!(matches!(err, PaletteError::NoHuesSelected { .. }));
    }

    #[test]
    fn test_extract_max_colors_zero_fails_distinctly() {
        let grid = grid_of_hues(&[0, 0]);
        let params = PaletteParams {
            max_colors: 0,
            ..PaletteParams::default()
        };
        let err = extract_palette(&grid, &params).unwrap_err();
        match err {
            PaletteError::NoHuesSelected { reason } => {
                assert!(reason.contains("max_colors"));
            }
            other => panic!("Expected NoHuesSelected, got: {:?}", other),
        }
    }

    #[test]
    fn test_palette_projection_and_labels() {
        let grid = grid_of_hues(&[0, 0, 0]);
        let palette = extract_palette(&grid, &PaletteParams::default()).unwrap();

        assert_eq!(palette.len(), 1);
        assert_eq!(palette.hex_labels(), vec!["#ff0000".to_string()]);
        assert_eq!(
            palette.colors(OutputSpace::Rgb),
            vec![PaletteColor::Rgb((255, 0, 0))]
        );
        assert_eq!(
            palette.colors(OutputSpace::Bgr),
            vec![PaletteColor::Bgr((0, 0, 255))]
        );
    }

    #[test]
    fn test_palette_serialization_round_trip() {
        let grid = grid_of_hues(&[0, 90, 90]);
        let palette = extract_palette(&grid, &PaletteParams::default()).unwrap();

        let json = serde_json::to_string(&palette).unwrap();
        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(palette, back);
    }
}
