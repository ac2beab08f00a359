//! Per-hue saturation/value statistics
//!
//! Groups the grid's saturation and value samples by exact hue match in one
//! pass over the pixels, then summarizes each group with a
//! linear-interpolation quantile truncated to an integer.
//!
//! Algorithm tag: `algo-quantile-sampling`

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::grid::PixelGrid;

/// Saturation and value samples of every pixel sharing one hue
#[derive(Debug, Clone, Default)]
struct HueSamples {
    saturations: Vec<u8>,
    values: Vec<u8>,
}

/// Grouped saturation/value samples for a set of chosen hues
///
/// Built with a single scan of the grid rather than one scan per hue; the
/// quantile inputs are identical either way since sample order never affects
/// an order statistic.
#[derive(Debug, Clone)]
pub struct HueSampleIndex {
    groups: HashMap<u8, HueSamples>,
}

impl HueSampleIndex {
    /// Collect samples for each hue in `hues` from one pass over the grid
    ///
    /// Only pixels whose hue exactly equals a requested hue contribute;
    /// nothing is taken from neighboring bins. Sample buffers are sorted
    /// ascending so quantile queries read order statistics directly.
    pub fn build(grid: &PixelGrid, hues: &[u8]) -> Self {
        let mut wanted = [false; 256];
        let mut groups: HashMap<u8, HueSamples> = HashMap::with_capacity(hues.len());
        for &hue in hues {
            wanted[hue as usize] = true;
            groups.entry(hue).or_default();
        }

        for sample in grid.samples() {
            if wanted[sample.hue as usize] {
                // Membership was just seeded from the same hue list
                if let Some(group) = groups.get_mut(&sample.hue) {
                    group.saturations.push(sample.saturation);
                    group.values.push(sample.value);
                }
            }
        }

        for (hue, group) in &mut groups {
            group.saturations.sort_unstable();
            group.values.sort_unstable();
            trace!(hue, samples = group.saturations.len(), "grouped hue samples");
        }
        debug!(hues = hues.len(), pixels = grid.len(), "sample grouping pass finished");

        Self { groups }
    }

    /// Number of pixels collected for `hue`
    pub fn sample_count(&self, hue: u8) -> usize {
        self.groups
            .get(&hue)
            .map_or(0, |group| group.saturations.len())
    }

    /// Saturation quantile for `hue`, truncated to an integer
    ///
    /// `None` when no pixel matched the hue; the caller handles that by
    /// truncating the palette, not by failing.
    pub fn saturation_quantile(&self, hue: u8, q: f64) -> Option<u8> {
        let group = self.groups.get(&hue)?;
        quantile(&group.saturations, q).map(|value| value as u8)
    }

    /// Value quantile for `hue`, truncated to an integer
    pub fn value_quantile(&self, hue: u8, q: f64) -> Option<u8> {
        let group = self.groups.get(&hue)?;
        quantile(&group.values, q).map(|value| value as u8)
    }
}

/// Linear-interpolation quantile of an ascending-sorted sample slice
///
/// Standard definition: position `q * (n - 1)` interpolated between the two
/// surrounding order statistics. Empty input has no quantile.
fn quantile(sorted: &[u8], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let position = q * (sorted.len() - 1) as f64;
    let low = position.floor() as usize;
    let high = position.ceil() as usize;
    let fraction = position - low as f64;
    let base = f64::from(sorted[low]);
    Some(base + (f64::from(sorted[high]) - base) * fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::PixelSample;

    fn grid_from(samples: Vec<PixelSample>) -> PixelGrid {
        let cols = samples.len();
        PixelGrid::new(1, cols, samples).unwrap()
    }

    #[test]
    fn test_quantile_endpoints_and_median() {
        let samples = [10u8, 20, 30, 40, 50];
        assert_eq!(quantile(&samples, 0.0), Some(10.0));
        assert_eq!(quantile(&samples, 0.5), Some(30.0));
        assert_eq!(quantile(&samples, 1.0), Some(50.0));
    }

    #[test]
    fn test_quantile_interpolates_between_order_statistics() {
        let samples = [0u8, 255];
        assert_eq!(quantile(&samples, 0.5), Some(127.5));
        assert_eq!(quantile(&samples, 0.25), Some(63.75));
    }

    #[test]
    fn test_quantile_of_empty_slice_is_none() {
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_index_groups_by_exact_hue() {
        let grid = grid_from(vec![
            PixelSample::new(10, 100, 50),
            PixelSample::new(10, 200, 150),
            PixelSample::new(11, 5, 5),
        ]);
        let index = HueSampleIndex::build(&grid, &[10]);

        assert_eq!(index.sample_count(10), 2);
        // Hue 11 was never requested
        assert_eq!(index.sample_count(11), 0);
        // Midpoint of 100 and 200, truncated
        assert_eq!(index.saturation_quantile(10, 0.5), Some(150));
        assert_eq!(index.value_quantile(10, 0.5), Some(100));
    }

    #[test]
    fn test_interpolated_quantile_truncates_not_rounds() {
        let grid = grid_from(vec![
            PixelSample::new(20, 0, 0),
            PixelSample::new(20, 255, 255),
        ]);
        let index = HueSampleIndex::build(&grid, &[20]);

        // 127.5 truncates to 127
        assert_eq!(index.saturation_quantile(20, 0.5), Some(127));
        assert_eq!(index.value_quantile(20, 0.5), Some(127));
    }

    #[test]
    fn test_unmatched_hue_yields_none() {
        let grid = grid_from(vec![PixelSample::new(10, 100, 100)]);
        let index = HueSampleIndex::build(&grid, &[90]);

        assert_eq!(index.sample_count(90), 0);
        assert_eq!(index.saturation_quantile(90, 0.5), None);
        assert_eq!(index.value_quantile(90, 0.5), None);
    }
}
