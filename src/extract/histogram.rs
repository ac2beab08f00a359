//! Hue histogram construction
//!
//! Bins the hue channel of a pixel grid at the highest resolution the 8-bit
//! convention allows: 180 unit-width bins, one per integer hue in [0, 179].
//!
//! Algorithm tag: `algo-hue-histogram`

use crate::constants::hue;
use crate::grid::PixelGrid;

/// One hue bucket paired with its pixel count and descending-count rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedHue {
    /// Integer hue value, [0, 179]
    pub hue: u8,
    /// Number of pixels whose hue equals this value
    pub count: u32,
}

/// Fixed-resolution distribution of the hue channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HueHistogram {
    counts: [u32; hue::BIN_COUNT],
}

impl HueHistogram {
    /// Count grid pixels into 180 unit-width hue bins
    ///
    /// Pure function of the hue channel. Samples with a hue outside [0, 179]
    /// fall outside every bin and are ignored.
    pub fn build(grid: &PixelGrid) -> Self {
        let mut counts = [0u32; hue::BIN_COUNT];
        for sample in grid.samples() {
            if let Some(count) = counts.get_mut(sample.hue as usize) {
                *count += 1;
            }
        }
        Self { counts }
    }

    /// Per-bin pixel counts, indexed by hue value
    pub fn counts(&self) -> &[u32; hue::BIN_COUNT] {
        &self.counts
    }

    /// Whether every bin is empty
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Number of bins with a non-zero count
    pub fn distinct_hues(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Bins ordered by descending count, ties broken by ascending hue
    ///
    /// The tie-break keeps ranking deterministic; downstream selection order
    /// is observable in the palette, so the sort must be stable.
    pub fn ranked(&self) -> Vec<RankedHue> {
        let mut ranked: Vec<RankedHue> = self
            .counts
            .iter()
            .enumerate()
            .map(|(hue, &count)| RankedHue {
                hue: hue as u8,
                count,
            })
            .collect();
        ranked.sort_by_key(|bin| (std::cmp::Reverse(bin.count), bin.hue));
        ranked
    }
}
