//! Greedy dominant-hue selection under a minimum-separation constraint
//!
//! Walks the ranked hue bins in dominance order, seeding with the most
//! populous hue and accepting each later candidate only when it is farther
//! than `hue_separation` from every hue already chosen.
//!
//! Algorithm tag: `algo-greedy-hue-selection`

use tracing::debug;

use crate::extract::histogram::RankedHue;

/// Pick up to `max_colors` mutually-separated hues from the ranked bins
///
/// The returned order is acceptance order, which follows dominance rank, not
/// numeric hue order. Bins with a zero pixel count are never chosen, so every
/// selected hue is guaranteed to have matching pixels in the source grid.
///
/// Hue distance is plain absolute difference: the hue circle is not wrapped,
/// so hues 0 and 179 count as maximally distant. A candidate is rejected
/// when it lies within `hue_separation` of any chosen hue, not just the
/// nearest; `hue_separation` of zero therefore accepts every distinct hue.
pub fn select_hues(ranked: &[RankedHue], max_colors: usize, hue_separation: u16) -> Vec<u8> {
    let mut chosen: Vec<u8> = Vec::new();

    for candidate in ranked.iter().filter(|bin| bin.count > 0) {
        if chosen.len() == max_colors {
            break;
        }

        let near_existing = chosen
            .iter()
            .any(|&hue| (i32::from(hue) - i32::from(candidate.hue)).abs() <= i32::from(hue_separation));

        if chosen.is_empty() || !near_existing {
            chosen.push(candidate.hue);
        }
    }

    debug!(
        chosen = chosen.len(),
        max_colors, hue_separation, "greedy hue selection finished"
    );
    chosen
}
