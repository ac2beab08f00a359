//! Numeric constants for the hue histogram and channel scaling
//!
//! The hue channel follows the OpenCV 8-bit convention: hue is stored
//! halved, in [0, 179], while saturation and value use the full [0, 255]
//! byte range.

/// Hue channel layout
pub mod hue {
    /// Number of histogram bins, one per integer hue value
    pub const BIN_COUNT: usize = 180;

    /// Largest representable hue value
    ///
    /// Also the divisor used when normalizing a hue for HSV-to-RGB
    /// conversion. The divisor is 179, not 180; keeping that distinction is
    /// required for output compatibility with the degree scaling below.
    pub const MAX_VALUE: u8 = 179;

    /// Factor mapping a stored hue to its angle in degrees (0-358)
    pub const DEGREE_SCALE: u16 = 2;
}

/// Saturation/value channel layout
pub mod channel {
    /// Largest representable saturation or value sample
    pub const MAX_VALUE: u8 = 255;
}

/// Default extraction parameters
pub mod defaults {
    /// Upper bound on the number of palette colors
    pub const MAX_COLORS: usize = 6;

    /// Minimum absolute hue distance between chosen hues
    pub const HUE_SEPARATION: u16 = 10;

    /// Saturation quantile represented in the palette
    pub const SATURATION_QUANTILE: f64 = 0.5;

    /// Value quantile represented in the palette
    pub const VALUE_QUANTILE: f64 = 0.5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_layout() {
        // One unit-width bin per representable hue value
        assert_eq!(hue::BIN_COUNT, hue::MAX_VALUE as usize + 1);
        // Doubled hue stays within a full circle
        assert!(hue::MAX_VALUE as u16 * hue::DEGREE_SCALE < 360);
    }

    #[test]
    fn test_default_quantiles_in_range() {
        assert!((0.0..=1.0).contains(&defaults::SATURATION_QUANTILE));
        assert!((0.0..=1.0).contains(&defaults::VALUE_QUANTILE));
    }
}
