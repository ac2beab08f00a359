//! Palette entry construction and color space formatting
//!
//! Turns each chosen (hue, saturation, value) triple into its display
//! representations: a degree-scaled HSV triple, truncated 8-bit RGB, the
//! channel-reversed BGR, and a lowercase hex string.
//!
//! The HSV-to-RGB step uses the standard sector formula with the hue taken
//! as `hue / 179` of a full circle, and scales channels with truncating
//! `as u8` casts rather than rounding. Both choices are load-bearing for
//! output stability and must not be "corrected".
//!
//! Algorithm tag: `algo-hsv-formatting`

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::constants::{channel, hue};
use crate::error::PaletteError;

/// Color space of the values returned to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSpace {
    /// (r, g, b) integer triples, 0-255 per channel
    Rgb,
    /// (b, g, r) integer triples, 0-255 per channel
    Bgr,
    /// (hue in degrees, saturation, value) with fractional channels
    Hsv,
    /// Lowercase `#rrggbb` strings
    Hex,
}

impl FromStr for OutputSpace {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rgb" => Ok(OutputSpace::Rgb),
            "bgr" => Ok(OutputSpace::Bgr),
            "hsv" => Ok(OutputSpace::Hsv),
            "hex" => Ok(OutputSpace::Hex),
            other => Err(PaletteError::InvalidOutputSpace {
                requested: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputSpace::Rgb => "rgb",
            OutputSpace::Bgr => "bgr",
            OutputSpace::Hsv => "hsv",
            OutputSpace::Hex => "hex",
        };
        f.write_str(name)
    }
}

/// One palette color in a caller-requested output space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PaletteColor {
    Rgb((u8, u8, u8)),
    Bgr((u8, u8, u8)),
    Hsv((u16, f64, f64)),
    Hex(String),
}

/// Final palette unit: the sampled HSV triple plus derived representations
///
/// Created once per chosen hue and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Chosen hue, [0, 179]
    pub hue: u8,
    /// Quantile-sampled saturation, [0, 255]
    pub saturation: u8,
    /// Quantile-sampled value, [0, 255]
    pub value: u8,
    /// (hue doubled to degrees, saturation and value normalized to two decimals)
    pub hsv: (u16, f64, f64),
    /// Truncated 8-bit RGB channels
    pub rgb: (u8, u8, u8),
    /// Channel-reversed RGB
    pub bgr: (u8, u8, u8),
    /// Lowercase `#rrggbb`
    pub hex: String,
}

impl PaletteEntry {
    /// Derive every representation from one sampled HSV triple
    pub fn from_hsv(hue_value: u8, saturation: u8, value: u8) -> Self {
        let h_norm = f64::from(hue_value) / f64::from(hue::MAX_VALUE);
        let s_norm = f64::from(saturation) / f64::from(channel::MAX_VALUE);
        let v_norm = f64::from(value) / f64::from(channel::MAX_VALUE);

        let hsv = (
            u16::from(hue_value) * hue::DEGREE_SCALE,
            round_two_decimals(s_norm),
            round_two_decimals(v_norm),
        );

        let (r_norm, g_norm, b_norm) = hsv_to_rgb(h_norm, s_norm, v_norm);
        let r = (r_norm * f64::from(channel::MAX_VALUE)) as u8;
        let g = (g_norm * f64::from(channel::MAX_VALUE)) as u8;
        let b = (b_norm * f64::from(channel::MAX_VALUE)) as u8;

        Self {
            hue: hue_value,
            saturation,
            value,
            hsv,
            rgb: (r, g, b),
            bgr: (b, g, r),
            hex: format!("#{:02x}{:02x}{:02x}", r, g, b),
        }
    }

    /// Typed sRGB view of the truncated channels
    pub fn srgb(&self) -> Srgb<u8> {
        Srgb::new(self.rgb.0, self.rgb.1, self.rgb.2)
    }

    /// This entry in the requested output space
    pub fn color(&self, space: OutputSpace) -> PaletteColor {
        match space {
            OutputSpace::Rgb => PaletteColor::Rgb(self.rgb),
            OutputSpace::Bgr => PaletteColor::Bgr(self.bgr),
            OutputSpace::Hsv => PaletteColor::Hsv(self.hsv),
            OutputSpace::Hex => PaletteColor::Hex(self.hex.clone()),
        }
    }
}

/// Build entries by pairing hues with their sampled statistics in order
///
/// The three sequences are zipped, so the result length is the minimum of
/// the three: hues whose sampling produced nothing truncate the palette
/// instead of producing malformed entries.
pub fn format_entries(hues: &[u8], saturations: &[u8], values: &[u8]) -> Vec<PaletteEntry> {
    hues.iter()
        .zip(saturations)
        .zip(values)
        .map(|((&h, &s), &v)| PaletteEntry::from_hsv(h, s, v))
        .collect()
}

/// Standard HSV-to-RGB sector conversion on normalized channels
///
/// `h` is a fraction of the full circle; all channels come back in [0, 1].
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).trunc() as i64;
    let f = h * 6.0 - sector as f64;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector.rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

fn round_two_decimals(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
