//! Image loading and HSV sample grid construction
//!
//! Decodes raster images (any format the `image` crate supports) and
//! converts each pixel into an OpenCV-convention HSV sample: hue halved into
//! [0, 179], saturation and value scaled to [0, 255]. The rest of the crate
//! only ever sees the resulting [`PixelGrid`]; decoding stays at this
//! boundary.

use std::path::Path;

use image::{DynamicImage, ImageReader, RgbImage};
use palette::{FromColor, Hsv, Srgb};
use tracing::debug;

use crate::constants::hue;
use crate::error::{PaletteError, Result};
use crate::grid::{PixelGrid, PixelSample};

/// Load an image from disk into an HSV pixel grid
///
/// # Arguments
///
/// * `path` - Path to the image file
///
/// # Errors
///
/// Returns `PaletteError::ImageLoadError` if the file cannot be opened or
/// decoded.
///
/// # Example
///
/// ```rust,no_run
/// use hue_palette::image_loader::load_image;
/// use std::path::Path;
///
/// let grid = load_image(Path::new("photo.jpg"))?;
/// println!("Loaded {}x{} pixels", grid.rows(), grid.cols());
/// # Ok::<(), hue_palette::PaletteError>(())
/// ```
pub fn load_image(path: &Path) -> Result<PixelGrid> {
    let reader = ImageReader::open(path).map_err(|e| {
        PaletteError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let img: DynamicImage = reader.decode().map_err(|e| {
        PaletteError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    let rgb = img.to_rgb8();
    debug!(
        path = %path.display(),
        width = rgb.width(),
        height = rgb.height(),
        "image decoded"
    );
    Ok(grid_from_rgb_image(&rgb))
}

/// Convert a decoded RGB image into an HSV pixel grid
pub fn grid_from_rgb_image(image: &RgbImage) -> PixelGrid {
    let rows = image.height() as usize;
    let cols = image.width() as usize;
    let samples: Vec<PixelSample> = image
        .pixels()
        .map(|pixel| hsv_sample_from_rgb(pixel.0[0], pixel.0[1], pixel.0[2]))
        .collect();

    // pixels() iterates row-major over exactly rows * cols entries
    PixelGrid::new(rows, cols, samples).unwrap_or_else(|_| {
        unreachable!("RgbImage buffer length always matches its dimensions")
    })
}

/// Convert one RGB pixel to an OpenCV-convention HSV sample
///
/// Hue comes out halved in [0, 179] (angles in [358, 360) wrap to 0), and
/// saturation/value are rounded to the [0, 255] byte range.
pub fn hsv_sample_from_rgb(r: u8, g: u8, b: u8) -> PixelSample {
    let srgb: Srgb<f32> = Srgb::new(r, g, b).into_format();
    let hsv = Hsv::from_color(srgb);

    let degrees = hsv.hue.into_positive_degrees();
    let halved = (degrees / f32::from(hue::DEGREE_SCALE)).round() as u16 % hue::BIN_COUNT as u16;
    let saturation = (hsv.saturation * 255.0).round() as u8;
    let value = (hsv.value * 255.0).round() as u8;

    PixelSample::new(halved as u8, saturation, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_color_conversion() {
        let red = hsv_sample_from_rgb(255, 0, 0);
        assert_eq!((red.hue, red.saturation, red.value), (0, 255, 255));

        let green = hsv_sample_from_rgb(0, 255, 0);
        assert_eq!((green.hue, green.saturation, green.value), (60, 255, 255));

        let blue = hsv_sample_from_rgb(0, 0, 255);
        assert_eq!((blue.hue, blue.saturation, blue.value), (120, 255, 255));
    }

    #[test]
    fn test_achromatic_conversion() {
        let gray = hsv_sample_from_rgb(128, 128, 128);
        assert_eq!(gray.saturation, 0);
        assert_eq!(gray.value, 128);

        let black = hsv_sample_from_rgb(0, 0, 0);
        assert_eq!(black.saturation, 0);
        assert_eq!(black.value, 0);

        let white = hsv_sample_from_rgb(255, 255, 255);
        assert_eq!(white.saturation, 0);
        assert_eq!(white.value, 255);
    }

    #[test]
    fn test_hue_stays_in_range() {
        // Hues just below 360 degrees wrap to the bottom of the range
        let near_red = hsv_sample_from_rgb(255, 0, 1);
        assert!(near_red.hue <= hue::MAX_VALUE);
    }

    #[test]
    fn test_grid_from_rgb_image_shape_and_order() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        img.put_pixel(1, 0, image::Rgb([0, 255, 0]));
        img.put_pixel(0, 1, image::Rgb([0, 0, 255]));
        img.put_pixel(1, 1, image::Rgb([255, 255, 255]));

        let grid = grid_from_rgb_image(&img);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);

        let hues: Vec<u8> = grid.samples().iter().map(|s| s.hue).collect();
        assert_eq!(hues, vec![0, 60, 120, 0]);
        // Row-major: the white pixel is last and fully desaturated
        assert_eq!(grid.samples()[3].saturation, 0);
    }

    #[test]
    fn test_load_image_missing_file() {
        let result = load_image(Path::new("nonexistent_file.jpg"));
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            PaletteError::ImageLoadError { .. }
        ));
    }
}
