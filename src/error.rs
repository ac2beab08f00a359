//! Error types for the hue_palette library

use thiserror::Error;

/// Result type alias for palette extraction operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Error types for palette extraction
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The hue histogram produced no selectable hues
    ///
    /// Raised when the pixel grid is empty, every hue bin has a zero count,
    /// or `max_colors` is zero. Distinct from an empty success value: a
    /// palette is never returned without at least one chosen hue.
    #[error("No hues were selected: {reason}")]
    NoHuesSelected { reason: String },

    /// Requested output color space is not one of rgb, bgr, hsv, hex
    #[error("Invalid output space \"{requested}\" (expected one of: rgb, bgr, hsv, hex)")]
    InvalidOutputSpace { requested: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Pixel grid dimensions do not match the sample buffer
    #[error("Pixel grid shape mismatch: {rows}x{cols} grid requires {expected} samples, got {actual}")]
    GridShapeMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    /// Swatch sheet rendering failed
    #[error("Render error: {message}")]
    RenderError { message: String },
}

impl PaletteError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a parameter validation error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error indicates a recoverable condition
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PaletteError::NoHuesSelected { .. } | PaletteError::InvalidParameter { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PaletteError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            PaletteError::NoHuesSelected { .. } => {
                "No dominant hues could be selected. Check that the image is non-empty and max_colors is at least 1.".to_string()
            }
            PaletteError::InvalidOutputSpace { requested } => {
                format!(
                    "\"{}\" is not a supported color space. Use rgb, bgr, hsv, or hex.",
                    requested
                )
            }
            PaletteError::InvalidParameter { parameter, .. } => {
                format!("The {} parameter is out of range.", parameter)
            }
            _ => "Palette extraction failed. Please try with a different image.".to_string(),
        }
    }
}
