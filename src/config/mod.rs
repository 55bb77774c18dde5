//! Sizing and output policies for BatchResize
//!
//! Policies are plain immutable values, fully resolved before a batch
//! starts. Numeric ranges are validated here at construction time, not
//! inside the pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{BatchResizeError, Result};

/// How target dimensions are derived from source dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResizeMode {
    /// Scale both axes by a percentage of the source size
    Percent { percent: f64 },

    /// Resize toward explicit pixel dimensions
    ///
    /// With `keep_aspect`, a single bound drives the other axis and two
    /// bounds fit-within; without it, each set axis is an independent
    /// override and an unset axis keeps its source value.
    Dimensions {
        width: Option<u32>,
        height: Option<u32>,
        keep_aspect: bool,
    },
}

impl Default for ResizeMode {
    fn default() -> Self {
        Self::Percent { percent: 50.0 }
    }
}

impl ResizeMode {
    /// Validate the mode's numeric parameters
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Percent { percent } => {
                if !percent.is_finite() || *percent <= 0.0 {
                    return Err(BatchResizeError::invalid_parameters(format!(
                        "Percent must be a positive number, got {}",
                        percent
                    )));
                }
            }
            Self::Dimensions { width, height, .. } => {
                if width == &Some(0) || height == &Some(0) {
                    return Err(BatchResizeError::invalid_parameters(
                        "Dimensions must be greater than 0",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Explicitly selectable output formats
///
/// Bmp and Tiff sources are reachable only by keeping the source format;
/// they are not conversion targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
}

impl OutputFormat {
    /// Canonical file extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::WebP => "webp",
        }
    }
}

/// Output format, naming, and quality policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Output format (None = keep source format)
    pub format: Option<OutputFormat>,

    /// Append the `_resized` marker before the extension
    ///
    /// With the marker on, collision-safe naming protects existing files;
    /// with it off, an existing file at the target path is overwritten.
    pub append_suffix: bool,

    /// JPEG quality (1-100); ignored by every other format
    pub jpeg_quality: u8,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: None,
            append_suffix: true,
            jpeg_quality: 85,
        }
    }
}

impl OutputOptions {
    /// Set the output format
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set whether the `_resized` marker is appended
    pub fn append_suffix(mut self, append: bool) -> Self {
        self.append_suffix = append;
        self
    }

    /// Set the JPEG quality
    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    /// Validate the output parameters
    pub fn validate(&self) -> Result<()> {
        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(BatchResizeError::invalid_parameters(format!(
                "JPEG quality must be between 1-100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_validation() {
        assert!(ResizeMode::Percent { percent: 50.0 }.validate().is_ok());
        // Sub-1 percentages are legal; the calculator clamps them
        assert!(ResizeMode::Percent { percent: 0.5 }.validate().is_ok());
        assert!(ResizeMode::Percent { percent: 0.0 }.validate().is_err());
        assert!(ResizeMode::Percent {
            percent: f64::INFINITY
        }
        .validate()
        .is_err());

        assert!(ResizeMode::Dimensions {
            width: Some(800),
            height: None,
            keep_aspect: true,
        }
        .validate()
        .is_ok());
        assert!(ResizeMode::Dimensions {
            width: None,
            height: None,
            keep_aspect: false,
        }
        .validate()
        .is_ok());
        assert!(ResizeMode::Dimensions {
            width: Some(0),
            height: Some(600),
            keep_aspect: true,
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_output_options_builder() {
        let options = OutputOptions::default()
            .format(OutputFormat::WebP)
            .jpeg_quality(70)
            .append_suffix(false);

        assert_eq!(options.format, Some(OutputFormat::WebP));
        assert_eq!(options.jpeg_quality, 70);
        assert!(!options.append_suffix);
    }

    #[test]
    fn test_mode_default_is_half_size() {
        assert!(matches!(
            ResizeMode::default(),
            ResizeMode::Percent { percent } if (percent - 50.0).abs() < f64::EPSILON
        ));
        assert!(ResizeMode::default().validate().is_ok());
    }

    #[test]
    fn test_output_options_defaults() {
        let options = OutputOptions::default();
        assert!(options.format.is_none());
        assert!(options.append_suffix);
        assert_eq!(options.jpeg_quality, 85);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_quality_validation() {
        assert!(OutputOptions::default().jpeg_quality(1).validate().is_ok());
        assert!(OutputOptions::default().jpeg_quality(100).validate().is_ok());
        assert!(OutputOptions::default().jpeg_quality(0).validate().is_err());
        assert!(OutputOptions::default().jpeg_quality(101).validate().is_err());
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::WebP.extension(), "webp");
    }
}
