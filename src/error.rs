//! Error types and handling for BatchResize

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for BatchResize operations
pub type Result<T> = std::result::Result<T, BatchResizeError>;

/// Main error type for BatchResize operations
#[derive(Debug, Error)]
pub enum BatchResizeError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Image decode/resize/encode errors
    #[error("Image processing error: {0}")]
    ImageError(#[from] image::ImageError),

    /// Output extension has no known encoder
    #[error("Unknown output format .{extension}")]
    UnsupportedFormat { extension: String },

    /// Input path has no usable file name
    #[error("Invalid input file name: {file:?}")]
    InvalidFileName { file: PathBuf },

    /// Invalid resize or output parameters
    #[error("Invalid parameters: {message}")]
    InvalidParameters { message: String },

    /// Batch started with no inputs
    #[error("No input images to process")]
    EmptyBatch,

    /// Output directory could not be created
    #[error("Failed to create output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl BatchResizeError {
    /// Create a new unsupported format error
    pub fn unsupported_format<S: Into<String>>(extension: S) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Create a new invalid parameters error
    pub fn invalid_parameters<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable (the batch can continue)
    pub fn is_recoverable(&self) -> bool {
        match self {
            // These errors affect individual files but the batch continues
            Self::IoError(_)
            | Self::ImageError(_)
            | Self::UnsupportedFormat { .. }
            | Self::InvalidFileName { .. } => true,

            // Precondition failures stop the batch before it starts
            Self::InvalidParameters { .. } | Self::EmptyBatch | Self::OutputDir { .. } => false,
        }
    }
}
