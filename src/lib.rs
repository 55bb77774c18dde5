//! BatchResize - Collision-Safe Batch Image Resizer
//!
//! A small, predictable library for batch image resizing. Images are
//! processed strictly sequentially; per-item failures never abort a batch,
//! and suffixed outputs never overwrite existing files.
//!
//! # Features
//!
//! - **Two sizing modes**: percentage scaling or explicit pixel dimensions
//!   with optional aspect preservation (fit-within on two bounds)
//! - **Collision-safe naming**: suffixed outputs probe `_2`, `_3`, ...
//!   instead of clobbering existing files
//! - **Resilient batches**: one corrupt input yields one failed result,
//!   the rest of the batch still runs
//! - **Format Support**: JPEG, PNG, WebP, BMP, TIFF
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use batchresize::{BatchResizer, OutputOptions, ResizeMode};
//! use std::path::PathBuf;
//!
//! # fn main() -> batchresize::Result<()> {
//! let resizer = BatchResizer::new(
//!     ResizeMode::Percent { percent: 50.0 },
//!     OutputOptions::default(),
//! );
//!
//! let batch = resizer
//!     .process_batch(vec![PathBuf::from("photo.jpg")], "output".as_ref())?
//!     .on_progress(|done, total| println!("{}/{}", done, total));
//!
//! for item in batch {
//!     match item.dest_path {
//!         Some(dest) => println!("{} -> {}", item.source_path.display(), dest.display()),
//!         None => eprintln!("failed: {}", item.source_path.display()),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod processing;
pub mod scan;

// Re-export commonly used types
pub use config::{OutputFormat, OutputOptions, ResizeMode};
pub use error::{BatchResizeError, Result};
pub use processing::{Batch, BatchResizer, BatchSummary, ItemResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging for the library
///
/// Installs a tracing subscriber driven by `RUST_LOG`. Safe to call more
/// than once; later calls are no-ops.
pub fn init() {
    let _ = tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_init() {
        // Should not fail on multiple calls
        init();
        init();
    }
}
