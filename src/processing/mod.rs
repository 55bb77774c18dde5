//! Core batch resize pipeline
//!
//! A batch runs strictly sequentially in input order: one image is fully
//! decoded, resized, and encoded before the next begins. Results are
//! produced lazily through the [`Batch`] iterator so callers observe
//! progress without buffering the whole run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{OutputOptions, ResizeMode};
use crate::error::{BatchResizeError, Result};

pub mod formats;
pub mod naming;
pub mod sizing;

pub use formats::*;
pub use naming::*;
pub use sizing::*;

/// Progress callback: (items processed so far, total item count)
pub type ProgressFn<'a> = Box<dyn FnMut(usize, usize) + 'a>;

/// Log callback for human-readable per-item messages
pub type LogFn<'a> = Box<dyn FnMut(&str) + 'a>;

/// Batch resize engine holding one fully-resolved policy pair
pub struct BatchResizer {
    mode: ResizeMode,
    output: OutputOptions,
}

impl BatchResizer {
    /// Create an engine for the given sizing and output policies
    pub fn new(mode: ResizeMode, output: OutputOptions) -> Self {
        Self { mode, output }
    }

    /// Start a batch over the given inputs, writing into `out_dir`
    ///
    /// The output directory (with parents) is created up front; an empty
    /// input list and an uncreatable directory are reported here, before
    /// any per-item processing. The returned iterator yields one
    /// [`ItemResult`] per input, in input order.
    pub fn process_batch(&self, inputs: Vec<PathBuf>, out_dir: &Path) -> Result<Batch<'_>> {
        if inputs.is_empty() {
            return Err(BatchResizeError::EmptyBatch);
        }

        fs::create_dir_all(out_dir).map_err(|source| BatchResizeError::OutputDir {
            path: out_dir.to_path_buf(),
            source,
        })?;

        info!("Starting batch of {} images into {:?}", inputs.len(), out_dir);

        let total = inputs.len();
        Ok(Batch {
            resizer: self,
            out_dir: out_dir.to_path_buf(),
            files: inputs.into_iter(),
            total,
            done: 0,
            succeeded: 0,
            failed: 0,
            progress: None,
            log: None,
        })
    }

    /// Decode, resize, and encode a single image
    fn process_one(&self, source: &Path, out_dir: &Path) -> Result<ProcessedItem> {
        let image = image::io::Reader::open(source)?
            .with_guessed_format()?
            .decode()?;
        let (source_width, source_height) = (image.width(), image.height());
        let (target_width, target_height) =
            sizing::compute_target_size(source_width, source_height, &self.mode);

        debug!(
            "{:?}: {}x{} -> {}x{}",
            source, source_width, source_height, target_width, target_height
        );

        // Unchanged dimensions pass through without a resample
        let image = if (target_width, target_height) != (source_width, source_height) {
            let filter =
                sizing::resample_filter(source_width, source_height, target_width, target_height);
            image.resize_exact(target_width, target_height, filter)
        } else {
            image
        };

        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| BatchResizeError::InvalidFileName {
                file: source.to_path_buf(),
            })?;
        let source_extension = source
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = formats::output_extension(&source_extension, &self.output);
        let format = formats::encoder_for_extension(&extension)
            .ok_or_else(|| BatchResizeError::unsupported_format(extension.clone()))?;

        let name = naming::output_file_name(&stem, &extension, self.output.append_suffix);
        let mut destination = out_dir.join(name);
        if self.output.append_suffix {
            destination = naming::next_available(destination);
        }

        save_image(image, &destination, format, self.output.jpeg_quality)?;

        Ok(ProcessedItem {
            destination,
            source_dimensions: (source_width, source_height),
            target_dimensions: (target_width, target_height),
        })
    }
}

/// Encode an image to its destination
fn save_image(
    image: image::DynamicImage,
    destination: &Path,
    format: image::ImageFormat,
    jpeg_quality: u8,
) -> Result<()> {
    if matches!(format, image::ImageFormat::Jpeg) {
        // JPEG has no alpha channel; flatten before encoding
        let image = if image.color().has_alpha() {
            image::DynamicImage::ImageRgb8(image.to_rgb8())
        } else {
            image
        };

        let mut file = fs::File::create(destination)?;
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut file, jpeg_quality);
        image.write_with_encoder(encoder)?;
    } else {
        // Quality only applies to JPEG; everything else encodes as-is
        image.save_with_format(destination, format)?;
    }
    Ok(())
}

struct ProcessedItem {
    destination: PathBuf,
    source_dimensions: (u32, u32),
    target_dimensions: (u32, u32),
}

/// Outcome of processing one input image
#[derive(Debug, Clone, Serialize)]
pub struct ItemResult {
    pub source_path: PathBuf,
    pub dest_path: Option<PathBuf>,
    pub success: bool,
    pub error: Option<String>,
    pub source_dimensions: Option<(u32, u32)>,
    pub target_dimensions: Option<(u32, u32)>,
}

impl ItemResult {
    fn succeeded(source: PathBuf, item: ProcessedItem) -> Self {
        Self {
            source_path: source,
            dest_path: Some(item.destination),
            success: true,
            error: None,
            source_dimensions: Some(item.source_dimensions),
            target_dimensions: Some(item.target_dimensions),
        }
    }

    fn failed(source: PathBuf, error: &BatchResizeError) -> Self {
        Self {
            source_path: source,
            dest_path: None,
            success: false,
            error: Some(error.to_string()),
            source_dimensions: None,
            target_dimensions: None,
        }
    }
}

/// Running counters for one batch
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Lazy, non-restartable result stream for one batch run
///
/// One bad input never halts the batch: per-item failures become failed
/// results and iteration continues with the next input.
pub struct Batch<'a> {
    resizer: &'a BatchResizer,
    out_dir: PathBuf,
    files: std::vec::IntoIter<PathBuf>,
    total: usize,
    done: usize,
    succeeded: usize,
    failed: usize,
    progress: Option<ProgressFn<'a>>,
    log: Option<LogFn<'a>>,
}

impl<'a> Batch<'a> {
    /// Attach a progress sink, invoked exactly once per item
    pub fn on_progress(mut self, callback: impl FnMut(usize, usize) + 'a) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Attach a log sink, invoked for every failed item
    pub fn on_log(mut self, callback: impl FnMut(&str) + 'a) -> Self {
        self.log = Some(Box::new(callback));
        self
    }

    /// Total number of inputs in this batch
    pub fn total(&self) -> usize {
        self.total
    }

    /// Snapshot of the counters accumulated so far
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            processed: self.done,
            succeeded: self.succeeded,
            failed: self.failed,
        }
    }
}

impl Iterator for Batch<'_> {
    type Item = ItemResult;

    fn next(&mut self) -> Option<ItemResult> {
        let source = self.files.next()?;

        let result = match self.resizer.process_one(&source, &self.out_dir) {
            Ok(item) => {
                self.succeeded += 1;
                ItemResult::succeeded(source, item)
            }
            Err(error) => {
                self.failed += 1;
                let name = source
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| source.display().to_string());
                if let Some(log) = self.log.as_mut() {
                    log(&format!("[Error] {} -> {}", name, error));
                }
                ItemResult::failed(source, &error)
            }
        };

        // Progress fires exactly once per item, success or failure
        self.done += 1;
        if let Some(progress) = self.progress.as_mut() {
            progress(self.done, self.total);
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.files.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Batch<'_> {}
