//! BatchResize CLI - Collision-Safe Batch Image Resizer
//!
//! A command-line shell over the batch resize pipeline: it gathers inputs,
//! resolves the sizing and output policies, and renders progress, per-item
//! failures, and the end-of-run summary.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use batchresize::{processing, scan, BatchResizer, BatchSummary, OutputFormat, OutputOptions, ResizeMode};

/// How many files the preview listing shows
const PREVIEW_LIMIT: usize = 10;

/// BatchResize - Collision-Safe Batch Image Resizer
#[derive(Parser)]
#[command(
    name = "batchresize",
    version,
    about = "Batch image resizer that never overwrites your originals",
    long_about = "BatchResize resizes a set of images into an output folder. Images are \
                  processed one at a time in input order; a corrupt file fails on its own \
                  without stopping the batch, and suffixed outputs are renamed instead of \
                  overwriting existing files."
)]
struct Cli {
    /// Input image files or folders (folders are scanned recursively)
    #[arg(required = true, value_name = "PATH")]
    input: Vec<PathBuf>,

    /// Output directory (default: 'output' next to the first input)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Scale to a percentage of the source size
    #[arg(short, long, value_name = "PCT", conflicts_with_all = ["width", "height", "stretch"])]
    percent: Option<f64>,

    /// Target width in pixels
    #[arg(short, long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Target height in pixels
    #[arg(short = 'H', long, value_name = "PIXELS")]
    height: Option<u32>,

    /// Stretch to the exact dimensions instead of fitting within them
    #[arg(long)]
    stretch: bool,

    /// Output format (default: keep each source's own format)
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    format: Option<CliFormat>,

    /// JPEG quality (1-100)
    #[arg(short, long, default_value_t = 85, value_name = "QUALITY")]
    quality: u8,

    /// Write outputs under the original name, without the '_resized' marker
    ///
    /// Also disables collision avoidance: an existing file at the target
    /// path is overwritten.
    #[arg(long)]
    no_suffix: bool,

    /// List source and target sizes without writing anything
    #[arg(long)]
    preview: bool,

    /// Emit per-item results and the summary as JSON lines
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short = 'Q', long, conflicts_with = "verbose")]
    quiet: bool,
}

/// CLI-facing output format choices
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliFormat {
    /// Keep each source's own format
    Keep,
    Jpg,
    Png,
    Webp,
}

impl CliFormat {
    fn to_output(self) -> Option<OutputFormat> {
        match self {
            Self::Keep => None,
            Self::Jpg => Some(OutputFormat::Jpeg),
            Self::Png => Some(OutputFormat::Png),
            Self::Webp => Some(OutputFormat::WebP),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    std::env::set_var("RUST_LOG", log_level);
    batchresize::init();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", style("Error").red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mode = resolve_mode(&cli)?;
    mode.validate()?;

    let output_options = OutputOptions {
        format: cli.format.and_then(CliFormat::to_output),
        append_suffix: !cli.no_suffix,
        jpeg_quality: cli.quality,
    };
    output_options.validate()?;

    let files = collect_inputs(&cli.input);
    if files.is_empty() {
        anyhow::bail!("No image files found in the given inputs");
    }

    let out_dir = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_dir(&cli.input[0]));

    if cli.preview {
        return preview(&files, &mode);
    }

    let resizer = BatchResizer::new(mode, output_options);
    let batch = resizer.process_batch(files, &out_dir)?;

    let progress_bar = if cli.json || cli.quiet {
        None
    } else {
        let pb = ProgressBar::new(batch.total() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    };

    let pb_for_progress = progress_bar.clone();
    let pb_for_log = progress_bar.clone();
    let mut batch = batch
        .on_progress(move |done, _total| {
            if let Some(pb) = &pb_for_progress {
                pb.set_position(done as u64);
            }
        })
        .on_log(move |message| match &pb_for_log {
            // Print above the bar instead of clobbering it
            Some(pb) => pb.println(message.to_string()),
            None => warn!("{}", message),
        });

    for item in batch.by_ref() {
        if cli.json {
            println!("{}", serde_json::to_string(&item)?);
        }
    }
    let summary = batch.summary();

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    print_summary(&summary, &out_dir, cli.json)
}

/// Resolve the sizing mode from CLI arguments
fn resolve_mode(cli: &Cli) -> anyhow::Result<ResizeMode> {
    if let Some(percent) = cli.percent {
        return Ok(ResizeMode::Percent { percent });
    }
    if cli.width.is_some() || cli.height.is_some() {
        return Ok(ResizeMode::Dimensions {
            width: cli.width,
            height: cli.height,
            keep_aspect: !cli.stretch,
        });
    }
    anyhow::bail!("Specify a resize mode: --percent, or --width/--height")
}

/// Expand the input arguments into an ordered file list
fn collect_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(scan::list_images(input));
        } else {
            files.extend(scan::filter_images(std::iter::once(input.clone())));
        }
    }
    files
}

/// Default output directory: 'output' next to the first input
fn default_output_dir(first_input: &Path) -> PathBuf {
    if first_input.is_dir() {
        first_input.join("output")
    } else {
        first_input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("output")
    }
}

/// Print source -> target sizes without processing anything
fn preview(files: &[PathBuf], mode: &ResizeMode) -> anyhow::Result<()> {
    println!(
        "Selected {} images. Target sizes (first {}):",
        files.len(),
        PREVIEW_LIMIT.min(files.len())
    );
    for file in files.iter().take(PREVIEW_LIMIT) {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        match image::image_dimensions(file) {
            Ok((width, height)) => {
                let (target_width, target_height) =
                    processing::compute_target_size(width, height, mode);
                println!(
                    "- {} ({}x{}) -> ({}x{})",
                    name, width, height, target_width, target_height
                );
            }
            Err(e) => println!("- {} [error: {}]", name, e),
        }
    }
    Ok(())
}

/// Print the end-of-run summary
fn print_summary(summary: &BatchSummary, out_dir: &Path, json_output: bool) -> anyhow::Result<()> {
    if json_output {
        println!("{}", serde_json::to_string(summary)?);
        return Ok(());
    }

    println!();
    println!("{}", style("Done.").bold());
    println!("  {}: {}", style("Success").green(), summary.succeeded);
    if summary.failed > 0 {
        println!("  {}: {}", style("Errors").red(), summary.failed);
    }
    println!("  {}: {}", style("Output").cyan(), out_dir.display());
    Ok(())
}
