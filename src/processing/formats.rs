//! Output extension to encoder mapping

use crate::config::OutputOptions;

/// Map a lower-cased output extension to its encoder
///
/// This is the full encodable set; anything else is an unknown output
/// format and fails the item.
pub fn encoder_for_extension(extension: &str) -> Option<image::ImageFormat> {
    match extension {
        "jpg" | "jpeg" => Some(image::ImageFormat::Jpeg),
        "png" => Some(image::ImageFormat::Png),
        "webp" => Some(image::ImageFormat::WebP),
        "bmp" => Some(image::ImageFormat::Bmp),
        "tiff" => Some(image::ImageFormat::Tiff),
        _ => None,
    }
}

/// Resolve the output extension for a source extension under the options
///
/// Keeping the source format lower-cases the source extension; an explicit
/// format uses its canonical extension.
pub fn output_extension(source_extension: &str, options: &OutputOptions) -> String {
    match options.format {
        Some(format) => format.extension().to_string(),
        None => source_extension.to_lowercase(),
    }
}
