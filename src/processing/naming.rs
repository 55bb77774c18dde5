//! Output file naming and collision avoidance

use std::path::{Path, PathBuf};

/// Fixed marker appended before the extension when suffixing is on
pub const RESIZE_SUFFIX: &str = "_resized";

/// Build the output file name from a stem and resolved extension
pub fn output_file_name(stem: &str, extension: &str, append_suffix: bool) -> String {
    let marker = if append_suffix { RESIZE_SUFFIX } else { "" };
    format!("{}{}.{}", stem, marker, extension)
}

/// Return the first path that does not collide with an existing file
///
/// An unoccupied candidate is returned unchanged; otherwise numeric
/// suffixes `_2`, `_3`, ... are probed before the extension. The probe is
/// unbounded; batches are small and this is a local filesystem check.
pub fn next_available(candidate: PathBuf) -> PathBuf {
    if !candidate.exists() {
        return candidate;
    }

    let stem = candidate
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = candidate
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let parent = candidate.parent().unwrap_or_else(|| Path::new(""));

    let mut index = 2u64;
    loop {
        let probe = parent.join(format!("{}_{}{}", stem, index, extension));
        if !probe.is_file() {
            return probe;
        }
        index += 1;
    }
}
