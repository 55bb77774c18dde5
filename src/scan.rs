//! Input discovery and filtering

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extensions that qualify a file as an image input
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "bmp", "tiff"];

/// Recursively collect image files under a folder
///
/// Order is filesystem traversal order, not sorted. The extension match is
/// case-sensitive against the lower-case set, so `photo.JPG` does not
/// qualify here.
pub fn list_images(folder: &Path) -> Vec<PathBuf> {
    WalkDir::new(folder)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| has_supported_extension(path, false))
        .collect()
}

/// Filter an explicitly selected file list down to image inputs
///
/// Unlike the folder scan, explicit picks match extensions
/// case-insensitively.
pub fn filter_images<I>(paths: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    paths
        .into_iter()
        .filter(|path| has_supported_extension(path, true))
        .collect()
}

fn has_supported_extension(path: &Path, ignore_case: bool) -> bool {
    let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    if ignore_case {
        let lowered = extension.to_lowercase();
        SUPPORTED_EXTENSIONS.contains(&lowered.as_str())
    } else {
        SUPPORTED_EXTENSIONS.contains(&extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_list_images_recurses_and_filters() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("a.png"), b"x").unwrap();
        fs::write(nested.join("b.jpg"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let mut found = list_images(dir.path());
        found.sort();
        assert_eq!(
            found,
            vec![dir.path().join("a.png"), nested.join("b.jpg")]
        );
    }

    #[test]
    fn test_list_images_is_case_sensitive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("shouty.JPG"), b"x").unwrap();
        fs::write(dir.path().join("quiet.jpg"), b"x").unwrap();

        let found = list_images(dir.path());
        assert_eq!(found, vec![dir.path().join("quiet.jpg")]);
    }

    #[test]
    fn test_filter_images_ignores_case() {
        let picked = vec![
            PathBuf::from("a.PNG"),
            PathBuf::from("b.jpeg"),
            PathBuf::from("c.txt"),
            PathBuf::from("noext"),
        ];
        assert_eq!(
            filter_images(picked),
            vec![PathBuf::from("a.PNG"), PathBuf::from("b.jpeg")]
        );
    }
}
