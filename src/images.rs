//! Locating slide images on disk and reading their EXIF orientation.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use tracing::{debug, warn};

use crate::error::LoadError;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Lower-cased extension of `path`, empty when there is none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Image files directly inside `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && IMAGE_EXTENSIONS.contains(&extension_of(&path).as_str()) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        return Err(LoadError::NoImages(dir.to_path_buf()));
    }
    debug!(count = paths.len(), dir = %dir.display(), "found slide images");
    Ok(paths)
}

/// Rotation needed to show an image upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Normal,
    Rotate180,
    Rotate90Cw,
    Rotate90Ccw,
}

impl Orientation {
    /// Map an EXIF orientation value. Mirrored variants are shown unrotated.
    pub fn from_exif(value: u16) -> Self {
        match value {
            3 => Orientation::Rotate180,
            6 => Orientation::Rotate90Cw,
            8 => Orientation::Rotate90Ccw,
            _ => Orientation::Normal,
        }
    }
}

/// Orientation stored in a JPEG's EXIF block. Other formats are left as is.
pub fn read_orientation(path: &Path, bytes: &[u8]) -> Orientation {
    if !matches!(extension_of(path).as_str(), "jpg" | "jpeg") {
        return Orientation::Normal;
    }

    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .map(Orientation::from_exif)
            .unwrap_or_default(),
        Err(e) => {
            warn!(path = %path.display(), "could not read EXIF data: {e}");
            Orientation::Normal
        }
    }
}

/// File stem of `path` as UTF-8, lossy.
pub fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_images_sorted_and_skips_others() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.JPG", "a.png", "notes.txt", "c.gif", "d"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let paths = load_sorted_image_paths(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["a.png", "b.JPG", "c.gif"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), b"x").unwrap();
        let err = load_sorted_image_paths(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::NoImages(_)));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_sorted_image_paths(&dir.path().join("gone")).unwrap_err();
        assert!(matches!(err, LoadError::ReadDir { .. }));
    }

    #[test]
    fn orientation_values() {
        assert_eq!(Orientation::from_exif(1), Orientation::Normal);
        assert_eq!(Orientation::from_exif(3), Orientation::Rotate180);
        assert_eq!(Orientation::from_exif(6), Orientation::Rotate90Cw);
        assert_eq!(Orientation::from_exif(8), Orientation::Rotate90Ccw);
        assert_eq!(Orientation::from_exif(2), Orientation::Normal);
    }

    #[test]
    fn non_jpeg_and_garbage_are_upright() {
        assert_eq!(
            read_orientation(Path::new("a.png"), b"\x89PNG"),
            Orientation::Normal
        );
        assert_eq!(
            read_orientation(Path::new("a.jpg"), b"not a jpeg"),
            Orientation::Normal
        );
    }

    #[test]
    fn stems() {
        assert_eq!(stem_of(Path::new("/x/beach@ocean.jpg")), "beach@ocean");
        assert_eq!(extension_of(Path::new("A.JPEG")), "jpeg");
        assert_eq!(extension_of(Path::new("noext")), "");
    }
}
