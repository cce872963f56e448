use std::fs;
use std::path::Path;

use raylib::prelude::*;
use tracing::debug;

use theme_carousel::LoadError;
use theme_carousel::images::{Orientation, extension_of, read_orientation};

/// Load an image, turn it upright according to its EXIF data and upload it.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let orientation = read_orientation(path, &bytes);
    let extension = extension_of(path);

    // raylib picks the decoder from the extension hint
    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes).map_err(|e| {
        LoadError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    match orientation {
        Orientation::Normal => {}
        Orientation::Rotate180 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Orientation::Rotate90Cw => image.rotate_cw(),
        Orientation::Rotate90Ccw => image.rotate_ccw(),
    }
    if orientation != Orientation::Normal {
        debug!(path = %path.display(), ?orientation, "applied EXIF rotation");
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| LoadError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}
