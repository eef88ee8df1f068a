//! Output directory handling and PNG serialization.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::SpriteError;

/// Extension of every written sprite.
const SPRITE_EXTENSION: &str = "png";

/// Create the output directory and any missing parents. An existing directory is fine.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_output_dir(dir: &Path) -> Result<(), SpriteError> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Path of the sprite for `identifier` inside `dir`.
#[must_use]
pub fn sprite_path(dir: &Path, identifier: &str) -> PathBuf {
    dir.join(format!("{identifier}.{SPRITE_EXTENSION}"))
}

/// Write `image` as a PNG, replacing any existing file.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn save_sprite(image: &RgbaImage, path: &Path) -> Result<(), SpriteError> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
