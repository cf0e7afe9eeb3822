use std::fs;
use std::io::Cursor;
use std::path::Path;
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use tracing::{debug, warn};

use crate::error::{StoryError, StoryResult};
use crate::layout::{fit_size, ScreenSize};

// --- EXIF orientation, JPEG only; 1 (normal) for everything else ---
fn exif_orientation(image_path: &Path, extension: &str, file_bytes: &[u8]) -> u16 {
    if extension != "jpg" && extension != "jpeg" {
        return 1;
    }
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Non-critical: proceed without rotation
            warn!("could not read EXIF data for {}: {}", image_path.display(), e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Fit To Screen, Create Texture ---
pub fn load_texture_fitted(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
    screen: ScreenSize,
) -> StoryResult<Texture2D> {
    let file_bytes = fs::read(image_path)
        .map_err(|e| StoryError::asset(image_path, e.to_string()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let orientation = exif_orientation(image_path, &extension, &file_bytes);

    // Extension hint is required when loading from memory
    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| StoryError::asset(image_path, e.to_string()))?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flipped variants are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    let (width, height) = fit_size(image.width(), image.height(), screen);
    image.resize(width, height);
    debug!(path = %image_path.display(), width, height, orientation, "image loaded");

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| StoryError::render(format!("texture for {}: {}", image_path.display(), e)))
}

pub fn placeholder_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    screen: ScreenSize,
    color: Color,
) -> StoryResult<Texture2D> {
    let image = Image::gen_image_color(screen.width, screen.height, color);
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| StoryError::render(format!("placeholder texture: {e}")))
}
