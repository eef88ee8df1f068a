//! Gradient fill and border rings.

use image::{Rgba, RgbaImage};

use crate::catalog::{Color, MonsterDescriptor};
use crate::error::SpriteError;

/// Brightness lost between the center and the edge of the gradient circle.
const FALLOFF: f64 = 0.7;

/// Largest accepted canvas side; 8192² RGBA pixels is 256 MiB.
pub const MAX_SIZE: u32 = 8192;

/// Paint a radial gradient of the descriptor's base color into a new `size × size` canvas.
///
/// The circle has radius `size / 2` around `(size / 2, size / 2)`. Pixels strictly inside
/// it are opaque and darken linearly from the full base color to 30% of it; everything
/// else stays fully transparent.
///
/// # Errors
///
/// Returns [`SpriteError::InvalidArgument`] if `size` is zero or above [`MAX_SIZE`].
pub fn render_gradient(descriptor: &MonsterDescriptor, size: u32) -> Result<RgbaImage, SpriteError> {
    if size == 0 {
        return Err(SpriteError::InvalidArgument("sprite size must be positive".to_string()));
    }
    if size > MAX_SIZE {
        return Err(SpriteError::InvalidArgument(format!(
            "sprite size must be at most {MAX_SIZE}, got {size}"
        )));
    }

    let center = f64::from(size / 2);
    let max_distance = f64::from(size / 2);
    let base = descriptor.base_color;

    let mut image = RgbaImage::new(size, size);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = f64::from(x) - center;
        let dy = f64::from(y) - center;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance < max_distance {
            let factor = 1.0 - (distance / max_distance) * FALLOFF;
            *pixel = Rgba([
                scale_channel(base.r, factor),
                scale_channel(base.g, factor),
                scale_channel(base.b, factor),
                255,
            ]);
        }
    }
    Ok(image)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_channel(channel: u8, factor: f64) -> u8 {
    // factor is within (0.3, 1.0], so the product stays in 0..=255
    (f64::from(channel) * factor) as u8
}

/// Draw `width` nested one-pixel square outlines in `color`, outermost ring on the canvas edge.
///
/// Rings overwrite whatever is underneath, transparent pixels included.
pub fn draw_border(image: &mut RgbaImage, color: Color, width: u32) {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    let pixel = color.opaque();

    for ring in 0..width {
        let (right, bottom) = (w - 1 - ring.min(w - 1), h - 1 - ring.min(h - 1));
        if ring > right || ring > bottom {
            break;
        }
        for x in ring..=right {
            image.put_pixel(x, ring, pixel);
            image.put_pixel(x, bottom, pixel);
        }
        for y in ring..=bottom {
            image.put_pixel(ring, y, pixel);
            image.put_pixel(right, y, pixel);
        }
    }
}
