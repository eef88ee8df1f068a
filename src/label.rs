//! Abbreviated name labels stamped onto sprites.

use std::fmt;

use image::{Pixel, Rgba, RgbaImage};

use crate::catalog::MonsterDescriptor;
use crate::ports::{GlyphMask, LabelFace};

/// Characters of the identifier kept in the label.
const LABEL_LEN: usize = 3;

const SHADOW_OFFSET: i64 = 1;
const SHADOW: Rgba<u8> = Rgba([0, 0, 0, 200]);
const INK: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// What happened when a label was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOutcome {
    /// The label was painted.
    Stamped {
        /// The text that was painted.
        text: String,
    },
    /// Nothing was painted; the sprite is otherwise complete.
    Skipped(SkipReason),
}

/// Why a label was not painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No label face is available in this run.
    NoFace,
    /// The face produced no visible glyphs for the text.
    NoGlyphs,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFace => f.write_str("no label font available"),
            Self::NoGlyphs => f.write_str("font has no visible glyphs for the label"),
        }
    }
}

/// The label for an identifier: its first three characters, upper-cased.
#[must_use]
pub fn label_text(identifier: &str) -> String {
    identifier.chars().take(LABEL_LEN).collect::<String>().to_uppercase()
}

/// Center the descriptor's label on the canvas over a one-pixel drop shadow.
///
/// Without a face, or when the face yields no coverage, the canvas is left untouched.
pub fn stamp_label(
    image: &mut RgbaImage,
    descriptor: &MonsterDescriptor,
    face: Option<&dyn LabelFace>,
) -> LabelOutcome {
    let Some(face) = face else {
        return LabelOutcome::Skipped(SkipReason::NoFace);
    };
    let text = label_text(&descriptor.identifier);
    let Some(mask) = face.rasterize(&text) else {
        return LabelOutcome::Skipped(SkipReason::NoGlyphs);
    };

    let (width, height) = image.dimensions();
    let ox = (i64::from(width) - i64::from(mask.width())).div_euclid(2);
    let oy = (i64::from(height) - i64::from(mask.height())).div_euclid(2);

    paint_mask(image, &mask, ox + SHADOW_OFFSET, oy + SHADOW_OFFSET, SHADOW);
    paint_mask(image, &mask, ox, oy, INK);

    LabelOutcome::Stamped { text }
}

fn paint_mask(image: &mut RgbaImage, mask: &GlyphMask, ox: i64, oy: i64, color: Rgba<u8>) {
    let (width, height) = image.dimensions();
    for my in 0..mask.height() {
        for mx in 0..mask.width() {
            let coverage = mask.coverage(mx, my);
            if coverage <= 0.0 {
                continue;
            }
            let (Ok(x), Ok(y)) = (u32::try_from(ox + i64::from(mx)), u32::try_from(oy + i64::from(my)))
            else {
                continue;
            };
            if x < width && y < height {
                blend(image.get_pixel_mut(x, y), color, coverage);
            }
        }
    }
}

/// Composite `src` over `dst` with its alpha scaled by `coverage`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend(dst: &mut Rgba<u8>, mut src: Rgba<u8>, coverage: f32) {
    // coverage is clamped to 0..=1, so the product stays in 0..=255
    src[3] = (f32::from(src[3]) * coverage.clamp(0.0, 1.0)).round() as u8;
    dst.blend(&src);
}
