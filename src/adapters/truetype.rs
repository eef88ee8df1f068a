//! `TrueType`/`OpenType` label face backed by `ab_glyph`.

use std::path::Path;

use ab_glyph::{point, Font, FontVec, OutlinedGlyph, PxScale, Rect, ScaleFont};

use crate::error::SpriteError;
use crate::ports::{GlyphMask, LabelFace};

/// Well-known font locations tried when no font is configured.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Result of looking for a usable label font.
pub enum FontAvailability {
    /// A face was loaded.
    Available(TrueTypeFace),
    /// No face could be loaded; labels will be skipped.
    Unavailable {
        /// Why no face is available.
        reason: String,
    },
}

/// Find a label font: the explicit path if given, otherwise the first loadable system font.
///
/// An explicit path that fails to load does not fall through to system fonts.
#[must_use]
pub fn probe_font(explicit: Option<&Path>, px_size: f32) -> FontAvailability {
    if let Err(e) = check_px_size(px_size) {
        return FontAvailability::Unavailable { reason: e.to_string() };
    }
    if let Some(path) = explicit {
        return match TrueTypeFace::load(path, px_size) {
            Ok(face) => FontAvailability::Available(face),
            Err(e) => FontAvailability::Unavailable { reason: e.to_string() },
        };
    }

    for candidate in SYSTEM_FONT_CANDIDATES {
        let path = Path::new(candidate);
        if !path.is_file() {
            continue;
        }
        match TrueTypeFace::load(path, px_size) {
            Ok(face) => return FontAvailability::Available(face),
            Err(e) => tracing::debug!("Skipping system font {}: {e}", path.display()),
        }
    }

    FontAvailability::Unavailable {
        reason: "no font configured and no known system font found".to_string(),
    }
}

/// A scalable font rendered at a fixed pixel size.
pub struct TrueTypeFace {
    font: FontVec,
    scale: PxScale,
    name: String,
}

impl TrueTypeFace {
    /// Load a font file for rendering at `px_size` pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a usable font.
    pub fn load(path: &Path, px_size: f32) -> Result<Self, SpriteError> {
        check_px_size(px_size)?;
        let data = std::fs::read(path)
            .map_err(|e| SpriteError::Font(format!("Failed to read {}: {e}", path.display())))?;
        let font = FontVec::try_from_vec(data)
            .map_err(|e| SpriteError::Font(format!("Failed to decode {}: {e}", path.display())))?;
        let name = path.file_stem().map_or_else(
            || path.display().to_string(),
            |stem| stem.to_string_lossy().into_owned(),
        );
        Ok(Self { font, scale: PxScale::from(px_size), name })
    }

    fn layout(&self, text: &str) -> Vec<OutlinedGlyph> {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = 0.0_f32;
        let mut previous = None;
        let mut outlines = Vec::new();

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(caret, scaled.ascent()));
            caret += scaled.h_advance(id);
            previous = Some(id);

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                outlines.push(outlined);
            }
        }
        outlines
    }
}

impl LabelFace for TrueTypeFace {
    fn name(&self) -> &str {
        &self.name
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn rasterize(&self, text: &str) -> Option<GlyphMask> {
        let outlines = self.layout(text);
        let bounds = outlines.iter().map(OutlinedGlyph::px_bounds).reduce(union)?;

        // px_bounds are whole pixels, so these are exact
        let mut mask = GlyphMask::new(bounds.width().ceil() as u32, bounds.height().ceil() as u32);
        for outlined in &outlines {
            let glyph_bounds = outlined.px_bounds();
            let ox = (glyph_bounds.min.x - bounds.min.x) as u32;
            let oy = (glyph_bounds.min.y - bounds.min.y) as u32;
            outlined.draw(|x, y, coverage| mask.add(ox + x, oy + y, coverage));
        }

        (!mask.is_blank()).then_some(mask)
    }
}

fn check_px_size(px_size: f32) -> Result<(), SpriteError> {
    if px_size.is_finite() && px_size > 0.0 {
        Ok(())
    } else {
        Err(SpriteError::InvalidArgument(format!(
            "font size must be a positive number, got {px_size}"
        )))
    }
}

fn union(a: Rect, b: Rect) -> Rect {
    Rect {
        min: point(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
        max: point(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
    }
}
