//! Label face port for rasterizing short text runs.

/// Per-pixel glyph coverage for a laid-out text run.
///
/// Coverage values are in `0.0..=1.0`, row-major, tightly bounded around the glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphMask {
    width: u32,
    height: u32,
    coverage: Vec<f32>,
}

impl GlyphMask {
    /// An empty (zero-coverage) mask.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, coverage: vec![0.0; width as usize * height as usize] }
    }

    /// Mask width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Coverage at `(x, y)`; zero outside the mask.
    #[must_use]
    pub fn coverage(&self, x: u32, y: u32) -> f32 {
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.coverage[self.index(x, y)]
    }

    /// Accumulate coverage at `(x, y)`, saturating at 1.0. Out-of-bounds writes are dropped.
    pub fn add(&mut self, x: u32, y: u32, amount: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.index(x, y);
        self.coverage[i] = (self.coverage[i] + amount).clamp(0.0, 1.0);
    }

    /// Whether any pixel has coverage.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.coverage.iter().all(|&c| c <= 0.0)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Something that can turn label text into glyph coverage.
pub trait LabelFace {
    /// Human-readable name of the face, for logs.
    fn name(&self) -> &str;

    /// Lay out and rasterize `text`. Returns `None` when nothing visible results.
    fn rasterize(&self, text: &str) -> Option<GlyphMask>;
}
