//! Port traits defining external boundaries.
//!
//! Implementations live in `src/adapters/`.

pub mod label_face;

pub use label_face::{GlyphMask, LabelFace};
