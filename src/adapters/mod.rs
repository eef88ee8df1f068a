//! Adapter implementations for port traits.
//!
//! - `truetype` — label faces loaded from font files via `ab_glyph`

pub mod truetype;
