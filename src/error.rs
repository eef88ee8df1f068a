//! Unified error type for spritegen.

use thiserror::Error;

use crate::generator::SpriteStage;

/// Errors that can occur while generating sprites.
#[derive(Debug, Error)]
pub enum SpriteError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A color string could not be parsed as `#RRGGBB`.
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor {
        /// The offending input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The catalog violates an identifier rule.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// A font file could not be used.
    #[error("Font error: {0}")]
    Font(String),

    /// The image could not be encoded or written.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// A single sprite failed; the run stops here.
    #[error("Sprite '{identifier}' failed at stage {stage}: {source}")]
    Item {
        /// Identifier of the sprite being processed.
        identifier: String,
        /// Last stage the sprite reached.
        stage: SpriteStage,
        /// Underlying failure.
        #[source]
        source: Box<SpriteError>,
    },
}
