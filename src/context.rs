//! Service context that bundles the resolved port implementations.

use crate::adapters::truetype::{probe_font, FontAvailability};
use crate::config::LabelConfig;
use crate::ports::LabelFace;

/// Bundles all port trait objects for one run.
pub struct ServiceContext {
    label_face: Option<Box<dyn LabelFace>>,
}

impl ServiceContext {
    /// Resolve ports from configuration.
    ///
    /// A missing or unusable font is not an error: the context simply has no label face.
    #[must_use]
    pub fn from_config(label: &LabelConfig) -> Self {
        if !label.enabled {
            tracing::debug!("Labels disabled by configuration");
            return Self::without_labels();
        }

        match probe_font(label.font.as_deref(), label.font_size) {
            FontAvailability::Available(face) => {
                tracing::debug!("Label font: {}", face.name());
                Self { label_face: Some(Box::new(face)) }
            }
            FontAvailability::Unavailable { reason } => {
                tracing::warn!("Sprites will be saved without labels: {reason}");
                Self::without_labels()
            }
        }
    }

    /// A context that never stamps labels.
    #[must_use]
    pub fn without_labels() -> Self {
        Self { label_face: None }
    }

    /// The label face, if one was found.
    #[must_use]
    pub fn label_face(&self) -> Option<&dyn LabelFace> {
        self.label_face.as_deref()
    }
}
