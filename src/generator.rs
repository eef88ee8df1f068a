//! Sprite generation: render, border, label, persist.

use std::fmt;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::catalog::{Catalog, MonsterDescriptor};
use crate::config::RenderConfig;
use crate::error::SpriteError;
use crate::label::{stamp_label, LabelOutcome};
use crate::output::{ensure_output_dir, save_sprite, sprite_path};
use crate::palette::BorderPalette;
use crate::ports::LabelFace;
use crate::render::{draw_border, render_gradient};

/// How far a single sprite has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteStage {
    /// Nothing painted yet.
    Pending,
    /// Painted in memory.
    Rendered,
    /// Written to disk.
    Persisted,
}

impl fmt::Display for SpriteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Rendered => "rendered",
            Self::Persisted => "persisted",
        })
    }
}

/// Canvas geometry shared by every sprite in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Side length in pixels.
    pub size: u32,
    /// Number of border rings.
    pub border_width: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderConfig::default().into()
    }
}

impl From<RenderConfig> for RenderOptions {
    fn from(config: RenderConfig) -> Self {
        Self { size: config.size, border_width: config.border_width }
    }
}

/// A painted sprite that has not been written anywhere yet.
pub struct Sprite {
    /// The pixels.
    pub image: RgbaImage,
    /// Whether the label made it onto the pixels.
    pub label: LabelOutcome,
}

/// Summary of a completed run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Every file written, in catalog order.
    pub written: Vec<PathBuf>,
    /// How many of those were saved without a label.
    pub unlabeled: usize,
}

/// Paint one sprite: gradient, then border, then label.
///
/// # Errors
///
/// Returns an error if the canvas size is zero.
pub fn create_sprite(
    descriptor: &MonsterDescriptor,
    palette: &BorderPalette,
    options: RenderOptions,
    face: Option<&dyn LabelFace>,
) -> Result<Sprite, SpriteError> {
    let mut image = render_gradient(descriptor, options.size)?;
    draw_border(&mut image, palette.color_for(&descriptor.rarity), options.border_width);
    let label = stamp_label(&mut image, descriptor, face);
    Ok(Sprite { image, label })
}

/// Generate and save a sprite for every catalog entry, in order.
///
/// `on_saved` is called with each written path. The first failure stops the run;
/// files written before it are left in place.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created, or
/// [`SpriteError::Item`] for the first sprite that fails.
pub fn generate_all(
    catalog: &Catalog,
    palette: &BorderPalette,
    options: RenderOptions,
    face: Option<&dyn LabelFace>,
    output_dir: &Path,
    mut on_saved: impl FnMut(&Path),
) -> Result<GenerationReport, SpriteError> {
    ensure_output_dir(output_dir)?;

    let mut report = GenerationReport::default();
    for descriptor in catalog {
        let mut stage = SpriteStage::Pending;
        let (path, label) =
            match process(descriptor, palette, options, face, output_dir, &mut stage) {
                Ok(done) => done,
                Err(source) => {
                    return Err(SpriteError::Item {
                        identifier: descriptor.identifier.clone(),
                        stage,
                        source: Box::new(source),
                    });
                }
            };

        if let LabelOutcome::Skipped(reason) = label {
            tracing::debug!(identifier = %descriptor.identifier, %reason, "label skipped");
            report.unlabeled += 1;
        }
        on_saved(&path);
        report.written.push(path);
    }
    Ok(report)
}

fn process(
    descriptor: &MonsterDescriptor,
    palette: &BorderPalette,
    options: RenderOptions,
    face: Option<&dyn LabelFace>,
    output_dir: &Path,
    stage: &mut SpriteStage,
) -> Result<(PathBuf, LabelOutcome), SpriteError> {
    let sprite = create_sprite(descriptor, palette, options, face)?;
    *stage = SpriteStage::Rendered;
    tracing::debug!(identifier = %descriptor.identifier, tier = descriptor.rarity.name(), %stage);

    let path = sprite_path(output_dir, &descriptor.identifier);
    save_sprite(&sprite.image, &path)?;
    *stage = SpriteStage::Persisted;
    tracing::debug!(identifier = %descriptor.identifier, %stage, path = %path.display());

    Ok((path, sprite.label))
}
