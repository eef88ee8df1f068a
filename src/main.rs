//! Spritegen - placeholder sprite generator for the monster roster.

mod adapters;
mod catalog;
mod config;
mod context;
mod error;
mod generator;
mod label;
mod output;
mod palette;
mod ports;
mod render;

use std::process;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::SpriteError;
use crate::generator::{generate_all, RenderOptions};
use crate::palette::BorderPalette;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), SpriteError> {
    let config_path = config::discover_config_path();
    tracing::debug!("Config: {}", config_path.display());
    let config = Config::load(&config_path).map_err(SpriteError::Config)?;

    let catalog = config.catalog()?;
    if catalog.is_empty() {
        tracing::warn!("Catalog is empty; nothing to generate");
    }
    let ctx = ServiceContext::from_config(&config.label);
    let options = RenderOptions::from(config.render);

    eprintln!("Generating {} monster sprites...", catalog.len());
    let report = generate_all(
        &catalog,
        &BorderPalette::default(),
        options,
        ctx.label_face(),
        &config.output_dir,
        |path| eprintln!("Saved: {}", path.display()),
    )?;

    eprintln!(
        "Generated {} sprites in {}",
        report.written.len(),
        config.output_dir.display()
    );
    if report.unlabeled > 0 {
        eprintln!("{} sprites saved without a label", report.unlabeled);
    }
    Ok(())
}
