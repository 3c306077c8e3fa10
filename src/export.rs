//! Map export as binary PNG images.
//!
//! Land renders black, water white. Output paths follow the convention
//! `<root>/Seed{seed}-{n}x{n}/w{weathering}sl{sea_level:+.2}.png`, and the
//! per-seed directory is created idempotently so concurrent sweep workers
//! can share it.

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};
use thiserror::Error;

use crate::archipelago::Archipelago;

const LAND: Luma<u8> = Luma([0]);
const WATER: Luma<u8> = Luma([255]);

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create output directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write map image: {0}")]
    Image(#[from] image::ImageError),
}

/// Render the map to a PNG under `output_root` and return the written path.
pub fn save_map(archipelago: &Archipelago, output_root: &Path) -> Result<PathBuf, ExportError> {
    let config = archipelago.config();
    let n = config.grid_size();

    let directory = output_root.join(format!("Seed{}-{}x{}", config.seed(), n, n));
    fs::create_dir_all(&directory)?;
    let path = directory.join(format!(
        "w{}sl{:+.2}.png",
        config.weathering(),
        config.sea_level()
    ));

    let mut img = GrayImage::new(n as u32, n as u32);
    for (x, y, cell) in archipelago.grid().iter() {
        let pixel = if cell.is_land() { LAND } else { WATER };
        img.put_pixel(x as u32, y as u32, pixel);
    }
    img.save(&path)?;

    Ok(path)
}
