//! Image import: decoding and scale-to-fit placement onto the grid.

use image::{imageops, imageops::FilterType, RgbaImage};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not decode image data: {0}")]
    Decode(#[from] image::ImageError),
    #[error("image has no pixels")]
    EmptyImage,
}

pub type ImportResult<T> = std::result::Result<T, ImportError>;

/// Decodes raw bytes from the import collaborator into an RGBA raster.
pub fn decode_bytes(bytes: &[u8]) -> ImportResult<RgbaImage> {
    let decoded = image::load_from_memory(bytes)?.to_rgba8();
    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(ImportError::EmptyImage);
    }
    Ok(decoded)
}

/// Scales a source raster to the grid height preserving its aspect ratio
/// and returns it with the horizontal offset that centers it. Sources wider
/// than the grid overhang on both sides and get clipped by the grid's
/// bounds handling.
pub fn scale_to_grid(
    source: &RgbaImage,
    grid_width: u32,
    grid_height: u32,
) -> ImportResult<(RgbaImage, i32)> {
    if source.width() == 0 || source.height() == 0 {
        return Err(ImportError::EmptyImage);
    }

    let scale = f64::from(grid_height) / f64::from(source.height());
    let scaled_width = ((f64::from(source.width()) * scale).round() as u32).max(1);
    let scaled = imageops::resize(source, scaled_width, grid_height, FilterType::Triangle);
    let offset_x = (grid_width as i32 - scaled_width as i32) / 2;

    tracing::debug!(
        source_width = source.width(),
        source_height = source.height(),
        scaled_width,
        offset_x,
        "import raster scaled to grid"
    );
    Ok((scaled, offset_x))
}
