//! Export sinks: where composed rasters go once the engine is done with
//! them. The engine itself never encodes; sinks do.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use thiserror::Error;

const EXPORT_SUBDIR: &str = "Pictures";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("artwork name is empty")]
    MissingArtworkName,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("image encode error: {0}")]
    Image(#[from] image::ImageError),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Receives finished rasters (a single frame or a composed spritesheet)
/// from the session for encoding and delivery.
pub trait ArtworkSink {
    fn save_artwork(&self, name: &str, image: &RgbaImage) -> StorageResult<PathBuf>;
}

/// The shipped sink: PNG files in a pictures directory.
#[derive(Debug, Clone)]
pub struct ExportService {
    pictures_dir: PathBuf,
}

impl ExportService {
    pub const fn with_paths(pictures_dir: PathBuf) -> Self {
        Self { pictures_dir }
    }

    pub fn with_default_paths() -> StorageResult<Self> {
        let home = std::env::var("HOME").map_err(|_| StorageError::MissingHomeDirectory)?;
        let mut pictures_dir = PathBuf::from(home);
        pictures_dir.push(EXPORT_SUBDIR);
        fs::create_dir_all(&pictures_dir)?;
        Ok(Self::with_paths(pictures_dir))
    }

    pub fn pictures_dir(&self) -> &Path {
        &self.pictures_dir
    }

    fn validate_artwork_name(name: &str) -> StorageResult<()> {
        if name.is_empty() {
            return Err(StorageError::MissingArtworkName);
        }
        Ok(())
    }

    pub fn allocate_target_path(&self, name: &str) -> StorageResult<PathBuf> {
        Self::validate_artwork_name(name)?;
        let mut path = self.pictures_dir.clone();
        path.push(format!("{name}.png"));
        Ok(path)
    }

    pub fn save_artwork(&self, name: &str, image: &RgbaImage) -> StorageResult<PathBuf> {
        let target = self.allocate_target_path(name)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        image.save_with_format(&target, image::ImageFormat::Png)?;
        tracing::debug!(path = %target.display(), "artwork written");
        Ok(target)
    }
}

impl ArtworkSink for ExportService {
    fn save_artwork(&self, name: &str, image: &RgbaImage) -> StorageResult<PathBuf> {
        self.save_artwork(name, image)
    }
}
