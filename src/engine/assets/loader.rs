// Asset loading functionality

use super::AssetError;
use std::path::{Path, PathBuf};

/// Asset loader responsible for finding and loading asset files
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Check if an asset exists
    pub fn exists(&self, name: &str) -> bool {
        self.resolve_path(name).is_file()
    }

    /// Load asset bytes from disk
    pub fn load_bytes(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve_path(name);

        if !self.exists(name) {
            return Err(AssetError::NotFound(path));
        }

        std::fs::read(&path).map_err(|source| AssetError::Io { path, source })
    }

    /// Load and decode an image as RGBA8
    pub fn load_image(&self, name: &str) -> Result<image::RgbaImage, AssetError> {
        let bytes = self.load_bytes(name)?;
        let image = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
            path: self.resolve_path(name),
            source,
        })?;

        Ok(image.to_rgba8())
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
