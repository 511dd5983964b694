//! JSON file implementation of the `ShopStore` port.
//!
//! The whole collection lives in one pretty-printed JSON array:
//!
//! ```text
//! [
//!   {
//!     "name": "Blacksmith",
//!     "description": "Swords and armor",
//!     "url": "",
//!     "owner_uuid": "6f1c2a8e-3d4b-4c5a-9e7f-0a1b2c3d4e5f"
//!   }
//! ]
//! ```
//!
//! Saves go to a temporary file in the same directory which is then
//! renamed over the target, so readers see either the old or the new
//! collection. A file that fails to parse is moved aside before the error
//! is returned, so a later save cannot overwrite the only copy.

use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;
use tempfile::NamedTempFile;

use shoplinker_core::repository::shop::ShopStore;
use shoplinker_types::error::StoreError;
use shoplinker_types::shop::Shop;

/// Shop store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonShopStore {
    path: PathBuf,
}

impl JsonShopStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Directory holding the shop file; temp files are created here so the
    /// final rename never crosses filesystems.
    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Compute `{file}.corrupt-{timestamp}` next to the shop file.
    fn quarantine_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "shops.json".to_string());
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
        self.path.with_file_name(format!("{file_name}.corrupt-{stamp}"))
    }

    /// Move an unreadable shop file aside and describe what happened.
    fn quarantine(&self, message: String) -> StoreError {
        let quarantined = self.quarantine_path();
        if let Err(e) = std::fs::rename(&self.path, &quarantined) {
            tracing::warn!(
                "Failed to parse {} ({message}) and could not move it aside: {e}",
                self.path.display()
            );
            return StoreError::io(&self.path, e);
        }

        tracing::warn!(
            "Failed to parse {} ({message}), moved to {}",
            self.path.display(),
            quarantined.display()
        );
        StoreError::Corrupt {
            path: self.path.clone(),
            quarantined,
            message,
        }
    }
}

impl ShopStore for JsonShopStore {
    fn load(&self) -> Result<Vec<Shop>, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "Shop file {} does not exist, starting with no shops",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };

        // Undecodable bytes are malformed content, not an i/o failure.
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(err) => return Err(self.quarantine(err.to_string())),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        // A literal `null` document is treated like an empty file.
        match serde_json::from_str::<Option<Vec<Shop>>>(&content) {
            Ok(shops) => {
                let shops = shops.unwrap_or_default();
                tracing::info!("Loaded {} shops from {}", shops.len(), self.path.display());
                Ok(shops)
            }
            Err(err) => Err(self.quarantine(err.to_string())),
        }
    }

    fn save(&self, shops: &[Shop]) -> Result<(), StoreError> {
        let dir = self.dir();
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;

        let mut json =
            serde_json::to_vec_pretty(shops).map_err(|e| StoreError::Serialize(e.to_string()))?;
        json.push(b'\n');

        let mut temp = NamedTempFile::new_in(&dir).map_err(|e| StoreError::io(&dir, e))?;
        temp.write_all(&json)
            .map_err(|e| StoreError::io(temp.path(), e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| StoreError::io(temp.path(), e))?;
        temp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        tracing::info!("Saved {} shops to {}", shops.len(), self.path.display());
        Ok(())
    }
}
