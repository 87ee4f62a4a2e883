use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::StoreError;
use crate::utils::app_data_dir;

use super::Record;

/// Stores each entity collection as one JSON snapshot file, rewritten
/// wholesale on every save.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Creates a store rooted at `root`, or at the default application data
    /// directory when `root` is `None`.
    pub fn new(root: Option<PathBuf>) -> Self {
        Self {
            data_dir: root.unwrap_or_else(app_data_dir),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolves the snapshot path for a record type.
    pub fn collection_path<R: Record>(&self) -> PathBuf {
        self.data_dir.join(R::FILE_NAME)
    }

    /// Serializes the entire collection, replacing any prior snapshot. The
    /// data directory is created on first use. The write is direct: no temp
    /// file, no rename, no locking, so a crash mid-write can leave a
    /// truncated snapshot behind.
    pub fn save<R: Record>(&self, records: &[R]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)?;
        let json = serde_json::to_string_pretty(records)?;
        fs::write(self.collection_path::<R>(), json)?;
        Ok(())
    }

    /// Loads the previously saved collection. A missing file yields an empty
    /// collection; an unreadable or undecodable snapshot is logged and
    /// likewise degrades to empty rather than failing the caller.
    pub fn load<R: Record>(&self) -> Vec<R> {
        let path = self.collection_path::<R>();
        if !path.exists() {
            return Vec::new();
        }
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!("failed to read {}: {}", path.display(), err);
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!("failed to decode {}: {}", path.display(), err);
                Vec::new()
            }
        }
    }
}
