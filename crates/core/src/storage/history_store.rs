use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::CoreError;

use super::format::HistoryCollection;
use super::manager::StorageManager;

/// Append-only list of saved calculation histories, kept in one JSON file.
///
/// Every `save` is a full read-modify-write of the file with no locking:
/// two processes saving at the same time can lose one of the appends.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one history to the stored collection.
    pub fn save(&self, history: &[f64]) -> Result<(), CoreError> {
        let mut collection = self.load()?;
        collection.push(history.to_vec());
        StorageManager::save_to_file(&collection, &self.path)?;
        info!(
            path = %self.path.display(),
            records = collection.len(),
            entries = history.len(),
            "history saved"
        );
        Ok(())
    }

    /// The full stored collection, or an empty one if nothing was saved yet.
    pub fn load(&self) -> Result<HistoryCollection, CoreError> {
        match StorageManager::load_from_file(&self.path)? {
            Some(collection) => {
                debug!(path = %self.path.display(), records = collection.len(), "history loaded");
                Ok(collection)
            }
            None => {
                debug!(path = %self.path.display(), "no history file yet");
                Ok(Vec::new())
            }
        }
    }
}
