use std::path::Path;

use crate::errors::CoreError;

use super::format::{self, HistoryCollection, HistoryRecord};

/// Low-level storage operations: history collections to/from bytes or files.
pub struct StorageManager;

impl StorageManager {
    /// Serialize a collection to raw document bytes (for callers doing their own I/O).
    pub fn save_to_bytes(collection: &[HistoryRecord]) -> Result<Vec<u8>, CoreError> {
        format::write_document(collection)
    }

    /// Parse a collection from raw document bytes.
    pub fn load_from_bytes(data: &[u8]) -> Result<HistoryCollection, CoreError> {
        format::read_document(data)
    }

    /// Overwrite the file at `path` with the given collection (native only).
    /// Missing parent directories are created.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(collection: &[HistoryRecord], path: &Path) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(collection)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Read the collection stored at `path` (native only).
    /// Returns `Ok(None)` when the file does not exist yet.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &Path) -> Result<Option<HistoryCollection>, CoreError> {
        match std::fs::read(path) {
            Ok(bytes) => Self::load_from_bytes(&bytes).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
