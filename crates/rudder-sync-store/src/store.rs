use std::fs;
use std::path::{Path, PathBuf};

use rudder_sync::{SourceIdStore, StoreError};

/// Subfolder for raw API response captures.
const RESPONSES_DIR: &str = "responses";

/// Subfolder for values persisted across invocations.
const VARIABLES_DIR: &str = "variables";

/// A directory-backed artifact store.
///
/// Layout under the root:
/// - `variables/{key}` — one file per persisted key-value pair.
/// - `responses/sync_run_{source_id}_response.json` — raw status payloads.
///
/// Invocations are assumed sequential, so no locking is done; a later
/// write for the same source id replaces the earlier file.
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Open a store rooted at `root`, creating the directory tree if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        for dir in [root.clone(), root.join(VARIABLES_DIR), root.join(RESPONSES_DIR)] {
            fs::create_dir_all(&dir).map_err(|e| {
                StoreError::Io(format!("failed to create {}: {e}", dir.display()))
            })?;
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path where the raw status response for `source_id` is captured.
    pub fn response_path(&self, source_id: &str) -> PathBuf {
        self.root
            .join(RESPONSES_DIR)
            .join(format!("sync_run_{source_id}_response.json"))
    }

    /// Write a raw status response verbatim, returning the path written.
    pub fn write_response(&self, source_id: &str, raw: &str) -> Result<PathBuf, StoreError> {
        let path = self.response_path(source_id);
        fs::write(&path, raw)
            .map_err(|e| StoreError::Io(format!("failed to write {}: {e}", path.display())))?;
        Ok(path)
    }

    fn variable_path(&self, key: &str) -> PathBuf {
        self.root.join(VARIABLES_DIR).join(key)
    }
}

impl SourceIdStore for ArtifactStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.variable_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value.trim_end_matches('\n').to_owned())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.variable_path(key);
        fs::write(&path, value)
            .map_err(|e| StoreError::Io(format!("failed to write {}: {e}", path.display())))
    }
}
