use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use super::state::SessionState;

pub const SNAPSHOT_VERSION: u8 = 1;
pub const SNAPSHOT_FILE_NAME: &str = "session.json";

/// On-disk envelope around the session state. The version tag lets future
/// field changes migrate or discard old snapshots instead of failing to
/// deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSessionSnapshot {
    pub version: u8,
    pub saved_at_ms: i64,
    pub state: SessionState,
}

/// Durable mirror of the in-memory session state: one fixed file,
/// overwritten whole on every save. It is never the source of truth while
/// the process runs, only across restarts, so every failure path degrades
/// to "start from defaults" with a diagnostic.
#[derive(Debug)]
pub struct SessionSnapshotStore {
    path: PathBuf,
}

impl SessionSnapshotStore {
    pub fn open(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join(SNAPSHOT_FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved snapshot, if any. Absent, unreadable, malformed, or
    /// version-mismatched data all yield `None`; none of these are fatal.
    pub fn load(&self) -> Option<SessionState> {
        if !self.path.exists() {
            return None;
        }
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "could not read session snapshot");
                return None;
            }
        };
        let snapshot = match serde_json::from_slice::<PersistedSessionSnapshot>(&bytes) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "malformed session snapshot, starting fresh");
                return None;
            }
        };
        if snapshot.version != SNAPSHOT_VERSION {
            tracing::warn!(
                found = snapshot.version,
                expected = SNAPSHOT_VERSION,
                "session snapshot version mismatch, starting fresh"
            );
            return None;
        }
        Some(snapshot.state)
    }

    /// Overwrite the snapshot with the complete current state.
    /// Last-write-wins, no partial writes.
    pub fn save(&self, state: &SessionState) -> std::io::Result<()> {
        let snapshot = PersistedSessionSnapshot {
            version: SNAPSHOT_VERSION,
            saved_at_ms: chrono::Utc::now().timestamp_millis(),
            state: state.clone(),
        };
        let encoded = serde_json::to_vec(&snapshot)
            .map_err(|err| std::io::Error::other(format!("serialize snapshot: {err}")))?;
        fs::write(&self.path, encoded)
    }
}
