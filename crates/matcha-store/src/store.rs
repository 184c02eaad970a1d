//! The snapshot store itself.

use std::{
  fs,
  path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result};

/// A directory of JSON snapshots, one file per key.
///
/// Writes are full-file replacements; the caller re-writes a key on every
/// change. Reads never fail from the caller's point of view: anything that
/// goes wrong degrades to the provided default.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
  dir: PathBuf,
}

impl SnapshotStore {
  /// Open a store rooted at `dir`, creating the directory if needed.
  pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
    let dir = dir.into();
    fs::create_dir_all(&dir).map_err(|source| Error::CreateDir {
      path: dir.clone(),
      source,
    })?;
    Ok(Self { dir })
  }

  /// The directory this store writes into.
  pub fn dir(&self) -> &Path {
    &self.dir
  }

  fn path_for(&self, key: &str) -> PathBuf {
    self.dir.join(format!("{key}.json"))
  }

  /// Read the snapshot under `key`, or `default` if the file is absent or
  /// unreadable. Corruption is logged, never propagated.
  pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
    let path = self.path_for(key);
    let raw = match fs::read_to_string(&path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => return default,
      Err(e) => {
        tracing::warn!(
          key,
          path = %path.display(),
          error = %e,
          "snapshot read failed, using default"
        );
        return default;
      }
    };

    match serde_json::from_str(&raw) {
      Ok(value) => value,
      Err(e) => {
        tracing::warn!(
          key,
          path = %path.display(),
          error = %e,
          "snapshot parse failed, using default"
        );
        default
      }
    }
  }

  /// Replace the snapshot under `key`.
  pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
    let path = self.path_for(key);
    let raw = serde_json::to_string_pretty(value)?;
    fs::write(&path, raw).map_err(|source| Error::Write { path, source })
  }

  /// Delete the snapshot under `key`. Missing files are fine; other failures
  /// are logged and swallowed, matching the best-effort contract.
  pub fn remove(&self, key: &str) {
    let path = self.path_for(key);
    if let Err(e) = fs::remove_file(&path) {
      if e.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
          key,
          path = %path.display(),
          error = %e,
          "snapshot delete failed"
        );
      }
    }
  }
}
