//! Error types for `matcha-store`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot create snapshot directory {path}: {source}")]
  CreateDir {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("cannot write snapshot {path}: {source}")]
  Write {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
