//! Error types for `matcha-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("user name must not be empty")]
  EmptyName,

  #[error("unknown avatar id: {0:?}")]
  UnknownAvatar(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
