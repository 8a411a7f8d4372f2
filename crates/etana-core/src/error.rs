//! Error types for `etana-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("missing required field: {0}")]
  MissingField(&'static str),

  #[error("field must not be empty: {0}")]
  EmptyField(&'static str),

  #[error("invalid email address: {0:?}")]
  InvalidEmail(String),

  #[error(
    "invalid status {0:?}; must be one of: new, contacted, quoted, completed, cancelled"
  )]
  InvalidStatus(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
