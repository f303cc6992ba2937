//! Structured error types for the console engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
  #[error("severity: unknown tag `{tag}`, expected error|warning|log|assert|exception")]
  InvalidSeverity { tag: String },

  #[error("console not initialized; call ConsoleSession::init before use")]
  NotInitialized,

  #[error("no record with id `{0}`")]
  UnknownRecord(String),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl ConsoleError {
  pub fn invalid_severity(tag: impl Into<String>) -> Self {
    Self::InvalidSeverity { tag: tag.into() }
  }
}
