//! Core types for the console engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// One inbound log event. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundEvent {
  pub name: String,
  /// Supplementary text, usually a stack trace. Missing means empty.
  #[serde(default)]
  pub detail: String,
  pub severity: String,
}

// ---------------------------------------------------------------------------
// Severity enum
// ---------------------------------------------------------------------------

/// The five log kinds the host engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Error,
  Warning,
  Log,
  Assert,
  Exception,
}

impl Severity {
  pub const ALL: [Severity; 5] = [
    Self::Error,
    Self::Warning,
    Self::Log,
    Self::Assert,
    Self::Exception,
  ];

  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.to_ascii_lowercase().as_str() {
      "error" | "err" => Some(Self::Error),
      "warning" | "warn" => Some(Self::Warning),
      "log" | "info" => Some(Self::Log),
      "assert" | "assertion" => Some(Self::Assert),
      "exception" | "exc" => Some(Self::Exception),
      _ => None,
    }
  }

  /// Uppercase label for list rows and the detail page.
  pub fn label(self) -> &'static str {
    match self {
      Self::Error => "ERROR",
      Self::Warning => "WARNING",
      Self::Log => "LOG",
      Self::Assert => "ASSERT",
      Self::Exception => "EXCEPTION",
    }
  }
}

// ---------------------------------------------------------------------------
// Record identity
// ---------------------------------------------------------------------------

/// The dedup identity: two events with the same key are the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey(pub String);

/// A stable hex string identifying a record across sessions.
/// Derived from the key; compact enough for presentation-set membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

// ---------------------------------------------------------------------------
// Aggregated record (in-memory, one per distinct key)
// ---------------------------------------------------------------------------

/// Aggregated entry for one distinct (name, detail) pair.
///
/// Invariants: `count` only grows and is >= 1 once the record is observable;
/// the last-seen fields always reflect the most recent occurrence.
#[derive(Debug, Clone)]
pub struct LogRecord {
  pub id: RecordId,
  pub key: RecordKey,
  pub name: String,
  pub detail: String,
  pub severity: Severity,
  pub count: u64,
  /// Monotonic seconds since the console was constructed.
  pub last_seen_secs: f64,
  /// Formatted local wall-clock time of the most recent occurrence.
  pub last_seen_local: String,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Owned projection of a record, handed to observers and the driver after
/// every `record` call. `newly_created` tells the presentation layer whether
/// to allocate a new widget or update an existing one.
#[derive(Debug, Clone, Serialize)]
pub struct RecordSnapshot {
  pub id: RecordId,
  pub name: String,
  pub detail: String,
  pub severity: Severity,
  pub count: u64,
  pub last_seen_secs: f64,
  pub last_seen_local: String,
  pub newly_created: bool,
}

impl RecordSnapshot {
  pub fn from_record(record: &LogRecord, newly_created: bool) -> Self {
    Self {
      id: record.id.clone(),
      name: record.name.clone(),
      detail: record.detail.clone(),
      severity: record.severity,
      count: record.count,
      last_seen_secs: record.last_seen_secs,
      last_seen_local: record.last_seen_local.clone(),
      newly_created,
    }
  }
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
