//! Per-severity visibility flags.

use crate::types::Severity;

/// Five independent toggles, one per log kind. Session-only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityConfig {
  pub show_errors: bool,
  pub show_warnings: bool,
  pub show_logs: bool,
  pub show_asserts: bool,
  pub show_exceptions: bool,
}

impl Default for VisibilityConfig {
  fn default() -> Self {
    Self {
      show_errors: true,
      show_warnings: true,
      show_logs: true,
      show_asserts: true,
      show_exceptions: true,
    }
  }
}

impl VisibilityConfig {
  /// Everything hidden; useful as a starting point for allow-list setups.
  pub fn none() -> Self {
    Self {
      show_errors: false,
      show_warnings: false,
      show_logs: false,
      show_asserts: false,
      show_exceptions: false,
    }
  }

  pub fn is_visible(&self, severity: Severity) -> bool {
    match severity {
      Severity::Error => self.show_errors,
      Severity::Warning => self.show_warnings,
      Severity::Log => self.show_logs,
      Severity::Assert => self.show_asserts,
      Severity::Exception => self.show_exceptions,
    }
  }

  pub fn set(&mut self, severity: Severity, visible: bool) {
    match severity {
      Severity::Error => self.show_errors = visible,
      Severity::Warning => self.show_warnings = visible,
      Severity::Log => self.show_logs = visible,
      Severity::Assert => self.show_asserts = visible,
      Severity::Exception => self.show_exceptions = visible,
    }
  }
}
