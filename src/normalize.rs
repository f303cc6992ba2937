//! Normalize inbound event fields before they reach the aggregator.

use crate::error::ConsoleError;
use crate::types::Severity;

/// Parse a severity tag, failing fast on anything outside the five kinds.
/// Never coerces: an unrecognized tag must not silently become visible (or
/// invisible) under some default.
pub fn parse_severity(tag: &str) -> Result<Severity, ConsoleError> {
  Severity::from_str_loose(tag).ok_or_else(|| ConsoleError::invalid_severity(tag))
}

/// Coerce missing detail to a single space so the dedup key stays stable and
/// non-empty.
pub fn coerce_detail(detail: &str) -> String {
  if detail.is_empty() {
    " ".to_string()
  } else {
    detail.to_string()
  }
}

/// Presentation-only normalization: trim, collapse newline runs into single
/// spaces. Never applied to the dedup key.
pub fn display_detail(detail: &str) -> String {
  let mut out = String::with_capacity(detail.len());
  let mut in_break = false;
  for ch in detail.trim().chars() {
    if ch == '\n' || ch == '\r' {
      if !in_break {
        out.push(' ');
      }
      in_break = true;
    } else {
      in_break = false;
      out.push(ch);
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_severity_rejects_unknown_tag() {
    let err = parse_severity("verbose").unwrap_err();
    assert!(err.to_string().contains("verbose"));
  }

  #[test]
  fn parse_severity_accepts_all_kinds() {
    for sev in Severity::ALL {
      assert_eq!(parse_severity(sev.label()).unwrap(), sev);
    }
  }

  #[test]
  fn empty_detail_becomes_single_space() {
    assert_eq!(coerce_detail(""), " ");
    assert_eq!(coerce_detail("trace"), "trace");
  }

  #[test]
  fn display_detail_collapses_newlines() {
    assert_eq!(
      display_detail("  at main()\nat update()\r\nat render()  "),
      "at main() at update() at render()"
    );
    assert_eq!(display_detail("plain"), "plain");
  }
}
