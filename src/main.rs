//! Binary entrypoint: drive the console engine over JSON lines.
//!
//! Each input line is either an InboundEvent or a control command:
//! - `{"name": ..., "detail": ..., "severity": ...}` records an event and
//!   emits the resulting RecordSnapshot.
//! - `{"command": "set_visibility", "severity": ..., "visible": ...}` flips a
//!   flag and emits the recomputed visible set.
//! - `{"command": "list_visible"}` emits the current visible set.
//!
//! Invalid lines emit an ErrorOutput; processing continues.

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use console_engine::types::ErrorOutput;
use console_engine::{normalize, ConsoleError, ConsoleSession, InboundEvent, RecordId, VisibilityConfig};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InboundLine {
  Command(Command),
  Event(InboundEvent),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
enum Command {
  SetVisibility { severity: String, visible: bool },
  ListVisible,
}

#[derive(Debug, Serialize)]
struct VisibleOutput {
  visible: Vec<RecordId>,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  let mut session = ConsoleSession::new();
  session.init(VisibilityConfig::default());

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        let _ = writeln!(io::stderr(), "console-engine: read error: {}", e);
        std::process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let parsed: InboundLine = match serde_json::from_str(trimmed) {
      Ok(v) => v,
      Err(e) => {
        let err = ErrorOutput::new(format!("json parse: {}", e));
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
        continue;
      }
    };

    let result = handle_line(&mut session, parsed, &mut out);
    if let Err(e) = result {
      let err = match &e {
        ConsoleError::InvalidSeverity { .. } => ErrorOutput::new(e.to_string()).with_field("severity"),
        _ => ErrorOutput::new(e.to_string()),
      };
      let _ = serde_json::to_writer(&mut out, &err);
      let _ = writeln!(out);
    }
  }

  let _ = out.flush();
}

fn handle_line(
  session: &mut ConsoleSession,
  line: InboundLine,
  out: &mut impl Write,
) -> Result<(), ConsoleError> {
  match line {
    InboundLine::Event(raw) => {
      let snapshot = session.record_inbound(&raw)?;
      serde_json::to_writer(&mut *out, &snapshot)?;
      let _ = writeln!(out);
    }
    InboundLine::Command(Command::SetVisibility { severity, visible }) => {
      let severity = normalize::parse_severity(&severity)?;
      let visible = session.set_visibility(severity, visible)?;
      serde_json::to_writer(&mut *out, &VisibleOutput { visible })?;
      let _ = writeln!(out);
    }
    InboundLine::Command(Command::ListVisible) => {
      let visible = session.visible_records()?;
      serde_json::to_writer(&mut *out, &VisibleOutput { visible })?;
      let _ = writeln!(out);
    }
  }
  Ok(())
}
