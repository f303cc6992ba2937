//! Integration tests for the console engine.

use console_engine::{
  Console, ConsoleError, ConsoleSession, InboundEvent, Severity, VisibilityConfig,
};

fn fixture_event() -> InboundEvent {
  let json = r#"{
    "name": "NullReferenceException: Object reference not set",
    "detail": "at Player.Update () [0x0001]\nat GameLoop.Tick () [0x0042]",
    "severity": "exception"
  }"#;
  serde_json::from_str(json).unwrap()
}

#[test]
fn repeated_engine_callbacks_merge_into_one_record() {
  let mut console = Console::new();
  let event = fixture_event();

  let first = console.record_inbound(&event).unwrap();
  let second = console.record_inbound(&event).unwrap();

  assert!(first.newly_created);
  assert!(!second.newly_created);
  assert_eq!(second.count, 2);
  assert_eq!(first.id, second.id);
  assert_eq!(console.len(), 1);
  assert_eq!(second.severity, Severity::Exception);
}

#[test]
fn record_ids_are_deterministic_across_sessions() {
  let event = fixture_event();

  let mut c1 = Console::new();
  let s1 = c1.record_inbound(&event).unwrap();

  let mut c2 = Console::new();
  let s2 = c2.record_inbound(&event).unwrap();

  assert_eq!(s1.id, s2.id, "same (name, detail) must yield the same id");
}

#[test]
fn unknown_fields_are_ignored() {
  let json = r#"{
    "name": "boom",
    "detail": "t",
    "severity": "error",
    "some_unknown_field": "should be ignored",
    "another": 42
  }"#;

  let raw: InboundEvent = serde_json::from_str(json).unwrap();
  let mut console = Console::new();
  assert!(console.record_inbound(&raw).is_ok());
}

#[test]
fn unknown_severity_tag_gives_clear_error() {
  let json = r#"{"name": "boom", "detail": "t", "severity": "verbose"}"#;
  let raw: InboundEvent = serde_json::from_str(json).unwrap();

  let mut console = Console::new();
  let err = console.record_inbound(&raw).unwrap_err();
  assert!(matches!(err, ConsoleError::InvalidSeverity { .. }));
  assert!(
    err.to_string().contains("verbose"),
    "Error should mention the tag: {}",
    err
  );
  assert!(console.is_empty(), "A rejected event must not create a record");
}

#[test]
fn missing_detail_is_coerced_not_rejected() {
  let json = r#"{"name": "X", "severity": "warning"}"#;
  let raw: InboundEvent = serde_json::from_str(json).unwrap();

  let mut console = Console::new();
  let snapshot = console.record_inbound(&raw).unwrap();
  assert_eq!(snapshot.detail, " ");
  assert_eq!(snapshot.count, 1);
}

#[test]
fn visibility_flip_excludes_then_restores() {
  let mut console = Console::with_config(VisibilityConfig::default());
  let error = console.record("E1", "t", Severity::Error);
  let warning = console.record("W1", "t", Severity::Warning);

  let visible = console.set_visibility(Severity::Error, false);
  assert_eq!(visible, vec![warning.id.clone()]);

  let visible = console.set_visibility(Severity::Error, true);
  assert_eq!(visible, vec![error.id, warning.id]);
}

#[test]
fn full_session_lifecycle() {
  let mut session = ConsoleSession::new();

  // Before init: surfaced as an error, not a silent drop.
  assert!(matches!(
    session.record("early", "t", Severity::Log).unwrap_err(),
    ConsoleError::NotInitialized
  ));

  session.init(VisibilityConfig::default());

  let snapshot = session.record_inbound(&fixture_event()).unwrap();
  session.open_main().unwrap();
  session.open_detail(snapshot.id.clone()).unwrap();
  assert_eq!(session.nav().inspected(), Some(&snapshot.id));

  session.shutdown();
  assert!(!session.is_initialized());
  assert!(session.nav().inspected().is_none());
}

#[test]
fn snapshot_serializes_with_lowercase_severity() {
  let mut console = Console::new();
  let snapshot = console.record_inbound(&fixture_event()).unwrap();
  let json = serde_json::to_string(&snapshot).unwrap();
  assert!(json.contains("\"severity\":\"exception\""));
  assert!(json.contains("\"newly_created\":true"));
}
