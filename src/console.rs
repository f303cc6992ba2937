//! Core aggregator: maintains the deduplicated record set, counters, clocks,
//! visibility, and observer delivery.

use std::collections::HashMap;
use std::time::Instant;

use chrono::Local;

use crate::config::VisibilityConfig;
use crate::error::ConsoleError;
use crate::key;
use crate::normalize;
use crate::types::{InboundEvent, LogRecord, RecordId, RecordKey, RecordSnapshot, Severity};
use crate::visibility;

/// Callback invoked synchronously inside `record` for every occurrence.
/// Replaces the original tool's per-frame detail-page poll loop.
pub type Observer = Box<dyn FnMut(&RecordSnapshot)>;

/// Handle for removing a registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// The event aggregator. Holds in-memory state for one console session.
///
/// Single-threaded by design: all mutation happens on the caller's thread,
/// matching a frame-loop host. A host with concurrent producers wraps the
/// console in its own mutex.
pub struct Console {
  records: HashMap<RecordKey, LogRecord>,
  /// Insertion order of keys; the record map itself is unordered.
  order: Vec<RecordKey>,
  config: VisibilityConfig,
  /// Monotonic zero point for `last_seen_secs`.
  started: Instant,
  observers: Vec<(ObserverId, Observer)>,
  next_observer: u64,
}

impl Console {
  pub fn new() -> Self {
    Self::with_config(VisibilityConfig::default())
  }

  pub fn with_config(config: VisibilityConfig) -> Self {
    Self {
      records: HashMap::new(),
      order: Vec::new(),
      config,
      started: Instant::now(),
      observers: Vec::new(),
      next_observer: 0,
    }
  }

  /// Create-or-update the record for a (name, detail) pair.
  ///
  /// Empty detail is coerced to a single space before the key is computed.
  /// The returned snapshot carries `newly_created = true` iff this call
  /// inserted the record; a fresh record reports `count == 1`.
  pub fn record(&mut self, name: &str, detail: &str, severity: Severity) -> RecordSnapshot {
    let detail = normalize::coerce_detail(detail);
    let rkey = key::compute(name, &detail);

    let record = self.records.entry(rkey.clone()).or_insert_with(|| LogRecord {
      id: key::record_id(&rkey),
      key: rkey.clone(),
      name: name.to_string(),
      detail: detail.clone(),
      severity,
      count: 0,
      last_seen_secs: 0.0,
      last_seen_local: String::new(),
    });

    // First event ever for this key: count is still at its pre-increment zero.
    let newly_created = record.count == 0;

    record.last_seen_secs = self.started.elapsed().as_secs_f64();
    record.last_seen_local = Local::now().format("%H:%M:%S").to_string();
    record.count += 1;

    let snapshot = RecordSnapshot::from_record(record, newly_created);

    if newly_created {
      self.order.push(rkey);
      tracing::debug!(id = %snapshot.id.0, name = %snapshot.name, "new console record");
    }

    for (_, observer) in &mut self.observers {
      observer(&snapshot);
    }

    snapshot
  }

  /// String-tag entry point for the engine callback / JSON driver.
  /// An unrecognized severity tag aborts only this call.
  pub fn record_inbound(&mut self, raw: &InboundEvent) -> Result<RecordSnapshot, ConsoleError> {
    let severity = normalize::parse_severity(&raw.severity)?;
    Ok(self.record(&raw.name, &raw.detail, severity))
  }

  /// Records in insertion order.
  pub fn records(&self) -> impl Iterator<Item = &LogRecord> {
    self.order.iter().filter_map(|k| self.records.get(k))
  }

  pub fn get(&self, id: &RecordId) -> Option<&LogRecord> {
    self.records().find(|r| &r.id == id)
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  /// True if at least one record exists, regardless of filters.
  pub fn has_records(&self) -> bool {
    !self.records.is_empty()
  }

  /// True if at least one record passes the current visibility filters.
  pub fn has_visible_records(&self) -> bool {
    self.records().any(|r| self.config.is_visible(r.severity))
  }

  pub fn config(&self) -> &VisibilityConfig {
    &self.config
  }

  /// The ids currently passing the filters, in insertion order.
  pub fn visible_records(&self) -> Vec<RecordId> {
    visibility::recompute_visible_set(self.records(), &self.config)
  }

  /// Flip one visibility flag and synchronously recompute the visible set.
  pub fn set_visibility(&mut self, severity: Severity, visible: bool) -> Vec<RecordId> {
    self.config.set(severity, visible);
    self.visible_records()
  }

  /// Register a callback for every subsequent `record` call.
  pub fn subscribe(&mut self, observer: Observer) -> ObserverId {
    let id = ObserverId(self.next_observer);
    self.next_observer += 1;
    self.observers.push((id, observer));
    id
  }

  /// Returns false if the id was already removed.
  pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
    let before = self.observers.len();
    self.observers.retain(|(oid, _)| *oid != id);
    self.observers.len() != before
  }
}

impl Default for Console {
  fn default() -> Self {
    Self::new()
  }
}
