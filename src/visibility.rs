//! Visible-set recomputation over the aggregated record set.

use crate::config::VisibilityConfig;
use crate::types::{LogRecord, RecordId};

/// Recompute the subset of records whose severity flag is enabled.
///
/// Pure: same records + same config always yield the same result, in the
/// relative order the iterator supplies (insertion order when called through
/// the console). Must run synchronously after every record mutation and every
/// flag change.
pub fn recompute_visible_set<'a, I>(records: I, config: &VisibilityConfig) -> Vec<RecordId>
where
  I: IntoIterator<Item = &'a LogRecord>,
{
  records
    .into_iter()
    .filter(|r| config.is_visible(r.severity))
    .map(|r| r.id.clone())
    .collect()
}
