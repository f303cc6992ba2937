//! Page navigation for the console overlay.

use crate::types::RecordId;

/// The three mutually exclusive console pages. The inspected record lives in
/// the `Detail` variant, so leaving the page clears it by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
  Main,
  Options,
  Detail(RecordId),
}

/// Overlay navigation state. `None` means the overlay is closed, which is
/// also the initial state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
  current: Option<Page>,
}

impl Navigation {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn current(&self) -> Option<&Page> {
    self.current.as_ref()
  }

  pub fn is_open(&self) -> bool {
    self.current.is_some()
  }

  pub fn show_main(&mut self) {
    self.current = Some(Page::Main);
  }

  pub fn show_options(&mut self) {
    self.current = Some(Page::Options);
  }

  pub fn show_detail(&mut self, id: RecordId) {
    self.current = Some(Page::Detail(id));
  }

  pub fn close(&mut self) {
    self.current = None;
  }

  /// The record being inspected, if the detail page is open.
  pub fn inspected(&self) -> Option<&RecordId> {
    match &self.current {
      Some(Page::Detail(id)) => Some(id),
      _ => None,
    }
  }
}
