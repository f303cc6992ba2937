//! Explicit console lifecycle owned by the application's composition root.
//!
//! Replaces the original tool's process-wide singleton and scene-lifecycle
//! init triggers: the integrator constructs a session, calls `init`, and every
//! operation outside the init..shutdown window surfaces `NotInitialized`
//! instead of silently dropping the event.

use crate::config::VisibilityConfig;
use crate::console::Console;
use crate::error::ConsoleError;
use crate::pages::Navigation;
use crate::types::{InboundEvent, RecordId, RecordSnapshot, Severity};

pub struct ConsoleSession {
  console: Option<Console>,
  nav: Navigation,
}

impl ConsoleSession {
  pub fn new() -> Self {
    Self {
      console: None,
      nav: Navigation::new(),
    }
  }

  /// Bring the console up. Re-init while live is a warned no-op so a second
  /// bootstrap path cannot wipe accumulated records.
  pub fn init(&mut self, config: VisibilityConfig) {
    if self.console.is_some() {
      tracing::warn!("console already initialized, ignoring re-init");
      return;
    }
    self.console = Some(Console::with_config(config));
  }

  /// Tear the console down: drops all records and observers, closes the
  /// overlay. Safe to call when already shut down.
  pub fn shutdown(&mut self) {
    self.console = None;
    self.nav.close();
  }

  pub fn is_initialized(&self) -> bool {
    self.console.is_some()
  }

  pub fn console(&self) -> Result<&Console, ConsoleError> {
    self.console.as_ref().ok_or(ConsoleError::NotInitialized)
  }

  pub fn console_mut(&mut self) -> Result<&mut Console, ConsoleError> {
    self.console.as_mut().ok_or(ConsoleError::NotInitialized)
  }

  pub fn record(
    &mut self,
    name: &str,
    detail: &str,
    severity: Severity,
  ) -> Result<RecordSnapshot, ConsoleError> {
    Ok(self.console_mut()?.record(name, detail, severity))
  }

  pub fn record_inbound(&mut self, raw: &InboundEvent) -> Result<RecordSnapshot, ConsoleError> {
    self.console_mut()?.record_inbound(raw)
  }

  pub fn visible_records(&self) -> Result<Vec<RecordId>, ConsoleError> {
    Ok(self.console()?.visible_records())
  }

  pub fn set_visibility(
    &mut self,
    severity: Severity,
    visible: bool,
  ) -> Result<Vec<RecordId>, ConsoleError> {
    Ok(self.console_mut()?.set_visibility(severity, visible))
  }

  pub fn nav(&self) -> &Navigation {
    &self.nav
  }

  pub fn open_main(&mut self) -> Result<(), ConsoleError> {
    self.console()?;
    self.nav.show_main();
    Ok(())
  }

  pub fn open_options(&mut self) -> Result<(), ConsoleError> {
    self.console()?;
    self.nav.show_options();
    Ok(())
  }

  /// Open the detail page for an existing record.
  pub fn open_detail(&mut self, id: RecordId) -> Result<(), ConsoleError> {
    if self.console()?.get(&id).is_none() {
      return Err(ConsoleError::UnknownRecord(id.0));
    }
    self.nav.show_detail(id);
    Ok(())
  }

  pub fn close_overlay(&mut self) {
    self.nav.close();
  }
}

impl Default for ConsoleSession {
  fn default() -> Self {
    Self::new()
  }
}
