//! Console Engine — in-game developer console core.
//!
//! Aggregates engine log callbacks into a deduplicated, countable record set
//! (one record per distinct name + detail pair), filters it by per-severity
//! visibility flags, and tracks overlay navigation and session lifecycle.
//!
//! No DB, no network, no persistence; pure computation + in-memory state.
//! Rendering and engine scheduling are the host's concern.

pub mod config;
pub mod console;
pub mod error;
pub mod key;
pub mod normalize;
pub mod pages;
pub mod session;
pub mod types;
pub mod visibility;

pub use config::VisibilityConfig;
pub use console::Console;
pub use error::ConsoleError;
pub use session::ConsoleSession;
pub use types::{InboundEvent, LogRecord, RecordId, RecordSnapshot, Severity};
