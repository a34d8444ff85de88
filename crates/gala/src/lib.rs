//! `gala` - an in-memory directory for a single-session event
//!
//! This library tracks guests, vehicles, and events for one event session:
//! vehicle assignment with all-or-nothing validation, guest schedules and
//! notifications, role permissions, and an append-only operations journal.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod clock;
pub mod config;
pub mod directory;
pub mod error;
pub mod journal;
pub mod logging;
pub mod permissions;
pub mod records;
pub mod scenario;

pub use clock::Timestamp;
pub use config::Config;
pub use directory::{Directory, Outcome};
pub use error::{Error, Result};
pub use journal::{FileSink, Journal, LogSink, MemorySink};
pub use logging::init_logging;
pub use permissions::Permissions;
pub use records::{Certificate, Event, Guest, Notification, Vehicle};
