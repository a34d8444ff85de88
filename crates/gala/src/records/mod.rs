//! Record types owned by the directory.
//!
//! These are plain data records; cross-record bookkeeping (vehicle
//! assignment, scheduling, notification fan-out) lives in
//! [`crate::directory`].

pub mod certificate;
pub mod event;
pub mod guest;
pub mod notification;
pub mod vehicle;

pub use certificate::Certificate;
pub use event::Event;
pub use guest::Guest;
pub use notification::Notification;
pub use vehicle::Vehicle;
