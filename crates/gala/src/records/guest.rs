//! Guest records with schedules and notification history.

use serde::{Deserialize, Serialize};

use crate::journal::Journal;
use crate::records::event::Event;
use crate::records::notification::Notification;

/// Status assigned to newly registered guests.
pub const DEFAULT_STATUS: &str = "Pending";

/// A registered guest.
///
/// The schedule and notification list hold independent copies of the
/// canonical records owned by the directory, so later changes to the
/// canonical event never alter what a guest was told.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    /// Guest identifier, used as the lookup key.
    pub id: i64,
    /// Guest name, used as the search key.
    pub name: String,
    /// Free-text contact details.
    pub contact_info: String,
    /// Current status; any string is accepted.
    pub status: String,
    /// Plate of the most recently assigned vehicle, if any.
    pub assigned_vehicle: Option<String>,
    /// Events on this guest's personal schedule, in insertion order.
    pub schedule: Vec<Event>,
    /// Notifications received, in delivery order.
    pub notifications: Vec<Notification>,
}

impl Guest {
    /// Register a new guest with the default `Pending` status.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, contact_info: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contact_info: contact_info.into(),
            status: DEFAULT_STATUS.to_string(),
            assigned_vehicle: None,
            schedule: Vec::new(),
            notifications: Vec::new(),
        }
    }

    /// Add an event copy to this guest's schedule.
    pub fn add_event(&mut self, event: Event) {
        self.schedule.push(event);
    }

    /// Record a notification and journal its delivery.
    pub fn receive_notification(&mut self, notification: Notification, journal: &mut Journal) {
        notification.send_to(&self.name, journal);
        self.notifications.push(notification);
    }

    /// Overwrite the status and journal the transition.
    ///
    /// No validation is applied; any string is an acceptable status.
    pub fn update_status(&mut self, new_status: impl Into<String>, journal: &mut Journal) {
        self.status = new_status.into();
        journal.log(&format!(
            "Status of guest {} updated to {}",
            self.name, self.status
        ));
    }

    /// Render this guest's schedule in insertion order.
    #[must_use]
    pub fn view_schedule(&self) -> String {
        let mut out = format!("Schedule for {}:", self.name);
        for event in &self.schedule {
            out.push_str(&format!("\n- {} at {}", event.name, event.time));
        }
        out
    }
}
