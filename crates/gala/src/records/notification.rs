//! Notification messages delivered to guests.

use serde::{Deserialize, Serialize};

use crate::clock::Timestamp;
use crate::journal::Journal;

/// An immutable message tied to an event.
///
/// Delivery is a journal side effect; the notification itself stores no
/// delivery state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Notification identifier.
    pub id: i64,
    /// Message body.
    pub content: String,
    /// When the notification was sent.
    pub sent_time: Timestamp,
    /// Free-text label of the event this notification concerns.
    pub event: String,
}

impl Notification {
    /// Create a new notification.
    #[must_use]
    pub fn new(
        id: i64,
        content: impl Into<String>,
        sent_time: Timestamp,
        event: impl Into<String>,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            sent_time,
            event: event.into(),
        }
    }

    /// Journal delivery of this notification to the named guest.
    pub fn send_to(&self, guest_name: &str, journal: &mut Journal) {
        journal.log(&format!(
            "Notification sent to {guest_name}: {}",
            self.content
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::MemorySink;

    #[test]
    fn test_new_notification() {
        let notification = Notification::new(
            1,
            "Doors open at 08:30",
            Timestamp::new(2024, 11, 24, 18, 0),
            "Opening Ceremony",
        );

        assert_eq!(notification.id, 1);
        assert_eq!(notification.content, "Doors open at 08:30");
        assert_eq!(notification.event, "Opening Ceremony");
    }

    #[test]
    fn test_send_to_journals_delivery() {
        let sink = MemorySink::new();
        let mut journal = Journal::new(Box::new(sink.clone()));
        let notification = Notification::new(
            1,
            "Doors open at 08:30",
            Timestamp::new(2024, 11, 24, 18, 0),
            "Opening Ceremony",
        );

        notification.send_to("Alice Johnson", &mut journal);

        assert_eq!(
            sink.lines(),
            vec!["[LOG] Notification sent to Alice Johnson: Doors open at 08:30"]
        );
    }

    #[test]
    fn test_send_to_leaves_notification_unchanged() {
        let sink = MemorySink::new();
        let mut journal = Journal::new(Box::new(sink));
        let notification = Notification::new(
            2,
            "Venue changed",
            Timestamp::new(2024, 11, 25, 8, 0),
            "Tech Showcase",
        );
        let before = notification.clone();

        notification.send_to("Bob Smith", &mut journal);

        assert_eq!(notification, before);
    }
}
