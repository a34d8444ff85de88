//! Event records with invitation lists.

use serde::{Deserialize, Serialize};

use crate::clock::Timestamp;
use crate::journal::Journal;

/// A named, located, timed event with an invited-guest list.
///
/// Events are created once and mutated only by invitation; the invited list
/// is append-only and preserves invitation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event identifier.
    pub id: i64,
    /// Event name, used as the search key.
    pub name: String,
    /// Where the event takes place.
    pub location: String,
    /// When the event takes place.
    pub time: Timestamp,
    /// Names of invited guests, in invitation order.
    pub invited_guests: Vec<String>,
}

impl Event {
    /// Create a new event with an empty invitation list.
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        location: impl Into<String>,
        time: Timestamp,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            time,
            invited_guests: Vec::new(),
        }
    }

    /// Invite a guest by name and journal the invitation.
    ///
    /// No membership check is performed; the same name can be invited more
    /// than once.
    pub fn invite_guest(&mut self, guest: impl Into<String>, journal: &mut Journal) {
        let guest = guest.into();
        journal.log(&format!("Guest {guest} invited to event: {}", self.name));
        self.invited_guests.push(guest);
    }

    /// Render the invited-guest list in invitation order.
    #[must_use]
    pub fn guest_list(&self) -> String {
        let mut out = format!("Guests invited to {}:", self.name);
        for guest in &self.invited_guests {
            out.push_str(&format!("\n- {guest}"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::MemorySink;

    fn test_journal() -> (MemorySink, Journal) {
        let sink = MemorySink::new();
        let journal = Journal::new(Box::new(sink.clone()));
        (sink, journal)
    }

    fn opening_ceremony() -> Event {
        Event::new(
            1,
            "Opening Ceremony",
            "Main Hall",
            Timestamp::new(2024, 11, 25, 9, 0),
        )
    }

    #[test]
    fn test_new_event_has_no_invitations() {
        let event = opening_ceremony();
        assert_eq!(event.id, 1);
        assert_eq!(event.location, "Main Hall");
        assert!(event.invited_guests.is_empty());
    }

    #[test]
    fn test_invite_guest_appends_and_journals() {
        let (sink, mut journal) = test_journal();
        let mut event = opening_ceremony();

        event.invite_guest("Alice Johnson", &mut journal);
        event.invite_guest("Bob Smith", &mut journal);

        assert_eq!(event.invited_guests, vec!["Alice Johnson", "Bob Smith"]);
        assert_eq!(
            sink.lines(),
            vec![
                "[LOG] Guest Alice Johnson invited to event: Opening Ceremony",
                "[LOG] Guest Bob Smith invited to event: Opening Ceremony",
            ]
        );
    }

    #[test]
    fn test_invite_allows_duplicates() {
        let (_sink, mut journal) = test_journal();
        let mut event = opening_ceremony();

        event.invite_guest("Alice Johnson", &mut journal);
        event.invite_guest("Alice Johnson", &mut journal);

        assert_eq!(event.invited_guests.len(), 2);
    }

    #[test]
    fn test_guest_list_rendering() {
        let (_sink, mut journal) = test_journal();
        let mut event = opening_ceremony();
        event.invite_guest("Alice Johnson", &mut journal);
        event.invite_guest("Bob Smith", &mut journal);

        assert_eq!(
            event.guest_list(),
            "Guests invited to Opening Ceremony:\n- Alice Johnson\n- Bob Smith"
        );
    }

    #[test]
    fn test_guest_list_empty() {
        let event = opening_ceremony();
        assert_eq!(event.guest_list(), "Guests invited to Opening Ceremony:");
    }
}
