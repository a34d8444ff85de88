//! Guest certificates with validity windows.

use serde::{Deserialize, Serialize};

use crate::clock::Timestamp;
use crate::journal::Journal;

/// A certificate issued for the duration of the event.
///
/// Immutable after construction; assignment to a guest is journaled but not
/// stored on the certificate itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Certificate identifier.
    pub id: i64,
    /// When the certificate was issued.
    pub issued: Timestamp,
    /// When the certificate expires.
    pub expires: Timestamp,
}

impl Certificate {
    /// Create a new certificate.
    #[must_use]
    pub fn new(id: i64, issued: Timestamp, expires: Timestamp) -> Self {
        Self {
            id,
            issued,
            expires,
        }
    }

    /// Journal assignment of this certificate to the named guest.
    pub fn assign_to(&self, guest_name: &str, journal: &mut Journal) {
        journal.log(&format!("Certificate assigned to {guest_name}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::MemorySink;

    #[test]
    fn test_assign_to_journals_assignment() {
        let sink = MemorySink::new();
        let mut journal = Journal::new(Box::new(sink.clone()));
        let certificate = Certificate::new(
            7,
            Timestamp::new(2024, 11, 25, 8, 0),
            Timestamp::new(2024, 11, 26, 18, 0),
        );

        certificate.assign_to("Diana White", &mut journal);

        assert_eq!(
            sink.lines(),
            vec!["[LOG] Certificate assigned to Diana White"]
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let certificate = Certificate::new(
            7,
            Timestamp::new(2024, 11, 25, 8, 0),
            Timestamp::new(2024, 11, 26, 18, 0),
        );
        let json = serde_json::to_string(&certificate).unwrap();
        let back: Certificate = serde_json::from_str(&json).unwrap();
        assert_eq!(certificate, back);
    }
}
