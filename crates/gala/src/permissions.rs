//! Role assignments for guests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::journal::Journal;

/// Role reported for guests with no assignment.
pub const NO_ROLE: &str = "No Role";

/// Mapping from guest name to role.
///
/// Role assignment is independent of the guest collection: a role can be
/// assigned to a name that was never registered, and lookups on unknown
/// names return [`NO_ROLE`]. Last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    roles: HashMap<String, String>,
}

impl Permissions {
    /// Create an empty permission table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a role to a guest name, overwriting any prior role.
    pub fn assign_role(
        &mut self,
        guest: impl Into<String>,
        role: impl Into<String>,
        journal: &mut Journal,
    ) {
        let guest = guest.into();
        let role = role.into();
        journal.log(&format!("Assigned role {role} to {guest}"));
        self.roles.insert(guest, role);
    }

    /// The role assigned to a guest name, or [`NO_ROLE`].
    #[must_use]
    pub fn role_of(&self, guest: &str) -> &str {
        self.roles.get(guest).map_or(NO_ROLE, String::as_str)
    }
}
