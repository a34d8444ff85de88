//! The event directory.
//!
//! [`Directory`] owns the canonical guest, event, and vehicle records plus
//! the permission table and the operations journal. All cross-record
//! bookkeeping goes through it; mutating operations return an [`Outcome`]
//! instead of an error, and failed operations never touch state.

use tracing::debug;

use crate::journal::Journal;
use crate::permissions::Permissions;
use crate::records::{Event, Guest, Notification, Vehicle};

/// What a directory operation did, or why it declined to act.
///
/// A closed set of outcome kinds: misses (unknown guest, unknown vehicle,
/// vehicle already assigned) are ordinary outcomes, not errors, and are
/// reported back to the caller without any state change. The `Display`
/// rendering is the user-facing confirmation or refusal line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A vehicle was assigned to a guest.
    Assigned {
        /// Plate of the assigned vehicle.
        plate: String,
        /// Name of the receiving guest.
        guest: String,
    },
    /// A vehicle was released back to the pool.
    Released {
        /// Plate of the released vehicle.
        plate: String,
    },
    /// A guest's status was overwritten.
    StatusUpdated {
        /// Name of the guest.
        guest: String,
        /// The new status.
        status: String,
    },
    /// A guest was invited to an event.
    Invited {
        /// Name of the event.
        event: String,
        /// Name of the invited guest.
        guest: String,
    },
    /// A notification was delivered to a guest.
    Notified {
        /// Name of the notified guest.
        guest: String,
    },
    /// An event was copied onto a guest's schedule.
    Scheduled {
        /// Name of the guest.
        guest: String,
        /// Name of the scheduled event.
        event: String,
    },
    /// No guest with the given id exists.
    GuestNotFound {
        /// The id that was looked up.
        id: i64,
    },
    /// No vehicle with the given plate exists.
    VehicleNotFound {
        /// The plate that was looked up.
        plate: String,
    },
    /// No event with the given id exists.
    EventNotFound {
        /// The id that was looked up.
        id: i64,
    },
    /// The vehicle exists but is already assigned.
    VehicleUnavailable {
        /// Plate of the unavailable vehicle.
        plate: String,
    },
}

impl Outcome {
    /// Whether the operation performed its mutation.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !matches!(
            self,
            Self::GuestNotFound { .. }
                | Self::VehicleNotFound { .. }
                | Self::EventNotFound { .. }
                | Self::VehicleUnavailable { .. }
        )
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assigned { plate, guest } => {
                write!(f, "Assigned vehicle {plate} to guest {guest}.")
            }
            Self::Released { plate } => write!(f, "Vehicle {plate} is now available."),
            Self::StatusUpdated { guest, status } => {
                write!(f, "Status of guest {guest} updated to {status}.")
            }
            Self::Invited { event, guest } => {
                write!(f, "Invited guest {guest} to event {event}.")
            }
            Self::Notified { guest } => write!(f, "Notified guest {guest}."),
            Self::Scheduled { guest, event } => {
                write!(f, "Added event {event} to schedule of guest {guest}.")
            }
            Self::GuestNotFound { id } => write!(f, "Guest with ID {id} not found."),
            Self::VehicleNotFound { plate } => {
                write!(f, "Vehicle with plate number {plate} not found.")
            }
            Self::EventNotFound { id } => write!(f, "Event with ID {id} not found."),
            Self::VehicleUnavailable { plate } => {
                write!(f, "Vehicle {plate} is not available.")
            }
        }
    }
}

/// Top-level orchestrator for a single-session event.
///
/// Collections are append-only and keep insertion order; all lookups are
/// linear scans, which is fine at the handful-of-records scale this serves.
/// Duplicate guest ids or vehicle plates are accepted silently; the first
/// match wins on lookup.
#[derive(Debug)]
pub struct Directory {
    guests: Vec<Guest>,
    events: Vec<Event>,
    vehicles: Vec<Vehicle>,
    permissions: Permissions,
    journal: Journal,
}

impl Directory {
    /// Create an empty directory writing to the given journal.
    #[must_use]
    pub fn new(journal: Journal) -> Self {
        Self {
            guests: Vec::new(),
            events: Vec::new(),
            vehicles: Vec::new(),
            permissions: Permissions::new(),
            journal,
        }
    }

    /// Registered guests, in insertion order.
    #[must_use]
    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    /// Registered events, in insertion order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Registered vehicles, in insertion order.
    #[must_use]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Register a guest and journal the addition.
    pub fn add_guest(&mut self, guest: Guest) {
        self.journal.log(&format!("Added guest: {}", guest.name));
        self.guests.push(guest);
    }

    /// Register a vehicle. No journal entry is emitted.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        debug!(plate = %vehicle.plate, "registering vehicle");
        self.vehicles.push(vehicle);
    }

    /// Register an event and journal the addition.
    pub fn add_event(&mut self, event: Event) {
        self.journal.log(&format!("Added event: {}", event.name));
        self.events.push(event);
    }

    /// Assign an available vehicle to a guest.
    ///
    /// Validation short-circuits in three stages: the guest must exist, the
    /// vehicle must exist, and the vehicle must be available. On any miss
    /// the corresponding outcome is returned and nothing is mutated; on
    /// success the guest's `assigned_vehicle` and the vehicle's availability
    /// flag change together.
    pub fn assign_vehicle_to_guest(&mut self, guest_id: i64, plate: &str) -> Outcome {
        let Some(guest) = self.guests.iter_mut().find(|g| g.id == guest_id) else {
            debug!(guest_id, "assignment refused: unknown guest");
            return Outcome::GuestNotFound { id: guest_id };
        };

        let Some(vehicle) = self.vehicles.iter_mut().find(|v| v.plate == plate) else {
            debug!(plate, "assignment refused: unknown vehicle");
            return Outcome::VehicleNotFound {
                plate: plate.to_string(),
            };
        };

        if !vehicle.available {
            debug!(plate, "assignment refused: vehicle unavailable");
            return Outcome::VehicleUnavailable {
                plate: plate.to_string(),
            };
        }

        guest.assigned_vehicle = Some(plate.to_string());
        vehicle.assign();
        debug!(guest_id, plate, "vehicle assigned");
        Outcome::Assigned {
            plate: plate.to_string(),
            guest: guest.name.clone(),
        }
    }

    /// Release a vehicle back to the pool.
    ///
    /// Only the vehicle's availability flag changes; any guest still
    /// referencing the plate keeps it as a last-known assignment. Releasing
    /// an already-available vehicle is a no-op success.
    pub fn release_vehicle(&mut self, plate: &str) -> Outcome {
        match self.vehicles.iter_mut().find(|v| v.plate == plate) {
            Some(vehicle) => {
                vehicle.release();
                debug!(plate, "vehicle released");
                Outcome::Released {
                    plate: plate.to_string(),
                }
            }
            None => Outcome::VehicleNotFound {
                plate: plate.to_string(),
            },
        }
    }

    /// Overwrite a guest's status and journal the transition.
    pub fn update_guest_status(&mut self, guest_id: i64, status: &str) -> Outcome {
        match self.guests.iter_mut().find(|g| g.id == guest_id) {
            Some(guest) => {
                guest.update_status(status, &mut self.journal);
                Outcome::StatusUpdated {
                    guest: guest.name.clone(),
                    status: status.to_string(),
                }
            }
            None => Outcome::GuestNotFound { id: guest_id },
        }
    }

    /// Invite a guest by name to a registered event.
    ///
    /// The name is not checked against the guest collection; invitations
    /// and registrations are independent.
    pub fn invite_guest_to_event(&mut self, event_id: i64, guest_name: &str) -> Outcome {
        match self.events.iter_mut().find(|e| e.id == event_id) {
            Some(event) => {
                event.invite_guest(guest_name, &mut self.journal);
                Outcome::Invited {
                    event: event.name.clone(),
                    guest: guest_name.to_string(),
                }
            }
            None => Outcome::EventNotFound { id: event_id },
        }
    }

    /// Deliver a notification to a guest.
    pub fn notify_guest(&mut self, guest_id: i64, notification: Notification) -> Outcome {
        match self.guests.iter_mut().find(|g| g.id == guest_id) {
            Some(guest) => {
                guest.receive_notification(notification, &mut self.journal);
                Outcome::Notified {
                    guest: guest.name.clone(),
                }
            }
            None => Outcome::GuestNotFound { id: guest_id },
        }
    }

    /// Copy a registered event onto a guest's personal schedule.
    ///
    /// The guest receives an independent copy; later invitations on the
    /// canonical event do not appear in the schedule.
    pub fn schedule_event_for_guest(&mut self, guest_id: i64, event_id: i64) -> Outcome {
        let Some(event) = self.events.iter().find(|e| e.id == event_id).cloned() else {
            return Outcome::EventNotFound { id: event_id };
        };

        match self.guests.iter_mut().find(|g| g.id == guest_id) {
            Some(guest) => {
                let name = event.name.clone();
                guest.add_event(event);
                Outcome::Scheduled {
                    guest: guest.name.clone(),
                    event: name,
                }
            }
            None => Outcome::GuestNotFound { id: guest_id },
        }
    }

    /// Assign a role to a guest name.
    ///
    /// Delegates to the permission table; the name does not have to be a
    /// registered guest.
    pub fn assign_role_to_guest(&mut self, guest_name: &str, role: &str) {
        self.permissions
            .assign_role(guest_name, role, &mut self.journal);
    }

    /// The role assigned to a guest name, or the `No Role` sentinel.
    #[must_use]
    pub fn role_of(&self, guest_name: &str) -> &str {
        self.permissions.role_of(guest_name)
    }

    /// First guest with exactly the given name, if any. Pure read.
    #[must_use]
    pub fn search_guest(&self, name: &str) -> Option<&Guest> {
        self.guests.iter().find(|g| g.name == name)
    }

    /// First event with exactly the given name, if any. Pure read.
    #[must_use]
    pub fn search_event(&self, name: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.name == name)
    }

    /// One-line report of a guest search.
    #[must_use]
    pub fn search_guest_summary(&self, name: &str) -> String {
        match self.search_guest(name) {
            Some(guest) => format!("Guest found: {} ({})", guest.name, guest.status),
            None => "Guest not found.".to_string(),
        }
    }

    /// One-line report of an event search.
    #[must_use]
    pub fn search_event_summary(&self, name: &str) -> String {
        match self.search_event(name) {
            Some(event) => format!("Event found: {} at {}", event.name, event.time),
            None => "Event not found.".to_string(),
        }
    }

    /// Render all guests with their statuses, in insertion order.
    #[must_use]
    pub fn list_guests(&self) -> String {
        let mut out = String::from("All guests:");
        for guest in &self.guests {
            out.push_str(&format!("\n- {} ({})", guest.name, guest.status));
        }
        out
    }

    /// Render all events with their times, in insertion order.
    #[must_use]
    pub fn list_events(&self) -> String {
        let mut out = String::from("All events:");
        for event in &self.events {
            out.push_str(&format!("\n- {} at {}", event.name, event.time));
        }
        out
    }

    /// Render the vehicle pool with availability, in insertion order.
    #[must_use]
    pub fn list_vehicles(&self) -> String {
        let mut out = String::from("Vehicles:");
        for vehicle in &self.vehicles {
            out.push_str(&format!(
                "\nPlate: {} | Driver: {} | Type: {} | Available: {}",
                vehicle.plate,
                vehicle.driver_name,
                vehicle.vehicle_type,
                if vehicle.available { "Yes" } else { "No" }
            ));
        }
        out
    }

    /// Render each guest's current vehicle assignment, in insertion order.
    #[must_use]
    pub fn list_guest_vehicles(&self) -> String {
        let mut out = String::from("Guest Vehicle Assignments:");
        for guest in &self.guests {
            out.push_str(&format!(
                "\nGuest: {} | Assigned Vehicle: {}",
                guest.name,
                guest.assigned_vehicle.as_deref().unwrap_or("None")
            ));
        }
        out
    }
}
