//! The scripted event walkthrough.
//!
//! One fixed sequence of directory operations, run once at startup: seed
//! the roster, assign and release vehicles, list, search, update a status,
//! and hand out a role. There is no loop and no interactive input.

use crate::clock::Timestamp;
use crate::directory::Directory;
use crate::records::{Event, Guest, Vehicle};

/// Populate the directory with the walkthrough roster.
///
/// Four guests, four vehicles, and two events. Guest and event additions
/// are journaled by the directory.
pub fn seed(directory: &mut Directory) {
    directory.add_guest(Guest::new(1, "Alice Johnson", "alice.johnson@university.com"));
    directory.add_guest(Guest::new(2, "Bob Smith", "bob.smith@company.com"));
    directory.add_guest(Guest::new(3, "Charlie Brown", "charlie.brown@organization.org"));
    directory.add_guest(Guest::new(4, "Diana White", "diana.white@gov.com"));

    directory.add_vehicle(Vehicle::new("ABC-123", "John Doe", "Sedan"));
    directory.add_vehicle(Vehicle::new("XYZ-789", "Jane Smith", "SUV"));
    directory.add_vehicle(Vehicle::new("LMN-456", "Robert Green", "Minivan"));
    directory.add_vehicle(Vehicle::new("OPQ-111", "Laura Black", "Su7"));

    directory.add_event(Event::new(
        1,
        "Opening Ceremony",
        "Main Hall",
        Timestamp::new(2024, 11, 25, 9, 0),
    ));
    directory.add_event(Event::new(
        2,
        "Tech Showcase",
        "Exhibition Center",
        Timestamp::new(2024, 11, 26, 14, 0),
    ));
}

/// Run the full walkthrough against the given directory.
///
/// Prints the listing, assignment, and search reports to standard output;
/// mutations are journaled through the directory's journal as a side
/// effect. Always completes.
pub fn run(directory: &mut Directory) {
    seed(directory);

    println!("{}", directory.list_guests());
    println!("{}", directory.list_events());

    println!("\n--- Assigning Vehicles to Guests ---");
    println!("{}", directory.assign_vehicle_to_guest(1, "ABC-123"));
    println!("{}", directory.assign_vehicle_to_guest(2, "XYZ-789"));
    println!("{}", directory.assign_vehicle_to_guest(3, "LMN-456"));

    println!("\n--- Guest Vehicle Assignments ---");
    println!("{}", directory.list_guest_vehicles());

    println!("\n--- Releasing Vehicle ---");
    println!("{}", directory.release_vehicle("ABC-123"));

    println!("\n--- Updated Vehicle List ---");
    println!("{}", directory.list_vehicles());

    println!("{}", directory.search_guest_summary("Alice Johnson"));
    println!("{}", directory.search_event_summary("Opening Ceremony"));

    directory.update_guest_status(1, "Arrived");

    directory.assign_role_to_guest("Alice Johnson", "VIP");
}
