//! Vehicle registry entries.

use serde::{Deserialize, Serialize};

/// A vehicle available for guest transport.
///
/// The plate number acts as the lookup key. A vehicle is either available
/// or assigned; the directory flips the flag through its assign and release
/// operations and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Plate number, used as the lookup key.
    pub plate: String,
    /// Name of the driver.
    pub driver_name: String,
    /// Free-text vehicle type (e.g. Sedan, SUV, Bus).
    pub vehicle_type: String,
    /// Whether the vehicle can currently be assigned.
    pub available: bool,
}

impl Vehicle {
    /// Create a new vehicle, initially available.
    #[must_use]
    pub fn new(
        plate: impl Into<String>,
        driver_name: impl Into<String>,
        vehicle_type: impl Into<String>,
    ) -> Self {
        Self {
            plate: plate.into(),
            driver_name: driver_name.into(),
            vehicle_type: vehicle_type.into(),
            available: true,
        }
    }

    /// Mark the vehicle as assigned.
    pub fn assign(&mut self) {
        self.available = false;
    }

    /// Mark the vehicle as available again.
    pub fn release(&mut self) {
        self.available = true;
    }
}
