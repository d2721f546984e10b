//! Delivery vehicles and their availability.

use thiserror::Error;

/// A delivery vehicle with a per-trip load limit and a constant speed.
///
/// `available_time` is the earliest time (in hours) the vehicle can depart on
/// its next trip. It only moves forward, and only the scheduler moves it.
///
/// # Examples
/// ```
/// use courier_core::Vehicle;
///
/// # fn main() -> Result<(), courier_core::VehicleError> {
/// let vehicle = Vehicle::new(1, 200.0, 70.0)?;
/// assert!(vehicle.can_carry(200.0));
/// assert!(!vehicle.can_carry(200.5));
/// assert_eq!(vehicle.available_time, 0.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    /// Numeric identity, unique within a fleet.
    pub id: u32,
    /// Maximum total weight carried on one trip.
    pub max_load: f64,
    /// Travel speed in kilometres per hour.
    pub speed: f64,
    /// Earliest departure time for the next trip.
    #[cfg_attr(feature = "serde", serde(default))]
    pub available_time: f64,
}

/// Errors returned by [`Vehicle::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VehicleError {
    /// The load limit was zero, negative or not finite.
    #[error("vehicle {id} must have a positive, finite capacity (got {max_load})")]
    InvalidCapacity {
        /// Identifier of the rejected vehicle.
        id: u32,
        /// Rejected capacity.
        max_load: f64,
    },
    /// The speed was zero, negative or not finite.
    #[error("vehicle {id} must have a positive, finite speed (got {speed})")]
    InvalidSpeed {
        /// Identifier of the rejected vehicle.
        id: u32,
        /// Rejected speed.
        speed: f64,
    },
    /// The initial availability was negative or not finite.
    #[error("vehicle {id} must become available at a finite, non-negative time (got {time})")]
    InvalidAvailableTime {
        /// Identifier of the rejected vehicle.
        id: u32,
        /// Rejected availability.
        time: f64,
    },
}

impl Vehicle {
    /// Validates and constructs a [`Vehicle`] available from time zero.
    ///
    /// # Errors
    /// Returns [`VehicleError`] when the capacity or speed is not a positive,
    /// finite number.
    pub fn new(id: u32, max_load: f64, speed: f64) -> Result<Self, VehicleError> {
        if !is_positive(max_load) {
            return Err(VehicleError::InvalidCapacity { id, max_load });
        }
        if !is_positive(speed) {
            return Err(VehicleError::InvalidSpeed { id, speed });
        }
        Ok(Self {
            id,
            max_load,
            speed,
            available_time: 0.0,
        })
    }

    /// Start the vehicle at a caller-supplied availability.
    ///
    /// # Errors
    /// Returns [`VehicleError::InvalidAvailableTime`] for negative or
    /// non-finite times.
    pub const fn with_available_time(mut self, time: f64) -> Result<Self, VehicleError> {
        if !time.is_finite() || time < 0.0 {
            return Err(VehicleError::InvalidAvailableTime { id: self.id, time });
        }
        self.available_time = time;
        Ok(self)
    }

    /// Whether a single package of `weight` fits within the load limit.
    #[must_use]
    pub const fn can_carry(&self, weight: f64) -> bool {
        weight <= self.max_load
    }

    /// Whether speed and capacity satisfy the constructor's invariants.
    ///
    /// Fields are public, so schedulers re-check before dividing by speed.
    #[must_use]
    pub const fn is_operational(&self) -> bool {
        is_positive(self.max_load) && is_positive(self.speed)
    }
}

const fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
