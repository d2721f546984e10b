use thiserror::Error;

use crate::{ShipmentRequest, Vehicle};

/// A single shipment: the requests one vehicle carries on one trip.
///
/// `requests` holds indices into the slice passed to
/// [`Scheduler::schedule`], in the order the scheduler selected them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trip {
    /// Vehicle that carried the shipment.
    pub vehicle_id: u32,
    /// Time the vehicle left with the shipment.
    pub departure_time: f64,
    /// Indices of the delivered requests.
    pub requests: Vec<usize>,
    /// Time the vehicle becomes available again.
    pub return_time: f64,
}

/// Errors returned by [`Scheduler::schedule`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// The fleet was empty, so nothing can be delivered.
    #[error("no vehicles supplied; at least one vehicle is required to schedule deliveries")]
    NoVehicles,
    /// A vehicle had a non-positive or non-finite speed or capacity.
    #[error("vehicle {vehicle_id} has an invalid speed or capacity")]
    InvalidVehicle {
        /// Identifier of the offending vehicle.
        vehicle_id: u32,
    },
    /// A pending request is heavier than every vehicle can carry.
    #[error(
        "package {request_id} weighs {weight} which is too heavy for any vehicle \
         (largest capacity is {max_capacity})"
    )]
    CapacityExceeded {
        /// Identifier of the heaviest pending request.
        request_id: String,
        /// Weight of that request.
        weight: f64,
        /// Largest capacity across the fleet.
        max_capacity: f64,
    },
}

/// Assign shipment requests to vehicle trips.
///
/// Implementations set [`ShipmentRequest::delivery_time`] on every request and
/// advance [`Vehicle::available_time`] as trips are committed. On error the
/// slices may hold a partially applied schedule that callers must discard.
/// Schedulers must be `Send + Sync` to operate safely across threads.
pub trait Scheduler: Send + Sync {
    /// Schedule every request, returning the committed trips in order.
    ///
    /// # Errors
    /// Returns [`ScheduleError`] when the fleet is empty or invalid, or when a
    /// remaining request cannot be carried by any vehicle.
    fn schedule(
        &self,
        requests: &mut [ShipmentRequest],
        vehicles: &mut [Vehicle],
    ) -> Result<Vec<Trip>, ScheduleError>;
}
