//! `TripScheduler` implementation dispatching vehicles by availability.

use courier_core::{
    ScheduleError, Scheduler, ShipmentRequest, Trip, Vehicle, truncate_to_hundredths,
};

use crate::fleet::VehicleQueue;
use crate::selection::{CombinationLimit, select_best_subset};

/// Delay added to an idle vehicle's queue position when it cannot carry any
/// pending package.
pub const DEFAULT_IDLE_STEP: f64 = 1e-6;

/// Configuration for [`TripScheduler`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripSchedulerConfig {
    /// Bound on the exact combination search per shipment.
    pub combination_limit: CombinationLimit,
    /// Queue delay applied to a vehicle that departs empty-handed.
    pub idle_step: f64,
}

impl Default for TripSchedulerConfig {
    fn default() -> Self {
        Self {
            combination_limit: CombinationLimit::default(),
            idle_step: DEFAULT_IDLE_STEP,
        }
    }
}

/// Greedy scheduler that sends the earliest available vehicle out with the
/// best shipment it can carry.
///
/// Each departure carries as many pending packages as fit, then the heaviest
/// such combination. Packages are delivered at `departure + distance / speed`
/// and the vehicle returns after twice the one-way time to its farthest drop,
/// with the one-way time truncated to hundredths before doubling.
///
/// # Examples
/// ```
/// use courier_core::{Scheduler, ShipmentRequest, Vehicle};
/// use courier_scheduler::TripScheduler;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut requests = vec![
///     ShipmentRequest::new("PKG1", 50.0, 30.0)?,
///     ShipmentRequest::new("PKG2", 75.0, 125.0)?,
/// ];
/// let mut vehicles = vec![Vehicle::new(1, 200.0, 70.0)?];
/// let trips = TripScheduler::new().schedule(&mut requests, &mut vehicles)?;
/// assert_eq!(trips.len(), 1);
/// assert!(requests.iter().all(|request| request.delivery_time.is_some()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TripScheduler {
    config: TripSchedulerConfig,
}

impl TripScheduler {
    /// Construct a scheduler using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a scheduler with explicit configuration.
    #[must_use]
    pub const fn with_config(config: TripSchedulerConfig) -> Self {
        Self { config }
    }

    /// Queue time for a vehicle that found nothing to carry at `time`.
    ///
    /// Always strictly later than `time`, even where the idle step is lost to
    /// floating-point precision.
    #[expect(clippy::float_arithmetic, reason = "idle delay is added to the queue key")]
    fn idle_until(&self, time: f64) -> f64 {
        (time + self.config.idle_step).max(time.next_up())
    }
}

impl Scheduler for TripScheduler {
    fn schedule(
        &self,
        requests: &mut [ShipmentRequest],
        vehicles: &mut [Vehicle],
    ) -> Result<Vec<Trip>, ScheduleError> {
        validate_fleet(vehicles)?;
        let Some(largest) = largest_vehicle(vehicles) else {
            return Err(ScheduleError::NoVehicles);
        };

        let mut pending: Vec<usize> = (0..requests.len()).collect();
        let mut queue = VehicleQueue::new(vehicles);
        let mut trips = Vec::new();

        while !pending.is_empty() {
            let Some(departure) = queue.pop() else {
                break;
            };
            let Some(vehicle) = vehicles.get_mut(departure.slot) else {
                continue;
            };

            let weights = pending_weights(requests, &pending);
            let chosen =
                select_best_subset(&weights, vehicle.max_load, self.config.combination_limit);

            if chosen.is_empty() {
                ensure_carriable(requests, &pending, &largest)?;
                let retry_at = self.idle_until(departure.available_at);
                log::trace!(
                    "vehicle {} cannot carry any pending package; retrying at {retry_at}",
                    vehicle.id
                );
                queue.push(departure.slot, retry_at);
                continue;
            }

            let selected: Vec<usize> = chosen
                .iter()
                .filter_map(|&position| pending.get(position).copied())
                .collect();
            let trip = commit_trip(vehicle, departure.available_at, selected, requests);
            log::debug!(
                "vehicle {} departs at {:.2} with {} package(s), back at {:.2}",
                trip.vehicle_id,
                trip.departure_time,
                trip.requests.len(),
                trip.return_time
            );
            queue.push(departure.slot, trip.return_time);
            remove_positions(&mut pending, &chosen);
            trips.push(trip);
        }

        Ok(trips)
    }
}

fn validate_fleet(vehicles: &[Vehicle]) -> Result<(), ScheduleError> {
    if vehicles.is_empty() {
        return Err(ScheduleError::NoVehicles);
    }
    vehicles
        .iter()
        .find(|vehicle| !vehicle.is_operational())
        .map_or(Ok(()), |invalid| {
            Err(ScheduleError::InvalidVehicle {
                vehicle_id: invalid.id,
            })
        })
}

fn largest_vehicle(vehicles: &[Vehicle]) -> Option<Vehicle> {
    vehicles
        .iter()
        .max_by(|a, b| a.max_load.total_cmp(&b.max_load))
        .cloned()
}

#[expect(
    clippy::indexing_slicing,
    reason = "pending only holds indices into requests"
)]
fn pending_weights(requests: &[ShipmentRequest], pending: &[usize]) -> Vec<f64> {
    pending.iter().map(|&index| requests[index].weight).collect()
}

/// Fail with the heaviest pending package when no vehicle in the fleet can
/// carry any of them.
fn ensure_carriable(
    requests: &[ShipmentRequest],
    pending: &[usize],
    largest: &Vehicle,
) -> Result<(), ScheduleError> {
    let mut heaviest: Option<&ShipmentRequest> = None;
    for request in pending.iter().filter_map(|&index| requests.get(index)) {
        if largest.can_carry(request.weight) {
            return Ok(());
        }
        if heaviest.is_none_or(|current| request.weight > current.weight) {
            heaviest = Some(request);
        }
    }

    let Some(request) = heaviest else {
        return Ok(());
    };
    log::warn!(
        "package {} weighs {} but the largest vehicle carries {}",
        request.id,
        request.weight,
        largest.max_load
    );
    Err(ScheduleError::CapacityExceeded {
        request_id: request.id.clone(),
        weight: request.weight,
        max_capacity: largest.max_load,
    })
}

/// Deliver `selected` with `vehicle` leaving at `departure` and advance its
/// availability to the return time.
#[expect(
    clippy::float_arithmetic,
    reason = "travel times divide distance by speed"
)]
fn commit_trip(
    vehicle: &mut Vehicle,
    departure: f64,
    selected: Vec<usize>,
    requests: &mut [ShipmentRequest],
) -> Trip {
    let mut farthest: f64 = 0.0;
    for &index in &selected {
        if let Some(request) = requests.get_mut(index) {
            request.delivery_time = Some(departure + request.distance / vehicle.speed);
            farthest = farthest.max(request.distance);
        }
    }

    let round_trip = 2.0 * truncate_to_hundredths(farthest / vehicle.speed);
    let return_time = departure + round_trip;
    vehicle.available_time = return_time;

    Trip {
        vehicle_id: vehicle.id,
        departure_time: departure,
        requests: selected,
        return_time,
    }
}

/// Drop the entries at `positions` from `pending`, keeping the rest in order.
fn remove_positions(pending: &mut Vec<usize>, positions: &[usize]) {
    let mut taken = vec![false; pending.len()];
    for &position in positions {
        if let Some(flag) = taken.get_mut(position) {
            *flag = true;
        }
    }
    let mut flags = taken.into_iter();
    pending.retain(|_| !flags.next().unwrap_or(false));
}

#[cfg(test)]
mod tests;
