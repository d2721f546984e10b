//! Availability queue over a fleet of vehicles.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use courier_core::Vehicle;

/// A vehicle slot waiting to depart at `available_at`.
///
/// Ordering is reversed so that [`BinaryHeap`] pops the earliest departure.
/// Equal times fall back to the slot index, so the vehicle listed first in the
/// fleet departs first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Departure {
    pub(crate) available_at: f64,
    pub(crate) slot: usize,
}

impl PartialEq for Departure {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Departure {}

impl PartialOrd for Departure {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Departure {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .available_at
            .total_cmp(&self.available_at)
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

/// Min-heap of vehicle slots keyed by availability time.
///
/// The queue holds slot indices into the fleet slice rather than vehicles, so
/// the scheduler keeps mutable access to the vehicles themselves.
#[derive(Debug, Default)]
pub(crate) struct VehicleQueue {
    heap: BinaryHeap<Departure>,
}

impl VehicleQueue {
    /// Queue every vehicle at its current availability.
    pub(crate) fn new(vehicles: &[Vehicle]) -> Self {
        let heap = vehicles
            .iter()
            .enumerate()
            .map(|(slot, vehicle)| Departure {
                available_at: vehicle.available_time,
                slot,
            })
            .collect();
        Self { heap }
    }

    /// Requeue `slot` to depart at `available_at`.
    pub(crate) fn push(&mut self, slot: usize, available_at: f64) {
        self.heap.push(Departure { available_at, slot });
    }

    /// Remove and return the earliest departure.
    pub(crate) fn pop(&mut self) -> Option<Departure> {
        self.heap.pop()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
