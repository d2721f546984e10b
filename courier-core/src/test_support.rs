//! Test-only fixtures shared by unit, behaviour and property tests.
//!
//! Builders here skip validation so tests can also construct the invalid
//! shapes that schedulers must reject.

use crate::{Pricer, Quote, ShipmentRequest, Vehicle};

/// Build an unpriced, unscheduled request.
#[must_use]
pub fn request(id: &str, weight: f64, distance: f64) -> ShipmentRequest {
    ShipmentRequest {
        id: id.to_owned(),
        weight,
        distance,
        offer_code: None,
        discount: 0.0,
        total_cost: 0.0,
        delivery_time: None,
    }
}

/// Build a vehicle available from time zero.
#[must_use]
pub const fn vehicle(id: u32, max_load: f64, speed: f64) -> Vehicle {
    Vehicle {
        id,
        max_load,
        speed,
        available_time: 0.0,
    }
}

/// Build `count` identical vehicles numbered from one.
#[must_use]
pub fn fleet(count: u32, max_load: f64, speed: f64) -> Vec<Vehicle> {
    (1..=count).map(|id| vehicle(id, max_load, speed)).collect()
}

/// The five-package sample delivered by two 200 kg vehicles at 70 km/h.
#[must_use]
pub fn sample_requests() -> Vec<ShipmentRequest> {
    vec![
        request("PKG1", 50.0, 30.0),
        request("PKG2", 75.0, 125.0),
        request("PKG3", 175.0, 100.0),
        request("PKG4", 110.0, 60.0),
        request("PKG5", 155.0, 95.0),
    ]
}

/// `Pricer` charging a fixed amount per request with no discount.
#[derive(Debug, Clone, Copy)]
pub struct FlatRatePricer(pub f64);

impl Pricer for FlatRatePricer {
    fn quote(&self, _request: &ShipmentRequest) -> Quote {
        Quote {
            delivery_cost: self.0,
            discount: 0.0,
            total_cost: self.0,
        }
    }
}
