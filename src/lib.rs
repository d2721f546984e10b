//! Facade crate for the courier delivery estimator.
//!
//! Re-exports the core domain types and exposes the offer-based pricer and
//! the trip scheduler behind feature flags.

#![forbid(unsafe_code)]

pub use courier_core::{
    Pricer, Quote, ScheduleError, Scheduler, ShipmentRequest, ShipmentRequestError, Trip,
    Vehicle, VehicleError, truncate_to_hundredths,
};

#[cfg(feature = "test-support")]
pub use courier_core::test_support;

#[cfg(feature = "pricing")]
pub use courier_pricing::{
    Bounds, DISTANCE_RATE, Offer, OfferPricer, OfferTable, PricingError, WEIGHT_RATE,
    delivery_cost, discount_for, price_all, round_to_cents,
};

#[cfg(feature = "scheduler")]
pub use courier_scheduler::{
    CombinationLimit, DEFAULT_COMBINATION_LIMIT, DEFAULT_IDLE_STEP, TripScheduler,
    TripSchedulerConfig, combination_count, select_best_subset,
};
