//! Core domain types for the courier engine.
//!
//! The crate models shipment requests and delivery vehicles, and defines the
//! [`Scheduler`] and [`Pricer`] traits implemented by the scheduling and
//! pricing crates. Constructors return `Result` to surface invalid input
//! early; the traits report failures through [`ScheduleError`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod pricing;
mod schedule;
mod shipment;
mod time;
mod vehicle;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use pricing::{Pricer, Quote};
pub use schedule::{ScheduleError, Scheduler, Trip};
pub use shipment::{ShipmentRequest, ShipmentRequestError};
pub use time::truncate_to_hundredths;
pub use vehicle::{Vehicle, VehicleError};
