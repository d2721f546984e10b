//! Trip scheduling for courier deliveries.
//!
//! This crate provides [`TripScheduler`], the default implementation of the
//! [`Scheduler`](courier_core::Scheduler) trait. Vehicles are dispatched
//! greedily in order of availability: each departing vehicle carries the
//! combination of pending packages that first maximises the package count and
//! then the carried weight, subject to its load limit.
//!
//! The combination search in [`select_best_subset`] is exact while the number
//! of candidate combinations stays within a [`CombinationLimit`]; beyond that
//! it falls back to the lightest-first greedy selection, which still carries
//! the maximum number of packages but may leave capacity unused.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod fleet;
mod scheduler;
mod selection;

pub use scheduler::{DEFAULT_IDLE_STEP, TripScheduler, TripSchedulerConfig};
pub use selection::{
    CombinationLimit, DEFAULT_COMBINATION_LIMIT, combination_count, select_best_subset,
};
