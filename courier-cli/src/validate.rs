//! Pre-scheduling checks on parsed input.

use courier_core::{ShipmentRequest, Vehicle};
use thiserror::Error;

/// Errors raised when parsed input cannot be scheduled.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A package is heavier than the largest vehicle can carry.
    #[error("package {id} weighs {weight} which exceeds the largest vehicle capacity of {max_capacity}")]
    TooHeavy {
        /// Identifier of the package.
        id: String,
        /// Weight of the package.
        weight: f64,
        /// Largest capacity across the fleet.
        max_capacity: f64,
    },
}

/// Reject the first package, in input order, that no vehicle could carry.
///
/// Packages are compared against the largest capacity in the fleet only; a
/// mixed fleet may still leave smaller vehicles idle while the larger ones
/// work through heavy packages. An empty fleet passes.
///
/// # Errors
/// Returns [`ValidationError::TooHeavy`] naming the offending package.
pub fn validate_capacity(
    requests: &[ShipmentRequest],
    vehicles: &[Vehicle],
) -> Result<(), ValidationError> {
    let Some(largest) = vehicles
        .iter()
        .max_by(|a, b| a.max_load.total_cmp(&b.max_load))
    else {
        return Ok(());
    };
    match requests
        .iter()
        .find(|request| !largest.can_carry(request.weight))
    {
        Some(request) => Err(ValidationError::TooHeavy {
            id: request.id.clone(),
            weight: request.weight,
            max_capacity: largest.max_load,
        }),
        None => Ok(()),
    }
}
