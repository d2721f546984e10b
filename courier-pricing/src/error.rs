//! Error types raised while configuring prices and offers.

use thiserror::Error;

/// Errors raised while building an [`OfferTable`](crate::OfferTable) or an
/// [`OfferPricer`](crate::OfferPricer).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// The base delivery cost was negative or not finite.
    #[error("base delivery cost must be a finite, non-negative amount (got {base_cost})")]
    InvalidBaseCost {
        /// Rejected base cost.
        base_cost: f64,
    },
    /// An offer code was empty.
    #[error("offer codes must not be empty")]
    EmptyCode,
    /// A discount percentage fell outside `0..=100`.
    #[error("offer {code} has discount {percent}% which is outside 0..=100")]
    InvalidDiscount {
        /// Code of the rejected offer.
        code: String,
        /// Rejected percentage.
        percent: f64,
    },
    /// A weight or distance range had `min > max` or non-finite bounds.
    #[error("offer {code} has an invalid {field} range")]
    InvalidBounds {
        /// Code of the rejected offer.
        code: String,
        /// Either `weight` or `distance`.
        field: &'static str,
    },
    /// Two offers shared a code (case-insensitive).
    #[error("offer {code} is defined more than once")]
    DuplicateOffer {
        /// Duplicated code.
        code: String,
    },
}
