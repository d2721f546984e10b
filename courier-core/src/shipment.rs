//! Shipment requests awaiting pricing and delivery.

use thiserror::Error;

use crate::Quote;

/// A single package to be priced and delivered.
///
/// The pricing fields default to zero and `delivery_time` stays unset until a
/// [`Scheduler`](crate::Scheduler) assigns the request to a trip.
///
/// # Examples
/// ```
/// use courier_core::ShipmentRequest;
///
/// # fn main() -> Result<(), courier_core::ShipmentRequestError> {
/// let request = ShipmentRequest::new("PKG1", 50.0, 30.0)?.with_offer_code("OFR001");
/// assert_eq!(request.offer_code.as_deref(), Some("OFR001"));
/// assert!(request.delivery_time.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipmentRequest {
    /// Caller-supplied identifier. Uniqueness is not enforced.
    pub id: String,
    /// Package weight in kilograms.
    pub weight: f64,
    /// Delivery distance in kilometres.
    pub distance: f64,
    /// Offer code quoted by the customer, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub offer_code: Option<String>,
    /// Discount granted by the applied offer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub discount: f64,
    /// Delivery cost after the discount.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_cost: f64,
    /// Estimated delivery time in hours, set once by the scheduler.
    #[cfg_attr(feature = "serde", serde(default))]
    pub delivery_time: Option<f64>,
}

/// Errors returned by [`ShipmentRequest::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShipmentRequestError {
    /// The identifier was empty or whitespace.
    #[error("shipment request id must not be empty")]
    EmptyId,
    /// The weight was negative, NaN or infinite.
    #[error("weight of {id} must be a finite, non-negative number (got {weight})")]
    InvalidWeight {
        /// Identifier of the rejected request.
        id: String,
        /// Rejected weight.
        weight: f64,
    },
    /// The distance was negative, NaN or infinite.
    #[error("distance of {id} must be a finite, non-negative number (got {distance})")]
    InvalidDistance {
        /// Identifier of the rejected request.
        id: String,
        /// Rejected distance.
        distance: f64,
    },
}

impl ShipmentRequest {
    /// Validates and constructs a [`ShipmentRequest`] without an offer code.
    ///
    /// # Errors
    /// Returns [`ShipmentRequestError`] for an empty id or a weight or
    /// distance that is negative or not finite.
    pub fn new(
        id: impl Into<String>,
        weight: f64,
        distance: f64,
    ) -> Result<Self, ShipmentRequestError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ShipmentRequestError::EmptyId);
        }
        if !is_non_negative(weight) {
            return Err(ShipmentRequestError::InvalidWeight { id, weight });
        }
        if !is_non_negative(distance) {
            return Err(ShipmentRequestError::InvalidDistance { id, distance });
        }
        Ok(Self {
            id,
            weight,
            distance,
            offer_code: None,
            discount: 0.0,
            total_cost: 0.0,
            delivery_time: None,
        })
    }

    /// Attach the offer code quoted for this request.
    #[must_use]
    pub fn with_offer_code(mut self, code: impl Into<String>) -> Self {
        self.offer_code = Some(code.into());
        self
    }

    /// Record the pricing outcome on the request.
    pub const fn apply_quote(&mut self, quote: &Quote) {
        self.discount = quote.discount;
        self.total_cost = quote.total_cost;
    }

    /// Whether the scheduler has already assigned a delivery time.
    #[must_use]
    pub const fn is_scheduled(&self) -> bool {
        self.delivery_time.is_some()
    }
}

const fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
