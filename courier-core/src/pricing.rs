use crate::ShipmentRequest;

/// Price breakdown for a single shipment request.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quote {
    /// Cost before any discount.
    pub delivery_cost: f64,
    /// Discount granted by an applicable offer.
    pub discount: f64,
    /// Cost after the discount.
    pub total_cost: f64,
}

/// Compute delivery prices.
///
/// Implementations must be pure: the same request always yields the same
/// quote, and quoting never depends on scheduling state.
pub trait Pricer: Send + Sync {
    /// Quote the delivery cost of `request`.
    fn quote(&self, request: &ShipmentRequest) -> Quote;
}
