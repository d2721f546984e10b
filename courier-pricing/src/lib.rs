//! Delivery pricing for courier shipment requests.
//!
//! A delivery costs the base charge plus ten per kilogram and five per
//! kilometre. Customers may quote an offer code; when the package's weight and
//! distance both fall inside the offer's inclusive ranges, the offer's
//! percentage is taken off the delivery cost. Every amount is rounded to the
//! nearest cent.
//!
//! [`OfferPricer`] implements the [`Pricer`](courier_core::Pricer) trait so it
//! can be handed to anything that prices requests.
//!
//! # Examples
//!
//! ```
//! use courier_core::{Pricer, ShipmentRequest};
//! use courier_pricing::{OfferPricer, OfferTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pricer = OfferPricer::new(100.0, OfferTable::default())?;
//! let request = ShipmentRequest::new("PKG3", 10.0, 100.0)?.with_offer_code("OFR003");
//! let quote = pricer.quote(&request);
//! assert_eq!(quote.delivery_cost, 700.0);
//! assert_eq!(quote.discount, 35.0);
//! assert_eq!(quote.total_cost, 665.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use courier_core::{Pricer, Quote, ShipmentRequest};

mod error;
mod offers;

pub use error::PricingError;
pub use offers::{Bounds, Offer, OfferTable};

/// Charge per kilogram of package weight.
pub const WEIGHT_RATE: f64 = 10.0;
/// Charge per kilometre of delivery distance.
pub const DISTANCE_RATE: f64 = 5.0;

/// Round an amount to the nearest cent.
///
/// The decision follows the exact value of `amount`: only a true midpoint
/// such as `22.625` rounds to the even cent. A value like `0.015`, stored
/// slightly below the midpoint, rounds down even though scaling it by one
/// hundred lands on `1.5`.
///
/// # Examples
/// ```
/// use courier_pricing::round_to_cents;
///
/// assert_eq!(round_to_cents(86.4192), 86.42);
/// assert_eq!(round_to_cents(22.625), 22.62);
/// assert_eq!(round_to_cents(0.375), 0.38);
/// assert_eq!(round_to_cents(2.675), 2.67);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "currency rounding scales by cents")]
pub fn round_to_cents(amount: f64) -> f64 {
    let scaled = amount * 100.0;
    // Exact remainder of the scaling, recovered with a fused multiply-add.
    let residual = amount.mul_add(100.0, -scaled);
    let on_midpoint = (scaled - scaled.trunc()).abs().total_cmp(&0.5).is_eq();
    let cents = if on_midpoint && residual > 0.0 {
        scaled.ceil()
    } else if on_midpoint && residual < 0.0 {
        scaled.floor()
    } else {
        scaled.round_ties_even()
    };
    cents / 100.0
}

/// Delivery cost before discounts.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "delivery cost is a linear function of weight and distance"
)]
pub fn delivery_cost(base_cost: f64, weight: f64, distance: f64) -> f64 {
    round_to_cents(base_cost + weight * WEIGHT_RATE + distance * DISTANCE_RATE)
}

/// Discount granted by `offer` on a delivery costing `delivery_cost`.
///
/// Returns zero when there is no offer or the package does not qualify.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "discounts are a percentage of the delivery cost"
)]
pub fn discount_for(offer: Option<&Offer>, delivery_cost: f64, weight: f64, distance: f64) -> f64 {
    match offer {
        Some(found) if found.applies_to(weight, distance) => {
            round_to_cents(delivery_cost * found.discount_percent / 100.0)
        }
        _ => 0.0,
    }
}

/// Prices requests from a base cost and an offer table.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferPricer {
    base_cost: f64,
    offers: OfferTable,
}

impl OfferPricer {
    /// Construct a pricer charging `base_cost` per delivery.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidBaseCost`] for a negative or non-finite
    /// base cost.
    pub fn new(base_cost: f64, offers: OfferTable) -> Result<Self, PricingError> {
        if !base_cost.is_finite() || base_cost < 0.0 {
            return Err(PricingError::InvalidBaseCost { base_cost });
        }
        Ok(Self { base_cost, offers })
    }

    fn lookup(&self, code: Option<&str>) -> Option<&Offer> {
        let requested = code?;
        let offer = self.offers.find(requested);
        if offer.is_none() {
            log::debug!("offer code {requested:?} is not recognised; no discount applied");
        }
        offer
    }
}

impl Pricer for OfferPricer {
    #[expect(clippy::float_arithmetic, reason = "total is cost minus discount")]
    fn quote(&self, request: &ShipmentRequest) -> Quote {
        let cost = delivery_cost(self.base_cost, request.weight, request.distance);
        let offer = self.lookup(request.offer_code.as_deref());
        let discount = discount_for(offer, cost, request.weight, request.distance);
        Quote {
            delivery_cost: cost,
            discount,
            total_cost: round_to_cents(cost - discount),
        }
    }
}

/// Quote every request and record discount and total in place.
pub fn price_all(pricer: &dyn Pricer, requests: &mut [ShipmentRequest]) {
    for request in requests.iter_mut() {
        let quote = pricer.quote(request);
        request.apply_quote(&quote);
    }
}
