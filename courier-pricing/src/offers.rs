//! Discount offers and the table they are looked up in.

use serde::{Deserialize, Serialize};

use crate::PricingError;

/// Inclusive `[min, max]` range used by offer criteria.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Smallest accepted value.
    pub min: f64,
    /// Largest accepted value.
    pub max: f64,
}

impl Bounds {
    /// Construct an inclusive range.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the range, boundaries included.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    const fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// A percentage discount granted when weight and distance both qualify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Code customers quote to claim the offer.
    pub code: String,
    /// Discount as a percentage of the delivery cost.
    pub discount_percent: f64,
    /// Qualifying package weights.
    pub weight: Bounds,
    /// Qualifying delivery distances.
    pub distance: Bounds,
}

impl Offer {
    /// Whether a package of `weight` sent over `distance` qualifies.
    #[must_use]
    pub fn applies_to(&self, weight: f64, distance: f64) -> bool {
        self.weight.contains(weight) && self.distance.contains(distance)
    }

    fn validate(&self) -> Result<(), PricingError> {
        if self.code.trim().is_empty() {
            return Err(PricingError::EmptyCode);
        }
        if !(0.0..=100.0).contains(&self.discount_percent) {
            return Err(PricingError::InvalidDiscount {
                code: self.code.clone(),
                percent: self.discount_percent,
            });
        }
        if !self.weight.is_valid() {
            return Err(PricingError::InvalidBounds {
                code: self.code.clone(),
                field: "weight",
            });
        }
        if !self.distance.is_valid() {
            return Err(PricingError::InvalidBounds {
                code: self.code.clone(),
                field: "distance",
            });
        }
        Ok(())
    }
}

/// The set of offers customers may quote.
///
/// Codes are matched case-insensitively. The [`Default`] table carries the
/// three standard offers.
///
/// # Examples
/// ```
/// use courier_pricing::OfferTable;
///
/// let table = OfferTable::default();
/// let offer = table.find("ofr001").expect("standard offer");
/// assert_eq!(offer.discount_percent, 10.0);
/// assert!(table.find("NA").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Offer>", into = "Vec<Offer>")]
pub struct OfferTable {
    offers: Vec<Offer>,
}

impl OfferTable {
    /// Validate and build a table from explicit offers.
    ///
    /// # Errors
    /// Returns [`PricingError`] when an offer has an empty code, a discount
    /// outside `0..=100`, an inverted range, or a duplicated code.
    pub fn new(offers: Vec<Offer>) -> Result<Self, PricingError> {
        for (position, offer) in offers.iter().enumerate() {
            offer.validate()?;
            let duplicated = offers
                .iter()
                .take(position)
                .any(|earlier| earlier.code.eq_ignore_ascii_case(&offer.code));
            if duplicated {
                return Err(PricingError::DuplicateOffer {
                    code: offer.code.clone(),
                });
            }
        }
        Ok(Self { offers })
    }

    /// Look up an offer by code, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Offer> {
        self.offers
            .iter()
            .find(|offer| offer.code.eq_ignore_ascii_case(code))
    }

    /// Iterate the offers in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Offer> {
        self.offers.iter()
    }

    /// Number of offers in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.offers.len()
    }

    /// Whether the table holds no offers.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

impl Default for OfferTable {
    fn default() -> Self {
        let standard = |code: &str, percent, weight, distance| Offer {
            code: code.to_owned(),
            discount_percent: percent,
            weight,
            distance,
        };
        Self {
            offers: vec![
                standard(
                    "OFR001",
                    10.0,
                    Bounds::new(70.0, 200.0),
                    Bounds::new(0.0, 200.0),
                ),
                standard(
                    "OFR002",
                    7.0,
                    Bounds::new(100.0, 250.0),
                    Bounds::new(50.0, 150.0),
                ),
                standard(
                    "OFR003",
                    5.0,
                    Bounds::new(10.0, 150.0),
                    Bounds::new(50.0, 250.0),
                ),
            ],
        }
    }
}

impl TryFrom<Vec<Offer>> for OfferTable {
    type Error = PricingError;

    fn try_from(offers: Vec<Offer>) -> Result<Self, Self::Error> {
        Self::new(offers)
    }
}

impl From<OfferTable> for Vec<Offer> {
    fn from(table: OfferTable) -> Self {
        table.offers
    }
}
