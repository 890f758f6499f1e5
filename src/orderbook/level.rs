//! Price/quantity pairs and the price keys the book sides are indexed by

use super::error::OrderBookError;
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Tolerance under which two prices or quantities are considered equal
pub const PRECISION: f64 = 0.000_000_01;

/// Decimal digits kept when hashing, matching [`PRECISION`]
pub const PRECISION_DIGITS: i32 = 8;

/// An immutable price and the quantity resting at it.
///
/// Equality is approximate: two levels are equal when both price and quantity differ by less
/// than [`PRECISION`]. Hashing rounds each component to [`PRECISION_DIGITS`] decimals so that
/// levels differing only beyond that precision land in the same bucket.
#[derive(Debug, Clone, Copy)]
pub struct PriceLevel {
    price: f64,
    quantity: f64,
}

impl PriceLevel {
    /// Create a level, rejecting negative, infinite or NaN components
    pub fn new(price: f64, quantity: f64) -> Result<Self, OrderBookError> {
        Ok(Self {
            price: validate("price", price)?,
            quantity: validate("quantity", quantity)?,
        })
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Key identifying this level's price within a book side
    pub fn key(&self) -> PriceKey {
        PriceKey::new(self.price)
    }

    /// Copy of this level carrying a different quantity
    pub fn with_quantity(&self, quantity: f64) -> Result<Self, OrderBookError> {
        Self::new(self.price, quantity)
    }

    /// A zero quantity marks the level for deletion in a diff
    pub fn is_deletion(&self) -> bool {
        self.quantity == 0.0
    }
}

fn validate(field: &'static str, value: f64) -> Result<f64, OrderBookError> {
    // NaN fails the comparison
    if value >= 0.0 && value != f64::INFINITY {
        Ok(value + 0.0)
    } else {
        Err(OrderBookError::InvalidValue { field, value })
    }
}

fn rounded_bits(value: f64) -> u64 {
    let scaled = (value * 10f64.powi(PRECISION_DIGITS)).round();
    (scaled + 0.0).to_bits()
}

impl PartialEq for PriceLevel {
    fn eq(&self, other: &Self) -> bool {
        (self.price - other.price).abs() < PRECISION
            && (self.quantity - other.quantity).abs() < PRECISION
    }
}

impl Hash for PriceLevel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        rounded_bits(self.price).hash(state);
        rounded_bits(self.quantity).hash(state);
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.quantity, self.price)
    }
}

/// Exact price used to key a book side.
///
/// Prices are compared bit for bit, with `-0.0` folded into `0.0`, and ordered with
/// `f64::total_cmp`, which gives the `Hash`, `Eq` and `Ord` a heap index needs.
#[derive(Debug, Clone, Copy)]
pub struct PriceKey(f64);

impl PriceKey {
    pub fn new(price: f64) -> Self {
        Self(price + 0.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for PriceKey {
    fn from(price: f64) -> Self {
        Self::new(price)
    }
}

impl PartialEq for PriceKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for PriceKey {}

impl Hash for PriceKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for PriceKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriceKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for PriceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exchange payloads carry numbers either as JSON strings or as JSON numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum WireNumber {
    Text(String),
    Number(f64),
}

impl WireNumber {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            WireNumber::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(&text), &"a decimal number")),
            WireNumber::Number(number) => Ok(number),
        }
    }
}

struct PriceLevelVisitor;

impl<'de> Visitor<'de> for PriceLevelVisitor {
    type Value = PriceLevel;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a [price, quantity] array")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let price = seq
            .next_element::<WireNumber>()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?
            .into_f64()?;
        let quantity = seq
            .next_element::<WireNumber>()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?
            .into_f64()?;

        // trailing entries are ignored
        while seq.next_element::<IgnoredAny>()?.is_some() {}

        PriceLevel::new(price, quantity).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for PriceLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(PriceLevelVisitor)
    }
}

impl Serialize for PriceLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.price.to_string(), self.quantity.to_string()).serialize(serializer)
    }
}
