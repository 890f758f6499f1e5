//! Order book error types

use pricelevel::Side;
use std::fmt;

/// Errors that can occur within the OrderBook
#[derive(Debug, Clone)]
pub enum OrderBookError {
    /// Negative, infinite or NaN price or quantity
    InvalidValue {
        /// Which component was rejected
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Best price requested from a side with no levels
    EmptyBook {
        /// The empty side
        side: Side,
    },

    /// Strict insert of a price the side already tracks
    DuplicateKey {
        /// Side holding the price
        side: Side,
        /// The duplicated price
        price: f64,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::InvalidValue { field, value } => {
                write!(f, "Invalid value for {}: {}", field, value)
            }
            OrderBookError::EmptyBook { side } => write!(f, "Empty book: no {} levels", side),
            OrderBookError::DuplicateKey { side, price } => {
                write!(f, "Duplicate key: {} level at {} already exists", side, price)
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
