//! Full point-in-time listing of resting levels used to seed a book

use super::level::PriceLevel;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Absolute price levels for both sides, in no particular order.
///
/// Deserializes from the exchange's REST depth payload; `lastUpdateId` is kept when present so
/// the ingestion layer can line the snapshot up with the diff stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// Sequence number of the last update folded into this snapshot
    #[serde(
        rename = "lastUpdateId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_update_id: Option<u64>,

    /// Bid price levels
    #[serde(default)]
    pub bids: Vec<PriceLevel>,

    /// Ask price levels
    #[serde(default)]
    pub asks: Vec<PriceLevel>,
}

impl OrderBookSnapshot {
    pub fn new(bids: Vec<PriceLevel>, asks: Vec<PriceLevel>) -> Self {
        Self {
            last_update_id: None,
            bids,
            asks,
        }
    }

    /// Parse a snapshot from its JSON payload
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Get the highest bid level
    pub fn best_bid(&self) -> Option<PriceLevel> {
        let bid = self
            .bids
            .iter()
            .copied()
            .max_by(|a, b| a.price().total_cmp(&b.price()));
        trace!("best_bid: {:?}", bid);
        bid
    }

    /// Get the lowest ask level
    pub fn best_ask(&self) -> Option<PriceLevel> {
        let ask = self
            .asks
            .iter()
            .copied()
            .min_by(|a, b| a.price().total_cmp(&b.price()));
        trace!("best_ask: {:?}", ask);
        ask
    }

    /// Calculate the total quantity on the bid side
    pub fn total_bid_quantity(&self) -> f64 {
        let quantity: f64 = self.bids.iter().map(PriceLevel::quantity).sum();
        trace!("total_bid_quantity: {:?}", quantity);
        quantity
    }

    /// Calculate the total quantity on the ask side
    pub fn total_ask_quantity(&self) -> f64 {
        let quantity: f64 = self.asks.iter().map(PriceLevel::quantity).sum();
        trace!("total_ask_quantity: {:?}", quantity);
        quantity
    }
}
