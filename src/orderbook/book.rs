//! Core OrderBook implementation tracking the best price on each side

use super::error::OrderBookError;
use super::level::PriceLevel;
use super::side::BookSide;
use super::snapshot::OrderBookSnapshot;
use pricelevel::Side;
use tracing::trace;

/// The OrderBook keeps the bid and ask sides of one instrument up to date from a depth stream.
///
/// The two sides are independent: bids rank higher prices first, asks rank lower prices
/// first. Reads of the best bid or ask are a heap peek plus one map lookup.
///
/// Not synchronized: a single ingestion path owns the book. Callers that need concurrent
/// readers must add their own coordination, for instance by publishing clones.
#[derive(Debug, Clone)]
pub struct OrderBook {
    /// Bid side (buy interest), best = highest price
    pub(super) bids: BookSide,

    /// Ask side (sell interest), best = lowest price
    pub(super) asks: BookSide,
}

impl OrderBook {
    /// Create a book, seeding it from `snapshot` when one is given
    pub fn new(snapshot: Option<&OrderBookSnapshot>) -> Self {
        let mut book = Self::with_capacity(0);
        if let Some(snapshot) = snapshot {
            book.load_snapshot(snapshot);
        }
        book
    }

    /// Create an empty book with room for `levels` prices per side
    pub fn with_capacity(levels: usize) -> Self {
        Self {
            bids: BookSide::with_capacity(Side::Buy, levels),
            asks: BookSide::with_capacity(Side::Sell, levels),
        }
    }

    /// Get the best (highest) bid level
    pub fn best_bid(&self) -> Result<PriceLevel, OrderBookError> {
        self.bids.best_price()
    }

    /// Get the best (lowest) ask level
    pub fn best_ask(&self) -> Result<PriceLevel, OrderBookError> {
        self.asks.best_price()
    }

    /// Get the best level on `side`
    pub fn best(&self, side: Side) -> Result<PriceLevel, OrderBookError> {
        self.side(side).best_price()
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Ok(bid), Ok(ask)) => Some((bid.price() + ask.price()) / 2.0),
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Ok(bid), Ok(ask)) => Some(ask.price() - bid.price()),
            _ => None,
        }
    }

    pub fn bids(&self) -> &BookSide {
        &self.bids
    }

    pub fn asks(&self) -> &BookSide {
        &self.asks
    }

    /// Get the side tracking `side` (`Buy` = bids, `Sell` = asks)
    pub fn side(&self, side: Side) -> &BookSide {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    pub(super) fn side_mut(&mut self, side: Side) -> &mut BookSide {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Number of resting bid prices
    pub fn bid_levels(&self) -> usize {
        self.bids.len()
    }

    /// Number of resting ask prices
    pub fn ask_levels(&self) -> usize {
        self.asks.len()
    }

    /// Drop every level on both sides
    pub fn clear(&mut self) {
        self.bids.clear();
        self.asks.clear();
        trace!("Order book: cleared");
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new(None)
    }
}
