//! One side of the book: the latest level at each price plus a heap over those prices

use super::error::OrderBookError;
use super::level::{PriceKey, PriceLevel};
use crate::queue::{HeapOrder, IndexedPriorityQueue};
use pricelevel::Side;
use std::collections::HashMap;
use tracing::{trace, warn};

/// Tracks every resting price on one side of the book and exposes the best one in O(1).
///
/// The `levels` map holds the latest quantity per price and the `best` queue orders the same
/// set of prices, highest first for bids (`Side::Buy`) and lowest first for asks (`Side::Sell`).
/// Quantity changes only touch the map, since the queue orders by price alone.
#[derive(Debug, Clone)]
pub struct BookSide {
    /// Which side of the book this is
    pub(super) side: Side,

    /// Price to the latest known level at that price
    pub(super) levels: HashMap<PriceKey, PriceLevel>,

    /// Prices ordered so the root is the best price for this side
    pub(super) best: IndexedPriorityQueue<PriceKey>,
}

impl BookSide {
    /// Create an empty side ordered for `side`
    pub fn new(side: Side) -> Self {
        Self::with_capacity(side, 0)
    }

    pub fn with_capacity(side: Side, capacity: usize) -> Self {
        let order = match side {
            Side::Buy => HeapOrder::Max,
            Side::Sell => HeapOrder::Min,
        };
        Self {
            side,
            levels: HashMap::with_capacity(capacity),
            best: IndexedPriorityQueue::with_capacity(order, capacity),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Insert a level at a price this side does not track yet
    pub fn add(&mut self, level: PriceLevel) -> Result<(), OrderBookError> {
        if self.levels.contains_key(&level.key()) {
            warn!(
                "Book side {}: rejected duplicate level at {}",
                self.side,
                level.price()
            );
            return Err(OrderBookError::DuplicateKey {
                side: self.side,
                price: level.price(),
            });
        }
        self.insert_new(level);
        Ok(())
    }

    /// Drop the level at `level`'s price; the quantity is ignored. No-op when absent.
    pub fn remove(&mut self, level: &PriceLevel) {
        self.remove_price(level.price());
    }

    /// Drop the level at `price`, returning it if it was present
    pub fn remove_price(&mut self, price: f64) -> Option<PriceLevel> {
        let key = PriceKey::new(price);
        let removed = self.levels.remove(&key)?;
        self.best.remove(&key);
        trace!("Book side {}: removed level at {}", self.side, price);
        Some(removed)
    }

    /// Replace the quantity at an existing price, or add the level if the price is new
    pub fn update_or_insert(&mut self, level: PriceLevel) {
        match self.levels.get_mut(&level.key()) {
            Some(existing) => {
                *existing = level;
                trace!("Book side {}: updated level {}", self.side, level);
            }
            None => self.insert_new(level),
        }
    }

    fn insert_new(&mut self, level: PriceLevel) {
        let key = level.key();
        self.levels.insert(key, level);
        self.best.enqueue(key);
        trace!("Book side {}: added level {}", self.side, level);
    }

    /// Get the best level: highest bid or lowest ask
    pub fn best_price(&self) -> Result<PriceLevel, OrderBookError> {
        let key = self
            .best
            .peek()
            .map_err(|_| OrderBookError::EmptyBook { side: self.side })?;
        self.levels
            .get(key)
            .copied()
            .ok_or(OrderBookError::EmptyBook { side: self.side })
    }

    /// Get the level currently stored at `price`
    pub fn get(&self, price: f64) -> Option<PriceLevel> {
        self.levels.get(&PriceKey::new(price)).copied()
    }

    pub fn contains(&self, price: f64) -> bool {
        self.levels.contains_key(&PriceKey::new(price))
    }

    /// Number of resting price levels
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn clear(&mut self) {
        self.levels.clear();
        self.best.clear();
        trace!("Book side {}: cleared", self.side);
    }
}
