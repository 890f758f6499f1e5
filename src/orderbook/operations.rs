//! Applying snapshots and depth diffs to the book

use super::book::OrderBook;
use super::event::{BookDiff, DepthUpdateEvent};
use super::level::PriceLevel;
use super::snapshot::OrderBookSnapshot;
use pricelevel::Side;
use tracing::{debug, trace};

impl OrderBook {
    /// Insert every snapshot level into the book.
    ///
    /// Existing levels are kept and a repeated price takes the last quantity listed.
    pub fn load_snapshot(&mut self, snapshot: &OrderBookSnapshot) {
        for level in &snapshot.bids {
            self.bids.update_or_insert(*level);
        }
        for level in &snapshot.asks {
            self.asks.update_or_insert(*level);
        }
        debug!(
            "Order book: loaded snapshot {:?} with {} bids and {} asks",
            snapshot.last_update_id,
            snapshot.bids.len(),
            snapshot.asks.len()
        );
    }

    /// Apply one authoritative level to `side`.
    ///
    /// A zero quantity deletes the price, silently doing nothing when it is not tracked;
    /// any other quantity inserts the price or replaces its quantity.
    pub fn apply_level(&mut self, side: Side, level: PriceLevel) {
        let book_side = self.side_mut(side);
        if level.is_deletion() {
            book_side.remove(&level);
        } else {
            book_side.update_or_insert(level);
        }
    }

    /// Apply a diff batch, bids first and then asks, each in the order given
    pub fn apply(&mut self, diff: &BookDiff) {
        trace!(
            "Order book: applying diff with {} bids and {} asks",
            diff.bids.len(),
            diff.asks.len()
        );
        self.apply_levels(&diff.bids, &diff.asks);
    }

    /// Apply the levels carried by a depth stream event
    pub fn apply_event(&mut self, event: &DepthUpdateEvent) {
        trace!(
            "Order book: applying {:?} event for {:?} with {} bids and {} asks",
            event.event,
            event.symbol,
            event.bids.len(),
            event.asks.len()
        );
        self.apply_levels(&event.bids, &event.asks);
    }

    fn apply_levels(&mut self, bids: &[PriceLevel], asks: &[PriceLevel]) {
        for level in bids {
            self.apply_level(Side::Buy, *level);
        }
        for level in asks {
            self.apply_level(Side::Sell, *level);
        }
    }
}
