//! # Depth Stream Best-Price Tracker
//!
//! Maintains the top of a limit order book from a continuous stream of incremental depth
//! updates. Each update states the authoritative quantity resting at a price on one side of the
//! book; the crate keeps every resting price per side and answers "what is the best bid / best
//! ask right now" in constant time, with logarithmic cost per update.
//!
//! ## Key Features
//!
//! - **Indexed Priority Queue**: `IndexedPriorityQueue` is a binary heap paired with a
//!   value-to-slot index, so any stored value can be removed in O(log n) instead of only the root.
//!   Ordering is chosen once at construction with `HeapOrder::Max` or `HeapOrder::Min`, using
//!   either the element's `Ord` implementation or an explicit comparator.
//!
//! - **Book Sides**: `BookSide` maps each price to its latest `PriceLevel` and drives one queue
//!   over the same prices. Bids rank the highest price first, asks the lowest.
//!
//! - **Diff Application**: `OrderBook` seeds both sides from an optional snapshot and applies
//!   depth diffs level by level. A zero quantity removes the price (silently, when it is not
//!   tracked); anything else inserts the price or replaces its quantity.
//!
//! - **Exchange Payloads**: `DepthUpdateEvent` and `OrderBookSnapshot` deserialize directly
//!   from depth stream and REST snapshot JSON, where prices and quantities arrive as strings.
//!
//! ## Design Goals
//!
//! 1. **Correctness**: The heap and its index stay in lockstep on every swap, and removal
//!    repairs the heap in whichever direction the moved element needs.
//! 2. **Performance**: O(log n) per update, O(1) best price reads.
//! 3. **Simplicity**: Single-threaded and synchronous. One ingestion path owns one book.
//!
//! ## Example
//!
//! ```
//! use depthbook::{BookDiff, OrderBook, OrderBookSnapshot, PriceLevel};
//!
//! let snapshot = OrderBookSnapshot::new(
//!     vec![PriceLevel::new(99.0, 1.0).unwrap()],
//!     vec![PriceLevel::new(101.0, 2.0).unwrap()],
//! );
//! let mut book = OrderBook::new(Some(&snapshot));
//!
//! book.apply(&BookDiff::new(
//!     vec![PriceLevel::new(100.0, 3.0).unwrap()],
//!     vec![PriceLevel::new(101.0, 0.0).unwrap()],
//! ));
//!
//! assert_eq!(book.best_bid().unwrap().price(), 100.0);
//! assert!(book.best_ask().is_err());
//! ```
//!
//! ## Status
//! The crate covers the in-memory core only. Transport, reconnection, sequence-gap handling
//! and persistence belong to the consuming application.

pub mod orderbook;
pub mod queue;

pub use orderbook::{
    BookDiff, BookSide, DepthUpdateEvent, EventKind, OrderBook, OrderBookError,
    OrderBookSnapshot, PRECISION, PRECISION_DIGITS, PriceKey, PriceLevel,
};
pub use pricelevel::Side;
pub use queue::{Comparator, HeapOrder, IndexedPriorityQueue, QueueBuilder, QueueError};
