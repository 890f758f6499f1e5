//! Two-sided book that applies depth diffs and keeps the best bid and ask current.

pub mod book;
mod error;
mod event;
mod level;
mod operations;
mod side;
mod snapshot;

pub use book::OrderBook;
pub use error::OrderBookError;
pub use event::{BookDiff, DepthUpdateEvent, EventKind};
pub use level::{PRECISION, PRECISION_DIGITS, PriceKey, PriceLevel};
pub use side::BookSide;
pub use snapshot::OrderBookSnapshot;
