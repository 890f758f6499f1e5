//! Binary heap with a reverse index for logarithmic removal of arbitrary elements.

mod builder;
mod error;
mod indexed;
mod order;

pub use builder::QueueBuilder;
pub use error::QueueError;
pub use indexed::IndexedPriorityQueue;
pub use order::{Comparator, HeapOrder};
