//! Heap orientation and the comparator type queues are ordered by

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Total-order comparison function over queue elements.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Which end of the comparator's ordering sits at the root of the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapOrder {
    /// Greatest element first
    Max,
    /// Smallest element first
    Min,
}

impl HeapOrder {
    /// Returns `true` when `ordering` (the comparator's verdict of `a` against `b`)
    /// gives `a` strictly higher priority than `b`.
    #[inline]
    pub fn outranks(self, ordering: Ordering) -> bool {
        match self {
            HeapOrder::Max => ordering == Ordering::Greater,
            HeapOrder::Min => ordering == Ordering::Less,
        }
    }
}

impl fmt::Display for HeapOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapOrder::Max => write!(f, "MAX"),
            HeapOrder::Min => write!(f, "MIN"),
        }
    }
}
