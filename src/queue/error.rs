//! Priority queue error types

use std::fmt;

/// Errors that can occur within an [`IndexedPriorityQueue`](super::IndexedPriorityQueue)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// Read or removal of the root on a queue with no elements
    EmptyQueue,

    /// Queue built with neither an explicit comparator nor the element's natural ordering
    InvalidComparator,

    /// Explicit comparator argument was absent
    NullComparator,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::EmptyQueue => write!(f, "Queue is empty"),
            QueueError::InvalidComparator => {
                write!(f, "Invalid comparator: no comparator or natural ordering configured")
            }
            QueueError::NullComparator => write!(f, "Null comparator: a comparator is required"),
        }
    }
}

impl std::error::Error for QueueError {}
