use super::error::QueueError;
use super::indexed::IndexedPriorityQueue;
use super::order::{Comparator, HeapOrder};
use std::cmp::Ordering;
use std::hash::Hash;
use std::sync::Arc;

/// Step-by-step configuration of an [`IndexedPriorityQueue`].
///
/// Building fails with [`QueueError::InvalidComparator`] unless either
/// [`natural_order`](Self::natural_order) or [`comparator`](Self::comparator) was called.
pub struct QueueBuilder<T> {
    order: HeapOrder,
    compare: Option<Comparator<T>>,
    capacity: usize,
}

impl<T> QueueBuilder<T> {
    pub fn new(order: HeapOrder) -> Self {
        Self {
            order,
            compare: None,
            capacity: 0,
        }
    }

    pub fn order(mut self, order: HeapOrder) -> Self {
        self.order = order;
        self
    }

    /// Order elements by their `Ord` implementation
    pub fn natural_order(mut self) -> Self
    where
        T: Ord + 'static,
    {
        self.compare = Some(Arc::new(|a: &T, b: &T| a.cmp(b)));
        self
    }

    /// Order elements with an explicit comparison function, replacing any previous choice
    pub fn comparator<F>(mut self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.compare = Some(Arc::new(compare));
        self
    }

    /// Pre-allocate room for `capacity` elements
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn build(self) -> Result<IndexedPriorityQueue<T>, QueueError>
    where
        T: Hash + Eq + Clone,
    {
        let compare = self.compare.ok_or(QueueError::InvalidComparator)?;
        Ok(IndexedPriorityQueue::from_parts(
            self.order,
            compare,
            self.capacity,
        ))
    }
}
