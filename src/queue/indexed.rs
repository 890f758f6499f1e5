//! Array-backed binary heap that tracks the position of every stored element

use super::error::QueueError;
use super::order::{Comparator, HeapOrder};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use tracing::trace;

/// A priority queue supporting O(log n) enqueue, dequeue and removal of any stored value.
///
/// Elements live in a heap-ordered `Vec`, and a `HashMap` maps each value to the slot that
/// currently holds it. Every swap performed by the heap repairs both entries together, so
/// `remove` finds its target with a single map lookup instead of a scan.
///
/// Equal values may be enqueued more than once, but the index keeps a single position per
/// value: only the copy that was moved most recently is addressable through `remove`.
pub struct IndexedPriorityQueue<T> {
    /// Heap storage; the root (slot 0) always holds the highest-priority element
    pub(super) items: Vec<T>,

    /// Value to current slot in `items`
    pub(super) positions: HashMap<T, usize>,

    /// Which end of the comparator's ordering has priority
    order: HeapOrder,

    /// Total order over the elements
    compare: Comparator<T>,
}

impl<T> IndexedPriorityQueue<T>
where
    T: Hash + Eq + Clone,
{
    /// Create a queue ordered by the element type's natural ordering
    pub fn new(order: HeapOrder) -> Self
    where
        T: Ord + 'static,
    {
        Self::with_capacity(order, 0)
    }

    /// Create a naturally ordered queue with room for `capacity` elements
    pub fn with_capacity(order: HeapOrder, capacity: usize) -> Self
    where
        T: Ord + 'static,
    {
        Self::from_parts(order, Arc::new(|a: &T, b: &T| a.cmp(b)), capacity)
    }

    /// Create a queue ordered by an explicit comparison function
    pub fn with_comparator<F>(order: HeapOrder, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::from_parts(order, Arc::new(compare), 0)
    }

    /// Create a queue from an optional comparator, failing when none is supplied
    pub fn from_comparator(
        order: HeapOrder,
        compare: Option<Comparator<T>>,
    ) -> Result<Self, QueueError> {
        let compare = compare.ok_or(QueueError::NullComparator)?;
        Ok(Self::from_parts(order, compare, 0))
    }

    pub(super) fn from_parts(order: HeapOrder, compare: Comparator<T>, capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            order,
            compare,
        }
    }

    /// Get the ordering this queue was built with
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Add an element and restore heap order from the new last slot
    pub fn enqueue(&mut self, item: T) {
        let index = self.items.len();
        self.positions.insert(item.clone(), index);
        self.items.push(item);
        self.sift_up(index);
        trace!("Queue {}: enqueued element, {} stored", self.order, self.items.len());
    }

    /// Remove and return the highest-priority element
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.items.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        self.remove_at(0).ok_or(QueueError::EmptyQueue)
    }

    /// Remove a stored value. Returns `false`, leaving the queue untouched, when the value is absent.
    pub fn remove(&mut self, item: &T) -> bool {
        let Some(&index) = self.positions.get(item) else {
            return false;
        };
        debug_assert!(self.items[index] == *item);
        self.remove_at(index).is_some()
    }

    /// Get the highest-priority element without removing it
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.items.first().ok_or(QueueError::EmptyQueue)
    }

    /// Number of stored elements
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Alias of [`count`](Self::count)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check whether a value is addressable in the queue
    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Get the slot currently holding `item`
    pub fn position_of(&self, item: &T) -> Option<usize> {
        self.positions.get(item).copied()
    }

    /// Iterate over the elements in storage order, which is not priority order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.positions.clear();
    }

    /// Drain the queue into a vector sorted from highest to lowest priority
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Ok(item) = self.dequeue() {
            sorted.push(item);
        }
        sorted
    }

    /// Swap `index` with the last slot, drop it, then repair the heap around `index`.
    ///
    /// The element moved into `index` can belong either above or below it, so an upward
    /// pass is attempted first and a downward pass only runs if nothing moved up.
    fn remove_at(&mut self, index: usize) -> Option<T> {
        let last = self.items.len().checked_sub(1)?;
        self.swap(index, last);
        let removed = self.items.pop()?;

        if self.positions.get(&removed) == Some(&last) {
            self.positions.remove(&removed);
        }

        if index < self.items.len() && !self.sift_up(index) {
            self.sift_down(index);
        }
        Some(removed)
    }

    /// Move the element at `index` towards the root while it outranks its parent.
    /// Returns whether it moved.
    fn sift_up(&mut self, mut index: usize) -> bool {
        let start = index;
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.outranks(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
        index != start
    }

    /// Move the element at `index` towards the leaves while a child outranks it.
    /// On ties the element stays where it is.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut top = index;

            if left < len && self.outranks(left, top) {
                top = left;
            }
            if right < len && self.outranks(right, top) {
                top = right;
            }
            if top == index {
                break;
            }

            self.swap(index, top);
            index = top;
        }
    }

    #[inline]
    fn outranks(&self, a: usize, b: usize) -> bool {
        self.order.outranks((self.compare)(&self.items[a], &self.items[b]))
    }

    /// Swap two slots and re-point both index entries.
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.items.swap(a, b);
        // `b` before `a`: when both slots hold equal values the entry ends on `a`
        if let Some(position) = self.positions.get_mut(&self.items[b]) {
            *position = b;
        }
        if let Some(position) = self.positions.get_mut(&self.items[a]) {
            *position = a;
        }
    }
}

impl<T: Clone> Clone for IndexedPriorityQueue<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            positions: self.positions.clone(),
            order: self.order,
            compare: Arc::clone(&self.compare),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexedPriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedPriorityQueue")
            .field("order", &self.order)
            .field("items", &self.items)
            .finish()
    }
}
