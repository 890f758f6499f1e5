//! Public API coverage for the indexed priority queue

use depthbook::{HeapOrder, IndexedPriorityQueue, QueueBuilder, QueueError};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Quote {
    venue: &'static str,
    ticks: u32,
}

fn by_ticks(a: &Quote, b: &Quote) -> Ordering {
    a.ticks.cmp(&b.ticks)
}

#[cfg(test)]
mod queue_coverage_tests {
    use super::*;

    #[test]
    fn test_remove_by_value_with_custom_comparator() {
        let mut queue = IndexedPriorityQueue::with_comparator(HeapOrder::Min, by_ticks);
        let quotes = [
            Quote { venue: "a", ticks: 50 },
            Quote { venue: "b", ticks: 30 },
            Quote { venue: "c", ticks: 60 },
            Quote { venue: "d", ticks: 20 },
            Quote { venue: "e", ticks: 10 },
        ];
        for quote in quotes.iter().cloned() {
            queue.enqueue(quote);
        }

        assert!(queue.remove(&quotes[1]));
        assert!(!queue.remove(&Quote { venue: "z", ticks: 30 }));
        assert_eq!(queue.count(), 4);

        let venues: Vec<&str> = queue.into_sorted_vec().iter().map(|q| q.venue).collect();
        assert_eq!(venues, vec!["e", "d", "a", "c"]);
    }

    #[test]
    fn test_remove_every_element_in_arbitrary_order() {
        for order in [HeapOrder::Max, HeapOrder::Min] {
            let mut queue = IndexedPriorityQueue::new(order);
            for value in 0..64u32 {
                queue.enqueue((value * 29) % 64);
            }

            for value in 0..64u32 {
                let target = (value * 13) % 64;
                assert!(queue.remove(&target));
                assert!(!queue.contains(&target));

                if let Ok(root) = queue.peek() {
                    let expected = match order {
                        HeapOrder::Max => queue.iter().max(),
                        HeapOrder::Min => queue.iter().min(),
                    };
                    assert_eq!(Some(root), expected);
                }
            }
            assert!(queue.is_empty());
            assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
        }
    }

    #[test]
    fn test_positions_match_storage_after_churn() {
        let mut queue = IndexedPriorityQueue::new(HeapOrder::Max);
        for value in 0..50i64 {
            queue.enqueue((value * 7) % 50);
        }
        for value in (0..50i64).step_by(4) {
            queue.remove(&value);
        }
        queue.dequeue().unwrap();
        queue.enqueue(1000);

        for (index, value) in queue.iter().enumerate() {
            assert_eq!(queue.position_of(value), Some(index));
        }
    }

    #[test]
    fn test_builder_errors() {
        let result = QueueBuilder::<Quote>::new(HeapOrder::Min).capacity(4).build();
        assert!(matches!(result, Err(QueueError::InvalidComparator)));

        let result = IndexedPriorityQueue::<Quote>::from_comparator(HeapOrder::Min, None);
        assert!(matches!(result, Err(QueueError::NullComparator)));
    }

    #[test]
    fn test_builder_comparator_queue() {
        let mut queue = QueueBuilder::new(HeapOrder::Max)
            .comparator(by_ticks)
            .build()
            .unwrap();
        queue.enqueue(Quote { venue: "x", ticks: 1 });
        queue.enqueue(Quote { venue: "y", ticks: 9 });

        assert_eq!(queue.peek().unwrap().venue, "y");
        assert_eq!(queue.order(), HeapOrder::Max);
    }
}
