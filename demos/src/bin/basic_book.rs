// demos/src/bin/basic_book.rs

use depthbook::{
    BookDiff, BookSide, HeapOrder, IndexedPriorityQueue, OrderBook, OrderBookSnapshot, PriceLevel,
};
use pricelevel::{Side, setup_logger};
use tracing::{info, warn};

fn main() {
    setup_logger();
    info!("Basic Depth Book Example");

    demo_queue();

    let mut book = create_book();
    display_book_state(&book);

    demo_diffs(&mut book);
    display_book_state(&book);

    demo_strict_side();
}

fn level(price: f64, quantity: f64) -> PriceLevel {
    PriceLevel::new(price, quantity).unwrap()
}

fn demo_queue() {
    info!("\nIndexed priority queue:");
    let mut queue = IndexedPriorityQueue::new(HeapOrder::Min);
    for value in [5, 3, 6, 2, 1] {
        queue.enqueue(value);
    }

    queue.remove(&3);
    info!("After removing 3, root is {:?}", queue.peek());

    let drained = queue.into_sorted_vec();
    info!("Drained in priority order: {:?}", drained);
}

fn create_book() -> OrderBook {
    info!("\nSeeding book from a snapshot...");
    let bids = (0..5)
        .map(|i| level(9_900.0 + (i * 20) as f64, 10.0 + (i * 5) as f64))
        .collect();
    let asks = (0..5)
        .map(|i| level(10_000.0 + (i * 20) as f64, 5.0 + (i * 3) as f64))
        .collect();

    OrderBook::new(Some(&OrderBookSnapshot::new(bids, asks)))
}

fn demo_diffs(book: &mut OrderBook) {
    info!("\nApplying diffs...");

    // improve the bid, change the best ask's quantity
    book.apply(&BookDiff::new(
        vec![level(9_990.0, 4.0)],
        vec![level(10_000.0, 1.5)],
    ));
    info!("Best bid after improving: {:?}", book.best_bid());

    // delete the best ask and an unknown price
    book.apply(&BookDiff::new(
        vec![level(1.0, 0.0)],
        vec![level(10_000.0, 0.0)],
    ));
    info!("Best ask after deleting 10000: {:?}", book.best_ask());
}

fn display_book_state(book: &OrderBook) {
    info!(
        "Book: {} bid levels, {} ask levels",
        book.bid_levels(),
        book.ask_levels()
    );
    match (book.best_bid(), book.best_ask()) {
        (Ok(bid), Ok(ask)) => info!("Best bid {} | best ask {}", bid, ask),
        (bid, ask) => warn!("Incomplete book: bid {:?}, ask {:?}", bid, ask),
    }
    if let (Some(mid), Some(spread)) = (book.mid_price(), book.spread()) {
        info!("Mid price {:.2}, spread {:.2}", mid, spread);
    }
}

fn demo_strict_side() {
    info!("\nStrict inserts on a standalone side:");
    let mut side = BookSide::new(Side::Sell);
    side.add(level(101.0, 1.0)).unwrap();

    if let Err(err) = side.add(level(101.0, 2.0)) {
        info!("Second add rejected: {}", err);
    }
}
