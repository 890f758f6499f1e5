// demos/src/bin/depth_stream.rs
//
// Replays a REST snapshot followed by depth update events, the way a websocket consumer would
// after fetching the initial book.

use depthbook::{BookDiff, DepthUpdateEvent, OrderBook, OrderBookSnapshot};
use pricelevel::setup_logger;
use tracing::{error, info, warn};

const SNAPSHOT: &str = r#"{
    "lastUpdateId": 1027024,
    "bids": [["4.00000000", "431.00000000"], ["3.99000000", "12.00000000"]],
    "asks": [["4.00000200", "12.00000000"], ["4.01000000", "40.00000000"]]
}"#;

const EVENTS: [&str; 5] = [
    r#"{"e":"depthUpdate","E":123456789,"s":"BNBBTC","U":1027025,"u":1027026,"b":[["4.00000100","10.00000000"]],"a":[]}"#,
    r#"{"e":"depthUpdate","E":123456790,"s":"BNBBTC","U":1027027,"u":1027027,"b":[],"a":[["4.00000200","0.00000000"]]}"#,
    r#"{"e":"trade","E":123456791,"s":"BNBBTC","t":12345,"p":"0.001","q":"100","b":88,"a":50,"T":123456785,"m":true,"M":true}"#,
    r#"{"e":"depthUpdate","E":123456792,"s":"BNBBTC","U":1027028,"u":1027029,"b":[["4.00000100","0"],["3.98000000","7.5"]],"a":[["4.00500000","3"]]}"#,
    r#"{"e":"depthUpdate","E":123456793,"s":"BNBBTC","b":[["4.0","-1"]]}"#,
];

fn main() {
    setup_logger();
    info!("Depth Stream Replay");

    let snapshot = match OrderBookSnapshot::from_json(SNAPSHOT) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            error!("Failed to parse snapshot: {}", err);
            return;
        }
    };
    info!(
        "Snapshot {:?}: {} bids, {} asks",
        snapshot.last_update_id,
        snapshot.bids.len(),
        snapshot.asks.len()
    );

    let mut book = OrderBook::new(Some(&snapshot));
    log_top(&book);

    for payload in EVENTS {
        let event = match DepthUpdateEvent::from_json(payload) {
            Ok(event) => event,
            Err(err) => {
                warn!("Dropping malformed event: {}", err);
                continue;
            }
        };

        if !event.is_depth_update() {
            info!("Skipping non-depth event for {:?}", event.symbol);
            continue;
        }

        book.apply_event(&event);
        log_top(&book);
    }

    // top of book in the same wire shape the stream uses
    let top = BookDiff::new(
        book.best_bid().into_iter().collect(),
        book.best_ask().into_iter().collect(),
    );
    match serde_json::to_string(&top) {
        Ok(json) => info!("Final top of book: {}", json),
        Err(err) => error!("Failed to serialize top of book: {}", err),
    }
}

fn log_top(book: &OrderBook) {
    let bid = book
        .best_bid()
        .map(|level| level.to_string())
        .unwrap_or_else(|err| err.to_string());
    let ask = book
        .best_ask()
        .map(|level| level.to_string())
        .unwrap_or_else(|err| err.to_string());
    info!("best bid {} | best ask {}", bid, ask);
}
