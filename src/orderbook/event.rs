//! Incremental depth updates as delivered by the exchange and as applied to the book

use super::level::PriceLevel;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::trace;

/// Event discriminator carried in the `"e"` field of a depth stream payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Incremental depth diff
    #[serde(rename = "depthUpdate")]
    DepthUpdate,

    /// Any other event type on the stream
    #[serde(other)]
    Unknown,
}

/// A diff-depth event from the exchange stream.
///
/// Each level states the authoritative quantity now resting at its price; a zero quantity
/// means the price is gone. Missing `"b"`/`"a"` arrays are read as empty and fields the book
/// does not use (event time, update ids) are ignored. Other payloads on the same stream reuse
/// `"b"`/`"a"` for integer order ids (trades); those read as empty so the event still parses
/// as [`EventKind::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthUpdateEvent {
    /// Event type
    #[serde(rename = "e")]
    pub event: EventKind,

    /// Symbol the update belongs to
    #[serde(rename = "s", default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    /// Bid levels to apply
    #[serde(rename = "b", default, deserialize_with = "levels_or_id")]
    pub bids: Vec<PriceLevel>,

    /// Ask levels to apply
    #[serde(rename = "a", default, deserialize_with = "levels_or_id")]
    pub asks: Vec<PriceLevel>,
}

impl DepthUpdateEvent {
    /// Parse an event from its JSON payload
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let event: Self = serde_json::from_str(json)?;
        trace!(
            "Parsed {:?} event for {:?}: {} bids, {} asks",
            event.event,
            event.symbol,
            event.bids.len(),
            event.asks.len()
        );
        Ok(event)
    }

    pub fn is_depth_update(&self) -> bool {
        self.event == EventKind::DepthUpdate
    }
}

struct LevelsVisitor;

impl<'de> Visitor<'de> for LevelsVisitor {
    type Value = Vec<PriceLevel>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an array of [price, quantity] levels or an integer order id")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut levels = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(level) = seq.next_element::<PriceLevel>()? {
            levels.push(level);
        }
        Ok(levels)
    }

    fn visit_u64<E: de::Error>(self, _id: u64) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_i64<E: de::Error>(self, _id: i64) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }
}

fn levels_or_id<'de, D>(deserializer: D) -> Result<Vec<PriceLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LevelsVisitor)
}

/// One batch of level replacements for both sides of the book
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookDiff {
    /// Bid levels to apply
    #[serde(default)]
    pub bids: Vec<PriceLevel>,

    /// Ask levels to apply
    #[serde(default)]
    pub asks: Vec<PriceLevel>,
}

impl BookDiff {
    pub fn new(bids: Vec<PriceLevel>, asks: Vec<PriceLevel>) -> Self {
        Self { bids, asks }
    }

    /// Total number of levels across both sides
    pub fn len(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

impl From<DepthUpdateEvent> for BookDiff {
    fn from(event: DepthUpdateEvent) -> Self {
        Self {
            bids: event.bids,
            asks: event.asks,
        }
    }
}
