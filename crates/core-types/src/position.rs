use chrono::{DateTime, Datelike};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// One closed round-trip trade as decoded from the results log.
///
/// Timestamps are UTC epoch seconds and remain the source of truth for all
/// derived calendar values. `profit` is in currency units, not a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    pub open_price: f64,
    pub open_timestamp: i64,
    pub close_price: f64,
    pub close_timestamp: i64,
    pub profit: f64,
}

/// One record of the results log: the positions closed for a single symbol,
/// in the order the trading run produced them, together with the batch-level
/// metadata that applies to every one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionBatch {
    pub symbol: String,
    /// Historical volatility of the symbol over the traded period, supplied
    /// by the upstream producer. Constant across the batch.
    pub std_dev: f64,
    pub positions: Vec<RawPosition>,
}

/// A raw position augmented with its batch metadata and with open/close
/// instants rendered in the report time zone.
///
/// Constructed once during enrichment and never mutated afterwards. The
/// zoned times are a derived view of the epoch fields on the inner
/// `RawPosition`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedPosition {
    pub position: RawPosition,
    pub symbol: String,
    pub std_dev: f64,
    pub open_time: DateTime<Tz>,
    pub close_time: DateTime<Tz>,
}

impl EnrichedPosition {
    pub fn profit(&self) -> f64 {
        self.position.profit
    }

    /// Calendar day of the open in the report time zone, as a
    /// `(day, month, year)` key for distinct-day counting.
    pub fn open_day(&self) -> (u32, u32, i32) {
        (
            self.open_time.day(),
            self.open_time.month(),
            self.open_time.year(),
        )
    }
}
