use std::fs;
use std::path::PathBuf;

use core_types::{PositionBatch, RawPosition};
use serde::Deserialize;
use tracing::debug;

use crate::error::StorageError;

/// Wire shape of one position: the producer's 7-tuple
/// `[open_bsi, open_price, open_timestamp, close_bsi, close_price,
/// close_timestamp, profit]`. Arity and field types are enforced by the
/// decode; the two broker leg identifiers are validated but not carried
/// forward, since the symbol is batch-level metadata.
#[derive(Debug, Deserialize)]
struct PositionRecord(f64, f64, i64, f64, f64, i64, f64);

/// Wire shape of one results-log line.
#[derive(Debug, Deserialize)]
struct BatchRecord {
    symbol: String,
    std_dev: f64,
    positions: Vec<PositionRecord>,
}

impl From<PositionRecord> for RawPosition {
    fn from(record: PositionRecord) -> Self {
        let PositionRecord(
            _open_bsi,
            open_price,
            open_timestamp,
            _close_bsi,
            close_price,
            close_timestamp,
            profit,
        ) = record;
        RawPosition {
            open_price,
            open_timestamp,
            close_price,
            close_timestamp,
            profit,
        }
    }
}

impl From<BatchRecord> for PositionBatch {
    fn from(record: BatchRecord) -> Self {
        PositionBatch {
            symbol: record.symbol,
            std_dev: record.std_dev,
            positions: record.positions.into_iter().map(RawPosition::from).collect(),
        }
    }
}

/// Read-side adapter over the results log left behind by a trading run.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Decodes the whole log into typed batches.
    ///
    /// One JSON record per line; blank lines are skipped. Any malformed
    /// line aborts the load with its line number.
    pub fn load_batches(&self) -> Result<Vec<PositionBatch>, StorageError> {
        let raw = fs::read_to_string(&self.path)?;

        let mut batches = Vec::new();
        for (index, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            batches.push(decode_line(line, index + 1)?);
        }

        debug!(
            batches = batches.len(),
            path = %self.path.display(),
            "decoded results log"
        );
        Ok(batches)
    }
}

fn decode_line(line: &str, line_no: usize) -> Result<PositionBatch, StorageError> {
    let record: BatchRecord = serde_json::from_str(line).map_err(|source| {
        StorageError::Decode {
            line: line_no,
            source,
        }
    })?;
    Ok(record.into())
}
