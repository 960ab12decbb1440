use core_types::{EnrichedPosition, PositionBatch};

use crate::error::AnalyticsError;
use crate::time::to_eastern;

/// Expands one results-log batch into enriched positions, in input order.
///
/// Each position picks up the batch's symbol and volatility figure and has
/// its open/close instants rendered in the report time zone. Malformed
/// timestamps are the only failure and are propagated from the normalizer.
pub fn enrich_batch(batch: &PositionBatch) -> Result<Vec<EnrichedPosition>, AnalyticsError> {
    batch
        .positions
        .iter()
        .map(|&position| {
            Ok(EnrichedPosition {
                position,
                symbol: batch.symbol.clone(),
                std_dev: batch.std_dev,
                open_time: to_eastern(position.open_timestamp)?,
                close_time: to_eastern(position.close_timestamp)?,
            })
        })
        .collect()
}

/// Enriches every batch and merges the results into the single
/// open-time-ascending sequence the report pipeline consumes.
pub fn enrich_and_sort(
    batches: &[PositionBatch],
) -> Result<Vec<EnrichedPosition>, AnalyticsError> {
    let mut positions = Vec::new();
    for batch in batches {
        positions.extend(enrich_batch(batch)?);
    }
    positions.sort_by(|a, b| a.open_time.cmp(&b.open_time));
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::RawPosition;

    fn raw(open_timestamp: i64, profit: f64) -> RawPosition {
        RawPosition {
            open_price: 100.0,
            open_timestamp,
            close_price: 101.0,
            close_timestamp: open_timestamp + 3_600,
            profit,
        }
    }

    #[test]
    fn batch_metadata_is_applied_to_every_position() {
        let batch = PositionBatch {
            symbol: "AAPL".to_string(),
            std_dev: 0.05,
            positions: vec![raw(1_610_712_000, 10.0), raw(1_610_715_600, -4.0)],
        };

        let enriched = enrich_batch(&batch).unwrap();

        assert_eq!(enriched.len(), 2);
        for position in &enriched {
            assert_eq!(position.symbol, "AAPL");
            assert_eq!(position.std_dev, 0.05);
        }
        // Input order is preserved.
        assert_eq!(enriched[0].profit(), 10.0);
        assert_eq!(enriched[1].profit(), -4.0);
    }

    #[test]
    fn zoned_times_are_derived_from_the_epoch_fields() {
        let batch = PositionBatch {
            symbol: "AAPL".to_string(),
            std_dev: 0.05,
            positions: vec![raw(1_610_712_000, 10.0)],
        };

        let enriched = enrich_batch(&batch).unwrap();

        assert_eq!(enriched[0].open_time, to_eastern(1_610_712_000).unwrap());
        assert_eq!(enriched[0].close_time, to_eastern(1_610_715_600).unwrap());
        assert!(enriched[0].open_time <= enriched[0].close_time);
    }

    #[test]
    fn merged_sequence_is_sorted_across_batches() {
        let early = 1_610_712_000;
        let late = early + 86_400;
        let batches = vec![
            PositionBatch {
                symbol: "MSFT".to_string(),
                std_dev: 0.02,
                positions: vec![raw(late, 1.0)],
            },
            PositionBatch {
                symbol: "AAPL".to_string(),
                std_dev: 0.05,
                positions: vec![raw(early, 2.0)],
            },
        ];

        let positions = enrich_and_sort(&batches).unwrap();

        assert_eq!(positions[0].symbol, "AAPL");
        assert_eq!(positions[1].symbol, "MSFT");
        assert!(positions[0].open_time <= positions[1].open_time);
    }

    #[test]
    fn malformed_timestamp_aborts_enrichment() {
        let batch = PositionBatch {
            symbol: "AAPL".to_string(),
            std_dev: 0.05,
            positions: vec![RawPosition {
                open_price: 100.0,
                open_timestamp: i64::MIN,
                close_price: 101.0,
                close_timestamp: 1_610_715_600,
                profit: 1.0,
            }],
        };

        assert_eq!(
            enrich_batch(&batch),
            Err(AnalyticsError::InvalidTimestamp(i64::MIN))
        );
    }
}
