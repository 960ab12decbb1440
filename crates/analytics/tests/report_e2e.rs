//! End-to-end behavior of the report pipeline over decoded batches:
//! enrichment, ordering, every aggregation, and the batch failure semantics.

use analytics::enrich::enrich_and_sort;
use analytics::{AnalyticsError, ReportEngine};
use core_types::{PositionBatch, RawPosition};

// 12:00 UTC on the named day, which is the same calendar day in New York.
const JAN_15: i64 = 1_610_712_000;
const JAN_16: i64 = JAN_15 + 86_400;
const FEB_10: i64 = 1_612_958_400;
const FEB_11: i64 = FEB_10 + 86_400;

fn raw(open_timestamp: i64, close_timestamp: i64, profit: f64) -> RawPosition {
    RawPosition {
        open_price: 100.0,
        open_timestamp,
        close_price: 101.0,
        close_timestamp,
        profit,
    }
}

fn batch(symbol: &str, std_dev: f64, positions: Vec<RawPosition>) -> PositionBatch {
    PositionBatch {
        symbol: symbol.to_string(),
        std_dev,
        positions,
    }
}

/// Two same-day AAPL positions: every component yields its documented value
/// and the full report fails on the undefined single-month Sharpe ratio
/// rather than emitting a partial result.
#[test]
fn single_day_run_fails_only_on_the_sharpe_ratio() {
    let batches = vec![batch(
        "AAPL",
        0.05,
        vec![raw(JAN_15, JAN_15 + 3_600, 10.0), raw(JAN_15 + 7_200, JAN_15 + 10_800, -4.0)],
    )];
    let positions = enrich_and_sort(&batches).unwrap();
    let engine = ReportEngine::new();

    let monthly = engine.monthly_profits(&positions).unwrap();
    assert_eq!(monthly, vec![6.0]);
    assert_eq!(positions.len() * 2, 4);

    let breakdown = engine.classify(&positions).unwrap();
    assert_eq!(breakdown.winning.won_n, 1);
    assert_eq!(breakdown.winning.total_won, 10.0);
    assert_eq!(breakdown.winning.average_win, 10.0);
    assert_eq!(breakdown.losing.lost_n, 1);
    assert_eq!(breakdown.losing.total_lost, -4.0);
    assert_eq!(breakdown.losing.average_loss, -4.0);

    let symbol_data = engine.symbol_rollup(&positions);
    assert_eq!(symbol_data.symbol_to_profit["AAPL"], 6.0);
    assert_eq!(symbol_data.symbol_to_exec_n["AAPL"], 2);

    // One monthly bucket, zero standard deviation: the whole report aborts.
    assert_eq!(
        engine.sharpe(&monthly, 0.12).unwrap_err(),
        AnalyticsError::UndefinedRatio
    );
    assert_eq!(
        engine.assemble(&positions, 0.12).unwrap_err(),
        AnalyticsError::UndefinedRatio
    );
}

/// A two-month, two-symbol run exercises the full assembler.
#[test]
fn two_month_run_produces_the_complete_report() {
    let batches = vec![
        batch("MSFT", 0.02, vec![raw(FEB_10, FEB_11, 8.0)]),
        batch(
            "AAPL",
            0.05,
            vec![raw(JAN_15, JAN_15 + 3_600, 10.0), raw(JAN_16, JAN_16 + 3_600, -4.0)],
        ),
    ];
    let positions = enrich_and_sort(&batches).unwrap();
    let engine = ReportEngine::new();

    let report = engine.assemble(&positions, 0.12).unwrap();

    assert_eq!(report.general.start, "2021-01-15");
    assert_eq!(report.general.end, "2021-02-11");
    assert_eq!(report.general.symbols_n, 2);
    assert_eq!(report.general.days_n, 3);
    assert_eq!(report.general.profit, 14.0);
    assert_eq!(report.general.exec_n, 6);
    assert_eq!(report.general.daily_exec_n, 2.0);
    assert_eq!(report.general.daily_exec_symbol_n, 1.0);

    assert_eq!(report.winning_trades.won_n, 2);
    assert_eq!(report.winning_trades.total_won, 18.0);
    assert_eq!(report.winning_trades.average_win, 9.0);
    assert_eq!(report.losing_trades.lost_n, 1);
    assert_eq!(report.losing_trades.total_lost, -4.0);
    assert_eq!(report.losing_trades.average_loss, -4.0);

    // Monthly buckets [6.0, 8.0], excess [5.88, 7.88]: mean 6.88, population
    // std dev 1.0.
    assert_eq!(report.sharpe_ratio.us10y_monthly_yield, 0.12);
    assert!((report.sharpe_ratio.excess_average - 6.88).abs() < 1e-9);
    assert!((report.sharpe_ratio.excess_std_dev - 1.0).abs() < 1e-9);
    assert!((report.sharpe_ratio.sharpe_ratio - 6.88).abs() < 1e-9);

    assert_eq!(report.symbol_data.symbol_to_profit["AAPL"], 6.0);
    assert_eq!(report.symbol_data.symbol_to_profit["MSFT"], 8.0);
    assert_eq!(report.symbol_data.symbol_to_exec_n["AAPL"], 2);
    assert_eq!(report.symbol_data.symbol_to_exec_n["MSFT"], 1);
    assert_eq!(report.symbol_data.symbol_to_exec_avg_n["AAPL"], 2.0 / 3.0);
    assert_eq!(report.symbol_data.symbol_to_exec_avg_n["MSFT"], 1.0 / 3.0);

    // Bucket sum equals the straight per-position sum.
    let direct: f64 = positions.iter().map(|p| p.profit()).sum();
    assert_eq!(report.general.profit, direct);

    // Re-running the pipeline on the same input reproduces the report
    // exactly.
    let again = engine.assemble(&positions, 0.12).unwrap();
    assert_eq!(report, again);
}
