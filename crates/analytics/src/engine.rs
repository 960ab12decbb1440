use std::collections::{BTreeMap, BTreeSet};

use chrono::Datelike;
use core_types::EnrichedPosition;

use crate::error::AnalyticsError;
use crate::report::{
    AnalysisReport, GeneralSection, LosingTrades, SharpeSection, SymbolData, WinningTrades,
};

/// The output of the trade outcome classifier: both report categories.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeBreakdown {
    pub winning: WinningTrades,
    pub losing: LosingTrades,
}

/// A stateless calculator that turns the enriched position sequence into the
/// full `AnalysisReport`.
#[derive(Debug, Default)]
pub struct ReportEngine {}

impl ReportEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for assembling the report.
    ///
    /// # Arguments
    ///
    /// * `positions` - every enriched position of the run, sorted ascending
    ///   by open time.
    /// * `risk_free_monthly_rate` - the monthly reference yield used for the
    ///   Sharpe ratio.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `AnalysisReport` or an `AnalyticsError`.
    /// Any component failure aborts the whole report; a partial report is
    /// never produced.
    pub fn assemble(
        &self,
        positions: &[EnrichedPosition],
        risk_free_monthly_rate: f64,
    ) -> Result<AnalysisReport, AnalyticsError> {
        let first = positions.first().ok_or(AnalyticsError::EmptyInput)?;
        let last = positions.last().ok_or(AnalyticsError::EmptyInput)?;

        let days_n = positions
            .iter()
            .map(EnrichedPosition::open_day)
            .collect::<BTreeSet<_>>()
            .len();
        let symbols_n = positions
            .iter()
            .map(|p| p.symbol.as_str())
            .collect::<BTreeSet<_>>()
            .len();

        // Two executions per position here (open leg + close leg). The
        // per-symbol rollup counts one per position; the asymmetry is part
        // of the report contract.
        let exec_n = positions.len() * 2;
        let daily_exec_n = exec_n as f64 / days_n as f64;
        let daily_exec_symbol_n = symbols_n as f64 / daily_exec_n;

        let monthly_profits = self.monthly_profits(positions)?;
        let sharpe_ratio = self.sharpe(&monthly_profits, risk_free_monthly_rate)?;
        let breakdown = self.classify(positions)?;
        let symbol_data = self.symbol_rollup(positions);

        Ok(AnalysisReport {
            general: GeneralSection {
                start: first.open_time.date_naive().to_string(),
                // The close date of the last position in open-time order,
                // even when close times are not monotonic with open times.
                end: last.close_time.date_naive().to_string(),
                symbols_n,
                days_n,
                profit: monthly_profits.iter().sum(),
                exec_n,
                daily_exec_n,
                daily_exec_symbol_n,
            },
            winning_trades: breakdown.winning,
            losing_trades: breakdown.losing,
            sharpe_ratio,
            symbol_data,
        })
    }

    /// Sums profit over contiguous runs of same-open-month positions, in
    /// chronological order.
    ///
    /// The input must already be sorted ascending by open time. A new bucket
    /// starts exactly when the open month changes between adjacent
    /// positions, so a month revisited after an intervening month forms a
    /// fresh bucket rather than merging with the earlier one.
    pub fn monthly_profits(
        &self,
        positions: &[EnrichedPosition],
    ) -> Result<Vec<f64>, AnalyticsError> {
        let first = positions.first().ok_or(AnalyticsError::EmptyInput)?;

        let mut buckets = Vec::new();
        let mut bucket_month = first.open_time.month();
        let mut bucket_profit = 0.0;

        for position in positions {
            let month = position.open_time.month();
            if month != bucket_month {
                buckets.push(bucket_profit);
                bucket_month = month;
                bucket_profit = position.profit();
            } else {
                bucket_profit += position.profit();
            }
        }
        buckets.push(bucket_profit);

        Ok(buckets)
    }

    /// Derives the excess-return series over the monthly buckets, its mean
    /// and standard deviation, and the Sharpe ratio.
    ///
    /// A zero standard deviation (a single bucket, or all excess returns
    /// equal) makes the ratio undefined and is surfaced as
    /// `UndefinedRatio`, never as infinity or NaN.
    pub fn sharpe(
        &self,
        monthly_profits: &[f64],
        risk_free_monthly_rate: f64,
    ) -> Result<SharpeSection, AnalyticsError> {
        if monthly_profits.is_empty() {
            return Err(AnalyticsError::EmptyInput);
        }

        let excess: Vec<f64> = monthly_profits
            .iter()
            .map(|profit| profit - risk_free_monthly_rate)
            .collect();

        let n = excess.len() as f64;
        let excess_average = excess.iter().sum::<f64>() / n;
        // Population standard deviation: divide by N, not N - 1.
        let variance = excess
            .iter()
            .map(|e| (e - excess_average).powi(2))
            .sum::<f64>()
            / n;
        let excess_std_dev = variance.sqrt();

        if excess_std_dev == 0.0 {
            return Err(AnalyticsError::UndefinedRatio);
        }

        Ok(SharpeSection {
            us10y_monthly_yield: risk_free_monthly_rate,
            excess_average,
            excess_std_dev,
            sharpe_ratio: excess_average / excess_std_dev,
        })
    }

    /// Partitions positions into strictly-winning and strictly-losing sets
    /// and computes count, total and average for each.
    ///
    /// Positions with a profit of exactly zero belong to neither category.
    pub fn classify(
        &self,
        positions: &[EnrichedPosition],
    ) -> Result<TradeBreakdown, AnalyticsError> {
        let mut won_n = 0usize;
        let mut total_won = 0.0;
        let mut lost_n = 0usize;
        let mut total_lost = 0.0;

        for position in positions {
            let profit = position.profit();
            if profit > 0.0 {
                won_n += 1;
                total_won += profit;
            } else if profit < 0.0 {
                lost_n += 1;
                total_lost += profit;
            }
        }

        if won_n == 0 {
            return Err(AnalyticsError::NoTradesInCategory("winning"));
        }
        if lost_n == 0 {
            return Err(AnalyticsError::NoTradesInCategory("losing"));
        }

        Ok(TradeBreakdown {
            winning: WinningTrades {
                total_won,
                won_n,
                average_win: total_won / won_n as f64,
            },
            losing: LosingTrades {
                total_lost,
                lost_n,
                average_loss: total_lost / lost_n as f64,
            },
        })
    }

    /// Builds the per-symbol activity rollups.
    ///
    /// Every symbol's daily execution average divides by the distinct-day
    /// count of the whole run, not the symbol's own traded days.
    pub fn symbol_rollup(&self, positions: &[EnrichedPosition]) -> SymbolData {
        let mut traded_days = BTreeSet::new();
        let mut symbol_to_profit: BTreeMap<String, f64> = BTreeMap::new();
        let mut symbol_to_exec_n: BTreeMap<String, usize> = BTreeMap::new();

        for position in positions {
            traded_days.insert(position.open_day());
            *symbol_to_profit
                .entry(position.symbol.clone())
                .or_insert(0.0) += position.profit();
            *symbol_to_exec_n.entry(position.symbol.clone()).or_insert(0) += 1;
        }

        let traded_days_n = traded_days.len() as f64;
        let symbol_to_exec_avg_n = symbol_to_exec_n
            .iter()
            .map(|(symbol, exec_n)| (symbol.clone(), *exec_n as f64 / traded_days_n))
            .collect();

        SymbolData {
            symbol_to_profit,
            symbol_to_exec_n,
            symbol_to_exec_avg_n,
        }
    }
}
