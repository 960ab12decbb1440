use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The complete analysis of one trading run.
///
/// This struct is the final output of the `ReportEngine` and the single
/// artifact the system persists and prints. Section and field names are the
/// structured-output contract; display rounding is the sink's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub general: GeneralSection,
    pub winning_trades: WinningTrades,
    pub losing_trades: LosingTrades,
    pub sharpe_ratio: SharpeSection,
    pub symbol_data: SymbolData,
}

/// Date range, symbol/day counts, total profit and execution activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSection {
    /// Calendar date (report time zone) of the first position's open.
    pub start: String,
    /// Calendar date of the close of the last position in open-time order.
    pub end: String,
    pub symbols_n: usize,
    /// Count of distinct calendar days with at least one open.
    pub days_n: usize,
    /// Sum of the monthly profit buckets.
    pub profit: f64,
    /// Two executions per position: one open leg, one close leg.
    pub exec_n: usize,
    pub daily_exec_n: f64,
    pub daily_exec_symbol_n: f64,
}

/// Count, total and average over positions with strictly positive profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinningTrades {
    pub total_won: f64,
    pub won_n: usize,
    pub average_win: f64,
}

/// Count, total and average over positions with strictly negative profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LosingTrades {
    pub total_lost: f64,
    pub lost_n: usize,
    pub average_loss: f64,
}

/// Risk-adjusted return over the monthly profit buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharpeSection {
    /// The risk-free monthly rate the excess returns were computed against.
    pub us10y_monthly_yield: f64,
    pub excess_average: f64,
    /// Population standard deviation of the excess returns.
    pub excess_std_dev: f64,
    pub sharpe_ratio: f64,
}

/// Per-symbol activity rollups, keyed by symbol.
///
/// `symbol_to_exec_n` counts one execution per position (the open leg only),
/// unlike the doubled count in the general section. `symbol_to_exec_avg_n`
/// divides by the distinct-day count across all symbols, not the symbol's
/// own days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolData {
    pub symbol_to_profit: BTreeMap<String, f64>,
    pub symbol_to_exec_n: BTreeMap<String, usize>,
    pub symbol_to_exec_avg_n: BTreeMap<String, f64>,
}
