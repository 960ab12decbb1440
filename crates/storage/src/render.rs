use std::cmp::Ordering;

use analytics::AnalysisReport;

/// Renders the human-readable console summary of a report.
///
/// Numeric values are rounded to three decimals for display only, except
/// the daily execution count which is shown as a whole number. Symbols are
/// listed in descending total-profit order.
pub fn render_report(report: &AnalysisReport) -> String {
    let general = &report.general;
    let winning = &report.winning_trades;
    let losing = &report.losing_trades;
    let sharpe = &report.sharpe_ratio;
    let symbol_data = &report.symbol_data;

    let mut symbols: Vec<&String> = symbol_data.symbol_to_profit.keys().collect();
    symbols.sort_by(|a, b| {
        let profit_a = symbol_data.symbol_to_profit[*a];
        let profit_b = symbol_data.symbol_to_profit[*b];
        profit_b.partial_cmp(&profit_a).unwrap_or(Ordering::Equal)
    });

    let symbol_lines = symbols
        .iter()
        .map(|symbol| {
            format!(
                "\t{}:\n\t\tprofit: {:.3}\n\t\texec_n: {}\n\t\tdaily_n: {:.3}",
                symbol,
                symbol_data.symbol_to_profit[*symbol],
                symbol_data.symbol_to_exec_n[*symbol],
                symbol_data.symbol_to_exec_avg_n[*symbol],
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\ngeneral data:\n\
         \tstart: {}\n\
         \tend: {}\n\
         \ttraded symbols: {}\n\
         \ttraded days: {}\n\
         \tprofit: {:.3}\n\
         \tnumber of executions: {}\n\
         \taverage daily number of executions: {}\n\
         \taverage daily number of executions per symbol: {:.3}\n\n\
         winning trades:\n\
         \tsum: {:.3}\n\
         \tn: {}\n\
         \taverage: {:.3}\n\n\
         losing trades:\n\
         \tsum: {:.3}\n\
         \tn: {}\n\
         \taverage: {:.3}\n\n\
         sharpe ratio:\n\
         \tUS10Y monthly yield: {}\n\
         \texcess profits average: {:.3}\n\
         \texcess profits std dev: {:.3}\n\
         \tsharpe ratio: {:.3} / {:.3} = {:.3}\n\n\
         symbol data:\n{}\n",
        general.start,
        general.end,
        general.symbols_n,
        general.days_n,
        general.profit,
        general.exec_n,
        general.daily_exec_n.round() as i64,
        general.daily_exec_symbol_n,
        winning.total_won,
        winning.won_n,
        winning.average_win,
        losing.total_lost,
        losing.lost_n,
        losing.average_loss,
        sharpe.us10y_monthly_yield,
        sharpe.excess_average,
        sharpe.excess_std_dev,
        sharpe.excess_average,
        sharpe.excess_std_dev,
        sharpe.sharpe_ratio,
        symbol_lines,
    )
}
