use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("No positions were supplied to the report pipeline")]
    EmptyInput,

    #[error("Sharpe ratio is undefined: the excess-return standard deviation is zero")]
    UndefinedRatio,

    #[error("No {0} trades in the analysed set, so the category average is undefined")]
    NoTradesInCategory(&'static str),

    #[error("Timestamp {0} is outside the representable datetime range")]
    InvalidTimestamp(i64),
}
