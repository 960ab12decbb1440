//! # Meridian Analytics Engine
//!
//! This crate is the statistics computation pipeline: it turns the flat list
//! of raw positions read from a trading run into the complete
//! `AnalysisReport`.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems and performs no I/O and no logging. It depends only on
//!   `core-types` (Layer 0).
//! - **Stateless Calculation:** The `ReportEngine` is a stateless calculator.
//!   It takes the enriched, open-time-ordered position sequence as input and
//!   produces an `AnalysisReport` as output. Any failure carries enough
//!   context for the caller to log it.
//!
//! ## Public API
//!
//! - `enrich`: expands results-log batches into `EnrichedPosition`s with
//!   zoned open/close times and merges them into one ordered sequence.
//! - `ReportEngine`: the main struct that contains the calculation logic.
//! - `AnalysisReport`: the standardized struct that holds every report
//!   section.
//! - `AnalyticsError`: the specific error types that can be returned from
//!   this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod enrich;
pub mod error;
pub mod report;
pub mod time;

// Re-export the key components to create a clean, public-facing API.
pub use engine::ReportEngine;
pub use error::AnalyticsError;
pub use report::AnalysisReport;
