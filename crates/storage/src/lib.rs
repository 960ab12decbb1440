//! # Meridian Storage
//!
//! This crate owns both sides of the system's I/O boundary: decoding the
//! results log a trading run leaves behind, and emitting the analysis
//! artifact plus its console rendering.
//!
//! ## Architectural Principles
//!
//! - **Adapter Layer:** The analytics core never touches a file. Everything
//!   the pipeline consumes enters through `RecordStore`, and everything it
//!   produces leaves through `ReportStore` or `render_report`.
//! - **Validate at the Boundary:** Every results-log line is decoded into
//!   typed values before it reaches the core. Wrong tuple arity or a
//!   non-numeric field fails the load with the offending line number; the
//!   core can assume well-typed positions.
//!
//! ## Public API
//!
//! - `RecordStore`: reads and decodes the results log into position batches.
//! - `ReportStore`: persists the `AnalysisReport` as indented JSON.
//! - `render_report`: the human-readable summary of a report.
//! - `StorageError`: the specific error types that can be returned from this
//!   crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod render;
pub mod sink;
pub mod source;

// Re-export the key components to create a clean, public-facing API.
pub use error::StorageError;
pub use render::render_report;
pub use sink::ReportStore;
pub use source::RecordStore;
