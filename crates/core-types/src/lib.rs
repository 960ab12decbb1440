pub mod position;

// Re-export the core types to provide a clean public API.
pub use position::{EnrichedPosition, PositionBatch, RawPosition};
