//! Error taxonomy for the spacing engine
//!
//! Only batch-fatal conditions surface as errors. A well with bad
//! coordinates is a recoverable, per-record condition: it is excluded
//! from the index, reported through `SpacingSummary`, and the batch
//! continues.

use thiserror::Error;

/// Batch-fatal failures of the spacing computation
#[derive(Error, Debug)]
pub enum SpacingError {
    /// Two or more wells share an API10. Every downstream join is
    /// keyed by this identifier, so picking a winner silently would
    /// corrupt the output — the whole batch is rejected instead.
    #[error("duplicate API10 identifiers in batch: {}", duplicates.join(", "))]
    DuplicateApi10 { duplicates: Vec<String> },

    /// Spacing parameters failed validation (non-positive radius,
    /// zero neighbor count, out-of-range origin).
    #[error("invalid spacing parameters: {reason}")]
    InvalidParams { reason: String },
}
