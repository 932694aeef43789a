//! Error types for the validation engine.

use thiserror::Error;

/// Catastrophic engine failures.
///
/// These only occur for malformed schema configuration; malformed row data is
/// reported as violations, never as errors. Catalog-level problems
/// (unknown/duplicate rules) are caught earlier, at schema construction.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A pattern rule in the schema failed to compile
    #[error("invalid pattern '{pattern}' on field '{field}': {error}")]
    InvalidPattern {
        /// Field carrying the pattern rule
        field: String,
        /// The pattern source
        pattern: String,
        /// Compile error reported by the regex engine
        error: String,
    },
}
