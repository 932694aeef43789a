//! Error types for rule catalog and schema construction.
//!
//! These errors only ever signal malformed configuration. Malformed row data
//! is reported as violation values by the validation engine, never as errors.

use thiserror::Error;

/// Result type for catalog and schema-building operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while defining rules or composing schemas.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A rule name was defined twice with different specs
    #[error("rule '{0}' is already defined with a different spec")]
    DuplicateRule(String),

    /// A schema referenced a rule name the catalog does not know
    #[error("unknown rule: '{0}'")]
    UnknownRule(String),

    /// A pattern rule failed to compile
    #[error("invalid pattern for rule '{name}': {error}")]
    InvalidPattern {
        /// Rule name carrying the pattern
        name: String,
        /// Compile error reported by the regex engine
        error: String,
    },

    /// A field name was bound twice in the same schema
    #[error("field '{field}' is bound twice in schema '{schema}'")]
    DuplicateBinding {
        /// Offending field name
        field: String,
        /// Schema being built
        schema: String,
    },
}
