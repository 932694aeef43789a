//! # EDI Feed Validator
//!
//! Validation engine for order and invoice datasets. Given a record schema
//! from `edifeed_core` and an in-memory dataset, the engine checks every row
//! against every applicable field rule and reports *all* violations, not just
//! the first: callers must fix every problem before a feed file is built, so
//! exhaustive reporting is the whole point.
//!
//! Rule failures are data ([`Violation`] values in the report), never errors;
//! the engine itself only fails on malformed schema configuration.
//!
//! ## Example
//!
//! ```rust
//! use edifeed_core::gdi;
//! use edifeed_validator::{DataSet, DataValue, ValidationEngine};
//! use std::collections::HashMap;
//!
//! let catalog = gdi::rule_catalog();
//! let schema = gdi::order_schema(&catalog).unwrap();
//!
//! let mut row = HashMap::new();
//! row.insert("retailerid".to_string(), DataValue::from("10001"));
//! let dataset = DataSet::from_rows(vec![row]);
//!
//! let mut engine = ValidationEngine::new();
//! let report = engine.validate(&schema, &dataset).unwrap();
//! assert!(!report.is_valid()); // other required fields are missing
//! ```

mod dataset;
mod engine;
mod error;
mod violation;

pub use dataset::*;
pub use engine::*;
pub use error::*;
pub use violation::*;
