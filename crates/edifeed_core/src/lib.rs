//! # EDI Feed Core
//!
//! Core data structures for validating tabular order and invoice records
//! before they are serialized into flat files for an EDI-style target system.
//!
//! This crate provides the fundamental building blocks:
//!
//! - **Field rules**: a closed set of pure value-level constraints
//!   (length, pattern, range, enumeration) composed via AND
//! - **Rule catalog**: the canonical definition of every field rule, keyed by
//!   semantic field name and shared between record types
//! - **Record schemas**: ordered field bindings plus row-level conditional
//!   requirements for the Order and Invoice record types
//!
//! ## Example
//!
//! ```rust
//! use edifeed_core::gdi;
//!
//! let catalog = gdi::rule_catalog();
//! let orders = gdi::order_schema(&catalog).expect("catalog covers every bound field");
//!
//! assert_eq!(orders.name, "orders");
//! assert!(orders.field("retailerid").is_some());
//! ```

pub mod catalog;
pub mod error;
pub mod gdi;
pub mod rules;
pub mod schema;

pub use catalog::*;
pub use error::*;
pub use rules::*;
pub use schema::*;
