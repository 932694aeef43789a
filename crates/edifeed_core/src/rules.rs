//! Field rule primitives.
//!
//! A field rule is an immutable constraint on a single field's value. A field
//! typically carries a compound rule: a list of rules, all of which must pass.
//! The set of rule kinds is closed; there is no custom-expression escape hatch.

use serde::{Deserialize, Serialize};

/// A single constraint applicable to one field's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldRule {
    /// Character length of the value's text form must lie in `[min, max]`
    Length {
        /// Minimum length (inclusive)
        min: usize,
        /// Maximum length (inclusive)
        max: usize,
    },

    /// Value's text form must fully match the regex (partial matches fail)
    Pattern {
        /// Regular expression pattern
        regex: String,
    },

    /// Numeric interpretation of the value must lie in `[min, max]`
    Range {
        /// Minimum value (inclusive)
        min: f64,
        /// Maximum value (inclusive)
        max: f64,
    },

    /// Value's text form must be a member of a fixed literal set
    OneOf {
        /// Allowed values
        values: Vec<String>,
    },
}

impl FieldRule {
    /// Exact-length shorthand used by fixed-width fields.
    pub fn exact_length(len: usize) -> Self {
        FieldRule::Length { min: len, max: len }
    }

    /// Enumeration shorthand over string literals.
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldRule::OneOf {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}
