//! Violation model.
//!
//! A violation is one reported failure of a row's value against a rule. It is
//! plain data: a non-empty violation collection means "do not proceed to file
//! generation", it is never raised as an error.

use std::fmt;

use serde::Serialize;

/// The rule (or presence requirement) a value failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// A statically required field was absent or empty
    MissingRequiredField,

    /// Character length outside `[min, max]`
    Length { min: usize, max: usize },

    /// Value did not fully match the pattern
    Pattern { regex: String },

    /// Numeric value outside `[min, max]`
    Range { min: f64, max: f64 },

    /// Value not a member of the allowed set
    Enumeration { allowed: Vec<String> },

    /// Value could not be interpreted as the expected numeric type
    TypeMismatch { expected: String },

    /// Field became required because `trigger` was present, but was absent
    ConditionalRequirement { trigger: String },
}

/// One rule failure: where it happened and what was offending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Zero-based row index
    pub row: usize,

    /// Field name the rule applies to
    pub field: String,

    /// Which rule failed
    pub kind: ViolationKind,

    /// The offending value's text form; `None` for absence violations
    pub value: Option<String>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, field '{}': ", self.row, self.field)?;
        match &self.kind {
            ViolationKind::MissingRequiredField => write!(f, "required field is missing"),
            ViolationKind::Length { min, max } => write!(
                f,
                "length of '{}' outside [{min}, {max}]",
                self.value.as_deref().unwrap_or_default()
            ),
            ViolationKind::Pattern { regex } => write!(
                f,
                "'{}' does not match pattern '{regex}'",
                self.value.as_deref().unwrap_or_default()
            ),
            ViolationKind::Range { min, max } => write!(
                f,
                "value {} outside range [{min}, {max}]",
                self.value.as_deref().unwrap_or_default()
            ),
            ViolationKind::Enumeration { allowed } => write!(
                f,
                "'{}' not in allowed values: [{}]",
                self.value.as_deref().unwrap_or_default(),
                allowed.join(", ")
            ),
            ViolationKind::TypeMismatch { expected } => write!(
                f,
                "'{}' is not a valid {expected}",
                self.value.as_deref().unwrap_or_default()
            ),
            ViolationKind::ConditionalRequirement { trigger } => {
                write!(f, "required because '{trigger}' is present, but missing")
            }
        }
    }
}

/// Outcome of validating one dataset against one schema.
///
/// Violations are ordered row-major; within a row they follow the schema's
/// field declaration order, with row-level rules reported last. Identical
/// inputs always produce an identical report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Record schema name the dataset was checked against
    pub schema: String,

    /// Number of rows examined
    pub rows_validated: usize,

    /// Every rule failure found, in canonical order
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// True iff no violations were found.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations for one row, in report order.
    pub fn for_row(&self, row: usize) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.row == row)
    }

    /// Violations for one field across all rows, in report order.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations.iter().filter(move |v| v.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_is_readable() {
        let violation = Violation {
            row: 3,
            field: "unitofmeasure".to_string(),
            kind: ViolationKind::Enumeration {
                allowed: vec!["CW".to_string(), "CB".to_string()],
            },
            value: Some("KG".to_string()),
        };
        assert_eq!(
            violation.to_string(),
            "row 3, field 'unitofmeasure': 'KG' not in allowed values: [CW, CB]"
        );
    }

    #[test]
    fn report_filters() {
        let report = ValidationReport {
            schema: "orders".to_string(),
            rows_validated: 2,
            violations: vec![
                Violation {
                    row: 0,
                    field: "retailerid".to_string(),
                    kind: ViolationKind::MissingRequiredField,
                    value: None,
                },
                Violation {
                    row: 1,
                    field: "retailerid".to_string(),
                    kind: ViolationKind::Length { min: 5, max: 5 },
                    value: Some("123".to_string()),
                },
            ],
        };

        assert!(!report.is_valid());
        assert_eq!(report.for_row(1).count(), 1);
        assert_eq!(report.for_field("retailerid").count(), 2);
    }

    #[test]
    fn violations_serialize_with_kind_tag() {
        let violation = Violation {
            row: 0,
            field: "depositamount".to_string(),
            kind: ViolationKind::Range {
                min: 0.0,
                max: 9999999.99,
            },
            value: Some("10000000.00".to_string()),
        };
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["kind"]["kind"], "range");
        assert_eq!(json["field"], "depositamount");
    }
}
