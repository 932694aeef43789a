//! Validation engine.
//!
//! Evaluates a dataset against a record schema and accumulates every
//! violation: per row in order, per field in schema declaration order, every
//! rule on a present field (no short-circuit, so one bad value can report
//! several problems at once), then the row-level conditional requirements.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use edifeed_core::{FieldBinding, FieldRule, Presence, RecordSchema, RowRule};
use regex::Regex;
use tracing::debug;

use crate::dataset::{DataRow, DataSet, DataValue};
use crate::error::EngineError;
use crate::violation::{ValidationReport, Violation, ViolationKind};

/// Evaluates datasets against record schemas.
///
/// Holds a cache of compiled patterns; validation itself is pure and
/// read-only over the dataset, so identical inputs always yield an identical
/// report.
#[derive(Debug, Default)]
pub struct ValidationEngine {
    /// Compiled full-match regexes, keyed by pattern source
    regex_cache: HashMap<String, Regex>,
}

impl ValidationEngine {
    /// Creates a new engine with an empty pattern cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every row of `dataset` against `schema`.
    ///
    /// Returns the full violation report; the only error is a pattern in the
    /// schema that fails to compile, which is a configuration bug rather than
    /// a data problem.
    pub fn validate(
        &mut self,
        schema: &RecordSchema,
        dataset: &DataSet,
    ) -> Result<ValidationReport, EngineError> {
        let mut violations = Vec::new();

        for (row_idx, row) in dataset.rows().enumerate() {
            self.validate_row(schema, row, row_idx, &mut violations)?;
        }

        debug!(
            schema = %schema.name,
            rows = dataset.len(),
            violations = violations.len(),
            "dataset validated"
        );

        Ok(ValidationReport {
            schema: schema.name.clone(),
            rows_validated: dataset.len(),
            violations,
        })
    }

    fn validate_row(
        &mut self,
        schema: &RecordSchema,
        row: &DataRow,
        row_idx: usize,
        violations: &mut Vec<Violation>,
    ) -> Result<(), EngineError> {
        for binding in &schema.fields {
            match row.get(&binding.name) {
                Some(value) if !value.is_empty() => {
                    self.check_field(binding, value, row_idx, violations)?;
                }
                _ => {
                    if binding.presence == Presence::Required {
                        violations.push(Violation {
                            row: row_idx,
                            field: binding.name.clone(),
                            kind: ViolationKind::MissingRequiredField,
                            value: None,
                        });
                    }
                }
            }
        }

        // Row rules run on raw values, independent of whether the trigger
        // itself passed its field-level checks.
        for rule in &schema.row_rules {
            let RowRule::RequiredWith { trigger, dependents } = rule;
            if !is_present(row, trigger) {
                continue;
            }
            for dependent in dependents {
                if !is_present(row, dependent) {
                    violations.push(Violation {
                        row: row_idx,
                        field: dependent.clone(),
                        kind: ViolationKind::ConditionalRequirement {
                            trigger: trigger.clone(),
                        },
                        value: None,
                    });
                }
            }
        }

        Ok(())
    }

    /// Evaluates every rule on a present, non-empty value.
    fn check_field(
        &mut self,
        binding: &FieldBinding,
        value: &DataValue,
        row_idx: usize,
        violations: &mut Vec<Violation>,
    ) -> Result<(), EngineError> {
        let text = value.canonical_text();

        for rule in &binding.rules {
            let kind = match rule {
                FieldRule::Length { min, max } => {
                    let len = text.chars().count();
                    (len < *min || len > *max).then(|| ViolationKind::Length {
                        min: *min,
                        max: *max,
                    })
                }
                FieldRule::Pattern { regex } => {
                    let re = self.full_match_regex(&binding.name, regex)?;
                    (!re.is_match(&text)).then(|| ViolationKind::Pattern {
                        regex: regex.clone(),
                    })
                }
                FieldRule::Range { min, max } => match value.as_decimal() {
                    Some(n) => (n < *min || n > *max).then(|| ViolationKind::Range {
                        min: *min,
                        max: *max,
                    }),
                    None => Some(ViolationKind::TypeMismatch {
                        expected: binding.value_type.name().to_string(),
                    }),
                },
                FieldRule::OneOf { values } => {
                    (!values.iter().any(|v| v == text.as_ref())).then(|| {
                        ViolationKind::Enumeration {
                            allowed: values.clone(),
                        }
                    })
                }
            };

            if let Some(kind) = kind {
                violations.push(Violation {
                    row: row_idx,
                    field: binding.name.clone(),
                    kind,
                    value: Some(text.clone().into_owned()),
                });
            }
        }

        Ok(())
    }

    /// Returns the anchored, compiled form of `pattern`, compiling on first
    /// use. Anchoring enforces full-value matching: a partial match fails.
    fn full_match_regex(&mut self, field: &str, pattern: &str) -> Result<&Regex, EngineError> {
        match self.regex_cache.entry(pattern.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let anchored = format!("^(?:{pattern})$");
                let compiled =
                    Regex::new(&anchored).map_err(|e| EngineError::InvalidPattern {
                        field: field.to_string(),
                        pattern: pattern.to_string(),
                        error: e.to_string(),
                    })?;
                Ok(entry.insert(compiled))
            }
        }
    }
}

/// Present for requirement purposes: in the row, not null, not empty text.
fn is_present(row: &DataRow, field: &str) -> bool {
    row.get(field).is_some_and(|v| !v.is_empty())
}
