//! Record schemas: field bindings plus row-level rules.
//!
//! A record schema is static configuration: an ordered mapping from field
//! name to its rules and required/optional status, together with cross-field
//! conditional requirements that no single field binding can express.

use serde::{Deserialize, Serialize};

use crate::catalog::RuleCatalog;
use crate::error::{CatalogError, Result};
use crate::rules::FieldRule;

/// Type expectation for a field's raw value.
///
/// Values always arrive raw (text, integer or decimal, never pre-validated);
/// the expectation only drives numeric parsing for range rules and the label
/// reported on a type-mismatch violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Free text
    Text,
    /// Whole number (quantities, YYYYMMDD dates)
    Integer,
    /// Decimal number (amounts, prices)
    Decimal,
}

impl ValueType {
    /// Human-readable name used in violation messages.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Text => "text",
            ValueType::Integer => "integer",
            ValueType::Decimal => "decimal",
        }
    }
}

/// Whether a field must be present and non-empty in every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    /// Must be present and non-empty in every row
    Required,
    /// Absent or empty values are skipped
    Optional,
}

/// One field's rules and status within a record schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldBinding {
    /// Field name as it appears in dataset rows
    pub name: String,

    /// Type expectation for the raw value
    pub value_type: ValueType,

    /// Required/optional status
    pub presence: Presence,

    /// Compound rule; every rule must pass
    pub rules: Vec<FieldRule>,
}

/// A rule evaluated over a whole row rather than a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RowRule {
    /// If `trigger` is present and non-empty, every dependent becomes
    /// required for that row. Evaluated on raw values, independent of
    /// whether the trigger itself passed its field-level rules.
    RequiredWith {
        /// Field whose presence activates the requirement
        trigger: String,
        /// Fields that become required
        dependents: Vec<String>,
    },
}

/// A named, ordered set of field bindings for one record type.
///
/// Field order is declaration order and is part of the contract: violations
/// within a row are reported in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSchema {
    /// Record type name (e.g. "orders", "invoices")
    pub name: String,

    /// Field bindings in declaration order
    pub fields: Vec<FieldBinding>,

    /// Cross-field rules, evaluated per row after field-level checks
    pub row_rules: Vec<RowRule>,
}

impl RecordSchema {
    /// Looks up a binding by field name.
    pub fn field(&self, name: &str) -> Option<&FieldBinding> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Iterates over field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// Builder composing catalog rules into a [`RecordSchema`].
///
/// Field entries are collected first and resolved against the catalog in
/// [`SchemaBuilder::build`], so a typo'd rule name fails construction with
/// [`CatalogError::UnknownRule`] instead of silently validating nothing.
///
/// # Example
///
/// ```rust
/// use edifeed_core::{FieldRule, Presence, RuleCatalog, SchemaBuilder, ValueType};
///
/// let mut catalog = RuleCatalog::new();
/// catalog.define("retailerid", vec![FieldRule::exact_length(5)]).unwrap();
///
/// let schema = SchemaBuilder::new("orders")
///     .required("retailerid", ValueType::Text)
///     .build(&catalog)
///     .unwrap();
///
/// assert_eq!(schema.field("retailerid").unwrap().presence, Presence::Required);
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    name: String,
    entries: Vec<(String, ValueType, Presence)>,
    row_rules: Vec<RowRule>,
}

impl SchemaBuilder {
    /// Creates a builder for the named record type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Adds a required field.
    pub fn required(self, field: impl Into<String>, value_type: ValueType) -> Self {
        self.field(field, value_type, Presence::Required)
    }

    /// Adds an optional field.
    pub fn optional(self, field: impl Into<String>, value_type: ValueType) -> Self {
        self.field(field, value_type, Presence::Optional)
    }

    /// Adds a field with explicit presence.
    pub fn field(
        mut self,
        field: impl Into<String>,
        value_type: ValueType,
        presence: Presence,
    ) -> Self {
        self.entries.push((field.into(), value_type, presence));
        self
    }

    /// Adds a conditional requirement: when `trigger` is non-empty in a row,
    /// every dependent becomes required for that row.
    pub fn required_with<I, S>(mut self, trigger: impl Into<String>, dependents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.row_rules.push(RowRule::RequiredWith {
            trigger: trigger.into(),
            dependents: dependents.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Resolves every field against the catalog and builds the schema.
    ///
    /// Fails with [`CatalogError::UnknownRule`] for an unregistered field
    /// name and [`CatalogError::DuplicateBinding`] if a field was added twice.
    pub fn build(self, catalog: &RuleCatalog) -> Result<RecordSchema> {
        let mut fields = Vec::with_capacity(self.entries.len());

        for (name, value_type, presence) in self.entries {
            if fields.iter().any(|f: &FieldBinding| f.name == name) {
                return Err(CatalogError::DuplicateBinding {
                    field: name,
                    schema: self.name,
                });
            }
            let rules = catalog.lookup(&name)?.to_vec();
            fields.push(FieldBinding {
                name,
                value_type,
                presence,
                rules,
            });
        }

        Ok(RecordSchema {
            name: self.name,
            fields,
            row_rules: self.row_rules,
        })
    }
}
