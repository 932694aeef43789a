//! Dataset representation for validation.
//!
//! Rows arrive raw from upstream extraction, never pre-validated; the
//! validator reads them and reports, it never mutates them.

use std::borrow::Cow;
use std::collections::HashMap;

/// A raw value in a dataset row.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// Missing value
    Null,
    /// Text value
    Text(String),
    /// Integer value (quantities, YYYYMMDD dates)
    Int(i64),
    /// Decimal value (amounts, prices)
    Decimal(f64),
}

impl DataValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// Returns true if this value counts as absent: null or empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            DataValue::Null => true,
            DataValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Canonical text form, as it would appear in the serialized feed file.
    ///
    /// Length, pattern and enumeration rules evaluate against this form.
    pub fn canonical_text(&self) -> Cow<'_, str> {
        match self {
            DataValue::Null => Cow::Borrowed(""),
            DataValue::Text(s) => Cow::Borrowed(s),
            DataValue::Int(i) => Cow::Owned(i.to_string()),
            DataValue::Decimal(f) => Cow::Owned(f.to_string()),
        }
    }

    /// Numeric interpretation for range rules.
    ///
    /// Text is accepted when it parses as a finite decimal number; anything
    /// else is `None`, which the engine reports as a type mismatch. NaN and
    /// infinity are rejected because they compare false against any bound
    /// and would otherwise slip through range checks.
    pub fn as_decimal(&self) -> Option<f64> {
        let n = match self {
            DataValue::Int(i) => *i as f64,
            DataValue::Decimal(f) => *f,
            DataValue::Text(s) => s.trim().parse().ok()?,
            DataValue::Null => return None,
        };
        n.is_finite().then_some(n)
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::Text(s)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::Text(s.to_string())
    }
}

impl From<i64> for DataValue {
    fn from(i: i64) -> Self {
        DataValue::Int(i)
    }
}

impl From<f64> for DataValue {
    fn from(f: f64) -> Self {
        DataValue::Decimal(f)
    }
}

/// A single row: field name to raw value.
pub type DataRow = HashMap<String, DataValue>;

/// An ordered sequence of rows to validate.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    rows: Vec<DataRow>,
}

impl DataSet {
    /// Creates an empty dataset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a dataset from rows, preserving order.
    pub fn from_rows(rows: Vec<DataRow>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &DataRow> {
        self.rows.iter()
    }

    /// Gets a row by index.
    pub fn get_row(&self, index: usize) -> Option<&DataRow> {
        self.rows.get(index)
    }

    /// Appends a row.
    pub fn add_row(&mut self, row: DataRow) {
        self.rows.push(row);
    }
}

impl FromIterator<DataRow> for DataSet {
    fn from_iter<T: IntoIterator<Item = DataRow>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
