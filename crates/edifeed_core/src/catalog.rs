//! Rule catalog: the canonical definition of every field rule.
//!
//! Fields that appear in multiple record schemas (e.g. `retailerid` in both
//! orders and invoices) share one definition here. The catalog is built once
//! at startup and passed explicitly to schema builders; there is no global
//! rule table.

use std::collections::BTreeMap;

use regex::Regex;

use crate::error::{CatalogError, Result};
use crate::rules::FieldRule;

/// Named compound rules, keyed by semantic field name.
///
/// `define` is idempotent for identical specs and rejects conflicting
/// redefinitions, so catalog construction can list shared fields once per
/// logical group without tracking what was already registered.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    rules: BTreeMap<String, Vec<FieldRule>>,
}

impl RuleCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a compound rule under `name`.
    ///
    /// Fails with [`CatalogError::DuplicateRule`] if `name` is already bound
    /// to a different spec; redefining with an identical spec is a no-op.
    /// Pattern rules are compiled eagerly so a bad regex surfaces here, at
    /// configuration time, rather than mid-validation.
    pub fn define(&mut self, name: impl Into<String>, rules: Vec<FieldRule>) -> Result<()> {
        let name = name.into();

        for rule in &rules {
            if let FieldRule::Pattern { regex } = rule {
                Regex::new(regex).map_err(|e| CatalogError::InvalidPattern {
                    name: name.clone(),
                    error: e.to_string(),
                })?;
            }
        }

        if let Some(existing) = self.rules.get(&name) {
            if *existing == rules {
                return Ok(());
            }
            return Err(CatalogError::DuplicateRule(name));
        }

        self.rules.insert(name, rules);
        Ok(())
    }

    /// Looks up the compound rule registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<&[FieldRule]> {
        self.rules
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| CatalogError::UnknownRule(name.to_string()))
    }

    /// Returns true if `name` is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Number of defined rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are defined.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over defined rule names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}
