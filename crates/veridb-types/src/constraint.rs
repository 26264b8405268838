//! Field constraint definitions.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::value::Value;
use crate::RecordId;

/// The kind of presence check a constraint demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintKind {
    /// Every candidate must be absent from the collection.
    Unique,
    /// Every candidate must be present in the collection.
    Exists,
}

/// Comparison operators for extra filter clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOp {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Less than.
    Lt,
    /// Less than or equal.
    Le,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Ge,
    /// Field is null or absent. The clause value is ignored.
    IsNull,
    /// Field is present and non-null. The clause value is ignored.
    IsNotNull,
}

/// One extra where-clause ANDed onto every probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFilter {
    /// Field the clause applies to.
    pub field: String,
    /// Comparison operator.
    pub op: FilterOp,
    /// Comparison value (ignored for `IsNull`/`IsNotNull`).
    pub value: Value,
}

impl FieldFilter {
    /// Create a new filter clause.
    pub fn new(field: impl Into<String>, op: FilterOp, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Shorthand for an equality clause.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, FilterOp::Eq, value)
    }
}

/// A declarative field constraint: which collection and field to probe,
/// which record to ignore, and any extra filter clauses.
///
/// Built once by the host (typically from its parsed rule definitions) and
/// passed read-only into the engine. The engine never parses rule syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConstraint {
    /// Target collection name.
    pub collection: String,
    /// Field to match candidates against.
    pub field: String,
    /// Record to exclude from matching, for update-time self-exclusion.
    pub exclude_id: Option<RecordId>,
    /// Extra where-clauses ANDed onto every probe, in order.
    pub filters: Vec<FieldFilter>,
}

impl FieldConstraint {
    /// Create a constraint on `collection.field` with no exclusion and no
    /// extra filters.
    pub fn new(collection: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            field: field.into(),
            exclude_id: None,
            filters: Vec::new(),
        }
    }

    /// Exclude one record id from matching.
    pub fn excluding(mut self, id: RecordId) -> Self {
        self.exclude_id = Some(id);
        self
    }

    /// Add an extra filter clause.
    pub fn with_filter(mut self, filter: FieldFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Reject malformed constraints before any probe is issued.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.collection.is_empty() {
            return Err(ConfigError::EmptyCollection);
        }
        if self.field.is_empty() {
            return Err(ConfigError::EmptyField);
        }
        for (index, filter) in self.filters.iter().enumerate() {
            if filter.field.is_empty() {
                return Err(ConfigError::EmptyFilterField { index });
            }
        }
        Ok(())
    }
}
