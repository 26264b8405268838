//! Constraint configuration errors.

use thiserror::Error;

/// A malformed [`FieldConstraint`](crate::FieldConstraint).
///
/// These are rejected at call time, before any probe is issued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Constraint names no collection.
    #[error("constraint has an empty collection name")]
    EmptyCollection,

    /// Constraint names no field.
    #[error("constraint has an empty field name")]
    EmptyField,

    /// A filter clause names no field.
    #[error("filter clause {index} has an empty field name")]
    EmptyFilterField {
        /// Position of the offending clause.
        index: usize,
    },
}
