//! VeriDB contract types.
//!
//! This crate defines the types a host validation framework exchanges with
//! the VeriDB engine:
//!
//! - [`value`] - Scalar runtime values checked against collections
//! - [`candidate`] - Scalar-or-list candidate inputs
//! - [`constraint`] - Field constraints (`Unique`/`Exists`), extra filters
//! - [`error`] - Constraint configuration errors
//!
//! All types derive `serde::Serialize`/`serde::Deserialize` so hosts can
//! persist constraint definitions alongside their own schema.

pub mod candidate;
pub mod constraint;
pub mod error;
pub mod value;

pub use candidate::CandidateValue;
pub use constraint::{ConstraintKind, FieldConstraint, FieldFilter, FilterOp};
pub use error::ConfigError;
pub use value::Value;

/// A record identifier, as stored by the backing collection.
///
/// Sixteen opaque bytes, wide enough for UUIDs and ObjectId-style ids.
pub type RecordId = [u8; 16];
