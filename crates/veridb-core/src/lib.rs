//! VeriDB Core - Field-constraint validation engine.
//!
//! Given a candidate value (or list of values) for a named field, the engine
//! decides whether the value is *unique* (absent from a collection,
//! optionally excluding one known record) or *exists* (present in a
//! collection). Matching is case-insensitive and exact: each candidate is
//! compiled into an escaped, anchored pattern so metacharacters in the
//! input are always matched literally.
//!
//! The engine is a library-level capability: the backing collection is
//! injected as a [`PresenceStore`] implementation, and the surrounding
//! framework supplies a [`FieldConstraint`] plus a
//! [`CandidateValue`] per check.
//!
//! ```
//! use veridb_core::{FieldConstraint, MemoryStore, Value, Verifier};
//!
//! let store = MemoryStore::new();
//! store.insert("users", vec![("name", Value::from("John Doe"))]);
//!
//! let verifier = Verifier::new(store);
//! let constraint = FieldConstraint::new("users", "name");
//!
//! // Exact match is case-insensitive, never substring.
//! let outcome = verifier.verify_unique(&constraint, &"john doe".into()).unwrap();
//! assert!(!outcome.passed());
//! let outcome = verifier.verify_unique(&constraint, &"John".into()).unwrap();
//! assert!(outcome.passed());
//! ```

pub mod error;
pub mod pattern;
pub mod store;
pub mod verify;

pub use error::{Error, QueryError};
pub use pattern::{CompiledPattern, PatternCompiler, PatternError};
pub use store::{ExistsProbe, MemoryStore, PresenceStore};
pub use verify::{Diagnostic, LookupResult, ValidationOutcome, Verifier};

// Re-export the contract types.
pub use veridb_types as types;
pub use veridb_types::{
    CandidateValue, ConfigError, ConstraintKind, FieldConstraint, FieldFilter, FilterOp, RecordId,
    Value,
};
