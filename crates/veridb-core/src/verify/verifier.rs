//! The engine façade.

use tracing::{debug, warn};

use veridb_types::{CandidateValue, ConstraintKind, FieldConstraint, Value};

use crate::error::Error;
use crate::pattern::PatternCompiler;
use crate::store::{ExistsProbe, PresenceStore};
use crate::verify::aggregate::aggregate;
use crate::verify::normalize::normalize;
use crate::verify::result::{LookupResult, ValidationOutcome};

/// The field-constraint verification engine.
///
/// Holds the injected collection-probe capability and a pattern compiler.
/// Stateless beyond that: every method takes `&self`, calls are
/// independent, and verifications may run concurrently from any thread.
pub struct Verifier<S> {
    store: S,
    compiler: PatternCompiler,
}

impl<S: PresenceStore> Verifier<S> {
    /// Create a verifier over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            compiler: PatternCompiler::new(),
        }
    }

    /// Create a verifier with a custom pattern compiler.
    pub fn with_compiler(store: S, compiler: PatternCompiler) -> Self {
        Self { store, compiler }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Check a constraint of the given kind against a candidate value.
    ///
    /// Returns `Err` only when the check could not be carried out: a
    /// malformed constraint ([`Error::Config`]) or a store failure
    /// ([`Error::Query`]). A candidate that fails pattern compilation is
    /// not an error; it is folded fail-closed into the outcome.
    pub fn verify(
        &self,
        kind: ConstraintKind,
        constraint: &FieldConstraint,
        value: &CandidateValue,
    ) -> Result<ValidationOutcome, Error> {
        constraint.validate()?;

        let mut results = Vec::with_capacity(value.len());
        for scalar in normalize(value) {
            let result = self.lookup(scalar, constraint)?;
            let decided = kind == ConstraintKind::Exists && !result.counts_as_found(kind);
            results.push(result);
            // One not-found already decides Exists; Unique always checks
            // every candidate so diagnostics name every conflict.
            if decided {
                break;
            }
        }

        Ok(aggregate(kind, &results))
    }

    /// Check that every candidate is absent from the collection.
    pub fn verify_unique(
        &self,
        constraint: &FieldConstraint,
        value: &CandidateValue,
    ) -> Result<ValidationOutcome, Error> {
        self.verify(ConstraintKind::Unique, constraint, value)
    }

    /// Check that every candidate is present in the collection.
    pub fn verify_exists(
        &self,
        constraint: &FieldConstraint,
        value: &CandidateValue,
    ) -> Result<ValidationOutcome, Error> {
        self.verify(ConstraintKind::Exists, constraint, value)
    }

    /// Run one candidate lookup: compile, probe, report.
    fn lookup(
        &self,
        scalar: &Value,
        constraint: &FieldConstraint,
    ) -> Result<LookupResult, Error> {
        let pattern = match self.compiler.compile(scalar) {
            Ok(pattern) => pattern,
            Err(error) => {
                warn!(
                    collection = %constraint.collection,
                    field = %constraint.field,
                    %error,
                    "candidate failed pattern compilation; flagging lookup"
                );
                return Ok(LookupResult::Failed {
                    candidate: format!("{scalar:?}"),
                    error,
                });
            }
        };

        let probe = ExistsProbe {
            field: &constraint.field,
            pattern: &pattern,
            filters: &constraint.filters,
            exclude_id: constraint.exclude_id,
        };

        debug!(
            collection = %constraint.collection,
            field = %constraint.field,
            pattern = pattern.as_str(),
            excluding = probe.exclude_id.is_some(),
            "issuing existence probe"
        );

        let found = self.store.exists(&constraint.collection, &probe)?;
        Ok(LookupResult::Probed { found })
    }
}
