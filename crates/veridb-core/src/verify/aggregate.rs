//! Result aggregation.

use veridb_types::ConstraintKind;

use crate::verify::result::{Diagnostic, LookupResult, ValidationOutcome};

/// Combine per-candidate results into the single outcome the constraint
/// kind demands.
///
/// `Unique` passes iff no result counts as found; flagged lookups count as
/// found, so they force failure. `Exists` passes iff every result counts
/// as found; flagged lookups count as not found, so they force failure
/// too. An empty result list passes both kinds: nothing conflicts for
/// `Unique`, and `Exists` over nothing is vacuously true ("required"
/// enforcement belongs to the caller, not the engine).
pub fn aggregate(kind: ConstraintKind, results: &[LookupResult]) -> ValidationOutcome {
    let diagnostics: Vec<Diagnostic> = results
        .iter()
        .filter_map(|r| match r {
            LookupResult::Failed { candidate, error } => Some(Diagnostic {
                candidate: candidate.clone(),
                error: error.clone(),
            }),
            LookupResult::Probed { .. } => None,
        })
        .collect();

    let passed = match kind {
        ConstraintKind::Unique => !results.iter().any(|r| r.counts_as_found(kind)),
        ConstraintKind::Exists => results.iter().all(|r| r.counts_as_found(kind)),
    };

    ValidationOutcome::new(passed, diagnostics)
}
