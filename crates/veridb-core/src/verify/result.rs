//! Per-candidate and aggregate verification results.

use veridb_types::ConstraintKind;

use crate::pattern::PatternError;

/// The outcome of one candidate lookup.
#[derive(Debug, Clone)]
pub enum LookupResult {
    /// The probe ran; `found` says whether at least one record matched.
    Probed {
        /// At least one matching record exists.
        found: bool,
    },
    /// The candidate could not be compiled into a safe pattern.
    ///
    /// Counts as *found* for `Unique` (an unverifiable candidate must not
    /// confirm uniqueness) and as *not found* for `Exists` (it cannot
    /// assert presence either). Fail-closed both ways.
    Failed {
        /// The candidate's debug rendering, for diagnostics.
        candidate: String,
        /// Why compilation failed.
        error: PatternError,
    },
}

impl LookupResult {
    /// Whether this result counts as "found" under the given constraint.
    pub fn counts_as_found(&self, kind: ConstraintKind) -> bool {
        match self {
            LookupResult::Probed { found } => *found,
            LookupResult::Failed { .. } => kind == ConstraintKind::Unique,
        }
    }

    /// Whether this lookup was flagged as failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, LookupResult::Failed { .. })
    }
}

/// A structured note about one candidate that could not be checked.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The candidate's debug rendering.
    pub candidate: String,
    /// The pattern failure behind the flag.
    pub error: PatternError,
}

/// The aggregate pass/fail decision for a whole constraint check.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    passed: bool,
    diagnostics: Vec<Diagnostic>,
}

impl ValidationOutcome {
    pub(crate) fn new(passed: bool, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            passed,
            diagnostics,
        }
    }

    /// Did the constraint pass?
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Candidates that were flagged rather than probed, for logging.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
