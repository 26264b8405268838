//! The collection-probe capability the engine is built against.
//!
//! The engine never manages connections, transactions, or retries; it asks
//! a [`PresenceStore`] one question per candidate: does at least one record
//! matching the probe exist? [`MemoryStore`] is the reference
//! implementation for tests and embedders without a real database.

mod memory;

pub use memory::MemoryStore;

use veridb_types::{FieldFilter, RecordId};

use crate::error::QueryError;
use crate::pattern::CompiledPattern;

/// One existence probe: field ≈ pattern AND all filters AND id ≠ exclude_id.
#[derive(Debug)]
pub struct ExistsProbe<'a> {
    /// Field matched against the pattern.
    pub field: &'a str,
    /// Compiled exact-match pattern for the candidate.
    pub pattern: &'a CompiledPattern,
    /// Extra filter clauses, all of which must hold.
    pub filters: &'a [FieldFilter],
    /// Record to ignore, if any.
    pub exclude_id: Option<RecordId>,
}

/// Read-only existence probes against named collections.
///
/// Implementations may short-circuit after the first match; the engine
/// only needs a boolean. Probes must reflect current state (no caching
/// across calls) and must be safe to issue from any thread.
pub trait PresenceStore {
    /// Does at least one record in `collection` match the probe?
    fn exists(&self, collection: &str, probe: &ExistsProbe<'_>) -> Result<bool, QueryError>;
}
