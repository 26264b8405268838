//! In-memory reference store.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use veridb_types::{FieldFilter, FilterOp, RecordId, Value};

use crate::error::QueryError;
use crate::store::{ExistsProbe, PresenceStore};

/// A stored record: an id plus named field values.
#[derive(Debug, Clone)]
pub struct StoredRecord {
    id: RecordId,
    fields: Vec<(String, Value)>,
}

impl StoredRecord {
    /// Look up a field value by name.
    fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, v)| v)
    }
}

/// An in-memory collection store.
///
/// Collections are created on first insert; probing a collection that was
/// never written is simply "not found". Reads and writes are safe from any
/// thread; concurrent verifications share the store without external
/// locking.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: DashMap<String, Vec<StoredRecord>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record with a generated id, returning the id.
    pub fn insert(&self, collection: &str, fields: Vec<(&str, Value)>) -> RecordId {
        let id = self.generate_id();
        self.insert_with_id(collection, id, fields);
        id
    }

    /// Insert a record under a caller-chosen id.
    pub fn insert_with_id(&self, collection: &str, id: RecordId, fields: Vec<(&str, Value)>) {
        let record = StoredRecord {
            id,
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        };
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(record);
    }

    /// Remove a record by id. Returns whether a record was removed.
    pub fn remove(&self, collection: &str, id: RecordId) -> bool {
        match self.collections.get_mut(collection) {
            Some(mut records) => {
                let before = records.len();
                records.retain(|r| r.id != id);
                records.len() != before
            }
            None => false,
        }
    }

    /// Number of records in a collection.
    pub fn len(&self, collection: &str) -> usize {
        self.collections.get(collection).map_or(0, |r| r.len())
    }

    /// Check if a collection has no records.
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    /// Drop all records from all collections.
    pub fn clear(&self) {
        self.collections.clear();
    }

    fn generate_id(&self) -> RecordId {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let mut id = [0u8; 16];
        id[8..].copy_from_slice(&n.to_be_bytes());
        id
    }
}

impl PresenceStore for MemoryStore {
    fn exists(&self, collection: &str, probe: &ExistsProbe<'_>) -> Result<bool, QueryError> {
        let records = match self.collections.get(collection) {
            Some(records) => records,
            None => return Ok(false),
        };

        // Short-circuits on the first matching record.
        Ok(records.iter().any(|record| {
            if probe.exclude_id == Some(record.id) {
                return false;
            }
            let field_matches = match record.get(probe.field).and_then(Value::render) {
                Some(text) => probe.pattern.is_match(&text),
                None => false,
            };
            field_matches && probe.filters.iter().all(|f| filter_matches(record, f))
        }))
    }
}

/// Evaluate one filter clause against a record.
///
/// A missing field satisfies nothing except `IsNull`; cross-type
/// comparisons are unordered and match nothing.
fn filter_matches(record: &StoredRecord, filter: &FieldFilter) -> bool {
    let field_value = record.get(&filter.field);
    let ord = || field_value.and_then(|v| v.compare(&filter.value));

    match filter.op {
        FilterOp::IsNull => matches!(field_value, None | Some(Value::Null)),
        FilterOp::IsNotNull => !matches!(field_value, None | Some(Value::Null)),
        FilterOp::Eq => ord().is_some_and(|o| o.is_eq()),
        FilterOp::Ne => ord().is_some_and(|o| o.is_ne()),
        FilterOp::Lt => ord().is_some_and(|o| o.is_lt()),
        FilterOp::Le => ord().is_some_and(|o| o.is_le()),
        FilterOp::Gt => ord().is_some_and(|o| o.is_gt()),
        FilterOp::Ge => ord().is_some_and(|o| o.is_ge()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternCompiler;

    fn probe<'a>(
        field: &'a str,
        pattern: &'a crate::pattern::CompiledPattern,
        filters: &'a [FieldFilter],
        exclude_id: Option<RecordId>,
    ) -> ExistsProbe<'a> {
        ExistsProbe {
            field,
            pattern,
            filters,
            exclude_id,
        }
    }

    #[test]
    fn test_exists_case_insensitive_exact() {
        let store = MemoryStore::new();
        store.insert("users", vec![("name", Value::from("John Doe"))]);

        let compiler = PatternCompiler::new();
        let pattern = compiler.compile(&Value::from("john doe")).unwrap();
        assert!(store
            .exists("users", &probe("name", &pattern, &[], None))
            .unwrap());

        let pattern = compiler.compile(&Value::from("John")).unwrap();
        assert!(!store
            .exists("users", &probe("name", &pattern, &[], None))
            .unwrap());
    }

    #[test]
    fn test_unknown_collection_is_not_found() {
        let store = MemoryStore::new();
        let pattern = PatternCompiler::new().compile(&Value::from("x")).unwrap();
        assert!(!store
            .exists("missing", &probe("name", &pattern, &[], None))
            .unwrap());
    }

    #[test]
    fn test_exclude_id_skips_only_that_record() {
        let store = MemoryStore::new();
        let id = store.insert("users", vec![("name", Value::from("John Doe"))]);

        let pattern = PatternCompiler::new()
            .compile(&Value::from("John Doe"))
            .unwrap();
        assert!(!store
            .exists("users", &probe("name", &pattern, &[], Some(id)))
            .unwrap());

        store.insert("users", vec![("name", Value::from("john doe"))]);
        assert!(store
            .exists("users", &probe("name", &pattern, &[], Some(id)))
            .unwrap());
    }

    #[test]
    fn test_filters_restrict_matches() {
        let store = MemoryStore::new();
        store.insert(
            "users",
            vec![
                ("name", Value::from("John Doe")),
                ("tenant", Value::from("acme")),
            ],
        );

        let pattern = PatternCompiler::new()
            .compile(&Value::from("John Doe"))
            .unwrap();

        let acme = [FieldFilter::eq("tenant", "acme")];
        assert!(store
            .exists("users", &probe("name", &pattern, &acme, None))
            .unwrap());

        let other = [FieldFilter::eq("tenant", "globex")];
        assert!(!store
            .exists("users", &probe("name", &pattern, &other, None))
            .unwrap());
    }

    #[test]
    fn test_null_filters() {
        let store = MemoryStore::new();
        store.insert("users", vec![("name", Value::from("John Doe"))]);

        let pattern = PatternCompiler::new()
            .compile(&Value::from("John Doe"))
            .unwrap();

        // Missing field counts as null.
        let is_null = [FieldFilter::new("deleted_at", FilterOp::IsNull, Value::Null)];
        assert!(store
            .exists("users", &probe("name", &pattern, &is_null, None))
            .unwrap());

        let not_null = [FieldFilter::new(
            "deleted_at",
            FilterOp::IsNotNull,
            Value::Null,
        )];
        assert!(!store
            .exists("users", &probe("name", &pattern, &not_null, None))
            .unwrap());
    }

    #[test]
    fn test_numeric_field_matches_rendered_form() {
        let store = MemoryStore::new();
        store.insert("users", vec![("age", Value::Int(42))]);

        let pattern = PatternCompiler::new().compile(&Value::Int(42)).unwrap();
        assert!(store
            .exists("users", &probe("age", &pattern, &[], None))
            .unwrap());
    }

    #[test]
    fn test_remove_and_len() {
        let store = MemoryStore::new();
        let id = store.insert("users", vec![("name", Value::from("a"))]);
        store.insert("users", vec![("name", Value::from("b"))]);
        assert_eq!(store.len("users"), 2);

        assert!(store.remove("users", id));
        assert!(!store.remove("users", id));
        assert_eq!(store.len("users"), 1);

        store.clear();
        assert!(store.is_empty("users"));
    }
}
