//! Candidate normalization.

use veridb_types::{CandidateValue, Value};

/// Flatten a candidate input into the ordered list of scalars to look up.
///
/// A scalar becomes a one-element list; a list is checked per value in
/// order, duplicates included (aggregation semantics depend on every value
/// being checked); an empty list yields no lookups, which the aggregator
/// resolves per constraint kind. The constraint itself is passed through
/// to every lookup unchanged.
pub fn normalize(value: &CandidateValue) -> impl Iterator<Item = &Value> {
    value.as_slice().iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_yields_one_lookup() {
        let value = CandidateValue::from("john");
        assert_eq!(normalize(&value).count(), 1);
    }

    #[test]
    fn test_list_preserves_order_and_duplicates() {
        let value = CandidateValue::from(vec!["a", "b", "a"]);
        let scalars: Vec<_> = normalize(&value).collect();
        assert_eq!(
            scalars,
            vec![&Value::from("a"), &Value::from("b"), &Value::from("a")]
        );
    }

    #[test]
    fn test_empty_list_yields_nothing() {
        let value = CandidateValue::List(vec![]);
        assert_eq!(normalize(&value).count(), 0);
    }
}
