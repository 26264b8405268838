//! Candidate inputs: a single scalar or an ordered list of scalars.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// The value under validation: one scalar or an ordered list of scalars.
///
/// Hosts that bind request input dynamically should map arrays to `List`
/// and everything else to `Scalar`; the engine branches on the tag, never
/// on runtime type inspection. An empty list means "no candidates": it
/// trivially satisfies `Unique` and vacuously satisfies `Exists` (the
/// host's own required-field rule decides whether emptiness is allowed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CandidateValue {
    /// A single scalar candidate.
    Scalar(Value),
    /// An ordered list of scalar candidates. Duplicates are checked
    /// independently, in order.
    List(Vec<Value>),
}

impl CandidateValue {
    /// The candidates as an ordered slice.
    pub fn as_slice(&self) -> &[Value] {
        match self {
            CandidateValue::Scalar(v) => std::slice::from_ref(v),
            CandidateValue::List(vs) => vs,
        }
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Check if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<Value> for CandidateValue {
    fn from(v: Value) -> Self {
        CandidateValue::Scalar(v)
    }
}

impl From<Vec<Value>> for CandidateValue {
    fn from(vs: Vec<Value>) -> Self {
        CandidateValue::List(vs)
    }
}

impl From<&str> for CandidateValue {
    fn from(s: &str) -> Self {
        CandidateValue::Scalar(Value::from(s))
    }
}

impl From<Vec<&str>> for CandidateValue {
    fn from(vs: Vec<&str>) -> Self {
        CandidateValue::List(vs.into_iter().map(Value::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_is_one_candidate() {
        let c = CandidateValue::from("john");
        assert_eq!(c.len(), 1);
        assert_eq!(c.as_slice(), &[Value::from("john")]);
    }

    #[test]
    fn test_list_preserves_order_and_duplicates() {
        let c = CandidateValue::from(vec!["a", "b", "a"]);
        assert_eq!(c.len(), 3);
        assert_eq!(c.as_slice()[2], Value::from("a"));
    }

    #[test]
    fn test_empty_list() {
        let c = CandidateValue::List(vec![]);
        assert!(c.is_empty());
    }
}
