//! The verification pipeline.
//!
//! Normalizer → (per candidate) pattern compiler → existence probe →
//! aggregator. The pieces are:
//! - [`normalize`] - scalar/list candidates into an ordered lookup list
//! - [`Verifier`] - the engine façade issuing one probe per candidate
//! - [`aggregate`](aggregate::aggregate) - per-candidate results into one outcome

mod aggregate;
mod normalize;
mod result;
mod verifier;

pub use aggregate::aggregate;
pub use normalize::normalize;
pub use result::{Diagnostic, LookupResult, ValidationOutcome};
pub use verifier::Verifier;
