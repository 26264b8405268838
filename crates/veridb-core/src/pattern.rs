//! Case-insensitive exact-match pattern compilation.
//!
//! Each candidate scalar is compiled into an escaped, anchored,
//! case-insensitive regex so the candidate is matched literally and in
//! full: `.` `*` `+` and friends never act as wildcards, and substrings
//! never match. Case-insensitivity lives in the pattern itself rather than
//! in any transformation of the input, which sidesteps locale and encoding
//! pitfalls on the data path.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use veridb_types::Value;

/// Default compiled-size budget, in bytes.
///
/// Generous enough for any realistic field value while still bounding what
/// an adversarial candidate can make the regex engine allocate.
pub const DEFAULT_SIZE_LIMIT: usize = 1 << 20;

/// Errors from compiling a candidate into a pattern.
///
/// These are recovered fail-closed by the verifier, never propagated as a
/// top-level fault: a candidate that cannot be compiled must never confirm
/// uniqueness and must never confirm existence.
#[derive(Debug, Error, Clone)]
pub enum PatternError {
    /// The candidate has no textual form (null).
    #[error("candidate has no textual form")]
    NotText,

    /// The escaped pattern failed to build (e.g. exceeds the size limit).
    #[error("pattern compilation failed: {0}")]
    Build(#[from] regex::Error),
}

/// Compiles candidate scalars into exact-match patterns.
#[derive(Debug, Clone)]
pub struct PatternCompiler {
    size_limit: usize,
}

impl Default for PatternCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCompiler {
    /// Create a compiler with the default size limit.
    pub fn new() -> Self {
        Self {
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }

    /// Override the compiled-size budget.
    pub fn with_size_limit(size_limit: usize) -> Self {
        Self { size_limit }
    }

    /// Compile one candidate scalar into a validated exact-match pattern.
    pub fn compile(&self, candidate: &Value) -> Result<CompiledPattern, PatternError> {
        let literal = candidate.render().ok_or(PatternError::NotText)?;

        // Escape first, then anchor: the candidate contributes no syntax.
        let source = format!("^{}$", regex::escape(&literal));
        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .size_limit(self.size_limit)
            .build()?;

        Ok(CompiledPattern { regex })
    }
}

/// A validated, escaped, anchored, case-insensitive pattern derived from
/// one candidate. Created per candidate and consumed immediately by the
/// probe; never persisted.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    /// Check a stored textual value against the pattern.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The pattern source, for diagnostics.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(s: &str) -> CompiledPattern {
        PatternCompiler::new().compile(&Value::from(s)).unwrap()
    }

    #[test]
    fn test_exact_case_insensitive_match() {
        let pattern = compile("John Doe");
        assert!(pattern.is_match("John Doe"));
        assert!(pattern.is_match("john doe"));
        assert!(pattern.is_match("JOHN DOE"));
    }

    #[test]
    fn test_no_substring_match() {
        let pattern = compile("John");
        assert!(!pattern.is_match("John Doe"));

        let pattern = compile("John Doe");
        assert!(!pattern.is_match("John"));
        assert!(!pattern.is_match("xJohn Doex"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let pattern = compile("johnny.cash+200@gmail.com");
        assert!(pattern.is_match("johnny.cash+200@gmail.com"));
        // `.` must not act as a wildcard, `+` must not repeat.
        assert!(!pattern.is_match("johnnyxcash+200@gmail.com"));
        assert!(!pattern.is_match("johnny.cash+2000@gmail.com"));
        assert!(!pattern.is_match("johnny.cash+20@gmail.com"));

        let pattern = compile("a*");
        assert!(pattern.is_match("A*"));
        assert!(!pattern.is_match("aaa"));
        assert!(!pattern.is_match("a"));
    }

    #[test]
    fn test_unbalanced_metacharacters_compile_literally() {
        let pattern = compile("(invalid regex{");
        assert!(pattern.is_match("(Invalid Regex{"));
        assert!(!pattern.is_match("invalid regex"));
    }

    #[test]
    fn test_numeric_candidate() {
        let pattern = PatternCompiler::new().compile(&Value::Int(42)).unwrap();
        assert!(pattern.is_match("42"));
        assert!(!pattern.is_match("142"));
    }

    #[test]
    fn test_null_candidate_fails() {
        let err = PatternCompiler::new().compile(&Value::Null).unwrap_err();
        assert!(matches!(err, PatternError::NotText));
    }

    #[test]
    fn test_empty_string_matches_only_empty() {
        let pattern = compile("");
        assert!(pattern.is_match(""));
        assert!(!pattern.is_match("x"));
    }

    #[test]
    fn test_size_limit_is_fail_closed() {
        let compiler = PatternCompiler::with_size_limit(8);
        let err = compiler
            .compile(&Value::from("a value far too large for the budget"))
            .unwrap_err();
        assert!(matches!(err, PatternError::Build(_)));
    }
}
