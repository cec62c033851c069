//! Per-run accumulation.
//!
//! [`RunState`] owns everything a run collects: the category buckets and the
//! error log. It starts empty, is threaded through the pipeline stages by
//! value, and can be reset for another run in the same process.

use serde::{Deserialize, Serialize};

use crate::classify::Value;
use crate::error::LinesortError;

/// Classified values, in input order across all files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Buckets {
    pub integers: Vec<i64>,
    pub floats: Vec<f64>,
    pub strings: Vec<String>,
    /// Character count of each entry in `strings`, same order
    pub string_lengths: Vec<usize>,
}

impl Buckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to the bucket for its category.
    pub fn push(&mut self, value: Value) {
        match value {
            Value::Integer(n) => self.integers.push(n),
            Value::Float(x) => self.floats.push(x),
            Value::Text(s) => {
                self.string_lengths.push(s.chars().count());
                self.strings.push(s);
            }
        }
    }

    /// Total number of classified values.
    pub fn len(&self) -> usize {
        self.integers.len() + self.floats.len() + self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.integers.clear();
        self.floats.clear();
        self.strings.clear();
        self.string_lengths.clear();
    }
}

/// Mutable state of a single run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub buckets: Buckets,
    /// Messages for every file or line that could not be used
    pub errors: Vec<String>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error and return its message.
    pub fn record_error(&mut self, err: &LinesortError) -> &str {
        self.errors.push(err.to_string());
        self.errors.last().map(String::as_str).unwrap_or_default()
    }

    /// Drop everything collected so far.
    pub fn reset(&mut self) {
        self.buckets.clear();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_push_routes_by_category() {
        let mut buckets = Buckets::new();
        buckets.push(Value::Integer(42));
        buckets.push(Value::Float(0.5));
        buckets.push(Value::Text("hello".to_string()));
        buckets.push(Value::Integer(-7));

        assert_eq!(buckets.integers, vec![42, -7]);
        assert_eq!(buckets.floats, vec![0.5]);
        assert_eq!(buckets.strings, vec!["hello".to_string()]);
        assert_eq!(buckets.string_lengths, vec![5]);
        assert_eq!(buckets.len(), 4);
    }

    #[test]
    fn test_string_length_counts_chars() {
        let mut buckets = Buckets::new();
        buckets.push(Value::Text("héllo wörld".to_string()));
        assert_eq!(buckets.string_lengths, vec![11]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut buckets = Buckets::new();
        buckets.push(Value::Integer(1));
        buckets.push(Value::Integer(1));
        assert_eq!(buckets.integers, vec![1, 1]);
    }

    #[test]
    fn test_record_error() {
        let mut state = RunState::new();
        let msg = state
            .record_error(&LinesortError::FileMissing(PathBuf::from("gone.txt")))
            .to_string();
        assert_eq!(msg, "Error: File gone.txt does not exist.");
        assert_eq!(state.errors, vec![msg]);
    }

    #[test]
    fn test_reset() {
        let mut state = RunState::new();
        state.buckets.push(Value::Integer(1));
        state.buckets.push(Value::Text("x".to_string()));
        state.record_error(&LinesortError::NoInputFiles);

        state.reset();
        assert_eq!(state, RunState::new());
        assert!(state.buckets.is_empty());
    }
}
