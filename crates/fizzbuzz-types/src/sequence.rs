//! The generated sequence and its response wrapper.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered per-index outputs of one FizzBuzz computation, from 1 to the limit.
///
/// Displays as the entries separated by single spaces inside square
/// brackets, e.g. `[1 2 Fizz 4 Buzz]`. An empty sequence displays as `[]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence(Vec<String>);

impl Sequence {
    /// Wrap a list of already-rendered entries.
    pub const fn new(entries: Vec<String>) -> Self {
        Self(entries)
    }

    /// The entries in order.
    pub fn entries(&self) -> &[String] {
        &self.0
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(" "))
    }
}

/// Body of a successful `POST /fizzbuzz` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FizzBuzzResponse {
    /// The rendered sequence, e.g. `[1 2 Fizz 4 Buzz]`.
    pub result: String,
}

impl From<&Sequence> for FizzBuzzResponse {
    fn from(sequence: &Sequence) -> Self {
        Self {
            result: sequence.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bracketed_and_space_separated() {
        let seq = Sequence::new(vec![
            String::from("1"),
            String::from("2"),
            String::from("Fizz"),
        ]);
        assert_eq!(seq.to_string(), "[1 2 Fizz]");
    }

    #[test]
    fn empty_displays_as_brackets() {
        assert_eq!(Sequence::default().to_string(), "[]");
    }

    #[test]
    fn response_wraps_rendered_sequence() {
        let seq = Sequence::new(vec![String::from("1"), String::from("Two")]);
        let json = serde_json::to_value(FizzBuzzResponse::from(&seq)).unwrap_or_default();
        assert_eq!(json, serde_json::json!({ "result": "[1 Two]" }));
    }
}
