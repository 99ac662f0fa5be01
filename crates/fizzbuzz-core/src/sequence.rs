//! Sequence generation from divisor/word pairs.
//!
//! For every integer `i` in `1..=limit` the output is the concatenation, in
//! pair order, of every word whose divisor evenly divides `i`, or the
//! decimal string of `i` when no divisor matches.
//!
//! The function is total: a non-positive limit yields an empty sequence, a
//! zero divisor never matches, and unequal lists pair up to the shorter
//! one. Rejecting such inputs is the HTTP layer's job.

use fizzbuzz_types::{FizzBuzzParams, Sequence};

/// Largest `limit` a client may request.
pub const MAX_LIMIT: i64 = 100_000;

/// Upper bound on the entries reserved up front.
const MAX_PREALLOCATED: usize = 4096;

/// Generate the sequence for `(words, multiples, limit)`.
pub fn generate(words: &[String], multiples: &[i64], limit: i64) -> Sequence {
    let pairs: Vec<(i64, &str)> = multiples
        .iter()
        .copied()
        .zip(words.iter().map(String::as_str))
        .collect();

    let mut entries = Vec::with_capacity(initial_capacity(limit));
    for i in 1..=limit {
        entries.push(render(i, &pairs));
    }
    Sequence::new(entries)
}

/// Generate the sequence for a parameter set.
pub fn generate_for(params: &FizzBuzzParams) -> Sequence {
    generate(&params.words, &params.multiples, params.limit)
}

/// Entries to reserve for `limit`, never more than [`MAX_PREALLOCATED`].
fn initial_capacity(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0).min(MAX_PREALLOCATED)
}

/// Render one index.
fn render(i: i64, pairs: &[(i64, &str)]) -> String {
    let out: String = pairs
        .iter()
        .filter(|(divisor, _)| i.checked_rem(*divisor) == Some(0))
        .map(|(_, word)| *word)
        .collect();

    if out.is_empty() { i.to_string() } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(ws: &[&str]) -> Vec<String> {
        ws.iter().map(|w| (*w).to_owned()).collect()
    }

    #[test]
    fn classic_fizzbuzz() {
        let seq = generate(&words(&["Fizz", "Buzz"]), &[3, 5], 5);
        assert_eq!(seq.to_string(), "[1 2 Fizz 4 Buzz]");
    }

    #[test]
    fn fifteen_concatenates_in_pair_order() {
        let seq = generate(&words(&["Fizz", "Buzz"]), &[3, 5], 15);
        assert_eq!(seq.entries().last().map(String::as_str), Some("FizzBuzz"));

        let reversed = generate(&words(&["Buzz", "Fizz"]), &[5, 3], 15);
        assert_eq!(reversed.entries().last().map(String::as_str), Some("BuzzFizz"));
    }

    #[test]
    fn multiple_matches_concatenate() {
        let seq = generate(&words(&["Two", "Four"]), &[2, 4], 4);
        assert_eq!(seq.to_string(), "[1 Two 3 TwoFour]");
    }

    #[test]
    fn single_pair() {
        let seq = generate(&words(&["Even"]), &[2], 4);
        assert_eq!(seq.to_string(), "[1 Even 3 Even]");
    }

    #[test]
    fn empty_pairs_yield_integers() {
        let seq = generate(&[], &[], 3);
        assert_eq!(seq.to_string(), "[1 2 3]");
    }

    #[test]
    fn zero_limit_is_empty() {
        let seq = generate(&words(&["Fizz"]), &[3], 0);
        assert!(seq.is_empty());
        assert_eq!(seq.to_string(), "[]");
    }

    #[test]
    fn negative_limit_is_empty() {
        assert!(generate(&words(&["Fizz"]), &[3], -7).is_empty());
    }

    #[test]
    fn length_equals_limit() {
        assert_eq!(generate(&words(&["Fizz"]), &[3], 100).len(), 100);
    }

    #[test]
    fn reservation_is_capped() {
        assert_eq!(initial_capacity(i64::MAX), MAX_PREALLOCATED);
        assert_eq!(initial_capacity(MAX_LIMIT), MAX_PREALLOCATED);
        assert_eq!(initial_capacity(15), 15);
        assert_eq!(initial_capacity(-3), 0);
    }

    #[test]
    fn largest_allowed_limit_generates_fully() {
        let seq = generate(&words(&["Fizz", "Buzz"]), &[3, 5], MAX_LIMIT);
        assert_eq!(seq.len(), 100_000);
        assert_eq!(seq.entries().last().map(String::as_str), Some("FizzBuzz"));
    }

    #[test]
    fn zero_divisor_never_matches() {
        let seq = generate(&words(&["Zero", "Odd"]), &[0, 2], 3);
        assert_eq!(seq.to_string(), "[1 Odd 3]");
    }

    #[test]
    fn unequal_lists_pair_up_to_shorter() {
        let seq = generate(&words(&["Fizz"]), &[3, 5], 5);
        assert_eq!(seq.to_string(), "[1 2 Fizz 4 5]");
    }

    #[test]
    fn generate_for_matches_generate() {
        let params = FizzBuzzParams::new(words(&["Fizz", "Buzz"]), vec![3, 5], 15);
        assert_eq!(
            generate_for(&params),
            generate(&params.words, &params.multiples, params.limit)
        );
    }
}
