//! Binding and validation of `POST /fizzbuzz` parameters.
//!
//! Parameters come from the query string when any of `multiples`, `words`
//! or `limit` is present there:
//!
//! ```text
//! POST /fizzbuzz?multiples=3,5&words=Fizz,Buzz&limit=15
//! ```
//!
//! Otherwise the body is read as JSON:
//!
//! ```text
//! {"multiples": [3, 5], "words": ["Fizz", "Buzz"], "limit": 15}
//! ```
//!
//! Either way the result is a [`FizzBuzzRequest`] which is validated before
//! it reaches the service.

use std::borrow::Cow;

use fizzbuzz_core::MAX_LIMIT;
use fizzbuzz_types::FizzBuzzParams;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::ApiError;

/// Message for missing lists or a non-positive limit.
pub const MSG_REQUIRED: &str = "params multiples, words and limit are required and must be valid";

/// Message for lists of different lengths.
pub const MSG_LENGTH_MISMATCH: &str = "multiples and words arrays must have the same length";

/// Message for a zero or negative divisor.
pub const MSG_NON_POSITIVE_MULTIPLE: &str = "multiples must be positive integers";

/// Message for a limit above [`MAX_LIMIT`].
pub const MSG_LIMIT_TOO_LARGE: &str = "limit must not exceed 100000";

/// Message for an empty or whitespace-only word.
pub const MSG_BLANK_WORD: &str = "words must not be blank";

/// Raw query string parameters. Lists are comma-separated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FizzBuzzQuery {
    /// Comma-separated divisors, e.g. `3,5`.
    pub multiples: Option<String>,
    /// Comma-separated words, e.g. `Fizz,Buzz`.
    pub words: Option<String>,
    /// Upper bound, e.g. `15`.
    pub limit: Option<String>,
}

impl FizzBuzzQuery {
    /// Whether the client supplied any parameter in the query string.
    pub const fn is_present(&self) -> bool {
        self.multiples.is_some() || self.words.is_some() || self.limit.is_some()
    }

    /// Parse the comma-separated lists and the limit.
    ///
    /// Empty list segments are skipped and segments are trimmed. A missing
    /// or empty limit becomes `0`, which then fails validation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidParams`] if a divisor or the limit is not
    /// an integer.
    pub fn into_request(self) -> Result<FizzBuzzRequest, ApiError> {
        let multiples = split_list(self.multiples.as_deref())
            .map(|m| {
                m.parse::<i64>()
                    .map_err(|_parse_err| ApiError::InvalidParams(String::from("invalid multiple value")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let words = split_list(self.words.as_deref())
            .map(str::to_owned)
            .collect();

        let limit = match self.limit.as_deref().map(str::trim) {
            None | Some("") => 0,
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_parse_err| ApiError::InvalidParams(String::from("invalid limit value")))?,
        };

        Ok(FizzBuzzRequest {
            multiples,
            words,
            limit,
        })
    }
}

/// Split a comma-separated list, trimming and dropping empty segments.
fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Bound request parameters, before validation.
///
/// Missing JSON fields default to empty lists and a zero limit so that they
/// are reported by validation rather than as deserialization errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[validate(schema(function = "validate_pairs", skip_on_field_errors = true))]
pub struct FizzBuzzRequest {
    /// Divisors, paired positionally with `words`.
    #[serde(default)]
    #[validate(length(
        min = 1,
        message = "params multiples, words and limit are required and must be valid"
    ))]
    pub multiples: Vec<i64>,

    /// Replacement words, paired positionally with `multiples`.
    #[serde(default)]
    #[validate(length(
        min = 1,
        message = "params multiples, words and limit are required and must be valid"
    ))]
    pub words: Vec<String>,

    /// Inclusive upper bound, from 1 to [`MAX_LIMIT`].
    #[serde(default)]
    #[validate(range(
        min = 1,
        message = "params multiples, words and limit are required and must be valid"
    ))]
    pub limit: i64,
}

impl FizzBuzzRequest {
    /// Convert into the service's parameter type.
    pub fn into_params(self) -> FizzBuzzParams {
        FizzBuzzParams::new(self.words, self.multiples, self.limit)
    }
}

/// Cross-field checks, run only when every field check passed.
fn validate_pairs(req: &FizzBuzzRequest) -> Result<(), ValidationError> {
    if req.limit > MAX_LIMIT {
        return Err(error_with("limit_too_large", MSG_LIMIT_TOO_LARGE));
    }
    if req.multiples.len() != req.words.len() {
        return Err(error_with("length_mismatch", MSG_LENGTH_MISMATCH));
    }
    if req.multiples.iter().any(|m| *m <= 0) {
        return Err(error_with("non_positive_multiple", MSG_NON_POSITIVE_MULTIPLE));
    }
    if req.words.iter().any(|w| w.trim().is_empty()) {
        return Err(error_with("blank_word", MSG_BLANK_WORD));
    }
    Ok(())
}

fn error_with(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Pick one human-readable message out of a validation failure.
fn first_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_values()
        .flat_map(|errs| errs.iter())
        .filter_map(|e| e.message.as_ref().map(ToString::to_string))
        .collect();
    messages.sort();
    messages
        .into_iter()
        .next()
        .unwrap_or_else(|| MSG_REQUIRED.to_owned())
}

/// Bind parameters from the query string or, if it carries none, from the
/// JSON body, then validate them.
///
/// # Errors
///
/// Returns [`ApiError::InvalidParams`] with a client-facing message if
/// binding or validation fails.
pub fn bind(query: FizzBuzzQuery, body: &[u8]) -> Result<FizzBuzzParams, ApiError> {
    let request = if query.is_present() || body.iter().all(u8::is_ascii_whitespace) {
        query.into_request()?
    } else {
        serde_json::from_slice::<FizzBuzzRequest>(body)
            .map_err(|e| ApiError::InvalidParams(format!("invalid JSON body: {e}")))?
    };

    request
        .validate()
        .map_err(|e| ApiError::InvalidParams(first_message(&e)))?;

    Ok(request.into_params())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(multiples: Option<&str>, words: Option<&str>, limit: Option<&str>) -> FizzBuzzQuery {
        FizzBuzzQuery {
            multiples: multiples.map(str::to_owned),
            words: words.map(str::to_owned),
            limit: limit.map(str::to_owned),
        }
    }

    fn message(result: Result<FizzBuzzParams, ApiError>) -> String {
        result.err().map(|e| e.to_string()).unwrap_or_default()
    }

    #[test]
    fn binds_from_query() {
        let params = bind(query(Some("3,5"), Some("Fizz,Buzz"), Some("15")), b"").ok();
        assert_eq!(
            params,
            Some(FizzBuzzParams::new(
                vec![String::from("Fizz"), String::from("Buzz")],
                vec![3, 5],
                15
            ))
        );
    }

    #[test]
    fn query_segments_are_trimmed_and_empties_skipped() {
        let params = bind(query(Some(" 3, ,5,"), Some("Fizz , Buzz"), Some(" 15 ")), b"").ok();
        assert_eq!(params.as_ref().map(|p| p.multiples.clone()), Some(vec![3, 5]));
        assert_eq!(
            params.map(|p| p.words),
            Some(vec![String::from("Fizz"), String::from("Buzz")])
        );
    }

    #[test]
    fn binds_from_json_body() {
        let body = br#"{"multiples": [2, 4], "words": ["Two", "Four"], "limit": 4}"#;
        let params = bind(FizzBuzzQuery::default(), body).ok();
        assert_eq!(params.map(|p| p.limit), Some(4));
    }

    #[test]
    fn query_takes_precedence_over_body() {
        let body = br#"{"multiples": [2], "words": ["Two"], "limit": 4}"#;
        let params = bind(query(Some("3"), Some("Fizz"), Some("9")), body).ok();
        assert_eq!(params.map(|p| p.limit), Some(9));
    }

    #[test]
    fn non_integer_multiple_is_rejected() {
        let result = bind(query(Some("3,x"), Some("Fizz,Buzz"), Some("15")), b"");
        assert_eq!(message(result), "invalid multiple value");
    }

    #[test]
    fn non_integer_limit_is_rejected() {
        let result = bind(query(Some("3"), Some("Fizz"), Some("ten")), b"");
        assert_eq!(message(result), "invalid limit value");
    }

    #[test]
    fn zero_limit_is_rejected() {
        let result = bind(query(Some("3,5"), Some("Fizz,Buzz"), Some("0")), b"");
        assert_eq!(message(result), MSG_REQUIRED);
    }

    #[test]
    fn limit_above_maximum_is_rejected() {
        let result = bind(query(Some("3"), Some("Fizz"), Some("9223372036854775807")), b"");
        assert_eq!(message(result), MSG_LIMIT_TOO_LARGE);

        let body = br#"{"multiples": [3], "words": ["Fizz"], "limit": 100001}"#;
        assert_eq!(message(bind(FizzBuzzQuery::default(), body)), MSG_LIMIT_TOO_LARGE);
    }

    #[test]
    fn limit_at_maximum_is_accepted() {
        let params = bind(query(Some("3"), Some("Fizz"), Some("100000")), b"").ok();
        assert_eq!(params.map(|p| p.limit), Some(MAX_LIMIT));
    }

    #[test]
    fn limit_message_names_the_maximum() {
        assert!(MSG_LIMIT_TOO_LARGE.ends_with(&MAX_LIMIT.to_string()));
    }

    #[test]
    fn missing_limit_is_rejected() {
        let result = bind(query(Some("3"), Some("Fizz"), None), b"");
        assert_eq!(message(result), MSG_REQUIRED);
    }

    #[test]
    fn empty_lists_are_rejected() {
        let result = bind(query(Some(""), Some(""), Some("10")), b"");
        assert_eq!(message(result), MSG_REQUIRED);
    }

    #[test]
    fn nothing_at_all_is_rejected() {
        let result = bind(FizzBuzzQuery::default(), b"   ");
        assert_eq!(message(result), MSG_REQUIRED);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let result = bind(query(Some("3,5"), Some("Fizz"), Some("5")), b"");
        assert_eq!(message(result), MSG_LENGTH_MISMATCH);
    }

    #[test]
    fn non_positive_multiple_is_rejected() {
        let result = bind(query(Some("3,0"), Some("Fizz,Zero"), Some("5")), b"");
        assert_eq!(message(result), MSG_NON_POSITIVE_MULTIPLE);

        let body = br#"{"multiples": [-2], "words": ["Neg"], "limit": 4}"#;
        assert_eq!(message(bind(FizzBuzzQuery::default(), body)), MSG_NON_POSITIVE_MULTIPLE);
    }

    #[test]
    fn blank_json_word_is_rejected() {
        let body = br#"{"multiples": [3], "words": ["  "], "limit": 4}"#;
        assert_eq!(message(bind(FizzBuzzQuery::default(), body)), MSG_BLANK_WORD);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = bind(FizzBuzzQuery::default(), b"{not json");
        assert!(message(result).starts_with("invalid JSON body"));
    }

    #[test]
    fn missing_json_fields_fail_validation() {
        let result = bind(FizzBuzzQuery::default(), br#"{"limit": 4}"#);
        assert_eq!(message(result), MSG_REQUIRED);
    }
}
