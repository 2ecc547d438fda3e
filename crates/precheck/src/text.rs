//! Blank-string and prefix/suffix checks.

use crate::error::{override_present, Error, Result};

/// Require that a string is not blank.
///
/// Only the exact empty string fails; a string of whitespace counts as
/// non-blank. Callers that want to reject whitespace-only input should trim
/// before checking.
///
/// # Errors
///
/// Returns [`Error::Precondition`] with the message
/// `"String must not be blank"` when `value` is empty.
pub fn require_non_blank(value: &str) -> Result<&str> {
    if value.is_empty() {
        return Err(Error::precondition("String must not be blank"));
    }
    Ok(value)
}

/// Require a non-blank string, failing with a caller-supplied error instead.
///
/// # Errors
///
/// Returns [`Error::Absent`] when `error` is `None` (checked before the
/// subject), otherwise [`Error::Custom`] wrapping `error` when `value` is
/// empty.
pub fn require_non_blank_or<'a, E>(value: &'a str, error: Option<E>) -> Result<&'a str>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let error = override_present(error)?;
    if value.is_empty() {
        return Err(Error::custom(error));
    }
    Ok(value)
}

/// Require that a string is not empty.
///
/// Same semantics as [`require_non_blank`]: only the exact empty string
/// fails.
///
/// # Errors
///
/// Returns [`Error::Precondition`] when `value` is empty.
pub fn require_non_empty_str(value: &str) -> Result<&str> {
    require_non_blank(value)
}

/// Require a non-empty string, failing with a caller-supplied error instead.
///
/// # Errors
///
/// Returns [`Error::Absent`] when `error` is `None`, otherwise
/// [`Error::Custom`] wrapping `error` when `value` is empty.
pub fn require_non_empty_str_or<'a, E>(value: &'a str, error: Option<E>) -> Result<&'a str>
where
    E: std::error::Error + Send + Sync + 'static,
{
    require_non_blank_or(value, error)
}

/// Require that `sequence` starts with `prefix`.
///
/// # Errors
///
/// Returns [`Error::Precondition`] when it does not.
pub fn require_starts_with<'a>(sequence: &'a str, prefix: &str) -> Result<&'a str> {
    if sequence.starts_with(prefix) {
        return Ok(sequence);
    }
    Err(Error::precondition(format!(
        "Sequence must start with '{prefix}' but '{sequence}' was given"
    )))
}

/// Require that `sequence` starts with `prefix` at a zero-based byte offset.
///
/// An offset past the end of the sequence, or one that falls inside a UTF-8
/// character, fails the check rather than panicking.
///
/// ```
/// use precheck::require_starts_with_at;
///
/// assert!(require_starts_with_at(" test sequence", "test", 1).is_ok());
/// assert!(require_starts_with_at(" test sequence", "test", 0).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Precondition`] when the prefix does not begin at
/// `offset`.
pub fn require_starts_with_at<'a>(
    sequence: &'a str,
    prefix: &str,
    offset: usize,
) -> Result<&'a str> {
    let matched = sequence
        .get(offset..)
        .is_some_and(|tail| tail.starts_with(prefix));
    if matched {
        return Ok(sequence);
    }
    Err(Error::precondition(format!(
        "Sequence must start with '{prefix}' at index {offset} but '{sequence}' was given"
    )))
}

/// Require a prefix match, failing with a caller-supplied error instead.
///
/// # Errors
///
/// Returns [`Error::Absent`] when `error` is `None`, otherwise
/// [`Error::Custom`] wrapping `error` on mismatch.
pub fn require_starts_with_or<'a, E>(
    sequence: &'a str,
    prefix: &str,
    error: Option<E>,
) -> Result<&'a str>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let error = override_present(error)?;
    if sequence.starts_with(prefix) {
        return Ok(sequence);
    }
    Err(Error::custom(error))
}

/// Require a prefix match at an offset, failing with a caller-supplied error
/// instead.
///
/// # Errors
///
/// Returns [`Error::Absent`] when `error` is `None`, otherwise
/// [`Error::Custom`] wrapping `error` on mismatch.
pub fn require_starts_with_at_or<'a, E>(
    sequence: &'a str,
    prefix: &str,
    offset: usize,
    error: Option<E>,
) -> Result<&'a str>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let error = override_present(error)?;
    let matched = sequence
        .get(offset..)
        .is_some_and(|tail| tail.starts_with(prefix));
    if matched {
        return Ok(sequence);
    }
    Err(Error::custom(error))
}

/// Require that `sequence` ends with `suffix`.
///
/// # Errors
///
/// Returns [`Error::Precondition`] when it does not.
pub fn require_ends_with<'a>(sequence: &'a str, suffix: &str) -> Result<&'a str> {
    if sequence.ends_with(suffix) {
        return Ok(sequence);
    }
    Err(Error::precondition(format!(
        "Sequence must end with '{suffix}' but '{sequence}' was given"
    )))
}

/// Require a suffix match, failing with a caller-supplied error instead.
///
/// # Errors
///
/// Returns [`Error::Absent`] when `error` is `None`, otherwise
/// [`Error::Custom`] wrapping `error` on mismatch.
pub fn require_ends_with_or<'a, E>(
    sequence: &'a str,
    suffix: &str,
    error: Option<E>,
) -> Result<&'a str>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let error = override_present(error)?;
    if sequence.ends_with(suffix) {
        return Ok(sequence);
    }
    Err(Error::custom(error))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_non_blank_passes_content_through() {
        assert!(matches!(require_non_blank("session"), Ok("session")));
    }

    #[test]
    fn test_non_blank_rejects_empty_with_message() {
        let err = require_non_blank("").expect_err("empty string must fail");
        assert_eq!(err.to_string(), "String must not be blank");
        assert_eq!(err.kind(), ErrorKind::Precondition);
    }

    #[test]
    fn test_non_blank_accepts_whitespace_only() {
        // Narrow definition of blank: only the exact empty string fails.
        assert!(require_non_blank("   ").is_ok());
        assert!(require_non_blank("\t\n").is_ok());
    }

    #[test]
    fn test_non_blank_or_checks_override_first() {
        let result = require_non_blank_or("", None::<std::io::Error>);
        assert!(matches!(result, Err(Error::Absent)));
    }

    #[test]
    fn test_non_blank_or_raises_the_override() {
        let override_err = std::io::Error::other("name required");
        let err =
            require_non_blank_or("", Some(override_err)).expect_err("empty string must fail");
        assert_eq!(err.to_string(), "name required");
    }

    #[test]
    fn test_non_empty_str_matches_non_blank() {
        assert!(require_non_empty_str("x").is_ok());
        let err = require_non_empty_str("").expect_err("empty string must fail");
        assert_eq!(err.to_string(), "String must not be blank");
    }

    #[test]
    fn test_starts_with_at_honours_offset() {
        assert!(require_starts_with_at(" test sequence", "test", 1).is_ok());
        assert!(require_starts_with_at(" test sequence", "test", 0).is_err());
    }

    #[test]
    fn test_starts_with_is_the_zero_offset_case() {
        assert!(require_starts_with("test sequence", "test").is_ok());
        assert!(require_starts_with(" test sequence", "test").is_err());
    }

    #[test]
    fn test_starts_with_message_formats() {
        let err = require_starts_with("abc", "xyz").expect_err("mismatch must fail");
        assert_eq!(
            err.to_string(),
            "Sequence must start with 'xyz' but 'abc' was given"
        );

        let err = require_starts_with_at("abc", "xyz", 2).expect_err("mismatch must fail");
        assert_eq!(
            err.to_string(),
            "Sequence must start with 'xyz' at index 2 but 'abc' was given"
        );
    }

    #[test]
    fn test_starts_with_at_rejects_offset_past_end() {
        assert!(require_starts_with_at("ab", "a", 3).is_err());
    }

    #[test]
    fn test_starts_with_at_rejects_non_char_boundary() {
        // Offset 1 lands inside the two-byte 'é'.
        assert!(require_starts_with_at("été", "t", 1).is_err());
    }

    #[test]
    fn test_ends_with() {
        assert!(require_ends_with("report.json", ".json").is_ok());
        let err = require_ends_with("report.json", ".yaml").expect_err("mismatch must fail");
        assert_eq!(
            err.to_string(),
            "Sequence must end with '.yaml' but 'report.json' was given"
        );
    }

    #[test]
    fn test_ends_with_or_checks_override_first() {
        // Suffix matches, but the absent override still fails.
        let result = require_ends_with_or("a.json", ".json", None::<std::io::Error>);
        assert!(matches!(result, Err(Error::Absent)));
    }
}
