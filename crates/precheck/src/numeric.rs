//! Sign and range checks over the supported numeric widths.
//!
//! All checks are generic over [`Number`], so one comparison routine serves
//! every width rather than a hand-written body per type.
//!
//! Zero handling is deliberately asymmetric: zero PASSES the positive check
//! and FAILS the negative check.

use crate::error::{override_present, Error, Result};
use crate::number::Number;

/// Require that a number is positive, where zero counts as positive.
///
/// ```
/// use precheck::require_positive;
///
/// assert!(require_positive(0).is_ok());
/// assert!(require_positive(-1i64).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Precondition`] with the message
/// `"<Width> number must be positive but <value> was given"` when
/// `value < 0`.
pub fn require_positive<N: Number>(value: N) -> Result<N> {
    if value < N::ZERO {
        return Err(Error::precondition(format!(
            "{} number must be positive but {value} was given",
            N::LABEL
        )));
    }
    Ok(value)
}

/// Require a positive number, failing with a caller-supplied error instead.
///
/// # Errors
///
/// Returns [`Error::Absent`] when `error` is `None` (checked before the
/// subject), otherwise [`Error::Custom`] wrapping `error` when `value < 0`.
pub fn require_positive_or<N, E>(value: N, error: Option<E>) -> Result<N>
where
    N: Number,
    E: std::error::Error + Send + Sync + 'static,
{
    let error = override_present(error)?;
    if value < N::ZERO {
        return Err(Error::custom(error));
    }
    Ok(value)
}

/// Require that a number is negative. Zero is NOT negative.
///
/// # Errors
///
/// Returns [`Error::Precondition`] with the message
/// `"<Width> number must be negative but <value> was given"` when
/// `value >= 0`.
pub fn require_negative<N: Number>(value: N) -> Result<N> {
    if value < N::ZERO {
        return Ok(value);
    }
    Err(Error::precondition(format!(
        "{} number must be negative but {value} was given",
        N::LABEL
    )))
}

/// Require a negative number, failing with a caller-supplied error instead.
///
/// # Errors
///
/// Returns [`Error::Absent`] when `error` is `None`, otherwise
/// [`Error::Custom`] wrapping `error` when `value >= 0`.
pub fn require_negative_or<N, E>(value: N, error: Option<E>) -> Result<N>
where
    N: Number,
    E: std::error::Error + Send + Sync + 'static,
{
    let error = override_present(error)?;
    if value < N::ZERO {
        return Ok(value);
    }
    Err(Error::custom(error))
}

/// Require that `index >= from`. The lower bound is inclusive.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] with the message
/// `"Index <index> out-of-bounds for range from length <from>"` on
/// violation.
pub fn require_range_from<N: Number>(index: N, from: N) -> Result<N> {
    if index >= from {
        return Ok(index);
    }
    Err(Error::out_of_range(format!(
        "Index {index} out-of-bounds for range from length {from}"
    )))
}

/// Require `index >= from`, failing with a caller-supplied error instead.
///
/// # Errors
///
/// Returns [`Error::Absent`] when `error` is `None`, otherwise
/// [`Error::Custom`] wrapping `error` on violation.
pub fn require_range_from_or<N, E>(index: N, from: N, error: Option<E>) -> Result<N>
where
    N: Number,
    E: std::error::Error + Send + Sync + 'static,
{
    let error = override_present(error)?;
    if index >= from {
        return Ok(index);
    }
    Err(Error::custom(error))
}

/// Require that `index <= to`. The upper bound is inclusive.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] with the message
/// `"Index <index> out-of-bounds for range from length 0 to length <to>"`
/// on violation.
pub fn require_range_to<N: Number>(index: N, to: N) -> Result<N> {
    if index <= to {
        return Ok(index);
    }
    Err(Error::out_of_range(format!(
        "Index {index} out-of-bounds for range from length 0 to length {to}"
    )))
}

/// Require `index <= to`, failing with a caller-supplied error instead.
///
/// # Errors
///
/// Returns [`Error::Absent`] when `error` is `None`, otherwise
/// [`Error::Custom`] wrapping `error` on violation.
pub fn require_range_to_or<N, E>(index: N, to: N, error: Option<E>) -> Result<N>
where
    N: Number,
    E: std::error::Error + Send + Sync + 'static,
{
    let error = override_present(error)?;
    if index <= to {
        return Ok(index);
    }
    Err(Error::custom(error))
}

/// Require that `from <= index <= to`, inclusive on both ends.
///
/// Reversed bounds (`from > to`) are not specially guarded; the containment
/// check simply rejects every index.
///
/// ```
/// use precheck::require_range;
///
/// assert!(require_range(5, 0, 10).is_ok());
/// assert!(require_range(10, 0, 10).is_ok());
/// assert!(require_range(11, 0, 10).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] with the message
/// `"Index <index> out-of-bounds for range from length <from> to length
/// <to>"` on violation.
pub fn require_range<N: Number>(index: N, from: N, to: N) -> Result<N> {
    if (from..=to).contains(&index) {
        return Ok(index);
    }
    Err(Error::out_of_range(format!(
        "Index {index} out-of-bounds for range from length {from} to length {to}"
    )))
}

/// Require `from <= index <= to`, failing with a caller-supplied error
/// instead.
///
/// # Errors
///
/// Returns [`Error::Absent`] when `error` is `None`, otherwise
/// [`Error::Custom`] wrapping `error` on violation.
pub fn require_range_or<N, E>(index: N, from: N, to: N, error: Option<E>) -> Result<N>
where
    N: Number,
    E: std::error::Error + Send + Sync + 'static,
{
    let error = override_present(error)?;
    if (from..=to).contains(&index) {
        return Ok(index);
    }
    Err(Error::custom(error))
}
