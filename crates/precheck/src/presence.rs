//! Absence checks over `Option`.
//!
//! The Rust rendition of a non-null guard: nullable subjects are modeled as
//! `Option`, and `require_some` composes with the other checks via
//! `and_then`, which keeps absence checked before any content check.

use crate::error::{override_present, Error, Result};

/// Require that an optional value is present.
///
/// Returns the contained value unchanged so call sites can chain validation
/// inline:
///
/// ```
/// use precheck::{require_non_blank, require_some};
///
/// let name = require_some(Some("worker-1"))
///     .and_then(require_non_blank)?;
/// assert_eq!(name, "worker-1");
/// # Ok::<(), precheck::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::Absent`] when `value` is `None`.
pub fn require_some<T>(value: Option<T>) -> Result<T> {
    value.ok_or_else(Error::absent)
}

/// Require presence, failing with a caller-supplied error instead.
///
/// The override error itself is validated first: if `error` is `None`, this
/// fails with [`Error::Absent`] even when `value` is present.
///
/// # Errors
///
/// Returns [`Error::Absent`] when `error` is `None`, otherwise
/// [`Error::Custom`] wrapping `error` when `value` is `None`.
pub fn require_some_or<T, E>(value: Option<T>, error: Option<E>) -> Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let error = override_present(error)?;
    value.ok_or_else(|| Error::custom(error))
}
