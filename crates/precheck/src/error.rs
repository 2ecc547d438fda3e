//! Error types for precondition checks.
//!
//! Failures are categorized by what went wrong with the argument:
//!
//! - **Absent**: a required value (or a caller-supplied override error) was `None`
//! - **Precondition**: blank string, wrong sign, prefix/suffix mismatch
//! - **EmptyContainer**: a list/map/set/array with zero elements
//! - **OutOfRange**: an index outside its inclusive bounds
//! - **Custom**: a caller-supplied error raised in place of the default

use std::fmt;

use thiserror::Error as ThisError;

/// Result type alias for precondition checks.
pub type Result<T> = std::result::Result<T, Error>;

/// Container kinds named in empty-container diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// Ordered sequences: slices, `Vec`
    List,
    /// Key-value mappings: `HashMap`, `BTreeMap`
    Map,
    /// Sets: `HashSet`, `BTreeSet`
    Set,
    /// Fixed-size arrays
    Array,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "List"),
            Self::Map => write!(f, "Map"),
            Self::Set => write!(f, "Set"),
            Self::Array => write!(f, "Array"),
        }
    }
}

/// Discriminant for matching on a failure category without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required value was `None`
    Absent,
    /// General precondition violation
    Precondition,
    /// Container had zero elements
    EmptyContainer,
    /// Index outside its inclusive bounds
    OutOfRange,
    /// Caller-supplied override error
    Custom,
}

/// Error type for precondition violations.
///
/// Every check in this crate fails with exactly one of these variants.
/// The `Custom` variant carries a caller-supplied error raised verbatim in
/// place of the library default (see the `*_or` check variants).
#[derive(Debug, ThisError)]
pub enum Error {
    /// A required value (subject or override error) was absent.
    #[error("Required value must not be absent")]
    Absent,

    /// A general precondition was violated; carries the full diagnostic.
    #[error("{0}")]
    Precondition(String),

    /// A container had zero elements.
    #[error("{0} must contain at least one or more elements")]
    EmptyContainer(ContainerKind),

    /// An index fell outside its inclusive bounds.
    #[error("{0}")]
    OutOfRange(String),

    /// A caller-supplied error, displayed verbatim.
    #[error("{0}")]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Create an absent-value error.
    #[must_use]
    pub fn absent() -> Self {
        tracing::trace!("precondition violated: required value was absent");
        Self::Absent
    }

    /// Create a general precondition error with a formatted diagnostic.
    #[must_use]
    pub fn precondition(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::trace!("precondition violated: {msg}");
        Self::Precondition(msg)
    }

    /// Create an empty-container error for the given container kind.
    #[must_use]
    pub fn empty(kind: ContainerKind) -> Self {
        tracing::trace!("precondition violated: empty {kind}");
        Self::EmptyContainer(kind)
    }

    /// Create an out-of-range error with a formatted diagnostic.
    #[must_use]
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::trace!("precondition violated: {msg}");
        Self::OutOfRange(msg)
    }

    /// Wrap a caller-supplied override error.
    #[must_use]
    pub fn custom<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        tracing::trace!("precondition violated: {error}");
        Self::Custom(Box::new(error))
    }

    /// The failure category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Absent => ErrorKind::Absent,
            Self::Precondition(_) => ErrorKind::Precondition,
            Self::EmptyContainer(_) => ErrorKind::EmptyContainer,
            Self::OutOfRange(_) => ErrorKind::OutOfRange,
            Self::Custom(_) => ErrorKind::Custom,
        }
    }
}

/// Validate that a caller-supplied override error is present.
///
/// Checked BEFORE the primary predicate in every `*_or` variant: an absent
/// override fails with [`Error::Absent`] even when the subject itself would
/// have passed.
pub(crate) fn override_present<E>(error: Option<E>) -> Result<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    error.ok_or_else(Error::absent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_display() {
        assert_eq!(
            Error::absent().to_string(),
            "Required value must not be absent"
        );
    }

    #[test]
    fn test_precondition_display_is_verbatim() {
        let err = Error::precondition("String must not be blank");
        assert_eq!(err.to_string(), "String must not be blank");
    }

    #[test]
    fn test_empty_container_display_names_kind() {
        assert_eq!(
            Error::empty(ContainerKind::List).to_string(),
            "List must contain at least one or more elements"
        );
        assert_eq!(
            Error::empty(ContainerKind::Map).to_string(),
            "Map must contain at least one or more elements"
        );
        assert_eq!(
            Error::empty(ContainerKind::Set).to_string(),
            "Set must contain at least one or more elements"
        );
        assert_eq!(
            Error::empty(ContainerKind::Array).to_string(),
            "Array must contain at least one or more elements"
        );
    }

    #[test]
    fn test_custom_display_is_the_override_message() {
        let source = std::io::Error::other("caller says no");
        let err = Error::custom(source);
        assert_eq!(err.to_string(), "caller says no");
        assert_eq!(err.kind(), ErrorKind::Custom);
    }

    #[test]
    fn test_kind_discriminants() {
        assert_eq!(Error::absent().kind(), ErrorKind::Absent);
        assert_eq!(Error::precondition("x").kind(), ErrorKind::Precondition);
        assert_eq!(
            Error::empty(ContainerKind::Set).kind(),
            ErrorKind::EmptyContainer
        );
        assert_eq!(Error::out_of_range("x").kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_override_present_rejects_none() {
        let result = override_present(None::<std::io::Error>);
        assert!(matches!(result, Err(Error::Absent)));
    }
}
