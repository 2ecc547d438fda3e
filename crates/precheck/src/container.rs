//! Non-empty checks over containers.
//!
//! One generic routine over the [`Container`] trait instead of a separate
//! function per container type. Each implementation names its kind so the
//! diagnostic reads "List must contain at least one or more elements",
//! "Map must ...", and so on.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::error::{override_present, ContainerKind, Error, Result};

/// A container that can report its kind and whether it is empty.
///
/// Implemented for slices and `Vec` (List), fixed arrays (Array),
/// `HashMap`/`BTreeMap` (Map), and `HashSet`/`BTreeSet` (Set).
pub trait Container {
    /// The kind named in empty-container diagnostics.
    const KIND: ContainerKind;

    /// Whether the container holds zero elements.
    fn is_empty(&self) -> bool;
}

impl<T> Container for [T] {
    const KIND: ContainerKind = ContainerKind::List;

    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T> Container for Vec<T> {
    const KIND: ContainerKind = ContainerKind::List;

    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T, const N: usize> Container for [T; N] {
    const KIND: ContainerKind = ContainerKind::Array;

    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<K, V, S> Container for HashMap<K, V, S> {
    const KIND: ContainerKind = ContainerKind::Map;

    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<K, V> Container for BTreeMap<K, V> {
    const KIND: ContainerKind = ContainerKind::Map;

    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl<T, S> Container for HashSet<T, S> {
    const KIND: ContainerKind = ContainerKind::Set;

    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

impl<T> Container for BTreeSet<T> {
    const KIND: ContainerKind = ContainerKind::Set;

    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }
}

/// Require that a container holds at least one element.
///
/// Returns the container unchanged so call sites can chain validation
/// inline:
///
/// ```
/// use precheck::require_non_empty;
///
/// let hosts = vec!["broker-1", "broker-2"];
/// let hosts = require_non_empty(&hosts)?;
/// assert_eq!(hosts.len(), 2);
/// # Ok::<(), precheck::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyContainer`] naming the container kind when the
/// container has zero elements.
pub fn require_non_empty<C>(value: &C) -> Result<&C>
where
    C: Container + ?Sized,
{
    if value.is_empty() {
        return Err(Error::empty(C::KIND));
    }
    Ok(value)
}

/// Require a non-empty container, failing with a caller-supplied error
/// instead.
///
/// # Errors
///
/// Returns [`Error::Absent`] when `error` is `None` (checked before the
/// subject), otherwise [`Error::Custom`] wrapping `error` when the container
/// is empty.
pub fn require_non_empty_or<C, E>(value: &C, error: Option<E>) -> Result<&C>
where
    C: Container + ?Sized,
    E: std::error::Error + Send + Sync + 'static,
{
    let error = override_present(error)?;
    if value.is_empty() {
        return Err(Error::custom(error));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn test_non_empty_list_passes_through() {
        let items = vec!["x"];
        let checked = require_non_empty(&items).expect("one-element list must pass");
        assert_eq!(checked.len(), 1);
    }

    #[test]
    fn test_empty_list_message() {
        let items: Vec<&str> = Vec::new();
        let err = require_non_empty(&items).expect_err("empty list must fail");
        assert_eq!(
            err.to_string(),
            "List must contain at least one or more elements"
        );
    }

    #[test]
    fn test_empty_slice_is_a_list() {
        let items: &[u8] = &[];
        let err = require_non_empty(items).expect_err("empty slice must fail");
        assert_eq!(
            err.to_string(),
            "List must contain at least one or more elements"
        );
    }

    #[test]
    fn test_empty_map_message() {
        let map: HashMap<String, u32> = HashMap::new();
        let err = require_non_empty(&map).expect_err("empty map must fail");
        assert_eq!(
            err.to_string(),
            "Map must contain at least one or more elements"
        );

        let map: BTreeMap<String, u32> = BTreeMap::new();
        let err = require_non_empty(&map).expect_err("empty map must fail");
        assert_eq!(
            err.to_string(),
            "Map must contain at least one or more elements"
        );
    }

    #[test]
    fn test_empty_set_message() {
        let set: HashSet<u32> = HashSet::new();
        let err = require_non_empty(&set).expect_err("empty set must fail");
        assert_eq!(
            err.to_string(),
            "Set must contain at least one or more elements"
        );

        let set: BTreeSet<u32> = BTreeSet::new();
        let err = require_non_empty(&set).expect_err("empty set must fail");
        assert_eq!(
            err.to_string(),
            "Set must contain at least one or more elements"
        );
    }

    #[test]
    fn test_empty_array_message() {
        let arr: [u8; 0] = [];
        let err = require_non_empty(&arr).expect_err("empty array must fail");
        assert_eq!(
            err.to_string(),
            "Array must contain at least one or more elements"
        );
        assert!(require_non_empty(&[1, 2, 3]).is_ok());
    }

    #[test]
    fn test_non_empty_or_checks_override_first() {
        let items = vec![1];
        let result = require_non_empty_or(&items, None::<std::io::Error>);
        assert!(matches!(result, Err(Error::Absent)));
    }

    #[test]
    fn test_non_empty_or_raises_the_override() {
        let items: Vec<u8> = Vec::new();
        let override_err = std::io::Error::other("at least one broker required");
        let err = require_non_empty_or(&items, Some(override_err)).expect_err("must fail");
        assert_eq!(err.to_string(), "at least one broker required");
    }
}
