//! Panic-on-violation adapter over the `Result` surface.
//!
//! For call sites that prefer assertion-style guards over `?` propagation.
//! Each function delegates to its `require_*` counterpart and panics with the
//! same diagnostic message on violation. This is the only module in the crate
//! that is allowed to panic; panicking is its contract.

#![allow(clippy::panic)]

use crate::container::{require_non_empty, Container};
use crate::error::Result;
use crate::number::Number;
use crate::numeric::{
    require_negative, require_positive, require_range, require_range_from, require_range_to,
};
use crate::presence::require_some;
use crate::text::{
    require_ends_with, require_non_blank, require_starts_with, require_starts_with_at,
};

#[track_caller]
fn or_panic<T>(checked: Result<T>) -> T {
    match checked {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

/// Panicking form of [`require_some`](crate::require_some).
#[track_caller]
pub fn some<T>(value: Option<T>) -> T {
    or_panic(require_some(value))
}

/// Panicking form of [`require_non_blank`](crate::require_non_blank).
#[track_caller]
pub fn non_blank(value: &str) -> &str {
    or_panic(require_non_blank(value))
}

/// Panicking form of [`require_non_empty`](crate::require_non_empty).
#[track_caller]
pub fn non_empty<C: Container + ?Sized>(value: &C) -> &C {
    or_panic(require_non_empty(value))
}

/// Panicking form of [`require_positive`](crate::require_positive).
#[track_caller]
pub fn positive<N: Number>(value: N) -> N {
    or_panic(require_positive(value))
}

/// Panicking form of [`require_negative`](crate::require_negative).
#[track_caller]
pub fn negative<N: Number>(value: N) -> N {
    or_panic(require_negative(value))
}

/// Panicking form of [`require_range_from`](crate::require_range_from).
#[track_caller]
pub fn range_from<N: Number>(index: N, from: N) -> N {
    or_panic(require_range_from(index, from))
}

/// Panicking form of [`require_range_to`](crate::require_range_to).
#[track_caller]
pub fn range_to<N: Number>(index: N, to: N) -> N {
    or_panic(require_range_to(index, to))
}

/// Panicking form of [`require_range`](crate::require_range).
#[track_caller]
pub fn range<N: Number>(index: N, from: N, to: N) -> N {
    or_panic(require_range(index, from, to))
}

/// Panicking form of [`require_starts_with`](crate::require_starts_with).
#[track_caller]
pub fn starts_with<'a>(sequence: &'a str, prefix: &str) -> &'a str {
    or_panic(require_starts_with(sequence, prefix))
}

/// Panicking form of
/// [`require_starts_with_at`](crate::require_starts_with_at).
#[track_caller]
pub fn starts_with_at<'a>(sequence: &'a str, prefix: &str, offset: usize) -> &'a str {
    or_panic(require_starts_with_at(sequence, prefix, offset))
}

/// Panicking form of [`require_ends_with`](crate::require_ends_with).
#[track_caller]
pub fn ends_with<'a>(sequence: &'a str, suffix: &str) -> &'a str {
    or_panic(require_ends_with(sequence, suffix))
}
