//! # Precheck
//!
//! Guard-clause precondition checks with typed errors - strictly functional
//! Rust with zero unwraps.
//!
//! Every check takes an argument, and either returns it unchanged (so call
//! sites can chain validation inline) or fails with a typed, descriptive
//! [`Error`]. Checks are pure: no shared state, no I/O, no allocation on the
//! success path. They may be called concurrently with no coordination.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead (sole exception: the
//!   [`panicking`] adapter module, whose contract is to panic)
//! - No `unsafe` - safe Rust only
//!
//! ## Checks
//!
//! - [`require_some`] - presence of an `Option` value
//! - [`require_non_blank`] / [`require_non_empty_str`] - string content
//! - [`require_non_empty`] - lists, maps, sets, arrays
//! - [`require_positive`] / [`require_negative`] - sign, with zero counting
//!   as positive
//! - [`require_range_from`] / [`require_range_to`] / [`require_range`] -
//!   inclusive bounds
//! - [`require_starts_with`] / [`require_starts_with_at`] /
//!   [`require_ends_with`] - prefix and suffix
//!
//! Each check has an `*_or` variant taking `Option<E>` with a caller-supplied
//! error to raise in place of the library default. The override itself is
//! validated first: passing `None` fails with [`Error::Absent`] even when the
//! subject would have passed.
//!
//! ```
//! use precheck::{require_non_blank, require_range};
//!
//! fn seek(topic: &str, partition: i32) -> Result<(), precheck::Error> {
//!     let _topic = require_non_blank(topic)?;
//!     let _partition = require_range(partition, 0, 63)?;
//!     // ... use the validated arguments
//!     Ok(())
//! }
//!
//! assert!(seek("events", 7).is_ok());
//! assert!(seek("", 7).is_err());
//! assert!(seek("events", 64).is_err());
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod container;
mod error;
pub mod number;
pub mod numeric;
pub mod panicking;
pub mod presence;
pub mod text;

pub use container::{require_non_empty, require_non_empty_or, Container};
pub use error::{ContainerKind, Error, ErrorKind, Result};
pub use number::Number;
pub use numeric::{
    require_negative, require_negative_or, require_positive, require_positive_or, require_range,
    require_range_from, require_range_from_or, require_range_or, require_range_to,
    require_range_to_or,
};
pub use presence::{require_some, require_some_or};
pub use text::{
    require_ends_with, require_ends_with_or, require_non_blank, require_non_blank_or,
    require_non_empty_str, require_non_empty_str_or, require_starts_with, require_starts_with_at,
    require_starts_with_at_or, require_starts_with_or,
};
