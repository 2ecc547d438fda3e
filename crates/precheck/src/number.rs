//! Numeric widths supported by the sign and range checks.

use std::fmt::Display;

mod sealed {
    pub trait Sealed {}
}

/// A numeric width the sign and range checks are defined over.
///
/// Sealed: implemented for `i8`, `i16`, `i32`, `i64`, `f32`, and `f64`.
/// `LABEL` is the width name used in diagnostics ("Byte number must be
/// positive but -1 was given").
pub trait Number: Copy + PartialOrd + Display + sealed::Sealed {
    /// Width name used in diagnostics.
    const LABEL: &'static str;

    /// The zero of this width; the pivot for sign checks.
    const ZERO: Self;
}

macro_rules! impl_number {
    ($($ty:ty => $label:literal, $zero:expr;)+) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Number for $ty {
                const LABEL: &'static str = $label;
                const ZERO: Self = $zero;
            }
        )+
    };
}

impl_number! {
    i8 => "Byte", 0;
    i16 => "Short", 0;
    i32 => "Int", 0;
    i64 => "Long", 0;
    f32 => "Float", 0.0;
    f64 => "Double", 0.0;
}
