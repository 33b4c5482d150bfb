//! C ABI entry points.
//!
//! The division family and `__muldi3` are what the code generator calls on a
//! core without a divider or a 64-bit multiplier; the rest are the math
//! functions C code links against. With the `export-symbols` feature they are
//! emitted under exactly these names.
//!
//! A broken precondition is reported through [`trap::raise`] and then answered
//! with the same sentinel the safe API returns.
//!
//! The bodies must not contain a plain `/` or `%` on 32-bit integers, or a
//! 64-bit `*`: on the targets this is built for, those lower right back into
//! these symbols. Formatting a trap message is fine, since the divisor there is
//! never zero.

use super::trap::{self, ArithError};
use super::{float, int};

#[cfg_attr(feature = "export-symbols", no_mangle)]
pub extern "C" fn __udivsi3(dividend: u32, divisor: u32) -> u32 {
    if divisor == 0 {
        trap::raise("__udivsi3", ArithError::DivideByZero, format_args!("{} / 0", dividend));
    }
    int::udiv(dividend, divisor)
}

#[cfg_attr(feature = "export-symbols", no_mangle)]
pub extern "C" fn __divsi3(a: i32, b: i32) -> i32 {
    if b == 0 {
        trap::raise("__divsi3", ArithError::DivideByZero, format_args!("{} / 0", a));
    }
    int::sdiv(a, b)
}

#[cfg_attr(feature = "export-symbols", no_mangle)]
pub extern "C" fn __umodsi3(a: u32, b: u32) -> u32 {
    if b == 0 {
        trap::raise("__umodsi3", ArithError::DivideByZero, format_args!("{} % 0", a));
    }
    int::umod(a, b)
}

#[cfg_attr(feature = "export-symbols", no_mangle)]
pub extern "C" fn __modsi3(a: i32, b: i32) -> i32 {
    if b == 0 {
        trap::raise("__modsi3", ArithError::DivideByZero, format_args!("{} % 0", a));
    }
    int::smod(a, b)
}

/// Needs a native 32x32->64 multiply.
#[cfg_attr(feature = "export-symbols", no_mangle)]
pub extern "C" fn __muldi3(a: u64, b: u64) -> u64 {
    int::mul64(a, b)
}

#[cfg_attr(feature = "export-symbols", no_mangle)]
pub extern "C" fn abs(value: i32) -> i32 {
    int::abs(value)
}

/// Quotients outside the `i32` range give a wrong result without trapping.
#[cfg_attr(feature = "export-symbols", no_mangle)]
pub extern "C" fn fmod(x: f64, y: f64) -> f64 {
    if y == 0.0 {
        trap::raise("fmod", ArithError::DivideByZero, format_args!("{} % 0", x));
    }
    float::fmod(x, y)
}

#[cfg_attr(feature = "export-symbols", no_mangle)]
pub extern "C" fn sin(angle: f64) -> f64 {
    float::sin(angle)
}

#[cfg_attr(feature = "export-symbols", no_mangle)]
pub extern "C" fn cos(angle: f64) -> f64 {
    float::cos(angle)
}

#[cfg_attr(feature = "export-symbols", no_mangle)]
pub extern "C" fn sqrt(value: f64) -> f64 {
    if value < 0.0 {
        trap::raise("sqrt", ArithError::NegativeSqrt, format_args!("{}", value));
    }
    float::sqrt(value)
}
