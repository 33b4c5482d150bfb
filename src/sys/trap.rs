//! Precondition violations.
//!
//! The plain routines in [`super::int`] and [`super::float`] never fail; they
//! return a sentinel. This module gives the same operations a `Result` shape,
//! and carries the hook the C entry points in [`super::libc`] report through.

use core::cell::Cell;
use core::fmt::{self, Write};

use critical_section as cs;

use super::{float, int};

/// Size of the buffer trap messages are formatted into. Longer messages are cut short.
pub const TRAP_MESSAGE_CAPACITY: usize = 96;

/// Receives every violation raised by the C entry points, with a formatted message.
pub type TrapHandler = fn(ArithError, &str);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithError {
    DivideByZero,
    NegativeSqrt,
    /// `x / y` does not fit in the `i32` the quotient is truncated through.
    QuotientOverflow,
}

impl fmt::Display for ArithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithError::DivideByZero => f.write_str("division by zero"),
            ArithError::NegativeSqrt => f.write_str("square root of a negative number"),
            ArithError::QuotientOverflow => f.write_str("quotient does not fit in 32 bits"),
        }
    }
}

impl core::error::Error for ArithError {}

#[inline]
pub const fn checked_udiv(dividend: u32, divisor: u32) -> Result<u32, ArithError> {
    if divisor == 0 {
        Err(ArithError::DivideByZero)
    } else {
        Ok(int::udiv(dividend, divisor))
    }
}

/// `i32::MIN / -1` is not an error; it wraps like [`int::sdiv`].
#[inline]
pub const fn checked_sdiv(a: i32, b: i32) -> Result<i32, ArithError> {
    if b == 0 {
        Err(ArithError::DivideByZero)
    } else {
        Ok(int::sdiv(a, b))
    }
}

#[inline]
pub const fn checked_umod(a: u32, b: u32) -> Result<u32, ArithError> {
    if b == 0 {
        Err(ArithError::DivideByZero)
    } else {
        Ok(int::umod(a, b))
    }
}

#[inline]
pub const fn checked_smod(a: i32, b: i32) -> Result<i32, ArithError> {
    if b == 0 {
        Err(ArithError::DivideByZero)
    } else {
        Ok(int::smod(a, b))
    }
}

/// NaN input is passed through as `Ok(NaN)`.
#[inline]
pub fn checked_sqrt(value: f64) -> Result<f64, ArithError> {
    if value < 0.0 {
        Err(ArithError::NegativeSqrt)
    } else {
        Ok(float::sqrt(value))
    }
}

/// Like [`float::fmod`], but refuses a zero divisor and any quotient the
/// `i32` truncation would mangle (including NaN and infinite quotients).
pub fn checked_fmod(x: f64, y: f64) -> Result<f64, ArithError> {
    const LOWER: f64 = i32::MIN as f64 - 1.0;
    const UPPER: f64 = i32::MAX as f64 + 1.0;

    if y == 0.0 {
        return Err(ArithError::DivideByZero);
    }

    let quotient = x / y;
    if !(quotient > LOWER && quotient < UPPER) {
        return Err(ArithError::QuotientOverflow);
    }

    Ok(float::fmod(x, y))
}

static HANDLER: cs::Mutex<Cell<Option<TrapHandler>>> = cs::Mutex::new(Cell::new(None));

/// Installs `handler`, returning the one it replaces. `None` silences traps.
pub fn set_handler(handler: Option<TrapHandler>) -> Option<TrapHandler> {
    cs::with(|cs| HANDLER.borrow(cs).replace(handler))
}

pub fn handler() -> Option<TrapHandler> {
    cs::with(|cs| HANDLER.borrow(cs).get())
}

/// Reports `error` raised by `symbol` to the installed handler, if any.
///
/// The handler runs outside the critical section.
pub fn raise(symbol: &str, error: ArithError, operands: fmt::Arguments<'_>) {
    let Some(handler) = handler() else {
        return;
    };

    let message = format_message(symbol, error, operands);
    handler(error, message.as_str());
}

pub(crate) fn format_message(
    symbol: &str,
    error: ArithError,
    operands: fmt::Arguments<'_>,
) -> heapless::String<TRAP_MESSAGE_CAPACITY> {
    let mut message = heapless::String::new();
    // Truncating never fails.
    let _ = write!(Truncating(&mut message), "{}: {} ({})", symbol, error, operands);
    message
}

/// Writes as many whole characters as fit and drops the rest.
struct Truncating<'a, const N: usize>(&'a mut heapless::String<N>);

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}
