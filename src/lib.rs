//! # rtmath
//!
//! Software replacements for the runtime helpers a compiler emits on a core
//! with no hardware divider (`__udivsi3`, `__divsi3`, `__umodsi3`,
//! `__modsi3`, `__muldi3`), plus the handful of libm functions small C
//! programs expect (`abs`, `fmod`, `sin`, `cos`, `sqrt`).
//!
//! Everything is a pure function. The only global is the trap hook in
//! [`sys::trap`], which the C entry points in [`sys::libc`] report broken
//! preconditions through.
//!
//! Build with `--features export-symbols` to emit the C entry points under
//! their real names. Leave it off when linking into a hosted binary, where the
//! platform runtime already defines them.

#![cfg_attr(not(test), no_std)]

pub mod sys;

pub use sys::config::{Coefficients, MathConfig, RangeReduction};
pub use sys::fixed::FixedMath;
pub use sys::float::{cos, cos_with, fmod, sin, sin_with, sqrt, sqrt_with};
pub use sys::int::{abs, mul64, sdiv, smod, udiv, umod};
pub use sys::trap::ArithError;
