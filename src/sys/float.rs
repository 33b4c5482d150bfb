//! Floating point routines for targets without a math library.
//!
//! Only `core` arithmetic is used: no `trunc`, no `sqrt` instruction, no
//! `libm`. Accuracy is bounded by the approximations below; see each
//! function for where it falls apart.

use core::f64::consts::{FRAC_PI_2, PI, TAU};

use super::config::{Coefficients, MathConfig, RangeReduction, MAX_SIN_TERMS};

/// `1/3!, 1/5!, ... 1/15!` as single precision literals, widened.
const SIN_COEFFICIENTS_SINGLE: [f64; MAX_SIN_TERMS] = [
    0.166666666666667f32 as f64, // 1 / 3!
    0.008333333333333f32 as f64, // 1 / 5!
    0.000198412698413f32 as f64, // 1 / 7!
    0.000002755731922f32 as f64, // 1 / 9!
    2.50521084e-8f32 as f64,     // 1 / 11!
    1.6059044e-10f32 as f64,     // 1 / 13!
    7.6471637e-13f32 as f64,     // 1 / 15!
];

const SIN_COEFFICIENTS_DOUBLE: [f64; MAX_SIN_TERMS] = [
    1.0 / 6.0,
    1.0 / 120.0,
    1.0 / 5_040.0,
    1.0 / 362_880.0,
    1.0 / 39_916_800.0,
    1.0 / 6_227_020_800.0,
    1.0 / 1_307_674_368_000.0,
];

/// Floating point remainder `x - trunc(x / y) * y`, with the sign of `x`.
///
/// The quotient is truncated through an `i32`, so once `|x / y|` reaches
/// 2^31 the conversion saturates and the result is wrong (but finite). Use
/// [`super::trap::checked_fmod`] to detect that case.
///
/// `y == 0`, an infinite `x`, or a NaN operand give NaN. An infinite `y`
/// gives `x` back.
#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() || x.is_infinite() || y == 0.0 {
        return f64::NAN;
    }

    if y.is_infinite() {
        return x;
    }

    let whole = (x / y) as i32;
    x - (whole as f64) * y
}

/// Sine, from the Taylor series through the 15th power.
#[inline]
pub fn sin(angle: f64) -> f64 {
    sin_with(angle, &MathConfig::DEFAULT)
}

/// Cosine, as `sin(angle + π/2)`.
#[inline]
pub fn cos(angle: f64) -> f64 {
    cos_with(angle, &MathConfig::DEFAULT)
}

/// Square root by ten rounds of Newton's method.
#[inline]
pub fn sqrt(value: f64) -> f64 {
    sqrt_with(value, &MathConfig::DEFAULT)
}

#[inline]
fn reduce_angle(angle: f64, reduction: RangeReduction) -> f64 {
    // The series converges fastest near zero.
    let angle = fmod(angle, TAU);

    match reduction {
        RangeReduction::FullPeriod => angle,
        RangeReduction::HalfPeriod => {
            if angle > PI {
                angle - TAU
            } else if angle < -PI {
                angle + TAU
            } else {
                angle
            }
        }
    }
}

/// Sine with explicit tuning.
///
/// `x - x^3/3! + x^5/5! - ...`, evaluated for `config.sin_terms()` terms after
/// the linear one. With [`RangeReduction::FullPeriod`] the argument is only
/// folded into `(-2π, 2π)`, and near either end the truncated series is off by
/// several hundredths.
pub fn sin_with(angle: f64, config: &MathConfig) -> f64 {
    let angle = reduce_angle(angle, config.reduction());

    let coefficients = match config.coefficients() {
        Coefficients::Single => &SIN_COEFFICIENTS_SINGLE,
        Coefficients::Double => &SIN_COEFFICIENTS_DOUBLE,
    };

    let angle_squared = angle * angle;
    let mut numerator = angle;
    let mut result = angle;

    for (i, coefficient) in coefficients.iter().take(config.sin_terms()).enumerate() {
        numerator *= angle_squared;
        let term = numerator * coefficient;
        if i & 1 != 0 {
            result += term;
        } else {
            result -= term;
        }
    }

    result
}

/// Cosine with explicit tuning. Shares [`sin_with`]'s precision.
#[inline]
pub fn cos_with(angle: f64, config: &MathConfig) -> f64 {
    sin_with(angle + FRAC_PI_2, config)
}

/// Square root with explicit tuning.
///
/// `guess = (value / guess + guess) / 2`, seeded with `value` and run exactly
/// `config.sqrt_iterations()` times. Each round at most halves the guess
/// while it is far above the root, so the default ten rounds are only
/// accurate up to a value of a few hundred.
///
/// Negative or NaN input gives NaN. `±0` and `+∞` are returned unchanged.
pub fn sqrt_with(value: f64, config: &MathConfig) -> f64 {
    if value.is_nan() || value < 0.0 {
        return f64::NAN;
    }

    if value == 0.0 || value == f64::INFINITY {
        return value;
    }

    let mut guess = value;
    for _ in 0..config.sqrt_iterations() {
        guess = ((value / guess) + guess) / 2.0;
    }

    guess
}
