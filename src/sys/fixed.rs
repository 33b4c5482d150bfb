//! Fixed point counterparts of the float routines, for code that never touches the FPU emulation.
//!
//! Same series and same Newton iteration as [`super::float`], rearranged so
//! that no intermediate leaves `[-16, 16)`: the angle is folded into `[-π, π]`
//! and each Taylor term is derived from the previous one instead of from a
//! raw power.

use fixed::{FixedI16, FixedI32};
use fixed::types::extra::{IsLessOrEqual, True, U11, U12, U13, U14, U16, U27, U28, U29, U30, U32, Unsigned};

/// Taylor terms after the linear one, through x^15.
pub const FIXED_SIN_TERMS: u8 = 7;

/// Newton rounds used by [`FixedMath::newton_sqrt`].
pub const FIXED_SQRT_ITERATIONS: u32 = 10;

pub trait FixedTaylor:
    Copy
    + PartialOrd
    + core::ops::AddAssign
    + core::ops::SubAssign
    + core::ops::Neg<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Add<Output = Self>
    + core::ops::Mul<Output = Self>
{
    const ZERO: Self;
    const FRAC_PI_2: Self;
    const PI: Self;
    const TAU: Self;

    fn checked_rem(self, rhs: Self) -> Option<Self>;

    fn checked_div(self, rhs: Self) -> Option<Self>;

    /// Division by a small integer, truncating.
    fn div_int(self, divisor: u8) -> Self;

    /// `floor(log2(self))`, `None` for zero or negative values.
    fn checked_int_log2(self) -> Option<i32>;

    /// `2^exp`, `None` if it is not representable.
    fn checked_pow2(exp: i32) -> Option<Self>;
}

impl<Frac> FixedTaylor for FixedI32<Frac>
where
    Frac: 'static
        + Unsigned
        + IsLessOrEqual<U32, Output = True>
        + IsLessOrEqual<U30, Output = True>
        + IsLessOrEqual<U29, Output = True>
        + IsLessOrEqual<U28, Output = True>
        + IsLessOrEqual<U27, Output = True>,
{
    const ZERO: Self = Self::ZERO;

    const FRAC_PI_2: Self = Self::FRAC_PI_2;

    const PI: Self = Self::PI;

    const TAU: Self = Self::TAU;

    fn checked_rem(self, rhs: Self) -> Option<Self> {
        self.checked_rem(rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        self.checked_div(rhs)
    }

    fn div_int(self, divisor: u8) -> Self {
        self / (divisor as i32)
    }

    fn checked_int_log2(self) -> Option<i32> {
        self.checked_int_log2()
    }

    fn checked_pow2(exp: i32) -> Option<Self> {
        let shift = exp.checked_add(Frac::I32)?;
        if (0..31).contains(&shift) {
            Some(Self::from_bits(1i32 << shift))
        } else {
            None
        }
    }
}

impl<Frac> FixedTaylor for FixedI16<Frac>
where
    Frac: 'static
        + Unsigned
        + IsLessOrEqual<U16, Output = True>
        + IsLessOrEqual<U14, Output = True>
        + IsLessOrEqual<U13, Output = True>
        + IsLessOrEqual<U12, Output = True>
        + IsLessOrEqual<U11, Output = True>,
{
    const ZERO: Self = Self::ZERO;

    const FRAC_PI_2: Self = Self::FRAC_PI_2;

    const PI: Self = Self::PI;

    const TAU: Self = Self::TAU;

    fn checked_rem(self, rhs: Self) -> Option<Self> {
        self.checked_rem(rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        self.checked_div(rhs)
    }

    fn div_int(self, divisor: u8) -> Self {
        self / (divisor as i16)
    }

    fn checked_int_log2(self) -> Option<i32> {
        self.checked_int_log2()
    }

    fn checked_pow2(exp: i32) -> Option<Self> {
        let shift = exp.checked_add(Frac::I32)?;
        if (0..15).contains(&shift) {
            Some(Self::from_bits(1i16 << shift))
        } else {
            None
        }
    }
}

/// Folds into `[-π, π]`.
#[inline]
fn reduce<T: FixedTaylor>(angle: T) -> T {
    // TAU is never zero, so the remainder always exists.
    let mut angle = angle.checked_rem(T::TAU).unwrap_or(T::ZERO);

    if angle > T::PI {
        angle -= T::TAU;
    } else if angle < -T::PI {
        angle += T::TAU;
    }

    angle
}

#[inline]
fn sin<T: FixedTaylor>(angle: T) -> T {
    let angle = reduce(angle);
    let angle_squared = angle * angle;

    let mut term = angle;
    let mut result = angle;

    // term_k = term_{k-1} * x^2 / ((2k)(2k + 1))
    let mut k = 1u8;
    while k <= FIXED_SIN_TERMS {
        term = term * angle_squared.div_int((2 * k) * (2 * k + 1));
        if k & 1 != 0 {
            result -= term;
        } else {
            result += term;
        }
        k += 1;
    }

    result
}

#[inline]
fn cos<T: FixedTaylor>(angle: T) -> T {
    // Reduce first so the phase shift cannot overflow.
    sin(reduce(angle) + T::FRAC_PI_2)
}

#[inline]
fn sqrt<T: FixedTaylor>(value: T) -> Option<T> {
    if value < T::ZERO {
        return None;
    }

    if value == T::ZERO {
        return Some(T::ZERO);
    }

    // Start from the power of two just above the root, so the fixed number of
    // rounds converges no matter how large the value is.
    let log2 = value.checked_int_log2()?;
    let mut guess = T::checked_pow2(log2.div_euclid(2) + 1)?;

    for _ in 0..FIXED_SQRT_ITERATIONS {
        guess = (value.checked_div(guess)? + guess).div_int(2);
    }

    Some(guess)
}

pub trait FixedMath: FixedTaylor {
    /// Remainder with the sign of `self`. `None` for a zero divisor.
    fn checked_fmod(self, rhs: Self) -> Option<Self> {
        self.checked_rem(rhs)
    }

    fn taylor_sin(self) -> Self {
        sin(self)
    }

    fn taylor_cos(self) -> Self {
        cos(self)
    }

    fn taylor_sin_cos(self) -> (Self, Self) {
        (sin(self), cos(self))
    }

    /// `None` for negative input.
    fn newton_sqrt(self) -> Option<Self> {
        sqrt(self)
    }
}

impl<T: FixedTaylor> FixedMath for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use fixed::types::{I16F16, I5F11, I5F27};

    fn check_sin_cos<T>(tolerance: f64, range: f64)
    where
        T: FixedMath + fixed::traits::Fixed,
    {
        let steps = 200;
        for i in 0..=steps {
            let x = -range + 2.0 * range * (i as f64) / (steps as f64);
            let fx = T::from_num(x);
            let exact = fx.to_num::<f64>();

            let s = fx.taylor_sin().to_num::<f64>();
            let c = fx.taylor_cos().to_num::<f64>();
            assert!((s - exact.sin()).abs() < tolerance, "sin({}) = {}, expected {}", exact, s, exact.sin());
            assert!((c - exact.cos()).abs() < tolerance, "cos({}) = {}, expected {}", exact, c, exact.cos());
        }
    }

    #[test]
    fn test_sin_cos_i16f16() {
        check_sin_cos::<I16F16>(1e-3, 20.0);
    }

    #[test]
    fn test_sin_cos_i5f27() {
        check_sin_cos::<I5F27>(1e-5, 15.0);
    }

    #[test]
    fn test_sin_cos_i5f11() {
        check_sin_cos::<I5F11>(2e-2, 15.0);
    }

    #[test]
    fn test_known_angles() {
        assert_eq!(I16F16::ZERO.taylor_sin(), I16F16::ZERO);
        assert!((I16F16::FRAC_PI_2.taylor_sin() - I16F16::ONE).abs() < I16F16::from_num(1e-3));
        assert!((I16F16::ZERO.taylor_cos() - I16F16::ONE).abs() < I16F16::from_num(1e-3));

        let (s, c) = I16F16::PI.taylor_sin_cos();
        assert!(s.abs() < I16F16::from_num(1e-3));
        assert!((c + I16F16::ONE).abs() < I16F16::from_num(1e-3));
    }

    #[test]
    fn test_sqrt() {
        for &v in [0.25f64, 1.0, 2.0, 4.0, 100.0, 10000.0, 32000.0].iter() {
            let root = I16F16::from_num(v).newton_sqrt().unwrap().to_num::<f64>();
            assert!((root - v.sqrt()).abs() < 1e-3, "sqrt({}) = {}", v, root);
        }

        let root = I5F27::from_num(2).newton_sqrt().unwrap().to_num::<f64>();
        assert!((root - 2f64.sqrt()).abs() < 1e-6);

        let tiny = I16F16::from_bits(1).newton_sqrt().unwrap().to_num::<f64>();
        assert!((tiny - 2f64.powi(-8)).abs() < 1e-4);
    }

    #[test]
    fn test_sqrt_degenerate() {
        assert_eq!(I16F16::ZERO.newton_sqrt(), Some(I16F16::ZERO));
        assert_eq!(I16F16::from_num(-1).newton_sqrt(), None);
        assert_eq!(I5F11::from_num(-0.5).newton_sqrt(), None);
    }

    #[test]
    fn test_fmod() {
        let r = I16F16::from_num(5.5).checked_fmod(I16F16::from_num(2)).unwrap();
        assert_eq!(r, I16F16::from_num(1.5));

        let r = I16F16::from_num(-5.5).checked_fmod(I16F16::from_num(2)).unwrap();
        assert_eq!(r, I16F16::from_num(-1.5));

        assert_eq!(I16F16::ONE.checked_fmod(I16F16::ZERO), None);
    }

    #[test]
    fn test_pow2_bounds() {
        assert_eq!(<I16F16 as FixedTaylor>::checked_pow2(0), Some(I16F16::ONE));
        assert_eq!(<I16F16 as FixedTaylor>::checked_pow2(-16), Some(I16F16::DELTA));
        assert_eq!(<I16F16 as FixedTaylor>::checked_pow2(-17), None);
        assert_eq!(<I16F16 as FixedTaylor>::checked_pow2(15), None);
        assert_eq!(<I5F11 as FixedTaylor>::checked_pow2(3), Some(I5F11::from_num(8)));
        assert_eq!(<I5F11 as FixedTaylor>::checked_pow2(4), None);
    }
}
