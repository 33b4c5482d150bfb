//! Integer helpers for targets without a hardware divider.
//!
//! Every function here is total. Division by zero does not trap; it yields an
//! all-ones quotient and leaves the dividend as the remainder, so that
//! `q * b + r == a` keeps holding. Use the `checked_*` variants in
//! [`super::trap`] to observe the zero divisor instead.

/// Unsigned 32-bit division, rounding toward zero.
///
/// Restoring binary long division: the divisor is first aligned with the
/// dividend's most significant set bit, so the loop runs at most 32 times no
/// matter how far apart the operands are.
///
/// `udiv(a, 0) == u32::MAX`.
#[inline]
pub const fn udiv(mut dividend: u32, mut divisor: u32) -> u32 {
    if divisor == 0 {
        return u32::MAX;
    }

    if dividend < divisor {
        return 0;
    }

    // dividend >= divisor > 0, so the difference is in 0..=31.
    let mut quotient_bits = divisor.leading_zeros() - dividend.leading_zeros();
    divisor <<= quotient_bits;

    let mut quotient = 0u32;
    loop {
        quotient <<= 1;
        if dividend >= divisor {
            dividend -= divisor;
            quotient |= 1;
        }

        divisor >>= 1;

        if quotient_bits == 0 {
            break;
        }
        quotient_bits -= 1;
    }

    quotient
}

/// Sign mask of a 32-bit value: `0` for non-negative, `-1` (all ones) for negative.
#[inline(always)]
const fn sign_mask(value: i32) -> i32 {
    value >> 31
}

/// `(v ^ mask) - mask`: negates `v` when `mask` is all ones, leaves it alone when zero.
#[inline(always)]
const fn apply_sign(value: i32, mask: i32) -> i32 {
    (value ^ mask).wrapping_sub(mask)
}

/// Signed 32-bit division, truncating toward zero.
///
/// `sdiv(i32::MIN, -1)` wraps back to `i32::MIN`. `sdiv(a, 0) == -1`.
#[inline]
pub const fn sdiv(a: i32, b: i32) -> i32 {
    let sign_a = sign_mask(a);
    let sign_b = sign_mask(b);

    // i32::MIN has no positive counterpart; as u32 it is exactly 2^31.
    let abs_a = apply_sign(a, sign_a) as u32;
    let abs_b = apply_sign(b, sign_b) as u32;

    let quotient = udiv(abs_a, abs_b) as i32;
    if b == 0 {
        return quotient;
    }

    apply_sign(quotient, sign_a ^ sign_b)
}

/// Unsigned 32-bit remainder. `umod(a, 0) == a`.
#[inline]
pub const fn umod(a: u32, b: u32) -> u32 {
    a.wrapping_sub(udiv(a, b).wrapping_mul(b))
}

/// Signed 32-bit remainder, with the sign of the dividend. `smod(a, 0) == a`.
#[inline]
pub const fn smod(a: i32, b: i32) -> i32 {
    a.wrapping_sub(sdiv(a, b).wrapping_mul(b))
}

/// Low 64 bits of `a * b`, built from 32x32->64 products.
///
/// The `hi(a) * hi(b)` term only touches bits 64 and up, so it is skipped.
#[inline]
pub const fn mul64(a: u64, b: u64) -> u64 {
    let a_low = a as u32;
    let b_low = b as u32;
    let a_high = (a >> 32) as u32;
    let b_high = (b >> 32) as u32;

    let base = (a_low as u64) * (b_low as u64);
    let cross = a_high.wrapping_mul(b_low).wrapping_add(a_low.wrapping_mul(b_high));

    base.wrapping_add((cross as u64) << 32)
}

/// Absolute value. `abs(i32::MIN)` wraps to `i32::MIN`.
#[inline]
pub const fn abs(value: i32) -> i32 {
    if value < 0 {
        value.wrapping_neg()
    } else {
        value
    }
}
