use proptest::prelude::*;
use rtmath::sys::trap::{checked_sdiv, checked_smod, checked_udiv, checked_umod};
use rtmath::{abs, mul64, sdiv, smod, udiv, umod, ArithError};

// Property 1: q * b + r == a and r < b for unsigned operands
proptest! {
    #[test]
    fn prop_unsigned_division_identity(a in any::<u32>(), b in 1u32..) {
        let q = udiv(a, b);
        let r = umod(a, b);

        prop_assert!(r < b, "remainder {} not below divisor {}", r, b);
        prop_assert_eq!(q as u64 * b as u64 + r as u64, a as u64);
    }
}

// Property 2: unsigned results agree with the hardware operators
proptest! {
    #[test]
    fn prop_unsigned_matches_native(a in any::<u32>(), b in 1u32..) {
        prop_assert_eq!(udiv(a, b), a / b);
        prop_assert_eq!(umod(a, b), a % b);
    }
}

// Property 3: small divisors hit the long alignment paths
proptest! {
    #[test]
    fn prop_unsigned_small_divisor(a in any::<u32>(), b in 1u32..16) {
        prop_assert_eq!(udiv(a, b), a / b);
        prop_assert_eq!(umod(a, b), a % b);
    }
}

// Property 4: q * b + r == a for signed operands, remainder follows the dividend
proptest! {
    #[test]
    fn prop_signed_division_identity(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(b != 0);
        prop_assume!(!(a == i32::MIN && b == -1));

        let q = sdiv(a, b);
        let r = smod(a, b);

        prop_assert_eq!(q as i64 * b as i64 + r as i64, a as i64);
        prop_assert!(r == 0 || (r < 0) == (a < 0), "smod({}, {}) = {} has the wrong sign", a, b, r);
        prop_assert!((r as i64).abs() < (b as i64).abs());
    }
}

// Property 5: signed results truncate toward zero like the hardware operators
proptest! {
    #[test]
    fn prop_signed_matches_native(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(b != 0);

        prop_assert_eq!(sdiv(a, b), a.wrapping_div(b));
        prop_assert_eq!(smod(a, b), a.wrapping_rem(b));
    }
}

// Property 6: mul64 is the low half of the exact 128-bit product
proptest! {
    #[test]
    fn prop_mul64_low_half(a in any::<u64>(), b in any::<u64>()) {
        let exact = (a as u128) * (b as u128);
        prop_assert_eq!(mul64(a, b), exact as u64);
        prop_assert_eq!(mul64(a, b), mul64(b, a));
    }
}

// Property 7: abs is two's-complement wrapping negation of negatives
proptest! {
    #[test]
    fn prop_abs(v in any::<i32>()) {
        prop_assert_eq!(abs(v), v.wrapping_abs());
    }
}

// Property 8: checked variants fail exactly on a zero divisor
proptest! {
    #[test]
    fn prop_checked_division(a in any::<u32>(), b in any::<u32>(), sa in any::<i32>(), sb in any::<i32>()) {
        if b == 0 {
            prop_assert_eq!(checked_udiv(a, b), Err(ArithError::DivideByZero));
            prop_assert_eq!(checked_umod(a, b), Err(ArithError::DivideByZero));
        } else {
            prop_assert_eq!(checked_udiv(a, b), Ok(a / b));
            prop_assert_eq!(checked_umod(a, b), Ok(a % b));
        }

        if sb == 0 {
            prop_assert_eq!(checked_sdiv(sa, sb), Err(ArithError::DivideByZero));
            prop_assert_eq!(checked_smod(sa, sb), Err(ArithError::DivideByZero));
        } else {
            prop_assert_eq!(checked_sdiv(sa, sb), Ok(sa.wrapping_div(sb)));
            prop_assert_eq!(checked_smod(sa, sb), Ok(sa.wrapping_rem(sb)));
        }
    }
}

#[test]
fn test_zero_divisor_keeps_identity() {
    for &a in [0u32, 1, 7, u32::MAX].iter() {
        assert_eq!(udiv(a, 0).wrapping_mul(0).wrapping_add(umod(a, 0)), a);
    }
    for &a in [0i32, 1, -7, i32::MIN, i32::MAX].iter() {
        assert_eq!(sdiv(a, 0).wrapping_mul(0).wrapping_add(smod(a, 0)), a);
    }
}
