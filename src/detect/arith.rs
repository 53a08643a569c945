// ============================================================================
// Add / Sub / Mul Detection
// ============================================================================

use super::Detected;
use crate::int::{PrimInt, Promote, ResultType};

/// Arithmetic operations with a single overflow failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
}

/// Computes `lhs op rhs` in the result type of `L` and `R`.
///
/// Overflow is decided on the exact value of the original operands, not on
/// their images in the result type: `0u32 - 1i32` overflows `u32`, while
/// `-1i32 + 1u32` is exactly `0u32`. The wrapped value is the exact result
/// modulo 2^width, which is what the native wrapping operation yields on the
/// converted operands.
#[inline]
pub fn compute_with_overflow<L, R>(op: ArithOp, lhs: L, rhs: R) -> Detected<ResultType<L, R>>
where
    L: Promote<R>,
    R: PrimInt,
{
    let (a, b) = (lhs.to_exact(), rhs.to_exact());
    let (exact, beyond) = match op {
        ArithOp::Add => a.overflowing_add(b),
        ArithOp::Sub => a.overflowing_sub(b),
        ArithOp::Mul => a.overflowing_mul(b),
    };

    let x: ResultType<L, R> = lhs.wrapping_cast();
    let y: ResultType<L, R> = rhs.wrapping_cast();
    let wrapped = match op {
        ArithOp::Add => x.wrapping_add(y),
        ArithOp::Sub => x.wrapping_sub(y),
        ArithOp::Mul => x.wrapping_mul(y),
    };

    Detected {
        wrapped,
        overflowed: beyond || !exact.fits::<ResultType<L, R>>(),
        negative: exact.is_negative(),
    }
}

#[inline]
pub fn add<L: Promote<R>, R: PrimInt>(lhs: L, rhs: R) -> Detected<ResultType<L, R>> {
    compute_with_overflow(ArithOp::Add, lhs, rhs)
}

#[inline]
pub fn sub<L: Promote<R>, R: PrimInt>(lhs: L, rhs: R) -> Detected<ResultType<L, R>> {
    compute_with_overflow(ArithOp::Sub, lhs, rhs)
}

#[inline]
pub fn mul<L: Promote<R>, R: PrimInt>(lhs: L, rhs: R) -> Detected<ResultType<L, R>> {
    compute_with_overflow(ArithOp::Mul, lhs, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_no_overflow() {
        let d = add(i32::MAX - 1, 1i32);
        assert_eq!(d.wrapped, i32::MAX);
        assert!(!d.overflowed);
    }

    #[test]
    fn test_overflow_wraps() {
        let d = add(i32::MAX - 1, 2i32);
        assert!(d.overflowed);
        assert_eq!(d.wrapped, i32::MIN);
        assert!(!d.negative);
        assert_eq!(d.saturated(), i32::MAX);
    }

    #[test]
    fn test_mixed_signedness_uses_exact_operands() {
        let d = add(-1i32, 1u32);
        assert_eq!(d.wrapped, 0u32);
        assert!(!d.overflowed);

        let d = sub(0u32, 1i32);
        assert_eq!(d.wrapped, u32::MAX);
        assert!(d.overflowed);
        assert!(d.negative);
        assert_eq!(d.saturated(), 0);

        let d = mul(-2i64, 3u32);
        assert!(d.overflowed);
        assert_eq!(d.wrapped, (-6i64) as u64);
    }

    #[test]
    fn test_promotion_absorbs_narrow_overflow() {
        let d = add(i8::MAX, 1i8);
        assert_eq!(d.wrapped, 128i32);
        assert!(!d.overflowed);

        let d = mul(u16::MAX, u16::MAX);
        // 65535 * 65535 does not fit i32.
        assert!(d.overflowed);
        assert_eq!(d.wrapped, (65535i64 * 65535) as i32);
    }

    #[test]
    fn test_128_bit_extremes() {
        let d = mul(u128::MAX, u128::MAX);
        assert!(d.overflowed);
        assert_eq!(d.wrapped, 1);
        assert_eq!(d.saturated(), u128::MAX);

        let d = sub(i128::MIN, 1i8);
        assert!(d.overflowed);
        assert_eq!(d.wrapped, i128::MAX);
        assert_eq!(d.saturated(), i128::MIN);

        let d = add(i128::MIN, u128::MAX);
        assert!(!d.overflowed);
        assert_eq!(d.wrapped, u128::MAX >> 1);
    }

    quickcheck! {
        fn qc_i16_u16_matches_i64(a: i16, b: u16) -> bool {
            let exact = a as i64 * b as i64;
            let d = mul(a, b);
            d.overflowed == i32::try_from(exact).is_err() && d.wrapped == exact as i32
        }

        fn qc_i64_u32_matches_i128(a: i64, b: u32) -> bool {
            let exact = a as i128 + b as i128;
            let d = add(a, b);
            d.overflowed == u64::try_from(exact).is_err() && d.wrapped == exact as u64
        }
    }
}
