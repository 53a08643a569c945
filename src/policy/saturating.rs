// ============================================================================
// Saturating Policy
// Total operations clamping to the nearest representable value
// ============================================================================

//! Saturating operations never fail. An out-of-range result is replaced by
//! the bound of the result type on the side of the exact result:
//!
//! ```rust
//! use safe_int_arith::saturating;
//!
//! assert_eq!(saturating::add(i32::MAX - 1, 2i32), i32::MAX);
//! assert_eq!(saturating::sub(3u32, 5i32), 0u32);
//! assert_eq!(saturating::div(-5i32, 0i32), i32::MIN);
//! ```

use super::truncating;
use crate::detect::{arith, division, fit, shift, DivisionCase, ShlOutcome};
use crate::int::{PrimInt, Promote, ResultType, ShiftType};

#[inline]
pub fn add<L: Promote<R>, R: PrimInt>(lhs: L, rhs: R) -> ResultType<L, R> {
    arith::add(lhs, rhs).saturated()
}

#[inline]
pub fn sub<L: Promote<R>, R: PrimInt>(lhs: L, rhs: R) -> ResultType<L, R> {
    arith::sub(lhs, rhs).saturated()
}

#[inline]
pub fn mul<L: Promote<R>, R: PrimInt>(lhs: L, rhs: R) -> ResultType<L, R> {
    arith::mul(lhs, rhs).saturated()
}

/// T-division quotient. Dividing by zero yields `MIN` for a negative dividend
/// and `MAX` otherwise; `MIN / -1` yields `MAX`.
#[inline]
pub fn div<L: Promote<R>, R: PrimInt>(dividend: L, divisor: R) -> ResultType<L, R> {
    match division::classify(dividend, divisor) {
        DivisionCase::ByZero { negative_dividend: true } => <ResultType<L, R>>::MIN,
        DivisionCase::ByZero { negative_dividend: false } | DivisionCase::MinByMinusOne => <ResultType<L, R>>::MAX,
        DivisionCase::Defined { dividend, divisor } => dividend.wrapping_div(divisor),
    }
}

/// Same as [`truncating::rem`]: a remainder has no bound to clamp to, so the
/// undefined cases yield zero.
#[inline]
pub fn rem<L: Promote<R>, R: PrimInt>(dividend: L, divisor: R) -> ResultType<L, R> {
    truncating::rem(dividend, divisor)
}

/// Left shift. When bits would be lost, or the count is invalid, the result
/// is `MIN`, `0` or `MAX` by the sign of `value`.
#[inline]
pub fn shl<L: PrimInt, C: PrimInt>(value: L, count: C) -> ShiftType<L> {
    match shift::shl(value, count) {
        ShlOutcome::Shifted { value, overflowed: false } => value,
        _ if value.is_negative() => <ShiftType<L>>::MIN,
        _ if value == L::ZERO => <ShiftType<L>>::ZERO,
        _ => <ShiftType<L>>::MAX,
    }
}

/// Right shift. An invalid count shifts every bit out, leaving `-1` for
/// negative values and `0` otherwise.
#[inline]
pub fn shr<L: PrimInt, C: PrimInt>(value: L, count: C) -> ShiftType<L> {
    truncating::shr(value, count)
}

#[inline]
pub fn conv<T: PrimInt, S: PrimInt>(value: S) -> T {
    fit::conv::<S, T>(value).saturated()
}

/// Clamps `value` into `[0, 2^nbits)`.
#[inline]
pub fn ufit<T: PrimInt>(value: T, nbits: u32) -> T {
    let fitted = fit::ufit(value, nbits);
    if fitted.negative {
        T::ZERO
    } else if fitted.truncated {
        fitted.ceiling
    } else {
        value
    }
}

/// Clamps `value` into `[-2^(nbits-1), 2^(nbits-1))`. A zero-width field
/// yields zero.
#[inline]
pub fn sfit<T: PrimInt>(value: T, nbits: u32) -> T {
    let fitted = fit::sfit(value, nbits);
    if fitted.zero_width {
        T::ZERO
    } else if fitted.fits {
        value
    } else if fitted.negative {
        fitted.floor
    } else {
        fitted.ceiling
    }
}
