// ============================================================================
// Truncating Policy
// Total operations returning the result modulo 2^width
// ============================================================================

//! Truncating operations never fail. Results wrap modulo 2^width; the
//! undefined cases fall back to fixed values:
//!
//! | Case | Result |
//! |---|---|
//! | `div` by zero | all-ones pattern (`-1` signed, `MAX` unsigned) |
//! | `div` of `MIN` by `-1` | `MIN` |
//! | `rem` by zero, `rem` of `MIN` by `-1` | `0` |
//! | `shl` by an invalid count | `0` |
//! | `shr` by an invalid count | every bit shifted out (`0` or `-1`) |

use crate::detect::{arith, division, fit, shift, DivisionCase, ShlOutcome};
use crate::int::{PrimInt, Promote, ResultType, ShiftType};

#[inline]
pub fn add<L: Promote<R>, R: PrimInt>(lhs: L, rhs: R) -> ResultType<L, R> {
    arith::add(lhs, rhs).wrapped
}

#[inline]
pub fn sub<L: Promote<R>, R: PrimInt>(lhs: L, rhs: R) -> ResultType<L, R> {
    arith::sub(lhs, rhs).wrapped
}

#[inline]
pub fn mul<L: Promote<R>, R: PrimInt>(lhs: L, rhs: R) -> ResultType<L, R> {
    arith::mul(lhs, rhs).wrapped
}

#[inline]
pub(super) fn quotient_of<T: PrimInt>(case: DivisionCase<T>) -> T {
    match case {
        DivisionCase::ByZero { .. } => T::all_ones(),
        DivisionCase::MinByMinusOne => T::MIN,
        DivisionCase::Defined { dividend, divisor } => dividend.wrapping_div(divisor),
    }
}

#[inline]
pub(super) fn remainder_of<T: PrimInt>(case: DivisionCase<T>) -> T {
    case.remainder().unwrap_or(T::ZERO)
}

#[inline]
pub(super) fn shifted_left<T: PrimInt>(outcome: ShlOutcome<T>) -> T {
    match outcome {
        ShlOutcome::InvalidCount => T::ZERO,
        ShlOutcome::Shifted { value, .. } => value,
    }
}

/// T-division quotient, see the module table for the undefined cases.
#[inline]
pub fn div<L: Promote<R>, R: PrimInt>(dividend: L, divisor: R) -> ResultType<L, R> {
    quotient_of(division::classify(dividend, divisor))
}

#[inline]
pub fn rem<L: Promote<R>, R: PrimInt>(dividend: L, divisor: R) -> ResultType<L, R> {
    remainder_of(division::classify(dividend, divisor))
}

#[inline]
pub fn shl<L: PrimInt, C: PrimInt>(value: L, count: C) -> ShiftType<L> {
    shifted_left(shift::shl(value, count))
}

#[inline]
pub fn shr<L: PrimInt, C: PrimInt>(value: L, count: C) -> ShiftType<L> {
    shift::shr(value, count).unwrap_or_else(|| shift::shr_exhausted(value))
}

/// Converts `value` to `T` with `as` semantics.
#[inline]
pub fn conv<T: PrimInt, S: PrimInt>(value: S) -> T {
    fit::conv::<S, T>(value).wrapped
}

/// Low `nbits` bits of `value`. A field at least as wide as the value bits of
/// `T` returns `value` unchanged, negative or not.
#[inline]
pub fn ufit<T: PrimInt>(value: T, nbits: u32) -> T {
    fit::ufit(value, nbits).masked
}

/// Low `nbits` bits of `value`, sign-extended from bit `nbits - 1`. A
/// zero-width field yields zero.
#[inline]
pub fn sfit<T: PrimInt>(value: T, nbits: u32) -> T {
    fit::sfit(value, nbits).truncated
}
