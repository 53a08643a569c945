// ============================================================================
// Flagged Policy
// Always a value; failures raise a caller-owned flag
// ============================================================================

//! Flagged operations return the same value as [`truncating`](super::truncating)
//! and additionally raise `flag` when the operation failed. A flag is never
//! read or cleared, so one flag can collect a whole batch:
//!
//! ```rust
//! use safe_int_arith::flagged;
//!
//! let mut failed = false;
//! let q = flagged::div(10i32, 3i32, &mut failed);
//! let r = flagged::rem(10i32, 3i32, &mut failed);
//! assert_eq!((q, r, failed), (3, 1, false));
//!
//! assert_eq!(flagged::div(10i32, 0i32, &mut failed), -1);
//! assert!(failed);
//! ```

use super::truncating::{quotient_of, remainder_of, shifted_left};
use crate::detect::{arith, division, fit, shift, Detected, DivisionCase, ShlOutcome};
use crate::errors::{FailureKind, Op};
use crate::flag::{raise, FailureFlag};
use crate::int::{PrimInt, Promote, ResultType, ShiftType};

#[inline]
fn wrapped<T, F: FailureFlag>(op: Op, detected: Detected<T>, flag: F) -> T {
    if detected.overflowed {
        raise(flag, op, FailureKind::Overflow);
    }
    detected.wrapped
}

#[inline]
pub fn add<L: Promote<R>, R: PrimInt, F: FailureFlag>(lhs: L, rhs: R, flag: F) -> ResultType<L, R> {
    wrapped(Op::Add, arith::add(lhs, rhs), flag)
}

#[inline]
pub fn sub<L: Promote<R>, R: PrimInt, F: FailureFlag>(lhs: L, rhs: R, flag: F) -> ResultType<L, R> {
    wrapped(Op::Sub, arith::sub(lhs, rhs), flag)
}

#[inline]
pub fn mul<L: Promote<R>, R: PrimInt, F: FailureFlag>(lhs: L, rhs: R, flag: F) -> ResultType<L, R> {
    wrapped(Op::Mul, arith::mul(lhs, rhs), flag)
}

#[inline]
fn check_division<T, F: FailureFlag>(op: Op, case: &DivisionCase<T>, flag: F) {
    match case {
        DivisionCase::ByZero { .. } => raise(flag, op, FailureKind::Domain),
        DivisionCase::MinByMinusOne => raise(flag, op, FailureKind::Overflow),
        DivisionCase::Defined { .. } => {}
    }
}

/// T-division quotient. Division by zero yields the all-ones pattern and
/// `MIN / -1` yields `MIN`, both with `flag` raised.
#[inline]
pub fn div<L: Promote<R>, R: PrimInt, F: FailureFlag>(dividend: L, divisor: R, flag: F) -> ResultType<L, R> {
    let case = division::classify(dividend, divisor);
    check_division(Op::Div, &case, flag);
    quotient_of(case)
}

/// T-division remainder. Zero, with `flag` raised, whenever the matching
/// quotient is undefined.
#[inline]
pub fn rem<L: Promote<R>, R: PrimInt, F: FailureFlag>(dividend: L, divisor: R, flag: F) -> ResultType<L, R> {
    let case = division::classify(dividend, divisor);
    check_division(Op::Rem, &case, flag);
    remainder_of(case)
}

/// Left shift. An invalid count yields zero; lost bits yield the wrapped
/// pattern. Both raise `flag`.
#[inline]
pub fn shl<L: PrimInt, C: PrimInt, F: FailureFlag>(value: L, count: C, flag: F) -> ShiftType<L> {
    let outcome = shift::shl(value, count);
    match outcome {
        ShlOutcome::InvalidCount => raise(flag, Op::Shl, FailureKind::OutOfRange),
        ShlOutcome::Shifted { overflowed: true, .. } => raise(flag, Op::Shl, FailureKind::Overflow),
        ShlOutcome::Shifted { .. } => {}
    }
    shifted_left(outcome)
}

/// Right shift. An invalid count raises `flag` and shifts every bit out.
#[inline]
pub fn shr<L: PrimInt, C: PrimInt, F: FailureFlag>(value: L, count: C, flag: F) -> ShiftType<L> {
    match shift::shr(value, count) {
        Some(shifted) => shifted,
        None => {
            raise(flag, Op::Shr, FailureKind::OutOfRange);
            shift::shr_exhausted(value)
        }
    }
}

#[inline]
pub fn conv<T: PrimInt, S: PrimInt, F: FailureFlag>(value: S, flag: F) -> T {
    let detected = fit::conv::<S, T>(value);
    if detected.overflowed {
        raise(flag, Op::Conv, FailureKind::Range);
    }
    detected.wrapped
}

/// Low `nbits` bits of `value`, raising `flag` if `value` is negative or had
/// higher bits set.
#[inline]
pub fn ufit<T: PrimInt, F: FailureFlag>(value: T, nbits: u32, flag: F) -> T {
    let fitted = fit::ufit(value, nbits);
    if !fitted.fits() {
        raise(flag, Op::Ufit, FailureKind::Range);
    }
    fitted.masked
}

/// Low `nbits` bits of `value`, sign-extended, raising `flag` if that
/// changed the value or the field is zero-width.
#[inline]
pub fn sfit<T: PrimInt, F: FailureFlag>(value: T, nbits: u32, flag: F) -> T {
    let fitted = fit::sfit(value, nbits);
    if !fitted.fits {
        raise(flag, Op::Sfit, FailureKind::Range);
    }
    fitted.truncated
}
