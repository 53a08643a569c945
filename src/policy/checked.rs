// ============================================================================
// Checked Policy
// Exact results or an error, never both
// ============================================================================

//! Checked operations: the exact result, or an [`ArithError`] naming the
//! operation and the failure kind.
//!
//! ```rust
//! use safe_int_arith::{checked, FailureKind};
//!
//! assert_eq!(checked::add(i32::MAX - 1, 1i32), Ok(i32::MAX));
//! let err = checked::add(i32::MAX - 1, 2i32).unwrap_err();
//! assert_eq!(err.kind(), FailureKind::Overflow);
//! ```

use crate::detect::{arith, division, fit, shift, Detected, DivisionCase, ShlOutcome};
use crate::errors::{ArithError, ArithResult, FailureKind, Op};
use crate::int::{PrimInt, Promote, ResultType, ShiftType};

#[inline]
fn exact<T>(op: Op, detected: Detected<T>) -> ArithResult<T> {
    if detected.overflowed {
        return Err(ArithError::new(op, FailureKind::Overflow, "result out of range"));
    }
    Ok(detected.wrapped)
}

/// # Errors
/// `Overflow` if the sum does not fit the result type.
#[inline]
pub fn add<L: Promote<R>, R: PrimInt>(lhs: L, rhs: R) -> ArithResult<ResultType<L, R>> {
    exact(Op::Add, arith::add(lhs, rhs))
}

/// # Errors
/// `Overflow` if the difference does not fit the result type.
#[inline]
pub fn sub<L: Promote<R>, R: PrimInt>(lhs: L, rhs: R) -> ArithResult<ResultType<L, R>> {
    exact(Op::Sub, arith::sub(lhs, rhs))
}

/// # Errors
/// `Overflow` if the product does not fit the result type.
#[inline]
pub fn mul<L: Promote<R>, R: PrimInt>(lhs: L, rhs: R) -> ArithResult<ResultType<L, R>> {
    exact(Op::Mul, arith::mul(lhs, rhs))
}

#[inline]
fn defined<T: PrimInt>(op: Op, case: DivisionCase<T>) -> ArithResult<DivisionCase<T>> {
    match case {
        DivisionCase::ByZero { .. } => Err(ArithError::new(op, FailureKind::Domain, "divisor is zero")),
        DivisionCase::MinByMinusOne => Err(ArithError::new(op, FailureKind::Overflow, "minimum divided by -1")),
        case => Ok(case),
    }
}

/// T-division quotient.
///
/// # Errors
/// - `Domain` if `divisor` is zero
/// - `Overflow` for `MIN / -1` in a signed result type
#[inline]
pub fn div<L: Promote<R>, R: PrimInt>(dividend: L, divisor: R) -> ArithResult<ResultType<L, R>> {
    let case = defined(Op::Div, division::classify(dividend, divisor))?;
    Ok(case.quotient().unwrap_or(<ResultType<L, R>>::ZERO))
}

/// T-division remainder.
///
/// `MIN % -1` is reported like the quotient it belongs to, even though the
/// remainder itself would be zero.
///
/// # Errors
/// - `Domain` if `divisor` is zero
/// - `Overflow` for `MIN % -1` in a signed result type
#[inline]
pub fn rem<L: Promote<R>, R: PrimInt>(dividend: L, divisor: R) -> ArithResult<ResultType<L, R>> {
    let case = defined(Op::Rem, division::classify(dividend, divisor))?;
    Ok(case.remainder().unwrap_or(<ResultType<L, R>>::ZERO))
}

/// Left shift in the promoted type of `value`.
///
/// # Errors
/// - `OutOfRange` if `count` is negative or not below the result width
/// - `Overflow` if bits or the sign are lost
#[inline]
pub fn shl<L: PrimInt, C: PrimInt>(value: L, count: C) -> ArithResult<ShiftType<L>> {
    match shift::shl(value, count) {
        ShlOutcome::InvalidCount => Err(ArithError::new(Op::Shl, FailureKind::OutOfRange, "invalid shift count")),
        ShlOutcome::Shifted { overflowed: true, .. } => {
            Err(ArithError::new(Op::Shl, FailureKind::Overflow, "bits shifted out"))
        }
        ShlOutcome::Shifted { value, .. } => Ok(value),
    }
}

/// Right shift in the promoted type of `value`: arithmetic for signed,
/// logical for unsigned.
///
/// # Errors
/// `OutOfRange` if `count` is negative or not below the result width.
#[inline]
pub fn shr<L: PrimInt, C: PrimInt>(value: L, count: C) -> ArithResult<ShiftType<L>> {
    shift::shr(value, count).ok_or_else(|| ArithError::new(Op::Shr, FailureKind::OutOfRange, "invalid shift count"))
}

/// Converts `value` to `T`.
///
/// ```rust
/// use safe_int_arith::checked;
///
/// assert_eq!(checked::conv::<u8, _>(255i32), Ok(255u8));
/// assert!(checked::conv::<u8, _>(-1i32).is_err());
/// ```
///
/// # Errors
/// `Range` if `value` is not representable in `T`.
#[inline]
pub fn conv<T: PrimInt, S: PrimInt>(value: S) -> ArithResult<T> {
    let detected = fit::conv::<S, T>(value);
    if detected.overflowed {
        return Err(ArithError::new(Op::Conv, FailureKind::Range, "value not representable"));
    }
    Ok(detected.wrapped)
}

/// Validates `value` against an unsigned field of `nbits` bits.
///
/// # Errors
/// `Range` if `value` is negative or not below `2^nbits`.
#[inline]
pub fn ufit<T: PrimInt>(value: T, nbits: u32) -> ArithResult<T> {
    let fitted = fit::ufit(value, nbits);
    if fitted.negative {
        return Err(ArithError::new(Op::Ufit, FailureKind::Range, "negative value"));
    }
    if fitted.truncated {
        return Err(ArithError::new(Op::Ufit, FailureKind::Range, "too big"));
    }
    Ok(value)
}

/// Validates `value` against a two's-complement field of `nbits` bits.
///
/// # Errors
/// `Range` if `nbits` is zero or `value` lies outside
/// `[-2^(nbits-1), 2^(nbits-1))`.
#[inline]
pub fn sfit<T: PrimInt>(value: T, nbits: u32) -> ArithResult<T> {
    let fitted = fit::sfit(value, nbits);
    if fitted.zero_width {
        return Err(ArithError::new(Op::Sfit, FailureKind::Range, "zero-width field"));
    }
    if !fitted.fits {
        let reason = if fitted.negative { "too small" } else { "too big" };
        return Err(ArithError::new(Op::Sfit, FailureKind::Range, reason));
    }
    Ok(value)
}

// ============================================================================
// Tests
// ============================================================================
