// ============================================================================
// Shl / Shr Detection
// ============================================================================

use crate::int::{PrimInt, ShiftType};

/// Validates a shift count against a width of `bits`.
///
/// Negative counts and counts of `bits` or more are rejected.
#[inline]
pub fn shift_count<C: PrimInt>(count: C, bits: u32) -> Option<u32> {
    let exact = count.to_exact();
    if exact.is_negative() {
        return None;
    }
    u32::try_from(exact.magnitude()).ok().filter(|&n| n < bits)
}

/// Outcome of a left shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShlOutcome<T> {
    /// The count is negative or not below the width of the result type.
    InvalidCount,
    /// The bit pattern shifted left by a valid count.
    Shifted {
        value: T,
        /// Shifting back did not reproduce the original value.
        overflowed: bool,
    },
}

/// Left shift in the promoted type of `value`.
///
/// The bit pattern is shifted as if unsigned and reinterpreted in the result
/// type. Shifting that back right (arithmetically for signed types) must give
/// the original value; if it doesn't, bits were lost or the sign changed.
#[inline]
pub fn shl<L: PrimInt, C: PrimInt>(value: L, count: C) -> ShlOutcome<ShiftType<L>> {
    let original = value.promote();
    let Some(n) = shift_count(count, <ShiftType<L>>::BITS) else {
        return ShlOutcome::InvalidCount;
    };

    let shifted = original.wrapping_shl(n);
    ShlOutcome::Shifted {
        value: shifted,
        overflowed: shifted.wrapping_shr(n) != original,
    }
}

/// Right shift in the promoted type of `value`, or `None` for an invalid
/// count. Never overflows.
#[inline]
pub fn shr<L: PrimInt, C: PrimInt>(value: L, count: C) -> Option<ShiftType<L>> {
    let original = value.promote();
    shift_count(count, <ShiftType<L>>::BITS).map(|n| original.wrapping_shr(n))
}

/// Value of a right shift by an unbounded count: every bit is shifted out
/// and replaced by copies of the sign.
#[inline]
pub fn shr_exhausted<L: PrimInt>(value: L) -> ShiftType<L> {
    if value.is_negative() {
        <ShiftType<L>>::all_ones()
    } else {
        <ShiftType<L>>::ZERO
    }
}
