// ============================================================================
// Detection Primitives
// One failure detector per operation family, shared by all four policies
// ============================================================================
//
// A detector computes everything any policy could need in a single pass:
// the wrapped result, whether the operation failed, and the facts the
// saturating policy clamps by. Policies then differ only in what they do
// with a failure. No detector panics, for any input.

pub mod arith;
pub mod division;
pub mod fit;
pub mod shift;

pub use arith::{compute_with_overflow, ArithOp};
pub use division::DivisionCase;
pub use fit::{SignedFit, UnsignedFit};
pub use shift::ShlOutcome;

/// Outcome of an operation whose only failure mode is an unrepresentable
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detected<T> {
    /// Exact result reduced modulo 2^width of `T`.
    pub wrapped: T,
    /// Whether the exact result is outside the range of `T`.
    pub overflowed: bool,
    /// Sign of the exact result.
    pub negative: bool,
}

impl<T: crate::int::PrimInt> Detected<T> {
    /// The bound of `T` nearest to the exact result, or the exact result
    /// itself if it fits.
    #[inline]
    pub fn saturated(self) -> T {
        if !self.overflowed {
            self.wrapped
        } else if self.negative {
            T::MIN
        } else {
            T::MAX
        }
    }
}
