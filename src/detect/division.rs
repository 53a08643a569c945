// ============================================================================
// Div / Rem Detection
// ============================================================================

use crate::int::{PrimInt, Promote, ResultType};

/// Classification of a T-division before any native division runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionCase<T> {
    /// The divisor is zero.
    ByZero {
        /// Sign of the original dividend.
        negative_dividend: bool,
    },
    /// Signed `MIN / -1`, whose quotient is one past `MAX`.
    MinByMinusOne,
    /// Both operands converted to the result type; native division is safe.
    Defined { dividend: T, divisor: T },
}

impl<T: PrimInt> DivisionCase<T> {
    /// Quotient truncated toward zero, when defined.
    #[inline]
    pub fn quotient(self) -> Option<T> {
        match self {
            DivisionCase::Defined { dividend, divisor } => Some(dividend.wrapping_div(divisor)),
            _ => None,
        }
    }

    /// Remainder carrying the sign of the dividend, when defined.
    #[inline]
    pub fn remainder(self) -> Option<T> {
        match self {
            DivisionCase::Defined { dividend, divisor } => Some(dividend.wrapping_rem(divisor)),
            _ => None,
        }
    }
}

/// Checks the two special cases of division in the order they must be
/// excluded: a zero divisor, then `MIN / -1` in a signed result type.
///
/// A nonzero divisor stays nonzero in the result type, which is never
/// narrower than the divisor's own type.
#[inline]
pub fn classify<L, R>(dividend: L, divisor: R) -> DivisionCase<ResultType<L, R>>
where
    L: Promote<R>,
    R: PrimInt,
{
    if divisor == R::ZERO {
        return DivisionCase::ByZero {
            negative_dividend: dividend.is_negative(),
        };
    }

    let n: ResultType<L, R> = dividend.wrapping_cast();
    let d: ResultType<L, R> = divisor.wrapping_cast();
    if <ResultType<L, R>>::SIGNED && n == <ResultType<L, R>>::MIN && d == <ResultType<L, R>>::all_ones() {
        return DivisionCase::MinByMinusOne;
    }

    DivisionCase::Defined {
        dividend: n,
        divisor: d,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_zero() {
        assert_eq!(
            classify(5i32, 0i32),
            DivisionCase::ByZero {
                negative_dividend: false
            }
        );
        assert_eq!(
            classify(-5i8, 0u64),
            DivisionCase::ByZero {
                negative_dividend: true
            }
        );
    }

    #[test]
    fn test_min_by_minus_one() {
        assert_eq!(classify(i32::MIN, -1i32), DivisionCase::MinByMinusOne);
        assert_eq!(classify(i64::MIN, -1i8), DivisionCase::MinByMinusOne);
        // i8::MIN is not the minimum of the promoted type.
        assert_eq!(classify(i8::MIN, -1i8).quotient(), Some(128));
        // Unsigned result types have no such case.
        assert_eq!(classify(0u32, u32::MAX).quotient(), Some(0));
    }

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(classify(7i32, -2i32).quotient(), Some(-3));
        assert_eq!(classify(7i32, -2i32).remainder(), Some(1));
        assert_eq!(classify(-7i32, 2i32).quotient(), Some(-3));
        assert_eq!(classify(-7i32, 2i32).remainder(), Some(-1));
    }

    #[test]
    fn test_usual_conversion_of_operands() {
        // -6 becomes 2^32 - 6 in u32 before dividing.
        assert_eq!(classify(-6i32, 2u32).quotient(), Some((u32::MAX - 5) / 2));
    }
}
