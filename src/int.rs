// ============================================================================
// Primitive Integers and Promotion
// Capability trait over fixed-width integers and the result-type resolver
// ============================================================================
//
// Every operation in this crate is generic over `PrimInt`, which is sealed
// and implemented for the ten fixed-width primitives. Result types follow
// the usual arithmetic conversions:
//
// - integer promotion widens anything narrower than 32 bits to `i32`
// - the common type of two promoted types takes the wider width, and is
//   unsigned as soon as either side is unsigned
//
// The rule exists twice: once at the type level (`Common`, `Promote`,
// `ResultType`) so results are statically typed, and once as a plain value
// (`IntType`) for callers that reason about types at runtime. Tests keep the
// two in lock-step.

use crate::exact::Exact;
use std::fmt;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width two's-complement integer usable as an operand.
///
/// Sealed: implemented for `i8`, `i16`, `i32`, `i64`, `i128`, `u8`, `u16`,
/// `u32`, `u64` and `u128`. Pointer-sized integers are left out so that the
/// promotion table does not depend on the target.
pub trait PrimInt:
    sealed::Sealed + Copy + Eq + Ord + Hash + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Width in bits.
    const BITS: u32;
    /// Whether the type is signed.
    const SIGNED: bool;
    /// Number of value bits, excluding the sign bit of signed types.
    const DIGITS: u32 = Self::BITS - Self::SIGNED as u32;
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;

    /// The type this one is widened to before any arithmetic.
    type Promoted: PrimInt;

    /// Applies integer promotion.
    fn promote(self) -> Self::Promoted;

    fn is_negative(self) -> bool;

    /// Two's-complement bit pattern, sign-extended to 128 bits.
    fn to_bits(self) -> u128;

    /// Keeps the low `BITS` bits of `bits`.
    fn from_bits(bits: u128) -> Self;

    /// Exact mathematical value.
    fn to_exact(self) -> Exact;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Native division. Callers must exclude a zero divisor and `MIN / -1`.
    fn wrapping_div(self, rhs: Self) -> Self;

    /// Native remainder. Same preconditions as [`PrimInt::wrapping_div`].
    fn wrapping_rem(self, rhs: Self) -> Self;

    /// Bit-pattern left shift. `count` must be below `BITS`.
    fn wrapping_shl(self, count: u32) -> Self;

    /// Arithmetic right shift for signed types, logical for unsigned ones.
    /// `count` must be below `BITS`.
    fn wrapping_shr(self, count: u32) -> Self;

    /// Converts with `as` semantics: truncation when narrowing, sign or zero
    /// extension when widening.
    #[inline]
    fn wrapping_cast<T: PrimInt>(self) -> T {
        T::from_bits(self.to_bits())
    }

    /// The all-ones bit pattern (`-1` for signed types, `MAX` otherwise).
    #[inline]
    fn all_ones() -> Self {
        Self::from_bits(u128::MAX)
    }
}

macro_rules! prim_int_impl {
    (@ops $t:ty, $promoted:ty) => {
        #[inline]
        fn promote(self) -> $promoted {
            self as $promoted
        }

        #[inline]
        fn from_bits(bits: u128) -> Self {
            bits as $t
        }

        #[inline(always)]
        fn wrapping_add(self, rhs: Self) -> Self {
            <$t>::wrapping_add(self, rhs)
        }

        #[inline(always)]
        fn wrapping_sub(self, rhs: Self) -> Self {
            <$t>::wrapping_sub(self, rhs)
        }

        #[inline(always)]
        fn wrapping_mul(self, rhs: Self) -> Self {
            <$t>::wrapping_mul(self, rhs)
        }

        #[inline(always)]
        fn wrapping_div(self, rhs: Self) -> Self {
            <$t>::wrapping_div(self, rhs)
        }

        #[inline(always)]
        fn wrapping_rem(self, rhs: Self) -> Self {
            <$t>::wrapping_rem(self, rhs)
        }

        #[inline(always)]
        fn wrapping_shl(self, count: u32) -> Self {
            <$t>::wrapping_shl(self, count)
        }

        #[inline(always)]
        fn wrapping_shr(self, count: u32) -> Self {
            <$t>::wrapping_shr(self, count)
        }
    };
    ($t:ty, signed, $promoted:ty) => {
        impl sealed::Sealed for $t {}

        impl PrimInt for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = true;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0;

            type Promoted = $promoted;

            prim_int_impl!(@ops $t, $promoted);

            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline]
            fn to_bits(self) -> u128 {
                self as i128 as u128
            }

            #[inline]
            fn to_exact(self) -> Exact {
                Exact::from_i128(self as i128)
            }
        }
    };
    ($t:ty, unsigned, $promoted:ty) => {
        impl sealed::Sealed for $t {}

        impl PrimInt for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = false;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0;

            type Promoted = $promoted;

            prim_int_impl!(@ops $t, $promoted);

            #[inline]
            fn is_negative(self) -> bool {
                false
            }

            #[inline]
            fn to_bits(self) -> u128 {
                self as u128
            }

            #[inline]
            fn to_exact(self) -> Exact {
                Exact::from_u128(self as u128)
            }
        }
    };
}

prim_int_impl!(i8, signed, i32);
prim_int_impl!(i16, signed, i32);
prim_int_impl!(i32, signed, i32);
prim_int_impl!(i64, signed, i64);
prim_int_impl!(i128, signed, i128);

prim_int_impl!(u8, unsigned, i32);
prim_int_impl!(u16, unsigned, i32);
prim_int_impl!(u32, unsigned, u32);
prim_int_impl!(u64, unsigned, u64);
prim_int_impl!(u128, unsigned, u128);

// ============================================================================
// Usual Arithmetic Conversions
// ============================================================================

/// Common type of two already-promoted operand types.
pub trait Common<Rhs: PrimInt>: PrimInt {
    type Output: PrimInt;
}

macro_rules! common_impl {
    ($($lhs:ty, $rhs:ty => $out:ty;)*) => {
        $(
            impl Common<$rhs> for $lhs {
                type Output = $out;
            }
        )*
    };
}

common_impl! {
    i32, i32 => i32;    i32, u32 => u32;    i32, i64 => i64;
    i32, u64 => u64;    i32, i128 => i128;  i32, u128 => u128;

    u32, i32 => u32;    u32, u32 => u32;    u32, i64 => u64;
    u32, u64 => u64;    u32, i128 => u128;  u32, u128 => u128;

    i64, i32 => i64;    i64, u32 => u64;    i64, i64 => i64;
    i64, u64 => u64;    i64, i128 => i128;  i64, u128 => u128;

    u64, i32 => u64;    u64, u32 => u64;    u64, i64 => u64;
    u64, u64 => u64;    u64, i128 => u128;  u64, u128 => u128;

    i128, i32 => i128;  i128, u32 => u128;  i128, i64 => i128;
    i128, u64 => u128;  i128, i128 => i128; i128, u128 => u128;

    u128, i32 => u128;  u128, u32 => u128;  u128, i64 => u128;
    u128, u64 => u128;  u128, i128 => u128; u128, u128 => u128;
}

/// Resolves the result type of a binary operation between `Self` and `Rhs`.
///
/// Implemented for every pair of [`PrimInt`] types.
pub trait Promote<Rhs: PrimInt>: PrimInt {
    type Output: PrimInt;
}

impl<L, R> Promote<R> for L
where
    L: PrimInt,
    R: PrimInt,
    L::Promoted: Common<R::Promoted>,
{
    type Output = <L::Promoted as Common<R::Promoted>>::Output;
}

/// Result type of `add`, `sub`, `mul`, `div` and `rem` on `L` and `R`.
pub type ResultType<L, R> = <L as Promote<R>>::Output;

/// Result type of `shl` and `shr` on a left operand of type `L`.
pub type ShiftType<L> = <L as PrimInt>::Promoted;

// ============================================================================
// Runtime Type Descriptor
// ============================================================================

/// Width and signedness of an integer type, as a plain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntType {
    pub bits: u32,
    pub signed: bool,
}

impl IntType {
    /// Minimum width arithmetic is carried out in.
    pub const MIN_ARITH_BITS: u32 = 32;

    pub const fn new(bits: u32, signed: bool) -> Self {
        Self { bits, signed }
    }

    /// Descriptor of a primitive type.
    pub const fn of<T: PrimInt>() -> Self {
        Self::new(T::BITS, T::SIGNED)
    }

    /// Integer promotion: narrower types become a signed 32-bit integer,
    /// which holds every value of theirs.
    pub const fn promoted(self) -> Self {
        if self.bits < Self::MIN_ARITH_BITS {
            Self::new(Self::MIN_ARITH_BITS, true)
        } else {
            self
        }
    }

    /// Result type of a binary operation between `lhs` and `rhs`.
    pub const fn result_type(lhs: Self, rhs: Self) -> Self {
        let lhs = lhs.promoted();
        let rhs = rhs.promoted();
        let bits = if lhs.bits > rhs.bits { lhs.bits } else { rhs.bits };
        Self::new(bits, lhs.signed && rhs.signed)
    }

    /// Result type of a shift whose left operand is `lhs`.
    pub const fn shift_type(lhs: Self) -> Self {
        lhs.promoted()
    }
}

impl fmt::Display for IntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.signed { 'i' } else { 'u' };
        write!(f, "{}{}", prefix, self.bits)
    }
}

// ============================================================================
// Tests
// ============================================================================
