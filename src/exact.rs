// ============================================================================
// Exact Values
// Sign-magnitude integers wide enough to hold any operand exactly
// ============================================================================

use crate::int::PrimInt;

/// An exact integer in sign-magnitude form.
///
/// Every value of every [`PrimInt`] type has a representation here, which
/// makes it the common ground for deciding whether a mixed-type result is
/// representable. Zero is never negative.
///
/// Arithmetic follows the `overflowing_*` convention of the primitives: the
/// flag is set when the magnitude no longer fits 128 bits. The sign is still
/// correct in that case, so callers can clamp towards the right bound; such a
/// value is outside the range of every supported type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Exact {
    negative: bool,
    magnitude: u128,
}

impl Exact {
    pub const ZERO: Self = Self {
        negative: false,
        magnitude: 0,
    };

    #[inline]
    const fn new(negative: bool, magnitude: u128) -> Self {
        Self {
            negative: negative && magnitude != 0,
            magnitude,
        }
    }

    #[inline]
    pub const fn from_i128(value: i128) -> Self {
        Self::new(value < 0, value.unsigned_abs())
    }

    #[inline]
    pub const fn from_u128(value: u128) -> Self {
        Self::new(false, value)
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.negative
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.magnitude == 0
    }

    /// Absolute value.
    #[inline]
    pub const fn magnitude(self) -> u128 {
        self.magnitude
    }

    #[inline]
    pub const fn neg(self) -> Self {
        Self::new(!self.negative, self.magnitude)
    }

    /// Exact sum; the flag reports a magnitude beyond `u128::MAX`.
    #[inline]
    pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        if self.negative == rhs.negative {
            let (magnitude, beyond) = self.magnitude.overflowing_add(rhs.magnitude);
            if beyond {
                return (
                    Self {
                        negative: self.negative,
                        magnitude,
                    },
                    true,
                );
            }
            return (Self::new(self.negative, magnitude), false);
        }

        // Opposite signs never grow the magnitude.
        if self.magnitude >= rhs.magnitude {
            (Self::new(self.negative, self.magnitude - rhs.magnitude), false)
        } else {
            (Self::new(rhs.negative, rhs.magnitude - self.magnitude), false)
        }
    }

    /// Exact difference; the flag reports a magnitude beyond `u128::MAX`.
    #[inline]
    pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        self.overflowing_add(rhs.neg())
    }

    /// Exact product; the flag reports a magnitude beyond `u128::MAX`.
    #[inline]
    pub const fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        let negative = self.negative != rhs.negative;
        let (magnitude, beyond) = self.magnitude.overflowing_mul(rhs.magnitude);
        if beyond {
            (
                Self {
                    negative,
                    magnitude,
                },
                true,
            )
        } else {
            (Self::new(negative, magnitude), false)
        }
    }

    /// Whether the value is representable in `T`.
    #[inline]
    pub fn fits<T: PrimInt>(self) -> bool {
        if self.negative {
            self.magnitude <= T::MIN.to_bits().wrapping_neg()
        } else {
            self.magnitude <= T::MAX.to_bits()
        }
    }

    /// Whether the value lies in `[0, 2^nbits)`.
    #[inline]
    pub const fn fits_unsigned_bits(self, nbits: u32) -> bool {
        if self.negative {
            return false;
        }
        nbits >= u128::BITS || self.magnitude < (1u128 << nbits)
    }

    /// Whether the value lies in `[-2^(nbits-1), 2^(nbits-1))`.
    ///
    /// Nothing fits zero bits.
    #[inline]
    pub const fn fits_signed_bits(self, nbits: u32) -> bool {
        if nbits == 0 {
            return false;
        }
        if nbits > u128::BITS {
            return true;
        }
        let half = 1u128 << (nbits - 1);
        if self.negative {
            self.magnitude <= half
        } else {
            self.magnitude < half
        }
    }
}

impl From<i128> for Exact {
    fn from(value: i128) -> Self {
        Self::from_i128(value)
    }
}

impl From<u128> for Exact {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
