// ============================================================================
// Conversion and Width-Fitting Detection
// ============================================================================

use super::Detected;
use crate::int::PrimInt;

/// Converts `value` to `T`, reporting whether it was exactly representable.
#[inline]
pub fn conv<S: PrimInt, T: PrimInt>(value: S) -> Detected<T> {
    Detected {
        wrapped: value.wrapping_cast(),
        overflowed: !value.to_exact().fits::<T>(),
        negative: value.is_negative(),
    }
}

/// Low `nbits` bits set, for `nbits` below 128.
#[inline]
const fn low_mask(nbits: u32) -> u128 {
    (1u128 << nbits) - 1
}

/// Outcome of fitting a value into an unsigned field of `nbits` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsignedFit<T> {
    pub negative: bool,
    /// The low `nbits` bits of the value, or the value itself when the field
    /// is at least as wide as the type's value bits.
    pub masked: T,
    /// Masking changed the value.
    pub truncated: bool,
    /// Largest value the field holds, capped at `T::MAX`.
    pub ceiling: T,
}

impl<T: PrimInt> UnsignedFit<T> {
    #[inline]
    pub fn fits(&self) -> bool {
        !self.negative && !self.truncated
    }
}

/// Fits `value` into `[0, 2^nbits)`.
///
/// A field of `T::DIGITS` bits or more holds every non-negative value of `T`,
/// so the value is passed through unmasked in that case. Zero fits zero bits.
#[inline]
pub fn ufit<T: PrimInt>(value: T, nbits: u32) -> UnsignedFit<T> {
    let negative = value.is_negative();
    if nbits >= T::DIGITS {
        return UnsignedFit {
            negative,
            masked: value,
            truncated: false,
            ceiling: T::MAX,
        };
    }

    let mask = low_mask(nbits);
    let masked = T::from_bits(value.to_bits() & mask);
    UnsignedFit {
        negative,
        masked,
        truncated: masked != value,
        ceiling: T::from_bits(mask),
    }
}

/// Outcome of fitting a value into a two's-complement field of `nbits` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedFit<T> {
    /// The field has no bits at all; no value fits.
    pub zero_width: bool,
    pub fits: bool,
    pub negative: bool,
    /// The low `nbits` bits sign-extended from bit `nbits - 1`, converted
    /// back to `T`. Zero for a zero-width field.
    pub truncated: T,
    /// Smallest value of the field that `T` can hold.
    pub floor: T,
    /// Largest value of the field that `T` can hold.
    pub ceiling: T,
}

/// Fits `value` into `[-2^(nbits-1), 2^(nbits-1))`.
///
/// Any field of `T::DIGITS + 1` bits or more holds every value of `T`. For
/// unsigned `T` that is one bit more than the type's width: the all-ones
/// pattern needs a zero sign bit on top to stay non-negative.
#[inline]
pub fn sfit<T: PrimInt>(value: T, nbits: u32) -> SignedFit<T> {
    let negative = value.is_negative();
    if nbits > T::DIGITS {
        return SignedFit {
            zero_width: false,
            fits: true,
            negative,
            truncated: value,
            floor: T::MIN,
            ceiling: T::MAX,
        };
    }
    if nbits == 0 {
        return SignedFit {
            zero_width: true,
            fits: false,
            negative,
            truncated: T::ZERO,
            floor: T::ZERO,
            ceiling: T::ZERO,
        };
    }

    // 1 <= nbits <= DIGITS <= 128 from here on.
    let half = 1u128 << (nbits - 1);
    let field = if nbits == u128::BITS { u128::MAX } else { low_mask(nbits) };
    let low = value.to_bits() & field;
    let extended = if low & half != 0 { low | !field } else { low };

    SignedFit {
        zero_width: false,
        fits: value.to_exact().fits_signed_bits(nbits),
        negative,
        truncated: T::from_bits(extended),
        floor: if T::SIGNED { T::from_bits(half.wrapping_neg()) } else { T::ZERO },
        ceiling: T::from_bits(half - 1),
    }
}
