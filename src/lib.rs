// ============================================================================
// Safe Integer Arithmetic Library
// Overflow-aware integer primitives under four failure policies
// ============================================================================

//! # Safe Integer Arithmetic
//!
//! Integer primitives that detect every overflow, division by zero, bad shift
//! count and out-of-range conversion, and let the caller pick what happens
//! next.
//!
//! ## Features
//!
//! - **Mixed-type operands** promoted by the usual arithmetic conversions
//!   (`i8`/`i16`/`u8`/`u16` to `i32`, then widest wins, unsigned if either is)
//! - **Exact overflow detection** on the original operand values, up to
//!   `i128`/`u128`
//! - **Four policies** per operation family:
//!   [`checked`], [`flagged`], [`truncating`], [`saturating`]
//! - **No panics** for any input, and no allocation
//!
//! ## Example
//!
//! ```rust
//! use safe_int_arith::prelude::*;
//!
//! // Checked: the exact result or an error
//! assert_eq!(checked::add(i32::MAX - 1, 1i32), Ok(i32::MAX));
//! assert_eq!(
//!     checked::div(5i32, 0i32).unwrap_err().to_string(),
//!     "div: domain error (divisor is zero)"
//! );
//!
//! // Flagged: a value always, and a flag raised on failure
//! let mut failed = false;
//! let wrapped = flagged::add(i32::MAX - 1, 2i32, &mut failed);
//! assert_eq!((wrapped, failed), (i32::MIN, true));
//!
//! // Truncating and saturating never fail
//! assert_eq!(truncating::div(i32::MIN, -1i32), i32::MIN);
//! assert_eq!(saturating::div(i32::MIN, -1i32), i32::MAX);
//!
//! // Field validation
//! assert!(checked::sfit(9i32, 4).is_err());
//! assert_eq!(checked::sfit(9i32, 5), Ok(9));
//! ```

pub mod detect;
pub mod errors;
pub mod exact;
pub mod flag;
pub mod int;
#[cfg(feature = "logging")]
pub mod logging;
pub mod policy;

pub use errors::{ArithError, ArithResult, FailureKind, Op};
pub use exact::Exact;
pub use flag::FailureFlag;
pub use int::{IntType, PrimInt, Promote, ResultType, ShiftType};
pub use policy::{checked, flagged, saturating, truncating, Policy};

// Re-exports for convenience
pub mod prelude {
    pub use crate::errors::{ArithError, ArithResult, FailureKind, Op};
    pub use crate::flag::FailureFlag;
    pub use crate::int::{PrimInt, Promote, ResultType, ShiftType};
    pub use crate::policy::{checked, flagged, saturating, truncating, Policy};
}
