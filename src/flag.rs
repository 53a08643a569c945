// ============================================================================
// Failure Flags
// Caller-owned cells the flagged policy reports failures through
// ============================================================================

use crate::errors::{FailureKind, Op};
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};

/// A caller-owned cell that a flagged operation marks on failure.
///
/// The library only ever calls [`FailureFlag::raise`], and only when the
/// operation failed. It never reads the cell and never clears it, so one flag
/// can be threaded through a batch of operations and checked once at the end:
///
/// ```rust
/// use safe_int_arith::flagged;
///
/// let mut failed = false;
/// let a = flagged::add(i32::MAX, 1i32, &mut failed);
/// let b = flagged::mul(3i32, 4i32, &mut failed);
/// assert!(failed);
/// assert_eq!((a, b), (i32::MIN, 12));
/// ```
pub trait FailureFlag {
    /// Marks the cell as failed.
    fn raise(self);
}

impl FailureFlag for &mut bool {
    #[inline]
    fn raise(self) {
        *self = true;
    }
}

macro_rules! int_flag_impl {
    ($($t:ty),*) => {
        $(
            impl FailureFlag for &mut $t {
                #[inline]
                fn raise(self) {
                    *self = 1;
                }
            }
        )*
    };
}

int_flag_impl!(i32, u32, u8);

impl FailureFlag for &Cell<bool> {
    #[inline]
    fn raise(self) {
        self.set(true);
    }
}

/// Shared across threads. The store is relaxed: the flag carries no data
/// other than itself.
impl FailureFlag for &AtomicBool {
    #[inline]
    fn raise(self) {
        self.store(true, Ordering::Relaxed);
    }
}

/// Raises `flag` for a failed `op`.
#[cold]
#[inline(never)]
pub(crate) fn raise<F: FailureFlag>(flag: F, op: Op, kind: FailureKind) {
    tracing::trace!(op = %op, kind = %kind, "flagged operation failed");
    flag.raise();
}
