// ============================================================================
// Arithmetic Errors
// Error types raised by the checked policy
// ============================================================================

use std::fmt;
use thiserror::Error as ThisError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operation family an error or flag was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    Conv,
    Ufit,
    Sfit,
}

impl Op {
    pub const fn as_str(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
            Op::Rem => "rem",
            Op::Shl => "shl",
            Op::Shr => "shr",
            Op::Conv => "conv",
            Op::Ufit => "ufit",
            Op::Sfit => "sfit",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum FailureKind {
    /// The exact result exceeds the range of the result type
    Overflow,
    /// The operation is undefined for its inputs (division by zero)
    Domain,
    /// A value cannot be represented in the requested type or width
    Range,
    /// An auxiliary parameter, such as a shift count, is itself invalid
    OutOfRange,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Overflow => write!(f, "arithmetic overflow"),
            FailureKind::Domain => write!(f, "domain error"),
            FailureKind::Range => write!(f, "range error"),
            FailureKind::OutOfRange => write!(f, "argument out of range"),
        }
    }
}

/// Failure of a checked operation.
///
/// Carries the operation, the failure kind and a short static reason such as
/// `"divisor is zero"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ThisError)]
#[error("{op}: {kind} ({reason})")]
pub struct ArithError {
    op: Op,
    kind: FailureKind,
    reason: &'static str,
}

impl ArithError {
    /// Builds the error and records it as a trace event.
    #[cold]
    #[inline(never)]
    pub(crate) fn new(op: Op, kind: FailureKind, reason: &'static str) -> Self {
        tracing::trace!(op = %op, kind = %kind, reason, "checked operation failed");
        Self { op, kind, reason }
    }

    #[inline]
    pub const fn op(&self) -> Op {
        self.op
    }

    #[inline]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    #[inline]
    pub const fn reason(&self) -> &'static str {
        self.reason
    }
}

/// Result type alias for checked operations
pub type ArithResult<T> = Result<T, ArithError>;
