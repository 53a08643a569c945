// ============================================================================
// Failure Policies
// The four post-detection branches every operation comes in
// ============================================================================
//
// Each submodule exposes the same operation families:
//
//   add sub mul div rem shl shr conv ufit sfit
//
// - `checked`: failure returns `Err(ArithError)`, success the exact value
// - `flagged`: failure raises a caller-owned flag; a value is always returned
// - `truncating`: never fails, returns the result modulo 2^width
// - `saturating`: never fails, returns the nearest representable value
//
// The policy is picked by calling into a module, not by runtime state.
// `Policy` exists for callers that need to name or store the choice.

pub mod checked;
pub mod flagged;
pub mod saturating;
pub mod truncating;

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Names one of the four failure policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Policy {
    /// Failure is an error that preempts the result
    Checked,
    /// Failure raises a flag next to a defined fallback result
    Flagged,
    /// Results wrap modulo 2^width
    Truncating,
    /// Results clamp to the nearest bound
    Saturating,
}

impl Policy {
    pub const ALL: [Policy; 4] = [
        Policy::Checked,
        Policy::Flagged,
        Policy::Truncating,
        Policy::Saturating,
    ];

    /// Two-letter prefix conventionally used for the policy (`cx`, `cf`,
    /// `tr`, `sr`).
    pub const fn prefix(self) -> &'static str {
        match self {
            Policy::Checked => "cx",
            Policy::Flagged => "cf",
            Policy::Truncating => "tr",
            Policy::Saturating => "sr",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Policy::Checked => "checked",
            Policy::Flagged => "flagged",
            Policy::Truncating => "truncating",
            Policy::Saturating => "saturating",
        }
    }

    /// Whether every call under this policy returns a value.
    pub const fn is_total(self) -> bool {
        !matches!(self, Policy::Checked)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown policy: {0:?}")]
pub struct ParsePolicyError(String);

impl FromStr for Policy {
    type Err = ParsePolicyError;

    /// Accepts the full name or the two-letter prefix, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Policy::ALL
            .into_iter()
            .find(|p| wanted.eq_ignore_ascii_case(p.name()) || wanted.eq_ignore_ascii_case(p.prefix()))
            .ok_or_else(|| ParsePolicyError(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_prefixes() {
        assert_eq!("checked".parse::<Policy>(), Ok(Policy::Checked));
        assert_eq!("CF".parse::<Policy>(), Ok(Policy::Flagged));
        assert_eq!(" Truncating ".parse::<Policy>(), Ok(Policy::Truncating));
        assert_eq!("sr".parse::<Policy>(), Ok(Policy::Saturating));
        assert_eq!(
            "wrapping".parse::<Policy>(),
            Err(ParsePolicyError("wrapping".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for policy in Policy::ALL {
            assert_eq!(policy.to_string().parse::<Policy>(), Ok(policy));
            assert_eq!(policy.prefix().parse::<Policy>(), Ok(policy));
        }
    }

    #[test]
    fn test_totality() {
        assert!(!Policy::Checked.is_total());
        assert!(Policy::Saturating.is_total());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&Policy::Flagged).unwrap(), "\"flagged\"");
        let policy: Policy = serde_json::from_str("\"saturating\"").unwrap();
        assert_eq!(policy, Policy::Saturating);
    }
}
