//! The four-valued verdict algebra.
//!
//! A verdict is a set of zero or more flags drawn from {Continuable,
//! Matching}. All four combinations are meaningful and named, and no other
//! combination exists, so the algebra is an exhaustive enum rather than a
//! bitmask: a constraint cannot produce an illegal verdict by construction.

/// Outcome reported by a constraint after `init` and after each `step`.
///
/// # Example
///
/// ```
/// use streamrule_core::Verdict;
///
/// assert!(Verdict::Satisfied.is_continuable());
/// assert!(Verdict::Satisfied.is_matching());
/// assert!(!Verdict::Invalid.is_continuable());
/// assert!(Verdict::Continue.is_continuable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// Not matching; the stream can never match from here. Stop immediately.
    Invalid,
    /// Not matching yet; more tokens may still produce a match.
    Continue,
    /// Matching right now; do not consume further tokens.
    Matching,
    /// Matching right now; more tokens may extend or preserve the match.
    Satisfied,
}

impl Verdict {
    /// Whether more tokens could still change the outcome.
    pub const fn is_continuable(self) -> bool {
        matches!(self, Verdict::Continue | Verdict::Satisfied)
    }

    /// Whether the stream consumed so far already satisfies the constraint.
    pub const fn is_matching(self) -> bool {
        matches!(self, Verdict::Matching | Verdict::Satisfied)
    }
}
