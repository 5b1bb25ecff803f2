//! One-shot per-token value tests.
//!
//! Both constraints here judge each token independently and carry no state
//! across steps. Their initial verdict is `Satisfied`, so a zero-token
//! stream is considered matching: they are designed to be invoked with
//! exactly one token at a time by a composing context that handles counting
//! itself. Standalone callers who find the empty-stream behavior surprising
//! should pair them with a counting constraint.

use crate::constraint::Constraint;
use crate::error::{ConstraintError, Result};
use crate::verdict::Verdict;

/// Matches tokens that lie in the inclusive value range `[min, max]`.
///
/// # Example
///
/// ```
/// use streamrule_core::{matches, MemberRange};
///
/// let digit = MemberRange::new('0', '9').unwrap();
/// assert!(matches(&digit, ['7']));
/// assert!(!matches(&digit, ['x']));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberRange<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd> MemberRange<T> {
    /// Builds the range test, rejecting bounds that are out of order.
    pub fn new(min: T, max: T) -> Result<Self> {
        if min > max {
            return Err(ConstraintError::ValueBoundsOutOfOrder);
        }
        Ok(Self { min, max })
    }
}

impl<T: PartialOrd> Constraint<T> for MemberRange<T> {
    type State = ();

    fn init(&self) -> ((), Verdict) {
        ((), Verdict::Satisfied)
    }

    fn step(&self, _state: (), token: T) -> ((), Verdict) {
        let verdict = if self.min <= token && token <= self.max {
            Verdict::Satisfied
        } else {
            Verdict::Invalid
        };
        ((), verdict)
    }
}

/// Matches tokens that appear in a fixed set of elements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Member<T> {
    elements: Vec<T>,
}

impl<T: PartialEq> Member<T> {
    /// Builds the membership test from any collection of elements.
    pub fn new(elements: impl IntoIterator<Item = T>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }
}

impl<T: PartialEq> Constraint<T> for Member<T> {
    type State = ();

    fn init(&self) -> ((), Verdict) {
        ((), Verdict::Satisfied)
    }

    fn step(&self, _state: (), token: T) -> ((), Verdict) {
        let verdict = if self.elements.contains(&token) {
            Verdict::Satisfied
        } else {
            Verdict::Invalid
        };
        ((), verdict)
    }
}
