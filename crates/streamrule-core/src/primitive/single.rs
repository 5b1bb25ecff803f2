use crate::constraint::Constraint;
use crate::verdict::Verdict;

/// Matches a stream of exactly one token, of any value.
///
/// # Example
///
/// ```
/// use streamrule_core::{matches, Single};
///
/// assert!(matches(&Single, [7]));
/// assert!(!matches(&Single, std::iter::empty::<i32>()));
/// assert!(!matches(&Single, [7, 8]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Single;

/// Internal automaton state for [`Single`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleState {
    /// No token consumed yet.
    AwaitingToken,
    /// The one permitted token has been consumed.
    Consumed,
}

impl<T> Constraint<T> for Single {
    type State = SingleState;

    fn init(&self) -> (SingleState, Verdict) {
        (SingleState::AwaitingToken, Verdict::Continue)
    }

    fn step(&self, state: SingleState, _token: T) -> (SingleState, Verdict) {
        let verdict = match state {
            SingleState::AwaitingToken => Verdict::Matching,
            SingleState::Consumed => Verdict::Invalid,
        };
        (SingleState::Consumed, verdict)
    }
}
