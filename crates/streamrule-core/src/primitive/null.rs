use crate::constraint::Constraint;
use crate::verdict::Verdict;

/// Matches only the empty stream.
///
/// The initial verdict is `Matching` with no continuation, so any token at
/// all invalidates the match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Null;

impl<T> Constraint<T> for Null {
    type State = ();

    fn init(&self) -> ((), Verdict) {
        ((), Verdict::Matching)
    }

    fn step(&self, _state: (), _token: T) -> ((), Verdict) {
        ((), Verdict::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::matches;

    #[test]
    fn test_null_matches_only_the_empty_stream() {
        assert!(matches(&Null, std::iter::empty::<i32>()));
        assert!(!matches(&Null, [1]));
        assert!(!matches(&Null, [1, 2]));
    }
}
