use crate::constraint::Constraint;
use crate::verdict::Verdict;

/// Matches any prefix of any stream, including the empty one.
///
/// Every verdict is `Satisfied`; the automaton never becomes invalid and
/// carries no state.
///
/// # Example
///
/// ```
/// use streamrule_core::{matches, Any};
///
/// assert!(matches(&Any, std::iter::empty::<i32>()));
/// assert!(matches(&Any, [1, 2, 3]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Any;

impl<T> Constraint<T> for Any {
    type State = ();

    fn init(&self) -> ((), Verdict) {
        ((), Verdict::Satisfied)
    }

    fn step(&self, _state: (), _token: T) -> ((), Verdict) {
        ((), Verdict::Satisfied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_is_always_satisfied() {
        let (state, verdict) = <Any as Constraint<i32>>::init(&Any);
        assert_eq!(verdict, Verdict::Satisfied);
        let (_, verdict) = Any.step(state, 42);
        assert_eq!(verdict, Verdict::Satisfied);
    }
}
