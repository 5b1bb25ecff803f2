//! One running execution of a constraint definition.
//!
//! `Instance` is the generic adapter between a stateless definition and a
//! stepwise caller: it owns the hidden state exclusively and advances it by
//! exactly one token per `step` call. It holds no constraint-specific logic.

use std::marker::PhantomData;

use crate::constraint::Constraint;
use crate::verdict::Verdict;

/// A constraint definition bound to exclusively-owned mutable state.
///
/// Created once per match attempt and discarded when the attempt ends.
/// `step` takes `&mut self`, so the borrow checker rules out re-entrant
/// calls and cross-thread sharing of the hidden state; no synchronization
/// is needed or provided.
///
/// # Example
///
/// ```
/// use streamrule_core::{Instance, Single, Verdict};
///
/// let single = Single;
/// let (mut instance, initial) = Instance::new(&single);
/// assert_eq!(initial, Verdict::Continue);
/// assert_eq!(instance.step(7), Verdict::Matching);
/// assert_eq!(instance.step(8), Verdict::Invalid);
/// ```
pub struct Instance<'c, T, C: Constraint<T>> {
    constraint: &'c C,
    // Always `Some` except while a step is in flight; a panic inside the
    // constraint's `step` leaves it `None` and the instance dead.
    state: Option<C::State>,
    _token: PhantomData<fn(T)>,
}

impl<'c, T, C: Constraint<T>> Instance<'c, T, C> {
    /// Runs `init` and returns the instance together with the initial
    /// verdict, which applies before any token has been supplied.
    pub fn new(constraint: &'c C) -> (Self, Verdict) {
        let (state, verdict) = constraint.init();
        let instance = Self {
            constraint,
            state: Some(state),
            _token: PhantomData,
        };
        (instance, verdict)
    }

    /// Advances the hidden state by one token and returns the new verdict.
    ///
    /// A poisoned instance (one whose constraint panicked mid-step) reports
    /// `Invalid` forever instead of panicking again.
    pub fn step(&mut self, token: T) -> Verdict {
        match self.state.take() {
            Some(state) => {
                let (next, verdict) = self.constraint.step(state, token);
                self.state = Some(next);
                verdict
            }
            None => Verdict::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Between;

    #[test]
    fn test_initial_verdict_comes_from_init() {
        let exactly_two = Between::exactly(2);
        let (_, initial) = Instance::<u32, _>::new(&exactly_two);
        assert_eq!(initial, Verdict::Continue);
    }

    #[test]
    fn test_state_advances_once_per_step_in_call_order() {
        let exactly_two = Between::exactly(2);
        let (mut instance, _) = Instance::new(&exactly_two);
        assert_eq!(instance.step('a'), Verdict::Continue);
        assert_eq!(instance.step('b'), Verdict::Matching);
        assert_eq!(instance.step('c'), Verdict::Invalid);
    }

    #[test]
    fn test_instances_of_one_definition_are_isolated() {
        let exactly_one = Between::exactly(1);
        let (mut first, _) = Instance::new(&exactly_one);
        let (mut second, _) = Instance::new(&exactly_one);
        assert_eq!(first.step(0), Verdict::Matching);
        // The sibling instance still sees an untouched count.
        assert_eq!(second.step(0), Verdict::Matching);
    }
}
