// The constraint automaton protocol.
//
// A constraint definition is a pure, stateless value: `init` produces the
// starting state and the verdict that applies before any token has been
// read; `step` maps the current state and one token to the next state and
// the verdict after consuming that token. State flows by value through the
// definition and is owned elsewhere (see `Instance`), so a single definition
// can back any number of independent match attempts.

use crate::verdict::Verdict;

/// A stateless constraint definition over tokens of type `T`.
///
/// # Protocol
///
/// 1. `init` is called once per match attempt, before any token.
/// 2. `step` is called once per consumed token, in stream order, threading
///    the state returned by the previous call.
///
/// Implementations must be side-effect-free with respect to `&self`: the
/// same definition may drive many instances, concurrently or not, and none
/// of them may observe the others.
///
/// # State
///
/// `State` is opaque to every other component. The instance wrapper moves it
/// between calls but never inspects it; callers never see it at all.
pub trait Constraint<T> {
    /// Internal automaton state, private to this constraint.
    type State;

    /// Starting state and the verdict before any token has been read.
    fn init(&self) -> (Self::State, Verdict);

    /// Consumes one token, producing the next state and verdict.
    fn step(&self, state: Self::State, token: T) -> (Self::State, Verdict);
}
