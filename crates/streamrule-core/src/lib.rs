//! StreamRule Core - Incremental constraints over token streams
//!
//! This crate provides the constraint automaton protocol:
//! - `Verdict` - the four-valued outcome reported after each step
//! - `Constraint` - the stateless init/step contract every constraint implements
//! - `Instance` - one running, stateful execution of a constraint definition
//! - `matches` - the driver that feeds a token stream through an instance
//! - Primitive constraints built on the protocol (`Any`, `Between`, ...)
//!
//! # Architecture
//!
//! Constraint definitions are pure values: `init` produces a starting state
//! and `step` maps (state, token) to (state, verdict). All mutation lives in
//! the `Instance`, which exclusively owns its state for one match attempt.
//! The driver consumes tokens lazily and stops as soon as the verdict can no
//! longer change the outcome, so infinite or expensive token sources are fine.

pub mod constraint;
pub mod driver;
pub mod error;
pub mod instance;
pub mod primitive;
pub mod verdict;

pub use constraint::Constraint;
pub use driver::matches;
pub use error::{ConstraintError, Result};
pub use instance::Instance;
pub use primitive::{Any, Between, Member, MemberRange, Null, Single};
pub use verdict::Verdict;
