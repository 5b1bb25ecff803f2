//! Primitive leaf constraints.
//!
//! Each primitive is a plain value implementing [`Constraint`]; the set here
//! is a starting library, not a closed catalogue — any type implementing the
//! protocol participates on equal footing.
//!
//! [`Constraint`]: crate::Constraint

mod any;
mod between;
mod member;
mod null;
mod single;

pub use any::Any;
pub use between::Between;
pub use member::{Member, MemberRange};
pub use null::Null;
pub use single::{Single, SingleState};
