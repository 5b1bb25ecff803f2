//! Shared test fixtures for streamrule crates.
//!
//! - [`ProbeSource`] - a token source that panics if read past its budget,
//!   for proving short-circuit behavior
//! - [`assert_matches`] / [`assert_no_match`] - assertion helpers around the
//!   match driver
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! streamrule-test = { workspace = true }
//! ```

use streamrule_core::{matches, Constraint};

/// A token source that faults when read beyond an allowed prefix.
///
/// Wraps any iterator and panics if more than `budget` tokens are pulled
/// from it. Reaching the wrapped iterator's natural end is not an over-read;
/// only producing a real token past the budget is.
///
/// Used to prove the driver's short-circuit property: once a verdict is no
/// longer continuable, no further tokens may be consumed.
pub struct ProbeSource<I> {
    inner: I,
    budget: usize,
}

impl<I: Iterator> ProbeSource<I> {
    /// Allows at most `budget` tokens to be pulled from `inner`.
    pub fn new(inner: I, budget: usize) -> Self {
        Self { inner, budget }
    }
}

impl<I: Iterator> Iterator for ProbeSource<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.inner.next()?;
        assert!(
            self.budget > 0,
            "token source read past its expected prefix"
        );
        self.budget -= 1;
        Some(item)
    }
}

/// Asserts that the constraint matches the token stream.
pub fn assert_matches<T, C>(constraint: &C, tokens: impl IntoIterator<Item = T>)
where
    C: Constraint<T>,
{
    assert!(matches(constraint, tokens), "expected stream to match");
}

/// Asserts that the constraint does not match the token stream.
pub fn assert_no_match<T, C>(constraint: &C, tokens: impl IntoIterator<Item = T>)
where
    C: Constraint<T>,
{
    assert!(!matches(constraint, tokens), "expected stream not to match");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_source_yields_within_budget() {
        let collected: Vec<_> = ProbeSource::new(0..3, 5).collect();
        assert_eq!(collected, vec![0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "read past its expected prefix")]
    fn test_probe_source_faults_past_budget() {
        let _ = ProbeSource::new(0.., 2).nth(2);
    }
}
