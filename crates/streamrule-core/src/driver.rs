//! The match driver.
//!
//! Feeds a token stream through one constraint instance and reduces the
//! verdict sequence to a boolean outcome.
//!
//! Logging levels:
//! - **DEBUG**: one event per match attempt with the outcome
//! - **TRACE**: individual steps with the verdict after each token

use tracing::{debug, trace};

use crate::constraint::Constraint;
use crate::instance::Instance;

/// Compares a constraint against a stream of tokens.
///
/// The stream is consumed lazily and may be infinite: the driver reads at
/// most as many tokens as are needed to resolve the outcome and never
/// buffers or measures the sequence.
///
/// Short-circuit rules, checked before every read:
/// - a verdict with neither flag (`Invalid`) can never match again, so the
///   driver answers `false` without reading anything further;
/// - a verdict that is matching but not continuable matches exactly when the
///   stream is already exhausted, which costs one probing read to decide;
/// - otherwise the next token is consumed and stepped, and a stream that
///   ends here answers with the current verdict's matching flag.
///
/// # Example
///
/// ```
/// use streamrule_core::{matches, Any, Between, Single};
///
/// assert!(matches(&Single, [7]));
/// assert!(!matches(&Single, [7, 8]));
///
/// let window = Between::new(2, Some(4)).unwrap();
/// assert!(matches(&window, "abc".chars()));
///
/// // Lazy: only the first 100 values of the counter are ever produced.
/// assert!(matches(&Any, (0..).take(100)));
/// ```
pub fn matches<T, C, I>(constraint: &C, tokens: I) -> bool
where
    C: Constraint<T>,
    I: IntoIterator<Item = T>,
{
    let (mut instance, mut verdict) = Instance::new(constraint);
    let mut tokens = tokens.into_iter();
    let mut consumed = 0usize;

    let matched = loop {
        if !verdict.is_continuable() {
            if !verdict.is_matching() {
                break false;
            }
            // Matching but closed: only an already-exhausted stream matches.
            break tokens.next().is_none();
        }
        match tokens.next() {
            Some(token) => {
                verdict = instance.step(token);
                consumed += 1;
                trace!(event = "step", consumed, verdict = ?verdict);
            }
            None => break verdict.is_matching(),
        }
    };

    debug!(event = "match_end", consumed, matched);
    matched
}
