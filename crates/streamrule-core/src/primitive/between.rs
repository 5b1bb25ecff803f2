use crate::constraint::Constraint;
use crate::error::{ConstraintError, Result};
use crate::verdict::Verdict;

/// Matches streams whose token *count* lies in `[min, max]`.
///
/// Token values are irrelevant; only the length of the stream is judged. An
/// absent `max` means the window is unbounded above. With `min == 0` the
/// empty stream matches, reported through the initial verdict.
///
/// # Example
///
/// ```
/// use streamrule_core::{matches, Between};
///
/// let window = Between::new(2, Some(4)).unwrap();
/// assert!(matches(&window, 0..3));
/// assert!(!matches(&window, 0..1));
/// assert!(!matches(&window, 0..5));
///
/// let at_least_two = Between::at_least(2);
/// assert!(matches(&at_least_two, 0..100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Between {
    min: usize,
    max: Option<usize>,
}

impl Between {
    /// Builds a count window, rejecting an upper bound below the lower one.
    pub fn new(min: usize, max: Option<usize>) -> Result<Self> {
        if let Some(max) = max {
            if max < min {
                return Err(ConstraintError::CountBoundsOutOfOrder { min, max });
            }
        }
        Ok(Self { min, max })
    }

    /// Window with no upper bound: streams of at least `min` tokens match.
    pub fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    /// Degenerate window: only streams of exactly `count` tokens match.
    pub fn exactly(count: usize) -> Self {
        Self {
            min: count,
            max: Some(count),
        }
    }

    // Verdict for a stream of length `count` consumed so far.
    fn classify(&self, count: usize) -> Verdict {
        if count < self.min {
            return Verdict::Continue;
        }
        match self.max {
            None => Verdict::Satisfied,
            Some(max) if count == max => Verdict::Matching,
            Some(max) if count > max => Verdict::Invalid,
            Some(_) => Verdict::Satisfied,
        }
    }
}

impl<T> Constraint<T> for Between {
    // Number of tokens consumed so far.
    type State = usize;

    fn init(&self) -> (usize, Verdict) {
        (0, self.classify(0))
    }

    fn step(&self, count: usize, _token: T) -> (usize, Verdict) {
        let count = count + 1;
        (count, self.classify(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::matches;

    #[test]
    fn test_bounds_validation() {
        assert_eq!(
            Between::new(3, Some(1)).unwrap_err(),
            ConstraintError::CountBoundsOutOfOrder { min: 3, max: 1 }
        );
        assert!(Between::new(3, Some(3)).is_ok());
        assert!(Between::new(3, None).is_ok());
    }

    #[test]
    fn test_verdict_sequence_for_bounded_window() {
        let window = Between::new(1, Some(3)).unwrap();
        let (count, verdict) = <Between as Constraint<i32>>::init(&window);
        assert_eq!(verdict, Verdict::Continue);

        let (count, verdict) = window.step(count, 0);
        assert_eq!(verdict, Verdict::Satisfied); // length 1: in window, may grow
        let (count, verdict) = window.step(count, 0);
        assert_eq!(verdict, Verdict::Satisfied); // length 2
        let (count, verdict) = window.step(count, 0);
        assert_eq!(verdict, Verdict::Matching); // length 3: upper bound reached
        let (_, verdict) = window.step(count, 0);
        assert_eq!(verdict, Verdict::Invalid); // length 4: past the bound
    }

    #[test]
    fn test_zero_min_matches_the_empty_stream_via_init() {
        let up_to_two = Between::new(0, Some(2)).unwrap();
        let (_, verdict) = <Between as Constraint<i32>>::init(&up_to_two);
        assert!(verdict.is_matching());

        let unbounded = Between::at_least(0);
        let (_, verdict) = <Between as Constraint<i32>>::init(&unbounded);
        assert_eq!(verdict, Verdict::Satisfied);

        let only_empty = Between::exactly(0);
        let (_, verdict) = <Between as Constraint<i32>>::init(&only_empty);
        assert_eq!(verdict, Verdict::Matching);
    }

    #[test]
    fn test_unbounded_window() {
        let at_least_two = Between::at_least(2);
        assert!(!matches(&at_least_two, std::iter::empty::<i32>()));
        assert!(!matches(&at_least_two, [1]));
        assert!(matches(&at_least_two, [1, 2]));
        assert!(matches(&at_least_two, 0..1000));
    }
}
