use log::debug;

use crate::cs::dynamic::candidate_set::{CandidateSet, Subsequence};

/// Incremental longest increasing subsequence over a stream of values.
///
/// Values are fed one at a time or in batches; the answer is available after
/// every feed. The engine also keeps every value it was fed, which is only
/// needed to inspect or verify results.
///
/// # Examples
///
/// ```
/// use increasing_subset::cs::dynamic::LisEngine;
///
/// let mut engine = LisEngine::new();
/// engine.feed_all([1, 3, 0, 7]);
/// assert_eq!(engine.longest_subsequence(), &[1, 3, 7]);
///
/// engine.feed(5);
/// assert_eq!(engine.longest_subsequence(), &[1, 3, 5]);
/// assert_eq!(engine.longest_length(), 3);
/// assert_eq!(engine.numbers(), &[1, 3, 0, 7, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LisEngine<T> {
    numbers: Vec<T>,
    candidates: CandidateSet<T>,
}

impl<T> LisEngine<T> {
    /// Creates an engine that has not been fed anything.
    pub fn new() -> Self {
        Self {
            numbers: Vec::new(),
            candidates: CandidateSet::new(),
        }
    }

    /// Every value fed so far, in feed order.
    pub fn numbers(&self) -> &[T] {
        &self.numbers
    }

    /// Current candidates, ordered by increasing tail value.
    pub fn candidates(&self) -> &[Subsequence<T>] {
        self.candidates.as_slice()
    }

    pub fn candidate_set(&self) -> &CandidateSet<T> {
        &self.candidates
    }

    /// A longest strictly increasing subsequence of the values fed so far.
    ///
    /// Empty when nothing has been fed. When several subsequences share the
    /// maximum length, the one returned is the one ending on the smallest value.
    pub fn longest_subsequence(&self) -> &[T] {
        self.candidates
            .longest()
            .map(Subsequence::as_slice)
            .unwrap_or(&[])
    }

    pub fn longest_length(&self) -> usize {
        self.longest_subsequence().len()
    }

    pub fn into_candidates(self) -> CandidateSet<T> {
        self.candidates
    }
}

impl<T: Ord + Clone> LisEngine<T> {
    /// Records `value` and updates the candidates with it.
    pub fn feed(&mut self, value: T) {
        self.numbers.push(value.clone());
        self.candidates.update(value);
    }

    /// Feeds every value of `values` in order.
    ///
    /// The result is the same as calling [`LisEngine::feed`] on each value.
    pub fn feed_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let before = self.numbers.len();
        for value in values {
            self.feed(value);
        }
        debug!(
            "fed {} values ({} total), longest increasing subsequence has length {}",
            self.numbers.len() - before,
            self.numbers.len(),
            self.longest_length()
        );
    }
}

impl<T> Default for LisEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> Extend<T> for LisEngine<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.feed_all(iter);
    }
}

impl<T: Ord + Clone> FromIterator<T> for LisEngine<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut engine = Self::new();
        engine.feed_all(iter);
        engine
    }
}
