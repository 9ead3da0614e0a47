use std::slice;

use log::trace;

use crate::error::{Error, Result};

/// A strictly increasing selection of values, kept in the order they were fed.
///
/// Subsequences are only built by [`CandidateSet::update`], are never empty
/// and are never modified once created: a better candidate replaces them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subsequence<T> {
    values: Vec<T>,
}

impl<T> Subsequence<T> {
    fn single(value: T) -> Self {
        Self {
            values: vec![value],
        }
    }

    /// The last (and largest) value of the subsequence.
    pub fn tail(&self) -> &T {
        &self.values[self.values.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for subsequences held by a [`CandidateSet`].
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T: Clone> Subsequence<T> {
    /// Copies `self` and appends `value`.
    fn extended(&self, value: T) -> Self {
        let mut values = Vec::with_capacity(self.values.len() + 1);
        values.extend_from_slice(&self.values);
        values.push(value);
        Self { values }
    }
}

impl<T> AsRef<[T]> for Subsequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

impl<T> From<Subsequence<T>> for Vec<T> {
    fn from(subsequence: Subsequence<T>) -> Self {
        subsequence.values
    }
}

impl<'a, T> IntoIterator for &'a Subsequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Best-so-far increasing subsequences, one per achievable length.
///
/// Candidates are sorted by strictly increasing tail value, and their lengths
/// strictly increase along the same order. A candidate is dropped as soon as
/// another one is at least as long and ends on a value no larger, since it can
/// no longer lead to a longer answer. The last candidate is therefore always a
/// longest increasing subsequence of everything fed so far.
///
/// # Examples
///
/// ```
/// use increasing_subset::cs::dynamic::CandidateSet;
///
/// let mut set = CandidateSet::new();
/// for value in [1, 3, 7, 5] {
///     set.update(value);
/// }
///
/// let candidates: Vec<Vec<i32>> = set.into_vec();
/// assert_eq!(candidates, vec![vec![1], vec![1, 3], vec![1, 3, 5]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet<T> {
    candidates: Vec<Subsequence<T>>,
}

impl<T> CandidateSet<T> {
    /// Creates an empty candidate set.
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
        }
    }

    /// Number of candidates, which is also the length of the longest one.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates ordered by increasing tail value.
    pub fn as_slice(&self) -> &[Subsequence<T>] {
        &self.candidates
    }

    pub fn iter(&self) -> slice::Iter<'_, Subsequence<T>> {
        self.candidates.iter()
    }

    /// The longest candidate, or `None` if nothing has been fed yet.
    pub fn longest(&self) -> Option<&Subsequence<T>> {
        self.candidates.last()
    }

    /// Consumes the set, returning the candidates as plain vectors.
    pub fn into_vec(self) -> Vec<Vec<T>> {
        self.candidates
            .into_iter()
            .map(Subsequence::into_vec)
            .collect()
    }
}

impl<T: Ord + Clone> CandidateSet<T> {
    /// Extends the candidate set with the next value of the input.
    ///
    /// The new candidate ends on `value` and is built on the longest candidate
    /// whose tail is smaller than `value`. Because lengths grow with tails,
    /// that is the candidate right before the insertion point, found by binary
    /// search. Candidates after the insertion point that are not longer than
    /// the new one are dominated and removed; they form a contiguous run.
    pub fn update(&mut self, value: T) {
        // Lower bound: first candidate whose tail is >= value.
        let position = self
            .candidates
            .partition_point(|candidate| *candidate.tail() < value);

        let candidate = match position.checked_sub(1) {
            None => Subsequence::single(value),
            Some(base) => self.candidates[base].extended(value),
        };
        let target_length = candidate.len();

        self.candidates.insert(position, candidate);

        // Everything after the insertion point has a tail >= value.
        let start = position + 1;
        let dominated = self.candidates[start..]
            .partition_point(|candidate| candidate.len() <= target_length);
        self.candidates.drain(start..start + dominated);

        trace!(
            "inserted candidate of length {} at position {}, pruned {}, {} candidates",
            target_length,
            position,
            dominated,
            self.candidates.len()
        );
    }

    /// Verifies the structural invariant of the set.
    ///
    /// Every candidate must be strictly increasing, tails must strictly
    /// increase from one candidate to the next, and so must lengths. The
    /// first violation found is returned.
    pub fn check_invariants(&self) -> Result<()> {
        for (position, candidate) in self.candidates.iter().enumerate() {
            if candidate.values.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(Error::NotIncreasing { position });
            }
        }

        for (offset, pair) in self.candidates.windows(2).enumerate() {
            let position = offset + 1;
            if pair[0].tail() >= pair[1].tail() {
                return Err(Error::TailOrder { position });
            }
            if pair[0].len() >= pair[1].len() {
                return Err(Error::LengthOrder {
                    position,
                    previous: pair[0].len(),
                    current: pair[1].len(),
                });
            }
        }

        Ok(())
    }
}

impl<T> Default for CandidateSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> Extend<T> for CandidateSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.update(value);
        }
    }
}

impl<T: Ord + Clone> FromIterator<T> for CandidateSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T> IntoIterator for &'a CandidateSet<T> {
    type Item = &'a Subsequence<T>;
    type IntoIter = slice::Iter<'a, Subsequence<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
