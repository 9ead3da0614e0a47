use log::debug;

use crate::cs::dynamic::strategy::CandidateStrategy;

/// Returns the length of the Longest Increasing Subsequence (LIS) in `numbers`.
///
/// # Examples
///
/// ```
/// use increasing_subset::cs::dynamic::longest_increasing_subsequence::longest_increasing_subsequence_length;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// assert_eq!(longest_increasing_subsequence_length(&arr), 4);
/// // One possible LIS is [2, 5, 7, 101]
/// ```
pub fn longest_increasing_subsequence_length<T: Ord + Clone>(numbers: &[T]) -> usize {
    longest_increasing_subsequence_length_with(numbers, CandidateStrategy::default())
}

/// Same as [`longest_increasing_subsequence_length`], building candidates with
/// `strategy`.
pub fn longest_increasing_subsequence_length_with<T: Ord + Clone>(
    numbers: &[T],
    strategy: CandidateStrategy,
) -> usize {
    longest_increasing_subsequence_with(numbers, strategy).len()
}

/// Returns one actual Longest Increasing Subsequence (LIS) in `numbers`.
///
/// Candidates are built with the default [`CandidateStrategy`], which keeps a
/// single best subsequence per length.
///
/// If there are multiple LIS with the same length, this returns just one of them.
///
/// # Examples
///
/// ```
/// use increasing_subset::cs::dynamic::longest_increasing_subsequence::longest_increasing_subsequence;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// let lis = longest_increasing_subsequence(&arr);
/// assert_eq!(lis, vec![2, 3, 7, 18]);
/// ```
pub fn longest_increasing_subsequence<T: Ord + Clone>(numbers: &[T]) -> Vec<T> {
    longest_increasing_subsequence_with(numbers, CandidateStrategy::default())
}

/// Returns one Longest Increasing Subsequence of `numbers`, building the
/// candidate list with `strategy`.
///
/// The first candidate of maximum length wins, in the order `strategy`
/// produces them.
///
/// # Examples
///
/// ```
/// use increasing_subset::cs::dynamic::{longest_increasing_subsequence_with, CandidateStrategy};
///
/// let numbers = [1, 3, 7, 5];
/// let pruned = longest_increasing_subsequence_with(&numbers, CandidateStrategy::Pruned);
/// let exhaustive = longest_increasing_subsequence_with(&numbers, CandidateStrategy::Exhaustive);
/// assert_eq!(pruned, vec![1, 3, 5]);
/// assert_eq!(exhaustive.len(), 3);
/// ```
pub fn longest_increasing_subsequence_with<T: Ord + Clone>(
    numbers: &[T],
    strategy: CandidateStrategy,
) -> Vec<T> {
    if numbers.is_empty() {
        return Vec::new();
    }

    let candidates = strategy.build(numbers);

    // `max_by_key` keeps the last maximum; scanning in reverse keeps the first.
    let lis = candidates
        .into_iter()
        .rev()
        .max_by_key(Vec::len)
        .unwrap_or_default();

    debug!(
        "{} values, {} strategy: longest increasing subsequence has length {}",
        numbers.len(),
        strategy,
        lis.len()
    );
    lis
}
