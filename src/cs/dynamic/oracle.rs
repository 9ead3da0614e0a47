//! Slow reference algorithms used to cross-check the candidate set.
//!
//! Nothing here is optimised on purpose: each routine follows the problem
//! definition as directly as possible so its answers can be trusted when
//! comparing against [`CandidateSet`](super::CandidateSet). Running time is
//! exponential in the input length, so keep inputs small.

/// Returns the length of a longest strictly increasing subsequence by trying
/// every take-or-skip choice.
///
/// # Examples
///
/// ```
/// use increasing_subset::cs::dynamic::oracle::lis_length_recursive;
///
/// assert_eq!(lis_length_recursive(&[1, 3, 7, 5]), 3);
/// assert_eq!(lis_length_recursive::<i32>(&[]), 0);
/// ```
pub fn lis_length_recursive<T: Ord>(values: &[T]) -> usize {
    length_from(values, None)
}

// `max` is the largest value taken so far, `None` before anything is taken.
fn length_from<T: Ord>(values: &[T], max: Option<&T>) -> usize {
    let Some((first, rest)) = values.split_first() else {
        return 0;
    };

    let without_first = length_from(rest, max);
    if max.is_some_and(|max| first <= max) {
        return without_first;
    }

    let with_first = 1 + length_from(rest, Some(first));
    with_first.max(without_first)
}

/// Enumerates every non-empty strictly increasing subsequence of `values`.
///
/// Values are processed in order. Each existing subsequence that ends below
/// the current value gets an extended copy placed right after it, then the
/// value on its own is appended at the end.
///
/// # Examples
///
/// ```
/// use increasing_subset::cs::dynamic::oracle::all_increasing_subsequences;
///
/// let all = all_increasing_subsequences(&[1, 3, 2]);
/// assert_eq!(all, vec![vec![1], vec![1, 2], vec![1, 3], vec![3], vec![2]]);
/// ```
pub fn all_increasing_subsequences<T: Ord + Clone>(values: &[T]) -> Vec<Vec<T>> {
    let mut subsequences: Vec<Vec<T>> = Vec::new();

    for value in values {
        let mut index = 0;
        while index < subsequences.len() {
            if subsequences[index].last().is_some_and(|tail| tail < value) {
                let mut extended = subsequences[index].clone();
                extended.push(value.clone());
                subsequences.insert(index + 1, extended);
                // skip the copy we just inserted
                index += 2;
            } else {
                index += 1;
            }
        }
        subsequences.push(vec![value.clone()]);
    }

    subsequences
}

/// Checks that `candidate` is strictly increasing and can be picked from
/// `sequence` without reordering.
pub fn is_increasing_subsequence_of<T: Ord>(candidate: &[T], sequence: &[T]) -> bool {
    if candidate.windows(2).any(|pair| pair[0] >= pair[1]) {
        return false;
    }

    let mut remaining = sequence.iter();
    candidate
        .iter()
        .all(|wanted| remaining.any(|value| value == wanted))
}
