use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the crate.
///
/// Feeding values never fails. These variants cover parsing a
/// [`CandidateStrategy`](crate::cs::dynamic::CandidateStrategy) by name and
/// the structural checks of
/// [`CandidateSet::check_invariants`](crate::cs::dynamic::CandidateSet::check_invariants).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown candidate strategy: {0:?}")]
    UnknownStrategy(String),

    #[error("candidate at position {position} is not strictly increasing")]
    NotIncreasing { position: usize },

    #[error("tail at position {position} is not greater than the previous tail")]
    TailOrder { position: usize },

    #[error("length at position {position} is {current}, previous candidate has {previous}")]
    LengthOrder {
        position: usize,
        previous: usize,
        current: usize,
    },
}
