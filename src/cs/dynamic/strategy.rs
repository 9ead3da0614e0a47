use std::fmt;
use std::str::FromStr;

use crate::cs::dynamic::candidate_set::CandidateSet;
use crate::cs::dynamic::oracle::all_increasing_subsequences;
use crate::error::{Error, Result};

/// How the list of LIS candidates is built for a batch computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CandidateStrategy {
    /// Every strictly increasing subsequence. Exponential in time and memory.
    Exhaustive,
    /// One candidate per achievable length, dominated ones pruned.
    #[default]
    Pruned,
}

impl CandidateStrategy {
    /// Builds the candidate list for `values`.
    ///
    /// With [`CandidateStrategy::Pruned`] the candidates come out sorted by
    /// tail value and the longest one is last. With
    /// [`CandidateStrategy::Exhaustive`] they follow enumeration order.
    pub fn build<T: Ord + Clone>(&self, values: &[T]) -> Vec<Vec<T>> {
        match self {
            Self::Exhaustive => all_increasing_subsequences(values),
            Self::Pruned => values
                .iter()
                .cloned()
                .collect::<CandidateSet<T>>()
                .into_vec(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Exhaustive => "exhaustive",
            Self::Pruned => "pruned",
        }
    }
}

impl fmt::Display for CandidateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CandidateStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exhaustive" | "all" => Ok(Self::Exhaustive),
            "pruned" | "candidates" => Ok(Self::Pruned),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}
