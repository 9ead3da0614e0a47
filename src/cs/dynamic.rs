pub mod candidate_set;
pub mod lis_engine;
pub mod longest_increasing_subsequence;
pub mod oracle;
pub mod strategy;


// Re-export the incremental LIS machinery with descriptive names
pub use candidate_set::{CandidateSet, Subsequence};
pub use lis_engine::LisEngine;
pub use longest_increasing_subsequence::{
    longest_increasing_subsequence, longest_increasing_subsequence_length,
    longest_increasing_subsequence_length_with, longest_increasing_subsequence_with,
};
pub use strategy::CandidateStrategy;
