// Candidate × alumni cohort comparison.

pub mod gap;
pub mod market;
pub mod peer_comparison;
pub mod selection;
