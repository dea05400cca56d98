// Candidate × job matching.
// Normalizer → matcher → dimension scorers → composite → job suggestion rules.

pub mod composite;
pub mod dimensions;
pub mod job_comparison;
pub mod matcher;
pub mod normalize;
pub mod weights;
