//! CV / job / alumni comparison engine.
//!
//! Two synchronous, side-effect-free entry points:
//! - [`compare_with_job`] scores a candidate against one posting.
//! - [`compare_with_peers`] runs gap analysis and market statistics over a peer cohort.
//!
//! Both are pure functions of their inputs; the JSON variants in [`input`] add the
//! argument contract checks for callers holding untyped data.

pub mod cohort;
pub mod engine;
pub mod errors;
pub mod input;
pub mod matching;
pub mod models;
pub mod suggestions;

pub use cohort::peer_comparison::{compare_with_peers, PeerComparisonResult};
pub use cohort::selection::select_top_peers;
pub use engine::ComparisonEngine;
pub use errors::EngineError;
pub use input::{compare_with_job_json, compare_with_peers_json};
pub use matching::job_comparison::{compare_with_job, ComparisonResult};
pub use matching::matcher::{SkillMatcher, SubstringMatcher};
