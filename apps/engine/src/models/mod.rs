pub mod candidate;
pub mod job;
pub mod peer;

pub use candidate::{
    CandidateProfile, Certification, EducationEntry, ExperienceEntry, Project, SkillSet,
};
pub use job::JobPosting;
pub use peer::{PastRole, PeerEducation, PeerProfile};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Treats an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Free-text field that upstream parsers sometimes emit as a number (`"year": 2024`).
/// Numbers keep their decimal spelling; null, booleans and containers read as absent.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
