use serde::{Deserialize, Serialize};

use super::{lenient_text, null_as_default};

/// An alumni profile from the directory, used as a comparison peer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeerProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub employer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub past_roles: Vec<PastRole>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<PeerEducation>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
    /// Free text such as "3 years".
    #[serde(default, deserialize_with = "lenient_text")]
    pub tenure: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PastRole {
    #[serde(default, deserialize_with = "null_as_default")]
    pub employer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeerEducation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub degree: String,
}
