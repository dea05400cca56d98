use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{lenient_text, null_as_default};

/// A parsed résumé. Produced upstream by the CV parser and never mutated by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub parsed_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: SkillSet,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub employer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Free text such as "2 years" or "Jan 2021 - Present".
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub technical: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub soft: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issuer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
}

impl CandidateProfile {
    /// Titles of every listed role, in résumé order.
    pub fn role_titles(&self) -> impl Iterator<Item = &str> {
        self.experience.iter().map(|e| e.title.as_str())
    }

    pub fn employers(&self) -> impl Iterator<Item = &str> {
        self.experience.iter().map(|e| e.employer.as_str())
    }

    pub fn degrees(&self) -> impl Iterator<Item = &str> {
        self.education.iter().map(|e| e.degree.as_str())
    }
}
