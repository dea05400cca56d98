//! Dimension scorers: one bounded 0–100 score per facet of a candidate × job comparison.

use serde::{Deserialize, Serialize};

use crate::matching::matcher::{match_set, SkillMatcher};
use crate::matching::normalize::{
    candidate_skill_set, dedup_preserving_case, joined_text, normalize_set, tokenize,
};
use crate::matching::weights::{percentage, HeuristicScores};
use crate::models::{CandidateProfile, JobPosting};

/// Soft skills every posting implicitly asks for.
pub const SOFT_SKILL_REFERENCE: [&str; 4] =
    ["Leadership", "Communication", "Teamwork", "Problem Solving"];

/// Set-based dimension outcome (skills, keywords, soft skills).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionResult {
    pub score: u32,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceResult {
    pub score: u32,
    pub matched: bool,
    /// Candidate role titles that triggered the match.
    pub matching_roles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationResult {
    pub score: u32,
    pub matched: bool,
    pub entry_count: usize,
}

/// Skills: share of the job's required skills covered by technical ∪ tools.
pub fn score_skills(
    matcher: &dyn SkillMatcher,
    candidate: &CandidateProfile,
    job: &JobPosting,
) -> DimensionResult {
    let target = dedup_preserving_case(&job.required_skills);
    let result = match_set(matcher, &candidate_skill_set(candidate), &target);
    DimensionResult {
        score: percentage(result.matched.len(), target.len()),
        matched: result.matched,
        missing: result.missing,
    }
}

/// Experience: any role title sharing its first word with the job title, either way round.
pub fn score_experience(
    heuristics: &HeuristicScores,
    candidate: &CandidateProfile,
    job: &JobPosting,
) -> ExperienceResult {
    let job_title = job.title.to_lowercase();
    let job_first = first_word(&job.title);

    let matching_roles: Vec<String> = candidate
        .role_titles()
        .filter(|title| {
            let lowered = title.to_lowercase();
            let job_word_in_role = job_first
                .as_deref()
                .is_some_and(|word| lowered.contains(word));
            let role_word_in_job =
                first_word(title).is_some_and(|word| job_title.contains(&word));
            job_word_in_role || role_word_in_job
        })
        .map(str::to_string)
        .collect();

    let matched = !matching_roles.is_empty();
    ExperienceResult {
        score: if matched {
            heuristics.experience_match
        } else {
            heuristics.experience_no_match
        },
        matched,
        matching_roles,
    }
}

/// Education: presence of any entry. Degree level and field are not compared.
pub fn score_education(heuristics: &HeuristicScores, candidate: &CandidateProfile) -> EducationResult {
    let entry_count = candidate.education.len();
    let matched = entry_count > 0;
    EducationResult {
        score: if matched {
            heuristics.education_present
        } else {
            heuristics.education_absent
        },
        matched,
        entry_count,
    }
}

/// Keywords: share of the posting's long tokens found anywhere in the candidate's text.
/// `missing` is truncated to `missing_cap` and is for display only.
pub fn score_keywords(
    candidate: &CandidateProfile,
    job: &JobPosting,
    missing_cap: usize,
) -> DimensionResult {
    let job_tokens = tokenize(job_texts(job));
    let haystack = joined_text(candidate_texts(candidate));

    let (matched, unmatched): (Vec<String>, Vec<String>) = job_tokens
        .iter()
        .cloned()
        .partition(|token| haystack.contains(token.as_str()));

    DimensionResult {
        score: percentage(matched.len(), job_tokens.len()),
        matched,
        missing: unmatched.into_iter().take(missing_cap).collect(),
    }
}

/// Soft skills: coverage of `SOFT_SKILL_REFERENCE` by containment in the candidate's soft skills.
pub fn score_soft_skills(candidate: &CandidateProfile) -> DimensionResult {
    let soft = normalize_set(&candidate.skills.soft);

    let (matched, missing): (Vec<String>, Vec<String>) = SOFT_SKILL_REFERENCE
        .iter()
        .map(|s| s.to_string())
        .partition(|reference| {
            let reference = reference.to_lowercase();
            soft.iter().any(|s| s.contains(&reference))
        });

    DimensionResult {
        score: percentage(matched.len(), SOFT_SKILL_REFERENCE.len()),
        matched,
        missing,
    }
}

fn first_word(text: &str) -> Option<String> {
    text.split_whitespace().next().map(str::to_lowercase)
}

fn job_texts(job: &JobPosting) -> Vec<&str> {
    let mut texts = vec![
        job.title.as_str(),
        job.employer.as_str(),
        job.description.as_str(),
        job.full_description.as_str(),
    ];
    texts.extend(job.requirements.iter().map(String::as_str));
    texts.extend(job.required_skills.iter().map(String::as_str));
    texts
}

fn candidate_texts(candidate: &CandidateProfile) -> Vec<&str> {
    let mut texts = vec![candidate.name.as_str()];
    for exp in &candidate.experience {
        texts.push(exp.title.as_str());
        texts.push(exp.employer.as_str());
        texts.push(exp.description.as_str());
    }
    let skills = &candidate.skills;
    texts.extend(
        skills
            .technical
            .iter()
            .chain(&skills.soft)
            .chain(&skills.tools)
            .map(String::as_str),
    );
    texts
}
