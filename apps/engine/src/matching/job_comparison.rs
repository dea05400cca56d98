//! Candidate × job comparison: normalize, match, score each dimension, combine, suggest.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::engine::ComparisonEngine;
use crate::matching::composite::{compute_overall_score, DimensionScores};
use crate::matching::dimensions::{
    score_education, score_experience, score_keywords, score_skills, score_soft_skills,
    DimensionResult, EducationResult, ExperienceResult,
};
use crate::matching::weights::ScoringWeights;
use crate::models::{CandidateProfile, JobPosting};
use crate::suggestions::{job_suggestions, JobRuleInput, Suggestion};

/// Per-dimension detail behind the overall score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: DimensionResult,
    pub experience: ExperienceResult,
    pub education: EducationResult,
    pub keywords: DimensionResult,
    pub soft_skills: DimensionResult,
}

impl ScoreBreakdown {
    pub fn scores(&self) -> DimensionScores {
        DimensionScores {
            skills: self.skills.score,
            experience: self.experience.score,
            education: self.education.score,
            keywords: self.keywords.score,
            soft_skills: self.soft_skills.score,
        }
    }
}

/// Result of one candidate × job comparison. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub candidate_id: String,
    pub job_id: String,
    pub overall_score: u32,
    pub breakdown: ScoreBreakdown,
    pub suggestions: Vec<Suggestion>,
    pub weights_version: String,
    pub matcher_backend: String,
}

impl ComparisonEngine {
    pub fn compare_with_job(&self, candidate: &CandidateProfile, job: &JobPosting) -> ComparisonResult {
        let breakdown = ScoreBreakdown {
            skills: score_skills(self.matcher(), candidate, job),
            experience: score_experience(&self.heuristics, candidate, job),
            education: score_education(&self.heuristics, candidate),
            keywords: score_keywords(candidate, job, self.limits.missing_keywords),
            soft_skills: score_soft_skills(candidate),
        };
        let scores = breakdown.scores();
        debug!(?scores, job_id = %job.id, "Dimension scores computed");

        let overall_score = compute_overall_score(&scores, &self.weights);

        let suggestions = job_suggestions(&JobRuleInput {
            job_title: &job.title,
            breakdown: &breakdown,
            low_experience_threshold: self.heuristics.low_experience_threshold,
        });

        info!(
            candidate_id = %candidate.id,
            job_id = %job.id,
            overall_score,
            suggestions = suggestions.len(),
            "Job comparison complete"
        );

        ComparisonResult {
            candidate_id: candidate.id.clone(),
            job_id: job.id.clone(),
            overall_score,
            breakdown,
            suggestions,
            weights_version: ScoringWeights::VERSION.to_string(),
            matcher_backend: self.matcher().name().to_string(),
        }
    }
}

/// Compares with the default v1 engine.
pub fn compare_with_job(candidate: &CandidateProfile, job: &JobPosting) -> ComparisonResult {
    ComparisonEngine::default().compare_with_job(candidate, job)
}
