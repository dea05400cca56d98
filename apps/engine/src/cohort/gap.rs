//! Gap Analyzer: what one peer has that the candidate's profile does not show.

use serde::{Deserialize, Serialize};

use crate::matching::matcher::{contains_match, match_set, SkillMatcher};
use crate::matching::normalize::{candidate_skill_set, dedup_preserving_case, normalize_set};
use crate::matching::weights::{clamp_score, CompetitivenessWeights};
use crate::models::{CandidateProfile, PeerProfile};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub missing_skills: Vec<String>,
    pub missing_experience: Vec<String>,
    pub missing_education: Vec<String>,
    pub missing_certifications: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerComparisonItem {
    pub peer: PeerProfile,
    pub gap_analysis: GapAnalysis,
    pub competitiveness_score: u32,
}

/// Candidate attributes in comparable form, computed once per cohort.
#[derive(Debug, Clone, Default)]
pub struct CandidateFacts {
    pub skills: Vec<String>,
    pub titles: Vec<String>,
    pub employers: Vec<String>,
    pub degrees: Vec<String>,
    pub certifications: Vec<String>,
}

impl CandidateFacts {
    pub fn from_profile(candidate: &CandidateProfile) -> Self {
        Self {
            skills: candidate_skill_set(candidate),
            titles: normalize_set(candidate.role_titles()),
            employers: normalize_set(candidate.employers()),
            degrees: normalize_set(candidate.degrees()),
            certifications: normalize_set(candidate.certifications.iter().map(|c| &c.name)),
        }
    }
}

/// Settings the analyzer reads from the engine.
#[derive(Clone, Copy)]
pub struct GapSettings<'a> {
    pub matcher: &'a dyn SkillMatcher,
    pub weights: &'a CompetitivenessWeights,
    pub max_recommendations: usize,
}

pub fn analyze_gap(
    settings: GapSettings<'_>,
    facts: &CandidateFacts,
    peer: &PeerProfile,
) -> PeerComparisonItem {
    let matcher = settings.matcher;
    let peer_skills = dedup_preserving_case(&peer.skills);
    let missing_skills = match_set(matcher, &facts.skills, &peer_skills).missing;

    let mut missing_experience = Vec::new();
    let role = peer.role.trim();
    if !role.is_empty() && !has_match(matcher, &facts.titles, role) {
        missing_experience.push(format!("{role} experience"));
    }
    for employer in dedup_preserving_case(peer.past_roles.iter().map(|r| &r.employer)) {
        if !has_match(matcher, &facts.employers, &employer) {
            missing_experience.push(format!("Experience at {employer}"));
        }
    }

    let missing_education = missing_from(
        matcher,
        &facts.degrees,
        peer.education.iter().map(|e| &e.degree),
    );
    let missing_certifications = missing_from(matcher, &facts.certifications, &peer.certifications);

    let w = settings.weights;
    let skill_ratio =
        (peer_skills.len() - missing_skills.len()) as f64 / peer_skills.len().max(1) as f64;
    let experience_factor = if missing_experience.is_empty() {
        1.0
    } else {
        w.experience_partial
    };
    let education_factor = if missing_education.is_empty() {
        1.0
    } else {
        w.education_partial
    };
    let competitiveness_score = clamp_score(
        100.0
            * (skill_ratio * w.skills
                + experience_factor * w.experience
                + education_factor * w.education),
    );

    let recommendations = build_recommendations(
        peer,
        &missing_skills,
        &missing_experience,
        settings.max_recommendations,
    );

    PeerComparisonItem {
        peer: peer.clone(),
        gap_analysis: GapAnalysis {
            missing_skills,
            missing_experience,
            missing_education,
            missing_certifications,
            recommendations,
        },
        competitiveness_score,
    }
}

fn has_match(matcher: &dyn SkillMatcher, candidate: &[String], target: &str) -> bool {
    contains_match(matcher, candidate.iter().map(String::as_str), target)
}

fn missing_from<I, S>(matcher: &dyn SkillMatcher, candidate: &[String], target: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    dedup_preserving_case(target)
        .into_iter()
        .filter(|t| !has_match(matcher, candidate, t))
        .collect()
}

/// Up to `cap` hints: top missing skills, first experience gap, then the peer's tenure.
fn build_recommendations(
    peer: &PeerProfile,
    missing_skills: &[String],
    missing_experience: &[String],
    cap: usize,
) -> Vec<String> {
    let mut recs = Vec::new();

    if !missing_skills.is_empty() {
        let top: Vec<&str> = missing_skills.iter().take(2).map(String::as_str).collect();
        recs.push(format!("Learn {} to match {}", top.join(" and "), peer.name));
    }
    if let Some(first) = missing_experience.first() {
        recs.push(format!("Work toward: {first}"));
    }
    if let Some(tenure) = peer.tenure.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        recs.push(format!(
            "{} has {} at {}; plan your path on a similar timeline",
            peer.name, tenure, peer.employer
        ));
    }

    recs.truncate(cap);
    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::matcher::SubstringMatcher;
    use crate::models::{
        Certification, EducationEntry, ExperienceEntry, PastRole, PeerEducation, SkillSet,
    };

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn make_candidate() -> CandidateProfile {
        CandidateProfile {
            id: "cv-1".to_string(),
            name: "Jo Park".to_string(),
            experience: vec![ExperienceEntry {
                employer: "Contoso".to_string(),
                title: "Data Intern".to_string(),
                duration_text: "6 months".to_string(),
                description: String::new(),
            }],
            education: vec![EducationEntry {
                degree: "BSc Statistics".to_string(),
                institution: "Uni".to_string(),
                year: None,
            }],
            skills: SkillSet {
                technical: strings(&["Python", "SQL"]),
                soft: vec![],
                tools: strings(&["Excel"]),
            },
            certifications: vec![Certification {
                name: "AWS Cloud Practitioner".to_string(),
                issuer: "AWS".to_string(),
            }],
            ..Default::default()
        }
    }

    fn make_peer(skills: &[&str], role: &str) -> PeerProfile {
        PeerProfile {
            id: "p-1".to_string(),
            name: "Alex".to_string(),
            employer: "Fabrikam".to_string(),
            role: role.to_string(),
            skills: strings(skills),
            tenure: Some("3 years".to_string()),
            ..Default::default()
        }
    }

    fn settings(weights: &CompetitivenessWeights) -> GapSettings<'_> {
        GapSettings {
            matcher: &SubstringMatcher,
            weights,
            max_recommendations: 3,
        }
    }

    #[test]
    fn test_fully_covered_peer_scores_hundred() {
        let w = CompetitivenessWeights::default();
        let facts = CandidateFacts::from_profile(&make_candidate());
        let item = analyze_gap(settings(&w), &facts, &make_peer(&["Python", "SQL"], "Data Intern"));

        assert!(item.gap_analysis.missing_skills.is_empty());
        assert!(item.gap_analysis.missing_experience.is_empty());
        assert_eq!(item.competitiveness_score, 100);
    }

    #[test]
    fn test_gaps_and_weighted_competitiveness() {
        let w = CompetitivenessWeights::default();
        let facts = CandidateFacts::from_profile(&make_candidate());
        let mut peer = make_peer(&["Python", "Tableau", "Spark", "SQL"], "Data Scientist");
        peer.past_roles = vec![
            PastRole {
                employer: "Contoso".to_string(),
                role: "Intern".to_string(),
            },
            PastRole {
                employer: "Initech".to_string(),
                role: "Analyst".to_string(),
            },
        ];
        peer.education = vec![PeerEducation {
            degree: "MSc Data Science".to_string(),
        }];

        let item = analyze_gap(settings(&w), &facts, &peer);
        let gap = &item.gap_analysis;

        assert_eq!(gap.missing_skills, strings(&["Tableau", "Spark"]));
        assert_eq!(
            gap.missing_experience,
            strings(&["Data Scientist experience", "Experience at Initech"])
        );
        assert_eq!(gap.missing_education, strings(&["MSc Data Science"]));
        // 100 * (0.5*0.5 + 0.5*0.3 + 0.7*0.2) = 100 * 0.54
        assert_eq!(item.competitiveness_score, 54);
    }

    #[test]
    fn test_recommendations_capped_at_three() {
        let w = CompetitivenessWeights::default();
        let facts = CandidateFacts::from_profile(&make_candidate());
        let item = analyze_gap(settings(&w), &facts, &make_peer(&["Tableau", "Spark", "Go"], "Engineer"));
        let recs = &item.gap_analysis.recommendations;

        assert_eq!(recs.len(), 3);
        assert!(recs[0].contains("Tableau and Spark"));
        assert!(!recs[0].contains("Go"));
        assert!(recs[1].contains("Engineer experience"));
        assert!(recs[2].contains("3 years"));
    }

    #[test]
    fn test_peer_without_skills_has_zero_skill_ratio() {
        let w = CompetitivenessWeights::default();
        let facts = CandidateFacts::from_profile(&make_candidate());
        let mut peer = make_peer(&[], "");
        peer.tenure = None;
        let item = analyze_gap(settings(&w), &facts, &peer);
        // 100 * (0*0.5 + 1*0.3 + 1*0.2)
        assert_eq!(item.competitiveness_score, 50);
        assert!(item.gap_analysis.recommendations.is_empty());
    }

    #[test]
    fn test_missing_certifications() {
        let w = CompetitivenessWeights::default();
        let facts = CandidateFacts::from_profile(&make_candidate());
        let mut peer = make_peer(&[], "Data Intern");
        peer.certifications = strings(&["AWS Cloud Practitioner", "Tableau Desktop Specialist"]);
        let item = analyze_gap(settings(&w), &facts, &peer);
        assert_eq!(
            item.gap_analysis.missing_certifications,
            strings(&["Tableau Desktop Specialist"])
        );
    }
}
