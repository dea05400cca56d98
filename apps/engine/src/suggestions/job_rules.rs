use crate::matching::job_comparison::ScoreBreakdown;
use crate::suggestions::{preview, Category, Impact, Severity, Suggestion};

/// Everything the job rules read. Borrowed; rules never mutate it.
#[derive(Debug, Clone, Copy)]
pub struct JobRuleInput<'a> {
    pub job_title: &'a str,
    pub breakdown: &'a ScoreBreakdown,
    pub low_experience_threshold: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobRule {
    MissingSkills,
    MissingKeywords,
    LowExperience,
    IncompleteSoftSkills,
}

impl JobRule {
    /// Evaluation order; also the order suggestions appear in.
    pub const ORDER: [JobRule; 4] = [
        JobRule::MissingSkills,
        JobRule::MissingKeywords,
        JobRule::LowExperience,
        JobRule::IncompleteSoftSkills,
    ];

    pub fn evaluate(self, input: &JobRuleInput<'_>) -> Option<Suggestion> {
        let b = input.breakdown;
        match self {
            JobRule::MissingSkills => {
                let missing = &b.skills.missing;
                if missing.is_empty() {
                    return None;
                }
                Some(Suggestion {
                    id: "missing-skills".to_string(),
                    severity: Severity::Critical,
                    category: Category::Skills,
                    title: "Add missing required skills".to_string(),
                    description: format!(
                        "The {} role asks for {} which your CV does not show.",
                        input.job_title,
                        preview(missing, 3)
                    ),
                    action_items: vec![
                        format!(
                            "Add {} to your skills section if you have used them",
                            preview(missing, 3)
                        ),
                        "Describe a project or course where you applied these skills".to_string(),
                        "Start a short online course to close the remaining gaps".to_string(),
                    ],
                    impact: Impact::High,
                    estimated_score_increase: 15,
                })
            }
            JobRule::MissingKeywords => {
                let missing = &b.keywords.missing;
                if missing.is_empty() {
                    return None;
                }
                Some(Suggestion {
                    id: "missing-keywords".to_string(),
                    severity: Severity::Important,
                    category: Category::Keywords,
                    title: "Mirror the posting's language".to_string(),
                    description: format!(
                        "Terms such as {} appear in the posting but nowhere in your CV.",
                        preview(missing, 4)
                    ),
                    action_items: vec![
                        "Reuse the posting's wording in your experience descriptions".to_string(),
                        format!("Work {} into your summary where accurate", preview(missing, 2)),
                    ],
                    impact: Impact::Medium,
                    estimated_score_increase: 10,
                })
            }
            JobRule::LowExperience => {
                if b.experience.score >= input.low_experience_threshold {
                    return None;
                }
                Some(Suggestion {
                    id: "experience-alignment".to_string(),
                    severity: Severity::Important,
                    category: Category::Experience,
                    title: "Show experience closer to this role".to_string(),
                    description: format!(
                        "None of your role titles line up with {}.",
                        input.job_title
                    ),
                    action_items: vec![
                        "Reframe past role titles and bullets around transferable work".to_string(),
                        "Add internships, projects or volunteering related to this role".to_string(),
                        "Quantify outcomes in each experience entry".to_string(),
                    ],
                    impact: Impact::High,
                    estimated_score_increase: 12,
                })
            }
            JobRule::IncompleteSoftSkills => {
                let missing = &b.soft_skills.missing;
                if missing.is_empty() {
                    return None;
                }
                Some(Suggestion {
                    id: "soft-skills".to_string(),
                    severity: Severity::Suggestion,
                    category: Category::Skills,
                    title: "Round out your soft skills".to_string(),
                    description: format!(
                        "Employers look for {}, which your CV does not mention.",
                        preview(missing, 4)
                    ),
                    action_items: vec![
                        format!("List {} among your soft skills", preview(missing, 2)),
                        "Back each soft skill with a concrete example".to_string(),
                    ],
                    impact: Impact::Low,
                    estimated_score_increase: 5,
                })
            }
        }
    }
}

/// Runs every job rule in order and keeps what fired.
pub fn job_suggestions(input: &JobRuleInput<'_>) -> Vec<Suggestion> {
    JobRule::ORDER
        .iter()
        .filter_map(|rule| rule.evaluate(input))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::dimensions::{DimensionResult, EducationResult, ExperienceResult};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn make_breakdown(
        missing_skills: &[&str],
        missing_keywords: &[&str],
        experience_score: u32,
        missing_soft: &[&str],
    ) -> ScoreBreakdown {
        ScoreBreakdown {
            skills: DimensionResult {
                score: 50,
                matched: vec![],
                missing: strings(missing_skills),
            },
            experience: ExperienceResult {
                score: experience_score,
                matched: experience_score >= 60,
                matching_roles: vec![],
            },
            education: EducationResult {
                score: 90,
                matched: true,
                entry_count: 1,
            },
            keywords: DimensionResult {
                score: 50,
                matched: vec![],
                missing: strings(missing_keywords),
            },
            soft_skills: DimensionResult {
                score: 100,
                matched: vec![],
                missing: strings(missing_soft),
            },
        }
    }

    fn run(breakdown: &ScoreBreakdown) -> Vec<Suggestion> {
        job_suggestions(&JobRuleInput {
            job_title: "Data Analyst",
            breakdown,
            low_experience_threshold: 60,
        })
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let b = make_breakdown(&["Tableau"], &["stakeholder"], 40, &["Teamwork"]);
        let ids: Vec<String> = run(&b).into_iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            strings(&[
                "missing-skills",
                "missing-keywords",
                "experience-alignment",
                "soft-skills"
            ])
        );
    }

    #[test]
    fn test_nothing_to_flag_yields_empty_list() {
        let b = make_breakdown(&[], &[], 70, &[]);
        assert!(run(&b).is_empty());
    }

    #[test]
    fn test_missing_skills_is_critical_high_fifteen() {
        let b = make_breakdown(&["Tableau", "Looker"], &[], 70, &[]);
        let s = &run(&b)[0];
        assert_eq!(s.severity, Severity::Critical);
        assert_eq!(s.impact, Impact::High);
        assert_eq!(s.estimated_score_increase, 15);
        assert!(s.description.contains("Tableau, Looker"));
        assert!((2..=3).contains(&s.action_items.len()));
    }

    #[test]
    fn test_experience_threshold_is_exclusive() {
        let at_threshold = make_breakdown(&[], &[], 60, &[]);
        assert!(run(&at_threshold).is_empty());

        let below = make_breakdown(&[], &[], 59, &[]);
        let s = run(&below);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].severity, Severity::Important);
        assert_eq!(s[0].impact, Impact::High);
        assert_eq!(s[0].estimated_score_increase, 12);
    }

    #[test]
    fn test_keywords_and_soft_skill_uplifts() {
        let b = make_breakdown(&[], &["pipelines"], 70, &["Leadership"]);
        let s = run(&b);
        assert_eq!(s[0].estimated_score_increase, 10);
        assert_eq!(s[0].impact, Impact::Medium);
        assert_eq!(s[1].severity, Severity::Suggestion);
        assert_eq!(s[1].impact, Impact::Low);
        assert_eq!(s[1].estimated_score_increase, 5);
    }
}
