use crate::cohort::market::MarketInsights;
use crate::matching::matcher::{contains_match, SkillMatcher};
use crate::suggestions::{preview, Category, Impact, Severity, Suggestion};

/// Candidate-side facts the market rules compare against the cohort.
#[derive(Clone, Copy)]
pub struct MarketRuleInput<'a> {
    pub matcher: &'a dyn SkillMatcher,
    /// Normalized technical ∪ tools.
    pub candidate_skills: &'a [String],
    /// Normalized role titles.
    pub candidate_titles: &'a [String],
    /// Sum of the leading year counts of every experience entry.
    pub candidate_years: u32,
    pub insights: &'a MarketInsights,
}

impl MarketRuleInput<'_> {
    fn lacking_skills(&self) -> Vec<String> {
        self.insights
            .common_skills
            .iter()
            .filter(|skill| {
                !contains_match(
                    self.matcher,
                    self.candidate_skills.iter().map(String::as_str),
                    skill,
                )
            })
            .cloned()
            .collect()
    }

    fn lacking_roles(&self) -> Vec<String> {
        self.insights
            .common_roles
            .iter()
            .filter(|role| {
                !contains_match(
                    self.matcher,
                    self.candidate_titles.iter().map(String::as_str),
                    role,
                )
            })
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketRule {
    MissingCommonSkills,
    MissingCommonRoles,
    BelowAverageTenure,
}

impl MarketRule {
    pub const ORDER: [MarketRule; 3] = [
        MarketRule::MissingCommonSkills,
        MarketRule::MissingCommonRoles,
        MarketRule::BelowAverageTenure,
    ];

    pub fn evaluate(self, input: &MarketRuleInput<'_>) -> Option<Suggestion> {
        match self {
            MarketRule::MissingCommonSkills => {
                let lacking = input.lacking_skills();
                if lacking.is_empty() {
                    return None;
                }
                Some(Suggestion {
                    id: "market-skills".to_string(),
                    severity: Severity::Critical,
                    category: Category::Skills,
                    title: "Learn the skills your peers share".to_string(),
                    description: format!(
                        "Alumni in your target roles commonly list {}.",
                        preview(&lacking, 4)
                    ),
                    action_items: vec![
                        format!("Prioritise {} in your learning plan", preview(&lacking, 2)),
                        "Build a portfolio project that uses these skills".to_string(),
                        "Add them to your CV once you can evidence them".to_string(),
                    ],
                    impact: Impact::High,
                    estimated_score_increase: 20,
                })
            }
            MarketRule::MissingCommonRoles => {
                let lacking = input.lacking_roles();
                if lacking.is_empty() {
                    return None;
                }
                Some(Suggestion {
                    id: "market-roles".to_string(),
                    severity: Severity::Important,
                    category: Category::Experience,
                    title: "Gain experience in common peer roles".to_string(),
                    description: format!(
                        "Your peers typically hold roles such as {}.",
                        preview(&lacking, 3)
                    ),
                    action_items: vec![
                        format!("Look for internships titled {}", preview(&lacking, 2)),
                        "Reach out to alumni in these roles for informational interviews".to_string(),
                    ],
                    impact: Impact::High,
                    estimated_score_increase: 15,
                })
            }
            MarketRule::BelowAverageTenure => {
                let average = input.insights.average_tenure_years;
                if average <= 0.0 || f64::from(input.candidate_years) >= average {
                    return None;
                }
                Some(Suggestion {
                    id: "market-tenure".to_string(),
                    severity: Severity::Suggestion,
                    category: Category::Experience,
                    title: "Build up hands-on experience".to_string(),
                    description: format!(
                        "You list {} years of experience against a peer average of {:.1}.",
                        input.candidate_years, average
                    ),
                    action_items: vec![
                        "Count part-time work, research and volunteering on your CV".to_string(),
                        "Take on a longer internship or placement".to_string(),
                    ],
                    impact: Impact::Medium,
                    estimated_score_increase: 10,
                })
            }
        }
    }
}

/// Runs every market rule in order and keeps what fired.
pub fn market_suggestions(input: &MarketRuleInput<'_>) -> Vec<Suggestion> {
    MarketRule::ORDER
        .iter()
        .filter_map(|rule| rule.evaluate(input))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::matcher::SubstringMatcher;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn make_insights(skills: &[&str], roles: &[&str], tenure: f64) -> MarketInsights {
        MarketInsights {
            common_skills: strings(skills),
            common_roles: strings(roles),
            common_employers: vec![],
            average_tenure_years: tenure,
        }
    }

    #[test]
    fn test_market_rules_fire_in_order() {
        let insights = make_insights(&["SQL", "Tableau"], &["Data Analyst"], 3.0);
        let skills = strings(&["sql"]);
        let titles = strings(&["barista"]);
        let input = MarketRuleInput {
            matcher: &SubstringMatcher,
            candidate_skills: &skills,
            candidate_titles: &titles,
            candidate_years: 1,
            insights: &insights,
        };
        let suggestions = market_suggestions(&input);
        let ids: Vec<&str> = suggestions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["market-skills", "market-roles", "market-tenure"]);

        assert_eq!(suggestions[0].severity, Severity::Critical);
        assert_eq!(suggestions[0].estimated_score_increase, 20);
        assert!(suggestions[0].description.contains("Tableau"));
        assert!(!suggestions[0].description.contains("SQL"));
        assert_eq!(suggestions[1].estimated_score_increase, 15);
        assert_eq!(suggestions[2].impact, Impact::Medium);
        assert_eq!(suggestions[2].estimated_score_increase, 10);
    }

    #[test]
    fn test_empty_market_yields_nothing() {
        let insights = make_insights(&[], &[], 0.0);
        let input = MarketRuleInput {
            matcher: &SubstringMatcher,
            candidate_skills: &[],
            candidate_titles: &[],
            candidate_years: 0,
            insights: &insights,
        };
        assert!(market_suggestions(&input).is_empty());
    }

    #[test]
    fn test_tenure_at_or_above_average_is_quiet() {
        let insights = make_insights(&[], &[], 3.0);
        let input = MarketRuleInput {
            matcher: &SubstringMatcher,
            candidate_skills: &[],
            candidate_titles: &[],
            candidate_years: 3,
            insights: &insights,
        };
        assert!(MarketRule::BelowAverageTenure.evaluate(&input).is_none());
    }
}
