use std::sync::Arc;

use crate::errors::EngineError;
use crate::matching::matcher::{SkillMatcher, SubstringMatcher};
use crate::matching::weights::{
    CompetitivenessWeights, HeuristicScores, MarketLimits, ScoringWeights,
};

/// A configured comparison engine: the skill matcher plus every tunable constant.
///
/// `Default` reproduces the v1 product behaviour. Comparisons borrow the engine
/// immutably, so one instance can be shared freely.
#[derive(Clone)]
pub struct ComparisonEngine {
    pub matcher: Arc<dyn SkillMatcher>,
    pub weights: ScoringWeights,
    pub heuristics: HeuristicScores,
    pub competitiveness: CompetitivenessWeights,
    pub limits: MarketLimits,
}

impl Default for ComparisonEngine {
    fn default() -> Self {
        Self {
            matcher: Arc::new(SubstringMatcher),
            weights: ScoringWeights::default(),
            heuristics: HeuristicScores::default(),
            competitiveness: CompetitivenessWeights::default(),
            limits: MarketLimits::default(),
        }
    }
}

impl ComparisonEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps the skill matcher, keeping every other setting.
    pub fn with_matcher(mut self, matcher: Arc<dyn SkillMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// Replaces the composite weights. They must sum to 1.0 so the overall score
    /// stays a convex combination of the dimension scores.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Result<Self, EngineError> {
        if !weights.is_normalized() {
            return Err(EngineError::InvalidArgument(format!(
                "scoring weights must sum to 1.0, got {:.4}",
                weights.total()
            )));
        }
        self.weights = weights;
        Ok(self)
    }

    pub fn matcher(&self) -> &dyn SkillMatcher {
        self.matcher.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_weights_accepts_normalized() {
        let weights = ScoringWeights {
            skills: 0.40,
            experience: 0.20,
            education: 0.10,
            keywords: 0.20,
            soft_skills: 0.10,
        };
        let engine = ComparisonEngine::new().with_weights(weights.clone()).unwrap();
        assert_eq!(engine.weights, weights);
    }

    #[test]
    fn test_with_weights_rejects_unnormalized() {
        let weights = ScoringWeights {
            skills: 0.9,
            ..ScoringWeights::default()
        };
        let err = ComparisonEngine::new().with_weights(weights).err().unwrap();
        assert_eq!(err.code(), "INVALID_ARGUMENT");
        assert!(err.to_string().contains("1.6000"));
    }
}
