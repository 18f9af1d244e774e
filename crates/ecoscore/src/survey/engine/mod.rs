mod catalog;
mod rules;
mod tiers;

use tiers::ScoreTier;

use super::domain::{CarbonScore, ResponseSet};
use serde::{Deserialize, Serialize};

/// Stateless engine turning validated responses into a score and advice.
#[derive(Debug, Default, Clone)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    /// Sums the rating points across every category.
    pub fn score(&self, responses: &ResponseSet) -> CarbonScore {
        let total = responses
            .iter()
            .map(|(_, rating)| u16::from(rating.points()))
            .sum();
        CarbonScore(total)
    }

    /// Builds the recommendation list: matching category rules first, then
    /// the advice family for the score tier. At least one message is always
    /// present because tier selection is total.
    pub fn recommend(&self, responses: &ResponseSet, score: CarbonScore) -> Vec<String> {
        let tier = ScoreTier::for_points(i32::from(score.points()));
        let mut messages = rules::category_messages(responses);
        messages.extend(tier.messages().iter().copied());
        messages.into_iter().map(str::to_string).collect()
    }

    pub fn assess(&self, responses: &ResponseSet) -> CalculationOutcome {
        let score = self.score(responses);
        let recommendations = self.recommend(responses, score);
        CalculationOutcome {
            score,
            recommendations,
        }
    }
}

/// Engine output pairing the aggregate score with its recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationOutcome {
    pub score: CarbonScore,
    pub recommendations: Vec<String>,
}
