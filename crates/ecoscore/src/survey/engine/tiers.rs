use super::catalog;

/// Band of the aggregate score that selects the general advice messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScoreTier {
    Minimal,
    Low,
    Moderate,
    High,
}

/// Inclusive upper bound per bounded tier, ascending. Scores above the last
/// bound fall through to `High`.
const TIER_BOUNDS: [(i32, ScoreTier); 3] = [
    (5, ScoreTier::Minimal),
    (8, ScoreTier::Low),
    (15, ScoreTier::Moderate),
];

impl ScoreTier {
    /// Picks the tier for a score. Total over every integer: the first bound
    /// at or above the score wins, anything larger lands in `High`.
    pub(crate) fn for_points(points: i32) -> Self {
        TIER_BOUNDS
            .iter()
            .find(|(bound, _)| points <= *bound)
            .map(|(_, tier)| *tier)
            .unwrap_or(Self::High)
    }

    pub(crate) const fn messages(self) -> &'static [&'static str] {
        match self {
            Self::Minimal => &[catalog::TIER_TRANSIT],
            Self::Low => &[catalog::TIER_APPLIANCES],
            Self::Moderate => &[catalog::TIER_REDUCE_MEAT, catalog::TIER_ECO_SHOPPING],
            Self::High => &[catalog::TIER_FALLBACK],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_uses_ascending_first_match() {
        assert_eq!(ScoreTier::for_points(5), ScoreTier::Minimal);
        assert_eq!(ScoreTier::for_points(6), ScoreTier::Low);
        assert_eq!(ScoreTier::for_points(8), ScoreTier::Low);
        assert_eq!(ScoreTier::for_points(9), ScoreTier::Moderate);
        assert_eq!(ScoreTier::for_points(15), ScoreTier::Moderate);
        assert_eq!(ScoreTier::for_points(16), ScoreTier::High);
        assert_eq!(ScoreTier::for_points(21), ScoreTier::High);
    }

    #[test]
    fn out_of_survey_scores_still_resolve() {
        assert_eq!(ScoreTier::for_points(0), ScoreTier::Minimal);
        assert_eq!(ScoreTier::for_points(-3), ScoreTier::Minimal);
        assert_eq!(ScoreTier::for_points(100), ScoreTier::High);
    }

    #[test]
    fn minimal_tier_recommends_public_transportation() {
        assert_eq!(
            ScoreTier::for_points(5).messages(),
            ["Consider carpooling or using public transportation."]
        );
    }

    #[test]
    fn every_score_yields_at_least_one_message() {
        for points in -5..=30 {
            assert!(!ScoreTier::for_points(points).messages().is_empty());
        }
    }
}
