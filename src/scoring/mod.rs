pub mod activity;
pub mod documentation;
pub mod technical_depth;

use crate::types::profile::ProfileData;
use crate::types::scoring::{
    round2, ComponentBreakdown, ScoreBreakdown, ScoreWeights, WeightedScore,
};

/// Deterministic, stateless portfolio scorer.
///
/// The engine never fails: missing repositories or commit data pull the
/// affected sub-scores toward their floor instead of producing an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    weights: ScoreWeights,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculate_score(&self, profile: &ProfileData) -> ScoreBreakdown {
        let documentation = documentation::documentation_score(profile);
        let technical_depth = technical_depth::technical_depth_score(profile);
        let activity = activity::activity_score(profile);

        // Weighted from unrounded sub-scores; rounding happens once, below.
        let total = documentation * self.weights.documentation
            + technical_depth * self.weights.technical_depth
            + activity * self.weights.activity;

        tracing::debug!(
            documentation,
            technical_depth,
            activity,
            total,
            repositories = profile.repositories.len(),
            "computed portfolio sub-scores"
        );

        ScoreBreakdown {
            total_score: round2(total),
            documentation_score: round2(documentation),
            technical_depth_score: round2(technical_depth),
            activity_score: round2(activity),
            score_breakdown: ComponentBreakdown {
                documentation: WeightedScore {
                    score: round2(documentation),
                    weight: self.weights.documentation,
                },
                technical_depth: WeightedScore {
                    score: round2(technical_depth),
                    weight: self.weights.technical_depth,
                },
                activity: WeightedScore {
                    score: round2(activity),
                    weight: self.weights.activity,
                },
            },
        }
    }
}
