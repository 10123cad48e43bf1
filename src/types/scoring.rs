use serde::Serialize;

pub type Score = f64;

/// Fixed contribution of each sub-score to the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreWeights {
    pub documentation: f64,
    pub technical_depth: f64,
    pub activity: f64,
}

impl ScoreWeights {
    pub const FIXED: ScoreWeights = ScoreWeights {
        documentation: 0.30,
        technical_depth: 0.40,
        activity: 0.30,
    };
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::FIXED
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedScore {
    pub score: Score,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentBreakdown {
    pub documentation: WeightedScore,
    pub technical_depth: WeightedScore,
    pub activity: WeightedScore,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub total_score: Score,
    pub documentation_score: Score,
    pub technical_depth_score: Score,
    pub activity_score: Score,
    pub score_breakdown: ComponentBreakdown,
}

/// Rounds to two decimal places on the exact binary value, ties to even.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
