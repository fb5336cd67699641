use crate::score::{categorize_score, clamp_score};
use serde::{Deserialize, Serialize};

pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Low,
    Medium,
    High,
}

impl ScoreBand {
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Low => "low",
            ScoreBand::Medium => "medium",
            ScoreBand::High => "high",
        }
    }
}

/// Per-dimension fit of one idea for one founder. Every field is in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaScoreBreakdown {
    pub founder_fit: Score,
    pub constraints_fit: Score,
    pub market_fit: Score,
    pub economics: Score,
    pub overall: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownBands {
    pub founder_fit: ScoreBand,
    pub constraints_fit: ScoreBand,
    pub market_fit: ScoreBand,
    pub economics: ScoreBand,
    pub overall: ScoreBand,
}

/// A breakdown together with the band of each of its fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredBreakdown {
    pub scores: IdeaScoreBreakdown,
    pub bands: BreakdownBands,
}

/// Linear weights that fold the four sub-scores into `overall`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverallWeights {
    pub founder_fit: f64,
    pub constraints_fit: f64,
    pub market_fit: f64,
    pub economics: f64,
}

impl IdeaScoreBreakdown {
    /// Clamps the sub-scores and leaves `overall` at zero until `finalize` is applied.
    pub fn new(
        founder_fit: Score,
        constraints_fit: Score,
        market_fit: Score,
        economics: Score,
    ) -> Self {
        Self {
            founder_fit: clamp_score(founder_fit),
            constraints_fit: clamp_score(constraints_fit),
            market_fit: clamp_score(market_fit),
            economics: clamp_score(economics),
            overall: 0.0,
        }
    }

    pub fn finalize(mut self, weights: &OverallWeights) -> Self {
        self.overall = self.combine(weights);
        self
    }

    /// Recomputes the overall score from this breakdown's own sub-scores.
    pub fn combine(&self, weights: &OverallWeights) -> Score {
        clamp_score(
            self.founder_fit * weights.founder_fit
                + self.constraints_fit * weights.constraints_fit
                + self.market_fit * weights.market_fit
                + self.economics * weights.economics,
        )
    }

    pub fn bands(&self) -> BreakdownBands {
        BreakdownBands {
            founder_fit: categorize_score(self.founder_fit),
            constraints_fit: categorize_score(self.constraints_fit),
            market_fit: categorize_score(self.market_fit),
            economics: categorize_score(self.economics),
            overall: categorize_score(self.overall),
        }
    }

    pub fn explain(self) -> ScoredBreakdown {
        ScoredBreakdown {
            bands: self.bands(),
            scores: self,
        }
    }
}
