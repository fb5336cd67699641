pub mod constraints;
pub mod economics;
pub mod founder;
pub mod market;
pub mod v6;

use crate::types::idea::{BusinessIdea, IdeaShape};
use crate::types::profile::FounderProfile;
use crate::types::scoring::{IdeaScoreBreakdown, OverallWeights};
use tracing::debug;

pub use constraints::score_constraints_fit;
pub use economics::score_economics;
pub use founder::score_founder_fit;
pub use market::score_market_fit;
pub use v6::score_v6_idea;

pub const LEGACY_OVERALL_WEIGHTS: OverallWeights = OverallWeights {
    founder_fit: 0.40,
    constraints_fit: 0.25,
    market_fit: 0.20,
    economics: 0.15,
};

pub const V6_OVERALL_WEIGHTS: OverallWeights = OverallWeights {
    founder_fit: 0.30,
    constraints_fit: 0.20,
    market_fit: 0.25,
    economics: 0.25,
};

/// Full breakdown for a legacy (v5) idea.
pub fn score_legacy_idea(profile: &FounderProfile, idea: &BusinessIdea) -> IdeaScoreBreakdown {
    IdeaScoreBreakdown::new(
        score_founder_fit(profile, idea),
        score_constraints_fit(profile, idea),
        score_market_fit(profile, idea),
        score_economics(idea),
    )
    .finalize(&LEGACY_OVERALL_WEIGHTS)
}

pub fn score_idea(profile: &FounderProfile, idea: &IdeaShape) -> IdeaScoreBreakdown {
    let breakdown = match idea {
        IdeaShape::Legacy(idea) => score_legacy_idea(profile, idea),
        IdeaShape::V6(idea) => score_v6_idea(profile, idea),
    };
    debug!(
        title = idea.title().unwrap_or("untitled"),
        overall = breakdown.overall,
        "scored idea"
    );
    breakdown
}

pub fn overall_weights(idea: &IdeaShape) -> &'static OverallWeights {
    match idea {
        IdeaShape::Legacy(_) => &LEGACY_OVERALL_WEIGHTS,
        IdeaShape::V6(_) => &V6_OVERALL_WEIGHTS,
    }
}
