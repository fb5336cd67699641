use crate::score::overlap::normalized_set;
use crate::score::{overlap_score, weighted_average, WeightedInput};
use crate::types::idea::BusinessIdea;
use crate::types::profile::FounderProfile;
use crate::types::scoring::Score;

const SEGMENT_WEIGHT: f64 = 0.6;
const NETWORK_WEIGHT: f64 = 0.4;

/// An idea that names no markets is not penalized for it.
pub const UNCLAIMED_SEGMENT_SCORE: Score = 50.0;
pub const UNCLAIMED_NETWORK_SCORE: Score = 25.0;

pub fn score_market_fit(profile: &FounderProfile, idea: &BusinessIdea) -> Score {
    let (segments, network) = if normalized_set(&idea.markets).is_empty() {
        (UNCLAIMED_SEGMENT_SCORE, UNCLAIMED_NETWORK_SCORE)
    } else {
        (
            overlap_score(&idea.markets, &profile.market_segments_understood),
            overlap_score(&idea.markets, &profile.existing_network_channels),
        )
    };

    weighted_average(&[
        WeightedInput::new(segments, SEGMENT_WEIGHT),
        WeightedInput::new(network, NETWORK_WEIGHT),
    ])
}
