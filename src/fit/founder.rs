use crate::score::overlap::contains_normalized;
use crate::score::{clamp_score, overlap_score, weighted_average, WeightedInput};
use crate::types::idea::BusinessIdea;
use crate::types::profile::FounderProfile;
use crate::types::scoring::Score;

const PASSION_WEIGHT: f64 = 0.35;
const SKILL_WEIGHT: f64 = 0.35;
const ARCHETYPE_WEIGHT: f64 = 0.15;
const SALES_WEIGHT: f64 = 0.15;

/// Used when either side of the sales comparison is unrated.
pub const DEFAULT_SALES_FIT: Score = 50.0;
const SALES_GAP_PENALTY: f64 = 20.0;

pub fn score_founder_fit(profile: &FounderProfile, idea: &BusinessIdea) -> Score {
    let passion = overlap_score(&idea.primary_passion_domains, &profile.passion_domains);
    let skills = overlap_score(&idea.primary_skill_needs, &profile.skill_tags);
    let archetype = archetype_fit(profile, idea);
    let sales = sales_fit(idea.sales_intensity, profile.skill_spikes.sales_persuasion);

    weighted_average(&[
        WeightedInput::new(passion, PASSION_WEIGHT),
        WeightedInput::new(skills, SKILL_WEIGHT),
        WeightedInput::new(archetype, ARCHETYPE_WEIGHT),
        WeightedInput::new(sales, SALES_WEIGHT),
    ])
}

fn archetype_fit(profile: &FounderProfile, idea: &BusinessIdea) -> Score {
    match idea.business_archetype.as_deref() {
        Some(archetype) if contains_normalized(&profile.business_archetypes, archetype) => 100.0,
        _ => 0.0,
    }
}

/// Each point of distance between the idea's sales intensity and the founder's sales spike
/// costs 20 points.
pub fn sales_fit(sales_intensity: Option<f64>, sales_spike: Option<f64>) -> Score {
    match (sales_intensity, sales_spike) {
        (Some(intensity), Some(spike)) if intensity.is_finite() && spike.is_finite() => {
            clamp_score((100.0 - (intensity - spike).abs() * SALES_GAP_PENALTY).max(0.0))
        }
        _ => DEFAULT_SALES_FIT,
    }
}
