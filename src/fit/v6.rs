use super::V6_OVERALL_WEIGHTS;
use crate::score::overlap::contains_normalized;
use crate::score::{clamp_score, mean_score, to_score};
use crate::types::idea::{BusinessIdeaV6, Difficulty};
use crate::types::profile::FounderProfile;
use crate::types::scoring::{IdeaScoreBreakdown, Score};

/// Used for any absent 0-100 metric on a v6 idea.
pub const DEFAULT_V6_METRIC: Score = 50.0;

const EASY_SCORE: Score = 100.0;
const MEDIUM_SCORE: Score = 70.0;
const HARD_SCORE: Score = 40.0;
const SOLO_FIT_BONUS: f64 = 20.0;
const DIFFICULTY_NORMALIZATION: f64 = 10.0;
const HANDS_OFF_PERSONALITY_BONUS: f64 = 10.0;
const PLATFORM_MATCH_BONUS: f64 = 30.0;

const HANDS_OFF_KEYWORDS: [&str; 2] = ["automation", "faceless"];

pub fn score_v6_idea(profile: &FounderProfile, idea: &BusinessIdeaV6) -> IdeaScoreBreakdown {
    IdeaScoreBreakdown::new(
        founder_fit(profile, idea),
        constraints_fit(idea),
        market_fit(profile, idea),
        economics(idea),
    )
    .finalize(&V6_OVERALL_WEIGHTS)
}

fn metric(value: Option<f64>) -> Score {
    to_score(value, DEFAULT_V6_METRIC)
}

fn founder_fit(profile: &FounderProfile, idea: &BusinessIdeaV6) -> Score {
    let base = mean_score(&[metric(idea.leverage_score), metric(idea.autonomy_level)]);
    let bonus = if prefers_hands_off(profile) {
        HANDS_OFF_PERSONALITY_BONUS
    } else {
        0.0
    };
    clamp_score(base + bonus)
}

fn prefers_hands_off(profile: &FounderProfile) -> bool {
    profile.work_personality.iter().any(|trait_name| {
        let trait_name = trait_name.to_lowercase();
        HANDS_OFF_KEYWORDS
            .iter()
            .any(|keyword| trait_name.contains(keyword))
    })
}

fn constraints_fit(idea: &BusinessIdeaV6) -> Score {
    let difficulty = match idea.difficulty {
        Some(Difficulty::Easy) => EASY_SCORE,
        Some(Difficulty::Hard) => HARD_SCORE,
        Some(Difficulty::Medium) | None => MEDIUM_SCORE,
    };
    let solo = if idea.solo_fit.unwrap_or(false) {
        SOLO_FIT_BONUS
    } else {
        0.0
    };
    clamp_score(difficulty + solo - DIFFICULTY_NORMALIZATION)
}

fn market_fit(profile: &FounderProfile, idea: &BusinessIdeaV6) -> Score {
    let platform = match idea.platform.as_deref() {
        Some(platform) if contains_normalized(&profile.existing_network_channels, platform) => {
            PLATFORM_MATCH_BONUS
        }
        _ => 0.0,
    };
    mean_score(&[
        metric(idea.culture_tailwind),
        platform,
        metric(idea.virality_potential),
    ])
}

fn economics(idea: &BusinessIdeaV6) -> Score {
    mean_score(&[
        metric(idea.automation_density),
        metric(idea.autonomy_level),
        metric(idea.leverage_score),
    ])
}
