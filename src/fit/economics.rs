use crate::score::{weighted_average, WeightedInput};
use crate::types::idea::BusinessIdea;
use crate::types::scoring::Score;
use regex::Regex;
use std::sync::OnceLock;

const CAPITAL_EFFICIENCY_WEIGHT: f64 = 0.30;
const REVENUE_SPEED_WEIGHT: f64 = 0.30;
const RECURRING_REVENUE_WEIGHT: f64 = 0.25;
const BRAND_INDEPENDENCE_WEIGHT: f64 = 0.15;

/// Used for any economics term whose idea field is absent.
pub const DEFAULT_NO_DATA_SCORE: Score = 50.0;
const RECURRING_MODEL_SCORE: Score = 100.0;
const ONE_OFF_MODEL_SCORE: Score = 50.0;
const BRAND_ADJUSTMENT: f64 = 10.0;

// (exclusive lower bound, score) pairs checked from the top down.
const CAPITAL_STEPS: [(f64, Score); 4] = [
    (20_000.0, 40.0),
    (10_000.0, 60.0),
    (5_000.0, 75.0),
    (1_000.0, 90.0),
];
const REVENUE_MONTH_STEPS: [(f64, Score); 3] = [(6.0, 40.0), (4.0, 60.0), (2.0, 80.0)];

static RECURRING_REVENUE: OnceLock<Regex> = OnceLock::new();

fn recurring_revenue_pattern() -> &'static Regex {
    RECURRING_REVENUE.get_or_init(|| {
        Regex::new(r"(?i)subscription|recurring|saas|membership|monthly|annual")
            .expect("recurring revenue pattern is a valid regex")
    })
}

/// Idea-only economics; the founder profile plays no part here.
pub fn score_economics(idea: &BusinessIdea) -> Score {
    weighted_average(&[
        WeightedInput::new(capital_efficiency(idea.capital_required), CAPITAL_EFFICIENCY_WEIGHT),
        WeightedInput::new(revenue_speed(idea.time_to_first_revenue_months), REVENUE_SPEED_WEIGHT),
        WeightedInput::new(
            recurring_revenue(idea.revenue_model.as_deref()),
            RECURRING_REVENUE_WEIGHT,
        ),
        WeightedInput::new(
            brand_independence(idea.requires_public_personal_brand),
            BRAND_INDEPENDENCE_WEIGHT,
        ),
    ])
}

pub fn capital_efficiency(capital_required: Option<f64>) -> Score {
    match capital_required.filter(|capital| !capital.is_nan()) {
        Some(capital) => step_down(capital, &CAPITAL_STEPS),
        None => DEFAULT_NO_DATA_SCORE,
    }
}

pub fn revenue_speed(months_to_revenue: Option<f64>) -> Score {
    match months_to_revenue.filter(|months| !months.is_nan()) {
        Some(months) => step_down(months, &REVENUE_MONTH_STEPS),
        None => DEFAULT_NO_DATA_SCORE,
    }
}

pub fn recurring_revenue(revenue_model: Option<&str>) -> Score {
    match revenue_model {
        Some(model) if recurring_revenue_pattern().is_match(model) => RECURRING_MODEL_SCORE,
        _ => ONE_OFF_MODEL_SCORE,
    }
}

pub fn brand_independence(requires_public_personal_brand: Option<bool>) -> Score {
    match requires_public_personal_brand {
        Some(false) => DEFAULT_NO_DATA_SCORE + BRAND_ADJUSTMENT,
        Some(true) => DEFAULT_NO_DATA_SCORE - BRAND_ADJUSTMENT,
        None => DEFAULT_NO_DATA_SCORE,
    }
}

fn step_down(value: f64, steps: &[(f64, Score)]) -> Score {
    steps
        .iter()
        .find(|(bound, _)| value > *bound)
        .map(|(_, score)| *score)
        .unwrap_or(100.0)
}
