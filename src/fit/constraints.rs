use crate::score::{clamp_score, weighted_average, WeightedInput};
use crate::types::idea::BusinessIdea;
use crate::types::profile::{FounderProfile, RiskLevel};
use crate::types::scoring::Score;

const TIME_WEIGHT: f64 = 0.30;
const CAPITAL_WEIGHT: f64 = 0.30;
const RISK_WEIGHT: f64 = 0.25;
const RUNWAY_WEIGHT: f64 = 0.15;

/// Used when the founder has not declared the constraint being compared.
pub const NEUTRAL_CONSTRAINT_SCORE: Score = 70.0;
const FULL_FIT: Score = 100.0;

const HOURS_SHORTFALL_PENALTY: f64 = 10.0;
const RISK_STEP_PENALTY: f64 = 25.0;
const URGENT_FOUNDER_THRESHOLD: f64 = 4.0;
const FAST_REVENUE_MONTHS: f64 = 3.0;
const SLOW_REVENUE_PENALTY: f64 = 15.0;

pub fn score_constraints_fit(profile: &FounderProfile, idea: &BusinessIdea) -> Score {
    let time = time_fit(profile.hours_per_week, idea.hours_per_week_min);
    let capital = capital_fit(idea.capital_required, profile.available_capital);
    let risk = risk_fit(profile.risk_tolerance, idea.risk_level);
    let runway = runway_fit(profile.urgency_vs_upside, idea.time_to_first_revenue_months);

    weighted_average(&[
        WeightedInput::new(time, TIME_WEIGHT),
        WeightedInput::new(capital, CAPITAL_WEIGHT),
        WeightedInput::new(risk, RISK_WEIGHT),
        WeightedInput::new(runway, RUNWAY_WEIGHT),
    ])
}

/// Meeting the idea's minimum is a full fit; exceeding its maximum is not penalized.
pub fn time_fit(founder_hours: Option<f64>, min_hours: Option<f64>) -> Score {
    let Some(hours) = founder_hours.filter(|hours| !hours.is_nan()) else {
        return NEUTRAL_CONSTRAINT_SCORE;
    };
    let min_hours = min_hours.filter(|min| !min.is_nan()).unwrap_or(0.0);
    if hours >= min_hours {
        return FULL_FIT;
    }
    clamp_score(FULL_FIT - (min_hours - hours) * HOURS_SHORTFALL_PENALTY)
}

pub fn capital_fit(capital_required: Option<f64>, available_capital: Option<f64>) -> Score {
    let required = match capital_required {
        Some(required) if required.is_finite() && required > 0.0 => required,
        _ => return FULL_FIT,
    };
    let Some(available) = available_capital.filter(|available| !available.is_nan()) else {
        return NEUTRAL_CONSTRAINT_SCORE;
    };
    let available = available.max(0.0);
    if required <= available {
        return FULL_FIT;
    }
    let gap = required - available;
    clamp_score(FULL_FIT - gap / required * 100.0)
}

pub fn risk_fit(founder: Option<RiskLevel>, idea: Option<RiskLevel>) -> Score {
    match (founder, idea) {
        (Some(founder), Some(idea)) => {
            let distance = f64::from(founder.rank().abs_diff(idea.rank()));
            clamp_score(FULL_FIT - RISK_STEP_PENALTY * distance)
        }
        _ => NEUTRAL_CONSTRAINT_SCORE,
    }
}

/// Only urgent founders (urgency >= 4) are penalized for ideas that take longer than three
/// months to first revenue.
pub fn runway_fit(urgency_vs_upside: Option<f64>, months_to_revenue: Option<f64>) -> Score {
    match (urgency_vs_upside, months_to_revenue) {
        (Some(urgency), Some(months))
            if urgency >= URGENT_FOUNDER_THRESHOLD && months > FAST_REVENUE_MONTHS =>
        {
            clamp_score(FULL_FIT - SLOW_REVENUE_PENALTY * (months - FAST_REVENUE_MONTHS))
        }
        _ => FULL_FIT,
    }
}
