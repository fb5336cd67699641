use crate::error::{FitError, Result};
use crate::score::to_score;
use crate::types::scoring::Score;
use serde::Serialize;
use serde_json::Value;

/// Opportunity scores returned by the gateway, clamped to `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityAssessment {
    pub opportunity_score: Score,
    pub market_size: Score,
    pub competition: Score,
    pub timing: Score,
    pub monetization: Score,
    pub rationale: String,
}

/// Parses the reply to an opportunity prompt. Missing or non-numeric scores become 0; numbers
/// sent as strings are accepted.
pub fn parse_opportunity_response(raw: &str) -> Result<OpportunityAssessment> {
    let value: Value = serde_json::from_str(strip_code_fence(raw))?;
    let Value::Object(fields) = value else {
        return Err(FitError::InvalidDocument(
            "opportunity response must be a JSON object".to_string(),
        ));
    };

    let score = |key: &str| to_score(fields.get(key).and_then(number_like), 0.0);
    Ok(OpportunityAssessment {
        opportunity_score: score("opportunityScore"),
        market_size: score("marketSize"),
        competition: score("competition"),
        timing: score("timing"),
        monetization: score("monetization"),
        rationale: fields
            .get("rationale")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    })
}

fn number_like(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) on the opening fence line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
