use super::{analysis_payload, idea_payload, PromptPair};
use crate::types::idea::{IdeaAnalysis, IdeaLite};
use serde_json::{json, Value};

const SYSTEM: &str = "You are a market analyst scoring the commercial opportunity of a business idea, \
independent of who builds it. Use the research notes when present. \
Score every dimension from 0 to 100. \
Respond with JSON only, shaped as {\"opportunityScore\": number, \"marketSize\": number, \
\"competition\": number, \"timing\": number, \"monetization\": number, \"rationale\": string}.";

pub fn build_opportunity_prompt(idea: &IdeaLite, analysis: Option<&IdeaAnalysis>) -> PromptPair {
    let user = json!({
        "idea": idea_payload(idea),
        "analysis": analysis.map(analysis_payload).unwrap_or(Value::Null),
    });

    PromptPair {
        system: SYSTEM.to_string(),
        user: user.to_string(),
    }
}
