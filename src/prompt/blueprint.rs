use super::{analysis_payload, founder_payload, idea_payload, PromptPair};
use crate::types::idea::{IdeaAnalysis, IdeaLite};
use crate::types::profile::FounderProfile;
use serde_json::{json, Value};

const SYSTEM: &str = "You are an operating coach turning a chosen business idea into an execution blueprint \
for this founder. Respect their weekly hours, capital and risk tolerance. \
Respond with JSON only, shaped as {\"northStar\": string, \"phases\": [{\"name\": string, \
\"goal\": string, \"durationWeeks\": number, \"milestones\": string[]}], \"risks\": string[], \
\"firstWeekActions\": string[]}.";

pub fn build_blueprint_prompt(
    profile: &FounderProfile,
    idea: &IdeaLite,
    analysis: Option<&IdeaAnalysis>,
) -> PromptPair {
    let user = json!({
        "founder": founder_payload(profile),
        "idea": idea_payload(idea),
        "analysis": analysis.map(analysis_payload).unwrap_or(Value::Null),
    });

    PromptPair {
        system: SYSTEM.to_string(),
        user: user.to_string(),
    }
}
