use super::{founder_payload, idea_payload, PromptPair};
use crate::types::idea::IdeaLite;
use crate::types::profile::FounderProfile;
use serde_json::json;

const SYSTEM: &str = "You are a skeptical early-stage investor vetting one business idea for one founder. \
Judge whether this founder, with the constraints given, should pursue the idea. \
Respond with JSON only, shaped as {\"verdict\": \"pursue\" | \"refine\" | \"drop\", \
\"founderFitScore\": number (0-100), \"strengths\": string[], \"concerns\": string[], \
\"nextSteps\": string[]}.";

pub fn build_idea_vetting_prompt(profile: &FounderProfile, idea: &IdeaLite) -> PromptPair {
    let user = json!({
        "founder": founder_payload(profile),
        "idea": idea_payload(idea),
    });

    PromptPair {
        system: SYSTEM.to_string(),
        user: user.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::SUMMARY_BUDGET;
    use serde_json::Value;

    #[test]
    fn vetting_prompt_bounds_idea_summary() {
        let idea = IdeaLite {
            summary: Some("s".repeat(SUMMARY_BUDGET * 2)),
            opportunity_score: Some(64.0),
            ..IdeaLite::new("idea-7", "Pet sitting marketplace")
        };
        let prompt = build_idea_vetting_prompt(&FounderProfile::default(), &idea);

        assert!(prompt.system.contains("\"verdict\""));
        let user: Value = serde_json::from_str(&prompt.user).expect("user payload is JSON");
        let summary = user["idea"]["summary"].as_str().expect("summary is a string");
        assert_eq!(summary.chars().count(), SUMMARY_BUDGET);
        assert_eq!(user["idea"]["title"], "Pet sitting marketplace");
        assert_eq!(user["idea"]["opportunityScore"], 64.0);
    }
}
