use super::{founder_payload, PromptPair};
use crate::types::profile::FounderProfile;
use serde_json::json;

pub fn build_idea_generation_prompt(profile: &FounderProfile, idea_count: u32) -> PromptPair {
    let system = format!(
        "You are a venture studio partner who designs businesses around one specific founder. \
Generate exactly {idea_count} distinct business ideas that fit the founder profile in the user message: \
their passions, skills, weekly hours, available capital, risk tolerance and lifestyle goals. \
Prefer ideas a solo founder can start within 90 days. \
Respond with JSON only, shaped as {{\"ideas\": [{{\"title\": string, \"summary\": string, \
\"primaryPassionDomains\": string[], \"primarySkillNeeds\": string[], \"businessArchetype\": string, \
\"salesIntensity\": number (0-5), \"hoursPerWeekMin\": number, \"hoursPerWeekMax\": number, \
\"capitalRequired\": number, \"riskLevel\": \"low\" | \"medium\" | \"high\", \
\"timeToFirstRevenueMonths\": number, \"markets\": string[], \"revenueModel\": string, \
\"requiresPublicPersonalBrand\": boolean}}]}}."
    );

    let user = json!({
        "founder": founder_payload(profile),
        "ideaCount": idea_count,
    });

    PromptPair {
        system,
        user: user.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn generation_prompt_requests_idea_count_and_embeds_profile() {
        let profile = FounderProfile {
            skills_text: Some("Copywriting; SEO".to_string()),
            available_capital: Some(2500.0),
            ..FounderProfile::default()
        };
        let prompt = build_idea_generation_prompt(&profile, 3);

        assert!(prompt.system.contains("exactly 3 distinct"));
        assert!(prompt.system.contains("\"ideas\""));
        let user: Value = serde_json::from_str(&prompt.user).expect("user payload is JSON");
        assert_eq!(user["ideaCount"], 3);
        assert_eq!(user["founder"]["skillsText"], "Copywriting; SEO");
        assert_eq!(user["founder"]["availableCapital"], 2500.0);
    }
}
