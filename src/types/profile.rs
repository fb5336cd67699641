use super::serde_helpers::{lenient_enum, null_as_default};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(format!("unknown risk level: {other}")),
        }
    }
}

impl RiskLevel {
    /// Position on the 1..=3 risk scale.
    pub fn rank(self) -> u8 {
        match self {
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Runway {
    UnderThreeMonths,
    ThreeToSixMonths,
    SixToTwelveMonths,
    OverTwelveMonths,
    #[serde(other)]
    Unknown,
}

/// Self-rated 1-5 skill vector collected during onboarding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillSpikes {
    pub sales_persuasion: Option<f64>,
    pub content_creation: Option<f64>,
    pub technical_building: Option<f64>,
    pub operations_systems: Option<f64>,
    pub strategic_thinking: Option<f64>,
}

/// The "who" side of fit scoring. Rows arrive partially filled, so every field is optional
/// or defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FounderProfile {
    pub passions_text: Option<String>,
    pub skills_text: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub passion_domains: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub skill_tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub skill_spikes: SkillSpikes,
    pub hours_per_week: Option<f64>,
    pub available_capital: Option<f64>,
    #[serde(deserialize_with = "lenient_enum")]
    pub risk_tolerance: Option<RiskLevel>,
    pub runway: Option<Runway>,
    pub urgency_vs_upside: Option<f64>,
    pub lifestyle_goals: Option<String>,
    pub vision: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub business_archetypes: Vec<String>,
    #[serde(alias = "workPreferences", deserialize_with = "null_as_default")]
    pub work_personality: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub market_segments_understood: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub existing_network_channels: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_profile_deserializes_with_defaults() {
        let profile: FounderProfile = serde_json::from_str(
            r#"{"passionDomains": ["Fitness"], "riskTolerance": "high", "workPreferences": ["faceless"]}"#,
        )
        .expect("partial profile should parse");

        assert_eq!(profile.passion_domains, vec!["Fitness".to_string()]);
        assert_eq!(profile.risk_tolerance, Some(RiskLevel::High));
        assert_eq!(profile.work_personality, vec!["faceless".to_string()]);
        assert!(profile.hours_per_week.is_none());
        assert!(profile.skill_spikes.sales_persuasion.is_none());
    }

    #[test]
    fn unknown_runway_value_maps_to_unknown() {
        let profile: FounderProfile =
            serde_json::from_str(r#"{"runway": "forever"}"#).expect("profile should parse");
        assert_eq!(profile.runway, Some(Runway::Unknown));
    }

    #[test]
    fn null_lists_and_loose_enum_casing_fall_back_to_defaults() {
        let profile: FounderProfile = serde_json::from_str(
            r#"{"passionDomains": null, "skillTags": null, "skillSpikes": null,
                "workPreferences": null, "hoursPerWeek": 10, "riskTolerance": "Medium"}"#,
        )
        .expect("loose profile should parse");

        assert!(profile.passion_domains.is_empty());
        assert!(profile.skill_tags.is_empty());
        assert!(profile.work_personality.is_empty());
        assert_eq!(profile.skill_spikes, SkillSpikes::default());
        assert_eq!(profile.hours_per_week, Some(10.0));
        assert_eq!(profile.risk_tolerance, Some(RiskLevel::Medium));

        let unknown: FounderProfile = serde_json::from_str(r#"{"riskTolerance": "yolo"}"#)
            .expect("unknown risk level should not fail the profile");
        assert!(unknown.risk_tolerance.is_none());
    }

    #[test]
    fn risk_rank_orders_levels() {
        assert!(RiskLevel::Low.rank() < RiskLevel::Medium.rank());
        assert!(RiskLevel::Medium.rank() < RiskLevel::High.rank());
    }
}
