use super::profile::RiskLevel;
use super::serde_helpers::{lenient_enum, null_as_default};
use super::scoring::IdeaScoreBreakdown;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Legacy (v5) idea shape, scored by tag overlap against the founder profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessIdea {
    pub title: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_passion_domains: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_skill_needs: Vec<String>,
    pub business_archetype: Option<String>,
    /// 0-5 scale, compared against the founder's sales spike.
    pub sales_intensity: Option<f64>,
    pub hours_per_week_min: Option<f64>,
    pub hours_per_week_max: Option<f64>,
    pub capital_required: Option<f64>,
    #[serde(deserialize_with = "lenient_enum")]
    pub risk_level: Option<RiskLevel>,
    pub time_to_first_revenue_months: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub markets: Vec<String>,
    pub revenue_model: Option<String>,
    pub requires_public_personal_brand: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Flattened v6 idea shape. Numeric fields are on a 0-100 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessIdeaV6 {
    pub title: Option<String>,
    pub leverage_score: Option<f64>,
    pub autonomy_level: Option<f64>,
    #[serde(deserialize_with = "lenient_enum")]
    pub difficulty: Option<Difficulty>,
    pub solo_fit: Option<bool>,
    pub culture_tailwind: Option<f64>,
    pub virality_potential: Option<f64>,
    pub automation_density: Option<f64>,
    pub platform: Option<String>,
}

/// An idea document submitted for full scoring. The two shapes are scored by unrelated
/// formula families and never converted into each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "version")]
pub enum IdeaShape {
    #[serde(rename = "v5")]
    Legacy(BusinessIdea),
    #[serde(rename = "v6")]
    V6(BusinessIdeaV6),
}

impl IdeaShape {
    pub fn title(&self) -> Option<&str> {
        match self {
            IdeaShape::Legacy(idea) => idea.title.as_deref(),
            IdeaShape::V6(idea) => idea.title.as_deref(),
        }
    }

    pub fn version(&self) -> &'static str {
        match self {
            IdeaShape::Legacy(_) => "v5",
            IdeaShape::V6(_) => "v6",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdeaStatus {
    Candidate,
    Chosen,
    NorthStar,
    Archived,
}

impl IdeaStatus {
    pub fn can_transition_to(self, next: IdeaStatus) -> bool {
        use IdeaStatus::*;
        matches!(
            (self, next),
            (Candidate, Chosen)
                | (Candidate, NorthStar)
                | (Candidate, Archived)
                | (Chosen, NorthStar)
                | (NorthStar, Chosen)
                | (Chosen, Archived)
                | (NorthStar, Archived)
                | (Archived, Candidate)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMetadata {
    pub model: Option<String>,
    pub prompt_version: Option<String>,
    pub fit_scores: Option<IdeaScoreBreakdown>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserEditedMetadata {
    pub edited_at: Option<String>,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Metadata attached to an idea row, keyed by the producer that wrote it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum IdeaMetadata {
    Generated(GeneratedMetadata),
    UserEdited(UserEditedMetadata),
}

impl IdeaMetadata {
    pub fn source(&self) -> &'static str {
        match self {
            IdeaMetadata::Generated(_) => "generated",
            IdeaMetadata::UserEdited(_) => "user_edited",
        }
    }
}

/// Projection of an idea row used for ranking and filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaLite {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunity_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founder_fit_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IdeaStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<IdeaMetadata>,
}

impl IdeaLite {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: None,
            tags: None,
            stage: None,
            opportunity_score: None,
            founder_fit_score: None,
            created_at: None,
            status: None,
            metadata: None,
        }
    }
}

/// Partially filled idea record checked before persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeaDraft {
    pub title: Option<String>,
    pub summary: Option<String>,
}

impl From<&IdeaLite> for IdeaDraft {
    fn from(idea: &IdeaLite) -> Self {
        Self {
            title: Some(idea.title.clone()),
            summary: idea.summary.clone(),
        }
    }
}

/// Research notes produced for an idea, consumed by the opportunity and blueprint prompts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdeaAnalysis {
    pub target_customer: Option<String>,
    pub market_summary: Option<String>,
    pub competition: Option<String>,
    pub differentiation: Option<String>,
    pub risks: Option<String>,
    pub opportunity_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::profile::FounderProfile;

    #[test]
    fn loose_llm_rows_parse_and_score() {
        let legacy: IdeaShape = serde_json::from_str(
            r#"{"version": "v5", "title": "Tutoring", "markets": null,
                "primarySkillNeeds": null, "riskLevel": "Medium"}"#,
        )
        .expect("loose v5 idea should parse");
        let IdeaShape::Legacy(ref idea) = legacy else {
            panic!("expected legacy idea");
        };
        assert!(idea.markets.is_empty());
        assert!(idea.primary_skill_needs.is_empty());
        assert_eq!(idea.risk_level, Some(RiskLevel::Medium));

        let v6: IdeaShape =
            serde_json::from_str(r#"{"version": "v6", "difficulty": "HARD", "soloFit": true}"#)
                .expect("loose v6 idea should parse");
        assert!(matches!(v6, IdeaShape::V6(ref idea) if idea.difficulty == Some(Difficulty::Hard)));

        let breakdown = crate::fit::score_idea(&FounderProfile::default(), &legacy);
        assert!((0.0..=100.0).contains(&breakdown.overall));
        // No markets named: segment 50, network 25.
        assert!((breakdown.market_fit - 40.0).abs() < 1e-9);
    }

    #[test]
    fn idea_shape_dispatches_on_version_tag() {
        let legacy: IdeaShape = serde_json::from_str(
            r#"{"version": "v5", "title": "Meal kits", "markets": ["parents"], "riskLevel": "low"}"#,
        )
        .expect("v5 idea should parse");
        let v6: IdeaShape = serde_json::from_str(
            r#"{"version": "v6", "title": "Faceless channel", "leverageScore": 80, "difficulty": "easy"}"#,
        )
        .expect("v6 idea should parse");

        match legacy {
            IdeaShape::Legacy(idea) => {
                assert_eq!(idea.markets, vec!["parents".to_string()]);
                assert_eq!(idea.risk_level, Some(RiskLevel::Low));
            }
            IdeaShape::V6(_) => panic!("expected legacy idea"),
        }
        assert_eq!(v6.title(), Some("Faceless channel"));
        assert!(matches!(v6, IdeaShape::V6(ref idea) if idea.difficulty == Some(Difficulty::Easy)));
    }

    #[test]
    fn metadata_keeps_unknown_fields_per_producer() {
        let metadata: IdeaMetadata = serde_json::from_str(
            r#"{"source": "generated", "model": "gateway-large", "temperature": 0.7}"#,
        )
        .expect("generated metadata should parse");

        match &metadata {
            IdeaMetadata::Generated(generated) => {
                assert_eq!(generated.model.as_deref(), Some("gateway-large"));
                assert_eq!(
                    generated.extra.get("temperature").and_then(Value::as_f64),
                    Some(0.7)
                );
            }
            IdeaMetadata::UserEdited(_) => panic!("expected generated metadata"),
        }
        assert_eq!(metadata.source(), "generated");
    }

    #[test]
    fn status_transitions_follow_lifecycle() {
        assert!(IdeaStatus::Candidate.can_transition_to(IdeaStatus::NorthStar));
        assert!(IdeaStatus::Chosen.can_transition_to(IdeaStatus::Archived));
        assert!(IdeaStatus::Archived.can_transition_to(IdeaStatus::Candidate));
        assert!(!IdeaStatus::Archived.can_transition_to(IdeaStatus::Chosen));
        assert!(!IdeaStatus::Candidate.can_transition_to(IdeaStatus::Candidate));
    }

    #[test]
    fn idea_lite_parses_snake_case_row() {
        let idea: IdeaLite = serde_json::from_str(
            r#"{"id": "1", "title": "Newsletter", "opportunity_score": 72, "status": "north_star"}"#,
        )
        .expect("idea row should parse");
        assert_eq!(idea.opportunity_score, Some(72.0));
        assert_eq!(idea.status, Some(IdeaStatus::NorthStar));
        assert!(idea.founder_fit_score.is_none());
    }
}
