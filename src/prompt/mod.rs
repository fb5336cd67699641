//! Pure builders that turn founder and idea context into a `{system, user}` prompt pair.
//! Free text is cut to a per-field budget; numbers and enums pass through untouched. Nothing
//! here talks to the LLM gateway.

pub mod blueprint;
pub mod context;
pub mod generation;
pub mod opportunity;
pub mod response;
pub mod vetting;

pub use blueprint::build_blueprint_prompt;
pub use generation::build_idea_generation_prompt;
pub use opportunity::build_opportunity_prompt;
pub use vetting::build_idea_vetting_prompt;

use context::ContextSnapshot;
use crate::error::Result;
use crate::types::idea::{IdeaAnalysis, IdeaLite};
use crate::types::profile::FounderProfile;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub(crate) const TITLE_BUDGET: usize = 400;
pub(crate) const TAG_BUDGET: usize = 80;
pub(crate) const SUMMARY_BUDGET: usize = 2000;
pub(crate) const PROFILE_TEXT_BUDGET: usize = 1000;
pub(crate) const LIFESTYLE_BUDGET: usize = 600;
pub(crate) const VISION_BUDGET: usize = 800;
pub(crate) const ANALYSIS_BUDGET: usize = 1500;

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    IdeaGeneration,
    IdeaVetting,
    OpportunityScoring,
    Blueprint,
}

/// A prompt pair tagged with its kind and the hash of the context it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledPrompt {
    pub kind: PromptKind,
    pub system: String,
    pub user: String,
    pub context_hash: String,
}

impl CompiledPrompt {
    pub fn new(kind: PromptKind, pair: PromptPair, context: &ContextSnapshot<'_>) -> Result<Self> {
        Ok(Self {
            kind,
            system: pair.system,
            user: pair.user,
            context_hash: context.content_hash()?,
        })
    }
}

/// Cuts `text` to at most `max_length` characters, marking the cut with a trailing `...`.
pub fn sanitize_text(text: Option<&str>, max_length: usize) -> String {
    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return String::new(),
    };
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    // Budgets shorter than the marker get a hard cut.
    if max_length < ELLIPSIS.len() {
        return text.chars().take(max_length).collect();
    }
    let mut truncated: String = text.chars().take(max_length - ELLIPSIS.len()).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

pub(crate) fn sanitize_list(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| sanitize_text(Some(entry.trim()), TAG_BUDGET))
        .filter(|entry| !entry.is_empty())
        .collect()
}

pub(crate) fn founder_payload(profile: &FounderProfile) -> Value {
    json!({
        "passionsText": sanitize_text(profile.passions_text.as_deref(), PROFILE_TEXT_BUDGET),
        "skillsText": sanitize_text(profile.skills_text.as_deref(), PROFILE_TEXT_BUDGET),
        "passionDomains": sanitize_list(&profile.passion_domains),
        "skillTags": sanitize_list(&profile.skill_tags),
        "skillSpikes": profile.skill_spikes,
        "hoursPerWeek": profile.hours_per_week,
        "availableCapital": profile.available_capital,
        "riskTolerance": profile.risk_tolerance,
        "runway": profile.runway,
        "urgencyVsUpside": profile.urgency_vs_upside,
        "lifestyleGoals": sanitize_text(profile.lifestyle_goals.as_deref(), LIFESTYLE_BUDGET),
        "vision": sanitize_text(profile.vision.as_deref(), VISION_BUDGET),
        "businessArchetypes": sanitize_list(&profile.business_archetypes),
        "workPersonality": sanitize_list(&profile.work_personality),
        "marketSegmentsUnderstood": sanitize_list(&profile.market_segments_understood),
        "existingNetworkChannels": sanitize_list(&profile.existing_network_channels),
    })
}

pub(crate) fn idea_payload(idea: &IdeaLite) -> Value {
    json!({
        "title": sanitize_text(Some(&idea.title), TITLE_BUDGET),
        "summary": sanitize_text(idea.summary.as_deref(), SUMMARY_BUDGET),
        "tags": sanitize_list(idea.tags.as_deref().unwrap_or_default()),
        "stage": idea.stage.as_deref().map(|stage| sanitize_text(Some(stage), TAG_BUDGET)),
        "opportunityScore": idea.opportunity_score,
        "founderFitScore": idea.founder_fit_score,
    })
}

pub(crate) fn analysis_payload(analysis: &IdeaAnalysis) -> Value {
    json!({
        "targetCustomer": sanitize_text(analysis.target_customer.as_deref(), ANALYSIS_BUDGET),
        "marketSummary": sanitize_text(analysis.market_summary.as_deref(), ANALYSIS_BUDGET),
        "competition": sanitize_text(analysis.competition.as_deref(), ANALYSIS_BUDGET),
        "differentiation": sanitize_text(analysis.differentiation.as_deref(), ANALYSIS_BUDGET),
        "risks": sanitize_text(analysis.risks.as_deref(), ANALYSIS_BUDGET),
        "opportunityScore": analysis.opportunity_score,
    })
}
