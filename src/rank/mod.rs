pub mod keyword;

pub use keyword::{compute_fit_score, includes_any};

use crate::score::overlap::normalized_set;
use crate::score::to_score;
use crate::types::config::FilterConfig;
use crate::types::idea::IdeaLite;
use crate::types::profile::FounderProfile;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Opportunity,
    FounderFit,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RankOptions<'a> {
    pub sort_by: SortKey,
    pub founder_profile: Option<&'a FounderProfile>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub stages: Vec<String>,
    pub min_opportunity_score: f64,
    pub min_fit_score: f64,
    pub tags: Vec<String>,
}

impl From<FilterConfig> for FilterOptions {
    fn from(config: FilterConfig) -> Self {
        Self {
            stages: config.stages,
            min_opportunity_score: config.min_opportunity_score.unwrap_or(0.0),
            min_fit_score: config.min_fit_score.unwrap_or(0.0),
            tags: config.tags,
        }
    }
}

/// Returns a sorted copy of `ideas`, highest first. Ideas without a founder fit score get the
/// keyword fit when a profile is supplied; the input slice is left untouched.
pub fn rank_ideas(ideas: &[IdeaLite], options: &RankOptions<'_>) -> Vec<IdeaLite> {
    let mut ranked: Vec<IdeaLite> = ideas
        .iter()
        .map(|idea| {
            let mut idea = idea.clone();
            if idea.founder_fit_score.is_none() {
                if let Some(profile) = options.founder_profile {
                    let fit = compute_fit_score(&idea, profile);
                    debug!(id = %idea.id, fit, "computed keyword fit");
                    idea.founder_fit_score = Some(fit);
                }
            }
            idea
        })
        .collect();

    let key = options.sort_by;
    ranked.sort_by(|a, b| sort_value(b, key).total_cmp(&sort_value(a, key)));
    ranked
}

/// Unclamped so out-of-range rows still order among themselves; missing or NaN sorts as 0.
fn raw_score(value: Option<f64>) -> f64 {
    value.filter(|value| !value.is_nan()).unwrap_or(0.0)
}

fn sort_value(idea: &IdeaLite, key: SortKey) -> f64 {
    match key {
        SortKey::Opportunity => raw_score(idea.opportunity_score),
        SortKey::FounderFit => raw_score(idea.founder_fit_score),
        SortKey::CreatedAt => idea
            .created_at
            .as_deref()
            .and_then(parse_epoch_millis)
            .unwrap_or(0) as f64,
    }
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_epoch_millis(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.timestamp_millis());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc().timestamp_millis())
}

/// Keeps ideas that pass every active filter.
pub fn filter_ideas(ideas: &[IdeaLite], options: &FilterOptions) -> Vec<IdeaLite> {
    let wanted_tags = normalized_set(&options.tags);
    ideas
        .iter()
        .filter(|idea| {
            options.stages.is_empty()
                || idea
                    .stage
                    .as_ref()
                    .is_some_and(|stage| options.stages.contains(stage))
        })
        .filter(|idea| to_score(idea.opportunity_score, 0.0) >= options.min_opportunity_score)
        .filter(|idea| to_score(idea.founder_fit_score, 0.0) >= options.min_fit_score)
        .filter(|idea| {
            wanted_tags.is_empty()
                || idea
                    .tags
                    .as_deref()
                    .is_some_and(|tags| !normalized_set(tags).is_disjoint(&wanted_tags))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(id: &str, opportunity: Option<f64>) -> IdeaLite {
        IdeaLite {
            opportunity_score: opportunity,
            ..IdeaLite::new(id, format!("Idea {id}"))
        }
    }

    fn ids(ideas: &[IdeaLite]) -> Vec<&str> {
        ideas.iter().map(|idea| idea.id.as_str()).collect()
    }

    #[test]
    fn rank_sorts_by_opportunity_by_default() {
        let ideas = vec![idea("a", Some(40.0)), idea("b", None), idea("c", Some(90.0))];
        let ranked = rank_ideas(&ideas, &RankOptions::default());
        assert_eq!(ids(&ranked), vec!["c", "a", "b"]);
        assert_eq!(ids(&ideas), vec!["a", "b", "c"]);
    }

    #[test]
    fn rank_orders_out_of_range_scores_by_raw_value() {
        let ideas = vec![
            idea("over", Some(120.0)),
            idea("nan", Some(f64::NAN)),
            idea("far-over", Some(250.0)),
            idea("normal", Some(99.0)),
        ];
        let ranked = rank_ideas(&ideas, &RankOptions::default());
        assert_eq!(ids(&ranked), vec!["far-over", "over", "normal", "nan"]);
    }

    #[test]
    fn rank_fills_missing_fit_from_profile_only() {
        let mut scored = idea("scored", Some(10.0));
        scored.founder_fit_score = Some(12.0);
        let mut matching = idea("matching", Some(10.0));
        matching.summary = Some("A podcast for gardeners".to_string());
        let profile = FounderProfile {
            passions_text: Some("gardening, podcast".to_string()),
            ..FounderProfile::default()
        };

        let ranked = rank_ideas(
            &[scored.clone(), matching.clone()],
            &RankOptions {
                sort_by: SortKey::FounderFit,
                founder_profile: Some(&profile),
            },
        );
        assert_eq!(ids(&ranked), vec!["matching", "scored"]);
        assert_eq!(ranked[0].founder_fit_score, Some(65.0));
        assert_eq!(ranked[1].founder_fit_score, Some(12.0));

        let unscored = rank_ideas(&[matching], &RankOptions::default());
        assert!(unscored[0].founder_fit_score.is_none());
    }

    #[test]
    fn rank_by_created_at_puts_undated_last() {
        let mut old = idea("old", None);
        old.created_at = Some("2024-01-05".to_string());
        let mut new = idea("new", None);
        new.created_at = Some("2025-03-01T09:30:00Z".to_string());
        let mut garbage = idea("garbage", None);
        garbage.created_at = Some("yesterday".to_string());
        let undated = idea("undated", None);

        let ranked = rank_ideas(
            &[undated, old, garbage, new],
            &RankOptions {
                sort_by: SortKey::CreatedAt,
                founder_profile: None,
            },
        );
        assert_eq!(&ids(&ranked)[..2], &["new", "old"]);
    }

    #[test]
    fn parse_epoch_millis_handles_both_formats() {
        assert_eq!(parse_epoch_millis("1970-01-02"), Some(86_400_000));
        assert_eq!(parse_epoch_millis("1970-01-01T00:00:01Z"), Some(1_000));
        assert_eq!(parse_epoch_millis("soon"), None);
    }

    #[test]
    fn filter_by_min_opportunity_score() {
        let ideas = vec![idea("low", Some(65.0)), idea("high", Some(80.0))];
        let kept = filter_ideas(
            &ideas,
            &FilterOptions {
                min_opportunity_score: 70.0,
                ..FilterOptions::default()
            },
        );
        assert_eq!(ids(&kept), vec!["high"]);
    }

    #[test]
    fn filter_by_stage_and_tags() {
        let mut validated = idea("validated", Some(50.0));
        validated.stage = Some("validated".to_string());
        validated.tags = Some(vec!["B2B".to_string(), "SaaS".to_string()]);
        let mut draft = idea("draft", Some(50.0));
        draft.stage = Some("draft".to_string());
        draft.tags = Some(vec!["saas".to_string()]);
        let untagged = idea("untagged", Some(50.0));

        let ideas = vec![validated, draft, untagged];
        let by_tag = filter_ideas(
            &ideas,
            &FilterOptions {
                tags: vec!["saas".to_string()],
                ..FilterOptions::default()
            },
        );
        assert_eq!(ids(&by_tag), vec!["validated", "draft"]);

        let by_stage_and_tag = filter_ideas(
            &ideas,
            &FilterOptions {
                stages: vec!["validated".to_string()],
                tags: vec!["saas".to_string()],
                ..FilterOptions::default()
            },
        );
        assert_eq!(ids(&by_stage_and_tag), vec!["validated"]);
    }

    #[test]
    fn filter_on_empty_input_is_empty() {
        let options = FilterOptions {
            min_fit_score: 90.0,
            ..FilterOptions::default()
        };
        assert!(filter_ideas(&[], &options).is_empty());
    }

    #[test]
    fn filter_config_converts_with_zero_defaults() {
        let options = FilterOptions::from(FilterConfig {
            stages: vec!["draft".to_string()],
            ..FilterConfig::default()
        });
        assert_eq!(options.min_opportunity_score, 0.0);
        assert_eq!(options.min_fit_score, 0.0);
        assert_eq!(options.stages, vec!["draft".to_string()]);
    }
}
