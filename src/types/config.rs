use crate::error::FitError;
use crate::rank::SortKey;
use crate::score::{MAX_SCORE, MIN_SCORE};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

pub const DEFAULT_IDEA_COUNT: u32 = 5;
pub const MAX_IDEA_COUNT: u32 = 20;

#[derive(Debug, Clone, Deserialize)]
pub struct FitConfig {
    pub project: ProjectConfig,
    pub ranking: Option<RankingConfig>,
    pub filter: Option<FilterConfig>,
    pub prompt: Option<PromptConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    pub sort_by: Option<SortKey>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub stages: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub min_opportunity_score: Option<f64>,
    pub min_fit_score: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptConfig {
    pub idea_count: Option<u32>,
}

impl FitConfig {
    pub fn sort_by(&self) -> SortKey {
        self.ranking
            .as_ref()
            .and_then(|ranking| ranking.sort_by)
            .unwrap_or_default()
    }

    pub fn filter(&self) -> FilterConfig {
        self.filter.clone().unwrap_or_default()
    }

    pub fn idea_count(&self) -> u32 {
        self.prompt
            .as_ref()
            .and_then(|prompt| prompt.idea_count)
            .unwrap_or(DEFAULT_IDEA_COUNT)
    }

    pub fn validate(&self) -> Result<(), FitError> {
        self.check()
            .map_err(|violation| FitError::ConfigParse(violation.to_string()))
    }

    /// First rule the config breaks, keyed by the dotted path of the offending value.
    pub fn check(&self) -> Result<(), ConfigViolation> {
        if self.project.name.trim().is_empty() {
            return Err(ConfigViolation::new("project.name", "must not be empty"));
        }

        if let Some(filter) = &self.filter {
            for (key, value) in [
                ("filter.min_opportunity_score", filter.min_opportunity_score),
                ("filter.min_fit_score", filter.min_fit_score),
            ] {
                if let Some(value) = value {
                    if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                        return Err(ConfigViolation::new(
                            key,
                            format!("must be between 0 and 100 (found {value})"),
                        ));
                    }
                }
            }
            check_entries("filter.stages", &filter.stages)?;
            check_entries("filter.tags", &filter.tags)?;
        }

        let idea_count = self.idea_count();
        if !(1..=MAX_IDEA_COUNT).contains(&idea_count) {
            return Err(ConfigViolation::new(
                "prompt.idea_count",
                format!("must be between 1 and {MAX_IDEA_COUNT} (found {idea_count})"),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigViolation {
    pub key: String,
    pub message: String,
}

impl ConfigViolation {
    fn new(key: &str, message: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.message)
    }
}

fn check_entries(key: &str, entries: &[String]) -> Result<(), ConfigViolation> {
    let mut seen = HashSet::new();
    for entry in entries {
        let normalized = entry.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ConfigViolation::new(key, "entries must be non-empty"));
        }
        if !seen.insert(normalized) {
            return Err(ConfigViolation::new(
                key,
                format!("contains duplicate entry: {}", entry.trim()),
            ));
        }
    }
    Ok(())
}
