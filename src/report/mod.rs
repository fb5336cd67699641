pub mod json;
pub mod md;

use crate::error::{FitError, Result};
use crate::types::idea::IdeaLite;
use crate::types::scoring::ScoredBreakdown;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Fit breakdown of one idea as printed by `founderfit score`.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub title: Option<String>,
    pub version: &'static str,
    #[serde(flatten)]
    pub breakdown: ScoredBreakdown,
}

pub fn render_score(report: &ScoreReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(FitError::Json),
        OutputFormat::Md => Ok(md::score_to_markdown(report)),
    }
}

pub fn render_ranking(ideas: &[IdeaLite], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(&ideas).map_err(FitError::Json),
        OutputFormat::Md => Ok(md::ranking_to_markdown(ideas)),
    }
}
