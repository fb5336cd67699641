use super::ScoreReport;
use crate::types::idea::IdeaLite;

pub fn score_to_markdown(report: &ScoreReport) -> String {
    let scores = &report.breakdown.scores;
    let bands = &report.breakdown.bands;

    let mut output = String::new();
    output.push_str(&format!(
        "# Fit Report: {}\n\n",
        report.title.as_deref().unwrap_or("untitled idea")
    ));
    output.push_str(&format!(
        "Overall score: {:.1} ({}, {} strategy)\n\n",
        scores.overall,
        bands.overall.label(),
        report.version
    ));
    output.push_str("## Dimensions\n\n");
    for (name, score, band) in [
        ("founder_fit", scores.founder_fit, bands.founder_fit),
        ("constraints_fit", scores.constraints_fit, bands.constraints_fit),
        ("market_fit", scores.market_fit, bands.market_fit),
        ("economics", scores.economics, bands.economics),
    ] {
        output.push_str(&format!("- {name}: {score:.1} ({})\n", band.label()));
    }

    output
}

pub fn ranking_to_markdown(ideas: &[IdeaLite]) -> String {
    let mut output = String::new();
    output.push_str("# Ranked Ideas\n\n");
    if ideas.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    for (position, idea) in ideas.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} (opportunity {}, fit {})",
            position + 1,
            idea.title,
            format_optional(idea.opportunity_score),
            format_optional(idea.founder_fit_score)
        ));
        if let Some(stage) = &idea.stage {
            output.push_str(&format!(" [{stage}]"));
        }
        if let Some(metadata) = &idea.metadata {
            output.push_str(&format!(" <{}>", metadata.source()));
        }
        output.push('\n');
    }

    output
}

fn format_optional(score: Option<f64>) -> String {
    score.map_or_else(|| "n/a".to_string(), |score| format!("{score:.1}"))
}
