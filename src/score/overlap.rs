use crate::types::scoring::Score;
use std::collections::HashSet;

/// Share of the idea-side entries that the founder side covers, scaled to 0-100.
///
/// Matching is case-insensitive on trimmed entries. The ratio is taken over the idea side
/// only: a founder with many extra tags is not penalized.
pub fn overlap_score(idea_side: &[String], founder_side: &[String]) -> Score {
    let needed = normalized_set(idea_side);
    let covered = normalized_set(founder_side);
    if needed.is_empty() || covered.is_empty() {
        return 0.0;
    }

    let hits = needed.intersection(&covered).count();
    hits as f64 / needed.len() as f64 * 100.0
}

pub(crate) fn normalized_set(entries: &[String]) -> HashSet<String> {
    entries
        .iter()
        .map(|entry| entry.trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect()
}

pub(crate) fn contains_normalized(entries: &[String], needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    !needle.is_empty() && normalized_set(entries).contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_sides_score_zero() {
        assert_eq!(overlap_score(&[], &tags(&["x"])), 0.0);
        assert_eq!(overlap_score(&tags(&["x"]), &[]), 0.0);
        assert_eq!(overlap_score(&tags(&["  "]), &tags(&["x"])), 0.0);
    }

    #[test]
    fn overlap_is_measured_against_idea_side() {
        let idea = tags(&["Fitness", "Nutrition"]);
        let founder = tags(&[" fitness ", "cooking", "travel", "music"]);
        assert_eq!(overlap_score(&idea, &founder), 50.0);
        assert_eq!(overlap_score(&founder, &idea), 25.0);
    }

    #[test]
    fn duplicate_idea_entries_count_once() {
        let idea = tags(&["SaaS", "saas", "B2B"]);
        let founder = tags(&["saas"]);
        assert_eq!(overlap_score(&idea, &founder), 50.0);
    }

    #[test]
    fn contains_normalized_ignores_case_and_padding() {
        let archetypes = tags(&["Content Creator", "Agency"]);
        assert!(contains_normalized(&archetypes, "content creator "));
        assert!(!contains_normalized(&archetypes, ""));
        assert!(!contains_normalized(&archetypes, "marketplace"));
    }
}
