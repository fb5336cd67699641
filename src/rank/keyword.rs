use crate::score::mean_score;
use crate::types::idea::IdeaLite;
use crate::types::profile::FounderProfile;
use crate::types::scoring::Score;

pub const PASSION_MATCH_SCORE: Score = 80.0;
pub const SKILL_MATCH_SCORE: Score = 70.0;
/// Score of a keyword term that found no match.
pub const KEYWORD_BASELINE_SCORE: Score = 50.0;

const NEEDLE_SEPARATORS: [char; 3] = [',', ';', '\n'];

/// True when any comma, semicolon or newline separated token of `needle_list` occurs in
/// `haystack`, ignoring case.
pub fn includes_any(haystack: &str, needle_list: &str) -> bool {
    let haystack = haystack.to_lowercase();
    needle_list
        .split(NEEDLE_SEPARATORS)
        .map(|needle| needle.trim().to_lowercase())
        .filter(|needle| !needle.is_empty())
        .any(|needle| haystack.contains(&needle))
}

/// Keyword fit used by ranking. Looks for the founder's free-text passions and skills in the
/// idea's title and summary and awards flat scores on a hit. Unrelated to the set-overlap
/// breakdown in `fit`.
pub fn compute_fit_score(idea: &IdeaLite, profile: &FounderProfile) -> Score {
    let haystack = format!("{} {}", idea.title, idea.summary.as_deref().unwrap_or_default());

    let passion = match profile.passions_text.as_deref() {
        Some(passions) if includes_any(&haystack, passions) => PASSION_MATCH_SCORE,
        _ => KEYWORD_BASELINE_SCORE,
    };
    let skills = match profile.skills_text.as_deref() {
        Some(skills) if includes_any(&haystack, skills) => SKILL_MATCH_SCORE,
        _ => KEYWORD_BASELINE_SCORE,
    };

    mean_score(&[passion, skills])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(title: &str, summary: &str) -> IdeaLite {
        IdeaLite {
            summary: Some(summary.to_string()),
            ..IdeaLite::new("idea-1", title)
        }
    }

    fn founder(passions: &str, skills: &str) -> FounderProfile {
        FounderProfile {
            passions_text: Some(passions.to_string()),
            skills_text: Some(skills.to_string()),
            ..FounderProfile::default()
        }
    }

    #[test]
    fn includes_any_splits_on_all_separators() {
        assert!(includes_any("Meal prep for Busy Parents", "travel; busy parents"));
        assert!(includes_any("podcast studio", "music,\n Podcast "));
        assert!(!includes_any("podcast studio", "travel, cooking"));
        assert!(!includes_any("podcast studio", " , ;\n"));
        assert!(!includes_any("", "podcast"));
    }

    #[test]
    fn keyword_fit_awards_flat_scores() {
        let idea = idea("Trail running club", "Weekly coached runs with video analysis");
        assert_eq!(compute_fit_score(&idea, &founder("running", "video")), 75.0);
        assert_eq!(compute_fit_score(&idea, &founder("running", "accounting")), 65.0);
        assert_eq!(compute_fit_score(&idea, &founder("chess", "video")), 60.0);
        assert_eq!(compute_fit_score(&idea, &founder("chess", "accounting")), 50.0);
    }

    #[test]
    fn keyword_fit_without_profile_text_is_baseline() {
        let idea = idea("Trail running club", "");
        assert_eq!(
            compute_fit_score(&idea, &FounderProfile::default()),
            KEYWORD_BASELINE_SCORE
        );
    }
}
