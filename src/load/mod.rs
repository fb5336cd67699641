pub mod filesystem;

use crate::error::{FitError, Result};
use crate::types::idea::{IdeaAnalysis, IdeaDraft, IdeaLite, IdeaShape};
use crate::types::profile::FounderProfile;
use filesystem::list_json_files;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

pub fn load_profile(path: &Path) -> Result<FounderProfile> {
    read_document(path)
}

pub fn load_idea_shape(path: &Path) -> Result<IdeaShape> {
    read_document(path)
}

pub fn load_idea(path: &Path) -> Result<IdeaLite> {
    read_document(path)
}

pub fn load_draft(path: &Path) -> Result<IdeaDraft> {
    read_document(path)
}

pub fn load_analysis(path: &Path) -> Result<IdeaAnalysis> {
    read_document(path)
}

/// Loads ideas from a JSON file holding one idea or an array of ideas, or from every `*.json`
/// file under a directory. In directory mode unreadable files are skipped with a warning.
pub fn load_ideas(path: &Path) -> Result<Vec<IdeaLite>> {
    if !path.exists() {
        return Err(FitError::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return read_idea_file(path);
    }

    let mut ideas = Vec::new();
    for file in list_json_files(path) {
        match read_idea_file(&file) {
            Ok(mut loaded) => ideas.append(&mut loaded),
            Err(error) => warn!(file = %file.display(), %error, "skipping idea document"),
        }
    }
    info!(count = ideas.len(), dir = %path.display(), "loaded ideas");
    Ok(ideas)
}

fn read_idea_file(path: &Path) -> Result<Vec<IdeaLite>> {
    match read_document::<Value>(path)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| parse_value(path, item))
            .collect(),
        item => Ok(vec![parse_value(path, item)?]),
    }
}

fn parse_value<T: DeserializeOwned>(path: &Path, value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| FitError::InvalidDocument(format!("{}: {}", path.display(), e)))
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(FitError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| FitError::InvalidDocument(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_ideas_accepts_object_or_array_files() {
        let dir = TempDir::new().expect("temp dir should be created");
        let single = dir.path().join("single.json");
        let many = dir.path().join("many.json");
        fs::write(&single, r#"{"id": "1", "title": "Solo"}"#).expect("single should write");
        fs::write(
            &many,
            r#"[{"id": "2", "title": "First"}, {"id": "3", "title": "Second"}]"#,
        )
        .expect("many should write");

        assert_eq!(load_ideas(&single).expect("single should load").len(), 1);
        assert_eq!(load_ideas(&many).expect("array should load").len(), 2);
    }

    #[test]
    fn load_ideas_from_directory_skips_broken_files() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("a.json"), r#"{"id": "a", "title": "A"}"#).expect("a write");
        fs::write(dir.path().join("b.json"), r#"{"title": "missing id"}"#).expect("b write");
        fs::write(dir.path().join("c.json"), "{not json").expect("c write");

        let ideas = load_ideas(dir.path()).expect("directory should load");
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].id, "a");
    }

    #[test]
    fn single_file_errors_propagate() {
        let dir = TempDir::new().expect("temp dir should be created");
        let broken = dir.path().join("broken.json");
        fs::write(&broken, r#"[{"id": "1"}]"#).expect("broken should write");

        assert!(matches!(load_ideas(&broken), Err(FitError::InvalidDocument(_))));
        assert!(matches!(
            load_ideas(&dir.path().join("missing.json")),
            Err(FitError::PathNotFound(_))
        ));
    }

    #[test]
    fn load_profile_reads_camel_case_document() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("profile.json");
        fs::write(&path, r#"{"hoursPerWeek": 12, "skillTags": ["sales"]}"#)
            .expect("profile should write");

        let profile = load_profile(&path).expect("profile should load");
        assert_eq!(profile.hours_per_week, Some(12.0));
        assert_eq!(profile.skill_tags, vec!["sales".to_string()]);
    }
}
