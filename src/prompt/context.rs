use crate::error::Result;
use crate::types::idea::{IdeaAnalysis, IdeaLite};
use crate::types::profile::FounderProfile;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// The rows a generated artifact was compiled from. Its hash is stored next to the artifact so a
/// later run can tell whether the inputs moved on.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ContextSnapshot<'a> {
    pub profile: Option<&'a FounderProfile>,
    pub idea: Option<&'a IdeaLite>,
    pub analysis: Option<&'a IdeaAnalysis>,
}

impl ContextSnapshot<'_> {
    /// SHA-256 hex digest of the snapshot as JSON with object keys sorted.
    pub fn content_hash(&self) -> Result<String> {
        // Round-tripping through `Value` sorts object keys.
        let canonical = serde_json::to_value(self)?;
        let bytes = serde_json::to_vec(&canonical)?;
        Ok(sha256_hex(&bytes))
    }
}

pub fn is_stale(stored_hash: Option<&str>, current_hash: &str) -> bool {
    stored_hash.map_or(true, |stored| stored != current_hash)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_and_sensitive_to_changes() {
        let profile = FounderProfile {
            passions_text: Some("woodworking".to_string()),
            ..FounderProfile::default()
        };
        let idea = IdeaLite::new("idea-9", "Custom furniture");

        let snapshot = ContextSnapshot {
            profile: Some(&profile),
            idea: Some(&idea),
            analysis: None,
        };
        let first = snapshot.content_hash().expect("hash should compute");
        let second = snapshot.content_hash().expect("hash should compute");
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);

        let edited = IdeaLite {
            summary: Some("Now with CNC".to_string()),
            ..idea.clone()
        };
        let changed = ContextSnapshot {
            idea: Some(&edited),
            ..snapshot
        }
        .content_hash()
        .expect("hash should compute");
        assert_ne!(first, changed);
    }

    #[test]
    fn staleness_requires_matching_stored_hash() {
        assert!(is_stale(None, "abc"));
        assert!(is_stale(Some("abd"), "abc"));
        assert!(!is_stale(Some("abc"), "abc"));
    }
}
