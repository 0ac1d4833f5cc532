//! Playlist manifest files
//!
//! A manifest is a JSON document with an optional title and description and
//! the ordered track list:
//!
//! ```json
//! {
//!   "title": "Round 12",
//!   "tracks": [
//!     { "id": "c1", "source": "https://cdn.example/c1.mp3", "title": "Cover 1", "duration": 201.5 }
//!   ]
//! }
//! ```

use crate::error::Result;
use eptss_core::{validate_tracks, PlaylistSummary, Track};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub tracks: Vec<Track>,
}

impl PlaylistManifest {
    /// Read and validate a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let manifest = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            tracks = manifest.tracks.len(),
            "manifest loaded"
        );
        Ok(manifest)
    }

    /// Parse and validate a manifest document
    pub fn from_json(raw: &str) -> Result<Self> {
        let manifest: PlaylistManifest = serde_json::from_str(raw)?;
        validate_tracks(&manifest.tracks)?;
        Ok(manifest)
    }

    pub fn summary(&self) -> PlaylistSummary {
        PlaylistSummary::from_tracks(&self.tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlayerError;

    #[test]
    fn parses_minimal_manifest() {
        let manifest =
            PlaylistManifest::from_json(r#"{"tracks": [{"id": "a", "source": "/a.mp3", "title": "A"}]}"#)
                .unwrap();
        assert!(manifest.title.is_none());
        assert_eq!(manifest.tracks.len(), 1);
        assert_eq!(manifest.summary().track_count, 1);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let raw = r#"{"tracks": [
            {"id": "a", "source": "/a.mp3", "title": "A"},
            {"id": "a", "source": "/b.mp3", "title": "B"}
        ]}"#;
        assert!(matches!(
            PlaylistManifest::from_json(raw),
            Err(PlayerError::Core(_))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            PlaylistManifest::from_json("{\"tracks\": [}"),
            Err(PlayerError::Manifest(_))
        ));
    }
}
