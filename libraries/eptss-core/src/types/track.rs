/// Track domain type
use crate::error::{CoreError, Result};
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// A playable audio item
///
/// Tracks are read-only for the lifetime of a playlist session: the
/// controller only ever changes which one is current.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Stable unique identifier
    pub id: TrackId,

    /// Locator for the audio bytes (URL or path)
    pub source: String,

    /// Display name
    pub title: String,

    /// Artist name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Track duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Cover art locator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_art: Option<String>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(
        id: impl Into<TrackId>,
        source: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            title: title.into(),
            artist: None,
            duration: None,
            cover_art: None,
        }
    }

    /// Set the artist name
    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Set the duration in seconds
    #[must_use]
    pub fn with_duration_secs(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Set the cover art locator
    #[must_use]
    pub fn with_cover_art(mut self, cover_art: impl Into<String>) -> Self {
        self.cover_art = Some(cover_art.into());
        self
    }

    /// Known duration in seconds, ignoring non-finite or negative values
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration.filter(|d| d.is_finite() && *d >= 0.0)
    }

    /// Get the track duration as a Duration
    pub fn duration(&self) -> Option<Duration> {
        self.duration_secs()
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }
}

/// Check that a track list can back a playlist session
///
/// Ids must be non-empty and unique, and every track needs a source.
pub fn validate_tracks(tracks: &[Track]) -> Result<()> {
    let mut seen = HashSet::with_capacity(tracks.len());

    for (position, track) in tracks.iter().enumerate() {
        if track.id.is_empty() {
            return Err(CoreError::EmptyTrackId { position });
        }
        if track.source.trim().is_empty() {
            return Err(CoreError::EmptySource {
                id: track.id.clone(),
            });
        }
        if !seen.insert(&track.id) {
            return Err(CoreError::DuplicateTrackId(track.id.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str) -> Track {
        Track::new(id, format!("https://cdn.example/{}.mp3", id), format!("Song {}", id))
    }

    #[test]
    fn track_creation() {
        let track = Track::new("t1", "/covers/t1.mp3", "Test Song");
        assert_eq!(track.id.as_str(), "t1");
        assert_eq!(track.title, "Test Song");
        assert!(track.artist.is_none());
        assert!(track.duration().is_none());
    }

    #[test]
    fn track_duration_conversion() {
        let track = sample("a").with_duration_secs(180.5);
        assert_eq!(track.duration(), Some(Duration::from_millis(180_500)));

        let bogus = sample("b").with_duration_secs(f64::NAN);
        assert!(bogus.duration().is_none());

        let negative = sample("c").with_duration_secs(-3.0);
        assert!(negative.duration_secs().is_none());
    }

    #[test]
    fn deserializes_camel_case_manifest_entry() {
        let json = r#"{
            "id": "cover-1",
            "source": "https://cdn.example/cover-1.mp3",
            "title": "Harvest Moon",
            "artist": "Round 12",
            "duration": 201.3,
            "coverArt": "https://cdn.example/cover-1.jpg"
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.id, TrackId::new("cover-1"));
        assert_eq!(track.artist.as_deref(), Some("Round 12"));
        assert_eq!(track.cover_art.as_deref(), Some("https://cdn.example/cover-1.jpg"));
        assert_eq!(track.duration_secs(), Some(201.3));
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let json = r#"{"id": "x", "source": "/x.mp3", "title": "X"}"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert!(track.artist.is_none());
        assert!(track.cover_art.is_none());
        assert!(track.duration.is_none());
    }

    #[test]
    fn validate_accepts_unique_tracks() {
        let tracks = vec![sample("a"), sample("b"), sample("c")];
        assert!(validate_tracks(&tracks).is_ok());
        assert!(validate_tracks(&[]).is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let tracks = vec![sample("a"), sample("b"), sample("a")];
        assert_eq!(
            validate_tracks(&tracks),
            Err(CoreError::DuplicateTrackId(TrackId::new("a")))
        );
    }

    #[test]
    fn validate_rejects_blank_id_and_source() {
        let tracks = vec![sample("a"), Track::new(" ", "/b.mp3", "B")];
        assert_eq!(
            validate_tracks(&tracks),
            Err(CoreError::EmptyTrackId { position: 1 })
        );

        let tracks = vec![Track::new("a", "", "A")];
        assert_eq!(
            validate_tracks(&tracks),
            Err(CoreError::EmptySource {
                id: TrackId::new("a")
            })
        );
    }
}
