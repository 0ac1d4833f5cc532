/// Playlist header summary
use crate::types::Track;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Aggregate numbers shown above a track list
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaylistSummary {
    /// Number of tracks in the playlist
    pub track_count: usize,

    /// Number of tracks whose duration is known
    pub tracks_with_duration: usize,

    /// Sum of all known durations, in seconds
    pub total_duration_secs: f64,
}

impl PlaylistSummary {
    /// Summarize a track list
    pub fn from_tracks(tracks: &[Track]) -> Self {
        let known: Vec<f64> = tracks.iter().filter_map(Track::duration_secs).collect();

        Self {
            track_count: tracks.len(),
            tracks_with_duration: known.len(),
            total_duration_secs: known.iter().sum(),
        }
    }

    /// "1 track" or "N tracks"
    pub fn count_label(&self) -> String {
        if self.track_count == 1 {
            "1 track".to_string()
        } else {
            format!("{} tracks", self.track_count)
        }
    }

    /// Whether a total duration is worth displaying
    pub fn has_known_duration(&self) -> bool {
        self.tracks_with_duration > 0
    }

    /// Total known duration
    pub fn total_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.total_duration_secs).unwrap_or(Duration::MAX)
    }
}
