//! Core types for playlist playback

use serde::{Deserialize, Serialize};
use std::fmt;

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop when the playlist ends
    #[default]
    #[serde(rename = "none")]
    Off,

    /// Loop the whole playlist
    All,

    /// Replay the current track indefinitely
    One,
}

impl RepeatMode {
    /// The mode that follows this one: `none -> all -> one -> none`
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }

    /// Lowercase name as used in manifests and status output
    pub fn as_str(self) -> &'static str {
        match self {
            RepeatMode::Off => "none",
            RepeatMode::All => "all",
            RepeatMode::One => "one",
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How `next()` picks a track while shuffle is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleStrategy {
    /// Draw a uniformly random index, redrawing while it equals the current one
    #[default]
    Random,

    /// Walk a retained random permutation of the other tracks
    Order,
}

/// Mutable session state of a playlist
///
/// Created fresh for every controller: index 0, paused, no shuffle,
/// repeat off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Index of the current track (meaningless for an empty playlist)
    pub current_index: usize,

    /// Whether audio should be playing
    pub is_playing: bool,

    /// Whether `next()` picks a random track
    pub shuffle: bool,

    /// End-of-track / end-of-list policy
    pub repeat: RepeatMode,
}

/// Construction-time options for a playlist controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistOptions {
    /// Advance to the next track when the current one ends (default: true)
    pub auto_play_next: bool,

    /// Shuffle algorithm (default: Random)
    pub shuffle_strategy: ShuffleStrategy,

    /// Seed for the shuffle RNG; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for PlaylistOptions {
    fn default() -> Self {
        Self {
            auto_play_next: true,
            shuffle_strategy: ShuffleStrategy::Random,
            seed: None,
        }
    }
}
