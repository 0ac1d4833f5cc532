//! Playlist events
//!
//! Every observable transition of the controller is recorded as an event so a
//! host can sync its UI by draining the queue after each call, independently
//! of the callbacks.

use crate::types::RepeatMode;
use eptss_core::TrackId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Events emitted by the playlist controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaylistEvent {
    /// A track became current (also emitted when re-selecting the same index)
    TrackChanged {
        /// Index of the new current track
        index: usize,
        /// ID of the new current track
        track_id: TrackId,
        /// Index that was current before the change
        previous_index: usize,
    },

    /// The current track should start over from zero (repeat one)
    TrackRestarted {
        /// Index of the restarted track
        index: usize,
        /// ID of the restarted track
        track_id: TrackId,
    },

    /// The play/pause flag changed
    PlayingChanged {
        /// New value of the flag
        is_playing: bool,
    },

    /// `next()` ran past the last track without repeat-all
    PlaylistEnded,

    /// Shuffle was toggled
    ShuffleChanged {
        /// New value of the flag
        enabled: bool,
    },

    /// Repeat mode was cycled
    RepeatChanged {
        /// New repeat mode
        mode: RepeatMode,
    },
}

impl fmt::Display for PlaylistEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaylistEvent::TrackChanged {
                index,
                track_id,
                previous_index,
            } => write!(f, "track-changed {} {} (from {})", index, track_id, previous_index),
            PlaylistEvent::TrackRestarted { index, track_id } => {
                write!(f, "track-restarted {} {}", index, track_id)
            }
            PlaylistEvent::PlayingChanged { is_playing } => {
                let label = if *is_playing { "playing" } else { "paused" };
                write!(f, "{}", label)
            }
            PlaylistEvent::PlaylistEnded => write!(f, "playlist-ended"),
            PlaylistEvent::ShuffleChanged { enabled } => {
                write!(f, "shuffle {}", if *enabled { "on" } else { "off" })
            }
            PlaylistEvent::RepeatChanged { mode } => write!(f, "repeat {}", mode),
        }
    }
}
