//! Per-track listening progress
//!
//! The host reports elapsed time for the current track; progress is kept as
//! a ratio in `[0, 1]` per track id so a track list can draw partial bars.

use eptss_core::{Track, TrackId};
use std::collections::HashMap;

/// Progress ratios keyed by track id
#[derive(Debug, Clone, Default)]
pub struct TrackProgress {
    ratios: HashMap<TrackId, f64>,
}

impl TrackProgress {
    /// Create an empty progress map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `elapsed_secs` for `track` and return the stored ratio
    ///
    /// Tracks without a positive known duration record 0.
    pub fn record(&mut self, track: &Track, elapsed_secs: f64) -> f64 {
        let ratio = match track.duration_secs() {
            Some(duration) if duration > 0.0 && elapsed_secs.is_finite() => {
                (elapsed_secs / duration).clamp(0.0, 1.0)
            }
            _ => 0.0,
        };

        self.ratios.insert(track.id.clone(), ratio);
        ratio
    }

    /// Stored ratio for `id`
    pub fn get(&self, id: &TrackId) -> Option<f64> {
        self.ratios.get(id).copied()
    }

    /// Forget all progress
    pub fn clear(&mut self) {
        self.ratios.clear();
    }
}
