//! Playlist controller - playback state machine
//!
//! Decides which track is current and what happens at track boundaries.
//! Audio decoding and rendering belong to the host; the controller only
//! transitions [`PlaybackState`] and tells the host about it through
//! callbacks and the event queue.

use crate::{
    events::PlaylistEvent,
    shuffle::Shuffler,
    types::{PlaybackState, PlaylistOptions, RepeatMode, ShuffleStrategy},
};
use eptss_core::Track;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

/// Callback fired with the track that became (or stays) current
pub type TrackCallback = Box<dyn FnMut(&Track, usize)>;

/// Callback fired when playback runs off the end of the playlist
pub type PlaylistEndCallback = Box<dyn FnMut()>;

/// Playlist playback controller
///
/// Owns the session state for one read-only track list. Every operation is
/// synchronous and applies its whole transition before returning. Invalid
/// input (an out-of-range index) is ignored rather than reported.
pub struct PlaylistController {
    tracks: Vec<Track>,
    state: PlaybackState,
    auto_play_next: bool,

    shuffler: Shuffler,
    rng: StdRng,

    // Host callbacks (at most one per kind)
    on_track_change: Option<TrackCallback>,
    on_track_restart: Option<TrackCallback>,
    on_playlist_end: Option<PlaylistEndCallback>,

    // Event queue for UI synchronization
    pending_events: Vec<PlaylistEvent>,
}

impl PlaylistController {
    /// Create a controller over `tracks`
    ///
    /// Starts at index 0, paused, shuffle off, repeat off.
    pub fn new(tracks: Vec<Track>, options: PlaylistOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        tracing::debug!(
            tracks = tracks.len(),
            auto_play_next = options.auto_play_next,
            strategy = ?options.shuffle_strategy,
            "playlist controller created"
        );

        Self {
            tracks,
            state: PlaybackState::default(),
            auto_play_next: options.auto_play_next,
            shuffler: Shuffler::new(options.shuffle_strategy),
            rng,
            on_track_change: None,
            on_track_restart: None,
            on_playlist_end: None,
            pending_events: Vec::new(),
        }
    }

    /// Register the track-change callback
    #[must_use]
    pub fn on_track_change(mut self, callback: impl FnMut(&Track, usize) + 'static) -> Self {
        self.on_track_change = Some(Box::new(callback));
        self
    }

    /// Register a dedicated callback for repeat-one restarts
    ///
    /// Without it, a restart is reported through the track-change callback
    /// with the unchanged index.
    #[must_use]
    pub fn on_track_restart(mut self, callback: impl FnMut(&Track, usize) + 'static) -> Self {
        self.on_track_restart = Some(Box::new(callback));
        self
    }

    /// Register the end-of-playlist callback
    #[must_use]
    pub fn on_playlist_end(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_playlist_end = Some(Box::new(callback));
        self
    }

    // ===== Playback Control =====

    /// Make `index` the current track and start playing it
    ///
    /// Out-of-range indices are ignored.
    pub fn play_track(&mut self, index: usize) {
        if index >= self.tracks.len() {
            tracing::trace!(index, len = self.tracks.len(), "ignoring out-of-range index");
            return;
        }

        // A manual jump invalidates any retained shuffle order.
        self.shuffler.reset();
        self.select(index);
    }

    /// Skip to the next track according to shuffle and repeat
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        let len = self.tracks.len();
        let current = self.state.current_index;

        let next_index = if self.state.shuffle {
            self.shuffler.pick_next(current, len, &mut self.rng)
        } else {
            current + 1
        };

        if next_index < len {
            self.select(next_index);
            return;
        }

        if self.state.repeat == RepeatMode::All {
            tracing::debug!("end of playlist, wrapping around");
            self.select(0);
        } else {
            tracing::debug!(index = current, "end of playlist");
            self.apply_playing(false);
            self.pending_events.push(PlaylistEvent::PlaylistEnded);
            if let Some(callback) = self.on_playlist_end.as_mut() {
                callback();
            }
        }
    }

    /// Go to the previous track, wrapping from the first to the last
    ///
    /// Always linear and always resumes playback, regardless of shuffle and
    /// repeat.
    pub fn previous(&mut self) {
        if self.tracks.is_empty() {
            return;
        }

        let index = match self.state.current_index {
            0 => self.tracks.len() - 1,
            current => current - 1,
        };
        self.play_track(index);
    }

    /// React to the current track finishing on its own
    ///
    /// Repeat one restarts the track; otherwise auto-advance calls
    /// [`next`](Self::next), or playback stops on the current track.
    pub fn handle_track_ended(&mut self) {
        if self.state.repeat == RepeatMode::One {
            self.restart_current();
        } else if self.auto_play_next {
            self.next();
        } else {
            tracing::debug!(index = self.state.current_index, "track ended, not advancing");
            self.apply_playing(false);
        }
    }

    /// Flip shuffle on or off
    pub fn toggle_shuffle(&mut self) {
        self.state.shuffle = !self.state.shuffle;
        self.shuffler.reset();
        tracing::debug!(shuffle = self.state.shuffle, "shuffle toggled");
        self.pending_events.push(PlaylistEvent::ShuffleChanged {
            enabled: self.state.shuffle,
        });
    }

    /// Cycle repeat `none -> all -> one -> none`
    pub fn toggle_repeat(&mut self) {
        self.state.repeat = self.state.repeat.cycle();
        tracing::debug!(repeat = %self.state.repeat, "repeat cycled");
        self.pending_events.push(PlaylistEvent::RepeatChanged {
            mode: self.state.repeat,
        });
    }

    /// Set the play/pause flag directly
    ///
    /// For hosts that detect play/pause on their own, e.g. native media keys.
    pub fn set_is_playing(&mut self, playing: bool) {
        self.apply_playing(playing);
    }

    /// Flip the play/pause flag
    pub fn toggle_playing(&mut self) {
        self.apply_playing(!self.state.is_playing);
    }

    // ===== State Queries =====

    /// Snapshot of the session state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// The read-only track list
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Index of the current track
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// The current track, `None` for an empty playlist
    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.state.current_index)
    }

    /// Whether audio should be playing
    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Whether shuffle is on
    pub fn shuffle(&self) -> bool {
        self.state.shuffle
    }

    /// Current repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.state.repeat
    }

    /// Whether track-end auto-advances
    pub fn auto_play_next(&self) -> bool {
        self.auto_play_next
    }

    /// Shuffle algorithm in use
    pub fn shuffle_strategy(&self) -> ShuffleStrategy {
        self.shuffler.strategy()
    }

    /// Tracks after the current one in list order
    pub fn remaining(&self) -> usize {
        self.tracks
            .len()
            .saturating_sub(self.state.current_index + 1)
    }

    /// Whether next/previous/shuffle controls make sense (two or more tracks)
    pub fn can_navigate(&self) -> bool {
        self.tracks.len() > 1
    }

    // ===== Events =====

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<PlaylistEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Move to `index` and play it, keeping any retained shuffle order
    fn select(&mut self, index: usize) {
        let Some(track) = self.tracks.get(index) else {
            return;
        };

        let previous_index = self.state.current_index;
        self.state.current_index = index;
        tracing::debug!(index, track_id = %track.id, previous_index, "track changed");
        self.pending_events.push(PlaylistEvent::TrackChanged {
            index,
            track_id: track.id.clone(),
            previous_index,
        });
        self.apply_playing(true);

        if let (Some(callback), Some(track)) =
            (self.on_track_change.as_mut(), self.tracks.get(index))
        {
            callback(track, index);
        }
    }

    /// Replay the current track from the start (repeat one)
    fn restart_current(&mut self) {
        let index = self.state.current_index;
        let Some(track) = self.tracks.get(index) else {
            return;
        };

        tracing::debug!(index, track_id = %track.id, "restarting track");
        self.pending_events.push(PlaylistEvent::TrackRestarted {
            index,
            track_id: track.id.clone(),
        });
        self.apply_playing(true);

        let callback = match self.on_track_restart.as_mut() {
            Some(restart) => Some(restart),
            None => self.on_track_change.as_mut(),
        };
        if let (Some(callback), Some(track)) = (callback, self.tracks.get(index)) {
            callback(track, index);
        }
    }

    fn apply_playing(&mut self, playing: bool) {
        if self.state.is_playing == playing {
            return;
        }
        self.state.is_playing = playing;
        self.pending_events.push(PlaylistEvent::PlayingChanged {
            is_playing: playing,
        });
    }
}

impl fmt::Debug for PlaylistController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaylistController")
            .field("tracks", &self.tracks.len())
            .field("state", &self.state)
            .field("auto_play_next", &self.auto_play_next)
            .field("shuffle_strategy", &self.shuffler.strategy())
            .field("pending_events", &self.pending_events.len())
            .finish_non_exhaustive()
    }
}
