//! EPTSS - Playlist Playback
//!
//! Platform-agnostic playlist controller for the EPTSS player.
//!
//! This crate provides:
//! - Track selection (play by index, next, previous)
//! - Shuffle (rejection sampling or a retained random order)
//! - Repeat modes (none, all, one)
//! - Auto-advance when a track ends
//! - Change callbacks and a drainable event queue
//! - Liked tracks and per-track progress bookkeeping
//!
//! # Architecture
//!
//! `eptss-playlist` never touches audio. The host loads and plays the
//! current track's source, tells the controller when a track ends or the
//! user presses a control, and reacts to the callbacks / events.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use eptss_core::Track;
//! use eptss_playlist::{PlaylistController, PlaylistOptions};
//!
//! let tracks = vec![
//!     Track::new("a", "https://cdn.example/a.mp3", "First Cover"),
//!     Track::new("b", "https://cdn.example/b.mp3", "Second Cover"),
//! ];
//!
//! let mut controller = PlaylistController::new(tracks, PlaylistOptions::default())
//!     .on_track_change(|track, index| println!("now playing #{index}: {}", track.title))
//!     .on_playlist_end(|| println!("done"));
//!
//! controller.play_track(0);
//! controller.handle_track_ended();
//! assert_eq!(controller.current_index(), 1);
//!
//! controller.handle_track_ended();
//! assert!(!controller.is_playing());
//! ```
//!
//! # Example: Shuffle and Repeat
//!
//! ```rust
//! use eptss_core::Track;
//! use eptss_playlist::{PlaylistController, PlaylistOptions, RepeatMode, ShuffleStrategy};
//!
//! let tracks: Vec<Track> = (0..4)
//!     .map(|i| Track::new(format!("t{i}"), format!("/t{i}.mp3"), format!("Track {i}")))
//!     .collect();
//! let options = PlaylistOptions {
//!     shuffle_strategy: ShuffleStrategy::Order,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//!
//! let mut controller = PlaylistController::new(tracks, options);
//! controller.toggle_shuffle();
//! controller.toggle_repeat();
//! assert_eq!(controller.repeat(), RepeatMode::All);
//!
//! controller.next();
//! assert_ne!(controller.current_index(), 0);
//! ```

mod controller;
pub mod events;
mod likes;
mod progress;
pub mod shuffle;
pub mod types;

// Public exports
pub use controller::{PlaylistController, PlaylistEndCallback, TrackCallback};
pub use events::PlaylistEvent;
pub use likes::LikedTracks;
pub use progress::TrackProgress;
pub use types::{PlaybackState, PlaylistOptions, RepeatMode, ShuffleStrategy};
