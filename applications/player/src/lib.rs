//! Headless player for EPTSS round playlists
//!
//! Loads a playlist manifest, builds a [`eptss_playlist::PlaylistController`]
//! from the player configuration, and drives it from a line-oriented command
//! script. Audio output is left to the host; this crate only reports what
//! should be playing.

pub mod command;
pub mod config;
pub mod error;
pub mod manifest;
pub mod session;

pub use command::Command;
pub use config::{LoggingSettings, PlaybackSettings, PlayerConfig};
pub use error::{PlayerError, Result};
pub use manifest::PlaylistManifest;
pub use session::Session;
