//! EPTSS Core
//!
//! Platform-agnostic domain types shared by the playlist controller and the
//! headless player.
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackId`
//! - **Validation**: track-list checks applied when a playlist is loaded
//! - **Summaries**: track counts and total duration for a playlist header
//! - **Formatting**: `m:ss` / `h:mm:ss` and short (`3m 45s`) durations
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use eptss_core::{format_duration, PlaylistSummary, Track};
//!
//! let tracks = vec![
//!     Track::new("a", "https://cdn.example/a.mp3", "First Cover").with_duration_secs(215.0),
//!     Track::new("b", "https://cdn.example/b.mp3", "Second Cover"),
//! ];
//!
//! let summary = PlaylistSummary::from_tracks(&tracks);
//! assert_eq!(summary.count_label(), "2 tracks");
//! assert_eq!(format_duration(summary.total_duration_secs), "3:35");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod format;
pub mod summary;
pub mod types;

pub use error::{CoreError, Result};
pub use format::{format_duration, format_duration_short};
pub use summary::PlaylistSummary;
pub use types::{validate_tracks, Track, TrackId};
