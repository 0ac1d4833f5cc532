/// Core error types for EPTSS
use crate::types::TrackId;
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for EPTSS
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A track was supplied without an identifier
    #[error("Track at position {position} has an empty id")]
    EmptyTrackId { position: usize },

    /// A track has nothing to play
    #[error("Track {id} has an empty source")]
    EmptySource { id: TrackId },

    /// Two tracks share an identifier
    #[error("Duplicate track id: {0}")]
    DuplicateTrackId(TrackId),
}
