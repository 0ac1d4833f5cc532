mod ids;
mod track;

pub use ids::TrackId;
pub use track::{validate_tracks, Track};
