//! Liked tracks

use eptss_core::TrackId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Set of track ids the listener has liked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LikedTracks {
    ids: HashSet<TrackId>,
}

impl LikedTracks {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the liked state of `id`, returning the new state
    pub fn toggle(&mut self, id: &TrackId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Whether `id` is liked
    pub fn is_liked(&self, id: &TrackId) -> bool {
        self.ids.contains(id)
    }

    /// Number of liked tracks
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is liked
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Liked ids in sorted order
    pub fn sorted(&self) -> Vec<&TrackId> {
        let mut ids: Vec<&TrackId> = self.ids.iter().collect();
        ids.sort();
        ids
    }
}

impl FromIterator<TrackId> for LikedTracks {
    fn from_iter<I: IntoIterator<Item = TrackId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let mut likes = LikedTracks::new();
        let id = TrackId::new("a");

        assert!(likes.toggle(&id));
        assert!(likes.is_liked(&id));
        assert_eq!(likes.len(), 1);

        assert!(!likes.toggle(&id));
        assert!(!likes.is_liked(&id));
        assert!(likes.is_empty());
    }

    #[test]
    fn sorted_listing() {
        let likes: LikedTracks = ["c", "a", "b"].into_iter().map(TrackId::new).collect();
        let ids: Vec<&str> = likes.sorted().into_iter().map(TrackId::as_str).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
