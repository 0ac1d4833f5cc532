//! Shuffle selection
//!
//! Picks the next index while shuffle is on. Both strategies guarantee the
//! pick is in range and, for playlists of two or more tracks, never the
//! current index.

use crate::types::ShuffleStrategy;
use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform random pick that never returns `current`
///
/// Rejection sampling: redraw while the draw equals `current`. Playlists of
/// zero or one track always yield 0.
pub fn pick_random<R: Rng + ?Sized>(current: usize, len: usize, rng: &mut R) -> usize {
    if len <= 1 {
        return 0;
    }

    loop {
        let candidate = rng.gen_range(0..len);
        if candidate != current {
            return candidate;
        }
    }
}

/// Random permutation of every index except `current`
pub fn shuffle_order<R: Rng + ?Sized>(current: usize, len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).filter(|&i| i != current).collect();
    order.shuffle(rng);
    order
}

/// Shuffle state owned by a controller
#[derive(Debug, Clone)]
pub(crate) struct Shuffler {
    strategy: ShuffleStrategy,

    /// Remaining permutation for `ShuffleStrategy::Order` (next pick = back)
    order: Vec<usize>,
}

impl Shuffler {
    pub(crate) fn new(strategy: ShuffleStrategy) -> Self {
        Self {
            strategy,
            order: Vec::new(),
        }
    }

    pub(crate) fn strategy(&self) -> ShuffleStrategy {
        self.strategy
    }

    /// Forget the retained permutation
    pub(crate) fn reset(&mut self) {
        self.order.clear();
    }

    /// Choose the index `next()` should move to
    pub(crate) fn pick_next<R: Rng + ?Sized>(
        &mut self,
        current: usize,
        len: usize,
        rng: &mut R,
    ) -> usize {
        if len <= 1 {
            return 0;
        }

        match self.strategy {
            ShuffleStrategy::Random => pick_random(current, len, rng),
            ShuffleStrategy::Order => loop {
                match self.order.pop() {
                    Some(index) if index != current && index < len => return index,
                    Some(_) => continue,
                    None => self.order = shuffle_order(current, len, rng),
                }
            },
        }
    }
}
