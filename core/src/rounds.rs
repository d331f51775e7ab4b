use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of editing a round assignment
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AssignOutcome {
    NoChange,
    Changed,
}

impl AssignOutcome {
    /// Whether this outcome could have caused an update to the assignment
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Explicit mapping of images to rounds, index `i` holds round `i + 1`.
///
/// An empty assignment means none has been made yet, callers then fall back to
/// slicing the flat image list with [`slice_round`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundAssignment {
    rounds: Vec<Vec<TriviaImage>>,
}

impl RoundAssignment {
    /// Distributes `images` in order over `config.rounds` buckets of
    /// `config.pictures_per_round`. Runs out gracefully: trailing rounds may be
    /// partial or empty, images past the last bucket are left unassigned.
    pub fn sequential(config: &GameConfig, images: &[TriviaImage]) -> Self {
        let per_round = config.pictures_per_round as ImageCount;
        let mut rounds = Vec::new();
        let mut remaining = images;

        for _ in 0..config.rounds {
            let (head, tail) = remaining.split_at(per_round.min(remaining.len()));
            rounds.push(head.to_vec());
            remaining = tail;
        }

        Self { rounds }
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Number of round buckets, not images.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn rounds(&self) -> &[Vec<TriviaImage>] {
        &self.rounds
    }

    /// Images of the one-based `round`, `None` when no such bucket exists.
    pub fn round(&self, round: RoundNumber) -> Option<&[TriviaImage]> {
        round_index(round)
            .and_then(|index| self.rounds.get(index))
            .map(Vec::as_slice)
    }

    /// Replaces bucket `index` wholesale. Out of bounds indices are ignored.
    pub fn replace(&mut self, index: usize, images: Vec<TriviaImage>) -> AssignOutcome {
        match self.rounds.get_mut(index) {
            Some(bucket) => {
                *bucket = images;
                AssignOutcome::Changed
            }
            None => {
                log::debug!(
                    "ignoring assignment for round index {} of {}",
                    index,
                    self.rounds.len()
                );
                AssignOutcome::NoChange
            }
        }
    }

    pub fn clear(&mut self) {
        self.rounds.clear();
    }

    pub fn iter_images(&self) -> impl Iterator<Item = &TriviaImage> {
        self.rounds.iter().flatten()
    }
}

/// Automatic slicing used when no explicit assignment exists: the one-based
/// `round` takes the `pictures_per_round` images at its position, clamped to
/// what is available.
pub fn slice_round(
    images: &[TriviaImage],
    round: RoundNumber,
    pictures_per_round: u32,
) -> &[TriviaImage] {
    let Some(index) = round_index(round) else {
        return &[];
    };
    let per_round = pictures_per_round as ImageCount;
    let start = index.saturating_mul(per_round).min(images.len());
    let end = start.saturating_add(per_round).min(images.len());
    &images[start..end]
}
