use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    #[default]
    Ready,
    Active,
    /// Declared for the board UI, no transition currently enters it.
    Paused,
    Complete,
}

impl RoundStatus {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Result of ending a round
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Play moved on to this one-based round.
    NextRound(RoundNumber),
    GameOver,
}

impl RoundOutcome {
    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub current_round: RoundNumber,
    pub score: u32,
    pub is_playing: bool,
    pub images: Vec<TriviaImage>,
    pub round_status: RoundStatus,
}

/// Lifecycle transitions. None of them reject a call made from an unexpected
/// status, such calls are logged and carried out anyway.
impl GameState {
    pub(crate) fn begin(&mut self) {
        if self.is_playing {
            log::warn!(
                "restarting game while round {} is in progress",
                self.current_round
            );
        }
        self.current_round = 1;
        self.score = 0;
        self.is_playing = true;
        self.round_status = RoundStatus::Ready;
        log::debug!("game started with {} images", self.images.len());
    }

    pub(crate) fn start_round(&mut self) {
        self.expect_status(RoundStatus::Ready, "start round");
        self.round_status = RoundStatus::Active;
        log::debug!("round {} active", self.current_round);
    }

    pub(crate) fn timeout_round(&mut self) {
        self.expect_status(RoundStatus::Active, "time out round");
        self.round_status = RoundStatus::Complete;
        log::debug!("round {} timed out", self.current_round);
    }

    pub(crate) fn end_round(&mut self, total_rounds: u32) -> RoundOutcome {
        if self.current_round < total_rounds {
            self.current_round += 1;
            self.round_status = RoundStatus::Ready;
            log::debug!("advanced to round {}/{}", self.current_round, total_rounds);
            RoundOutcome::NextRound(self.current_round)
        } else {
            self.end_game();
            RoundOutcome::GameOver
        }
    }

    pub(crate) fn end_game(&mut self) {
        self.is_playing = false;
        self.round_status = RoundStatus::Complete;
        log::debug!("game ended at round {}", self.current_round);
    }

    fn expect_status(&self, expected: RoundStatus, action: &str) {
        if self.round_status != expected {
            log::warn!(
                "{} from {:?} (expected {:?}), proceeding",
                action,
                self.round_status,
                expected
            );
        }
    }
}
