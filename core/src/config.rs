use serde::{Deserialize, Serialize};

use crate::ImageCount;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Christmas,
}

/// Tunable parameters of a game.
///
/// No validation happens on construction or merge, a config with zero rounds is
/// representable and simply produces an empty game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub rounds: u32,
    pub pictures_per_round: u32,
    /// Seconds available to guess in each round.
    pub time_per_round: u32,
    pub theme: Theme,
}

impl GameConfig {
    pub const DEFAULT_ROUNDS: u32 = 3;
    pub const DEFAULT_PICTURES_PER_ROUND: u32 = 30;
    pub const DEFAULT_TIME_PER_ROUND: u32 = 600;

    pub const fn new(rounds: u32, pictures_per_round: u32, time_per_round: u32) -> Self {
        Self {
            name: None,
            rounds,
            pictures_per_round,
            time_per_round,
            theme: Theme::Default,
        }
    }

    pub const fn total_images_needed(&self) -> ImageCount {
        (self.rounds as ImageCount).saturating_mul(self.pictures_per_round as ImageCount)
    }

    pub fn merge(&mut self, patch: ConfigPatch) {
        let ConfigPatch {
            name,
            rounds,
            pictures_per_round,
            time_per_round,
            theme,
        } = patch;

        if name.is_some() {
            self.name = name;
        }
        if let Some(rounds) = rounds {
            self.rounds = rounds;
        }
        if let Some(pictures_per_round) = pictures_per_round {
            self.pictures_per_round = pictures_per_round;
        }
        if let Some(time_per_round) = time_per_round {
            self.time_per_round = time_per_round;
        }
        if let Some(theme) = theme {
            self.theme = theme;
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_ROUNDS,
            Self::DEFAULT_PICTURES_PER_ROUND,
            Self::DEFAULT_TIME_PER_ROUND,
        )
    }
}

/// Partial update for a [`GameConfig`], absent fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigPatch {
    pub name: Option<String>,
    pub rounds: Option<u32>,
    pub pictures_per_round: Option<u32>,
    pub time_per_round: Option<u32>,
    pub theme: Option<Theme>,
}

impl ConfigPatch {
    pub fn rounds(mut self, rounds: u32) -> Self {
        self.rounds = Some(rounds);
        self
    }

    pub fn pictures_per_round(mut self, pictures_per_round: u32) -> Self {
        self.pictures_per_round = Some(pictures_per_round);
        self
    }

    pub fn time_per_round(mut self, time_per_round: u32) -> Self {
        self.time_per_round = Some(time_per_round);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
