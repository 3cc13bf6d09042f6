use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::{dart::Multiplier, errors::GameError};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum StartingScore {
    #[strum(serialize = "301")]
    ThreeOhOne,
    #[default]
    #[strum(serialize = "501")]
    FiveOhOne,
    #[strum(serialize = "701")]
    SevenOhOne,
}

impl StartingScore {
    pub fn points(self) -> u32 {
        match self {
            StartingScore::ThreeOhOne => 301,
            StartingScore::FiveOhOne => 501,
            StartingScore::SevenOhOne => 701,
        }
    }
}

impl TryFrom<u32> for StartingScore {
    type Error = GameError;

    fn try_from(points: u32) -> Result<Self, Self::Error> {
        match points {
            301 => Ok(StartingScore::ThreeOhOne),
            501 => Ok(StartingScore::FiveOhOne),
            701 => Ok(StartingScore::SevenOhOne),
            other => Err(GameError::InvalidStartingScore(other)),
        }
    }
}

impl From<StartingScore> for u32 {
    fn from(score: StartingScore) -> Self {
        score.points()
    }
}

/// Rule for opening (in) or closing (out) a leg.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CheckMode {
    /// Any scoring dart
    #[default]
    Standard,
    /// Doubles only
    Double,
    /// Doubles or trebles
    Master,
}

impl CheckMode {
    pub fn permits(self, multiplier: Multiplier) -> bool {
        match self {
            CheckMode::Standard => true,
            CheckMode::Double => multiplier == Multiplier::Double,
            CheckMode::Master => matches!(multiplier, Multiplier::Double | Multiplier::Triple),
        }
    }
}

/// Rules for one x01 match. Fixed for the lifetime of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    starting_score: StartingScore,
    legs_per_set: u32,
    sets_to_win: u32,
    in_mode: CheckMode,
    out_mode: CheckMode,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_score: StartingScore::FiveOhOne,
            legs_per_set: 2,
            sets_to_win: 1,
            in_mode: CheckMode::Standard,
            out_mode: CheckMode::Standard,
        }
    }
}

impl MatchConfig {
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::default()
    }

    pub fn starting_score(&self) -> StartingScore {
        self.starting_score
    }

    pub fn legs_per_set(&self) -> u32 {
        self.legs_per_set
    }

    pub fn sets_to_win(&self) -> u32 {
        self.sets_to_win
    }

    pub fn in_mode(&self) -> CheckMode {
        self.in_mode
    }

    pub fn out_mode(&self) -> CheckMode {
        self.out_mode
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchConfigBuilder {
    config: MatchConfig,
}

impl MatchConfigBuilder {
    pub fn starting_score(mut self, starting_score: StartingScore) -> Self {
        self.config.starting_score = starting_score;
        self
    }

    pub fn legs_per_set(mut self, legs: u32) -> Self {
        self.config.legs_per_set = legs;
        self
    }

    pub fn sets_to_win(mut self, sets: u32) -> Self {
        self.config.sets_to_win = sets;
        self
    }

    pub fn in_mode(mut self, mode: CheckMode) -> Self {
        self.config.in_mode = mode;
        self
    }

    pub fn out_mode(mut self, mode: CheckMode) -> Self {
        self.config.out_mode = mode;
        self
    }

    pub fn build(self) -> Result<MatchConfig, GameError> {
        if self.config.legs_per_set == 0 {
            return Err(GameError::InvalidLegsPerSet);
        }
        if self.config.sets_to_win == 0 {
            return Err(GameError::InvalidSetsToWin);
        }
        Ok(self.config)
    }
}
