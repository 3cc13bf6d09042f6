use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::errors::GameError;

pub const BULL: u32 = 25;
pub const MAX_SEGMENT: u32 = 20;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Multiplier {
    #[default]
    Single = 1,
    Double = 2,
    Triple = 3,
}

impl Multiplier {
    pub fn factor(self) -> u32 {
        self as u32
    }
}

/// A single dart as entered by the caller: the segment hit plus the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dart {
    value: u32,
    multiplier: Multiplier,
}

impl Dart {
    /// Build a dart from a face value (0-20 or 25) and its ring.
    /// There is no triple bull on a board, so `25` with `Triple` is refused.
    pub fn new(value: u32, multiplier: Multiplier) -> Result<Self, GameError> {
        let on_board = value <= MAX_SEGMENT || value == BULL;
        if !on_board || (value == BULL && multiplier == Multiplier::Triple) {
            return Err(GameError::InvalidDart { value, multiplier });
        }
        Ok(Self { value, multiplier })
    }

    pub fn single(value: u32) -> Result<Self, GameError> {
        Self::new(value, Multiplier::Single)
    }

    pub fn double(value: u32) -> Result<Self, GameError> {
        Self::new(value, Multiplier::Double)
    }

    pub fn triple(value: u32) -> Result<Self, GameError> {
        Self::new(value, Multiplier::Triple)
    }

    pub fn miss() -> Self {
        Self {
            value: 0,
            multiplier: Multiplier::Single,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    /// Points scored by this dart. A miss is worth nothing whatever ring was selected.
    pub fn score(&self) -> u32 {
        self.value * self.multiplier.factor()
    }

    pub fn is_miss(&self) -> bool {
        self.value == 0
    }
}

impl fmt::Display for Dart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_miss() {
            return write!(f, "0");
        }
        let prefix = match self.multiplier {
            Multiplier::Single => "S",
            Multiplier::Double => "D",
            Multiplier::Triple => "T",
        };
        write!(f, "{}{}", prefix, self.value)
    }
}
