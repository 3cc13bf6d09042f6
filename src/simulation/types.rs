use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::game::{AroundTheClockMatch, Dart, X01Match};

/// How often a simulated player hits what they aim at
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumIter, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SkillLevel {
    Pub,
    #[default]
    County,
    Pro,
}

impl SkillLevel {
    pub fn accuracy(self) -> f64 {
        match self {
            SkillLevel::Pub => 0.35,
            SkillLevel::County => 0.55,
            SkillLevel::Pro => 0.8,
        }
    }
}

/// Decides the next dart for whoever is at the oche
pub trait ThrowStrategy {
    fn next_x01_dart(&mut self, game: &X01Match) -> Dart;

    fn next_around_the_clock_dart(&mut self, game: &AroundTheClockMatch) -> Dart;

    /// Get the name of this strategy
    fn strategy_name(&self) -> &'static str;
}
