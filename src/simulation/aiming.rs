use rand::{rngs::StdRng, Rng, SeedableRng};
use strum::IntoEnumIterator;

use crate::game::{AroundTheClockMatch, CheckMode, Dart, Multiplier, X01Match};

use super::types::{SkillLevel, ThrowStrategy};

const TOP_SEGMENT: u32 = 20;

/// Aims at a finish when one is on, otherwise at a setup shot that leaves a
/// finishable score. A dart that misses its target drops from a treble into
/// the single of the same number, or off the board from a single or double.
pub struct AimingThrower {
    rng: StdRng,
    accuracy: f64,
}

impl AimingThrower {
    pub fn new(seed: u64, skill: SkillLevel) -> Self {
        Self::with_accuracy(seed, skill.accuracy())
    }

    /// Accuracy is clamped to 0.0..=1.0
    pub fn with_accuracy(seed: u64, accuracy: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            accuracy: accuracy.clamp(0.0, 1.0),
        }
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    fn throw_at(&mut self, target: Dart) -> Dart {
        if self.rng.random_bool(self.accuracy) {
            return target;
        }
        match target.multiplier() {
            Multiplier::Triple => Dart::single(target.value()).unwrap_or_else(|_| Dart::miss()),
            Multiplier::Single | Multiplier::Double => Dart::miss(),
        }
    }
}

impl ThrowStrategy for AimingThrower {
    fn next_x01_dart(&mut self, game: &X01Match) -> Dart {
        let target = x01_target(game);
        self.throw_at(target)
    }

    fn next_around_the_clock_dart(&mut self, game: &AroundTheClockMatch) -> Dart {
        let target = Dart::single(game.current_target()).unwrap_or_else(|_| Dart::miss());
        self.throw_at(target)
    }

    fn strategy_name(&self) -> &'static str {
        "AimingThrower"
    }
}

/// The dart a sensible player would go for next
pub fn x01_target(game: &X01Match) -> Dart {
    let player = game.current_player();
    let config = game.config();

    if !player.has_opened && config.in_mode() != CheckMode::Standard {
        return Dart::double(TOP_SEGMENT).unwrap_or_else(|_| Dart::miss());
    }

    finishing_dart(player.remaining_score, config.out_mode())
        .unwrap_or_else(|| setup_dart(player.remaining_score, config.out_mode()))
}

fn finishing_dart(remaining: u32, out_mode: CheckMode) -> Option<Dart> {
    Multiplier::iter()
        .filter(|multiplier| out_mode.permits(*multiplier))
        .find_map(|multiplier| {
            let factor = multiplier.factor();
            if remaining == 0 || remaining % factor != 0 {
                return None;
            }
            Dart::new(remaining / factor, multiplier).ok()
        })
}

fn setup_dart(remaining: u32, out_mode: CheckMode) -> Dart {
    [Multiplier::Triple, Multiplier::Single]
        .into_iter()
        .flat_map(|multiplier| {
            (1..=TOP_SEGMENT)
                .rev()
                .filter_map(move |value| Dart::new(value, multiplier).ok())
        })
        .find(|dart| {
            dart.score() < remaining && leaves_finishable(remaining - dart.score(), out_mode)
        })
        .unwrap_or_else(Dart::miss)
}

fn leaves_finishable(left: u32, out_mode: CheckMode) -> bool {
    if out_mode.permits(Multiplier::Single) {
        return left >= 1;
    }
    left > 2 * TOP_SEGMENT || (left >= 2 && left % 2 == 0)
}
