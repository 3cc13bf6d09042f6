use std::fmt::Display;
use std::str::FromStr;

use tracing::debug;

use crate::game::{CheckMode, MatchConfig, Player, StartingScore};
use crate::shared::AppError;
use crate::simulation::{SkillLevel, DEFAULT_DART_LIMIT};

pub const DEFAULT_PLAYER_COUNT: usize = 4;

/// Settings for a simulated tournament, read from `DARTS_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub players: Vec<Player>,
    pub match_config: MatchConfig,
    pub skill: SkillLevel,
    pub seed: u64,
    pub dart_limit: u32,
}

impl SimulationConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys fall back to defaults, set but
    /// unparsable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let players = match lookup("DARTS_PLAYERS") {
            Some(names) => parse_players(&names)?,
            None => generated_players(DEFAULT_PLAYER_COUNT),
        };

        let mut builder = MatchConfig::builder();
        if let Some(score) = parse_var::<StartingScore, _>(&lookup, "DARTS_STARTING_SCORE")? {
            builder = builder.starting_score(score);
        }
        if let Some(legs) = parse_var::<u32, _>(&lookup, "DARTS_LEGS")? {
            builder = builder.legs_per_set(legs);
        }
        if let Some(sets) = parse_var::<u32, _>(&lookup, "DARTS_SETS")? {
            builder = builder.sets_to_win(sets);
        }
        if let Some(mode) = parse_var::<CheckMode, _>(&lookup, "DARTS_IN_MODE")? {
            builder = builder.in_mode(mode);
        }
        if let Some(mode) = parse_var::<CheckMode, _>(&lookup, "DARTS_OUT_MODE")? {
            builder = builder.out_mode(mode);
        }
        let match_config = builder.build()?;

        let skill: SkillLevel = parse_var(&lookup, "DARTS_SKILL")?.unwrap_or_default();
        let seed: u64 = parse_var(&lookup, "DARTS_SEED")?.unwrap_or_else(rand::random);
        let dart_limit: u32 = parse_var(&lookup, "DARTS_DART_LIMIT")?.unwrap_or(DEFAULT_DART_LIMIT);

        debug!(
            players = players.len(),
            ?match_config,
            %skill,
            seed,
            "Loaded simulation config"
        );

        Ok(Self {
            players,
            match_config,
            skill,
            seed,
            dart_limit,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|e| AppError::Config(format!("{}={:?}: {}", key, raw, e)))
}

fn parse_players(names: &str) -> Result<Vec<Player>, AppError> {
    let players: Vec<Player> = names
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Player::new)
        .collect();

    if players.is_empty() {
        return Err(AppError::Config("DARTS_PLAYERS has no names".to_string()));
    }
    Ok(players)
}

fn generated_players(count: usize) -> Vec<Player> {
    (0..count)
        .map(|_| Player::new(petname::Petnames::default().generate_one(2, "-")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.players.len(), DEFAULT_PLAYER_COUNT);
        assert!(config.players.iter().all(|p| p.name.contains('-')));
        assert_eq!(config.match_config, MatchConfig::default());
        assert_eq!(config.skill, SkillLevel::County);
        assert_eq!(config.dart_limit, DEFAULT_DART_LIMIT);
    }

    #[test]
    fn test_reads_every_variable() {
        let config = SimulationConfig::from_lookup(lookup_from(&[
            ("DARTS_PLAYERS", "Alice, Bob ,,Carol"),
            ("DARTS_STARTING_SCORE", "301"),
            ("DARTS_LEGS", "3"),
            ("DARTS_SETS", "2"),
            ("DARTS_IN_MODE", "double"),
            ("DARTS_OUT_MODE", "master"),
            ("DARTS_SKILL", "pro"),
            ("DARTS_SEED", "99"),
            ("DARTS_DART_LIMIT", "1000"),
        ]))
        .unwrap();

        let names: Vec<&str> = config.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(config.match_config.starting_score(), StartingScore::ThreeOhOne);
        assert_eq!(config.match_config.legs_per_set(), 3);
        assert_eq!(config.match_config.sets_to_win(), 2);
        assert_eq!(config.match_config.in_mode(), CheckMode::Double);
        assert_eq!(config.match_config.out_mode(), CheckMode::Master);
        assert_eq!(config.skill, SkillLevel::Pro);
        assert_eq!(config.seed, 99);
        assert_eq!(config.dart_limit, 1000);
    }

    #[test]
    fn test_unparsable_value_is_config_error() {
        let result = SimulationConfig::from_lookup(lookup_from(&[("DARTS_OUT_MODE", "triple")]));
        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("DARTS_OUT_MODE")));
    }

    #[test]
    fn test_empty_player_list_is_config_error() {
        let result = SimulationConfig::from_lookup(lookup_from(&[("DARTS_PLAYERS", " , ")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_zero_legs_is_game_error() {
        let result = SimulationConfig::from_lookup(lookup_from(&[("DARTS_LEGS", "0")]));
        assert!(matches!(result, Err(AppError::Game(_))));
    }
}
