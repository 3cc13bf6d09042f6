use darts::{
    simulation::run_tournament, AimingThrower, AppError, SimulationConfig, Tournament,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), AppError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "darts=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SimulationConfig::from_env()?;
    info!(
        players = config.players.len(),
        skill = %config.skill,
        seed = config.seed,
        "Starting simulated round-robin"
    );

    let tournament = Tournament::new(config.players, config.match_config)?;
    let mut thrower = AimingThrower::new(config.seed, config.skill);
    let finished = run_tournament(tournament, &mut thrower, config.dart_limit)?;

    println!("{}", serde_json::to_string_pretty(&finished.standings())?);
    Ok(())
}
