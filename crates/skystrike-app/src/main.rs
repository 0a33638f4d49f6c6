//! Headless SkyStrike driver.
//!
//! Starts the game loop thread, flies the scripted pilot for the configured
//! time, then shuts down and reports the result.
//!
//! Usage: `skystrike [config.ron]`

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use skystrike_app::config::{AppConfig, CONFIG_FILE};
use skystrike_app::demo::DemoPilot;
use skystrike_app::game_loop;
use skystrike_core::commands::PlayerCommand;

/// How often the pilot looks at the latest snapshot.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let config = AppConfig::load(&path);
    log::info!(
        "SkyStrike starting: seed {}, {:?}, {} Hz, {}s demo",
        config.seed,
        config.session,
        config.tick_rate_hz,
        config.demo_secs
    );

    let game = game_loop::spawn_game_loop(&config).context("failed to start the game loop")?;
    for command in config.session.start_commands() {
        game.send(command)?;
    }

    let mut pilot = DemoPilot::default();
    let started = Instant::now();
    while started.elapsed().as_secs_f64() < config.demo_secs && !game.is_finished() {
        std::thread::sleep(POLL_INTERVAL);
        let Some(snapshot) = game.latest() else {
            continue;
        };
        for command in pilot.react(&snapshot) {
            game.send(command)?;
        }
    }

    // Ignored if the loop already stopped on its own.
    let _ = game.send(PlayerCommand::Quit);
    match game.shutdown()? {
        Some(last) => {
            let completed = last.missions.iter().filter(|m| m.completed).count();
            log::info!(
                "final state {:?}: score {}, {} kills, {}/{} hits, {completed} missions complete",
                last.state,
                last.score.score,
                last.score.kills,
                last.score.hits,
                last.score.shots_fired,
            );
            println!("{}", serde_json::to_string(&last.score)?);
        }
        None => log::warn!("game loop produced no frames"),
    }
    Ok(())
}
