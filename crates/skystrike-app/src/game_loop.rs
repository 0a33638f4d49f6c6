//! Game loop thread: runs the simulation engine at the configured rate and
//! publishes snapshots.
//!
//! The engine is created inside this thread so it never crosses a thread
//! boundary. Commands arrive via an `mpsc` channel; the latest snapshot is
//! kept in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use skystrike_core::state::GameStateSnapshot;
use skystrike_sim::SimulationEngine;

use crate::config::AppConfig;
use crate::state::{GameLoopCommand, GameLoopHandle};

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(config: &AppConfig) -> std::io::Result<GameLoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));

    let shared = Arc::clone(&latest_snapshot);
    let config = config.clone();
    let thread = std::thread::Builder::new()
        .name("skystrike-game-loop".into())
        .spawn(move || run_game_loop(&config, cmd_rx, &shared))?;

    Ok(GameLoopHandle {
        command_tx: cmd_tx,
        latest_snapshot,
        thread,
    })
}

/// Frame time since the previous frame, clamped to `max_frame_dt`.
pub fn frame_dt(last_frame: Instant, now: Instant, max_frame_dt: f64) -> f64 {
    now.duration_since(last_frame)
        .as_secs_f64()
        .min(max_frame_dt)
}

/// The game loop. Runs until Shutdown, Quit, or channel disconnect.
fn run_game_loop(
    config: &AppConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = match SimulationEngine::new(config.sim_config()) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("could not build the simulation: {e}");
            return;
        }
    };
    let tick_duration = config.tick_duration();
    let mut last_frame = Instant::now();
    let mut next_tick_time = last_frame;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame of real elapsed time
        let now = Instant::now();
        let dt = frame_dt(last_frame, now, config.max_frame_dt);
        last_frame = now;
        let snapshot = engine.update(dt);

        for event in &snapshot.events {
            log::debug!("{event:?}");
        }

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if engine.quit_requested() {
            log::info!("quit requested, stopping game loop");
            return;
        }

        // 4. Sleep until the next frame
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind: reset instead of spiralling
            next_tick_time = now;
        }
    }
}
