//! State shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::{anyhow, Result};

use skystrike_core::commands::PlayerCommand;
use skystrike_core::state::GameStateSnapshot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the loop thread after every frame.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Handle to a running game loop thread.
pub struct GameLoopHandle {
    pub(crate) command_tx: mpsc::Sender<GameLoopCommand>,
    pub(crate) latest_snapshot: SharedSnapshot,
    pub(crate) thread: JoinHandle<()>,
}

impl GameLoopHandle {
    /// Forward a player command to the engine.
    pub fn send(&self, command: PlayerCommand) -> Result<()> {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| anyhow!("game loop has stopped"))
    }

    /// Most recent snapshot, if a frame has run yet.
    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Whether the loop thread has exited on its own (e.g. after `Quit`).
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Stop the loop, wait for it, and return the last snapshot.
    pub fn shutdown(self) -> Result<Option<GameStateSnapshot>> {
        // The thread may already be gone; joining is what matters.
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        self.thread
            .join()
            .map_err(|_| anyhow!("game loop thread panicked"))?;
        Ok(self.latest_snapshot.lock().ok().and_then(|lock| lock.clone()))
    }
}
