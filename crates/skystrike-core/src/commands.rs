//! Player commands sent by the input layer to the simulation.
//!
//! Commands are queued and applied at the start of the next `update`.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Flight ---
    /// Press or release a held flight control.
    SetControl { control: FlightControl, active: bool },
    /// Press or release the machine-gun trigger.
    SetFirePrimary { held: bool },
    /// Launch one missile (if loaded and off cooldown) on the next frame.
    FireSecondary,

    // --- View / debug ---
    /// Cycle the camera mode.
    ToggleCamera,
    /// Toggle invulnerability.
    ToggleGodMode,

    // --- Session flow ---
    /// Start endless free play from the menu.
    StartFreePlay,
    /// Open the mission list.
    OpenMissionSelect,
    /// Pick a mission (0-based catalog index) to brief.
    SelectMission { index: usize },
    /// Launch the briefed mission.
    BeginMission,
    /// Pause or resume.
    TogglePause,
    /// Restart the current session from scratch.
    Restart,
    /// Back to the main menu.
    ReturnToMenu,
    /// Ask the driver to exit.
    Quit,
}
