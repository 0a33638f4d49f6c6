//! Runtime configuration. Loaded from `skystrike.ron` at startup.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use skystrike_core::commands::PlayerCommand;
use skystrike_sim::SimConfig;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "skystrike.ron";

/// What the driver starts once the loop is up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionChoice {
    /// Endless free play with ramping difficulty.
    #[default]
    FreePlay,
    /// The campaign, starting at the given catalog index.
    Mission(usize),
}

impl SessionChoice {
    /// Commands that take a fresh engine from the menu into this session.
    pub fn start_commands(self) -> Vec<PlayerCommand> {
        match self {
            SessionChoice::FreePlay => vec![PlayerCommand::StartFreePlay],
            SessionChoice::Mission(index) => vec![
                PlayerCommand::OpenMissionSelect,
                PlayerCommand::SelectMission { index },
                PlayerCommand::BeginMission,
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Target frames per second of the loop thread.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_hz: u32,
    /// Longest frame handed to the engine; slower frames are clamped.
    #[serde(default = "default_max_frame_dt")]
    pub max_frame_dt: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub god_mode: bool,
    #[serde(default)]
    pub session: SessionChoice,
    /// How long the scripted pilot flies before the driver exits.
    #[serde(default = "default_demo_secs")]
    pub demo_secs: f64,
}

fn default_tick_rate() -> u32 {
    60
}
fn default_max_frame_dt() -> f64 {
    0.1
}
fn default_seed() -> u64 {
    42
}
fn default_demo_secs() -> f64 {
    60.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: default_tick_rate(),
            max_frame_dt: default_max_frame_dt(),
            seed: default_seed(),
            god_mode: false,
            session: SessionChoice::default(),
            demo_secs: default_demo_secs(),
        }
    }
}

impl AppConfig {
    /// Load config from `path`. A missing or invalid file yields the defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(data) => match Self::parse(&data) {
                Ok(config) => return config,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            },
            Err(_) => log::info!("No config at {:?}, using defaults", path),
        }
        Self::default()
    }

    pub fn parse(data: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(data)
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            god_mode: self.god_mode,
        }
    }

    /// Nominal frame duration at the configured rate.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.tick_rate_hz.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = AppConfig::parse("(seed: 7, session: Mission(2))").unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.session, SessionChoice::Mission(2));
        assert_eq!(config.tick_rate_hz, 60);
        assert_eq!(config.max_frame_dt, 0.1);
        assert!(!config.god_mode);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(AppConfig::parse("(seed: \"many\")").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/skystrike.ron"));
        assert_eq!(config.seed, 42);
        assert_eq!(config.session, SessionChoice::FreePlay);
    }

    #[test]
    fn test_tick_duration() {
        let config = AppConfig {
            tick_rate_hz: 50,
            ..Default::default()
        };
        assert_eq!(config.tick_duration(), Duration::from_millis(20));

        let zero = AppConfig {
            tick_rate_hz: 0,
            ..Default::default()
        };
        assert_eq!(zero.tick_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_mission_start_commands() {
        let commands = SessionChoice::Mission(3).start_commands();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[1],
            PlayerCommand::SelectMission { index: 3 }
        ));
    }
}
