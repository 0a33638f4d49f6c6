//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! drives the game-state machine, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless, so every rule can be tested
//! deterministically.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::commands::PlayerCommand;
use skystrike_core::components::{ControlState, Enemy, Health, Projectile};
use skystrike_core::constants::{DIFFICULTY_RAMP_SECS, MAX_DIFFICULTY, PLAYER_MAX_HEALTH};
use skystrike_core::enums::{CameraMode, FailureReason, GameState};
use skystrike_core::events::GameEvent;
use skystrike_core::state::GameStateSnapshot;
use skystrike_core::types::{SimTime, Vector3};

use crate::mission::{MissionCatalog, MissionError, MissionOutcome, MissionRun};
use crate::player::PlayerAircraft;
use crate::scoring::ScoreState;
use crate::systems;
use crate::systems::collision::CollisionContext;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same game.
    pub seed: u64,
    /// Start with god mode on.
    pub god_mode: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            god_mode: false,
        }
    }
}

/// Which kind of session `Restart` rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    FreePlay,
    Mission(usize),
}

/// The session currently loaded into the world.
#[derive(Debug, Clone)]
enum Session {
    FreePlay { spawn_timer: f64 },
    Mission(MissionRun),
}

/// The simulation engine. Owns the ECS world and all game state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    state: GameState,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,

    player: PlayerAircraft,
    controls: ControlState,
    camera: CameraMode,
    god_mode: bool,
    quit_requested: bool,

    catalog: MissionCatalog,
    selected_mission: Option<usize>,
    session: Option<Session>,
    last_session: Option<SessionKind>,
    score: ScoreState,
    difficulty: f64,
    next_enemy_id: u32,
}

impl SimulationEngine {
    /// Create an engine flying the standard mission catalog.
    pub fn new(config: SimConfig) -> Result<Self, MissionError> {
        Self::with_catalog(config, MissionCatalog::standard()?)
    }

    /// Create an engine flying a custom (already validated) catalog.
    pub fn with_catalog(config: SimConfig, catalog: MissionCatalog) -> Result<Self, MissionError> {
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            state: GameState::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            player: PlayerAircraft::new(PLAYER_MAX_HEALTH)?,
            controls: ControlState::default(),
            camera: CameraMode::default(),
            god_mode: config.god_mode,
            quit_requested: false,
            catalog,
            selected_mission: None,
            session: None,
            last_session: None,
            score: ScoreState::default(),
            difficulty: 1.0,
            next_enemy_id: 0,
        })
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one frame of `dt` seconds and return the resulting snapshot.
    ///
    /// Commands are applied first. The world only moves while PLAYING;
    /// every other state leaves it frozen.
    pub fn update(&mut self, dt: f64) -> GameStateSnapshot {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.process_commands();

        if self.state == GameState::Playing {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Snapshot of the current state without advancing or draining events.
    pub fn snapshot(&self) -> GameStateSnapshot {
        self.build_snapshot(Vec::new())
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn camera(&self) -> CameraMode {
        self.camera
    }

    pub fn god_mode(&self) -> bool {
        self.god_mode
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    /// Set once a `Quit` command has been processed.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn player(&self) -> &PlayerAircraft {
        &self.player
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn catalog(&self) -> &MissionCatalog {
        &self.catalog
    }

    /// The mission being flown, if any.
    pub fn mission(&self) -> Option<&MissionRun> {
        match &self.session {
            Some(Session::Mission(run)) => Some(run),
            _ => None,
        }
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn an enemy at a fixed position (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        enemy_type: skystrike_core::enums::EnemyType,
        position: Vector3,
    ) -> skystrike_core::components::EnemyId {
        let id = skystrike_core::components::EnemyId(self.next_enemy_id);
        self.next_enemy_id += 1;
        world_setup::spawn_enemy(&mut self.world, &mut self.rng, id, enemy_type, position, None)
            .unwrap();
        id
    }

    /// Spawn a projectile directly (for testing).
    #[cfg(test)]
    pub fn spawn_test_projectile(&mut self, position: Vector3, projectile: Projectile) {
        world_setup::spawn_projectile(&mut self.world, position, projectile);
    }

    /// Mutable player access (for testing).
    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut PlayerAircraft {
        &mut self.player
    }

    /// Mutable mission access (for testing).
    #[cfg(test)]
    pub fn mission_mut(&mut self) -> Option<&mut MissionRun> {
        match &mut self.session {
            Some(Session::Mission(run)) => Some(run),
            _ => None,
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetControl { control, active } => {
                self.controls.set(control, active);
            }
            PlayerCommand::SetFirePrimary { held } => {
                self.controls.fire_primary = held;
            }
            PlayerCommand::FireSecondary => {
                if self.state == GameState::Playing {
                    self.controls.fire_secondary = true;
                }
            }
            PlayerCommand::ToggleCamera => {
                self.camera = self.camera.next();
            }
            PlayerCommand::ToggleGodMode => {
                self.god_mode = !self.god_mode;
                log::info!("god mode {}", if self.god_mode { "on" } else { "off" });
            }
            PlayerCommand::StartFreePlay => {
                if self.state == GameState::Menu {
                    self.start_session(SessionKind::FreePlay);
                }
            }
            PlayerCommand::OpenMissionSelect => {
                if matches!(
                    self.state,
                    GameState::Menu
                        | GameState::MissionComplete
                        | GameState::MissionFailed
                        | GameState::GameOver
                ) {
                    self.state = GameState::MissionSelect;
                }
            }
            PlayerCommand::SelectMission { index } => {
                if self.state != GameState::MissionSelect {
                    return;
                }
                if self.catalog.is_unlocked(index) {
                    self.selected_mission = Some(index);
                    self.state = GameState::MissionBriefing;
                } else {
                    log::warn!("mission {index} is locked or does not exist");
                }
            }
            PlayerCommand::BeginMission => {
                if self.state != GameState::MissionBriefing {
                    return;
                }
                if let Some(index) = self.selected_mission {
                    self.start_session(SessionKind::Mission(index));
                }
            }
            PlayerCommand::TogglePause => match self.state {
                GameState::Playing => self.state = GameState::Paused,
                GameState::Paused => self.state = GameState::Playing,
                _ => {}
            },
            PlayerCommand::Restart => {
                if matches!(
                    self.state,
                    GameState::Playing
                        | GameState::Paused
                        | GameState::MissionComplete
                        | GameState::MissionFailed
                        | GameState::GameOver
                ) {
                    if let Some(kind) = self.last_session {
                        self.start_session(kind);
                    }
                }
            }
            PlayerCommand::ReturnToMenu => {
                self.world.clear();
                self.session = None;
                self.player.respawn();
                self.score = ScoreState::default();
                self.controls = ControlState::default();
                self.state = GameState::Menu;
            }
            PlayerCommand::Quit => {
                self.quit_requested = true;
            }
        }
    }

    /// Rebuild the world, the player, and the score for a fresh session.
    fn start_session(&mut self, kind: SessionKind) {
        let session = match kind {
            SessionKind::FreePlay => Session::FreePlay { spawn_timer: 0.0 },
            SessionKind::Mission(index) => {
                let run = self
                    .catalog
                    .get(index)
                    .ok_or(MissionError::UnknownMission(index))
                    .and_then(|entry| MissionRun::start(index, entry.definition));
                match run {
                    Ok(run) => Session::Mission(run),
                    Err(e) => {
                        log::error!("cannot start mission {index}: {e}");
                        return;
                    }
                }
            }
        };

        world_setup::setup_session(&mut self.world, &mut self.rng);
        self.player.respawn();
        self.controls = ControlState::default();
        self.score = ScoreState::default();
        self.time = SimTime::default();
        self.difficulty = 1.0;
        self.next_enemy_id = 0;
        self.events.clear();

        match &session {
            Session::FreePlay { .. } => log::info!("free play started"),
            Session::Mission(run) => log::info!(
                "mission {} \"{}\" started ({:?})",
                run.definition.id,
                run.definition.name,
                run.mission_type()
            ),
        }
        self.session = Some(session);
        self.last_session = Some(kind);
        self.state = GameState::Playing;
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Mission clock, escort, spawning
        self.update_session(dt);
        self.check_mission_outcome();
        if self.state != GameState::Playing {
            return;
        }

        // 2. Player flight and weapons
        self.player.update(&self.controls, dt);
        self.fire_weapons();

        // 3. Combo window
        self.score.decay_combo(dt);

        // 4. Enemy AI, movement, enemy fire
        let mut shots = Vec::new();
        systems::enemy_ai::run(
            &mut self.world,
            &mut self.rng,
            self.player.position,
            self.difficulty,
            dt,
            &mut shots,
        );
        for (position, projectile) in shots {
            world_setup::spawn_projectile(&mut self.world, position, projectile);
        }

        // 5. Projectiles (homing, expiry, movement)
        let targets = systems::projectiles::homing_targets(&self.world);
        systems::projectiles::run(&mut self.world, &targets, dt);

        // 6. Effects
        systems::explosions::run(&mut self.world, dt, &mut self.despawn_buffer);
        systems::clouds::run(&mut self.world, dt);

        // 7. Collisions
        let mission = match &mut self.session {
            Some(Session::Mission(run)) => Some(run),
            _ => None,
        };
        let mut ctx = CollisionContext {
            player: &mut self.player,
            god_mode: self.god_mode,
            score: &mut self.score,
            mission,
            events: &mut self.events,
        };
        systems::collision::run(&mut self.world, &mut ctx);

        // 8. Player death outranks any objective met this frame
        if !self.player.alive() && !self.god_mode {
            self.on_player_destroyed();
        }

        // 9. Objectives
        self.check_mission_outcome();

        // 10. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    fn update_session(&mut self, dt: f64) {
        let result = match &mut self.session {
            Some(Session::Mission(run)) => {
                run.elapsed_secs += dt;
                if let Some(escort) = run.escort.as_mut() {
                    systems::escort::run(escort, dt);
                }
                systems::spawner::run_mission(
                    &mut self.world,
                    &mut self.rng,
                    run,
                    &mut self.next_enemy_id,
                    dt,
                    &mut self.events,
                )
            }
            Some(Session::FreePlay { spawn_timer }) => {
                self.difficulty =
                    (1.0 + self.time.elapsed_secs / DIFFICULTY_RAMP_SECS).min(MAX_DIFFICULTY);
                systems::spawner::run_free_play(
                    &mut self.world,
                    &mut self.rng,
                    spawn_timer,
                    &mut self.next_enemy_id,
                    dt,
                )
            }
            None => Ok(()),
        };
        if let Err(e) = result {
            log::error!("enemy spawn rejected: {e}");
        }
    }

    /// Machine gun fires every frame the trigger is held; a pending missile
    /// request is consumed whether or not it launches.
    fn fire_weapons(&mut self) {
        if self.controls.fire_primary {
            if let Some((position, projectile)) = self.player.fire_machine_gun() {
                self.launch(position, projectile);
            }
        }
        if std::mem::take(&mut self.controls.fire_secondary) {
            if let Some((position, projectile)) = self.player.fire_missile() {
                self.launch(position, projectile);
            }
        }
    }

    fn launch(&mut self, position: Vector3, projectile: Projectile) {
        self.events.push(GameEvent::ShotFired {
            missile: projectile.is_missile,
        });
        self.score.shots_fired += 1;
        world_setup::spawn_projectile(&mut self.world, position, projectile);
    }

    fn check_mission_outcome(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        let Some(Session::Mission(run)) = &self.session else {
            return;
        };

        let live = systems::spawner::live_enemy_count(&self.world);
        let boss_alive = run.boss.is_some_and(|boss| {
            self.world
                .query::<(&Enemy, &Health)>()
                .iter()
                .any(|(_, (enemy, health))| enemy.id == boss && health.alive())
        });

        let (index, mission_id) = (run.index, run.definition.id);
        match run.evaluate(live, boss_alive) {
            Some(MissionOutcome::Complete) => {
                self.catalog.complete(index);
                self.state = GameState::MissionComplete;
                self.events.push(GameEvent::MissionComplete { mission_id });
                log::info!("mission {mission_id} complete, score {}", self.score.score);
            }
            Some(MissionOutcome::Failed(reason)) => self.fail_mission(mission_id, reason),
            None => {}
        }
    }

    fn fail_mission(&mut self, mission_id: u32, reason: FailureReason) {
        self.state = GameState::MissionFailed;
        self.events.push(GameEvent::MissionFailed { mission_id, reason });
        log::info!("mission {mission_id} failed: {reason:?}");
    }

    fn on_player_destroyed(&mut self) {
        match &self.session {
            Some(Session::Mission(run)) => {
                let mission_id = run.definition.id;
                self.fail_mission(mission_id, FailureReason::PlayerDestroyed);
            }
            _ => {
                self.state = GameState::GameOver;
                log::info!("game over, final score {}", self.score.score);
            }
        }
    }

    fn build_snapshot(&self, events: Vec<GameEvent>) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.state,
            self.camera,
            self.god_mode,
            self.difficulty,
            &self.player,
            self.mission(),
            &self.catalog,
            &self.score,
            events,
        )
    }
}
