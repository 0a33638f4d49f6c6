//! Mission engine: the compiled-in catalog, progression flags, and the
//! runtime state of the mission being flown.
//!
//! Each mission category carries exactly the objective fields it needs, so
//! nothing downstream has to check for missing keys. Definitions are
//! validated once, when the catalog is built.

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use skystrike_core::components::{DefenseBase, EnemyId, FriendlyAircraft, Health};
use skystrike_core::enums::{EnemyType, FailureReason, MissionType};
use skystrike_core::error::InvariantError;
use skystrike_core::state::{KillProgress, MissionSummary, MissionView, ObjectiveProgress};
use skystrike_core::types::Vector3;

/// Objective parameters, one variant per mission category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Objective {
    /// Shoot down the listed number of each enemy type.
    Elimination {
        targets: &'static [(EnemyType, u32)],
    },
    /// Stay alive for the given time.
    Survival { duration_secs: f64 },
    /// Keep a friendly aircraft alive until it reaches its destination.
    Escort {
        escort_health: f64,
        escort_speed: f64,
        start: Vector3,
        destination: Vector3,
    },
    /// Keep enemies out of the base's breach radius.
    ///
    /// `enemy_waves` is the total number of enemies spawned, not a wave count.
    Defense {
        base_position: Vector3,
        breach_radius: f64,
        enemy_waves: u32,
        max_breaches: u32,
    },
    /// Destroy a single oversized enemy.
    Boss {
        boss_type: EnemyType,
        boss_health: f64,
        size_scale: f64,
    },
}

impl Objective {
    pub fn mission_type(&self) -> MissionType {
        match self {
            Objective::Elimination { .. } => MissionType::Elimination,
            Objective::Survival { .. } => MissionType::Survival,
            Objective::Escort { .. } => MissionType::Escort,
            Objective::Defense { .. } => MissionType::Defense,
            Objective::Boss { .. } => MissionType::Boss,
        }
    }
}

/// Static mission definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionDefinition {
    pub id: u32,
    pub name: &'static str,
    pub briefing: &'static str,
    pub objective: Objective,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MissionError {
    #[error("mission catalog is empty")]
    EmptyCatalog,
    #[error("mission {0} appears more than once in the catalog")]
    DuplicateId(u32),
    #[error("mission {id}: elimination needs at least one target with a positive count")]
    NoTargets { id: u32 },
    #[error("mission {id}: {field} must be positive and finite, got {value}")]
    NonPositive {
        id: u32,
        field: &'static str,
        value: f64,
    },
    #[error("mission {id}: {field} must be at least 1")]
    ZeroCount { id: u32, field: &'static str },
    #[error("mission index {0} is out of range")]
    UnknownMission(usize),
    #[error(transparent)]
    Invariant(#[from] InvariantError),
}

fn positive(id: u32, field: &'static str, value: f64) -> Result<(), MissionError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MissionError::NonPositive { id, field, value })
    }
}

fn nonzero(id: u32, field: &'static str, value: u32) -> Result<(), MissionError> {
    if value == 0 {
        Err(MissionError::ZeroCount { id, field })
    } else {
        Ok(())
    }
}

impl MissionDefinition {
    pub fn mission_type(&self) -> MissionType {
        self.objective.mission_type()
    }

    /// Check every objective field against its schema.
    pub fn validate(&self) -> Result<(), MissionError> {
        let id = self.id;
        match self.objective {
            Objective::Elimination { targets } => {
                if targets.is_empty() {
                    return Err(MissionError::NoTargets { id });
                }
                for &(_, count) in targets {
                    nonzero(id, "target count", count)?;
                }
            }
            Objective::Survival { duration_secs } => positive(id, "duration", duration_secs)?,
            Objective::Escort {
                escort_health,
                escort_speed,
                ..
            } => {
                positive(id, "escort health", escort_health)?;
                positive(id, "escort speed", escort_speed)?;
            }
            Objective::Defense {
                breach_radius,
                enemy_waves,
                max_breaches,
                ..
            } => {
                positive(id, "breach radius", breach_radius)?;
                nonzero(id, "enemy waves", enemy_waves)?;
                nonzero(id, "max breaches", max_breaches)?;
            }
            Objective::Boss {
                boss_health,
                size_scale,
                ..
            } => {
                positive(id, "boss health", boss_health)?;
                positive(id, "boss size scale", size_scale)?;
            }
        }
        Ok(())
    }
}

/// The standard campaign, flown in order.
pub const MISSIONS: [MissionDefinition; 7] = [
    MissionDefinition {
        id: 1,
        name: "First Contact",
        briefing: "Scouts are probing our airspace. Shoot down three of them.",
        objective: Objective::Elimination {
            targets: &[(EnemyType::Scout, 3)],
        },
    },
    MissionDefinition {
        id: 2,
        name: "Jet Stream",
        briefing: "A fighter wing escorts their scouts. Down four jets and two scouts.",
        objective: Objective::Elimination {
            targets: &[(EnemyType::Jet, 4), (EnemyType::Scout, 2)],
        },
    },
    MissionDefinition {
        id: 3,
        name: "Hold the Line",
        briefing: "Wave after wave is inbound. Survive for ninety seconds.",
        objective: Objective::Survival {
            duration_secs: 90.0,
        },
    },
    MissionDefinition {
        id: 4,
        name: "Safe Passage",
        briefing: "A transport is crossing the sector. Keep it alive until it lands.",
        objective: Objective::Escort {
            escort_health: 200.0,
            escort_speed: 30.0,
            start: Vector3::new(-700.0, 150.0, -700.0),
            destination: Vector3::new(700.0, 150.0, 700.0),
        },
    },
    MissionDefinition {
        id: 5,
        name: "Fortress",
        briefing: "Twelve raiders are heading for the airbase. Three breaches and it falls.",
        objective: Objective::Defense {
            base_position: Vector3::new(0.0, 10.0, 0.0),
            breach_radius: 100.0,
            enemy_waves: 12,
            max_breaches: 3,
        },
    },
    MissionDefinition {
        id: 6,
        name: "Heavy Metal",
        briefing: "Bombers are massing. Bring down four of them.",
        objective: Objective::Elimination {
            targets: &[(EnemyType::Bomber, 4)],
        },
    },
    MissionDefinition {
        id: 7,
        name: "Sky Tyrant",
        briefing: "Their flagship has taken to the air. End this.",
        objective: Objective::Boss {
            boss_type: EnemyType::Bomber,
            boss_health: 1500.0,
            size_scale: 3.0,
        },
    },
];

/// One catalog slot: static definition plus forward-only progression flags.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub definition: MissionDefinition,
    unlocked: bool,
    completed: bool,
}

impl CatalogEntry {
    pub fn unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn completed(&self) -> bool {
        self.completed
    }
}

/// Mission list with sequential unlocking. Flags only ever move forward.
#[derive(Debug, Clone)]
pub struct MissionCatalog {
    entries: Vec<CatalogEntry>,
}

impl MissionCatalog {
    /// Validate the definitions and unlock the first one.
    pub fn new(definitions: &[MissionDefinition]) -> Result<Self, MissionError> {
        if definitions.is_empty() {
            return Err(MissionError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for def in definitions {
            def.validate()?;
            if !seen.insert(def.id) {
                return Err(MissionError::DuplicateId(def.id));
            }
        }
        let entries = definitions
            .iter()
            .enumerate()
            .map(|(i, def)| CatalogEntry {
                definition: *def,
                unlocked: i == 0,
                completed: false,
            })
            .collect();
        Ok(Self { entries })
    }

    /// The standard seven-mission campaign.
    pub fn standard() -> Result<Self, MissionError> {
        Self::new(&MISSIONS)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn is_unlocked(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(|e| e.unlocked)
    }

    /// Mark a mission completed and unlock its successor.
    pub fn complete(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.completed = true;
        }
        if let Some(next) = self.entries.get_mut(index + 1) {
            next.unlocked = true;
        }
    }

    pub fn summaries(&self) -> Vec<MissionSummary> {
        self.entries
            .iter()
            .map(|e| MissionSummary {
                id: e.definition.id,
                name: e.definition.name.to_string(),
                mission_type: e.definition.mission_type(),
                unlocked: e.unlocked,
                completed: e.completed,
            })
            .collect()
    }
}

/// How a mission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionOutcome {
    Complete,
    Failed(FailureReason),
}

/// Runtime state of the mission being flown.
#[derive(Debug, Clone)]
pub struct MissionRun {
    /// Catalog index.
    pub index: usize,
    pub definition: MissionDefinition,
    pub elapsed_secs: f64,
    pub spawn_timer: f64,
    /// Enemies spawned so far.
    pub spawned: u32,
    /// Confirmed kills per type.
    pub kills: BTreeMap<EnemyType, u32>,
    /// Enemies already counted against the defense base.
    pub breached: HashSet<EnemyId>,
    pub escort: Option<FriendlyAircraft>,
    pub base: Option<DefenseBase>,
    pub boss: Option<EnemyId>,
}

impl MissionRun {
    /// Set up the mission objects the objective calls for.
    pub fn start(index: usize, definition: MissionDefinition) -> Result<Self, MissionError> {
        definition.validate()?;

        let mut escort = None;
        let mut base = None;
        match definition.objective {
            Objective::Escort {
                escort_health,
                escort_speed,
                start,
                destination,
            } => {
                escort = Some(FriendlyAircraft {
                    position: start,
                    destination,
                    speed: escort_speed,
                    health: Health::new(escort_health)?,
                    arrived: false,
                });
            }
            Objective::Defense {
                base_position,
                breach_radius,
                max_breaches,
                ..
            } => {
                base = Some(DefenseBase {
                    position: base_position,
                    breach_radius,
                    breaches: 0,
                    max_breaches,
                });
            }
            Objective::Elimination { .. } | Objective::Survival { .. } | Objective::Boss { .. } => {
            }
        }

        Ok(Self {
            index,
            definition,
            elapsed_secs: 0.0,
            spawn_timer: 0.0,
            spawned: 0,
            kills: BTreeMap::new(),
            breached: HashSet::new(),
            escort,
            base,
            boss: None,
        })
    }

    pub fn mission_type(&self) -> MissionType {
        self.definition.mission_type()
    }

    /// Credit a confirmed kill.
    pub fn record_kill(&mut self, enemy_type: EnemyType) {
        *self.kills.entry(enemy_type).or_insert(0) += 1;
    }

    pub fn kills_of(&self, enemy_type: EnemyType) -> u32 {
        self.kills.get(&enemy_type).copied().unwrap_or(0)
    }

    /// Register an enemy inside the breach radius. Returns the new breach
    /// count the first time a given enemy is seen, `None` afterwards.
    pub fn register_breach(&mut self, id: EnemyId) -> Option<u32> {
        let base = self.base.as_mut()?;
        if !self.breached.insert(id) {
            return None;
        }
        base.breaches += 1;
        Some(base.breaches)
    }

    /// Enemy types whose kill quota is still open (elimination only).
    pub fn open_targets(&self) -> Vec<EnemyType> {
        match self.definition.objective {
            Objective::Elimination { targets } => targets
                .iter()
                .filter(|(t, required)| self.kills_of(*t) < *required)
                .map(|(t, _)| *t)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Completion/failure check. Failure wins over completion.
    ///
    /// `live_enemies` counts enemies still alive; `boss_alive` reports the
    /// boss's `alive` flag (false if it has not spawned or is gone).
    pub fn evaluate(&self, live_enemies: usize, boss_alive: bool) -> Option<MissionOutcome> {
        match self.definition.objective {
            Objective::Elimination { targets } => targets
                .iter()
                .all(|(t, required)| self.kills_of(*t) >= *required)
                .then_some(MissionOutcome::Complete),
            Objective::Survival { duration_secs } => {
                (self.elapsed_secs >= duration_secs).then_some(MissionOutcome::Complete)
            }
            Objective::Escort { .. } => {
                let escort = self.escort.as_ref()?;
                if !escort.health.alive() {
                    Some(MissionOutcome::Failed(FailureReason::EscortDestroyed))
                } else if escort.arrived {
                    Some(MissionOutcome::Complete)
                } else {
                    None
                }
            }
            Objective::Defense {
                enemy_waves,
                max_breaches,
                ..
            } => {
                let breaches = self.base.as_ref().map_or(0, |b| b.breaches);
                if breaches >= max_breaches {
                    Some(MissionOutcome::Failed(FailureReason::BaseBreached))
                } else if self.spawned >= enemy_waves && live_enemies == 0 {
                    Some(MissionOutcome::Complete)
                } else {
                    None
                }
            }
            Objective::Boss { .. } => {
                (self.boss.is_some() && !boss_alive).then_some(MissionOutcome::Complete)
            }
        }
    }

    /// HUD view. `boss_health` is (current, max) when the boss is alive.
    pub fn view(&self, boss_health: Option<(f64, f64)>) -> MissionView {
        let progress = match self.definition.objective {
            Objective::Elimination { targets } => ObjectiveProgress::Elimination {
                kills: targets
                    .iter()
                    .map(|&(enemy_type, required)| KillProgress {
                        enemy_type,
                        kills: self.kills_of(enemy_type),
                        required,
                    })
                    .collect(),
            },
            Objective::Survival { duration_secs } => ObjectiveProgress::Survival {
                elapsed_secs: self.elapsed_secs,
                duration_secs,
            },
            Objective::Escort {
                escort_health,
                destination,
                start,
                ..
            } => {
                let (position, health) = self
                    .escort
                    .as_ref()
                    .map_or((start, 0.0), |e| (e.position, e.health.current()));
                ObjectiveProgress::Escort {
                    escort_position: position,
                    destination,
                    escort_health: health,
                    escort_max_health: escort_health,
                }
            }
            Objective::Defense {
                base_position,
                breach_radius,
                enemy_waves,
                max_breaches,
            } => ObjectiveProgress::Defense {
                base_position,
                breach_radius,
                breaches: self.base.as_ref().map_or(0, |b| b.breaches),
                max_breaches,
                spawned: self.spawned,
                spawn_quota: enemy_waves,
            },
            Objective::Boss { boss_health: max, .. } => {
                let (current, max) = boss_health.unwrap_or((0.0, max));
                ObjectiveProgress::Boss {
                    spawned: self.boss.is_some(),
                    boss_health: current,
                    boss_max_health: max,
                }
            }
        };

        MissionView {
            id: self.definition.id,
            name: self.definition.name.to_string(),
            mission_type: self.mission_type(),
            elapsed_secs: self.elapsed_secs,
            progress,
        }
    }
}
