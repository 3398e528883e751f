//! Simulation engine — the ownership root.
//!
//! `Engine` owns the pool, registry, and round controller, processes
//! host commands at tick boundaries, and produces a [`Snapshot`] per
//! tick. A multi-threaded host serializes everything through the
//! command queue; sim state only ever mutates inside `tick`.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stampede_core::commands::Command;
use stampede_core::config::SimConfig;
use stampede_core::enums::GamePhase;
use stampede_core::error::ConfigError;
use stampede_core::events::GameEvent;
use stampede_core::state::Snapshot;
use stampede_core::types::SimTime;

use crate::pool::MonsterPool;
use crate::registry::Registry;
use crate::round::RoundController;
use crate::snapshot;

/// The simulation engine. Owns all sim state.
pub struct Engine {
    registry: Registry,
    controller: RoundController,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<Command>,
    events: Vec<GameEvent>,
}

impl Engine {
    /// Create an engine from a validated configuration. No round starts
    /// on a config that fails validation.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let pool = MonsterPool::new(
            config.pool_capacity,
            config.pool_max_size,
            config.overflow_policy,
        );
        let registry = Registry::new(&config, pool)?;
        let controller = RoundController::new(config.initial_round, config.countdown_secs);

        Ok(Self {
            registry,
            controller,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        })
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: Command) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot.
    pub fn tick(&mut self, dt: f32) -> Snapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.controller
                .tick(dt, &mut self.registry, &mut self.rng, &mut self.events);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        snapshot::build(&self.registry, &self.controller, self.time, self.phase, events)
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::StartRace => {
                if self.phase == GamePhase::Lobby {
                    self.phase = GamePhase::Active;
                    self.controller
                        .start_round(&mut self.registry, &mut self.rng, &mut self.events);
                }
            }
            Command::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            Command::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            Command::Reset => {
                self.registry.clear();
                self.controller.reset();
                self.events.clear();
                self.time = SimTime::default();
                self.phase = GamePhase::Lobby;
            }
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only view of the registry (for hosts and tests).
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn round(&self) -> u32 {
        self.controller.round()
    }
}
