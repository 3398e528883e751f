//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Monster lifecycle state. Transitions are monotonic:
/// Idle → Run → Out, never backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterState {
    /// Spawned and positioned, waiting for the round's fire signal.
    #[default]
    Idle,
    /// Racing across the field.
    Run,
    /// Crossed the far edge; terminal.
    Out,
}

/// Round controller state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round started yet.
    #[default]
    Idle,
    /// Monsters spawned, countdown running before they move.
    Waiting,
    /// Monsters racing, waiting for the round to drain.
    Running,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Lobby,
    Active,
    Paused,
}
