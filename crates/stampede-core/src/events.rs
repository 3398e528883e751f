//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

/// Display/audio events for the host. Drained into each snapshot;
/// the core never reads host state back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A round was started and its wave spawned.
    RoundStarted { round: u32, spawn_count: u64 },
    /// Countdown announcement; emitted once per whole second remaining.
    CountdownTick { seconds_remaining: u32 },
    /// Countdown elapsed; every monster in the wave is now running.
    RaceStarted { round: u32 },
    /// A monster crossed the far edge. `remaining`/`total` is the UI's
    /// monster counter.
    MonsterOut { id: u64, remaining: u64, total: u64 },
    /// Every monster of the wave has exited; their shells are still
    /// pending release.
    WaveDispatched,
    /// The release sweep drained the round completely.
    RoundFinished,
}
