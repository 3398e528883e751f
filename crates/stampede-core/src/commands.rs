//! Host commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, so a
//! multi-threaded host only ever mutates sim state between ticks.

use serde::{Deserialize, Serialize};

/// All possible host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Leave the lobby and start the first round.
    StartRace,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Tear down every live monster and return to the lobby.
    Reset,
}
