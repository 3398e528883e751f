//! Per-tick snapshot — the complete visible state handed to the host.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{ColorSwap, SimTime};

/// Complete display state produced by each engine tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub round: RoundView,
    /// Live monsters in draw order (lowest rank first).
    pub monsters: Vec<MonsterView>,
    /// Events raised during this tick.
    pub events: Vec<GameEvent>,
}

/// Round status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundView {
    pub number: u32,
    pub phase: RoundPhase,
    /// Whole seconds left before the race starts (Waiting only, else 0).
    pub countdown_secs: u32,
    /// Monsters still racing this round.
    pub active: u64,
    /// Monsters spawned this round.
    pub total: u64,
}

/// A single monster's display row. The host applies these transform
/// values to its visual representation; the core never reads them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterView {
    pub id: u64,
    pub state: MonsterState,
    /// World-space position (x lateral, y lane offset).
    pub position: Vec2,
    /// Body wobble around z, in degrees.
    pub rotation_degs: f32,
    /// Uniform shadow scale.
    pub shadow_scale: f32,
    /// Draw-order rank; lower draws first (further from the viewer).
    pub sort_layer: u32,
    pub colors: ColorSwap,
    pub is_rare: bool,
}
