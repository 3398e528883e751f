//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += f64::from(dt);
    }
}

/// Horizontal extent of the play field in world units.
///
/// Monsters spawn just inside the near (left) edge and are out once their
/// sprite has fully crossed the far (right) edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Center of the field on the x axis.
    pub center_x: f32,
    /// Full width in world units.
    pub width: f32,
}

impl Field {
    pub fn new(center_x: f32, width: f32) -> Self {
        Self { center_x, width }
    }

    /// Left edge of the field — the spawn side.
    pub fn near_edge(&self) -> f32 {
        self.center_x - self.width / 2.0
    }

    /// Right edge of the field — the exit side.
    pub fn far_edge(&self) -> f32 {
        self.center_x + self.width / 2.0
    }

    /// World units per second for a monster with the given movement speed.
    /// Larger movement speed values are slower runners: a monster crosses
    /// the field in `movement_speed` seconds.
    pub fn run_speed(&self, movement_speed: f32) -> f32 {
        self.width / movement_speed
    }
}

impl Default for Field {
    fn default() -> Self {
        // A 16:9 view at orthographic half-height 5.
        Self::new(0.0, 17.78)
    }
}

/// Hue/shade shift values the host feeds to its palette-swap material.
/// All components are sampled from `0.0..1.0` at spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorSwap {
    pub body_hue: f32,
    pub eye_hue: f32,
    pub body_shade: f32,
}
