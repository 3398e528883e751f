//! Externally supplied configuration surface.
//!
//! Every tunable the core logic reads lives here; nothing is hardcoded
//! in the engine beyond these defaults.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::types::Field;

/// What the pool does when an acquisition would exceed the hard maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Keep growing past the hard maximum, emitting a warning per acquire.
    #[default]
    GrowWithWarning,
    /// Refuse the acquisition; the caller skips that spawn and retries.
    Reject,
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Ordered vertical offsets at which monsters may spawn. Length
    /// determines both the lane count and the draw-order ranking
    /// (later entries sit higher on screen and draw first).
    pub lanes: Vec<f32>,
    /// Horizontal play field geometry.
    pub field: Field,
    /// Monster sprite width in world units, used for spawn and exit
    /// offsets.
    pub sprite_width: f32,
    /// Movement-speed sample range, in seconds to cross the field.
    pub speed_min: f32,
    pub speed_max: f32,
    /// Probability that a spawned monster is rare.
    pub rare_probability: f64,
    /// Countdown before each round's race begins (seconds).
    pub countdown_secs: f32,
    /// Grace an exited monster stays pending before its shell is
    /// reclaimed (seconds).
    pub release_grace_secs: f32,
    /// Round number of the first round.
    pub initial_round: u32,
    /// Pool soft capacity: growth past this is diagnosed.
    pub pool_capacity: usize,
    /// Pool hard maximum for checked-out shells.
    pub pool_max_size: usize,
    pub overflow_policy: OverflowPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            lanes: vec![-2.0, 0.0, 2.0],
            field: Field::default(),
            sprite_width: SPRITE_WIDTH,
            speed_min: SPEED_RANGE_MIN,
            speed_max: SPEED_RANGE_MAX,
            rare_probability: RARE_PROBABILITY,
            countdown_secs: ROUND_COUNTDOWN_SECS,
            release_grace_secs: RELEASE_GRACE_SECS,
            initial_round: INITIAL_ROUND,
            pool_capacity: POOL_DEFAULT_CAPACITY,
            pool_max_size: POOL_MAX_SIZE,
            overflow_policy: OverflowPolicy::default(),
        }
    }
}

impl SimConfig {
    /// Validate the whole surface up front. No round may start on a
    /// config that fails here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lanes.is_empty() {
            return Err(ConfigError::NoLanes);
        }
        if self.pool_capacity == 0 || self.pool_max_size == 0 {
            return Err(ConfigError::NonPositivePoolCapacity);
        }
        if self.pool_max_size < self.pool_capacity {
            return Err(ConfigError::PoolBoundsInverted {
                capacity: self.pool_capacity,
                max: self.pool_max_size,
            });
        }
        if !(self.speed_min > 0.0 && self.speed_max > self.speed_min) {
            return Err(ConfigError::InvalidSpeedRange {
                min: self.speed_min,
                max: self.speed_max,
            });
        }
        if !(0.0..=1.0).contains(&self.rare_probability) {
            return Err(ConfigError::InvalidRareProbability(self.rare_probability));
        }
        if self.countdown_secs <= 0.0 {
            return Err(ConfigError::NonPositiveCountdown(self.countdown_secs));
        }
        if self.release_grace_secs < 0.0 {
            return Err(ConfigError::NegativeReleaseGrace(self.release_grace_secs));
        }
        if self.field.width <= 0.0 {
            return Err(ConfigError::NonPositiveFieldWidth(self.field.width));
        }
        if self.sprite_width <= 0.0 {
            return Err(ConfigError::NonPositiveSpriteWidth(self.sprite_width));
        }
        if self.initial_round == 0 {
            return Err(ConfigError::ZeroInitialRound);
        }
        Ok(())
    }
}
