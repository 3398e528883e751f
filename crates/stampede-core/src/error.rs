//! Error taxonomy.
//!
//! Configuration errors fail fast before any round starts. Pool
//! exhaustion is recoverable: the caller skips the spawn and retries.

use thiserror::Error;

/// Rejected configuration. Raised by [`crate::config::SimConfig::validate`]
/// before the engine is constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("spawn lane array is empty")]
    NoLanes,
    #[error("pool capacity must be positive")]
    NonPositivePoolCapacity,
    #[error("pool hard maximum {max} is below soft capacity {capacity}")]
    PoolBoundsInverted { capacity: usize, max: usize },
    #[error("speed range {min}..{max} is empty or non-positive")]
    InvalidSpeedRange { min: f32, max: f32 },
    #[error("rare probability {0} is outside 0.0..=1.0")]
    InvalidRareProbability(f64),
    #[error("countdown duration must be positive (got {0})")]
    NonPositiveCountdown(f32),
    #[error("release grace must be non-negative (got {0})")]
    NegativeReleaseGrace(f32),
    #[error("field width must be positive (got {0})")]
    NonPositiveFieldWidth(f32),
    #[error("sprite width must be positive (got {0})")]
    NonPositiveSpriteWidth(f32),
    #[error("initial round must be at least 1 (round 0 spawns nothing)")]
    ZeroInitialRound,
}

/// Pool acquisition failure under [`crate::config::OverflowPolicy::Reject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("monster pool exhausted ({max} shells checked out)")]
    Exhausted { max: usize },
}
