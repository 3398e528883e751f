//! Simulation constants and tuning defaults.

// --- Cosmetic animation ---

/// Body wobble amplitude (degrees).
pub const ANIMATION_ANGLE: f32 = 4.0;

/// Body wobble frequency factor (scaled by the monster's run speed).
pub const ANIMATION_SPEED: f32 = 3.0;

/// Shadow pulse lower bound.
pub const ANIMATION_SHADOW_MIN_SCALE: f32 = 0.95;

/// Shadow pulse upper bound.
pub const ANIMATION_SHADOW_MAX_SCALE: f32 = 1.05;

/// Shadow pulse frequency factor.
pub const ANIMATION_SHADOW_SPEED: f32 = 2.0;

// --- Pool defaults ---

/// Default soft capacity of the monster pool.
pub const POOL_DEFAULT_CAPACITY: usize = 1000;

/// Default hard maximum of the monster pool.
pub const POOL_MAX_SIZE: usize = 20_000;

// --- Round pacing defaults ---

/// Default countdown before each round's race begins (seconds).
pub const ROUND_COUNTDOWN_SECS: f32 = 3.0;

/// Default grace before an exited monster's shell is reclaimed (seconds).
pub const RELEASE_GRACE_SECS: f32 = 1.0;

/// Default starting round number.
pub const INITIAL_ROUND: u32 = 4;

// --- Spawn sampling defaults ---

/// Default lower bound of the movement-speed sample (seconds to cross).
pub const SPEED_RANGE_MIN: f32 = 2.0;

/// Default upper bound of the movement-speed sample (seconds to cross).
pub const SPEED_RANGE_MAX: f32 = 10.0;

/// Default probability that a spawned monster is rare.
pub const RARE_PROBABILITY: f64 = 0.10;

/// Default monster sprite width in world units (stock body sprite bounds).
pub const SPRITE_WIDTH: f32 = 2.673;

/// Vertical tolerance pulling the top spawn lane inside the field band
/// (a quarter of the stock body sprite height).
pub const LANE_TOP_TOLERANCE: f32 = 0.668_25;
