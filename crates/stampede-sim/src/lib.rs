//! Headless simulation engine for STAMPEDE.
//!
//! [`engine::Engine`] owns the monster pool, the active registry, and the
//! round controller, processes host commands, and produces per-tick
//! snapshots. Completely headless (no rendering dependency), enabling
//! deterministic testing.

pub mod engine;
pub mod monster;
pub mod pool;
pub mod registry;
pub mod round;
pub mod snapshot;

pub use engine::Engine;
pub use stampede_core as core;
