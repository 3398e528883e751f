//! Monster actor — a single racer with an Idle → Run → Out lifecycle.
//!
//! Pure state machine on plain data: movement and exit detection happen
//! in [`Monster::tick`]; the exit notice is the return value, routed by
//! the registry. No callbacks are stored on the monster, so pool reuse
//! cannot leak subscriptions.

use glam::Vec2;

use stampede_core::constants::{
    ANIMATION_ANGLE, ANIMATION_SHADOW_MAX_SCALE, ANIMATION_SHADOW_MIN_SCALE,
    ANIMATION_SHADOW_SPEED, ANIMATION_SPEED,
};
use stampede_core::enums::MonsterState;
use stampede_core::types::{ColorSwap, Field};

/// Raised by [`Monster::tick`] exactly once, when the monster's sprite
/// fully crosses the field's far edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterOut {
    pub id: u64,
}

/// A single pooled racer.
#[derive(Debug, Clone, Default)]
pub struct Monster {
    id: u64,
    /// Seconds to cross the field; larger is slower.
    movement_speed: f32,
    position: Vec2,
    sprite_width: f32,
    lane: usize,
    sort_layer: u32,
    colors: ColorSwap,
    is_rare: bool,
    state: MonsterState,
    /// Accumulates only while running; drives the cosmetic wobble.
    anim_clock: f32,
    exit_raised: bool,
    active: bool,
}

impl Monster {
    /// An inactive shell for the pool's free list.
    pub(crate) fn shell() -> Self {
        Self::default()
    }

    /// Reset every field for a fresh spawn. Shells are reused across
    /// rounds; nothing may survive from the previous occupant.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        id: u64,
        movement_speed: f32,
        lane: usize,
        sort_layer: u32,
        colors: ColorSwap,
        spawn_position: Vec2,
        is_rare: bool,
        sprite_width: f32,
    ) {
        self.id = id;
        self.movement_speed = movement_speed;
        self.position = spawn_position;
        self.sprite_width = sprite_width;
        self.lane = lane;
        self.sort_layer = sort_layer;
        self.colors = colors;
        self.is_rare = is_rare;
        self.state = MonsterState::Idle;
        self.anim_clock = 0.0;
        self.exit_raised = false;
        self.active = true;
    }

    /// Idle → Run. Ignored in any other state; transitions are monotonic.
    pub fn fire(&mut self) {
        if self.state == MonsterState::Idle {
            self.state = MonsterState::Run;
        }
    }

    /// Advance one frame. Only running monsters move; a monster that is
    /// already out is a strict no-op.
    pub fn tick(&mut self, dt: f32, field: &Field) -> Option<MonsterOut> {
        if self.state != MonsterState::Run {
            return None;
        }

        self.position.x += field.run_speed(self.movement_speed) * dt;
        self.anim_clock += dt;

        if self.is_out(field) {
            self.state = MonsterState::Out;
            return self.raise_exit();
        }
        None
    }

    fn is_out(&self, field: &Field) -> bool {
        self.position.x + self.sprite_width / 2.0 > field.far_edge()
    }

    fn raise_exit(&mut self) -> Option<MonsterOut> {
        if self.exit_raised {
            return None;
        }
        self.exit_raised = true;
        Some(MonsterOut { id: self.id })
    }

    /// Reset to the hidden pool state. Called on release.
    pub(crate) fn deactivate(&mut self) {
        self.active = false;
        self.anim_clock = 0.0;
    }

    /// Body wobble around z in degrees, derived from the run clock.
    pub fn rotation_degs(&self, field: &Field) -> f32 {
        let run_speed = field.run_speed(self.movement_speed);
        (self.anim_clock * run_speed * ANIMATION_SPEED).sin() * ANIMATION_ANGLE
    }

    /// Uniform shadow scale pulsing between the configured bounds.
    pub fn shadow_scale(&self, field: &Field) -> f32 {
        let run_speed = field.run_speed(self.movement_speed);
        ((self.anim_clock * run_speed * ANIMATION_SHADOW_SPEED).sin() + 1.0) / 2.0
            * (ANIMATION_SHADOW_MAX_SCALE - ANIMATION_SHADOW_MIN_SCALE)
            + ANIMATION_SHADOW_MIN_SCALE
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> MonsterState {
        self.state
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn lane(&self) -> usize {
        self.lane
    }

    pub fn sort_layer(&self) -> u32 {
        self.sort_layer
    }

    pub fn colors(&self) -> ColorSwap {
        self.colors
    }

    pub fn is_rare(&self) -> bool {
        self.is_rare
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
