//! Round controller.
//!
//! Owns the round number, gates each wave's start behind a countdown,
//! and reacts to the registry's drain by escalating to the next round —
//! an unbounded cycle with no terminal state.

use rand_chacha::ChaCha8Rng;
use tracing::debug;

use stampede_core::enums::RoundPhase;
use stampede_core::events::GameEvent;
use stampede_core::math::fibonacci;

use crate::registry::Registry;

#[derive(Debug)]
pub struct RoundController {
    round: u32,
    initial_round: u32,
    phase: RoundPhase,
    /// Configured countdown duration (seconds).
    countdown_secs: f32,
    /// Time accumulated in Waiting.
    countdown_timer: f32,
    /// Last whole second announced, so each value is announced once.
    last_countdown: i64,
}

impl RoundController {
    pub fn new(initial_round: u32, countdown_secs: f32) -> Self {
        Self {
            round: initial_round,
            initial_round,
            phase: RoundPhase::Idle,
            countdown_secs,
            countdown_timer: 0.0,
            last_countdown: 0,
        }
    }

    /// Spawn this round's wave and begin the countdown.
    ///
    /// The spawn count follows the growth sequence indexed by the round
    /// number, so difficulty escalates round over round.
    pub fn start_round(
        &mut self,
        registry: &mut Registry,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<GameEvent>,
    ) {
        let spawn_count = fibonacci(self.round);
        debug!(round = self.round, spawn_count, "starting round");

        registry.spawn(spawn_count, rng);
        self.countdown_timer = 0.0;
        self.last_countdown = i64::from(self.countdown_secs.ceil() as i32) + 1;
        self.phase = RoundPhase::Waiting;

        events.push(GameEvent::RoundStarted {
            round: self.round,
            spawn_count,
        });
    }

    /// Advance one frame: drive the registry, then run the countdown or
    /// watch for the round's drain.
    pub fn tick(
        &mut self,
        dt: f32,
        registry: &mut Registry,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<GameEvent>,
    ) {
        let watermark = events.len();
        registry.tick(dt, rng, events);
        let drained = events[watermark..]
            .iter()
            .any(|event| matches!(event, GameEvent::RoundFinished));

        self.countdown_process(dt, registry, events);

        if self.phase == RoundPhase::Running && drained {
            self.end_round(registry, rng, events);
        }
    }

    fn countdown_process(
        &mut self,
        dt: f32,
        registry: &mut Registry,
        events: &mut Vec<GameEvent>,
    ) {
        if self.phase != RoundPhase::Waiting {
            return;
        }

        self.countdown_timer += dt;

        let seconds_remaining = (self.countdown_secs - self.countdown_timer).ceil() as i64;
        if seconds_remaining < self.last_countdown {
            if seconds_remaining > 0 {
                events.push(GameEvent::CountdownTick {
                    seconds_remaining: seconds_remaining as u32,
                });
            }
            self.last_countdown = seconds_remaining;
        }

        if self.countdown_timer >= self.countdown_secs {
            self.countdown_timer = 0.0;
            self.phase = RoundPhase::Running;
            registry.fire();
            events.push(GameEvent::RaceStarted { round: self.round });
        }
    }

    fn end_round(
        &mut self,
        registry: &mut Registry,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<GameEvent>,
    ) {
        debug!(round = self.round, "round finished");
        self.round += 1;
        self.start_round(registry, rng, events);
    }

    /// Back to the configured first round, no round in progress.
    pub fn reset(&mut self) {
        self.round = self.initial_round;
        self.phase = RoundPhase::Idle;
        self.countdown_timer = 0.0;
        self.last_countdown = 0;
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Whole seconds left before the race starts; 0 outside Waiting.
    pub fn seconds_remaining(&self) -> u32 {
        if self.phase != RoundPhase::Waiting {
            return 0;
        }
        (self.countdown_secs - self.countdown_timer).ceil().max(0.0) as u32
    }
}
