//! Active-monster registry.
//!
//! Owns the live set, creates and destroys monsters through the pool,
//! routes exit notices, and defers actual teardown by a grace period so
//! the host can play out despawn effects before the shell is reclaimed.

use std::collections::HashMap;

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use stampede_core::config::SimConfig;
use stampede_core::error::{ConfigError, PoolError};
use stampede_core::events::GameEvent;
use stampede_core::types::{ColorSwap, Field};

use crate::monster::Monster;
use crate::pool::MonsterPool;

/// Live monsters keyed by id, plus grace timers for exited ones.
///
/// Ids are monotonic and never reused, so a reclaimed shell's next
/// occupant can never be confused with its previous one.
#[derive(Debug)]
pub struct Registry {
    pool: MonsterPool,
    monsters: HashMap<u64, Monster>,
    /// Seconds until each exited monster's shell is reclaimed, by id.
    pending_release: HashMap<u64, f32>,
    /// Reused sweep buffers.
    exited: Vec<u64>,
    expired: Vec<u64>,
    next_monster_id: u64,
    /// Spawns rejected by the pool, retried each tick.
    spawn_backlog: u64,
    /// Monsters that have not exited yet this round.
    dispatch_count: u64,
    /// Spawn target of the current round.
    total_spawned: u64,
    /// True between a spawn and its round's drain.
    round_open: bool,
    /// True once the current round's fire signal has gone out.
    fired: bool,
    lanes: Vec<f32>,
    field: Field,
    sprite_width: f32,
    speed_min: f32,
    speed_max: f32,
    rare_probability: f64,
    release_grace_secs: f32,
}

impl Registry {
    pub fn new(config: &SimConfig, pool: MonsterPool) -> Result<Self, ConfigError> {
        if config.lanes.is_empty() {
            return Err(ConfigError::NoLanes);
        }
        Ok(Self {
            pool,
            monsters: HashMap::new(),
            pending_release: HashMap::new(),
            exited: Vec::new(),
            expired: Vec::new(),
            next_monster_id: 0,
            spawn_backlog: 0,
            dispatch_count: 0,
            total_spawned: 0,
            round_open: false,
            fired: false,
            lanes: config.lanes.clone(),
            field: config.field,
            sprite_width: config.sprite_width,
            speed_min: config.speed_min,
            speed_max: config.speed_max,
            rare_probability: config.rare_probability,
            release_grace_secs: config.release_grace_secs,
        })
    }

    /// Spawn a wave of `count` monsters. `spawn(0)` is a no-op.
    ///
    /// Requests beyond the pool's hard maximum are clamped; individual
    /// rejections under [`stampede_core::config::OverflowPolicy::Reject`]
    /// go to a backlog retried each tick.
    pub fn spawn(&mut self, count: u64, rng: &mut ChaCha8Rng) {
        if count == 0 {
            return;
        }

        let max = self.pool.max_size() as u64;
        let count = if count > max {
            warn!(
                requested = count,
                max, "clamping spawn request to the pool hard maximum"
            );
            max
        } else {
            count
        };

        self.dispatch_count = count;
        self.total_spawned = count;
        self.round_open = true;
        self.fired = false;

        // Spawn counts grow with the round number; keep this a plain loop.
        for _ in 0..count {
            if let Err(err) = self.create_monster(rng) {
                warn!(%err, "monster spawn deferred");
                self.spawn_backlog += 1;
            }
        }
    }

    fn create_monster(&mut self, rng: &mut ChaCha8Rng) -> Result<u64, PoolError> {
        let mut monster = self.pool.acquire()?;

        let id = self.generate_monster_id();
        let movement_speed = rng.gen_range(self.speed_min..self.speed_max);
        let colors = ColorSwap {
            body_hue: rng.gen_range(0.0..1.0),
            eye_hue: rng.gen_range(0.0..1.0),
            body_shade: rng.gen_range(0.0..1.0),
        };
        let is_rare = rng.gen_bool(self.rare_probability);

        let lane = rng.gen_range(0..self.lanes.len());
        let lane_height = self.lanes[lane];
        // Higher lanes sit further from the viewer and draw first.
        let sort_layer = (self.lanes.len() - 1 - lane) as u32;

        let spawn_position = Vec2::new(
            self.field.near_edge() + self.sprite_width / 2.0,
            lane_height,
        );

        monster.initialize(
            id,
            movement_speed,
            lane,
            sort_layer,
            colors,
            spawn_position,
            is_rare,
            self.sprite_width,
        );
        self.monsters.insert(id, monster);
        Ok(id)
    }

    fn generate_monster_id(&mut self) -> u64 {
        let id = self.next_monster_id;
        self.next_monster_id += 1;
        id
    }

    /// Flip every tracked monster to Run. No-op on an empty registry.
    pub fn fire(&mut self) {
        self.fired = true;
        for monster in self.monsters.values_mut() {
            monster.fire();
        }
    }

    /// Advance one frame: sweep grace timers, retry deferred spawns,
    /// then tick every monster and route exit notices.
    ///
    /// The sweep runs before monster ticks, so a monster that exits on
    /// tick T sees its first timer decrement on T+1 — release happens no
    /// sooner than the grace delay, even for large `dt`.
    pub fn tick(&mut self, dt: f32, rng: &mut ChaCha8Rng, events: &mut Vec<GameEvent>) {
        self.release_sweep(dt, events);
        self.retry_backlog(rng);
        self.advance_monsters(dt, events);
    }

    fn advance_monsters(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        self.exited.clear();
        for monster in self.monsters.values_mut() {
            if let Some(out) = monster.tick(dt, &self.field) {
                self.exited.push(out.id);
            }
        }
        // Map iteration order is arbitrary; keep the event feed stable.
        self.exited.sort_unstable();
        for i in 0..self.exited.len() {
            let id = self.exited[i];
            self.on_monster_out(id, events);
        }
    }

    /// Route one exit notice. Duplicate or stale ids are benign no-ops:
    /// they never double-count or double-schedule a release.
    pub(crate) fn on_monster_out(&mut self, id: u64, events: &mut Vec<GameEvent>) {
        if self.pending_release.contains_key(&id) || !self.monsters.contains_key(&id) {
            return;
        }

        self.pending_release.insert(id, self.release_grace_secs);
        self.dispatch_count = self.dispatch_count.saturating_sub(1);
        events.push(GameEvent::MonsterOut {
            id,
            remaining: self.dispatch_count,
            total: self.total_spawned,
        });

        if self.dispatch_count == 0 {
            events.push(GameEvent::WaveDispatched);
        }
    }

    fn release_sweep(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        if !self.pending_release.is_empty() {
            self.expired.clear();
            for (id, remaining) in self.pending_release.iter_mut() {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    self.expired.push(*id);
                }
            }
            while let Some(id) = self.expired.pop() {
                self.pending_release.remove(&id);
                if let Some(monster) = self.monsters.remove(&id) {
                    self.pool.release(monster);
                }
            }
        }

        // Round finish is defined by the release drain, not by the
        // dispatch counter hitting zero.
        if self.round_open
            && self.spawn_backlog == 0
            && self.monsters.is_empty()
            && self.pending_release.is_empty()
        {
            self.round_open = false;
            events.push(GameEvent::RoundFinished);
        }
    }

    fn retry_backlog(&mut self, rng: &mut ChaCha8Rng) {
        while self.spawn_backlog > 0 {
            match self.create_monster(rng) {
                Ok(id) => {
                    self.spawn_backlog -= 1;
                    if self.fired {
                        if let Some(monster) = self.monsters.get_mut(&id) {
                            monster.fire();
                        }
                    }
                }
                // Pool still exhausted; retry next tick.
                Err(_) => break,
            }
        }
    }

    /// Forcibly release every live and pending monster. Id assignment
    /// stays monotonic across calls.
    pub fn clear(&mut self) {
        for (_, monster) in self.monsters.drain() {
            self.pool.release(monster);
        }
        self.pending_release.clear();
        self.exited.clear();
        self.expired.clear();
        self.spawn_backlog = 0;
        self.dispatch_count = 0;
        self.total_spawned = 0;
        self.round_open = false;
        self.fired = false;
    }

    pub fn monsters(&self) -> &HashMap<u64, Monster> {
        &self.monsters
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Monsters that have not exited yet this round.
    pub fn dispatch_count(&self) -> u64 {
        self.dispatch_count
    }

    /// Spawn target of the current round.
    pub fn total_spawned(&self) -> u64 {
        self.total_spawned
    }

    /// Exited monsters still waiting out their grace period.
    pub fn pending_count(&self) -> usize {
        self.pending_release.len()
    }

    pub fn pool(&self) -> &MonsterPool {
        &self.pool
    }
}
