//! Bounded reusable-object pool for monster shells.
//!
//! Spawn counts grow round over round, so monsters are recycled instead
//! of reallocated. Only the registry touches the pool.

use tracing::warn;

use stampede_core::config::OverflowPolicy;
use stampede_core::error::PoolError;

use crate::monster::Monster;

/// Free-list allocator with checked-out accounting.
#[derive(Debug)]
pub struct MonsterPool {
    free: Vec<Monster>,
    checked_out: usize,
    /// Soft capacity: growth past this is diagnosed once.
    capacity: usize,
    /// Hard maximum for simultaneously checked-out shells.
    max_size: usize,
    overflow_policy: OverflowPolicy,
}

impl MonsterPool {
    pub fn new(capacity: usize, max_size: usize, overflow_policy: OverflowPolicy) -> Self {
        Self {
            free: Vec::new(),
            checked_out: 0,
            capacity,
            max_size,
            overflow_policy,
        }
    }

    /// Check out a shell, reusing a released one when available.
    ///
    /// Below the soft capacity acquisition is silent; between soft and
    /// hard bounds it succeeds with a one-time warning; at the hard
    /// maximum the overflow policy decides between rejection and soft
    /// growth with a per-acquire warning.
    pub fn acquire(&mut self) -> Result<Monster, PoolError> {
        if self.checked_out >= self.max_size {
            match self.overflow_policy {
                OverflowPolicy::Reject => {
                    return Err(PoolError::Exhausted {
                        max: self.max_size,
                    })
                }
                OverflowPolicy::GrowWithWarning => {
                    warn!(
                        checked_out = self.checked_out,
                        max = self.max_size,
                        "monster pool grew past its hard maximum"
                    );
                }
            }
        } else if self.checked_out == self.capacity {
            warn!(
                capacity = self.capacity,
                "monster pool grew past its soft capacity"
            );
        }

        self.checked_out += 1;
        Ok(self.free.pop().unwrap_or_else(Monster::shell))
    }

    /// Return a shell to the free list, resetting it to the hidden
    /// state first. Shells beyond the retained capacity are dropped.
    pub fn release(&mut self, mut monster: Monster) {
        monster.deactivate();
        self.checked_out = self.checked_out.saturating_sub(1);
        if self.free.len() < self.capacity {
            self.free.push(monster);
        }
    }

    /// Shells currently checked out.
    pub fn checked_out(&self) -> usize {
        self.checked_out
    }

    /// Shells waiting on the free list.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}
