//! Fixed-capacity bubble pool
//!
//! Every bubble the session will ever use is instantiated up front from the
//! template set; spawning and recycling only flip activity, so steady-state
//! play allocates nothing.

use rand::Rng;

use super::bubble::{Bubble, BubbleTemplate};
use super::SimError;

/// Notification payload for a recycled bubble. Carries the pre-recycle
/// category so the session can score it before the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecycleEvent {
    pub was_enemy: bool,
}

#[derive(Debug, Clone)]
pub struct BubblePool {
    slots: Vec<Bubble>,
    /// Active slot indices in spawn order
    spawned: Vec<usize>,
    /// Inactive slot indices, candidates for the next spawn
    free: Vec<usize>,
}

impl BubblePool {
    /// Pre-instantiate `capacity` inactive bubbles, round-robin across the
    /// templates. The template set must be non-empty.
    pub fn new(templates: &[BubbleTemplate], capacity: usize) -> Self {
        assert!(!templates.is_empty(), "bubble pool needs at least one template");

        let slots: Vec<Bubble> = (0..capacity)
            .map(|i| Bubble::from_template(&templates[i % templates.len()]))
            .collect();
        let free = (0..capacity).collect();

        Self {
            slots,
            spawned: Vec::with_capacity(capacity),
            free,
        }
    }

    /// Activate a random inactive slot and return its index. The caller is
    /// responsible for positioning and categorizing the bubble.
    pub fn spawn_random(&mut self, rng: &mut impl Rng) -> Result<usize, SimError> {
        if self.free.is_empty() {
            return Err(SimError::PoolExhausted);
        }
        let pick = rng.random_range(0..self.free.len());
        let slot = self.free.swap_remove(pick);
        self.slots[slot].active = true;
        self.spawned.push(slot);
        Ok(slot)
    }

    /// Deactivate a slot and return it to the free list. The slot is
    /// immediately eligible for re-spawn.
    pub fn recycle(&mut self, slot: usize) -> RecycleEvent {
        let event = RecycleEvent {
            was_enemy: self.slots[slot].is_enemy,
        };
        self.slots[slot].active = false;
        self.spawned.retain(|&s| s != slot);
        self.free.push(slot);
        event
    }

    /// Recycle every active bubble, oldest first (reset path)
    pub fn recycle_all(&mut self) -> Vec<RecycleEvent> {
        let spawned: Vec<usize> = self.spawned.clone();
        spawned.into_iter().map(|slot| self.recycle(slot)).collect()
    }

    pub fn spawned_count(&self) -> usize {
        self.spawned.len()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Active slot indices in spawn order
    pub fn spawned_slots(&self) -> &[usize] {
        &self.spawned
    }

    pub fn slot(&self, slot: usize) -> &Bubble {
        &self.slots[slot]
    }

    pub fn slot_mut(&mut self, slot: usize) -> &mut Bubble {
        &mut self.slots[slot]
    }

    /// Iterate active bubbles in spawn order
    pub fn actives(&self) -> impl Iterator<Item = &Bubble> {
        self.spawned.iter().map(|&s| &self.slots[s])
    }
}
