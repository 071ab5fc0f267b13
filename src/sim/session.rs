//! Session controller and game state machine
//!
//! One `Session` owns the shell, the pool and the score, and drives them
//! from a fixed-timestep tick. Notifications stay synchronous: a consumed
//! bubble is absorbed, recycled, scored and replaced before the tick moves
//! to the next bubble, and none of those cascades re-enters the tick loop.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::bubble::ShellBound;
use super::placement;
use super::pool::{BubblePool, RecycleEvent};
use super::shell::Shell;
use crate::tuning::Tuning;
use crate::ui::UiSink;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Restart requested (key press or game-over popup)
    pub restart: bool,
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Active,
    /// Run ended; only a restart leaves this phase
    GameOver,
}

pub struct Session {
    tuning: Tuning,
    shell: Shell,
    pool: BubblePool,
    rng: Pcg32,
    total_score: u32,
    phase: GamePhase,
    seed: u64,
}

impl Session {
    /// Create a session and run the initial reset, entering `Active` with
    /// the starting bubble batch in place.
    pub fn new(tuning: Tuning, seed: u64, ui: &mut dyn UiSink) -> Self {
        tuning.validate();

        let shell = Shell::new(&tuning);
        let pool = BubblePool::new(&tuning.templates, tuning.pool_capacity);
        let mut session = Self {
            shell,
            pool,
            rng: Pcg32::seed_from_u64(seed),
            total_score: 0,
            // Pre-start counts as over; reset() flips to Active
            phase: GamePhase::GameOver,
            seed,
            tuning,
        };
        log::info!("session initialized with seed {seed}");
        session.reset(ui);
        session
    }

    /// Full reset, valid from any phase: fresh shell, empty pool, starting
    /// batch, zero score, phase `Active`.
    pub fn reset(&mut self, ui: &mut dyn UiSink) {
        // Teardown runs with the session over so the recycle sweep cannot
        // score or trigger replacement spawns.
        self.phase = GamePhase::GameOver;

        ui.show_progress();
        self.shell.reset();
        for event in self.pool.recycle_all() {
            self.on_recycled(event, ui);
        }
        self.spawn_bubbles(self.tuning.npc_on_start);

        self.total_score = 0;
        ui.set_score(0);
        self.phase = GamePhase::Active;
        log::info!("session reset, {} bubbles live", self.pool.spawned_count());
    }

    /// Restart always succeeds, whatever the current phase
    pub fn restart(&mut self, ui: &mut dyn UiSink) {
        self.phase = GamePhase::GameOver;
        self.reset(ui);
    }

    /// Advance the session by one fixed timestep. Frozen while game over.
    pub fn tick(&mut self, input: &TickInput, dt: f32, ui: &mut dyn UiSink) {
        if self.phase == GamePhase::GameOver {
            return;
        }

        if let Some(radius) = self.shell.update(dt) {
            self.on_radius_change(radius, ui);
        }

        // Snapshot the active set: bubbles spawned by a mid-tick recycle
        // cascade first advance on the following tick.
        let slots: Vec<usize> = self.pool.spawned_slots().to_vec();
        for slot in slots {
            if !self.pool.slot(slot).active {
                continue;
            }
            let consumed = self.pool.slot_mut(slot).advance(&self.shell, dt);
            if consumed {
                self.consume(slot, ui);
            }
        }

        ui.set_progress(self.shell.decrease_progress());

        if input.restart {
            self.restart(ui);
        }
    }

    /// A bubble reached the shell: absorb it, then recycle the slot. The
    /// radius-change check runs before the recycle handler, so a
    /// threshold-breaching enemy ends the session before any replacement
    /// spawns could fire.
    fn consume(&mut self, slot: usize, ui: &mut dyn UiSink) {
        let is_enemy = self.pool.slot(slot).is_enemy;
        let radius = self.shell.absorb(is_enemy);
        self.on_radius_change(radius, ui);

        let event = self.pool.recycle(slot);
        self.on_recycled(event, ui);
    }

    /// Radius-change handler, any phase
    fn on_radius_change(&mut self, radius: f32, ui: &mut dyn UiSink) {
        if radius <= self.tuning.min_shell_radius {
            self.game_over(ui);
        }
    }

    /// Recycle handler: score friends, then spawn replacements. Ignored
    /// while game over.
    fn on_recycled(&mut self, event: RecycleEvent, ui: &mut dyn UiSink) {
        if self.phase == GamePhase::GameOver {
            return;
        }

        if !event.was_enemy {
            let gained =
                (self.tuning.score_per_friend as f32 * self.shell.radius()).round() as u32;
            self.total_score += gained;
            ui.set_score(self.total_score);
        }

        self.spawn_bubbles(self.tuning.npc_on_recycle);
    }

    /// Idempotent transition to `GameOver`
    fn game_over(&mut self, ui: &mut dyn UiSink) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        ui.hide_progress();
        ui.show_game_over(self.total_score);
        log::info!("game over with score {}", self.total_score);
    }

    /// Spawn `count` bubbles at validated positions, each independently
    /// 50/50 enemy. Placement and pool failures abort the batch; the next
    /// recycle retries, so a failure costs population, not the session.
    fn spawn_bubbles(&mut self, count: u32) {
        for _ in 0..count {
            let pos = match placement::find_position(
                &mut self.rng,
                &self.shell,
                &self.pool,
                &self.tuning.spawn,
            ) {
                Ok(pos) => pos,
                Err(e) => {
                    log::warn!("spawn skipped: {e}");
                    return;
                }
            };
            let slot = match self.pool.spawn_random(&mut self.rng) {
                Ok(slot) => slot,
                Err(e) => {
                    log::warn!("spawn skipped: {e}");
                    return;
                }
            };
            let is_enemy = self.rng.random_bool(0.5);
            let bubble = self.pool.slot_mut(slot);
            bubble.pos = pos;
            bubble.is_enemy = is_enemy;
        }
    }

    pub fn score(&self) -> u32 {
        self.total_score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn pool(&self) -> &BubblePool {
        &self.pool
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
