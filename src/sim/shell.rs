//! The shrinking shell the player protects
//!
//! The shell loses radius every tick and is fed back by absorbing friendly
//! bubbles. Radius changes are reported synchronously through return
//! values; the session reacts to them within the same tick.

use glam::Vec2;

use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Shell {
    pos: Vec2,
    radius: f32,
    initial_radius: f32,
    min_radius: f32,
    decay_per_sec: f32,
    friend_growth: f32,
    enemy_shrink: f32,
}

impl Shell {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::ZERO,
            radius: tuning.shell.initial_radius,
            initial_radius: tuning.shell.initial_radius,
            min_radius: tuning.min_shell_radius,
            decay_per_sec: tuning.shell.decay_per_sec,
            friend_growth: tuning.shell.friend_growth,
            enemy_shrink: tuning.shell.enemy_shrink,
        }
    }

    /// Restore initial radius and position for a fresh playthrough
    pub fn reset(&mut self) {
        self.radius = self.initial_radius;
        self.pos = Vec2::ZERO;
    }

    /// Advance one tick of passive decay. Returns the new radius when it
    /// changed, which it does every tick with a nonzero decay rate.
    pub fn update(&mut self, dt: f32) -> Option<f32> {
        let decayed = (self.radius - self.decay_per_sec * dt).max(0.0);
        if decayed == self.radius {
            return None;
        }
        self.radius = decayed;
        Some(self.radius)
    }

    /// Consume a bubble: friends feed the shell, enemies eat into it.
    /// Returns the new radius.
    pub fn absorb(&mut self, is_enemy: bool) -> f32 {
        if is_enemy {
            self.radius = (self.radius - self.enemy_shrink).max(0.0);
        } else {
            self.radius += self.friend_growth;
        }
        self.radius
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Fraction of the shrink elapsed toward the game-over threshold,
    /// clamped to [0, 1]
    pub fn decrease_progress(&self) -> f32 {
        let span = self.initial_radius - self.min_radius;
        if span <= 0.0 {
            return 1.0;
        }
        ((self.initial_radius - self.radius) / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    #[test]
    fn test_shell_decays_each_tick() {
        let mut shell = Shell::new(&Tuning::default());
        let start = shell.radius();
        let changed = shell.update(SIM_DT);
        assert!(changed.is_some());
        assert!(shell.radius() < start);
    }

    #[test]
    fn test_absorb_friend_grows_enemy_shrinks() {
        let mut shell = Shell::new(&Tuning::default());
        let start = shell.radius();
        shell.absorb(false);
        assert!(shell.radius() > start);
        let fed = shell.radius();
        shell.absorb(true);
        assert!(shell.radius() < fed);
    }

    #[test]
    fn test_progress_spans_zero_to_one() {
        let mut shell = Shell::new(&Tuning::default());
        assert_eq!(shell.decrease_progress(), 0.0);

        // Drive radius well past the minimum; progress must clamp at 1
        for _ in 0..100_000 {
            shell.update(SIM_DT);
        }
        assert_eq!(shell.decrease_progress(), 1.0);
        assert!(shell.radius() >= 0.0);
    }

    #[test]
    fn test_reset_restores_initial_radius() {
        let mut shell = Shell::new(&Tuning::default());
        for _ in 0..600 {
            shell.update(SIM_DT);
        }
        shell.reset();
        assert_eq!(shell.radius(), Tuning::default().shell.initial_radius);
        assert_eq!(shell.decrease_progress(), 0.0);
    }
}
