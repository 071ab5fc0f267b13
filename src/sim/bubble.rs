//! Bubble entities and their category templates

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shell::Shell;

/// Category prototype a pool slot is instantiated from.
///
/// Templates fix the physical shape of a bubble; whether it is friend or
/// enemy is assigned by the session after spawn, not by the template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BubbleTemplate {
    pub radius: f32,
    /// Drift speed toward the shell, units per second
    pub drift_speed: f32,
}

impl BubbleTemplate {
    pub fn new(radius: f32, drift_speed: f32) -> Self {
        Self {
            radius,
            drift_speed,
        }
    }
}

/// Capability of advancing one tick against the shell.
///
/// Friend and enemy bubbles share the same motion; only the session-side
/// scoring effect differs, so the variant set shares one implementation.
pub trait ShellBound {
    /// Advance one tick. Returns true when the entity has reached the shell
    /// and must be consumed this tick.
    fn advance(&mut self, shell: &Shell, dt: f32) -> bool;
}

/// A pooled bubble entity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bubble {
    pub pos: Vec2,
    pub radius: f32,
    pub drift_speed: f32,
    pub is_enemy: bool,
    pub active: bool,
}

impl Bubble {
    /// Inactive slot instantiated from a template
    pub fn from_template(template: &BubbleTemplate) -> Self {
        Self {
            pos: Vec2::ZERO,
            radius: template.radius,
            drift_speed: template.drift_speed,
            is_enemy: false,
            active: false,
        }
    }

    /// True when this bubble overlaps the shell boundary
    pub fn touches(&self, shell: &Shell) -> bool {
        self.pos.distance(shell.pos()) <= shell.radius() + self.radius
    }
}

impl ShellBound for Bubble {
    fn advance(&mut self, shell: &Shell, dt: f32) -> bool {
        let to_shell = shell.pos() - self.pos;
        let dist = to_shell.length();
        if dist > f32::EPSILON {
            let step = self.drift_speed * dt;
            // Don't overshoot the shell center
            self.pos += to_shell / dist * step.min(dist);
        }
        self.touches(shell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::tuning::Tuning;

    fn shell() -> Shell {
        Shell::new(&Tuning::default())
    }

    #[test]
    fn test_bubble_drifts_toward_shell() {
        let shell = shell();
        let mut bubble = Bubble::from_template(&BubbleTemplate::new(0.25, 0.6));
        bubble.pos = Vec2::new(10.0, 0.0);
        bubble.active = true;

        let before = bubble.pos.distance(shell.pos());
        let consumed = bubble.advance(&shell, SIM_DT);
        let after = bubble.pos.distance(shell.pos());

        assert!(!consumed);
        assert!(after < before);
        // Straight-line drift: y stays on the axis through the shell
        assert!(bubble.pos.y.abs() < 1e-6);
    }

    #[test]
    fn test_bubble_consumed_on_contact() {
        let shell = shell();
        let mut bubble = Bubble::from_template(&BubbleTemplate::new(0.25, 0.6));
        // Just inside the contact distance (shell radius 2.0 + bubble 0.25)
        bubble.pos = Vec2::new(2.2, 0.0);
        bubble.active = true;

        assert!(bubble.advance(&shell, SIM_DT));
    }

    #[test]
    fn test_bubble_never_overshoots_center() {
        let shell = shell();
        let mut bubble = Bubble::from_template(&BubbleTemplate::new(0.25, 100.0));
        bubble.pos = Vec2::new(0.5, 0.0);

        bubble.advance(&shell, 1.0);
        assert!(bubble.pos.distance(shell.pos()) < 1e-3);
    }
}
