//! Data-driven game balance
//!
//! Every gameplay knob lives here so sessions can be tuned without touching
//! sim code. `Default` carries the shipped balance; overrides load from JSON.

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::sim::bubble::BubbleTemplate;

/// Spawn placement knobs
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnTuning {
    /// Base sampling range for x/y offsets from the shell, inclusive
    pub range: (f32, f32),
    /// Range span multiplier applied once tries exceed the threshold
    pub range_incr: f32,
    /// Minimum clearance from an active bubble, in multiples of its radius
    pub npc_dist: f32,
    /// Minimum clearance from the shell, in multiples of its radius
    pub shell_dist: f32,
    /// Hard cap on sampling attempts before the placement fails
    pub max_attempts: u32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            range: (-5.0, 5.0),
            range_incr: 1.1,
            npc_dist: 3.0,
            shell_dist: 2.0,
            max_attempts: consts::MAX_PLACE_ATTEMPTS,
        }
    }
}

/// Shell lifecycle knobs
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShellTuning {
    /// Radius at the start of each playthrough
    pub initial_radius: f32,
    /// Passive shrink rate, units per second
    pub decay_per_sec: f32,
    /// Radius gained when a friendly bubble is absorbed
    pub friend_growth: f32,
    /// Radius lost when a hostile bubble is absorbed
    pub enemy_shrink: f32,
}

impl Default for ShellTuning {
    fn default() -> Self {
        Self {
            initial_radius: 2.0,
            decay_per_sec: 0.05,
            friend_growth: 0.15,
            enemy_shrink: 0.25,
        }
    }
}

/// Complete session balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Bubbles spawned on every reset
    pub npc_on_start: u32,
    /// Replacement bubbles spawned per recycled bubble
    pub npc_on_recycle: u32,
    /// Shell radius at or below which the session ends
    pub min_shell_radius: f32,
    /// Score per friendly bubble, scaled by shell radius at consumption
    pub score_per_friend: u32,
    /// Pool slot count; must exceed the peak simultaneous bubble count
    pub pool_capacity: usize,
    /// Category prototypes the pool is pre-instantiated from
    pub templates: Vec<BubbleTemplate>,
    pub spawn: SpawnTuning,
    pub shell: ShellTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            npc_on_start: 10,
            npc_on_recycle: 2,
            min_shell_radius: 1.0,
            score_per_friend: 50,
            pool_capacity: consts::POOL_CAPACITY,
            templates: vec![
                BubbleTemplate::new(0.25, 0.6),
                BubbleTemplate::new(0.35, 0.45),
                BubbleTemplate::new(0.5, 0.3),
            ],
            spawn: SpawnTuning::default(),
            shell: ShellTuning::default(),
        }
    }
}

impl Tuning {
    /// Parse a tuning override from JSON
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Sanity-check relationships between knobs. Violations are logged, not
    /// fatal; a generous pool simply hiding a tight one is the documented
    /// failure mode this catches early.
    pub fn validate(&self) -> bool {
        let mut ok = true;
        if self.templates.is_empty() {
            log::warn!("tuning: template set is empty");
            ok = false;
        }
        if self.pool_capacity < self.npc_on_start as usize {
            log::warn!(
                "tuning: pool capacity {} below initial spawn count {}",
                self.pool_capacity,
                self.npc_on_start
            );
            ok = false;
        }
        if self.min_shell_radius >= self.shell.initial_radius {
            log::warn!(
                "tuning: min shell radius {} not below initial radius {}",
                self.min_shell_radius,
                self.shell.initial_radius
            );
            ok = false;
        }
        if self.spawn.range_incr <= 1.0 {
            log::warn!("tuning: spawn range_incr {} will never widen", self.spawn.range_incr);
            ok = false;
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(Tuning::default().validate());
    }

    #[test]
    fn test_tuning_json_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let parsed = Tuning::from_json_str(&json).unwrap();
        assert_eq!(parsed.npc_on_start, tuning.npc_on_start);
        assert_eq!(parsed.templates.len(), tuning.templates.len());
        assert_eq!(parsed.spawn.max_attempts, tuning.spawn.max_attempts);
    }

    #[test]
    fn test_validate_flags_tight_pool() {
        let tuning = Tuning {
            pool_capacity: 4,
            ..Default::default()
        };
        assert!(!tuning.validate());
    }
}
