//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod bubble;
pub mod placement;
pub mod pool;
pub mod session;
pub mod shell;

pub use bubble::{Bubble, BubbleTemplate, ShellBound};
pub use placement::{find_position, is_distant};
pub use pool::{BubblePool, RecycleEvent};
pub use session::{GamePhase, Session, TickInput};
pub use shell::Shell;

/// Recoverable simulation failures.
///
/// Both variants abort a single spawn, never the session: the controller
/// logs them and retries on a later recycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// `spawn_random` found no inactive slot; pool capacity is too small
    /// for the configured spawn pressure.
    #[error("bubble pool exhausted")]
    PoolExhausted,
    /// Rejection sampling hit the attempt cap without finding a position
    /// that satisfies the distance predicate.
    #[error("no valid spawn position after {attempts} attempts")]
    PlacementUnsatisfiable { attempts: u32 },
}
