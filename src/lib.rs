//! Bubble Shell - simulation core for a shrinking-shell arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pool, shell, placement, session)
//! - `tuning`: Data-driven game balance
//! - `ui`: Sink interfaces the session reports score/progress through
//!
//! The player defends a central shell whose radius shrinks every tick.
//! Friendly and hostile bubbles drift toward it; consuming a friend scores
//! points and feeds the shell, consuming an enemy shrinks it. When the
//! radius falls to the configured minimum the session is over.

pub mod sim;
pub mod tuning;
pub mod ui;

pub use sim::{Session, SimError, TickInput};
pub use tuning::Tuning;
pub use ui::{NullUi, UiSink};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Rejection-sampling tries before the search range starts widening
    pub const SPAWN_TRIES_THRESHOLD: u32 = 100;

    /// Hard ceiling on placement attempts for a single spawn. The widening
    /// loop has no natural termination bound when the play area is
    /// saturated, so attempts past this count fail the placement instead.
    pub const MAX_PLACE_ATTEMPTS: u32 = 10_000;

    /// Default pool capacity. Must stay comfortably above the maximum
    /// simultaneous bubble count the tuning can produce.
    pub const POOL_CAPACITY: usize = 64;
}
