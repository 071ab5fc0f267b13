//! Headless demo runner
//!
//! Seeds a session, ticks it until the shell collapses (or a generous tick
//! budget runs out) and logs the final score. Useful for balance tuning
//! and as a smoke test of the full sim loop.

use bubble_shell::consts::SIM_DT;
use bubble_shell::ui::LogUi;
use bubble_shell::{Session, TickInput, Tuning};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let mut ui = LogUi;
    let mut session = Session::new(Tuning::default(), seed, &mut ui);

    let input = TickInput::default();
    let mut ticks: u64 = 0;
    // Ten simulated minutes is plenty for default tuning
    while !session.is_game_over() && ticks < 36_000 {
        session.tick(&input, SIM_DT, &mut ui);
        ticks += 1;
    }

    log::info!(
        "session ended after {:.1}s: score {}, {} bubbles live",
        ticks as f32 * SIM_DT,
        session.score(),
        session.pool().spawned_count()
    );
}
