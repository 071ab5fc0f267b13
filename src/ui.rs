//! UI sink interfaces
//!
//! The session never draws anything; it reports score, shrink progress and
//! game-over through this trait. Frontends implement it, tests record it.

/// Receiver for session-driven UI updates.
///
/// `set_score`/`set_progress` target the in-game progress bar;
/// `show_game_over` targets the popup that offers a restart (the popup's
/// restart button maps to calling [`crate::Session::restart`]).
pub trait UiSink {
    fn set_score(&mut self, score: u32);
    fn set_progress(&mut self, progress: f32);
    fn show_progress(&mut self);
    fn hide_progress(&mut self);
    fn show_game_over(&mut self, final_score: u32);
}

/// Sink that drops every update (headless runs, benchmarks)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullUi;

impl UiSink for NullUi {
    fn set_score(&mut self, _score: u32) {}
    fn set_progress(&mut self, _progress: f32) {}
    fn show_progress(&mut self) {}
    fn hide_progress(&mut self) {}
    fn show_game_over(&mut self, _final_score: u32) {}
}

/// Sink that mirrors updates to the log, used by the demo binary
#[derive(Debug, Default, Clone, Copy)]
pub struct LogUi;

impl UiSink for LogUi {
    fn set_score(&mut self, score: u32) {
        log::debug!("score: {score}");
    }

    fn set_progress(&mut self, _progress: f32) {}

    fn show_progress(&mut self) {
        log::info!("progress bar shown");
    }

    fn hide_progress(&mut self) {
        log::info!("progress bar hidden");
    }

    fn show_game_over(&mut self, final_score: u32) {
        log::info!("game over, final score {final_score}");
    }
}
