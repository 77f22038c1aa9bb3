use std::cell::Cell;
use std::rc::Rc;

use crate::foundation::core::Millis;
use crate::foundation::error::UnveilResult;
use crate::playback::controller::PlaybackController;
use crate::playback::engine::{EngineEvent, FullscreenHost, MediaEngine};
use crate::playback::input::{InputOutcome, UserInput};
use crate::presentation::config::PresentationConfig;
use crate::reveal::sequencer::{RevealEvent, RevealSequencer};
use crate::reveal::stage::RevealStage;

/// The page: a reveal overlay on top of the player until the overlay signals completion.
///
/// The two halves share nothing but the clock. Input always reaches the player; the overlay
/// never intercepts pointer or key events.
pub struct Presentation<E: MediaEngine, W: FullscreenHost> {
    overlay: Option<RevealSequencer>,
    overlay_done: Rc<Cell<bool>>,
    player: PlaybackController<E, W>,
    now: Millis,
}

impl<E: MediaEngine, W: FullscreenHost> Presentation<E, W> {
    /// Mount both halves at `now` and start the reveal timeline.
    #[tracing::instrument(skip_all, fields(now = %now))]
    pub fn mount(
        config: &PresentationConfig,
        engine: E,
        window: W,
        now: Millis,
    ) -> UnveilResult<Self> {
        config.validate()?;
        let src = config.media_source()?;
        let player = PlaybackController::new(src, engine, window);

        let overlay_done = Rc::new(Cell::new(false));
        let done = Rc::clone(&overlay_done);
        let mut overlay = RevealSequencer::new();
        overlay.start(now, move || done.set(true))?;

        tracing::info!(src = %player.source(), "presentation mounted");
        Ok(Self {
            overlay: Some(overlay),
            overlay_done,
            player,
            now,
        })
    }

    /// Move the clock to `now`: advance the overlay, dismiss it once complete, then fire any
    /// due player timers. Returns the overlay events produced.
    pub fn advance(&mut self, now: Millis) -> Vec<RevealEvent> {
        self.now = self.now.max(now);
        let events = match self.overlay.as_mut() {
            Some(overlay) => overlay.advance(self.now),
            None => Vec::new(),
        };
        if self.overlay_done.get() && self.overlay.take().is_some() {
            tracing::debug!(at = %self.now, "reveal overlay dismissed");
        }
        self.player.advance(self.now);
        events
    }

    /// Route user input to the player.
    pub fn handle_input(&mut self, input: UserInput) -> InputOutcome {
        self.player.handle_input(self.now, input)
    }

    /// Route an engine or ambient-window notification to the player.
    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        self.player.handle_engine_event(event);
    }

    /// Overlay still rendered.
    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_some()
    }

    /// Stage of the overlay, `None` once dismissed.
    pub fn reveal_stage(&self) -> Option<RevealStage> {
        self.overlay.as_ref().map(RevealSequencer::stage)
    }

    /// Earliest instant at which [`Presentation::advance`] has work to do.
    pub fn next_deadline(&self) -> Option<Millis> {
        let overlay = self.overlay.as_ref().and_then(RevealSequencer::next_deadline);
        match (overlay, self.player.idle_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Last instant seen.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// The player.
    pub fn player(&self) -> &PlaybackController<E, W> {
        &self.player
    }

    /// The player, mutably.
    pub fn player_mut(&mut self) -> &mut PlaybackController<E, W> {
        &mut self.player
    }

    /// Tear the page down: pending reveal transitions and the idle timer are cancelled.
    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(mut overlay) = self.overlay.take() {
            overlay.cancel();
        }
        self.player.teardown();
    }
}

impl<E: MediaEngine, W: FullscreenHost> Drop for Presentation<E, W> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/presentation/host.rs"]
mod tests;
