use crate::foundation::core::{MediaSource, Millis};
use crate::playback::engine::{EngineEvent, FullscreenHost, MediaEngine};
use crate::playback::input::{InputOutcome, Scrubber, TOGGLE_PLAY_KEY, UserInput};
use crate::playback::reconcile::Reconciled;
use crate::schedule::observe::{Observers, SubscriptionId};
use crate::schedule::timers::{TimerId, TimerQueue};

/// Pointer inactivity after which controls hide while playing.
pub const CONTROLS_IDLE_TIMEOUT: Millis = Millis(3000);
/// Level restored on unmute when the stored volume is zero.
pub const UNMUTE_FALLBACK_VOLUME: f64 = 0.5;
/// Position scrubber range used until metadata reports a duration.
pub const UNKNOWN_DURATION_RANGE: f64 = 100.0;

const POSITION_STEP: f64 = 0.1;
const VOLUME_STEP: f64 = 0.01;

/// Read-only view of the cached playback session state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PlaybackSnapshot {
    /// Cached play state (optimistic until the engine says otherwise).
    pub is_playing: bool,
    /// Playhead in seconds.
    pub current_time: f64,
    /// Total length in seconds, `None` until metadata loads.
    pub duration: Option<f64>,
    /// Stored volume in `[0, 1]`; unaffected by muting.
    pub volume: f64,
    /// Output silenced.
    pub is_muted: bool,
    /// Cached fullscreen state.
    pub is_fullscreen: bool,
    /// Stalled waiting for data.
    pub is_buffering: bool,
    /// Control bar visible.
    pub show_controls: bool,
}

/// Transport controller over one media session.
///
/// Owns the engine and the ambient window handle for the lifetime of the view. All state lives
/// on the caller's event loop: time only moves through the `now` passed to
/// [`PlaybackController::pointer_moved`] and [`PlaybackController::advance`].
pub struct PlaybackController<E: MediaEngine, W: FullscreenHost> {
    src: MediaSource,
    engine: E,
    window: W,

    playing: Reconciled<bool>,
    fullscreen: Reconciled<bool>,
    current_time: f64,
    duration: Option<f64>,
    volume: f64,
    output_level: f64,
    muted: bool,
    buffering: bool,
    show_controls: bool,

    now: Millis,
    idle: TimerQueue<()>,
    idle_timer: Option<TimerId>,
    observers: Observers<PlaybackSnapshot>,
    torn_down: bool,
}

impl<E: MediaEngine, W: FullscreenHost> std::fmt::Debug for PlaybackController<E, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("src", &self.src)
            .field("state", &self.snapshot())
            .field("idle_timer", &self.idle_timer)
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

impl<E: MediaEngine, W: FullscreenHost> PlaybackController<E, W> {
    /// Load `src` into `engine` and start with default state: paused, full volume, controls
    /// shown, duration unknown.
    #[tracing::instrument(skip_all, fields(src = %src))]
    pub fn new(src: MediaSource, mut engine: E, window: W) -> Self {
        engine.load(&src);
        let fullscreen = Reconciled::new(window.is_fullscreen());
        Self {
            src,
            engine,
            window,
            playing: Reconciled::new(false),
            fullscreen,
            current_time: 0.0,
            duration: None,
            volume: 1.0,
            output_level: 1.0,
            muted: false,
            buffering: false,
            show_controls: true,
            now: Millis::ZERO,
            idle: TimerQueue::new(),
            idle_timer: None,
            observers: Observers::default(),
            torn_down: false,
        }
    }

    /// Current cached state.
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            is_playing: self.playing.get(),
            current_time: self.current_time,
            duration: self.duration,
            volume: self.volume,
            is_muted: self.muted,
            is_fullscreen: self.fullscreen.get(),
            is_buffering: self.buffering,
            show_controls: self.show_controls,
        }
    }

    /// Observe state changes; called once per operation that changed anything.
    pub fn subscribe(&mut self, f: impl FnMut(&PlaybackSnapshot) + 'static) -> SubscriptionId {
        self.observers.subscribe(f)
    }

    /// Stop observing.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Flip play state: request pause when playing, play otherwise.
    ///
    /// The cached flag flips immediately even if the engine rejects the request; the next
    /// lifecycle notification corrects it.
    #[tracing::instrument(skip(self))]
    pub fn toggle_play(&mut self) {
        if self.torn_down {
            return;
        }
        let before = self.snapshot();
        let was_playing = self.playing.get();
        if was_playing {
            self.engine.pause();
        } else if let Err(e) = self.engine.play() {
            tracing::warn!(error = %e, "play request rejected");
        }
        if self.playing.propose(!was_playing) {
            self.on_play_state_changed();
        }
        self.publish_if_changed(before);
    }

    /// Move the playhead. Range is the scrubber's responsibility; only non-finite values are
    /// dropped.
    #[tracing::instrument(skip(self))]
    pub fn seek(&mut self, target_secs: f64) {
        if self.torn_down {
            return;
        }
        if !target_secs.is_finite() {
            tracing::warn!(target_secs, "ignoring non-finite seek");
            return;
        }
        let before = self.snapshot();
        self.engine.set_position(target_secs);
        self.current_time = target_secs;
        self.publish_if_changed(before);
    }

    /// Set stored and engine volume. Zero mutes; anything else unmutes.
    #[tracing::instrument(skip(self))]
    pub fn set_volume(&mut self, level: f64) {
        if self.torn_down {
            return;
        }
        let level = if level.is_nan() {
            0.0
        } else {
            level.clamp(0.0, 1.0)
        };
        let before = self.snapshot();
        self.volume = level;
        self.send_volume(level);
        self.muted = level == 0.0;
        self.publish_if_changed(before);
    }

    /// Silence output, or restore the stored volume (falling back to
    /// [`UNMUTE_FALLBACK_VOLUME`] when it is zero). The stored volume is never modified.
    #[tracing::instrument(skip(self))]
    pub fn toggle_mute(&mut self) {
        if self.torn_down {
            return;
        }
        let before = self.snapshot();
        if self.muted {
            let restore = if self.volume > 0.0 {
                self.volume
            } else {
                UNMUTE_FALLBACK_VOLUME
            };
            self.send_volume(restore);
            self.muted = false;
        } else {
            self.send_volume(0.0);
            self.muted = true;
        }
        self.publish_if_changed(before);
    }

    /// Ask the ambient window to enter or leave fullscreen.
    ///
    /// A synchronous rejection leaves the flag unchanged. An accepted request flips it
    /// optimistically; [`EngineEvent::FullscreenChange`] has the final word.
    #[tracing::instrument(skip(self))]
    pub fn toggle_fullscreen(&mut self) {
        if self.torn_down {
            return;
        }
        let before = self.snapshot();
        let entering = !self.fullscreen.get();
        let requested = if entering {
            self.window.request_fullscreen()
        } else {
            self.window.exit_fullscreen()
        };
        match requested {
            Ok(()) => {
                self.fullscreen.propose(entering);
            }
            Err(e) => tracing::warn!(error = %e, entering, "fullscreen request rejected"),
        }
        self.publish_if_changed(before);
    }

    /// Apply an engine or ambient-window notification. These always override cached state.
    #[tracing::instrument(skip(self))]
    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        if self.torn_down {
            return;
        }
        let before = self.snapshot();
        match event {
            EngineEvent::TimeUpdate { time } => {
                if time.is_finite() {
                    self.current_time = time.max(0.0);
                }
            }
            EngineEvent::LoadedMetadata { duration } => {
                self.duration = (duration.is_finite() && duration >= 0.0).then_some(duration);
                if self.duration.is_none() {
                    tracing::debug!(duration, "duration unavailable; keeping placeholder range");
                }
            }
            EngineEvent::Waiting => self.buffering = true,
            EngineEvent::Playing => self.buffering = false,
            EngineEvent::Ended => {
                if self.playing.confirm(false) {
                    self.on_play_state_changed();
                }
            }
            EngineEvent::FullscreenChange => {
                let ambient = self.window.is_fullscreen();
                self.fullscreen.confirm(ambient);
            }
        }
        self.publish_if_changed(before);
    }

    /// Pointer activity: show controls and restart the inactivity window.
    pub fn pointer_moved(&mut self, now: Millis) {
        if self.torn_down {
            return;
        }
        self.now = self.now.max(now);
        let before = self.snapshot();
        self.show_controls = true;
        self.rearm_idle_timer();
        self.publish_if_changed(before);
    }

    /// Route a user input. Only the toggle key asks the host to suppress the default action.
    pub fn handle_input(&mut self, now: Millis, input: UserInput) -> InputOutcome {
        if self.torn_down {
            return InputOutcome::default();
        }
        self.now = self.now.max(now);
        match input {
            UserInput::VideoClick | UserInput::PlayButton => self.toggle_play(),
            UserInput::Seek { value } => self.seek(value),
            UserInput::Volume { value } => self.set_volume(value),
            UserInput::MuteButton => self.toggle_mute(),
            UserInput::FullscreenButton => self.toggle_fullscreen(),
            UserInput::Key { code } => {
                if code == TOGGLE_PLAY_KEY {
                    self.toggle_play();
                    return InputOutcome {
                        default_prevented: true,
                    };
                }
            }
            UserInput::PointerMove => self.pointer_moved(now),
        }
        InputOutcome::default()
    }

    /// Fire the inactivity timer if due.
    pub fn advance(&mut self, now: Millis) {
        self.now = self.now.max(now);
        let before = self.snapshot();
        while let Some((id, ())) = self.idle.pop_due(now) {
            if self.idle_timer == Some(id) {
                self.idle_timer = None;
            }
            if self.playing.get() {
                tracing::debug!(at = %id.deadline(), "controls idle; hiding");
                self.show_controls = false;
            }
        }
        self.publish_if_changed(before);
    }

    /// Release the inactivity timer and ignore everything afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.idle_timer = None;
        let dropped = self.idle.cancel_all();
        self.observers.clear();
        tracing::debug!(dropped, "playback controller torn down");
    }

    /// Level last sent to the engine; always `0` while muted.
    pub fn effective_volume(&self) -> f64 {
        self.output_level
    }

    /// Position scrubber: `[0, duration]`, or the placeholder range while unknown.
    pub fn position_scrubber(&self) -> Scrubber {
        Scrubber {
            min: 0.0,
            max: self.duration.unwrap_or(UNKNOWN_DURATION_RANGE),
            step: POSITION_STEP,
            value: self.current_time,
        }
    }

    /// Volume scrubber; shows zero while muted.
    pub fn volume_scrubber(&self) -> Scrubber {
        Scrubber {
            min: 0.0,
            max: 1.0,
            step: VOLUME_STEP,
            value: if self.muted { 0.0 } else { self.volume },
        }
    }

    /// Play-state cell with provenance.
    pub fn playing_state(&self) -> Reconciled<bool> {
        self.playing
    }

    /// Fullscreen cell with provenance.
    pub fn fullscreen_state(&self) -> Reconciled<bool> {
        self.fullscreen
    }

    /// Deadline of the armed inactivity timer.
    pub fn idle_deadline(&self) -> Option<Millis> {
        self.idle_timer.map(TimerId::deadline)
    }

    /// Whether [`PlaybackController::teardown`] ran.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Loaded media source.
    pub fn source(&self) -> &MediaSource {
        &self.src
    }

    /// Underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Underlying engine, mutably (for hosts that pump engine-side simulation).
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Ambient window handle.
    pub fn window(&self) -> &W {
        &self.window
    }

    /// Ambient window handle, mutably.
    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    fn send_volume(&mut self, level: f64) {
        self.engine.set_volume(level);
        self.output_level = level;
    }

    fn rearm_idle_timer(&mut self) {
        if let Some(id) = self.idle_timer.take() {
            self.idle.cancel(id);
        }
        if self.playing.get() {
            let deadline = self.now.after(CONTROLS_IDLE_TIMEOUT);
            self.idle_timer = Some(self.idle.schedule(deadline, ()));
            tracing::debug!(%deadline, "controls idle timer armed");
        }
    }

    // Paused sessions always show controls; entering playback starts a fresh idle window.
    fn on_play_state_changed(&mut self) {
        if !self.playing.get() {
            self.show_controls = true;
        }
        self.rearm_idle_timer();
    }

    fn publish_if_changed(&mut self, before: PlaybackSnapshot) {
        let after = self.snapshot();
        if after != before {
            self.observers.notify(&after);
        }
    }
}

impl<E: MediaEngine, W: FullscreenHost> Drop for PlaybackController<E, W> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/controller.rs"]
mod tests;
