//! Unveil drives a one-page presentation: a timed curtain reveal plays once over a custom video
//! player, then dismisses itself and leaves the player as the only interactive surface.
//!
//! # Components
//!
//! 1. **Reveal sequencer** ([`RevealSequencer`]): a fixed five-stage timeline (500ms, 1500ms,
//!    2500ms, 3500ms, completion at 4500ms) with a single completion callback.
//! 2. **Playback controller** ([`PlaybackController`]): transport operations over one media
//!    session, kept in sync with engine lifecycle notifications.
//! 3. **Host** ([`Presentation`]): mounts both, routes input, dismisses the overlay.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Explicit time**: nothing reads a wall clock. Callers pass the current [`Millis`] and timers
//!   fire only from `advance`, so teardown structurally prevents late callbacks.
//! - **Capability boundaries**: media and fullscreen are reached only through [`MediaEngine`]
//!   and [`FullscreenHost`]; rejections degrade quietly.
//! - **Reconciliation**: local writes are tentative, engine notifications are authoritative
//!   ([`Reconciled`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod playback;
mod presentation;
mod reveal;
mod schedule;

pub use foundation::core::{DEFAULT_MEDIA_SRC, MediaSource, Millis};
pub use foundation::error::{UnveilError, UnveilResult};
pub use playback::controller::{
    CONTROLS_IDLE_TIMEOUT, PlaybackController, PlaybackSnapshot, UNKNOWN_DURATION_RANGE,
    UNMUTE_FALLBACK_VOLUME,
};
pub use playback::engine::{EngineEvent, EngineRequest, FullscreenHost, MediaEngine};
pub use playback::format::{format_progress, format_time};
pub use playback::input::{InputOutcome, Scrubber, TOGGLE_PLAY_KEY, UserInput};
pub use playback::reconcile::{Provenance, Reconciled};
pub use playback::sim::{FullscreenPolicy, SimMedia, SimWindow};
pub use playback::view::PlayerView;
pub use presentation::config::PresentationConfig;
pub use presentation::host::Presentation;
pub use presentation::script::{
    RunOpts, Script, ScriptAction, ScriptStep, TraceEntry, run_script,
};
pub use reveal::sequencer::{REVEAL_TIMELINE, RevealEvent, RevealSequencer, RevealStep};
pub use reveal::stage::{RevealLook, RevealStage};
pub use schedule::observe::{Observers, SubscriptionId};
pub use schedule::timers::{TimerId, TimerQueue};
