use std::path::Path;

use crate::foundation::core::Millis;
use crate::foundation::error::{UnveilError, UnveilResult};
use crate::playback::controller::PlaybackSnapshot;
use crate::playback::engine::EngineEvent;
use crate::playback::format::format_progress;
use crate::playback::input::UserInput;
use crate::playback::sim::{FullscreenPolicy, SimMedia, SimWindow};
use crate::presentation::config::PresentationConfig;
use crate::presentation::host::Presentation;
use crate::reveal::stage::RevealStage;

/// Timed session description driven against the simulated engine and window.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Media length in seconds; `null` for an unbounded stream.
    #[serde(default = "default_media_duration")]
    pub media_duration: Option<f64>,
    /// How the simulated window answers fullscreen requests.
    #[serde(default)]
    pub fullscreen: FullscreenPolicy,
    /// Simulated engine refuses to play.
    #[serde(default)]
    pub reject_play: bool,
    /// Actions sorted by `at_ms`.
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

fn default_media_duration() -> Option<f64> {
    Some(60.0)
}

/// One scripted action.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptStep {
    /// Virtual time from mount.
    pub at_ms: u64,
    /// What happens.
    pub action: ScriptAction,
}

/// Scripted stimulus.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptAction {
    /// User input to the page.
    Input(UserInput),
    /// Notification injected as if the engine had emitted it.
    Engine(EngineEvent),
    /// Engine stalls waiting for data.
    Stall,
    /// Engine recovers from a stall.
    Resume,
    /// Platform escape gesture leaves fullscreen.
    EscapeFullscreen,
}

/// Observable state after a tick in which something changed.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TraceEntry {
    /// Virtual time from mount.
    pub at_ms: u64,
    /// Overlay stage, `None` once dismissed.
    pub overlay: Option<RevealStage>,
    /// Player state.
    pub snapshot: PlaybackSnapshot,
    /// `"m:ss / m:ss"`.
    pub time_label: String,
}

impl std::fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = &self.snapshot;
        let overlay = self
            .overlay
            .map_or_else(|| "-".to_owned(), |st| st.to_string());
        write!(
            f,
            "{:>7}ms overlay={:<8} {} playing={} muted={} volume={:.2} fullscreen={} buffering={} controls={}",
            self.at_ms,
            overlay,
            self.time_label,
            s.is_playing,
            s.is_muted,
            s.volume,
            s.is_fullscreen,
            s.is_buffering,
            s.show_controls,
        )
    }
}

/// Clock settings for [`run_script`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOpts {
    /// Stop after this instant.
    pub until: Millis,
    /// Clock step; also the granularity at which steps and changes are observed.
    pub tick: Millis,
}

impl Default for RunOpts {
    fn default() -> Self {
        Self {
            until: Millis(20_000),
            tick: Millis(100),
        }
    }
}

impl Script {
    /// Parse from JSON text and validate.
    pub fn from_json_str(s: &str) -> UnveilResult<Self> {
        let script: Self = serde_json::from_str(s)?;
        script.validate()?;
        Ok(script)
    }

    /// Read a JSON file and validate.
    pub fn from_path(path: &Path) -> UnveilResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            UnveilError::Other(
                anyhow::Error::new(e).context(format!("read script '{}'", path.display())),
            )
        })?;
        Self::from_json_str(&text)
    }

    /// Steps must be sorted; the media duration must be non-negative when given.
    pub fn validate(&self) -> UnveilResult<()> {
        if !self.steps.windows(2).all(|w| w[0].at_ms <= w[1].at_ms) {
            return Err(UnveilError::validation("script steps must be sorted by at_ms"));
        }
        if let Some(d) = self.media_duration
            && !(d.is_finite() && d >= 0.0)
        {
            return Err(UnveilError::validation(
                "media_duration must be a non-negative number",
            ));
        }
        Ok(())
    }

    /// Built-in walkthrough: wait for the reveal, then exercise every control.
    pub fn demo() -> Self {
        use ScriptAction::*;
        let step = |at_ms, action| ScriptStep { at_ms, action };
        Self {
            media_duration: Some(20.0),
            fullscreen: FullscreenPolicy::Allow,
            reject_play: false,
            steps: vec![
                step(5_000, Input(UserInput::PointerMove)),
                step(5_000, Input(UserInput::key("Space"))),
                step(6_000, Input(UserInput::Seek { value: 3.0 })),
                step(6_500, Input(UserInput::Volume { value: 0.7 })),
                step(7_000, Input(UserInput::MuteButton)),
                step(8_000, Input(UserInput::MuteButton)),
                step(9_000, Input(UserInput::FullscreenButton)),
                step(10_000, EscapeFullscreen),
                step(11_000, Stall),
                step(12_000, Resume),
                step(16_000, Input(UserInput::PointerMove)),
            ],
        }
    }
}

/// Mount a [`Presentation`] over the simulated engine at `t=0` and play `script` against it.
///
/// Returns one entry per tick in which the overlay stage or the player state changed, plus
/// the initial state.
#[tracing::instrument(skip_all, fields(until = %opts.until, tick = %opts.tick))]
pub fn run_script(
    config: &PresentationConfig,
    script: &Script,
    opts: RunOpts,
) -> UnveilResult<Vec<TraceEntry>> {
    script.validate()?;
    if opts.tick == Millis::ZERO {
        return Err(UnveilError::validation("tick must be > 0ms"));
    }

    let media = match script.media_duration {
        Some(d) => SimMedia::new(d),
        None => SimMedia::unbounded(),
    }
    .with_play_rejected(script.reject_play);
    let window = SimWindow::new(script.fullscreen);

    let mut page = Presentation::mount(config, media, window, Millis::ZERO)?;
    let mut trace: Vec<TraceEntry> = Vec::new();
    let mut steps = script.steps.iter().peekable();
    let mut now = Millis::ZERO;

    pump(&mut page);
    loop {
        while let Some(step) = steps.next_if(|s| Millis(s.at_ms) <= now) {
            apply(&mut page, &step.action);
            pump(&mut page);
        }
        record(&page, now, &mut trace);
        if now >= opts.until {
            break;
        }

        let next = now.after(opts.tick).min(opts.until);
        page.player_mut().engine_mut().tick(next.since(now));
        now = next;
        page.advance(now);
        pump(&mut page);
    }

    page.unmount();
    tracing::debug!(entries = trace.len(), "script finished");
    Ok(trace)
}

fn apply(page: &mut Presentation<SimMedia, SimWindow>, action: &ScriptAction) {
    match action {
        ScriptAction::Input(input) => {
            page.handle_input(input.clone());
        }
        ScriptAction::Engine(event) => page.handle_engine_event(*event),
        ScriptAction::Stall => page.player_mut().engine_mut().stall(),
        ScriptAction::Resume => page.player_mut().engine_mut().resume(),
        ScriptAction::EscapeFullscreen => page.player_mut().window_mut().escape(),
    }
}

fn pump(page: &mut Presentation<SimMedia, SimWindow>) {
    let events = page.player_mut().engine_mut().drain_events();
    for ev in events {
        page.handle_engine_event(ev);
    }
    if let Some(ev) = page.player_mut().window_mut().take_change() {
        page.handle_engine_event(ev);
    }
}

fn record(page: &Presentation<SimMedia, SimWindow>, now: Millis, trace: &mut Vec<TraceEntry>) {
    let overlay = page.reveal_stage();
    let snapshot = page.player().snapshot();
    if let Some(last) = trace.last()
        && last.overlay == overlay
        && last.snapshot == snapshot
    {
        return;
    }
    trace.push(TraceEntry {
        at_ms: now.0,
        overlay,
        snapshot,
        time_label: format_progress(snapshot.current_time, snapshot.duration),
    });
}

#[cfg(test)]
#[path = "../../tests/unit/presentation/script.rs"]
mod tests;
