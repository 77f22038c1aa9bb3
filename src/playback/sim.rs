use std::collections::VecDeque;

use crate::foundation::core::{MediaSource, Millis};
use crate::foundation::error::{UnveilError, UnveilResult};
use crate::playback::engine::{EngineEvent, EngineRequest, FullscreenHost, MediaEngine};

/// In-process media engine: advances a playhead on the virtual clock and queues the lifecycle
/// notifications a real element would emit.
#[derive(Debug, Clone)]
pub struct SimMedia {
    duration: Option<f64>,
    position: f64,
    playing: bool,
    stalled: bool,
    level: f64,
    reject_play: bool,
    loaded: Option<MediaSource>,
    requests: Vec<EngineRequest>,
    pending: VecDeque<EngineEvent>,
}

impl SimMedia {
    /// Engine whose media reports `duration_secs` once loaded.
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration: Some(duration_secs.max(0.0)),
            position: 0.0,
            playing: false,
            stalled: false,
            level: 1.0,
            reject_play: false,
            loaded: None,
            requests: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    /// Engine for a stream without a known duration.
    pub fn unbounded() -> Self {
        Self {
            duration: None,
            ..Self::new(0.0)
        }
    }

    /// Reject every `play` request (autoplay policy).
    pub fn with_play_rejected(mut self, reject: bool) -> Self {
        self.reject_play = reject;
        self
    }

    /// Advance the playhead by `dt` if playing and not stalled.
    pub fn tick(&mut self, dt: Millis) {
        if !self.playing || self.stalled || self.loaded.is_none() {
            return;
        }
        self.position += dt.0 as f64 / 1000.0;
        if let Some(d) = self.duration
            && self.position >= d
        {
            self.position = d;
            self.playing = false;
            self.pending.push_back(EngineEvent::TimeUpdate { time: d });
            self.pending.push_back(EngineEvent::Ended);
            return;
        }
        self.pending.push_back(EngineEvent::TimeUpdate {
            time: self.position,
        });
    }

    /// Simulate a network stall.
    pub fn stall(&mut self) {
        if !self.stalled {
            self.stalled = true;
            self.pending.push_back(EngineEvent::Waiting);
        }
    }

    /// Recover from a stall.
    pub fn resume(&mut self) {
        if self.stalled {
            self.stalled = false;
            if self.playing {
                self.pending.push_back(EngineEvent::Playing);
            }
        }
    }

    /// Take queued notifications in emission order.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        self.pending.drain(..).collect()
    }

    /// Every request received so far.
    pub fn requests(&self) -> &[EngineRequest] {
        &self.requests
    }

    /// Playhead in seconds.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Engine-side play state.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Output level currently applied.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Source passed to the last `load`.
    pub fn loaded(&self) -> Option<&MediaSource> {
        self.loaded.as_ref()
    }
}

impl MediaEngine for SimMedia {
    fn load(&mut self, src: &MediaSource) {
        self.requests.push(EngineRequest::Load {
            src: src.as_str().to_owned(),
        });
        self.loaded = Some(src.clone());
        self.position = 0.0;
        self.playing = false;
        self.pending.push_back(EngineEvent::LoadedMetadata {
            duration: self.duration.unwrap_or(f64::INFINITY),
        });
    }

    fn play(&mut self) -> UnveilResult<()> {
        self.requests.push(EngineRequest::Play);
        if self.reject_play {
            return Err(UnveilError::capability("play request denied"));
        }
        if let Some(d) = self.duration
            && self.position >= d
        {
            self.position = 0.0;
        }
        self.playing = true;
        if !self.stalled {
            self.pending.push_back(EngineEvent::Playing);
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.requests.push(EngineRequest::Pause);
        self.playing = false;
    }

    fn set_position(&mut self, secs: f64) {
        self.requests.push(EngineRequest::SetPosition { secs });
        let upper = self.duration.unwrap_or(f64::MAX);
        self.position = secs.clamp(0.0, upper);
        self.pending.push_back(EngineEvent::TimeUpdate {
            time: self.position,
        });
    }

    fn set_volume(&mut self, level: f64) {
        self.requests.push(EngineRequest::SetVolume { level });
        self.level = level;
    }
}

/// How [`SimWindow`] answers fullscreen requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FullscreenPolicy {
    /// Requests succeed and a change notification follows.
    #[default]
    Allow,
    /// Requests are refused immediately.
    Deny,
    /// Requests are accepted but never take effect (late rejection).
    DenyLater,
    /// The capability does not exist.
    Unsupported,
}

/// In-process ambient window with a configurable fullscreen policy.
#[derive(Debug, Clone, Default)]
pub struct SimWindow {
    fullscreen: bool,
    policy: FullscreenPolicy,
    change_pending: bool,
    requests: Vec<EngineRequest>,
}

impl SimWindow {
    /// Windowed, with the given policy.
    pub fn new(policy: FullscreenPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Platform escape gesture: leaves fullscreen without involving the controller.
    pub fn escape(&mut self) {
        if self.fullscreen {
            self.fullscreen = false;
            self.change_pending = true;
        }
    }

    /// Consume the pending change notification, if any.
    pub fn take_change(&mut self) -> Option<EngineEvent> {
        std::mem::take(&mut self.change_pending).then_some(EngineEvent::FullscreenChange)
    }

    /// Every request received so far.
    pub fn requests(&self) -> &[EngineRequest] {
        &self.requests
    }

    fn apply(&mut self, target: bool) -> UnveilResult<()> {
        match self.policy {
            FullscreenPolicy::Allow => {
                if self.fullscreen != target {
                    self.fullscreen = target;
                    self.change_pending = true;
                }
                Ok(())
            }
            FullscreenPolicy::Deny if target => {
                Err(UnveilError::capability("fullscreen denied by policy"))
            }
            FullscreenPolicy::DenyLater if target => Ok(()),
            FullscreenPolicy::Deny | FullscreenPolicy::DenyLater => {
                if self.fullscreen {
                    self.fullscreen = false;
                    self.change_pending = true;
                }
                Ok(())
            }
            FullscreenPolicy::Unsupported => {
                Err(UnveilError::capability("fullscreen unsupported"))
            }
        }
    }
}

impl FullscreenHost for SimWindow {
    fn request_fullscreen(&mut self) -> UnveilResult<()> {
        self.requests.push(EngineRequest::RequestFullscreen);
        self.apply(true)
    }

    fn exit_fullscreen(&mut self) -> UnveilResult<()> {
        self.requests.push(EngineRequest::ExitFullscreen);
        self.apply(false)
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/sim.rs"]
mod tests;
