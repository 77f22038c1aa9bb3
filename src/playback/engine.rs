use crate::foundation::core::MediaSource;
use crate::foundation::error::UnveilResult;

/// Outbound capability boundary to the media decode/render pipeline.
///
/// Requests are fire-and-forget: their outcome is observed later through [`EngineEvent`]s.
/// `play` may be rejected by the platform (autoplay policy, missing data).
pub trait MediaEngine {
    /// Point the engine at a resource.
    fn load(&mut self, src: &MediaSource);
    /// Start or resume playback.
    fn play(&mut self) -> UnveilResult<()>;
    /// Pause playback.
    fn pause(&mut self);
    /// Move the playhead; the engine may clamp to `[0, duration]`.
    fn set_position(&mut self, secs: f64);
    /// Set the output level in `[0, 1]`.
    fn set_volume(&mut self, level: f64);
}

/// Ambient window/document fullscreen state.
///
/// Fullscreen can also be left by mechanisms outside the controller (platform escape gesture),
/// which is why [`FullscreenHost::is_fullscreen`] is the only authoritative source.
pub trait FullscreenHost {
    /// Ask for the player container to go fullscreen.
    fn request_fullscreen(&mut self) -> UnveilResult<()>;
    /// Ask to leave fullscreen.
    fn exit_fullscreen(&mut self) -> UnveilResult<()>;
    /// Current ambient state.
    fn is_fullscreen(&self) -> bool;
}

/// Lifecycle notification emitted by the engine or the ambient window.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineEvent {
    /// Playhead moved.
    TimeUpdate {
        /// Position in seconds.
        time: f64,
    },
    /// Metadata is available.
    LoadedMetadata {
        /// Total length in seconds; non-finite for unbounded streams.
        duration: f64,
    },
    /// Playback stalled waiting for data.
    Waiting,
    /// Playback (re)started after a stall or a play request.
    Playing,
    /// Natural end of media.
    Ended,
    /// Ambient fullscreen state changed.
    FullscreenChange,
}

/// Outbound request as issued by the controller. Used by recording engines and traces.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineRequest {
    /// [`MediaEngine::load`].
    Load {
        /// Location requested.
        src: String,
    },
    /// [`MediaEngine::play`].
    Play,
    /// [`MediaEngine::pause`].
    Pause,
    /// [`MediaEngine::set_position`].
    SetPosition {
        /// Target in seconds.
        secs: f64,
    },
    /// [`MediaEngine::set_volume`].
    SetVolume {
        /// Level in `[0, 1]`.
        level: f64,
    },
    /// [`FullscreenHost::request_fullscreen`].
    RequestFullscreen,
    /// [`FullscreenHost::exit_fullscreen`].
    ExitFullscreen,
}
