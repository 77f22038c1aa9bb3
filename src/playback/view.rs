use crate::playback::controller::{PlaybackController, PlaybackSnapshot};
use crate::playback::engine::{FullscreenHost, MediaEngine};
use crate::playback::format::format_progress;
use crate::playback::input::Scrubber;

/// Everything the control surface draws, derived from controller state.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlayerView {
    /// Large centre play glyph.
    pub play_overlay: bool,
    /// Spinner while stalled.
    pub buffering_indicator: bool,
    /// Bottom control bar.
    pub controls: bool,
    /// Accessible label of the play/pause button.
    pub play_label: &'static str,
    /// Accessible label of the mute button.
    pub mute_label: &'static str,
    /// Accessible label of the fullscreen button.
    pub fullscreen_label: &'static str,
    /// `"m:ss / m:ss"`.
    pub time_label: String,
    /// Playhead slider.
    pub position: Scrubber,
    /// Volume slider.
    pub volume: Scrubber,
}

impl PlayerView {
    /// Derive the view from a live controller.
    pub fn of<E: MediaEngine, W: FullscreenHost>(ctl: &PlaybackController<E, W>) -> Self {
        Self::from_parts(&ctl.snapshot(), ctl.position_scrubber(), ctl.volume_scrubber())
    }

    fn from_parts(s: &PlaybackSnapshot, position: Scrubber, volume: Scrubber) -> Self {
        Self {
            play_overlay: !s.is_playing && s.show_controls,
            buffering_indicator: s.is_buffering,
            controls: s.show_controls,
            play_label: if s.is_playing { "Pause" } else { "Play" },
            mute_label: if s.is_muted { "Unmute" } else { "Mute" },
            fullscreen_label: if s.is_fullscreen {
                "Exit fullscreen"
            } else {
                "Enter fullscreen"
            },
            time_label: format_progress(s.current_time, s.duration),
            position,
            volume,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/view.rs"]
mod tests;
