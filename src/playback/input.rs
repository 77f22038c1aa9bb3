/// DOM-style key code that toggles playback.
pub const TOGGLE_PLAY_KEY: &str = "Space";

/// User input routed to the playback controller.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UserInput {
    /// Click on the video surface.
    VideoClick,
    /// Play/pause button in the control bar.
    PlayButton,
    /// Position scrubber drag, already constrained to the scrubber range.
    Seek {
        /// Target position in seconds.
        value: f64,
    },
    /// Volume scrubber drag.
    Volume {
        /// Level in `[0, 1]`.
        value: f64,
    },
    /// Mute button.
    MuteButton,
    /// Fullscreen button.
    FullscreenButton,
    /// Key press anywhere in the hosting view.
    Key {
        /// DOM `KeyboardEvent.code`, e.g. `"Space"`.
        code: String,
    },
    /// Pointer movement over the player container.
    PointerMove,
}

impl UserInput {
    /// Key press helper.
    pub fn key(code: impl Into<String>) -> Self {
        Self::Key { code: code.into() }
    }
}

/// What the host should do with the originating platform event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputOutcome {
    /// Suppress the event's default action (page scroll for Space).
    pub default_prevented: bool,
}

/// Range slider model: `[min, max]` with a fixed step.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Scrubber {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Snap increment.
    pub step: f64,
    /// Displayed value.
    pub value: f64,
}

impl Scrubber {
    /// Value for a pointer at `fraction` of the track width, snapped to `step` and kept in range.
    pub fn value_at(&self, fraction: f64) -> f64 {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let raw = self.min + (self.max - self.min) * fraction;
        let snapped = if self.step > 0.0 {
            self.min + ((raw - self.min) / self.step).round() * self.step
        } else {
            raw
        };
        snapped.clamp(self.min, self.max)
    }

    /// Fill fraction of the current value, for drawing the track.
    pub fn fraction(&self) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.min) / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/input.rs"]
mod tests;
