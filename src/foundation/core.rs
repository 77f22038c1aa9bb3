use crate::foundation::error::{UnveilError, UnveilResult};

/// Fallback media location used when no source is configured.
pub const DEFAULT_MEDIA_SRC: &str = "/video.mp4";

/// Instant on the virtual UI clock, in milliseconds from an arbitrary origin.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Origin of the virtual clock.
    pub const ZERO: Self = Self(0);

    /// `self + delta`, saturating at `u64::MAX`.
    pub fn after(self, delta: Millis) -> Self {
        Self(self.0.saturating_add(delta.0))
    }

    /// `self - earlier`, or zero if `earlier` is later than `self`.
    pub fn since(self, earlier: Millis) -> Millis {
        Millis(self.0.saturating_sub(earlier.0))
    }

    /// Value as a [`std::time::Duration`].
    pub fn as_duration(self) -> std::time::Duration {
        std::time::Duration::from_millis(self.0)
    }
}

impl From<std::time::Duration> for Millis {
    fn from(d: std::time::Duration) -> Self {
        Self(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

impl std::fmt::Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Location of the single playable resource (local path or URL).
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MediaSource(String);

impl MediaSource {
    /// Wrap a location, rejecting empty or whitespace-only strings.
    pub fn new(location: impl Into<String>) -> UnveilResult<Self> {
        let location = location.into();
        if location.trim().is_empty() {
            return Err(UnveilError::validation("media source must be non-empty"));
        }
        Ok(Self(location))
    }

    /// The bundled local asset.
    pub fn fallback() -> Self {
        Self(DEFAULT_MEDIA_SRC.to_owned())
    }

    /// Raw location string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for `http://` / `https://` locations.
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }
}

impl Default for MediaSource {
    fn default() -> Self {
        Self::fallback()
    }
}

impl std::fmt::Display for MediaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
