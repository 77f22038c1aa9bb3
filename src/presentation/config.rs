use std::path::Path;

use crate::foundation::core::MediaSource;
use crate::foundation::error::{UnveilError, UnveilResult};

/// Page-level configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresentationConfig {
    /// Media location; the bundled asset is used when absent.
    #[serde(default)]
    pub media_src: Option<String>,
}

impl PresentationConfig {
    /// Parse from JSON text and validate.
    pub fn from_json_str(s: &str) -> UnveilResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read a JSON file and validate.
    pub fn from_path(path: &Path) -> UnveilResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            UnveilError::Other(anyhow::Error::new(e).context(format!(
                "read config '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&text)
    }

    /// Reject an explicitly empty source.
    pub fn validate(&self) -> UnveilResult<()> {
        if let Some(src) = &self.media_src {
            MediaSource::new(src.as_str())?;
        }
        Ok(())
    }

    /// Configured source, or the fallback asset.
    pub fn media_source(&self) -> UnveilResult<MediaSource> {
        match &self.media_src {
            Some(src) => MediaSource::new(src.as_str()),
            None => Ok(MediaSource::fallback()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/presentation/config.rs"]
mod tests;
