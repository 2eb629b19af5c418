use crate::config::{ICON_SIZE_RANGE, default_icon_size};

use serde::Deserialize;
use tracing::warn;

/// Progress ring icon configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProgressIconConfig {
    /// Canvas width and height in pixels, within [`ICON_SIZE_RANGE`].
    #[serde(default = "default_icon_size")]
    pub size: u32,
}

impl ProgressIconConfig {
    /// Replace a size outside [`ICON_SIZE_RANGE`] with the default.
    ///
    /// Too small leaves no room for the ring; too large is reallocated every tick.
    pub(crate) fn clamp_to_supported(&mut self) {
        if !ICON_SIZE_RANGE.contains(&self.size) {
            warn!(
                size = self.size,
                min = ICON_SIZE_RANGE.start(),
                max = ICON_SIZE_RANGE.end(),
                "Progress icon size out of range, using default"
            );
            self.size = default_icon_size();
        }
    }
}

impl Default for ProgressIconConfig {
    fn default() -> Self {
        Self {
            size: default_icon_size(),
        }
    }
}
