use crate::config::default_show_progress_icon;

use std::path::PathBuf;

use serde::Deserialize;

/// Tray display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Replace the tray icon every second with the seconds progress ring.
    #[serde(default = "default_show_progress_icon")]
    pub show_progress_icon: bool,

    /// Icon file shown at startup instead of the bundled clock icon.
    #[serde(default)]
    pub icon_asset: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_progress_icon: default_show_progress_icon(),
            icon_asset: None,
        }
    }
}
