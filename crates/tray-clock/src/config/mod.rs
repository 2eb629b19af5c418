#[allow(clippy::module_inception)]
mod config;
mod display_config;
mod progress_icon_config;

pub(crate) use {
    config::Config, display_config::DisplayConfig, progress_icon_config::ProgressIconConfig,
};

use std::ops::RangeInclusive;

use tray_clock_core::ProgressIconStyle;

pub(crate) const DEFAULT_SHOW_PROGRESS_ICON: bool = true;
/// Accepted progress icon sizes in pixels.
pub(crate) const ICON_SIZE_RANGE: RangeInclusive<u32> = 16..=256;

pub(crate) fn default_show_progress_icon() -> bool {
    DEFAULT_SHOW_PROGRESS_ICON
}

pub(crate) fn default_icon_size() -> u32 {
    ProgressIconStyle::DEFAULT_SIZE
}
