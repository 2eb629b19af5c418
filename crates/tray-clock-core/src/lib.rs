//! Tray-clock Core Library
//!
//! Timezone-aware clock formatting and progress-ring icon rendering for the
//! tray clock, using chrono-tz, tiny-skia and image.
//!
//! # Example
//!
//! ```no_run
//! use tray_clock_core::{CoreResult, format_time, render_progress_icon};
//!
//! fn main() -> CoreResult<()> {
//!     let title = format_time("Australia/Sydney");
//!     let png = render_progress_icon(15.0 / 60.0)?;
//!
//!     println!("{} ({} byte icon)", title, png.len());
//!     Ok(())
//! }
//! ```

mod clock;
mod error;
mod icon;

pub use {
    clock::{LOCAL_TIMEZONE_ID, SystemClock, TimeSource, Timezone, format_time, format_time_at},
    error::ClockError,
    error::Result as CoreResult,
    icon::{ProgressIconRenderer, ProgressIconStyle, render_progress_icon},
};

#[cfg(test)]
mod tests;
