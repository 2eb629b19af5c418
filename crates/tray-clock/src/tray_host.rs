use crate::{AppResult, ClockFrame};

/// Tray capabilities the clock needs from the host.
pub trait TrayHost {
    /// Set the short text shown next to the icon.
    fn set_title(&mut self, title: &str) -> AppResult<()>;

    /// Set the hover tooltip.
    fn set_tooltip(&mut self, tooltip: &str) -> AppResult<()>;

    /// Replace the icon with a PNG-encoded bitmap.
    fn set_icon_png(&mut self, png: &[u8]) -> AppResult<()>;
}

/// Push one frame to the host. A frame without an icon leaves the icon as is.
pub fn apply_frame<H: TrayHost + ?Sized>(host: &mut H, frame: &ClockFrame) -> AppResult<()> {
    host.set_title(&frame.title)?;
    host.set_tooltip(&frame.tooltip)?;

    if let Some(png) = &frame.icon_png {
        host.set_icon_png(png)?;
    }

    Ok(())
}
