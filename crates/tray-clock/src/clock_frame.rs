/// Everything the tray shows for one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFrame {
    /// Tray title, `HH:MM:SS`.
    pub title: String,
    /// Tray tooltip naming the selected timezone.
    pub tooltip: String,
    /// PNG progress icon. `None` keeps the current tray icon.
    pub icon_png: Option<Vec<u8>>,
}

impl ClockFrame {
    /// Tooltip text for a timezone identifier.
    pub fn tooltip_for(timezone_id: &str) -> String {
        format!("{} timezone", timezone_id)
    }
}
