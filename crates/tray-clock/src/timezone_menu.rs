//! Fixed tray menu entries.
//!
//! Menu items are created with these ids, so events can be mapped back to
//! a selection without holding on to the items.

use tray_clock_core::LOCAL_TIMEZONE_ID;

/// One selectable timezone in the tray menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneOption {
    /// Menu item id.
    pub menu_id: &'static str,
    /// Menu item label.
    pub label: &'static str,
    /// Timezone database key or the local sentinel.
    pub timezone_id: &'static str,
}

/// Timezone entries in menu order.
pub const TIMEZONE_OPTIONS: [TimezoneOption; 5] = [
    TimezoneOption {
        menu_id: "tz-local",
        label: "Local time",
        timezone_id: LOCAL_TIMEZONE_ID,
    },
    TimezoneOption {
        menu_id: "tz-ho-chi-minh",
        label: "Ho Chi Minh time",
        timezone_id: "Asia/Ho_Chi_Minh",
    },
    TimezoneOption {
        menu_id: "tz-sydney",
        label: "Sydney time",
        timezone_id: "Australia/Sydney",
    },
    TimezoneOption {
        menu_id: "tz-guadalajara",
        label: "Guadalajara time",
        timezone_id: "America/Mexico_City",
    },
    TimezoneOption {
        menu_id: "tz-san-francisco",
        label: "San Francisco time",
        timezone_id: "America/Los_Angeles",
    },
];

/// Quit item id.
pub const QUIT_MENU_ID: &str = "quit";
/// Quit item label.
pub const QUIT_LABEL: &str = "Quit";

/// Find the timezone entry for a menu item id.
pub fn option_for_menu_id(menu_id: &str) -> Option<&'static TimezoneOption> {
    TIMEZONE_OPTIONS
        .iter()
        .find(|option| option.menu_id == menu_id)
}
