use crate::{AppResult, timezone_menu};

use tray_clock_core::Timezone;

/// Commands produced by tray menu activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Show the clock in this timezone from the next tick on.
    SelectTimezone(Timezone),
    /// Request application shutdown.
    Quit,
}

impl AppCommand {
    /// Map a menu item id to a command.
    ///
    /// Returns `Ok(None)` for ids that are not ours. Timezone keys are
    /// resolved here so the ticker only ever sees valid zones.
    #[track_caller]
    pub fn from_menu_id(menu_id: &str) -> AppResult<Option<Self>> {
        if menu_id == timezone_menu::QUIT_MENU_ID {
            return Ok(Some(Self::Quit));
        }

        match timezone_menu::option_for_menu_id(menu_id) {
            Some(option) => Ok(Some(Self::SelectTimezone(Timezone::resolve(
                option.timezone_id,
            )?))),
            None => Ok(None),
        }
    }
}
