//! System tray icon with timezone menu.
//!
//! Owns the tray icon and its menu: one item per timezone, a separator and
//! Quit. Title, tooltip and icon are updated through [`TrayHost`].

use crate::{AppError, AppResult, ClockFrame, TrayHost, timezone_menu};

use std::{fs, panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{info, instrument, warn};
use tray_clock_core::{LOCAL_TIMEZONE_ID, format_time};
use tray_icon::menu::{Menu, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

/// Clock icon compiled into the binary, so it works regardless of the
/// working directory.
pub(crate) const BUNDLED_ICON: &[u8] = include_bytes!("../assets/clock.ico");

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
}

impl TrayManager {
    /// Create the tray icon showing local time.
    ///
    /// `icon_asset` overrides the bundled clock icon. It is read once; if it
    /// is missing or undecodable the bundled icon is used instead.
    #[track_caller]
    #[instrument]
    pub fn new(icon_asset: Option<&Path>) -> AppResult<Self> {
        let menu = Menu::new();

        for option in &timezone_menu::TIMEZONE_OPTIONS {
            let item = MenuItem::with_id(option.menu_id, option.label, true, None);
            menu.append(&item).map_err(|e| AppError::TrayError {
                reason: format!("Failed to add {} menu item: {}", option.label, e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        menu.append(&PredefinedMenuItem::separator())
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to add menu separator: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let quit_item = MenuItem::with_id(
            timezone_menu::QUIT_MENU_ID,
            timezone_menu::QUIT_LABEL,
            true,
            None,
        );
        menu.append(&quit_item).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add quit menu item: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut builder = TrayIconBuilder::new()
            .with_title(format_time(LOCAL_TIMEZONE_ID))
            .with_tooltip(ClockFrame::tooltip_for(LOCAL_TIMEZONE_ID))
            .with_menu(Box::new(menu));

        if let Some(icon) = Self::startup_icon(icon_asset) {
            builder = builder.with_icon(icon);
        }

        let tray_icon = builder.build().map_err(|e| AppError::TrayError {
            reason: format!("Failed to create tray icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("System tray icon initialized");

        Ok(Self { tray_icon })
    }

    /// Icon shown until the first tick: the configured file, else the bundled icon.
    fn startup_icon(icon_asset: Option<&Path>) -> Option<Icon> {
        if let Some(path) = icon_asset {
            match Self::read_icon_file(path) {
                Ok(icon) => return Some(icon),
                Err(e) => {
                    warn!(path = ?path, error = ?e, "Tray icon asset unavailable, using bundled icon")
                }
            }
        }

        match Self::decode_icon(BUNDLED_ICON) {
            Ok(icon) => Some(icon),
            Err(e) => {
                warn!(error = ?e, "Bundled tray icon unusable, starting without icon");
                None
            }
        }
    }

    #[track_caller]
    fn read_icon_file(path: &Path) -> AppResult<Icon> {
        let bytes = fs::read(path)?;
        Self::decode_icon(&bytes)
    }

    /// Decode encoded image bytes (PNG or ICO) into a tray icon.
    #[track_caller]
    pub(crate) fn decode_icon(bytes: &[u8]) -> AppResult<Icon> {
        let img = image::load_from_memory(bytes).map_err(|e| AppError::TrayError {
            reason: format!("Failed to decode icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl TrayHost for TrayManager {
    fn set_title(&mut self, title: &str) -> AppResult<()> {
        self.tray_icon.set_title(Some(title));
        Ok(())
    }

    #[track_caller]
    fn set_tooltip(&mut self, tooltip: &str) -> AppResult<()> {
        self.tray_icon
            .set_tooltip(Some(tooltip))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn set_icon_png(&mut self, png: &[u8]) -> AppResult<()> {
        let icon = Self::decode_icon(png)?;

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
