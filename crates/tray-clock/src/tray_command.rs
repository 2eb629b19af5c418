use crate::{AppError, AppResult, ClockFrame};

use std::{panic::Location, sync::mpsc};

use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`),
/// so all tray mutations and process lifecycle events flow through this enum.
#[derive(Debug, Clone)]
pub enum TrayCommand {
    /// Show a new title, tooltip and optionally icon.
    Render(ClockFrame),
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}

/// Destination for [`TrayCommand`]s.
///
/// Implemented for the `tao` event loop proxy in the app and for a plain
/// channel sender in tests.
pub trait TrayCommandSink {
    /// Deliver a command to the UI thread.
    fn send_command(&self, command: TrayCommand) -> AppResult<()>;
}

impl TrayCommandSink for EventLoopProxy<TrayCommand> {
    #[track_caller]
    fn send_command(&self, command: TrayCommand) -> AppResult<()> {
        self.send_event(command)
            .map_err(|_| AppError::ChannelSendFailed {
                message: "Event loop closed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl TrayCommandSink for mpsc::Sender<TrayCommand> {
    #[track_caller]
    fn send_command(&self, command: TrayCommand) -> AppResult<()> {
        self.send(command).map_err(|_| AppError::ChannelSendFailed {
            message: "Tray command receiver dropped".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
