use crate::{AppCommand, AppResult, TrayCommand, TrayCommandSink};

use std::ops::ControlFlow;

use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, instrument};
use tray_clock_core::Timezone;
use tray_icon::menu::MenuEvent;

/// Menu event handling.
///
/// Runs on the async runtime thread. Publishes timezone selections to the
/// ticker through `timezone_tx` and forwards shutdown to the main thread
/// via `tray_sink` because `TrayIcon` is `!Send` and must remain on the
/// UI thread.
pub struct App<S> {
    pub(crate) tray_sink: S,
    pub(crate) timezone_tx: watch::Sender<Timezone>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl<S: TrayCommandSink> App<S> {
    /// Run the menu event loop until Quit is selected.
    #[instrument(skip(self))]
    pub(crate) async fn run(self) -> AppResult<()> {
        info!("Tray-Clock starting");

        // Tray event forwarding via single persistent blocking task.
        //
        // MenuEvent::receiver() returns a crossbeam_channel::Receiver which
        // HAS blocking recv() -- zero polling, instant response, one thread.
        //
        // Shutdown: when menu_event_rx is dropped (main loop breaks),
        // menu_event_tx.blocking_send() fails, breaking the blocking loop.
        let (menu_event_tx, mut menu_event_rx) = mpsc::channel(32);
        let menu_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if menu_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        while let Some(event) = menu_event_rx.recv().await {
            let command = match AppCommand::from_menu_id(event.id.0.as_str()) {
                Ok(Some(command)) => command,
                Ok(None) => {
                    debug!(menu_id = %event.id.0, "Ignoring unknown menu item");
                    continue;
                }
                Err(e) => {
                    error!(menu_id = %event.id.0, error = ?e, "Failed to resolve menu selection");
                    continue;
                }
            };

            if self.handle_command(command).is_break() {
                break;
            }
        }

        drop(menu_event_rx);

        match tokio::time::timeout(std::time::Duration::from_secs(1), menu_handle).await {
            Ok(Ok(())) => info!("Menu event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Menu event forwarder task panicked"),
            Err(_) => info!(
                "Menu event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        // Also covers the forwarder ending without a Quit.
        self.shutdown_tx.send_replace(true);
        info!("Tray-Clock shut down successfully");

        Ok(())
    }

    /// Apply one menu command.
    #[instrument(skip(self))]
    pub(crate) fn handle_command(&self, command: AppCommand) -> ControlFlow<()> {
        match command {
            AppCommand::SelectTimezone(timezone) => {
                self.timezone_tx.send_replace(timezone);
                info!(timezone = %timezone, "Timezone selected");
                ControlFlow::Continue(())
            }
            AppCommand::Quit => {
                info!("Quit requested from tray menu");
                self.shutdown_tx.send_replace(true);
                if let Err(e) = self.tray_sink.send_command(TrayCommand::Shutdown) {
                    error!(error = ?e, "Failed to send shutdown command");
                }
                ControlFlow::Break(())
            }
        }
    }
}
