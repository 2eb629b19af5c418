//! Tray-Clock: system tray clock for a selectable timezone with a seconds ring.

mod app;
mod app_command;
mod clock_frame;
mod config;
mod error;
mod seconds_counter;
#[cfg(test)]
mod tests;
mod ticker;
mod timezone_menu;
mod tray_command;
mod tray_host;
mod tray_manager;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    clock_frame::ClockFrame,
    error::{AppError, Result as AppResult},
    seconds_counter::SecondsCounter,
    ticker::Ticker,
    tray_command::{TrayCommand, TrayCommandSink},
    tray_host::{TrayHost, apply_frame},
    tray_manager::TrayManager,
};

use crate::config::Config;

use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy},
};
use tokio::sync::watch;
use tracing::{error, info};
use tray_clock_core::{ProgressIconRenderer, SystemClock, Timezone};

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("tray_clock=debug,tray_clock_core=info")
        .init();

    let config = Config::load();

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new(config.display.icon_asset.as_deref()) {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    // Taken on the first Init event so the runtime starts exactly once.
    let mut startup = Some((config, tray_proxy));

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => match cmd {
                TrayCommand::Render(frame) => {
                    if let Err(e) = apply_frame(&mut tray_manager, &frame) {
                        error!(error = ?e, "Failed to update tray");
                    }
                }
                TrayCommand::Shutdown => {
                    info!("Exiting event loop");
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            },
            Event::NewEvents(StartCause::Init) => {
                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                if let Some((config, tray_proxy)) = startup.take() {
                    spawn_runtime(config, tray_proxy);
                }
            }
            _ => {}
        }
    });
}

/// Start the ticker and menu handler on a tokio runtime thread.
///
/// TrayManager stays on the main thread; the tasks reach it through the
/// event loop proxy.
fn spawn_runtime(config: Config, tray_proxy: EventLoopProxy<TrayCommand>) {
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                error!("Failed to create tokio runtime: {:?}", e);
                std::process::exit(1);
            }
        };

        rt.block_on(async {
            let (timezone_tx, timezone_rx) = watch::channel(Timezone::Local);
            let (shutdown_tx, shutdown_rx) = watch::channel(false);

            let renderer = config
                .display
                .show_progress_icon
                .then(|| ProgressIconRenderer::new(config.icon_style()));

            let ticker = Ticker::new(timezone_rx, renderer, tray_proxy.clone(), SystemClock);

            let app = App {
                tray_sink: tray_proxy,
                timezone_tx,
                shutdown_tx,
            };

            tokio::join!(
                async {
                    if let Err(e) = ticker.run(shutdown_rx).await {
                        error!(error = ?e, "Ticker error");
                    }
                },
                async {
                    if let Err(e) = app.run().await {
                        error!(error = ?e, "App error");
                    }
                }
            );
        });
    });
}
