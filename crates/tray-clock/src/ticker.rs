//! Once-per-second clock refresh.
//!
//! Each tick reads the selected timezone, formats the time, renders the
//! seconds ring and hands the resulting frame to the UI thread.

use crate::{AppResult, ClockFrame, SecondsCounter, TrayCommand, TrayCommandSink};

use std::time::Duration;

use tokio::{
    sync::watch,
    time::{self, MissedTickBehavior},
};
use tracing::{error, info, instrument, trace};
use tray_clock_core::{ProgressIconRenderer, TimeSource, Timezone, format_time_at};

/// Interval between clock refreshes.
pub(crate) const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Produces a [`ClockFrame`] per tick and sends it to the tray.
pub struct Ticker<S, T> {
    timezone_rx: watch::Receiver<Timezone>,
    counter: SecondsCounter,
    renderer: Option<ProgressIconRenderer>,
    tray_sink: S,
    time_source: T,
}

impl<S: TrayCommandSink, T: TimeSource> Ticker<S, T> {
    /// Create a ticker. `renderer` is `None` when the progress ring is off.
    pub fn new(
        timezone_rx: watch::Receiver<Timezone>,
        renderer: Option<ProgressIconRenderer>,
        tray_sink: S,
        time_source: T,
    ) -> Self {
        Self {
            timezone_rx,
            counter: SecondsCounter::default(),
            renderer,
            tray_sink,
            time_source,
        }
    }

    /// Seconds counter as of the next tick.
    pub fn counter(&self) -> SecondsCounter {
        self.counter
    }

    /// Build the frame for the current instant and advance the counter.
    ///
    /// Icon rendering failures are logged and produce a frame without an
    /// icon, so the tray keeps its previous one.
    pub fn tick(&mut self) -> ClockFrame {
        let timezone = *self.timezone_rx.borrow_and_update();
        let title = format_time_at(&timezone, self.time_source.now());
        let tooltip = ClockFrame::tooltip_for(timezone.id());

        let fraction = self.counter.fraction();
        let icon_png = self
            .renderer
            .as_ref()
            .and_then(|renderer| match renderer.render_png(fraction) {
                Ok(png) => Some(png),
                Err(e) => {
                    error!(fraction = fraction, error = ?e, "Failed to render progress icon");
                    None
                }
            });

        self.counter.advance();

        ClockFrame {
            title,
            tooltip,
            icon_png,
        }
    }

    /// Tick every [`TICK_PERIOD`] until shutdown is signalled or the tray
    /// stops accepting commands.
    #[instrument(skip_all)]
    pub async fn run(mut self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let mut interval = time::interval(TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!("Ticker started");

        loop {
            tokio::select! {
                biased;

                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        info!("Ticker shutting down");
                        break;
                    }
                }

                _ = interval.tick() => {
                    let second = self.counter().value();
                    let frame = self.tick();
                    trace!(title = %frame.title, second = second, "Tick");

                    if let Err(e) = self.tray_sink.send_command(TrayCommand::Render(frame)) {
                        error!(error = ?e, "Tray no longer accepting updates, stopping ticker");
                        break;
                    }
                }
            }
        }

        Ok(())
    }
}
