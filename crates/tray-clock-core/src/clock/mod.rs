mod formatter;
mod time_source;
mod timezone;

pub use {
    formatter::{format_time, format_time_at},
    time_source::{SystemClock, TimeSource},
    timezone::{LOCAL_TIMEZONE_ID, Timezone},
};
