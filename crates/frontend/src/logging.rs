//! Browser console logging

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

#[cfg(debug_assertions)]
const LOG_LEVEL: Level = Level::DEBUG;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: Level = Level::INFO;

/// Route `tracing` events to the developer console
pub fn init() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    let result = tracing_subscriber::registry()
        .with(LevelFilter::from_level(LOG_LEVEL))
        .with(fmt_layer)
        .try_init();

    if let Err(e) = result {
        web_sys::console::warn_1(&format!("Logging already initialized: {e}").into());
    }
}
