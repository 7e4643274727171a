#![doc = include_str!("../README.md")]

pub mod bindings;
mod builder;
mod component;
mod description;
mod error;
pub mod prelude;
mod reference;
mod remove;
mod report;
mod select;
mod tools;

/// Sends traces to the browser console.
#[cfg(feature = "diagnostics")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = setupLogging)]
pub fn setup_logging() {
    use tracing_subscriber_wasm::MakeConsoleWriter;

    let max_level = if cfg!(feature = "max_level_info") {
        tracing::Level::INFO
    } else if cfg!(feature = "max_level_debug") {
        tracing::Level::DEBUG
    } else {
        tracing::Level::TRACE
    };
    let result = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(MakeConsoleWriter::default())
        .without_time()
        .with_ansi(false)
        .with_line_number(true)
        .with_file(true)
        .with_target(false)
        .try_init();
    match result {
        Ok(()) => tracing::info!(version = env!("CARGO_PKG_VERSION"), %max_level, "Logging enabled"),
        Err(error) => tracing::warn!("Logging was already set up: {error}"),
    }
}
