//! Console Logger
//!
//! `log` backend that writes records to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record.level(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_line(level: Level, message: &str) -> String {
    format!("{:<5} {}", level, message)
}

/// Install the console logger. Debug builds log at `Debug`, release at `Info`.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    match log::set_logger(&LOGGER) {
        Ok(()) => log::set_max_level(level),
        Err(e) => {
            let message = format!("[LOG] logger already installed: {}", e);
            web_sys::console::warn_1(&message.into());
        }
    }
}
