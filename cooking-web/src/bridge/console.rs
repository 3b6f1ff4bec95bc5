//! Browser console logging through `wasm-logger`

use log::LevelFilter;
use wasm_bindgen::prelude::*;

/// Install the console logger at Info. The backend itself accepts every
/// level so `setLogLevel` can raise verbosity later.
pub fn init_logger() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    log::set_max_level(LevelFilter::Info);
}

/// Change verbosity from JS: "error", "warn", "info", "debug", "trace" or "off"
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = parse_level(level)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown log level '{}'", level)))?;
    log::set_max_level(filter);
    Ok(())
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}
