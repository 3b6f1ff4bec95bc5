//! Cooking Web - Gesture-Controlled Recipe Assistant
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! Camera capture, MediaPipe hand tracking and COCO-SSD inference run in JS.
//! Rust owns gesture recognition, recipe state and the kitchen timer.

pub mod detection;
pub mod gestures;
pub mod recipe;
pub mod timer;

mod bridge;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen handles for JS access
pub use bridge::{
    parse_hand, recipes_json, set_log_level, CookingSessionHandle, CookingTimer, GestureSession,
    ObjectDetectionSession,
};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    bridge::init_logger();
    console_log!("✅ cooking-web {} loaded", env!("CARGO_PKG_VERSION"));
}
