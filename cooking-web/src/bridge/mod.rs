//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod console;
mod cooking;
mod detection_session;
mod gesture_session;
mod hand_landmarks;

pub use console::{init_logger, set_log_level};
pub use cooking::{recipes_json, CookingSessionHandle, CookingTimer};
pub use detection_session::ObjectDetectionSession;
pub use gesture_session::GestureSession;
pub use hand_landmarks::parse_hand;
