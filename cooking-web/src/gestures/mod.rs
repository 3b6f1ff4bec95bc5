//! Gestures module - hand pose and pinch-drag recognition
//!
//! Re-exports only. All logic in submodules.

mod config;
mod engine;
mod events;
mod hold;
mod landmarks;
mod pinch;
mod pose;

pub use config::{ConfigError, GestureConfig};
pub use engine::GestureEngine;
pub use events::{FlickDirection, GestureEvent, SwipeDirection};
pub use hold::{HoldOutcome, HoldPhase, HoldTracker, HoldUpdate, MIN_PROGRESS};
pub use landmarks::{
    HandLandmark, HandSnapshot, LANDMARK_COUNT,
    WRIST, THUMB_MCP, THUMB_TIP, INDEX_MCP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_TIP, RING_MCP, RING_TIP, PINKY_MCP, PINKY_TIP,
};
pub use pinch::{PinchDrag, PinchRelease};
pub use pose::{is_fist, is_open_palm, is_pinching, is_thumbs_up};
