//! Detection module - object detector session and ingredient matching
//!
//! COCO-SSD inference runs in JavaScript (tfjs). Rust tracks the model
//! lifecycle, keeps the latest frame's detections and maps them to recipe
//! ingredients.

mod ingredients;
mod session;

pub use ingredients::{mapped_ingredient, matches, OBJECT_TO_INGREDIENT};
pub use session::{DetectedObject, DetectionError, DetectionSession, ModelState};
