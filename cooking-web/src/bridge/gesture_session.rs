//! Gesture session handle exported to JS
//!
//! One `GestureSession` per camera feed. Each `update` call parses the
//! landmark buffer, runs the engine and hands every event to the callback
//! as `{ type, progress?, dx?, dy?, x?, y? }`.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;

use super::hand_landmarks::parse_hand;
use crate::gestures::{ConfigError, GestureConfig, GestureEngine, GestureEvent};

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&format!("Gesture config rejected: {}", err))
    }
}

fn set_field(obj: &Object, key: &str, value: JsValue) -> Result<(), JsValue> {
    Reflect::set(obj, &JsValue::from_str(key), &value)?;
    Ok(())
}

/// Plain JS object for one event
fn event_to_js(event: &GestureEvent) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    set_field(&obj, "type", event.as_str().into())?;

    if let GestureEvent::PinchDragProgress { dx, dy, x, y } = *event {
        set_field(&obj, "dx", dx.into())?;
        set_field(&obj, "dy", dy.into())?;
        set_field(&obj, "x", x.into())?;
        set_field(&obj, "y", y.into())?;
    } else if let Some(progress) = event.progress() {
        set_field(&obj, "progress", progress.into())?;
    }

    Ok(obj.into())
}

#[wasm_bindgen]
pub struct GestureSession {
    engine: GestureEngine,
}

#[wasm_bindgen]
impl GestureSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: GestureEngine::new(),
        }
    }

    /// Session with thresholds overridden from a (partial) JSON object
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<GestureSession, JsValue> {
        let config = GestureConfig::from_json(json)?;
        web_sys::console::log_1(&"✅ Gesture session configured".into());
        Ok(Self {
            engine: GestureEngine::with_config(config),
        })
    }

    /// Feed one MediaPipe frame. `num_hands == 0` counts as "no hand".
    pub fn update(
        &mut self,
        flat_data: &[f32],
        num_hands: usize,
        timestamp_ms: f64,
        callback: &Function,
    ) -> Result<(), JsValue> {
        let hand = parse_hand(flat_data, num_hands);
        if hand.is_none() && num_hands > 0 {
            web_sys::console::warn_1(&"⚠️ Malformed hand landmarks, treating as no hand".into());
        }

        let events = self.engine.update_collect(hand.as_ref(), timestamp_ms);
        for event in &events {
            callback.call1(&JsValue::NULL, &event_to_js(event)?)?;
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.engine.is_dragging()
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        Ok(self.engine.config().to_json()?)
    }
}

impl Default for GestureSession {
    fn default() -> Self {
        Self::new()
    }
}
