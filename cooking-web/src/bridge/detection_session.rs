//! Object detector handle exported to JS
//!
//! tfjs runs COCO-SSD; this handle only tracks the model lifecycle and the
//! latest predictions so the cooking session can cross-check ingredients.

use wasm_bindgen::prelude::*;

use crate::detection::{mapped_ingredient, DetectedObject, DetectionError, DetectionSession};

impl From<DetectionError> for JsValue {
    fn from(err: DetectionError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[wasm_bindgen]
pub struct ObjectDetectionSession {
    session: DetectionSession,
}

impl ObjectDetectionSession {
    pub(crate) fn latest(&self) -> &[DetectedObject] {
        self.session.latest()
    }
}

#[wasm_bindgen]
impl ObjectDetectionSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: DetectionSession::new(),
        }
    }

    #[wasm_bindgen(js_name = beginLoading)]
    pub fn begin_loading(&mut self) -> Result<(), JsValue> {
        self.session.begin_loading()?;
        web_sys::console::log_1(&"⏳ Loading object detector...".into());
        Ok(())
    }

    #[wasm_bindgen(js_name = markReady)]
    pub fn mark_ready(&mut self) -> Result<(), JsValue> {
        self.session.mark_ready()?;
        web_sys::console::log_1(&"✅ Object detector ready".into());
        Ok(())
    }

    #[wasm_bindgen(js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        self.session.is_ready()
    }

    /// Store one frame of predictions as parallel arrays. Returns the number
    /// of detections kept.
    pub fn submit(&mut self, labels: Vec<String>, scores: &[f32]) -> Result<usize, JsValue> {
        Ok(self.session.ingest_parallel(&labels, scores)?.len())
    }

    /// Labels of the latest frame, in detector order
    #[wasm_bindgen(js_name = latestLabels)]
    pub fn latest_labels(&self) -> Vec<String> {
        self.session.latest().iter().map(|d| d.label.clone()).collect()
    }

    /// Ingredient name a detector class stands for, if any
    #[wasm_bindgen(js_name = ingredientFor)]
    pub fn ingredient_for(class: &str) -> Option<String> {
        mapped_ingredient(class).map(str::to_string)
    }

    pub fn teardown(&mut self) {
        self.session.teardown();
        web_sys::console::log_1(&"🛑 Object detector released".into());
    }
}

impl Default for ObjectDetectionSession {
    fn default() -> Self {
        Self::new()
    }
}
