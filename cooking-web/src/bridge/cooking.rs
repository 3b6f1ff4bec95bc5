//! Recipe session and kitchen timer handles exported to JS

use wasm_bindgen::prelude::*;

use super::detection_session::ObjectDetectionSession;
use crate::detection::DetectedObject;
use crate::recipe::{Catalog, CatalogError, CookingSession, DetectionConfig};
use crate::timer::CountdownTimer;

impl From<CatalogError> for JsValue {
    fn from(err: CatalogError) -> Self {
        JsValue::from_str(&format!("Recipe catalog error: {}", err))
    }
}

fn to_indices(indices: Vec<usize>) -> Vec<u32> {
    indices.into_iter().map(|i| i as u32).collect()
}

/// All bundled recipes as a JSON array, for the overview page
#[wasm_bindgen(js_name = recipesJson)]
pub fn recipes_json() -> Result<String, JsValue> {
    let catalog = Catalog::shared()?;
    serde_json::to_string(catalog.recipes())
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

#[wasm_bindgen(js_name = CookingSession)]
pub struct CookingSessionHandle {
    session: CookingSession,
    detection: DetectionConfig,
}

#[wasm_bindgen(js_class = CookingSession)]
impl CookingSessionHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(recipe_id: &str) -> Result<CookingSessionHandle, JsValue> {
        let catalog = Catalog::shared()?;
        let recipe = catalog
            .get(recipe_id)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown recipe id '{}'", recipe_id)))?;

        web_sys::console::log_1(&format!("🍳 Cooking: {}", recipe.title).into());
        Ok(Self {
            session: CookingSession::new(recipe.clone()),
            detection: DetectionConfig::default(),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.session.recipe().title.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn step(&self) -> usize {
        self.session.step()
    }

    #[wasm_bindgen(getter, js_name = stepCount)]
    pub fn step_count(&self) -> usize {
        self.session.step_count()
    }

    #[wasm_bindgen(js_name = stepText)]
    pub fn step_text(&self) -> String {
        self.session.step_text().to_string()
    }

    #[wasm_bindgen(js_name = nextStep)]
    pub fn next_step(&mut self) -> bool {
        self.session.next_step()
    }

    #[wasm_bindgen(js_name = previousStep)]
    pub fn previous_step(&mut self) -> bool {
        self.session.previous_step()
    }

    #[wasm_bindgen(js_name = isLastStep)]
    pub fn is_last_step(&self) -> bool {
        self.session.is_last_step()
    }

    #[wasm_bindgen(js_name = ingredientNames)]
    pub fn ingredient_names(&self) -> Vec<String> {
        self.session
            .recipe()
            .ingredients
            .iter()
            .map(|i| i.name.clone())
            .collect()
    }

    #[wasm_bindgen(js_name = toggleIngredient)]
    pub fn toggle_ingredient(&mut self, index: usize) -> Option<bool> {
        self.session.toggle_ingredient(index)
    }

    #[wasm_bindgen(js_name = isChecked)]
    pub fn is_checked(&self, index: usize) -> bool {
        self.session.is_checked(index)
    }

    #[wasm_bindgen(js_name = allChecked)]
    pub fn all_checked(&self) -> bool {
        self.session.all_checked()
    }

    #[wasm_bindgen(js_name = setMinScore)]
    pub fn set_min_score(&mut self, min_score: f32) {
        self.detection.min_score = min_score.clamp(0.0, 1.0);
    }

    /// Check off ingredients seen in the detector's latest frame. Returns
    /// the indices that were newly checked.
    #[wasm_bindgen(js_name = crossCheck)]
    pub fn cross_check(&mut self, detector: &ObjectDetectionSession) -> Vec<u32> {
        to_indices(self.session.cross_check(detector.latest(), self.detection.min_score))
    }

    /// Same as `crossCheck` for predictions that did not go through a
    /// detector session
    #[wasm_bindgen(js_name = crossCheckLabels)]
    pub fn cross_check_labels(&mut self, labels: Vec<String>, scores: &[f32]) -> Result<Vec<u32>, JsValue> {
        if labels.len() != scores.len() {
            return Err(JsValue::from_str("labels and scores differ in length"));
        }
        let detections: Vec<DetectedObject> = labels
            .into_iter()
            .zip(scores)
            .map(|(label, &score)| DetectedObject::new(label, score))
            .collect();
        Ok(to_indices(self.session.cross_check(&detections, self.detection.min_score)))
    }
}

#[wasm_bindgen]
pub struct CookingTimer {
    timer: CountdownTimer,
}

#[wasm_bindgen]
impl CookingTimer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            timer: CountdownTimer::new(),
        }
    }

    #[wasm_bindgen(js_name = addSeconds)]
    pub fn add_seconds(&mut self, delta: f64) {
        self.timer.add_seconds(delta);
    }

    #[wasm_bindgen(js_name = setTime)]
    pub fn set_time(&mut self, total_secs: f64) {
        self.timer.set_time(total_secs);
    }

    pub fn start(&mut self, now_ms: f64) {
        self.timer.start(now_ms);
    }

    pub fn pause(&mut self) {
        self.timer.pause();
    }

    pub fn stop(&mut self) {
        self.timer.stop();
    }

    /// Advance to `now_ms`. True exactly once, when the countdown hits zero.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let tick = self.timer.tick(now_ms);
        if tick.finished {
            web_sys::console::log_1(&"⏰ Timer fertig!".into());
        }
        tick.finished
    }

    #[wasm_bindgen(getter, js_name = remainingSecs)]
    pub fn remaining_secs(&self) -> f64 {
        self.timer.remaining_secs()
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn display(&self) -> String {
        self.timer.display()
    }
}

impl Default for CookingTimer {
    fn default() -> Self {
        Self::new()
    }
}
