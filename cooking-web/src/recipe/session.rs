//! Cooking session over one recipe: current step and ingredient checklist

use log::info;

use super::catalog::Recipe;
use crate::detection::{self, DetectedObject};

/// Detections below this score are ignored by the cross-check
pub const DEFAULT_MIN_SCORE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionConfig {
    pub min_score: f32,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self { min_score: DEFAULT_MIN_SCORE }
    }
}

#[derive(Debug, Clone)]
pub struct CookingSession {
    recipe: Recipe,
    step: usize,
    checked: Vec<bool>,
}

impl CookingSession {
    pub fn new(recipe: Recipe) -> Self {
        let checked = vec![false; recipe.ingredients.len()];
        Self { recipe, step: 0, checked }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.recipe.steps.len()
    }

    pub fn step_text(&self) -> &str {
        self.recipe.steps.get(self.step).map(String::as_str).unwrap_or("")
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 >= self.step_count()
    }

    /// Returns false when already on the last step
    pub fn next_step(&mut self) -> bool {
        if self.is_last_step() {
            return false;
        }
        self.step += 1;
        true
    }

    pub fn previous_step(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        true
    }

    /// Flip one checkbox. Returns the new state, `None` for a bad index.
    pub fn toggle_ingredient(&mut self, index: usize) -> Option<bool> {
        let slot = self.checked.get_mut(index)?;
        *slot = !*slot;
        Some(*slot)
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    pub fn checked_count(&self) -> usize {
        self.checked.iter().filter(|&&c| c).count()
    }

    pub fn all_checked(&self) -> bool {
        self.checked.iter().all(|&c| c)
    }

    /// Check off every ingredient seen by the camera. Returns the indices
    /// that were newly checked on this call.
    pub fn cross_check(&mut self, detections: &[DetectedObject], min_score: f32) -> Vec<usize> {
        let confident: Vec<&DetectedObject> =
            detections.iter().filter(|d| d.score >= min_score).collect();
        if confident.is_empty() {
            return Vec::new();
        }

        let mut newly = Vec::new();
        for (index, ingredient) in self.recipe.ingredients.iter().enumerate() {
            if self.checked[index] {
                continue;
            }
            let seen = confident.iter().any(|d| {
                let by_class = ingredient
                    .detect_class
                    .as_deref()
                    .is_some_and(|class| class.eq_ignore_ascii_case(&d.label));
                by_class || detection::matches(&d.label, &ingredient.name)
            });
            if seen {
                self.checked[index] = true;
                newly.push(index);
            }
        }

        if !newly.is_empty() {
            info!("recipe {}: detected {} ingredient(s)", self.recipe.id, newly.len());
        }
        newly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Catalog;

    fn session(id: &str) -> CookingSession {
        let catalog = Catalog::builtin().unwrap();
        CookingSession::new(catalog.get(id).unwrap().clone())
    }

    #[test]
    fn test_step_navigation_is_clamped() {
        let mut s = session("2");
        assert_eq!(s.step(), 0);
        assert!(!s.previous_step());
        assert!(s.step_text().starts_with("Den Apfel"));

        for _ in 0..4 {
            assert!(s.next_step());
        }
        assert!(s.is_last_step());
        assert!(!s.next_step());
        assert_eq!(s.step(), 4);
        assert_eq!(s.step_text(), "Pur servieren");

        assert!(s.previous_step());
        assert_eq!(s.step(), 3);
    }

    #[test]
    fn test_toggle_ingredient() {
        let mut s = session("2");
        assert_eq!(s.toggle_ingredient(1), Some(true));
        assert!(s.is_checked(1));
        assert_eq!(s.toggle_ingredient(1), Some(false));
        assert_eq!(s.toggle_ingredient(42), None);
        assert!(!s.is_checked(42));

        for i in 0..3 {
            s.toggle_ingredient(i);
        }
        assert!(s.all_checked());
        assert_eq!(s.checked_count(), 3);
    }

    #[test]
    fn test_cross_check_by_detect_class_and_mapping() {
        let mut s = session("1");
        let detections = vec![
            DetectedObject::new("apple", 0.9),
            DetectedObject::new("bottle", 0.6),
            DetectedObject::new("banana", 0.95),
        ];
        // "Apfel" via detect_class, "geschmacksneutrales Öl" via both
        assert_eq!(s.cross_check(&detections, DEFAULT_MIN_SCORE), vec![0, 7]);
        assert!(s.is_checked(0) && s.is_checked(7));

        // nothing new on the second pass
        assert!(s.cross_check(&detections, DEFAULT_MIN_SCORE).is_empty());
    }

    #[test]
    fn test_cross_check_ignores_low_scores() {
        let mut s = session("2");
        let detections = vec![
            DetectedObject::new("orange", 0.49),
            DetectedObject::new("banana", 0.5),
        ];
        assert_eq!(s.cross_check(&detections, DEFAULT_MIN_SCORE), vec![2]);
        assert!(!s.is_checked(0));
    }

    #[test]
    fn test_cross_check_substring_without_detect_class() {
        let mut s = CookingSession::new(crate::recipe::Recipe {
            id: "t".to_string(),
            title: "Test".to_string(),
            prep_time: String::new(),
            servings: 1,
            difficulty: String::new(),
            category: String::new(),
            image: String::new(),
            ingredients: vec![crate::recipe::Ingredient {
                name: "Karotten, geraspelt".to_string(),
                detect_class: None,
            }],
            steps: vec!["Raspeln".to_string()],
        });
        assert_eq!(s.cross_check(&[DetectedObject::new("carrot", 0.8)], 0.5), vec![0]);
        assert!(s.is_last_step());
    }
}
