//! Recipe module - bundled catalog and per-recipe cooking session
//!
//! Re-exports only. All logic in submodules.

mod catalog;
mod session;

pub use catalog::{Catalog, CatalogError, Ingredient, Recipe};
pub use session::{CookingSession, DetectionConfig, DEFAULT_MIN_SCORE};
