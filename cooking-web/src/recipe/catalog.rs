//! Recipe catalog
//!
//! Recipes ship inside the module as JSON and are parsed once on load.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUILTIN_RECIPES: &str = include_str!("../../data/recipes.json");

// Parsed bundled catalog (WASM is single-threaded)
thread_local! {
    static SHARED: RefCell<Option<Rc<Catalog>>> = const { RefCell::new(None) };
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid recipe JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("recipe catalog is empty")]
    Empty,
    #[error("recipe {0:?} has no steps")]
    NoSteps(String),
    #[error("duplicate recipe id {0:?}")]
    DuplicateId(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    /// Detector class that recognizes this ingredient directly
    #[serde(default)]
    pub detect_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub prep_time: String,
    pub servings: u32,
    pub difficulty: String,
    pub category: String,
    pub image: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// The recipes bundled with the module
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_RECIPES)
    }

    /// The bundled catalog, parsed on first use and reused afterwards
    pub fn shared() -> Result<Rc<Self>, CatalogError> {
        SHARED.with(|cell| {
            if let Some(catalog) = cell.borrow().as_ref() {
                return Ok(Rc::clone(catalog));
            }
            let catalog = Rc::new(Self::builtin()?);
            *cell.borrow_mut() = Some(Rc::clone(&catalog));
            Ok(catalog)
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        if recipes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for recipe in &recipes {
            if recipe.steps.is_empty() {
                return Err(CatalogError::NoSteps(recipe.id.clone()));
            }
            if !seen.insert(recipe.id.as_str()) {
                return Err(CatalogError::DuplicateId(recipe.id.clone()));
            }
        }

        Ok(Self { recipes })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
