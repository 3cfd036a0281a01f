// 🏠 Kitchen - The fridge and recipe book owned by one caller
//
// Holds the raw snapshot only. Every query recomputes from scratch, so
// replacing the fridge or the recipes can never leave a stale answer behind.

use crate::engine::{self, RecipeAssessment};
use crate::inventory::Inventory;
use crate::recipe::Recipe;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct Kitchen {
    fridge: Inventory,
    recipes: Vec<Recipe>,
}

impl Kitchen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: start from a fridge
    pub fn with_fridge(mut self, fridge: Inventory) -> Self {
        self.fridge = fridge;
        self
    }

    /// Builder pattern: start from a recipe book
    pub fn with_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.recipes = recipes;
        self
    }

    /// Swap the whole fridge for a freshly ingested one
    pub fn replace_fridge(&mut self, fridge: Inventory) {
        tracing::info!(items = fridge.len(), "Fridge replaced");
        self.fridge = fridge;
    }

    /// Swap the whole recipe book for a freshly ingested one
    pub fn replace_recipes(&mut self, recipes: Vec<Recipe>) {
        tracing::info!(recipes = recipes.len(), "Recipes replaced");
        self.recipes = recipes;
    }

    pub fn fridge(&self) -> &Inventory {
        &self.fridge
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Usable, aggregated food for `today`
    pub fn todays_food(&self, today: NaiveDate) -> Inventory {
        self.fridge.usable(today)
    }

    /// The most urgent recipe for `today`, or the sentinel
    pub fn todays_recipe(&self, today: NaiveDate) -> Recipe {
        engine::select_recipe(&self.recipes, &self.todays_food(today))
    }

    /// Feasibility of every recipe for `today`, in recipe-book order
    pub fn assessments(&self, today: NaiveDate) -> Vec<RecipeAssessment> {
        engine::assess_all(&self.recipes, &self.todays_food(today))
    }
}

// ============================================================================
// TESTS
// ============================================================================
