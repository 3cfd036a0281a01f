// 🖼️ Presentation - Human strings and the serializable kitchen view
// Consumed by the CLI printout and by the server's data.json

use crate::engine::{self, RecipeAssessment};
use crate::inventory::InventoryEntry;
use crate::kitchen::Kitchen;
use crate::recipe::Recipe;
use chrono::NaiveDate;
use serde::Serialize;

/// What to show when no recipe can be cooked
pub const TAKEOUT: &str = "Order Takeout";

/// "10 slices cheese, expires in 3 days"
pub fn describe_food(entry: &InventoryEntry, today: NaiveDate) -> String {
    match entry.expiry() {
        Some(expiry) => {
            let days = (expiry - today).num_days();
            let unit = if days == 1 { "day" } else { "days" };
            format!("{}, expires in {} {}", describe_ingredient(entry), days, unit)
        }
        None => describe_ingredient(entry),
    }
}

/// "2 slices bread"
pub fn describe_ingredient(entry: &InventoryEntry) -> String {
    format!("{} {} {}", entry.quantity(), entry.kind(), entry.name())
}

// ============================================================================
// VIEW
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeView {
    pub name: String,
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_by: Option<NaiveDate>,
}

impl RecipeView {
    pub fn build(recipe: &Recipe, cook_by: Option<NaiveDate>) -> Self {
        if recipe.is_none() {
            return RecipeView {
                name: TAKEOUT.to_string(),
                ingredients: Vec::new(),
                cook_by: None,
            };
        }

        RecipeView {
            name: recipe.name().to_string(),
            ingredients: recipe.ingredients().iter().map(describe_ingredient).collect(),
            cook_by,
        }
    }
}

/// Everything the front page shows for one day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KitchenView {
    pub today: NaiveDate,
    pub food: Vec<String>,
    pub recipe: RecipeView,
    pub recipes: Vec<RecipeAssessment>,
}

impl KitchenView {
    pub fn build(kitchen: &Kitchen, today: NaiveDate) -> Self {
        let food = kitchen.todays_food(today);
        let recipe = engine::select_recipe(kitchen.recipes(), &food);
        let cook_by = engine::cook_by_date(recipe.ingredients(), &food);

        KitchenView {
            today,
            food: food.iter().map(|entry| describe_food(entry, today)).collect(),
            recipe: RecipeView::build(&recipe, cook_by),
            recipes: engine::assess_all(kitchen.recipes(), &food),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
