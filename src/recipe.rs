// 🍳 Recipe - A named set of required ingredients
// Ingredient entries carry no expiry; the fridge decides urgency

use crate::error::ParseError;
use crate::inventory::{Inventory, InventoryEntry};
use serde::Serialize;

/// Name carried by the "no recipe available" sentinel
pub const NO_RECIPE: &str = "no recipe";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    name: String,
    ingredients: Inventory,
}

impl Recipe {
    /// Build a recipe; ingredient expiries are dropped.
    pub fn new(name: &str, ingredients: Inventory) -> Result<Self, ParseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ParseError::EmptyName);
        }

        let ingredients = ingredients
            .iter()
            .cloned()
            .map(InventoryEntry::without_expiry)
            .collect();

        Ok(Recipe {
            name: name.to_string(),
            ingredients,
        })
    }

    /// The sentinel returned when nothing can be cooked
    pub fn none() -> Self {
        Recipe {
            name: NO_RECIPE.to_string(),
            ingredients: Inventory::new(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.name == NO_RECIPE && self.ingredients.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &Inventory {
        &self.ingredients
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Self::none()
    }
}

// ============================================================================
// TESTS
// ============================================================================
