// 🔎 Feasibility Engine - Which recipes can be cooked, and which one first
//
// Pure functions over borrowed snapshots: no state, no I/O, no locking.
// Calling them twice on the same inputs always gives the same answer.

use crate::inventory::Inventory;
use crate::recipe::Recipe;
use chrono::NaiveDate;
use serde::Serialize;

// ============================================================================
// FEASIBILITY
// ============================================================================

/// Outcome of matching one recipe against the available food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Feasibility {
    /// At least one ingredient has no matching entry
    Infeasible,

    /// Every ingredient matched. `cook_by` is the soonest expiry among the
    /// matched entries, or `None` when none of them is dated (including the
    /// zero-ingredient case).
    Feasible { cook_by: Option<NaiveDate> },
}

impl Feasibility {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Feasibility::Feasible { .. })
    }

    /// Urgency signal used for selection
    pub fn cook_by(&self) -> Option<NaiveDate> {
        match self {
            Feasibility::Feasible { cook_by } => *cook_by,
            Feasibility::Infeasible => None,
        }
    }
}

/// Match each required ingredient against `available`.
///
/// An ingredient binds to the first available entry with the same name and
/// at least the required quantity. The measurement kind is NOT compared:
/// 10 grams of cheese satisfies a requirement for 2 slices of cheese.
/// The scan stops at the first unmatched ingredient.
pub fn assess(ingredients: &Inventory, available: &Inventory) -> Feasibility {
    let mut cook_by: Option<NaiveDate> = None;

    for required in ingredients {
        let matched = available
            .iter()
            .find(|a| a.name() == required.name() && a.quantity() >= required.quantity());

        let Some(found) = matched else {
            tracing::trace!(ingredient = required.name(), "No matching food, recipe infeasible");
            return Feasibility::Infeasible;
        };

        if let Some(expiry) = found.expiry() {
            cook_by = Some(match cook_by {
                Some(current) => current.min(expiry),
                None => expiry,
            });
        }
    }

    Feasibility::Feasible { cook_by }
}

/// Cook-by date of a recipe, if it is feasible and has one
pub fn cook_by_date(ingredients: &Inventory, available: &Inventory) -> Option<NaiveDate> {
    assess(ingredients, available).cook_by()
}

// ============================================================================
// SELECTION
// ============================================================================

/// Per-recipe result, reported in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeAssessment {
    pub name: String,
    #[serde(flatten)]
    pub feasibility: Feasibility,
}

/// Assess every recipe against `available`
pub fn assess_all(recipes: &[Recipe], available: &Inventory) -> Vec<RecipeAssessment> {
    recipes
        .iter()
        .map(|recipe| RecipeAssessment {
            name: recipe.name().to_string(),
            feasibility: assess(recipe.ingredients(), available),
        })
        .collect()
}

/// Pick the feasible recipe with the soonest cook-by date.
///
/// Ties go to the recipe that comes first in `recipes`. Recipes without a
/// cook-by date are never selected. Returns [`Recipe::none`] when nothing
/// qualifies.
pub fn select_recipe(recipes: &[Recipe], available: &Inventory) -> Recipe {
    let mut best: Option<(NaiveDate, &Recipe)> = None;

    for recipe in recipes {
        let Some(date) = cook_by_date(recipe.ingredients(), available) else {
            continue;
        };

        match best {
            Some((best_date, _)) if best_date <= date => {}
            _ => best = Some((date, recipe)),
        }
    }

    match best {
        Some((date, recipe)) => {
            tracing::debug!(recipe = recipe.name(), cook_by = %date, "Selected recipe");
            recipe.clone()
        }
        None => {
            tracing::debug!(candidates = recipes.len(), "No feasible recipe");
            Recipe::none()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryEntry;
    use crate::measurement::MeasurementKind;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn food(name: &str, quantity: u32, kind: MeasurementKind, days: i64) -> InventoryEntry {
        InventoryEntry::new(name, quantity, kind, Some(today() + Duration::days(days))).unwrap()
    }

    fn needs(name: &str, quantity: u32, kind: MeasurementKind) -> InventoryEntry {
        InventoryEntry::new(name, quantity, kind, None).unwrap()
    }

    fn recipe(name: &str, ingredients: Vec<InventoryEntry>) -> Recipe {
        Recipe::new(name, Inventory::from_entries(ingredients)).unwrap()
    }

    fn toast_and_sandwich() -> Vec<Recipe> {
        vec![
            recipe(
                "toast",
                vec![
                    needs("bread", 2, MeasurementKind::Slices),
                    needs("cheese", 2, MeasurementKind::Slices),
                ],
            ),
            recipe(
                "sandwich",
                vec![
                    needs("bread", 2, MeasurementKind::Slices),
                    needs("mixed salad", 100, MeasurementKind::Grams),
                ],
            ),
        ]
    }

    #[test]
    fn test_cook_by_is_soonest_matched_expiry() {
        let available = Inventory::from_entries(vec![
            food("bread", 10, MeasurementKind::Slices, 5),
            food("cheese", 10, MeasurementKind::Slices, 2),
        ]);
        let recipes = toast_and_sandwich();
        let toast = &recipes[0];

        assert_eq!(
            assess(toast.ingredients(), &available),
            Feasibility::Feasible { cook_by: Some(today() + Duration::days(2)) }
        );
    }

    #[test]
    fn test_matching_ignores_kind() {
        let available = Inventory::from_entries(vec![food("cheese", 10, MeasurementKind::Grams, 1)]);
        let required = Inventory::from_entries(vec![needs("cheese", 2, MeasurementKind::Slices)]);

        assert!(assess(&required, &available).is_feasible());
    }

    #[test]
    fn test_insufficient_quantity_is_infeasible() {
        let available = Inventory::from_entries(vec![food("eggs", 1, MeasurementKind::Single, 3)]);
        let required = Inventory::from_entries(vec![needs("eggs", 2, MeasurementKind::Single)]);

        assert_eq!(assess(&required, &available), Feasibility::Infeasible);
    }

    #[test]
    fn test_first_sufficient_entry_is_bound() {
        // the small entry is skipped, the first large enough one wins
        let available = Inventory::from_entries(vec![
            food("milk", 100, MeasurementKind::Millilitres, 1),
            food("milk", 500, MeasurementKind::Millilitres, 7),
            food("milk", 900, MeasurementKind::Millilitres, 4),
        ]);
        let required = Inventory::from_entries(vec![needs("milk", 250, MeasurementKind::Millilitres)]);

        assert_eq!(cook_by_date(&required, &available), Some(today() + Duration::days(7)));
    }

    #[test]
    fn test_one_missing_ingredient_is_enough_to_fail() {
        let available = Inventory::from_entries(vec![
            food("bread", 10, MeasurementKind::Slices, 5),
            food("cheese", 10, MeasurementKind::Slices, 5),
            food("butter", 200, MeasurementKind::Grams, 5),
        ]);
        let required = Inventory::from_entries(vec![
            needs("bread", 2, MeasurementKind::Slices),
            needs("truffle", 1, MeasurementKind::Grams),
            needs("cheese", 2, MeasurementKind::Slices),
            needs("butter", 10, MeasurementKind::Grams),
        ]);

        assert_eq!(assess(&required, &available), Feasibility::Infeasible);
    }

    #[test]
    fn test_zero_ingredients_feasible_without_date() {
        let available = Inventory::from_entries(vec![food("bread", 1, MeasurementKind::Slices, 1)]);

        assert_eq!(
            assess(&Inventory::new(), &available),
            Feasibility::Feasible { cook_by: None }
        );
    }

    #[test]
    fn test_zero_ingredient_recipe_never_selected() {
        let available = Inventory::from_entries(vec![food("bread", 1, MeasurementKind::Slices, 1)]);
        let recipes = vec![recipe("air", vec![])];

        assert!(select_recipe(&recipes, &available).is_none());
    }

    #[test]
    fn test_scenario_toast_is_only_feasible_recipe() {
        let fridge = Inventory::from_entries(vec![
            food("bread", 10, MeasurementKind::Slices, 30),
            food("cheese", 10, MeasurementKind::Slices, 30),
        ]);

        let chosen = select_recipe(&toast_and_sandwich(), &fridge.usable(today()));
        assert_eq!(chosen.name(), "toast");
    }

    #[test]
    fn test_scenario_expired_cheese_blocks_toast() {
        let fridge = Inventory::from_entries(vec![
            food("bread", 10, MeasurementKind::Slices, 30),
            food("cheese", 10, MeasurementKind::Slices, -1),
        ]);
        let usable = fridge.usable(today());

        assert!(usable.iter().all(|e| e.name() != "cheese"));
        assert!(select_recipe(&toast_and_sandwich(), &usable).is_none());
    }

    #[test]
    fn test_selects_most_urgent_recipe() {
        let available = Inventory::from_entries(vec![
            food("bread", 10, MeasurementKind::Slices, 10),
            food("cheese", 10, MeasurementKind::Slices, 10),
            food("mixed salad", 200, MeasurementKind::Grams, 2),
        ]);

        assert_eq!(select_recipe(&toast_and_sandwich(), &available).name(), "sandwich");
    }

    #[test]
    fn test_tie_goes_to_first_recipe() {
        let available = Inventory::from_entries(vec![
            food("bread", 10, MeasurementKind::Slices, 4),
            food("cheese", 10, MeasurementKind::Slices, 4),
            food("mixed salad", 200, MeasurementKind::Grams, 4),
        ]);
        let mut recipes = toast_and_sandwich();

        assert_eq!(select_recipe(&recipes, &available).name(), "toast");

        recipes.reverse();
        assert_eq!(select_recipe(&recipes, &available).name(), "sandwich");
    }

    #[test]
    fn test_empty_inputs_return_sentinel() {
        let fridge = Inventory::from_entries(vec![food("bread", 10, MeasurementKind::Slices, 3)]);

        let no_recipes = select_recipe(&[], &fridge);
        assert!(no_recipes.is_none());
        assert!(no_recipes.ingredients().is_empty());

        assert!(select_recipe(&toast_and_sandwich(), &Inventory::new()).is_none());
    }

    #[test]
    fn test_selection_is_repeatable() {
        let available = Inventory::from_entries(vec![
            food("bread", 10, MeasurementKind::Slices, 3),
            food("cheese", 10, MeasurementKind::Slices, 3),
        ]);
        let recipes = toast_and_sandwich();

        assert_eq!(select_recipe(&recipes, &available), select_recipe(&recipes, &available));
    }

    #[test]
    fn test_assess_all_reports_in_input_order() {
        let available = Inventory::from_entries(vec![
            food("bread", 10, MeasurementKind::Slices, 3),
            food("cheese", 10, MeasurementKind::Slices, 1),
        ]);

        let report = assess_all(&toast_and_sandwich(), &available);

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].name, "toast");
        assert_eq!(report[0].feasibility.cook_by(), Some(today() + Duration::days(1)));
        assert_eq!(report[1].name, "sandwich");
        assert_eq!(report[1].feasibility, Feasibility::Infeasible);
    }
}
