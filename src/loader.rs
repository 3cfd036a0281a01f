// 📂 Loaders - Fridge CSV and recipe JSON into typed values
//
// Fridge file (no header): name,quantity,kind,DD/MM/YYYY
//     cheese,10,slices,26/12/2014
//
// Recipe file: JSON array of recipes
//     [ { "name": "grilled cheese on toast",
//         "ingredients": [ { "item": "bread", "amount": "2", "unit": "slices" } ] } ]
//
// Bad rows are logged and skipped; only an unreadable source is an error.
// A fridge row has three or four fields, never more.

use crate::config::Config;
use crate::inventory::Inventory;
use crate::kitchen::Kitchen;
use crate::recipe::Recipe;
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Loaded value plus how many rows were dropped on the way
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ingested<T> {
    pub value: T,
    pub rejected: usize,
}

// ============================================================================
// FRIDGE (CSV)
// ============================================================================

/// Read fridge rows from any CSV source
pub fn read_fridge<R: Read>(source: R) -> Result<Ingested<Inventory>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut fridge = Inventory::new();
    let mut rejected = 0;

    for (index, result) in reader.records().enumerate() {
        let line = index + 1;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(line, error = %e, "Unreadable fridge row, skipping");
                rejected += 1;
                continue;
            }
        };

        // blank lines come through as a single empty field
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        if record.len() < 3 || record.len() > 4 {
            tracing::warn!(line, fields = record.len(), "Fridge row needs name,quantity,kind[,expiry], skipping");
            rejected += 1;
            continue;
        }

        let name = record.get(0).unwrap_or("");
        let quantity = record.get(1).unwrap_or("");
        let kind = record.get(2).unwrap_or("");
        let expiry = record.get(3);

        if !fridge.push_raw(name, quantity, kind, expiry) {
            rejected += 1;
        }
    }

    tracing::info!(items = fridge.len(), rejected, "Fridge loaded");
    Ok(Ingested { value: fridge, rejected })
}

/// Load the fridge from a CSV file
pub fn load_fridge(path: &Path) -> Result<Ingested<Inventory>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to read fridge file {}", path.display()))?;
    read_fridge(file)
}

// ============================================================================
// RECIPES (JSON)
// ============================================================================

#[derive(Debug, Deserialize)]
struct RecipeRecord {
    name: String,
    #[serde(default)]
    ingredients: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct IngredientRecord {
    item: String,
    amount: Amount,
    unit: String,
}

/// Recipe files write amounts as strings ("2"), but plain numbers are accepted too
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Amount {
    Number(i64),
    Text(String),
}

impl Amount {
    fn as_text(&self) -> String {
        match self {
            Amount::Number(n) => n.to_string(),
            Amount::Text(s) => s.clone(),
        }
    }
}

/// Parse a recipe document.
///
/// A recipe that cannot be read at all is skipped. An ingredient that fails to
/// parse is dropped and the recipe is kept with the rest of its ingredients.
pub fn parse_recipes(json: &str) -> Result<Ingested<Vec<Recipe>>> {
    let document: Vec<Value> =
        serde_json::from_str(json).context("Recipe document must be a JSON array")?;

    let mut recipes = Vec::with_capacity(document.len());
    let mut rejected = 0;

    for (index, raw) in document.into_iter().enumerate() {
        let record: RecipeRecord = match serde_json::from_value(raw) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(index, error = %e, "Unreadable recipe, skipping");
                rejected += 1;
                continue;
            }
        };

        let mut ingredients = Inventory::new();
        for raw_ingredient in record.ingredients {
            match serde_json::from_value::<IngredientRecord>(raw_ingredient) {
                Ok(ing) => {
                    if !ingredients.push_raw(&ing.item, &ing.amount.as_text(), &ing.unit, None) {
                        rejected += 1;
                    }
                }
                Err(e) => {
                    tracing::warn!(recipe = %record.name, error = %e, "Unreadable ingredient, skipping");
                    rejected += 1;
                }
            }
        }

        match Recipe::new(&record.name, ingredients) {
            Ok(recipe) => recipes.push(recipe),
            Err(e) => {
                tracing::warn!(index, error = %e, "Invalid recipe, skipping");
                rejected += 1;
            }
        }
    }

    tracing::info!(recipes = recipes.len(), rejected, "Recipes loaded");
    Ok(Ingested { value: recipes, rejected })
}

/// Load recipes from a JSON file
pub fn load_recipes(path: &Path) -> Result<Ingested<Vec<Recipe>>> {
    let mut json = String::new();
    File::open(path)
        .and_then(|mut file| file.read_to_string(&mut json))
        .with_context(|| format!("Failed to read recipes file {}", path.display()))?;
    parse_recipes(&json)
}

// ============================================================================
// KITCHEN
// ============================================================================

/// Load whatever files the config names into a Kitchen.
///
/// A missing or unreadable file is logged and leaves that half of the kitchen
/// empty; nothing here is fatal.
pub fn load_kitchen(config: &Config) -> Kitchen {
    let fridge = match &config.fridge_path {
        Some(path) => match load_fridge(path) {
            Ok(loaded) => loaded.value,
            Err(e) => {
                tracing::error!(error = %format!("{:#}", e), "Starting with an empty fridge");
                Inventory::new()
            }
        },
        None => Inventory::new(),
    };

    let recipes = match &config.recipes_path {
        Some(path) => match load_recipes(path) {
            Ok(loaded) => loaded.value,
            Err(e) => {
                tracing::error!(error = %format!("{:#}", e), "Starting with no recipes");
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    Kitchen::new().with_fridge(fridge).with_recipes(recipes)
}

// ============================================================================
// TESTS
// ============================================================================
