// Fridge Recipes - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod config;
pub mod engine;
pub mod error;
pub mod inventory;
pub mod kitchen;
pub mod loader;
pub mod logging;
pub mod measurement;
pub mod presentation;
pub mod recipe;

// Only compile the HTTP layer when the server feature is enabled
#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use config::Config;
pub use engine::{assess, assess_all, cook_by_date, select_recipe, Feasibility, RecipeAssessment};
pub use error::ParseError;
pub use inventory::{Inventory, InventoryEntry};
pub use kitchen::Kitchen;
pub use loader::{load_fridge, load_kitchen, load_recipes, parse_recipes, read_fridge, Ingested};
pub use measurement::MeasurementKind;
pub use presentation::{describe_food, describe_ingredient, KitchenView, RecipeView, TAKEOUT};
pub use recipe::{Recipe, NO_RECIPE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
