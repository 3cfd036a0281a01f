use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;

use fridge_recipes::inventory::parse_expiry;
use fridge_recipes::{describe_food, describe_ingredient, load_kitchen, logging, Config, TAKEOUT};

/// Pick today's recipe from what is in the fridge
#[derive(Parser, Debug)]
#[command(name = "fridge-recipes", version)]
struct Cli {
    /// CSV file of fridge items (name,quantity,kind,DD/MM/YYYY)
    #[arg(short, long)]
    fridge: Option<PathBuf>,

    /// JSON file of recipes
    #[arg(short, long)]
    recipes: Option<PathBuf>,

    /// Pretend today is this date (DD/MM/YYYY)
    #[arg(long, value_parser = parse_expiry)]
    today: Option<NaiveDate>,

    /// Also list usable food and every recipe's status
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let config = Config::from_env()?.with_files(cli.fridge, cli.recipes);
    let kitchen = load_kitchen(&config);
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    if cli.verbose {
        println!("Food in the fridge on {}:", today.format("%d/%m/%Y"));
        for entry in kitchen.todays_food(today).iter() {
            println!("  {}", describe_food(entry, today));
        }

        println!("\nRecipes:");
        for assessment in kitchen.assessments(today) {
            match assessment.feasibility.cook_by() {
                Some(date) => println!("  {} (cook by {})", assessment.name, date.format("%d/%m/%Y")),
                None if assessment.feasibility.is_feasible() => println!("  {} (no deadline)", assessment.name),
                None => println!("  {} (missing ingredients)", assessment.name),
            }
        }
        println!();
    }

    let recipe = kitchen.todays_recipe(today);
    if recipe.is_none() {
        println!("{}", TAKEOUT);
        return Ok(());
    }

    println!("Optimal recipe is:");
    println!("{}", recipe.name());
    for ingredient in recipe.ingredients().iter() {
        println!("  {}", describe_ingredient(ingredient));
    }

    Ok(())
}
