use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use nibbles::config::Config;
use nibbles::error::AppError;
use nibbles::snapshot;
use nibbles_inventory::{age_status, days_old};
use nibbles_matching::{
    available_keys, filter_matches, group_missing_by_location, score_all, score_recipe,
    sort_by_best_match, ProteinFilter, RecipeFilters,
};
use nibbles_shared::{Location, RecipeSource};

/// nibbles - household inventory and recipe matching
#[derive(Parser)]
#[command(name = "nibbles")]
#[command(about = "Household inventory and recipe matching", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score recipes against the inventory, best match first
    Matches {
        /// Inventory snapshot (JSON array of items)
        #[arg(long, default_value = "demos/inventory.json")]
        inventory: PathBuf,

        /// Recipe collection (JSON array of recipes)
        #[arg(long, default_value = "demos/recipes.json")]
        recipes: PathBuf,

        /// Restrict to a recipe source (marion, bbc); repeatable
        #[arg(long = "source")]
        sources: Vec<String>,

        /// Restrict to one protein hint (chicken, beef, pork, fish, veg)
        #[arg(long)]
        protein: Option<String>,

        /// Case-insensitive search over titles and ingredients
        #[arg(long)]
        search: Option<String>,

        /// Print at most this many results
        #[arg(long)]
        limit: Option<usize>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show a recipe's missing ingredients, grouped by storage location
    Missing {
        /// Recipe id to inspect
        recipe_id: String,

        #[arg(long, default_value = "demos/inventory.json")]
        inventory: PathBuf,

        #[arg(long, default_value = "demos/recipes.json")]
        recipes: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show inventory freshness indicators
    Age {
        #[arg(long, default_value = "demos/inventory.json")]
        inventory: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate()?;

    nibbles::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Matches {
            inventory,
            recipes,
            sources,
            protein,
            search,
            limit,
            json,
        } => matches_command(
            config, &inventory, &recipes, &sources, protein, search, limit, json,
        ),
        Commands::Missing {
            recipe_id,
            inventory,
            recipes,
            json,
        } => missing_command(config, &recipe_id, &inventory, &recipes, json),
        Commands::Age { inventory, json } => age_command(config, &inventory, json),
    }
}

#[allow(clippy::too_many_arguments)]
fn matches_command(
    config: Config,
    inventory_path: &PathBuf,
    recipes_path: &PathBuf,
    sources: &[String],
    protein: Option<String>,
    search: Option<String>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let items = snapshot::load_inventory(inventory_path)?;
    let recipes = snapshot::load_recipes(recipes_path)?;

    let mut filters = RecipeFilters::default();
    for source in sources {
        let parsed = source
            .parse::<RecipeSource>()
            .map_err(|_| AppError::InvalidFilter(source.clone()))?;
        filters.sources.insert(parsed);
    }
    if let Some(protein) = protein {
        let parsed = protein
            .parse()
            .map_err(|_| AppError::InvalidFilter(protein.clone()))?;
        filters.protein = ProteinFilter::Only(parsed);
    }
    if let Some(search) = search {
        filters.search_term = search;
    }

    let results = score_all(&recipes, &items, &config.synonyms);
    let sorted = sort_by_best_match(&results);
    let mut filtered = filter_matches(&sorted, &filters);
    if let Some(limit) = limit {
        filtered.truncate(limit);
    }

    tracing::info!(
        inventory_items = items.len(),
        recipes = recipes.len(),
        results = filtered.len(),
        "scored and filtered recipes"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    for m in &filtered {
        let missing = if m.missing_ingredients.is_empty() {
            "nothing missing".to_string()
        } else {
            format!("missing: {}", m.missing_ingredients.join(", "))
        };
        println!(
            "{:>3}%  {} [{}]  ({}/{} ingredients, {})",
            m.match_percent, m.recipe.title, m.recipe.source, m.matched_count, m.total_count, missing
        );
    }

    Ok(())
}

fn missing_command(
    config: Config,
    recipe_id: &str,
    inventory_path: &PathBuf,
    recipes_path: &PathBuf,
    json: bool,
) -> Result<()> {
    let items = snapshot::load_inventory(inventory_path)?;
    let recipes = snapshot::load_recipes(recipes_path)?;

    let recipe = recipes
        .iter()
        .find(|r| r.id == recipe_id)
        .ok_or_else(|| AppError::RecipeNotFound(recipe_id.to_string()))?;

    let keys = available_keys(&items, &config.synonyms);
    let result = score_recipe(recipe, &keys);
    let grouped = group_missing_by_location(&result.missing_ingredients, &config.location_hints);

    if json {
        println!("{}", serde_json::to_string_pretty(&grouped)?);
        return Ok(());
    }

    println!(
        "{}: {}% match, {} of {} ingredients on hand",
        recipe.title, result.match_percent, result.matched_count, result.total_count
    );
    if grouped.is_empty() {
        println!("Nothing missing.");
        return Ok(());
    }
    for location in [Location::Fridge, Location::Freezer, Location::Pantry] {
        let bucket = grouped.bucket(location);
        if bucket.is_empty() {
            continue;
        }
        println!("{}:", location.label());
        for key in bucket {
            println!("  - {key}");
        }
    }

    Ok(())
}

fn age_command(config: Config, inventory_path: &PathBuf, json: bool) -> Result<()> {
    let items = snapshot::load_inventory(inventory_path)?;
    // The only wall-clock read; everything below is deterministic in `now`
    let now = Utc::now();

    if json {
        let rows: Vec<serde_json::Value> = items
            .iter()
            .map(|item| {
                serde_json::json!({
                    "id": item.id,
                    "name": item.name,
                    "location": item.location,
                    "stock_status": item.stock_status,
                    "days_old": days_old(item, now),
                    "age_status": age_status(item, &config.shelf_life, now),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for item in &items {
        let status = age_status(item, &config.shelf_life, now);
        println!(
            "{:<24} {:<8} {:>4}d  {:<18} ({})",
            item.name,
            item.location.label(),
            days_old(item, now),
            status.label(),
            item.stock_status.label()
        );
    }

    Ok(())
}
