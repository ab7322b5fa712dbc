use std::collections::HashSet;

use nibbles_shared::{InventoryItem, Recipe};
use serde::Serialize;
use tracing::debug;

use crate::keyset::available_keys;
use crate::tables::SynonymTable;

/// How one recipe scores against the current inventory. Derived on every
/// inventory or filter change, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeMatch {
    pub recipe: Recipe,
    pub matched_count: usize,
    pub total_count: usize,
    /// 0-100, rounded half-up.
    pub match_percent: u8,
    /// norm_keys present in inventory, in recipe order.
    pub matched_ingredients: Vec<String>,
    /// norm_keys absent from inventory, in recipe order.
    pub missing_ingredients: Vec<String>,
}

impl RecipeMatch {
    pub fn missing_count(&self) -> usize {
        self.missing_ingredients.len()
    }
}

/// Score a single recipe against an available-key set.
///
/// Partitions the ingredient list into matched/missing, preserving recipe
/// order within each partition. A recipe with no ingredients scores 0%.
pub fn score_recipe(recipe: &Recipe, available: &HashSet<String>) -> RecipeMatch {
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for ingredient in &recipe.ingredients {
        if available.contains(&ingredient.norm_key) {
            matched.push(ingredient.norm_key.clone());
        } else {
            missing.push(ingredient.norm_key.clone());
        }
    }

    let total_count = recipe.ingredients.len();
    let matched_count = matched.len();
    // f64::round is half-away-from-zero, which is half-up on this
    // non-negative domain (2/3 -> 67, never 66)
    let match_percent = if total_count > 0 {
        (matched_count as f64 / total_count as f64 * 100.0).round() as u8
    } else {
        0
    };

    RecipeMatch {
        recipe: recipe.clone(),
        matched_count,
        total_count,
        match_percent,
        matched_ingredients: matched,
        missing_ingredients: missing,
    }
}

/// Score every recipe against the inventory, building the available-key set
/// once. Input recipe order is preserved.
pub fn score_all(
    recipes: &[Recipe],
    items: &[InventoryItem],
    synonyms: &SynonymTable,
) -> Vec<RecipeMatch> {
    let available = available_keys(items, synonyms);
    debug!(
        available_keys = available.len(),
        recipes = recipes.len(),
        "scoring recipes against inventory"
    );
    recipes
        .iter()
        .map(|recipe| score_recipe(recipe, &available))
        .collect()
}
