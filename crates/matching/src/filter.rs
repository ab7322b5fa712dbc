use std::collections::HashSet;

use nibbles_shared::{Protein, RecipeSource};

use crate::score::RecipeMatch;

/// Protein filter: everything, or recipes hinted with one specific protein.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProteinFilter {
    #[default]
    Any,
    Only(Protein),
}

/// Criteria applied to a scored recipe list. The default value passes
/// everything through.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilters {
    /// Allowed sources; empty means no source restriction.
    pub sources: HashSet<RecipeSource>,
    pub protein: ProteinFilter,
    /// Case-insensitive substring over title, raw ingredient text and
    /// norm_keys; empty means no search restriction.
    pub search_term: String,
}

/// Order scored recipes best-first: match percent descending, ties broken by
/// fewer missing ingredients. The sort is stable, so remaining ties keep
/// their input order and results are deterministic.
pub fn sort_by_best_match(matches: &[RecipeMatch]) -> Vec<RecipeMatch> {
    let mut sorted = matches.to_vec();
    sorted.sort_by(|a, b| {
        b.match_percent
            .cmp(&a.match_percent)
            .then_with(|| a.missing_ingredients.len().cmp(&b.missing_ingredients.len()))
    });
    sorted
}

/// Apply source, protein and search criteria, preserving input order.
pub fn filter_matches(matches: &[RecipeMatch], filters: &RecipeFilters) -> Vec<RecipeMatch> {
    matches
        .iter()
        .filter(|m| passes(m, filters))
        .cloned()
        .collect()
}

fn passes(m: &RecipeMatch, filters: &RecipeFilters) -> bool {
    let recipe = &m.recipe;

    if !filters.sources.is_empty() && !filters.sources.contains(&recipe.source) {
        return false;
    }

    if let ProteinFilter::Only(protein) = filters.protein {
        // A missing hint is "no value", never a match
        if recipe.protein_hint != Some(protein) {
            return false;
        }
    }

    if !filters.search_term.is_empty() {
        let term = filters.search_term.to_lowercase();
        let title_match = recipe.title.to_lowercase().contains(&term);
        let ingredient_match = recipe
            .ingredients
            .iter()
            .any(|ing| ing.raw.to_lowercase().contains(&term) || ing.norm_key.contains(&term));
        if !title_match && !ingredient_match {
            return false;
        }
    }

    true
}
