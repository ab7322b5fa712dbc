use std::collections::HashSet;

use nibbles_matching::{
    available_keys, filter_matches, group_missing_by_location, normalise_ingredient, score_all,
    sort_by_best_match, LocationHints, ProteinFilter, RecipeFilters, SynonymTable,
};
use nibbles_shared::{
    Category, InventoryItem, Location, Protein, Recipe, RecipeIngredient, RecipeSource,
    StockStatus,
};

fn item(name: &str, stock_status: StockStatus) -> InventoryItem {
    InventoryItem {
        id: format!("inv-{}", name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        location: Location::Fridge,
        category: Category::Other,
        stock_status,
        added_at: "2026-08-20T08:00:00Z".parse().unwrap(),
        updated_at: "2026-08-20T08:00:00Z".parse().unwrap(),
    }
}

fn recipe(
    id: &str,
    source: RecipeSource,
    title: &str,
    protein_hint: Option<Protein>,
    ingredients: &[(&str, &str)],
) -> Recipe {
    Recipe {
        id: id.to_string(),
        source,
        title: title.to_string(),
        url: format!("https://example.org/{id}"),
        protein_hint,
        ingredients: ingredients
            .iter()
            .map(|(raw, norm_key)| RecipeIngredient {
                raw: raw.to_string(),
                norm_key: norm_key.to_string(),
            })
            .collect(),
    }
}

/// Full flow: snapshot -> key set -> scoring -> sorting -> filtering ->
/// missing-ingredient grouping, with a synonym in play.
#[test]
fn test_score_sort_filter_group_end_to_end() {
    let synonyms = SynonymTable::default();
    let hints = LocationHints::default();

    let inventory = vec![
        item("Chicken breasts", StockStatus::InStock),
        item("Rice", StockStatus::InStock),
        item("Spring onions", StockStatus::Low),
        item("Soy sauce", StockStatus::OutOfStock),
    ];

    let recipes = vec![
        recipe(
            "stir-fry",
            RecipeSource::Marion,
            "Chicken stir fry",
            Some(Protein::Chicken),
            &[
                ("500g chicken breast", "chicken breast"),
                ("2 scallions", "spring onions"),
                ("2 tbsp soy sauce", "soy sauce"),
            ],
        ),
        recipe(
            "fried-rice",
            RecipeSource::Bbc,
            "Egg fried rice",
            Some(Protein::Veg),
            &[("200g rice", "rice"), ("2 eggs", "eggs")],
        ),
        recipe(
            "congee",
            RecipeSource::Marion,
            "Plain congee",
            None,
            &[("100g rice", "rice")],
        ),
    ];

    let results = score_all(&recipes, &inventory, &synonyms);
    assert_eq!(results.len(), 3);

    // "Chicken breasts" normalises to the canonical key; the scallions line
    // matches through the synonym closure; soy sauce is out of stock.
    let stir_fry = &results[0];
    assert_eq!(stir_fry.matched_count, 2);
    assert_eq!(stir_fry.match_percent, 67);
    assert_eq!(stir_fry.missing_ingredients, vec!["soy sauce"]);

    let sorted = sort_by_best_match(&results);
    let ids: Vec<&str> = sorted.iter().map(|m| m.recipe.id.as_str()).collect();
    // congee 100%, then stir-fry at 67% with 1 missing over fried-rice at
    // 50% with 1 missing
    assert_eq!(ids, vec!["congee", "stir-fry", "fried-rice"]);

    let filters = RecipeFilters {
        sources: HashSet::from([RecipeSource::Marion]),
        protein: ProteinFilter::Only(Protein::Chicken),
        search_term: "chicken".to_string(),
    };
    let filtered = filter_matches(&sorted, &filters);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].recipe.id, "stir-fry");

    let grouped = group_missing_by_location(&filtered[0].missing_ingredients, &hints);
    assert!(grouped.fridge.is_empty());
    assert!(grouped.freezer.is_empty());
    assert_eq!(grouped.pantry, vec!["soy sauce"]);
}

/// Two recipes at the same percent: fewer missing ingredients ranks first.
#[test]
fn test_equal_percent_tie_breaks_on_missing_count() {
    let inventory = vec![
        item("rice", StockStatus::InStock),
        item("eggs", StockStatus::InStock),
        item("milk", StockStatus::InStock),
        item("flour", StockStatus::InStock),
    ];

    // B: 4 of 6 (67%, 2 missing) listed before A: 2 of 3 (67%, 1 missing)
    let recipes = vec![
        recipe(
            "b",
            RecipeSource::Bbc,
            "Recipe B",
            None,
            &[
                ("rice", "rice"),
                ("eggs", "eggs"),
                ("milk", "milk"),
                ("flour", "flour"),
                ("saffron", "saffron"),
                ("vanilla", "vanilla"),
            ],
        ),
        recipe(
            "a",
            RecipeSource::Bbc,
            "Recipe A",
            None,
            &[("rice", "rice"), ("eggs", "eggs"), ("saffron", "saffron")],
        ),
    ];

    let results = score_all(&recipes, &inventory, &SynonymTable::empty());
    assert_eq!(results[0].match_percent, results[1].match_percent);

    let sorted = sort_by_best_match(&results);
    assert_eq!(sorted[0].recipe.id, "a");
    assert_eq!(sorted[1].recipe.id, "b");
}

/// Keys from out-of-stock items never reach the available set unless some
/// in-stock item contributes the same key.
#[test]
fn test_out_of_stock_exclusion_property() {
    let inventory = vec![
        item("Milk", StockStatus::OutOfStock),
        item("Rice", StockStatus::OutOfStock),
        item("rice", StockStatus::InStock),
    ];
    let synonyms = SynonymTable::empty();
    let keys = available_keys(&inventory, &synonyms);

    assert!(!keys.contains("milk"));
    assert!(keys.contains("rice"));
}

/// Recipe norm_keys written with alternate spellings still match inventory
/// recorded under the canonical one.
#[test]
fn test_recipe_written_with_alternate_spelling_matches() {
    let inventory = vec![item("Spring onions", StockStatus::InStock)];
    let recipes = vec![recipe(
        "salad",
        RecipeSource::Bbc,
        "Scallion salad",
        None,
        &[("3 scallions", "scallions")],
    )];

    let results = score_all(&recipes, &inventory, &SynonymTable::default());
    assert_eq!(results[0].match_percent, 100);
}

/// Seed recipe data must keep pre-computed norm_keys consistent with the
/// normaliser, or matching silently degrades.
#[test]
fn test_norm_keys_consistent_with_normaliser() {
    let synonyms = SynonymTable::default();
    let lines = [
        ("500g chicken breast", "chicken breast"),
        ("2 scallions", "spring onions"),
        ("1.5 tbsp soya sauce", "soy sauce"),
        ("an egg", "eggs"),
        ("200g rice", "rice"),
    ];
    for (raw, norm_key) in lines {
        assert_eq!(normalise_ingredient(raw, &synonyms), norm_key, "line {raw:?}");
    }
}
