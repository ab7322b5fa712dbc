use std::fs;
use std::path::Path;

use nibbles_shared::{InventoryItem, Recipe};

use crate::error::AppError;

/// Read an inventory snapshot (a JSON array of items, as listed by the
/// inventory store) from disk.
pub fn load_inventory(path: &Path) -> Result<Vec<InventoryItem>, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Read a recipe collection (a JSON array of seed recipes with
/// pre-normalised ingredient keys) from disk.
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
