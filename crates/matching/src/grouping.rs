use nibbles_shared::Location;
use serde::Serialize;

use crate::tables::LocationHints;

/// Missing ingredients bucketed by where they would conventionally be
/// found, for a "what's missing" display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MissingByLocation {
    pub fridge: Vec<String>,
    pub freezer: Vec<String>,
    pub pantry: Vec<String>,
}

impl MissingByLocation {
    pub fn bucket(&self, location: Location) -> &[String] {
        match location {
            Location::Fridge => &self.fridge,
            Location::Freezer => &self.freezer,
            Location::Pantry => &self.pantry,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fridge.is_empty() && self.freezer.is_empty() && self.pantry.is_empty()
    }
}

/// Suggested storage location for an ingredient key; pantry when the hint
/// table has no entry.
pub fn ingredient_location(norm_key: &str, hints: &LocationHints) -> Location {
    hints.location_for(norm_key)
}

/// Bucket missing ingredient keys via the location-hint table. Keys without
/// a hint land in the pantry bucket; input order is preserved within each
/// bucket and every key appears in exactly one bucket.
pub fn group_missing_by_location(missing: &[String], hints: &LocationHints) -> MissingByLocation {
    let mut grouped = MissingByLocation::default();

    for key in missing {
        let bucket = match ingredient_location(key, hints) {
            Location::Fridge => &mut grouped.fridge,
            Location::Freezer => &mut grouped.freezer,
            Location::Pantry => &mut grouped.pantry,
        };
        bucket.push(key.clone());
    }

    grouped
}
