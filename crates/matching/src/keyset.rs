use std::collections::HashSet;

use nibbles_shared::{InventoryItem, StockStatus};

use crate::normalise::normalise_ingredient;
use crate::tables::SynonymTable;

/// Build the set of normalised keys considered available for matching.
///
/// Out-of-stock items are excluded; low stock still counts as available.
/// For every synonym whose canonical target is contributed by an item, the
/// alternate spelling is added as well, so recipes written with either
/// spelling match inventory recorded under the canonical one.
///
/// The closure is one synonym hop only: a chain a -> b -> c does not fully
/// reconcile. Known limitation, preserved on purpose.
pub fn available_keys(items: &[InventoryItem], synonyms: &SynonymTable) -> HashSet<String> {
    let mut keys = HashSet::new();

    for item in items {
        if item.stock_status == StockStatus::OutOfStock {
            continue;
        }

        let key = normalise_ingredient(&item.name, synonyms);
        for (alt, canonical) in synonyms.iter() {
            if canonical == key {
                keys.insert(alt.to_string());
            }
        }
        keys.insert(key);
    }

    keys
}
