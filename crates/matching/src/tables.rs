use std::collections::HashMap;

use nibbles_shared::Location;
use serde::{Deserialize, Serialize};

/// Seed synonym entries: alternate spelling -> canonical term.
///
/// Canonical terms are deliberately never themselves listed as alternates,
/// which keeps normalisation idempotent.
const SEED_SYNONYMS: &[(&str, &str)] = &[
    ("scallions", "spring onions"),
    ("green onions", "spring onions"),
    ("spring onion", "spring onions"),
    ("cilantro", "coriander"),
    ("soya sauce", "soy sauce"),
    ("chicken breasts", "chicken breast"),
    ("chicken fillet", "chicken breast"),
    ("garlic clove", "garlic"),
    ("garlic cloves", "garlic"),
    ("zucchini", "courgette"),
    ("eggplant", "aubergine"),
    ("bell pepper", "pepper"),
    ("capsicum", "pepper"),
    ("shrimp", "prawns"),
    ("prawn", "prawns"),
    ("salmon fillets", "salmon fillet"),
    ("egg noodles", "noodles"),
    ("egg", "eggs"),
];

/// Seed location hints: canonical term -> where it is conventionally kept.
/// Anything absent defaults to the pantry.
const SEED_LOCATION_HINTS: &[(&str, Location)] = &[
    ("chicken breast", Location::Fridge),
    ("salmon fillet", Location::Fridge),
    ("milk", Location::Fridge),
    ("eggs", Location::Fridge),
    ("butter", Location::Fridge),
    ("cheddar cheese", Location::Fridge),
    ("spring onions", Location::Fridge),
    ("coriander", Location::Fridge),
    ("frozen peas", Location::Freezer),
    ("prawns", Location::Freezer),
    ("puff pastry", Location::Freezer),
    ("soy sauce", Location::Pantry),
    ("rice", Location::Pantry),
    ("noodles", Location::Pantry),
    ("garlic", Location::Pantry),
    ("olive oil", Location::Pantry),
];

/// Static mapping from alternate spellings/phrasings to a canonical term.
///
/// Built once at startup (from configuration or the seed entries) and
/// treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable(HashMap<String, String>);

impl Default for SynonymTable {
    fn default() -> Self {
        SynonymTable(
            SEED_SYNONYMS
                .iter()
                .map(|(alt, canonical)| (alt.to_string(), canonical.to_string()))
                .collect(),
        )
    }
}

impl SynonymTable {
    pub fn new(entries: HashMap<String, String>) -> Self {
        SynonymTable(entries)
    }

    /// Empty table, useful when matching should run without synonyms.
    pub fn empty() -> Self {
        SynonymTable(HashMap::new())
    }

    pub fn canonical(&self, term: &str) -> Option<&str> {
        self.0.get(term).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(alt, canonical)| (alt.as_str(), canonical.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Static mapping from a canonical ingredient term to the storage location
/// where it is conventionally kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationHints(HashMap<String, Location>);

impl Default for LocationHints {
    fn default() -> Self {
        LocationHints(
            SEED_LOCATION_HINTS
                .iter()
                .map(|(term, location)| (term.to_string(), *location))
                .collect(),
        )
    }
}

impl LocationHints {
    pub fn new(entries: HashMap<String, Location>) -> Self {
        LocationHints(entries)
    }

    pub fn empty() -> Self {
        LocationHints(HashMap::new())
    }

    /// Suggested location for an ingredient key; pantry when unknown.
    pub fn location_for(&self, norm_key: &str) -> Location {
        self.0.get(norm_key).copied().unwrap_or(Location::Pantry)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
