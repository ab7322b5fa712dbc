use std::sync::LazyLock;

use regex::Regex;

use crate::tables::SynonymTable;

// Units are ordered longest-first and bounded, so "cups" wins over "cup"
// and a bare "g" cannot eat the start of "garlic"
static RE_QUANTITY_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+(\.\d+)?\s*((kg|g|ml|l|tbsp|tsp|cups|cup|oz|lb)\b)?\s*").unwrap()
});

static RE_DETERMINER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(a|an|the|some|few|several)\s+").unwrap());

/// Canonicalise a raw ingredient or item name into a matching key.
///
/// Lower-cases and trims, strips a leading quantity/unit token ("200g ",
/// "1.5 tbsp "), strips a leading determiner ("a ", "some "), then applies
/// one synonym substitution. Total over any input; only-punctuation input
/// yields an empty string. Idempotent as long as canonical synonym terms
/// are not themselves alternate spellings.
pub fn normalise_ingredient(name: &str, synonyms: &SynonymTable) -> String {
    let lowered = name.trim().to_lowercase();
    let stripped = RE_QUANTITY_PREFIX.replace(&lowered, "");
    let stripped = RE_DETERMINER_PREFIX.replace(&stripped, "");
    let key = stripped.trim();

    match synonyms.canonical(key) {
        Some(canonical) => canonical.trim().to_string(),
        None => key.to_string(),
    }
}
