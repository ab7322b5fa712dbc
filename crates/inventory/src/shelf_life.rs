use chrono::{DateTime, Utc};
use nibbles_shared::{Category, InventoryItem};
use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::error::InventoryError;

/// Freshness tier shown against an inventory item. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeStatus {
    Fresh,
    Old,
    VeryOld,
}

impl AgeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AgeStatus::Fresh => "Fresh",
            AgeStatus::Old => "Getting old",
            AgeStatus::VeryOld => "Use it or lose it",
        }
    }
}

/// Ageing thresholds for one category, in whole days since the item was
/// added. A category with either threshold absent never ages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfLifeRule {
    #[serde(default)]
    pub old_days: Option<u32>,
    #[serde(default)]
    pub very_old_days: Option<u32>,
}

/// Per-category ageing thresholds, loaded once from configuration and
/// treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfLifeRules {
    pub fresh: ShelfLifeRule,
    pub chilled: ShelfLifeRule,
    pub meat_fish: ShelfLifeRule,
    pub frozen: ShelfLifeRule,
    pub pantry: ShelfLifeRule,
    pub other: ShelfLifeRule,
}

impl Default for ShelfLifeRules {
    fn default() -> Self {
        ShelfLifeRules {
            fresh: ShelfLifeRule {
                old_days: Some(7),
                very_old_days: Some(10),
            },
            chilled: ShelfLifeRule {
                old_days: Some(10),
                very_old_days: Some(14),
            },
            meat_fish: ShelfLifeRule {
                old_days: Some(2),
                very_old_days: Some(3),
            },
            frozen: ShelfLifeRule::default(),
            pantry: ShelfLifeRule::default(),
            other: ShelfLifeRule::default(),
        }
    }
}

impl ShelfLifeRules {
    pub fn rule_for(&self, category: Category) -> ShelfLifeRule {
        match category {
            Category::Fresh => self.fresh,
            Category::Chilled => self.chilled,
            Category::MeatFish => self.meat_fish,
            Category::Frozen => self.frozen,
            Category::Pantry => self.pantry,
            Category::Other => self.other,
        }
    }

    /// Check the `very_old_days >= old_days` invariant for every category.
    /// Run once after configuration load, not per classification.
    pub fn validate(&self) -> Result<(), InventoryError> {
        for category in Category::VARIANTS {
            let rule = self.rule_for(*category);
            if let (Some(old_days), Some(very_old_days)) = (rule.old_days, rule.very_old_days) {
                if old_days > very_old_days {
                    return Err(InventoryError::InvalidShelfLifeRule {
                        category: *category,
                        old_days,
                        very_old_days,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Whole days since the item was added, truncated (never rounded up).
pub fn days_old(item: &InventoryItem, now: DateTime<Utc>) -> i64 {
    (now - item.added_at).num_days()
}

/// Classify an item's freshness against the shelf-life rules.
///
/// `now` is an explicit parameter so the classification is deterministic;
/// only the outermost caller should read the wall clock.
pub fn age_status(item: &InventoryItem, rules: &ShelfLifeRules, now: DateTime<Utc>) -> AgeStatus {
    let rule = rules.rule_for(item.category);

    // Categories without thresholds never age
    let (Some(old_days), Some(very_old_days)) = (rule.old_days, rule.very_old_days) else {
        return AgeStatus::Fresh;
    };

    let days = days_old(item, now);
    if days >= very_old_days as i64 {
        AgeStatus::VeryOld
    } else if days >= old_days as i64 {
        AgeStatus::Old
    } else {
        AgeStatus::Fresh
    }
}
