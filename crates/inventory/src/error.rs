use nibbles_shared::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error(
        "Invalid shelf-life rule for {category}: old_days {old_days} exceeds very_old_days {very_old_days}"
    )]
    InvalidShelfLifeRule {
        category: Category,
        old_days: u32,
        very_old_days: u32,
    },
}
