use nibbles_inventory::InventoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Shelf-life configuration error: {0}")]
    ShelfLifeError(#[from] InventoryError),

    #[error("Snapshot read error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Snapshot parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Invalid filter value: {0}")]
    InvalidFilter(String),
}
