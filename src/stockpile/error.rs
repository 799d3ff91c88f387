use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Item index {index} is out of range (inventory holds {len} items)")]
    OutOfRange { index: usize, len: usize },

    #[error("Failed to save inventory: {0}")]
    Persistence(String),

    #[error("Failed to load inventory: {0}")]
    Load(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StockError>;
