use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid price for model {model}: {price} (must be a finite, non-negative number)")]
    InvalidPrice { model: String, price: f64 },

    #[error("Color palette must contain at least one color")]
    EmptyPalette,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
