//! Error types for the cardstock core
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized to a UI shell.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Card not found: {0}")]
    CardNotFound(u32),

    #[error("Card {0} has no sale price")]
    MissingPrice(u32),

    #[error("Card {0} is out of stock")]
    OutOfStock(u32),

    #[error("{0}")]
    Generic(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
