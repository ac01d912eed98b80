use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Place '{place_id}' has no description for language '{language}'")]
    MissingLanguageData { place_id: String, language: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
