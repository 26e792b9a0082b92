//! Error types for the pokedex host service

/// Errors that can occur in the pokedex host service
#[derive(Debug, thiserror::Error)]
pub enum PokedexError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for pokedex operations
pub type Result<T> = std::result::Result<T, PokedexError>;
