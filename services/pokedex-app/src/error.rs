//! Error types for the pokedex frontend

/// Errors that can occur while bootstrapping the client
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Devtools hook failed: {0}")]
    DevtoolsHook(String),

    #[error("Bootstrap is not mounted")]
    NotMounted,

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for bootstrap operations
pub type Result<T> = std::result::Result<T, BootstrapError>;
