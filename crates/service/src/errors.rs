use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Human-readable text without the kind prefix, suitable for a response body.
    pub fn message(&self) -> String {
        match self {
            Self::Conflict(m) | Self::NotFound(m) | Self::Storage(m) => m.clone(),
            Self::Model(e) => e.to_string(),
        }
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(e: std::io::Error) -> Self { Self::Storage(e.to_string()) }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self { Self::Storage(e.to_string()) }
}
