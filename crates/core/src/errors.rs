use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Failure reported by the persistence store, message kept verbatim.
    #[error("Store error: {0}")]
    Store(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl SlotError {
    /// True for errors caught before any store call was made.
    pub fn is_validation(&self) -> bool {
        matches!(self, SlotError::Validation(_))
    }
}

pub type SlotResult<T> = Result<T, SlotError>;
