// src/error/types.rs
use crate::domain::{DomainError, DuplicateIdentifier};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<DuplicateIdentifier> for AppError {
    fn from(err: DuplicateIdentifier) -> Self {
        AppError::Domain(DomainError::DuplicateIdentifier(err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
