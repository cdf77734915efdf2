// src/application/error_handling.rs
//
// Error translation for outer layers
//
// ARCHITECTURE:
// - Maps internal errors to categorized, serializable responses
// - Missing fields and invariants are validation failures
// - Duplicate identifiers are conflicts
// - Parse errors describe the caller's input, so they go back in `details`

use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    /// Offending field, when the error names one
    pub campo: Option<String>,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Missing field or broken invariant (400)
    Validation,

    /// Identifier already in use (409)
    Conflict,

    /// Anything else (500)
    Internal,
}

impl ErrorType {
    /// HTTP status an outer layer would answer with
    pub fn status_code(self) -> u16 {
        match self {
            ErrorType::Validation => 400,
            ErrorType::Conflict => 409,
            ErrorType::Internal => 500,
        }
    }
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Domain(domain_error) => Self::from_domain_error(domain_error),

            AppError::Serialization(serde_error) => {
                debug!("Rejected resolution input: {}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Validation,
                    message: "Malformed input".to_string(),
                    campo: None,
                    details: Some(serde_error.to_string()),
                }
            }
        }
    }

    pub fn from_domain_error(error: DomainError) -> Self {
        let campo = error.campo().map(str::to_string);
        match error {
            DomainError::RequiredFieldMissing(_) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: "Required field missing".to_string(),
                campo,
                details: None,
            },

            DomainError::DuplicateIdentifier(_) => Self {
                success: false,
                error_type: ErrorType::Conflict,
                message: "Identifier already exists".to_string(),
                campo,
                details: None,
            },

            DomainError::InvariantViolation(message) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: "Domain validation failed".to_string(),
                campo,
                details: Some(message),
            },
        }
    }

    pub fn status_code(&self) -> u16 {
        self.error_type.status_code()
    }
}

/// Helper trait to convert Results to a serialized ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response).unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}
