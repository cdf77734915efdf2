// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// Every entity module is declared here and its public API re-exported.
// Other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod identity;
pub mod resolution;
pub mod rule;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Identity
pub use identity::{
    new_identifier, validate_identifier, DuplicateIdentifier, HasIdentifier, IdentifierRegistry,
    InMemoryIdentifierRegistry,
};

// Resolution Domain
pub use resolution::{Resolution, ResolutionDraft};

// Rule Domain
pub use rule::{validate_rule, Rule, RuleDraft, RuleKind};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of required fields and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    /// Carries the name of the offending field, e.g. "descricao"
    #[error("Required field missing: {0}")]
    RequiredFieldMissing(String),

    #[error("Duplicate identifier: {0}")]
    DuplicateIdentifier(#[from] DuplicateIdentifier),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub(crate) fn missing(campo: &str) -> Self {
        DomainError::RequiredFieldMissing(campo.to_string())
    }

    /// Name of the field this error refers to, if any
    pub fn campo(&self) -> Option<&str> {
        match self {
            DomainError::RequiredFieldMissing(campo) => Some(campo),
            DomainError::DuplicateIdentifier(dup) => Some(dup.campo()),
            DomainError::InvariantViolation(_) => None,
        }
    }
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Unwraps a text input that must be present and non-empty.
///
/// Only the empty string counts as empty; whitespace is accepted.
pub(crate) fn require_text(value: Option<String>, campo: &str) -> DomainResult<String> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(DomainError::missing(campo)),
    }
}
