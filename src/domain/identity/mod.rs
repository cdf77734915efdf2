//! Identity shared by every domain record.
//!
//! Entities carry an explicit `id` field instead of inheriting one. The
//! `HasIdentifier` capability lets callers treat different entity kinds
//! uniformly, and `validate_identifier` is the first check every entity
//! factory runs.
//!
//! Uniqueness is not an entity concern: it is enforced by an
//! `IdentifierRegistry`, which reports collisions as `DuplicateIdentifier`.

pub mod registry;

pub use registry::{IdentifierRegistry, InMemoryIdentifierRegistry};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult};

/// Field name reported when an identifier is missing or duplicated
pub const CAMPO_ID: &str = "id";

/// Anything with a unique, immutable string identifier
pub trait HasIdentifier {
    fn id(&self) -> &str;
}

/// The identifier must be present and non-empty
pub fn validate_identifier(id: &str) -> DomainResult<()> {
    if id.is_empty() {
        return Err(DomainError::missing(CAMPO_ID));
    }
    Ok(())
}

/// Fresh random identifier for callers that have no natural key
pub fn new_identifier() -> String {
    Uuid::new_v4().to_string()
}

/// An identifier that must be unique is already in use.
///
/// Holds the name of the field involved (not the duplicated value) and
/// displays exactly that name.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{campo}")]
pub struct DuplicateIdentifier {
    campo: String,
}

impl DuplicateIdentifier {
    pub fn new(campo: impl Into<String>) -> Self {
        Self {
            campo: campo.into(),
        }
    }

    pub fn campo(&self) -> &str {
        &self.campo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_identifier_fails() {
        let err = validate_identifier("").unwrap_err();
        assert_eq!(err.campo(), Some("id"));
    }

    #[test]
    fn test_non_empty_identifier_passes() {
        assert!(validate_identifier("CONSUNI-32-2013").is_ok());
    }

    #[test]
    fn test_new_identifier_is_unique_and_valid() {
        let a = new_identifier();
        let b = new_identifier();
        assert_ne!(a, b);
        assert!(validate_identifier(&a).is_ok());
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_duplicate_identifier_displays_field() {
        let err = DuplicateIdentifier::new("id");
        assert_eq!(err.to_string(), "id");
        assert_eq!(err.campo(), "id");
    }
}
