// src/domain/identity/registry.rs
//
// Identifier registry
//
// Tracks which identifiers are taken. It stores identifiers only,
// never the entities themselves, and keeps nothing beyond process memory.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use log::{debug, warn};

use super::{validate_identifier, DuplicateIdentifier, HasIdentifier, CAMPO_ID};
use crate::domain::{DomainError, DomainResult};

pub trait IdentifierRegistry: Send + Sync {
    /// Claims `id`. Fails with `DuplicateIdentifier` when it is already taken.
    fn register(&self, id: &str) -> DomainResult<()>;

    /// Frees `id`. Returns whether it was registered.
    fn release(&self, id: &str) -> DomainResult<bool>;

    fn contains(&self, id: &str) -> DomainResult<bool>;

    fn register_entity(&self, entity: &dyn HasIdentifier) -> DomainResult<()> {
        self.register(entity.id())
    }
}

/// Thread-safe registry backed by a set behind a lock.
///
/// Check and insert happen under one write lock, so two threads racing to
/// register the same identifier cannot both succeed.
#[derive(Clone, Default)]
pub struct InMemoryIdentifierRegistry {
    ids: Arc<RwLock<HashSet<String>>>,
}

impl InMemoryIdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> DomainResult<usize> {
        let ids = self.ids.read().map_err(|_| poisoned())?;
        Ok(ids.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }
}

fn poisoned() -> DomainError {
    DomainError::InvariantViolation("Identifier registry lock poisoned".to_string())
}

impl IdentifierRegistry for InMemoryIdentifierRegistry {
    fn register(&self, id: &str) -> DomainResult<()> {
        validate_identifier(id)?;

        let mut ids = self.ids.write().map_err(|_| poisoned())?;
        if !ids.insert(id.to_string()) {
            warn!("Identifier already registered: {}", id);
            return Err(DuplicateIdentifier::new(CAMPO_ID).into());
        }

        debug!("Registered identifier {} ({} total)", id, ids.len());
        Ok(())
    }

    fn release(&self, id: &str) -> DomainResult<bool> {
        let mut ids = self.ids.write().map_err(|_| poisoned())?;
        let removed = ids.remove(id);
        if removed {
            debug!("Released identifier {}", id);
        }
        Ok(removed)
    }

    fn contains(&self, id: &str) -> DomainResult<bool> {
        let ids = self.ids.read().map_err(|_| poisoned())?;
        Ok(ids.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    struct Dossie {
        id: String,
    }

    impl HasIdentifier for Dossie {
        fn id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn test_register_then_contains() {
        let registry = InMemoryIdentifierRegistry::new();
        assert!(registry.is_empty().unwrap());

        registry.register("r1").unwrap();

        assert!(registry.contains("r1").unwrap());
        assert!(!registry.contains("r2").unwrap());
        assert_eq!(registry.len().unwrap(), 1);
    }

    #[test]
    fn test_second_registration_is_duplicate() {
        let registry = InMemoryIdentifierRegistry::new();
        registry.register("r1").unwrap();

        match registry.register("r1") {
            Err(DomainError::DuplicateIdentifier(dup)) => assert_eq!(dup.campo(), "id"),
            other => panic!("expected duplicate identifier, got {:?}", other),
        }
        assert_eq!(registry.len().unwrap(), 1);
    }

    #[test]
    fn test_empty_identifier_is_rejected_before_lookup() {
        let registry = InMemoryIdentifierRegistry::new();
        let err = registry.register("").unwrap_err();
        assert!(matches!(err, DomainError::RequiredFieldMissing(ref c) if c == "id"));
        assert!(registry.is_empty().unwrap());
    }

    #[test]
    fn test_release_allows_reuse() {
        let registry = InMemoryIdentifierRegistry::new();
        registry.register("r1").unwrap();

        assert!(registry.release("r1").unwrap());
        assert!(!registry.release("r1").unwrap());
        assert!(registry.register("r1").is_ok());
    }

    #[test]
    fn test_register_entity_uses_its_identifier() {
        let registry = InMemoryIdentifierRegistry::new();
        let dossie = Dossie {
            id: "dossie-7".to_string(),
        };

        registry.register_entity(&dossie).unwrap();

        assert!(registry.contains("dossie-7").unwrap());
        assert!(registry.register_entity(&dossie).is_err());
    }

    #[test]
    fn test_concurrent_registration_succeeds_once() {
        let registry = InMemoryIdentifierRegistry::new();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || registry.register("shared").is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(registry.len().unwrap(), 1);
    }

    #[test]
    fn test_registry_usable_as_trait_object() {
        let registry: Arc<dyn IdentifierRegistry> = Arc::new(InMemoryIdentifierRegistry::new());
        registry.register("r1").unwrap();
        assert!(registry.contains("r1").unwrap());
    }
}
