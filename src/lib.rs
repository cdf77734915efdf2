// src/lib.rs
// SAEP domain - resolutions and rules for academic personnel evaluation
//
// Architecture:
// - Domain-centric: entities validate themselves when built and never change
// - Explicit: every failure is a returned error, nothing is thrown
// - Identity by composition: entities carry an `id` and implement HasIdentifier
// - No storage and no rule evaluation; those belong to consumers of this crate

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    new_identifier,
    validate_identifier,
    validate_rule,
    // Errors
    DomainError,
    DomainResult,
    DuplicateIdentifier,
    // Identity
    HasIdentifier,
    IdentifierRegistry,
    InMemoryIdentifierRegistry,
    // Resolution
    Resolution,
    ResolutionDraft,
    // Rule
    Rule,
    RuleDraft,
    RuleKind,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{
    import_resolutions, parse_resolution, ErrorResponse, ErrorType, ToErrorResponse,
};
