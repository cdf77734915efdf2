//! Resolution Domain
//!
//! A Resolution is an immutable value: it is validated once, when built,
//! and exposes read-only accessors afterwards. Storage and rule evaluation
//! live outside this crate.

pub mod entity;
pub mod invariants;


pub use entity::{Resolution, ResolutionDraft};
pub use invariants::{CAMPO_DATA_APROVACAO, CAMPO_DESCRICAO, CAMPO_REGRAS};
