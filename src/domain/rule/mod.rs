pub mod entity;
pub mod invariants;

pub use entity::{Rule, RuleDraft, RuleKind};
pub use invariants::validate_rule;
