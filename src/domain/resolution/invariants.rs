use chrono::NaiveDate;

use crate::domain::{require_text, DomainError, DomainResult};

pub const CAMPO_DESCRICAO: &str = "descricao";
pub const CAMPO_DATA_APROVACAO: &str = "dataAprovacao";
pub const CAMPO_REGRAS: &str = "regras";

/// Description must be present and non-empty
pub fn require_descricao(descricao: Option<String>) -> DomainResult<String> {
    require_text(descricao, CAMPO_DESCRICAO)
}

pub fn require_data_aprovacao(data: Option<NaiveDate>) -> DomainResult<NaiveDate> {
    data.ok_or_else(|| DomainError::missing(CAMPO_DATA_APROVACAO))
}

/// At least one rule, validated or not
pub fn require_regras<T>(regras: Option<Vec<T>>) -> DomainResult<Vec<T>> {
    match regras {
        Some(regras) if !regras.is_empty() => Ok(regras),
        _ => Err(DomainError::missing(CAMPO_REGRAS)),
    }
}

// Invariants that hold for every Resolution:
//
// 1. Identifier is non-empty
// 2. Description is non-empty
// 3. Approval date is present
// 4. At least one rule, order as supplied
// 5. Name is free-form and may be absent
// 6. Nothing changes after construction
