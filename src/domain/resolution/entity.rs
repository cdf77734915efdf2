use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::invariants::{require_data_aprovacao, require_descricao, require_regras};
use crate::domain::identity::{validate_identifier, HasIdentifier};
use crate::domain::rule::{Rule, RuleDraft};
use crate::domain::{DomainError, DomainResult};

/// Gathers the rules used to evaluate promotion, progression and
/// probation dossiers.
///
/// University legislation is organized as resolutions. A Resolution only
/// records the items that count in an evaluation; scoring them is someone
/// else's job.
///
/// Fields are private: the value is fully validated when built and cannot
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ResolutionDraft", rename_all = "camelCase")]
pub struct Resolution {
    /// Unique identifier
    id: String,

    /// Name humans know the resolution by, e.g. "CONSUNI 32/2013".
    /// Not guaranteed unique and never validated. Contrast with `id`.
    nome: Option<String>,

    /// Description (caput) of the resolution
    descricao: String,

    data_aprovacao: NaiveDate,

    /// Rules in the order they were supplied
    regras: Vec<Rule>,
}

/// Resolution input where any field may be missing.
///
/// Rules are kept unvalidated until `build`, which checks id, descricao,
/// dataAprovacao and regras first and only then the rules themselves.
/// Deserialization goes through it as well.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResolutionDraft {
    pub id: Option<String>,
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub data_aprovacao: Option<NaiveDate>,
    pub regras: Option<Vec<RuleDraft>>,
}

/// Identifier, description and approval date, checked in that order
fn require_header(
    id: Option<String>,
    descricao: Option<String>,
    data_aprovacao: Option<NaiveDate>,
) -> DomainResult<(String, String, NaiveDate)> {
    let id = id.unwrap_or_default();
    validate_identifier(&id)?;

    let descricao = require_descricao(descricao)?;
    let data_aprovacao = require_data_aprovacao(data_aprovacao)?;
    Ok((id, descricao, data_aprovacao))
}

impl ResolutionDraft {
    /// Reports only the first problem found
    pub fn build(self) -> DomainResult<Resolution> {
        let (id, descricao, data_aprovacao) =
            require_header(self.id, self.descricao, self.data_aprovacao)?;
        let regras = require_regras(self.regras)?
            .into_iter()
            .map(RuleDraft::build)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Resolution {
            id,
            nome: self.nome,
            descricao,
            data_aprovacao,
            regras,
        })
    }
}

impl Resolution {
    /// Create a Resolution from all of its fields at once
    pub fn new(
        id: impl Into<String>,
        nome: Option<String>,
        descricao: impl Into<String>,
        data_aprovacao: NaiveDate,
        regras: Vec<Rule>,
    ) -> DomainResult<Self> {
        let (id, descricao, data_aprovacao) =
            require_header(Some(id.into()), Some(descricao.into()), Some(data_aprovacao))?;
        let regras = require_regras(Some(regras))?;

        Ok(Self {
            id,
            nome,
            descricao,
            data_aprovacao,
            regras,
        })
    }

    pub fn nome(&self) -> Option<&str> {
        self.nome.as_deref()
    }

    pub fn descricao(&self) -> &str {
        &self.descricao
    }

    pub fn data_aprovacao(&self) -> NaiveDate {
        self.data_aprovacao
    }

    /// Never empty
    pub fn regras(&self) -> &[Rule] {
        &self.regras
    }

    /// First rule defining `variavel`
    pub fn regra(&self, variavel: &str) -> Option<&Rule> {
        self.regras.iter().find(|r| r.variavel() == variavel)
    }

    /// Variables defined by the rules, in rule order
    pub fn variaveis(&self) -> impl Iterator<Item = &str> {
        self.regras.iter().map(Rule::variavel)
    }
}

impl HasIdentifier for Resolution {
    fn id(&self) -> &str {
        &self.id
    }
}

impl TryFrom<ResolutionDraft> for Resolution {
    type Error = DomainError;

    fn try_from(draft: ResolutionDraft) -> DomainResult<Self> {
        draft.build()
    }
}

impl From<Resolution> for ResolutionDraft {
    fn from(resolution: Resolution) -> Self {
        Self {
            id: Some(resolution.id),
            nome: resolution.nome,
            descricao: Some(resolution.descricao),
            data_aprovacao: Some(resolution.data_aprovacao),
            regras: Some(resolution.regras.into_iter().map(RuleDraft::from).collect()),
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.nome {
            Some(nome) => write!(f, "{}", nome),
            None => write!(f, "{}", self.id),
        }
    }
}
