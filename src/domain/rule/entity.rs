use serde::{Deserialize, Serialize};

use super::invariants::validate_rule;
use crate::domain::{DomainError, DomainResult};

/// A single evaluable item defined by a resolution.
///
/// A rule produces the value of one variable (`variavel`) when a dossier is
/// scored, clamped to `[valor_minimo, valor_maximo]`. How the value is
/// obtained depends on `tipo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RuleDraft", rename_all = "camelCase")]
pub struct Rule {
    /// Variable this rule defines; unique inside a resolution by convention
    variavel: String,

    /// Human-readable description of the item
    descricao: String,

    /// How the value is computed
    tipo: RuleKind,

    valor_minimo: f64,

    valor_maximo: f64,

    /// Variables that must be evaluated before this one
    depende_de: Vec<String>,
}

/// How a rule obtains its value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum RuleKind {
    /// Fixed points for each reported item of a report type
    PontosPorRelato {
        tipo_relato: String,
        pontos_por_item: f64,
    },

    /// Arithmetic expression over other variables
    Expressao { expressao: String },

    /// `entao` when `condicao` holds, otherwise `senao` (zero when absent)
    Condicional {
        condicao: String,
        entao: String,
        senao: Option<String>,
    },

    /// Average of the reported items of a report type
    Media { tipo_relato: String },

    /// Sum of the reported items of a report type
    Somatorio { tipo_relato: String },
}

impl Rule {
    /// Create a Rule
    /// This is the only way to construct a Rule, and it always validates
    pub fn new(
        variavel: impl Into<String>,
        descricao: impl Into<String>,
        tipo: RuleKind,
        valor_minimo: f64,
        valor_maximo: f64,
        depende_de: Vec<String>,
    ) -> DomainResult<Self> {
        let rule = Self {
            variavel: variavel.into(),
            descricao: descricao.into(),
            tipo,
            valor_minimo,
            valor_maximo,
            depende_de,
        };
        validate_rule(&rule)?;
        Ok(rule)
    }

    pub fn variavel(&self) -> &str {
        &self.variavel
    }

    pub fn descricao(&self) -> &str {
        &self.descricao
    }

    pub fn tipo(&self) -> &RuleKind {
        &self.tipo
    }

    pub fn valor_minimo(&self) -> f64 {
        self.valor_minimo
    }

    pub fn valor_maximo(&self) -> f64 {
        self.valor_maximo
    }

    pub fn depende_de(&self) -> &[String] {
        &self.depende_de
    }

    /// Clamp a computed value into the rule's range
    pub fn limitar(&self, valor: f64) -> f64 {
        valor.clamp(self.valor_minimo, self.valor_maximo)
    }
}

impl RuleKind {
    /// Report type the rule reads from, for kinds that read reports
    pub fn tipo_relato(&self) -> Option<&str> {
        match self {
            RuleKind::PontosPorRelato { tipo_relato, .. }
            | RuleKind::Media { tipo_relato }
            | RuleKind::Somatorio { tipo_relato } => Some(tipo_relato),
            RuleKind::Expressao { .. } | RuleKind::Condicional { .. } => None,
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleKind::PontosPorRelato { .. } => write!(f, "pontos_por_relato"),
            RuleKind::Expressao { .. } => write!(f, "expressao"),
            RuleKind::Condicional { .. } => write!(f, "condicional"),
            RuleKind::Media { .. } => write!(f, "media"),
            RuleKind::Somatorio { .. } => write!(f, "somatorio"),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.variavel, self.tipo)
    }
}

/// Rule input that has not been validated yet.
///
/// Resolution input carries rules in this form so that a bad rule is
/// reported after the resolution's own fields, as a `DomainError`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleDraft {
    pub variavel: String,
    pub descricao: String,
    pub tipo: RuleKind,
    pub valor_minimo: f64,
    pub valor_maximo: f64,
    #[serde(default)]
    pub depende_de: Vec<String>,
}

impl RuleDraft {
    pub fn build(self) -> DomainResult<Rule> {
        Rule::new(
            self.variavel,
            self.descricao,
            self.tipo,
            self.valor_minimo,
            self.valor_maximo,
            self.depende_de,
        )
    }
}

impl TryFrom<RuleDraft> for Rule {
    type Error = DomainError;

    fn try_from(draft: RuleDraft) -> DomainResult<Self> {
        draft.build()
    }
}

impl From<Rule> for RuleDraft {
    fn from(rule: Rule) -> Self {
        Self {
            variavel: rule.variavel,
            descricao: rule.descricao,
            tipo: rule.tipo,
            valor_minimo: rule.valor_minimo,
            valor_maximo: rule.valor_maximo,
            depende_de: rule.depende_de,
        }
    }
}
