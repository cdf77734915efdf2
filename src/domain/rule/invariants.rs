use std::sync::LazyLock;

use regex::Regex;

use super::entity::{Rule, RuleKind};
use crate::domain::{DomainError, DomainResult};

static VARIAVEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid variable pattern"));

/// Validates all Rule invariants, in a fixed order:
/// variable, description, kind-specific fields, range, dependencies
pub fn validate_rule(rule: &Rule) -> DomainResult<()> {
    validate_variavel(rule.variavel())?;
    require(rule.descricao(), "descricao")?;
    validate_tipo(rule.tipo())?;
    validate_range(rule.valor_minimo(), rule.valor_maximo())?;
    validate_dependencies(rule)?;
    Ok(())
}

fn require(value: &str, campo: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::missing(campo));
    }
    Ok(())
}

/// Variable names end up in expressions, so they must be identifiers
fn validate_variavel(variavel: &str) -> DomainResult<()> {
    require(variavel, "variavel")?;
    if !VARIAVEL.is_match(variavel) {
        return Err(DomainError::InvariantViolation(format!(
            "Rule variable '{}' is not a valid identifier",
            variavel
        )));
    }
    Ok(())
}

fn validate_tipo(tipo: &RuleKind) -> DomainResult<()> {
    match tipo {
        RuleKind::PontosPorRelato {
            tipo_relato,
            pontos_por_item,
        } => {
            require(tipo_relato, "tipoRelato")?;
            if !pontos_por_item.is_finite() {
                return Err(DomainError::InvariantViolation(
                    "Points per item must be a finite number".to_string(),
                ));
            }
        }
        RuleKind::Expressao { expressao } => require(expressao, "expressao")?,
        RuleKind::Condicional { condicao, entao, .. } => {
            require(condicao, "condicao")?;
            require(entao, "entao")?;
        }
        RuleKind::Media { tipo_relato } | RuleKind::Somatorio { tipo_relato } => {
            require(tipo_relato, "tipoRelato")?
        }
    }
    Ok(())
}

fn validate_range(minimo: f64, maximo: f64) -> DomainResult<()> {
    if !minimo.is_finite() || !maximo.is_finite() {
        return Err(DomainError::InvariantViolation(
            "Rule limits must be finite numbers".to_string(),
        ));
    }
    if minimo > maximo {
        return Err(DomainError::InvariantViolation(format!(
            "Minimum value {} cannot exceed maximum value {}",
            minimo, maximo
        )));
    }
    Ok(())
}

fn validate_dependencies(rule: &Rule) -> DomainResult<()> {
    if rule.depende_de().iter().any(|d| d == rule.variavel()) {
        return Err(DomainError::InvariantViolation(format!(
            "Rule '{}' cannot depend on itself",
            rule.variavel()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expressao(e: &str) -> RuleKind {
        RuleKind::Expressao {
            expressao: e.to_string(),
        }
    }

    #[test]
    fn test_valid_rule() {
        let rule = Rule::new(
            "ensino",
            "Atividades de ensino",
            RuleKind::PontosPorRelato {
                tipo_relato: "aula".to_string(),
                pontos_por_item: 2.5,
            },
            0.0,
            40.0,
            vec![],
        );
        assert!(rule.is_ok());
    }

    #[test]
    fn test_empty_variable_fails() {
        let err = Rule::new("", "d", expressao("a"), 0.0, 1.0, vec![]).unwrap_err();
        assert_eq!(err.campo(), Some("variavel"));
    }

    #[test]
    fn test_malformed_variable_fails() {
        let err = Rule::new("1nota", "d", expressao("a"), 0.0, 1.0, vec![]).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));

        let err = Rule::new("nota final", "d", expressao("a"), 0.0, 1.0, vec![]).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn test_empty_description_fails() {
        let err = Rule::new("x", "", expressao("a"), 0.0, 1.0, vec![]).unwrap_err();
        assert_eq!(err.campo(), Some("descricao"));
    }

    #[test]
    fn test_kind_specific_fields() {
        let err = Rule::new("x", "d", expressao(""), 0.0, 1.0, vec![]).unwrap_err();
        assert_eq!(err.campo(), Some("expressao"));

        let sem_condicao = RuleKind::Condicional {
            condicao: String::new(),
            entao: "1".to_string(),
            senao: None,
        };
        let err = Rule::new("x", "d", sem_condicao, 0.0, 1.0, vec![]).unwrap_err();
        assert_eq!(err.campo(), Some("condicao"));

        let sem_entao = RuleKind::Condicional {
            condicao: "a > 1".to_string(),
            entao: String::new(),
            senao: Some("0".to_string()),
        };
        let err = Rule::new("x", "d", sem_entao, 0.0, 1.0, vec![]).unwrap_err();
        assert_eq!(err.campo(), Some("entao"));

        let media = RuleKind::Media {
            tipo_relato: String::new(),
        };
        let err = Rule::new("x", "d", media, 0.0, 1.0, vec![]).unwrap_err();
        assert_eq!(err.campo(), Some("tipoRelato"));
    }

    #[test]
    fn test_non_finite_points_fail() {
        let tipo = RuleKind::PontosPorRelato {
            tipo_relato: "aula".to_string(),
            pontos_por_item: f64::NAN,
        };
        assert!(Rule::new("x", "d", tipo, 0.0, 1.0, vec![]).is_err());
    }

    #[test]
    fn test_inverted_range_fails() {
        let err = Rule::new("x", "d", expressao("a"), 10.0, 1.0, vec![]).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn test_equal_limits_pass() {
        assert!(Rule::new("x", "d", expressao("a"), 5.0, 5.0, vec![]).is_ok());
    }

    #[test]
    fn test_self_dependency_fails() {
        let err =
            Rule::new("x", "d", expressao("x + 1"), 0.0, 1.0, vec!["x".to_string()]).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn test_required_fields_checked_before_range() {
        let err = Rule::new("x", "", expressao("a"), 10.0, 1.0, vec![]).unwrap_err();
        assert_eq!(err.campo(), Some("descricao"));
    }
}
