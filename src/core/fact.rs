//! # Fact e Rule — As Sentenças da Base de Conhecimento
//!
//! Um [`Fact`] é uma tripla ordenada `(sujeito, predicado, objeto)`, onde cada
//! componente é um **conceito normalizado** (sem espaços nas pontas, em minúsculas).
//!
//! Uma [`Rule`] é uma união fechada de três variantes:
//!
//! | Variante | Forma | Significado |
//! |----------|-------|-------------|
//! | [`Rule::Universal`] | `All X are Y` | todo X é Y |
//! | [`Rule::Capability`] | `All X can Y` | todo X pode Y |
//! | [`Rule::Standard`] | `IF (c1 AND c2) THEN (c)` | implicação conjuntiva |
//!
//! ## Exemplo
//!
//! ```rust
//! let fato = Fact::new("Socrates", "is", "Human");
//! assert_eq!(fato.to_string(), "socrates is human");
//!
//! let regra = Rule::Universal { category: "human".into(), property: "mortal".into() };
//! assert_eq!(regra.to_string(), "All human are mortal");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Normaliza um conceito: remove espaços nas pontas e converte para minúsculas.
///
/// Dois conceitos são o mesmo conceito se e somente se suas formas
/// normalizadas são iguais.
pub fn normalize(concept: &str) -> String {
    concept.trim().to_lowercase()
}

/// Tripla `(sujeito, predicado, objeto)` de conceitos normalizados.
///
/// A igualdade é estrutural sobre as três strings já normalizadas,
/// então `Fact::new("Socrates", "IS", "human")` é igual a
/// `Fact::new("socrates", "is", "human")`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fact {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Fact {
    /// Cria um fato normalizando os três componentes.
    pub fn new(subject: &str, predicate: &str, object: &str) -> Self {
        Self {
            subject: normalize(subject),
            predicate: normalize(predicate),
            object: normalize(object),
        }
    }

    /// Chave textual do fato, usada pelo guarda de ciclos do motor de dedução.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

/// Formato `"{sujeito} {predicado} {objeto}"`, ex: `socrates is human`.
impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

/// Regra de inferência, como produzida pelo parser de sentenças.
///
/// As variantes quantificadas (`Universal`, `Capability`) têm uma única
/// variável implícita: a condição é sempre "_x_ is categoria".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    /// "All {category} are {property}"
    Universal { category: String, property: String },
    /// "All {category} can {capability}"
    Capability { category: String, capability: String },
    /// "IF (cond1 AND cond2 ...) THEN (conclusion)"
    Standard { conditions: Vec<Fact>, conclusion: Fact },
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Universal { category, property } => {
                write!(f, "All {} are {}", category, property)
            }
            Rule::Capability {
                category,
                capability,
            } => write!(f, "All {} can {}", category, capability),
            Rule::Standard {
                conditions,
                conclusion,
            } => {
                let conds: Vec<String> = conditions.iter().map(|c| c.to_string()).collect();
                write!(f, "IF ({}) THEN ({})", conds.join(" AND "), conclusion)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fact_equality_ignores_case_and_padding() {
        assert_eq!(
            Fact::new("  Socrates ", "IS", "human"),
            Fact::new("socrates", "is", "human")
        );
    }

    #[test]
    fn fact_display_is_space_separated() {
        let fact = Fact::new("engine", "part of", "car");
        assert_eq!(fact.to_string(), "engine part of car");
        assert_eq!(fact.key(), "engine part of car");
    }

    #[test]
    fn standard_rule_display() {
        let rule = Rule::Standard {
            conditions: vec![
                Fact::new("alice", "teaches", "bob"),
                Fact::new("bob", "is", "student"),
            ],
            conclusion: Fact::new("alice", "is", "teacher"),
        };
        assert_eq!(
            rule.to_string(),
            "IF (alice teaches bob AND bob is student) THEN (alice is teacher)"
        );
    }
}
