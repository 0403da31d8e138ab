//! # KnowledgeStore — Fatos e Regras Codificados
//!
//! A [`KnowledgeStore`] guarda, em ordem de chegada, os fatos (original +
//! codificação) e as regras codificadas. Ela é **append-only**: não há remoção
//! nem deduplicação, e "o fato está na base" significa "a codificação aparece
//! em algum lugar da sequência".
//!
//! ## Codificação de Regras
//!
//! | Variante | O que é guardado |
//! |----------|------------------|
//! | `Universal` | primos de categoria/propriedade/"is", `(_variable_ is categoria)`, `(_variable_ is propriedade)` |
//! | `Capability` | primos de categoria/capacidade/"can", `(_variable_ is categoria)`, `(_variable_ can capacidade)` |
//! | `Standard` | codificação de cada condição e da conclusão |
//!
//! O codificador vive dentro da store: os dois nascem e morrem juntos, e
//! um reset descarta ambos de uma vez (codificações antigas perdem o sentido).

use super::encoder::{ConceptEncoder, Encoding, Prime, VARIABLE_CONCEPT};
use super::fact::{Fact, Rule};
use super::prime_source::PrimeSource;

/// Texto exibido quando uma regra padrão não pode ser decodificada.
pub const UNPARSEABLE_RULE: &str = "[Rule with unparseable structure]";

/// Fato armazenado junto com sua codificação de Gödel.
#[derive(Clone, Debug)]
pub struct StoredFact {
    pub fact: Fact,
    pub encoding: Encoding,
}

/// Parte codificada de uma regra quantificada (`All X are/can Y`).
#[derive(Clone, Debug)]
pub struct QuantifiedRule {
    /// Primo da categoria (X).
    pub category: Prime,
    /// Primo da propriedade ou capacidade (Y).
    pub property: Prime,
    /// Primo do predicado da conclusão: "is" ou "can".
    pub predicate: Prime,
    /// Codificação de `(_variable_, is, X)`.
    pub membership: Encoding,
    /// Codificação de `(_variable_, is|can, Y)`.
    pub conclusion: Encoding,
}

/// Regra na forma codificada, com a mesma marcação da [`Rule`] de origem.
#[derive(Clone, Debug)]
pub enum EncodedRule {
    Universal(QuantifiedRule),
    Capability(QuantifiedRule),
    Standard {
        conditions: Vec<Encoding>,
        conclusion: Encoding,
    },
}

impl EncodedRule {
    /// Verbo usado nas explicações e descrições: "are" ou "can".
    ///
    /// Regras padrão não têm verbo próprio; retorna `None`.
    pub fn verb(&self) -> Option<&'static str> {
        match self {
            EncodedRule::Universal(_) => Some("are"),
            EncodedRule::Capability(_) => Some("can"),
            EncodedRule::Standard { .. } => None,
        }
    }
}

/// Base de fatos e regras codificados.
pub struct KnowledgeStore {
    encoder: ConceptEncoder,
    facts: Vec<StoredFact>,
    rules: Vec<EncodedRule>,
}

impl KnowledgeStore {
    /// Store vazia com codificador novo (crivo padrão).
    pub fn new() -> Self {
        Self::with_encoder(ConceptEncoder::new())
    }

    /// Store vazia cujo crivo inicial vai até `sieve_limit`.
    pub fn with_sieve_limit(sieve_limit: usize) -> Self {
        Self::with_encoder(ConceptEncoder::with_prime_source(
            PrimeSource::with_sieve_limit(sieve_limit),
        ))
    }

    fn with_encoder(encoder: ConceptEncoder) -> Self {
        Self {
            encoder,
            facts: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Codificador compartilhado pela store e pelo motor de dedução.
    pub fn encoder(&self) -> &ConceptEncoder {
        &self.encoder
    }

    /// Codifica e acrescenta um fato. Retorna a codificação.
    pub fn add_fact(&mut self, fact: Fact) -> Encoding {
        let encoding = self.encoder.encode_fact(&fact);
        tracing::debug!(fact = %fact, encoding = %encoding, "KB: fato armazenado");
        self.facts.push(StoredFact {
            fact,
            encoding: encoding.clone(),
        });
        encoding
    }

    /// Codifica a regra conforme a variante e a acrescenta.
    pub fn add_rule(&mut self, rule: &Rule) -> &EncodedRule {
        let encoded = match rule {
            Rule::Universal { category, property } => {
                EncodedRule::Universal(self.encode_quantified(category, "is", property))
            }
            Rule::Capability {
                category,
                capability,
            } => EncodedRule::Capability(self.encode_quantified(category, "can", capability)),
            Rule::Standard {
                conditions,
                conclusion,
            } => EncodedRule::Standard {
                conditions: conditions
                    .iter()
                    .map(|c| self.encoder.encode_fact(c))
                    .collect(),
                conclusion: self.encoder.encode_fact(conclusion),
            },
        };
        tracing::debug!(rule = %rule, "KB: regra armazenada");
        self.rules.push(encoded);
        &self.rules[self.rules.len() - 1]
    }

    fn encode_quantified(&self, category: &str, predicate: &str, property: &str) -> QuantifiedRule {
        let membership = Fact::new(VARIABLE_CONCEPT, "is", category);
        let conclusion = Fact::new(VARIABLE_CONCEPT, predicate, property);
        QuantifiedRule {
            category: self.encoder.prime_of(category),
            property: self.encoder.prime_of(property),
            predicate: self.encoder.prime_of(predicate),
            membership: self.encoder.encode_fact(&membership),
            conclusion: self.encoder.encode_fact(&conclusion),
        }
    }

    /// Busca linear pela codificação entre os fatos armazenados.
    pub fn contains_fact_encoding(&self, encoding: &Encoding) -> bool {
        self.facts.iter().any(|f| &f.encoding == encoding)
    }

    /// Fatos na ordem de inserção.
    pub fn all_facts(&self) -> &[StoredFact] {
        &self.facts
    }

    /// Regras na ordem de inserção.
    pub fn all_rules(&self) -> &[EncodedRule] {
        &self.rules
    }

    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Texto legível de uma regra codificada.
    ///
    /// Regras padrão são reconstruídas decodificando cada codificação; se
    /// qualquer parte falhar, retorna [`UNPARSEABLE_RULE`] em vez de erro,
    /// para que a listagem completa continue funcionando.
    ///
    /// ```text
    /// All human are mortal
    /// All bird can fly
    /// IF (alice teaches bob AND bob is student) THEN (alice is teacher)
    /// ```
    pub fn describe(&self, rule: &EncodedRule) -> String {
        match rule {
            EncodedRule::Universal(q) | EncodedRule::Capability(q) => format!(
                "All {} {} {}",
                self.encoder.concept_of(q.category),
                rule.verb().unwrap_or("are"),
                self.encoder.concept_of(q.property)
            ),
            EncodedRule::Standard {
                conditions,
                conclusion,
            } => {
                let decoded: Option<Vec<String>> = conditions
                    .iter()
                    .map(|c| self.encoder.decode_fact(c).map(|f| f.to_string()))
                    .collect();
                match (decoded, self.encoder.decode_fact(conclusion)) {
                    (Some(conds), Some(concl)) => {
                        format!("IF ({}) THEN ({})", conds.join(" AND "), concl)
                    }
                    _ => UNPARSEABLE_RULE.to_string(),
                }
            }
        }
    }
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn add_fact_returns_encoding() {
        let mut kb = KnowledgeStore::new();
        let e = kb.add_fact(Fact::new("socrates", "is", "human"));
        assert_eq!(e, BigUint::from(105u32));
        assert!(kb.contains_fact_encoding(&e));
        assert_eq!(kb.fact_count(), 1);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut kb = KnowledgeStore::new();
        kb.add_fact(Fact::new("socrates", "is", "human"));
        kb.add_fact(Fact::new("Socrates", "is", "Human"));
        assert_eq!(kb.all_facts().len(), 2);
        assert_eq!(kb.all_facts()[0].encoding, kb.all_facts()[1].encoding);
    }

    #[test]
    fn missing_encoding_is_not_contained() {
        let mut kb = KnowledgeStore::new();
        kb.add_fact(Fact::new("socrates", "is", "human"));
        let other = kb.encoder().encode_fact(&Fact::new("plato", "is", "human"));
        assert!(!kb.contains_fact_encoding(&other));
    }

    #[test]
    fn universal_rule_records_primes() {
        let mut kb = KnowledgeStore::new();
        let rule = Rule::Universal {
            category: "human".into(),
            property: "mortal".into(),
        };
        let encoded = kb.add_rule(&rule).clone();
        let enc = kb.encoder();
        match encoded {
            EncodedRule::Universal(q) => {
                assert_eq!(q.category, enc.prime_of("human"));
                assert_eq!(q.property, enc.prime_of("mortal"));
                assert_eq!(q.predicate, enc.prime_of("is"));
                assert_eq!(
                    q.membership,
                    enc.encode_fact(&Fact::new(VARIABLE_CONCEPT, "is", "human"))
                );
            }
            other => panic!("variante inesperada: {:?}", other),
        }
    }

    // ─── describe ──────────────────────────────────────────────

    #[test]
    fn describe_quantified_rules() {
        let mut kb = KnowledgeStore::new();
        kb.add_rule(&Rule::Universal {
            category: "human".into(),
            property: "mortal".into(),
        });
        kb.add_rule(&Rule::Capability {
            category: "bird".into(),
            capability: "fly".into(),
        });
        let described: Vec<String> = kb.all_rules().iter().map(|r| kb.describe(r)).collect();
        assert_eq!(described, vec!["All human are mortal", "All bird can fly"]);
    }

    #[test]
    fn describe_standard_rule_decodes_parts() {
        let mut kb = KnowledgeStore::new();
        // registra em ordem para que a decodificação crescente preserve posições
        for concept in ["alice", "teaches", "bob", "is", "student", "teacher"] {
            kb.encoder().prime_of(concept);
        }
        let rule = Rule::Standard {
            conditions: vec![Fact::new("alice", "teaches", "bob")],
            conclusion: Fact::new("alice", "is", "teacher"),
        };
        kb.add_rule(&rule);
        assert_eq!(
            kb.describe(&kb.all_rules()[0]),
            "IF (alice teaches bob) THEN (alice is teacher)"
        );
    }

    #[test]
    fn describe_unparseable_standard_rule() {
        let kb = KnowledgeStore::new();
        let broken = EncodedRule::Standard {
            conditions: vec![BigUint::from(4u32)],
            conclusion: BigUint::from(105u32),
        };
        assert_eq!(kb.describe(&broken), UNPARSEABLE_RULE);
    }
}
