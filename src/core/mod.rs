//! # Módulo Core — Codificação de Gödel e Base de Conhecimento
//!
//! Este módulo agrupa os tipos sobre os quais todo o raciocínio acontece.
//! As camadas vão das folhas para o topo:
//!
//! - [`PrimeSource`] — gera primos, testa primalidade e fatora
//! - [`ConceptEncoder`] — bijeção conceito ↔ primo, codifica/decodifica fatos
//! - [`KnowledgeStore`] — fatos e regras codificados, append-only
//! - [`Fact`] / [`Rule`] — as sentenças, como saem do parser
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::{Fact, KnowledgeStore, Rule};
//!
//! let mut kb = KnowledgeStore::new();
//! let e = kb.add_fact(Fact::new("Socrates", "is", "human"));
//! kb.add_rule(&Rule::Universal { category: "human".into(), property: "mortal".into() });
//!
//! assert!(kb.contains_fact_encoding(&e));
//! assert_eq!(kb.describe(&kb.all_rules()[0]), "All human are mortal");
//! ```

/// Sub-módulo com [`Fact`], [`Rule`] e a normalização de conceitos.
pub mod fact;

/// Sub-módulo com o [`PrimeSource`] — crivo, primalidade e fatoração.
pub mod prime_source;

/// Sub-módulo com o [`ConceptEncoder`] — a bijeção conceito ↔ primo.
pub mod encoder;

/// Sub-módulo com a [`KnowledgeStore`] — fatos e regras codificados.
pub mod knowledge_store;

pub use encoder::{ConceptEncoder, Encoding, Prime, VARIABLE_CONCEPT};
pub use fact::{normalize, Fact, Rule};
pub use knowledge_store::{EncodedRule, KnowledgeStore, QuantifiedRule, StoredFact};
pub use prime_source::PrimeSource;
