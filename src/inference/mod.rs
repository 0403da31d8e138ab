//! # Módulo Inference — Dedução por Backward Chaining
//!
//! Este módulo contém o **motor de dedução**: dado um fato-objetivo, ele
//! procura na [`KnowledgeStore`](crate::core::KnowledgeStore) fatos diretos,
//! regras quantificadas, regras padrão e pontes transitivas que o sustentem.
//!
//! ## Estratégias
//!
//! | Estratégia | Padrão | Exemplo |
//! |------------|--------|---------|
//! | **Direta** | fato na base | `socrates is human` |
//! | **Universal** | `S is X` + `All X are Y` ⊢ `S is Y` | socrates é mortal |
//! | **Capacidade** | `S is X` + `All X can Y` ⊢ `S can Y` | pinguim voa |
//! | **Padrão** | `c1 ∧ c2` + `IF (c1 AND c2) THEN (c)` ⊢ `c` | alice é professora |
//! | **Transitiva** | `A r B` + `B r C` ⊢ `A r C`, r ∈ {is, part of} | motor faz parte do sistema |
//!
//! Veja [`ReasoningEngine`] para detalhes.

/// Sub-módulo com o motor de backward chaining.
pub mod reasoning;

pub use reasoning::{Deduction, ReasoningEngine};
