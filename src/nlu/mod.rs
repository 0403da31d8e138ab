//! # Camada de Linguagem — Frases em Inglês para Fatos e Regras
//!
//! A camada de linguagem é propositalmente simples: um conjunto fixo de
//! templates sobre conectivos em inglês ("is", "has", "can", "cannot",
//! "likes", "teaches", "part of", "All … are …", "If … then …", ...).
//! Nada aqui tenta entender frases livres; o que não casa com um template
//! volta como `None` e o chamador decide como exibir a falha.
//!
//! ```text
//! "Socrates is a human."       → parse_fact  → (socrates, is, human)
//! "All humans are mortal."     → parse_rule  → Universal(human, mortal)
//! "Is Socrates mortal?"        → parse_query → (socrates, is, mortal)
//! ```
//!
//! Veja [`SentenceParser`].

/// Sub-módulo com o parser de templates.
pub mod parser;

pub use parser::{normalize_sentence, singularize, SentenceParser};
