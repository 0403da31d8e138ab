//! # Orquestrador — A Sessão de Raciocínio
//!
//! A [`Session`] junta parser, store e motor de dedução e expõe as quatro
//! operações que a interface usa:
//!
//! ```text
//! learn(texto)         → ["Added fact: ...", "Added rule: ...", "Failed to parse: ..."]
//! query(pergunta)      → QueryOutcome { answer: Yes | No | Unknown, explanation, ... }
//! knowledge_summary()  → KnowledgeSummary { facts, rules }
//! reset()              → Session nova (o chamador substitui a antiga)
//! ```
//!
//! ## Fluxo de `learn`
//!
//! ```text
//! texto
//!   ├── divide em . ! ?
//!   └── para cada frase não vazia (normalizada):
//!       ├── parse_rule → add_rule  → "Added rule: {regra}"
//!       ├── parse_fact → add_fact  → "Added fact: {fato}"
//!       └── senão                  → "Failed to parse: \"{frase}\""
//! ```
//!
//! A regra é tentada antes do fato: "all humans are mortal" também casaria
//! com o template de fato "X are Y".
//!
//! ## Concorrência
//!
//! `learn` exige `&mut self`; `query` e `knowledge_summary` só `&self`.
//! Na camada web a sessão fica em `Arc<RwLock<Session>>`: escritas pegam o
//! write lock e várias consultas podem rodar juntas sob o read lock.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::config::Config;
use crate::core::{Fact, KnowledgeStore, Prime, Rule};
use crate::inference::ReasoningEngine;
use crate::nlu::{normalize_sentence, singularize, SentenceParser};

/// Texto de exemplo carregado pelo botão "Sample data" da interface.
///
/// A regra condicional vem primeiro: seus conceitos recebem primos na ordem
/// sujeito < predicado < objeto e a decodificação crescente reproduz as
/// condições como foram escritas.
pub const SAMPLE_KNOWLEDGE: &str = "\
Alice teaches Bob. Bob is a student. \
If alice teaches bob and bob is a student then alice is a teacher. \
Alice likes music. Bob has a bicycle. \
Socrates is a human. All humans are mortal. \
Penguins are birds. All birds can fly. Penguins cannot fly. \
The engine is part of the car. The car is part of the transportation system.";

/// Resposta a uma pergunta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Answer {
    Yes,
    No,
    /// A pergunta não casou com nenhum template.
    Unknown,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
            Answer::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Resultado completo de uma pergunta, pronto para a interface.
#[derive(Clone, Debug, Serialize)]
pub struct QueryOutcome {
    /// Pergunta original, como digitada.
    pub query: String,
    /// Fato-consulta interpretado, se a pergunta casou com um template.
    pub parsed_query: Option<String>,
    pub answer: Answer,
    pub explanation: String,
}

/// Listagem legível da base.
#[derive(Clone, Debug, Default, Serialize)]
pub struct KnowledgeSummary {
    pub facts: Vec<String>,
    pub rules: Vec<String>,
}

/// Sessão de raciocínio: parser + store + motor.
pub struct Session {
    parser: Arc<SentenceParser>,
    store: KnowledgeStore,
    engine: ReasoningEngine,
    config: Config,
}

impl Session {
    /// Sessão vazia com a configuração padrão.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self::build(Arc::new(SentenceParser::new()), config.clone())
    }

    fn build(parser: Arc<SentenceParser>, config: Config) -> Self {
        Self {
            parser,
            store: KnowledgeStore::with_sieve_limit(config.sieve_limit),
            engine: ReasoningEngine::with_max_depth(config.max_depth),
            config,
        }
    }

    /// Aprende cada frase do texto e devolve uma linha de resultado por frase.
    pub fn learn(&mut self, text: &str) -> Vec<String> {
        let mut results = Vec::new();
        for raw in text.split(['.', '!', '?']) {
            let sentence = normalize_sentence(raw);
            if sentence.is_empty() {
                continue;
            }

            if let Some(rule) = self.parser.parse_rule(&sentence) {
                self.store.add_rule(&rule);
                results.push(format!("Added rule: {}", rule));
            } else if let Some(fact) = self.parser.parse_fact(&sentence) {
                results.push(format!("Added fact: {}", fact));
                self.store.add_fact(fact);
            } else {
                tracing::debug!(sentence = %sentence, "Frase não reconhecida");
                results.push(format!("Failed to parse: \"{}\"", sentence));
            }
        }
        tracing::info!(
            sentences = results.len(),
            facts = self.store.fact_count(),
            rules = self.store.rule_count(),
            "Texto aprendido"
        );
        results
    }

    /// Interpreta a pergunta e decide a resposta por dedução.
    pub fn query(&self, question: &str) -> QueryOutcome {
        let Some(fact) = self.parser.parse_query(question) else {
            return QueryOutcome {
                query: question.to_string(),
                parsed_query: None,
                answer: Answer::Unknown,
                explanation: "Could not understand the question".to_string(),
            };
        };
        let fact = self.known_singular_subject(fact);

        let deduction = self.engine.deduce(&self.store, &fact);
        tracing::info!(query = %fact, result = deduction.result, "Pergunta respondida");
        QueryOutcome {
            query: question.to_string(),
            parsed_query: Some(fact.to_string()),
            answer: if deduction.result { Answer::Yes } else { Answer::No },
            explanation: deduction.explanation,
        }
    }

    /// Em `can X Y?` o sujeito pode vir no plural ("can penguins fly").
    /// Usa o singular quando a base já conhece esse conceito, o que deixa
    /// nomes como "socrates" intactos.
    fn known_singular_subject(&self, fact: Fact) -> Fact {
        if fact.predicate != "can" {
            return fact;
        }
        let singular = singularize(&fact.subject);
        if singular == fact.subject || self.store.encoder().peek_prime(&singular).is_none() {
            return fact;
        }
        Fact::new(&singular, &fact.predicate, &fact.object)
    }

    /// Fatos como `"{fato} [{codificação}]"` e regras via `describe`.
    pub fn knowledge_summary(&self) -> KnowledgeSummary {
        KnowledgeSummary {
            facts: self
                .store
                .all_facts()
                .iter()
                .map(|f| format!("{} [{}]", f.fact, f.encoding))
                .collect(),
            rules: self
                .store
                .all_rules()
                .iter()
                .map(|r| self.store.describe(r))
                .collect(),
        }
    }

    /// Tabela conceito → primo, na ordem de atribuição.
    pub fn concept_table(&self) -> Vec<(String, Prime)> {
        self.store.encoder().concepts()
    }

    /// Acrescenta um fato já estruturado, sem passar pelo parser.
    pub fn add_fact(&mut self, fact: Fact) {
        self.store.add_fact(fact);
    }

    /// Acrescenta uma regra já estruturada, sem passar pelo parser.
    pub fn add_rule(&mut self, rule: &Rule) {
        self.store.add_rule(rule);
    }

    /// Carrega [`SAMPLE_KNOWLEDGE`].
    pub fn load_sample(&mut self) -> Vec<String> {
        self.learn(SAMPLE_KNOWLEDGE)
    }

    /// Sessão nova com a mesma configuração.
    ///
    /// Não altera `self`: o chamador troca a sessão antiga pela nova, e todas
    /// as codificações emitidas pela antiga deixam de valer.
    pub fn reset(&self) -> Session {
        tracing::info!("Sessão reiniciada");
        Self::build(Arc::clone(&self.parser), self.config.clone())
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
