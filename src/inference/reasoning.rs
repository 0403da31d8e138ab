//! # Backward Chaining sobre Fatos Codificados
//!
//! O [`ReasoningEngine`] parte de um fato-objetivo e procura, recursivamente,
//! fatos e regras que o estabeleçam. Cada chamada de [`deduce`](ReasoningEngine::deduce)
//! cria seu próprio conjunto de visitados, passado explicitamente pela recursão.
//!
//! ## Ordem de Tentativas em `decide`
//!
//! ```text
//! decide(fato)
//!   ├── 1. fato já visitado?          → falha "Circular reasoning detected"
//!   ├── 2. codificação na base?       → sucesso "Direct fact in knowledge base"
//!   ├── 3. regras Universal/Capability → decide(sujeito is categoria)
//!   ├── 4. regras Standard             → decide(cada condição), curto-circuito
//!   ├── 5. "is" / "part of"            → decide(intermediário predicado objeto)
//!   └── 6. nada funcionou             → falha "Could not deduce"
//! ```
//!
//! ## Terminação
//!
//! O conjunto de visitados só cresce e um fato revisitado não é reexpandido.
//! Como a base tem um número finito de fatos alcançáveis por substituição,
//! toda chamada termina. O limite de profundidade é um corte extra que não
//! altera o resultado para bases do tamanho usado na prática.
//!
//! ## Exemplo
//!
//! ```text
//! Base:   socrates is human
//!         All human are mortal
//! Query:  socrates is mortal
//! → true: "Direct fact in knowledge base: socrates is human, and all human are mortal"
//! ```

use std::collections::HashSet;

use serde::Serialize;

use crate::core::{EncodedRule, Encoding, Fact, KnowledgeStore};

/// Profundidade máxima de recursão padrão.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Estado de uma chamada de [`ReasoningEngine::deduce`].
///
/// `visited` só cresce; `path` é a pilha de objetivos ainda abertos. Um fato
/// revisitado só é um ciclo de verdade quando ainda está em `path`.
#[derive(Default)]
struct Trail {
    visited: HashSet<String>,
    path: Vec<String>,
}

/// Resultado de uma dedução: veredito + trilha de justificativa legível.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Deduction {
    pub result: bool,
    pub explanation: String,
}

/// Veredito interno, que lembra se a falha veio do guarda de ciclos.
struct Verdict {
    deduction: Deduction,
    cycle: bool,
}

impl Verdict {
    fn success(explanation: String) -> Self {
        Self {
            deduction: Deduction {
                result: true,
                explanation,
            },
            cycle: false,
        }
    }

    fn failure(explanation: String) -> Self {
        Self {
            deduction: Deduction {
                result: false,
                explanation,
            },
            cycle: false,
        }
    }

    fn cycle(explanation: String) -> Self {
        Self {
            cycle: true,
            ..Self::failure(explanation)
        }
    }

    fn holds(&self) -> bool {
        self.deduction.result
    }

    fn explanation(&self) -> &str {
        &self.deduction.explanation
    }
}

/// Motor de backward chaining.
///
/// Não guarda estado entre chamadas: duas deduções simultâneas sobre a
/// mesma store nunca enxergam o guarda de ciclos uma da outra.
#[derive(Clone, Debug)]
pub struct ReasoningEngine {
    max_depth: usize,
}

impl ReasoningEngine {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Decide se `query` segue da base e explica como.
    pub fn deduce(&self, store: &KnowledgeStore, query: &Fact) -> Deduction {
        let mut trail = Trail::default();
        let verdict = self.decide(store, query, &mut trail);
        tracing::debug!(
            query = %query,
            result = verdict.holds(),
            visited = trail.visited.len(),
            "Dedução concluída"
        );
        verdict.deduction
    }

    fn decide(&self, store: &KnowledgeStore, fact: &Fact, trail: &mut Trail) -> Verdict {
        let depth = trail.path.len();
        if depth > self.max_depth {
            tracing::warn!(fact = %fact, depth, "Limite de profundidade atingido");
            return Verdict::failure(format!("Depth limit reached: {}", fact));
        }

        // 1. guarda de ciclos
        let key = fact.key();
        if trail.visited.contains(&key) {
            let explanation = format!("Circular reasoning detected: {}", fact);
            // já decidido num ramo irmão: falha comum, sem ciclo
            return if trail.path.contains(&key) {
                Verdict::cycle(explanation)
            } else {
                Verdict::failure(explanation)
            };
        }
        trail.visited.insert(key.clone());
        trail.path.push(key);
        let verdict = self.expand(store, fact, trail);
        trail.path.pop();
        verdict
    }

    /// Passos 2 a 6 de `decide`, com `fact` no topo de `trail.path`.
    fn expand(&self, store: &KnowledgeStore, fact: &Fact, trail: &mut Trail) -> Verdict {
        // 2. fato direto
        let encoding = store.encoder().encode_fact(fact);
        if store.contains_fact_encoding(&encoding) {
            return Verdict::success(format!("Direct fact in knowledge base: {}", fact));
        }

        // 3. regras quantificadas
        if let Some(verdict) = self.try_quantified(store, fact, trail) {
            return verdict;
        }

        // 4. regras padrão
        let mut blocked_by_cycle = None;
        if let Some(verdict) =
            self.try_standard(store, fact, &encoding, trail, &mut blocked_by_cycle)
        {
            return verdict;
        }

        // 5. transitividade
        if let Some(verdict) = self.try_transitive(store, fact, trail) {
            return verdict;
        }

        // 6. exaustão
        match blocked_by_cycle {
            Some(explanation) => Verdict::cycle(explanation),
            None => Verdict::failure(format!("Could not deduce: {}", fact)),
        }
    }

    /// Regras `All X are Y` / `All X can Y`, em ordem de armazenamento.
    ///
    /// A regra casa quando o predicado da query é o predicado da regra e o
    /// objeto é a propriedade; o sub-objetivo é `(sujeito, is, X)`.
    fn try_quantified(
        &self,
        store: &KnowledgeStore,
        fact: &Fact,
        trail: &mut Trail,
    ) -> Option<Verdict> {
        let encoder = store.encoder();
        let predicate = encoder.prime_of(&fact.predicate);
        let object = encoder.prime_of(&fact.object);

        for rule in store.all_rules() {
            let (quantified, verb) = match rule {
                EncodedRule::Universal(q) => (q, "are"),
                EncodedRule::Capability(q) => (q, "can"),
                EncodedRule::Standard { .. } => continue,
            };
            if quantified.predicate != predicate || quantified.property != object {
                continue;
            }

            let category = encoder.concept_of(quantified.category);
            let membership = Fact::new(&fact.subject, "is", &category);
            let sub = self.decide(store, &membership, trail);
            if sub.holds() {
                return Some(Verdict::success(format!(
                    "{}, and all {} {} {}",
                    sub.explanation(),
                    category,
                    verb,
                    encoder.concept_of(quantified.property)
                )));
            }
        }
        None
    }

    /// Regras `IF ... THEN ...` cuja conclusão tem a mesma codificação da query.
    ///
    /// Condições são decodificadas e decididas da esquerda para a direita,
    /// parando na primeira falha. Uma regra insatisfeita não encerra a busca.
    /// Se alguma condição falhou por um ciclo real (um objetivo ainda aberto
    /// na pilha), a explicação vai para `blocked_by_cycle`.
    fn try_standard(
        &self,
        store: &KnowledgeStore,
        fact: &Fact,
        encoding: &Encoding,
        trail: &mut Trail,
        blocked_by_cycle: &mut Option<String>,
    ) -> Option<Verdict> {
        let encoder = store.encoder();

        'rules: for rule in store.all_rules() {
            let EncodedRule::Standard {
                conditions,
                conclusion,
            } = rule
            else {
                continue;
            };
            if conclusion != encoding {
                continue;
            }

            let mut explanations = Vec::with_capacity(conditions.len());
            for condition in conditions {
                let Some(condition) = encoder.decode_fact(condition) else {
                    continue 'rules;
                };
                let sub = self.decide(store, &condition, trail);
                if !sub.holds() {
                    if sub.cycle && blocked_by_cycle.is_none() {
                        *blocked_by_cycle = Some(sub.deduction.explanation);
                    }
                    continue 'rules;
                }
                explanations.push(sub.deduction.explanation);
            }

            return Some(Verdict::success(format!(
                "{}, which implies {}",
                explanations.join(", "),
                fact
            )));
        }
        None
    }

    /// Ponte transitiva para "is" e "part of".
    ///
    /// Para cada fato armazenado `(sujeito, predicado, m)`, tenta
    /// `(m, predicado, objeto)`.
    fn try_transitive(
        &self,
        store: &KnowledgeStore,
        fact: &Fact,
        trail: &mut Trail,
    ) -> Option<Verdict> {
        if fact.predicate != "is" && fact.predicate != "part of" {
            return None;
        }

        for stored in store.all_facts() {
            if stored.fact.subject != fact.subject || stored.fact.predicate != fact.predicate {
                continue;
            }
            let intermediate = &stored.fact.object;
            let bridge = Fact::new(intermediate, &fact.predicate, &fact.object);
            let sub = self.decide(store, &bridge, trail);
            if sub.holds() {
                return Some(Verdict::success(format!(
                    "{} {} {}, and {}",
                    fact.subject,
                    fact.predicate,
                    intermediate,
                    sub.explanation()
                )));
            }
        }
        None
    }
}

impl Default for ReasoningEngine {
    fn default() -> Self {
        Self::new()
    }
}
