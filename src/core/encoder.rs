//! # ConceptEncoder — A Bijeção Conceito ↔ Primo
//!
//! O [`ConceptEncoder`] atribui a cada conceito normalizado um **primo único**,
//! na ordem em que o conceito é pedido pela primeira vez, e codifica fatos
//! como o produto dos três primos de seus componentes (codificação de Gödel).
//!
//! ## Exemplo
//!
//! ```text
//! _variable_ → 2   (reservado na construção)
//! socrates   → 3
//! is         → 5
//! human      → 7
//!
//! encode("socrates is human") = 3 × 5 × 7 = 105
//! decode(105) = [3, 5, 7] → "socrates is human"
//! ```
//!
//! ## Ordem de Decodificação
//!
//! A decodificação fatora a codificação e atribui os três fatores, em
//! **ordem numérica crescente**, às posições sujeito/predicado/objeto.
//! Não há marcação de papel nos primos: se o predicado recebeu um primo
//! menor que o sujeito, o fato decodificado sai com as posições trocadas.
//!
//! ## Precisão Arbitrária
//!
//! Produtos de primos crescem rápido e não cabem com segurança em inteiros
//! de largura fixa; um overflow silencioso quebraria a injetividade.
//! Por isso toda codificação é um [`BigUint`].

use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use parking_lot::RwLock;

use super::fact::{normalize, Fact};
use super::prime_source::PrimeSource;

/// Primo atribuído a um conceito.
pub type Prime = u64;

/// Codificação de Gödel de um fato (produto de primos).
pub type Encoding = BigUint;

/// Conceito reservado que representa a variável ligada nas regras quantificadas.
pub const VARIABLE_CONCEPT: &str = "_variable_";

/// Tabela da bijeção, protegida por `RwLock`.
#[derive(Default)]
struct ConceptTable {
    forward: HashMap<String, Prime>,
    reverse: HashMap<Prime, String>,
    /// Conceitos na ordem de atribuição (para exibição).
    order: Vec<String>,
    /// Próximo índice a pedir ao [`PrimeSource`].
    next_index: usize,
}

/// Codificador conceito ↔ primo.
///
/// Usa mutabilidade interior: consultas que tocam conceitos novos
/// precisam atribuir primos mesmo sob um `&ConceptEncoder`.
pub struct ConceptEncoder {
    primes: PrimeSource,
    table: RwLock<ConceptTable>,
}

impl ConceptEncoder {
    /// Cria um codificador com o crivo padrão e registra [`VARIABLE_CONCEPT`].
    pub fn new() -> Self {
        Self::with_prime_source(PrimeSource::new())
    }

    /// Cria um codificador sobre uma fonte de primos já configurada.
    pub fn with_prime_source(primes: PrimeSource) -> Self {
        let encoder = Self {
            primes,
            table: RwLock::new(ConceptTable::default()),
        };
        encoder.prime_of(VARIABLE_CONCEPT);
        encoder
    }

    /// Retorna o primo do conceito, atribuindo o próximo primo livre se for novo.
    ///
    /// Lookup antes de atribuir: o mesmo conceito normalizado sempre recebe
    /// o mesmo primo, e conceitos distintos nunca compartilham um primo.
    pub fn prime_of(&self, concept: &str) -> Prime {
        let concept = normalize(concept);
        if let Some(&prime) = self.table.read().forward.get(&concept) {
            return prime;
        }

        let mut table = self.table.write();
        // outra thread pode ter atribuído entre os dois locks
        if let Some(&prime) = table.forward.get(&concept) {
            return prime;
        }
        let prime = self.primes.nth_prime(table.next_index);
        table.next_index += 1;
        table.forward.insert(concept.clone(), prime);
        table.reverse.insert(prime, concept.clone());
        table.order.push(concept.clone());
        tracing::debug!(concept = %concept, prime, "Encoder: primo atribuído");
        prime
    }

    /// Primo do conceito, sem atribuir um novo.
    pub fn peek_prime(&self, concept: &str) -> Option<Prime> {
        self.table.read().forward.get(&normalize(concept)).copied()
    }

    /// Lookup reverso. Primos desconhecidos viram um rótulo com o valor.
    pub fn concept_of(&self, prime: Prime) -> String {
        self.table
            .read()
            .reverse
            .get(&prime)
            .cloned()
            .unwrap_or_else(|| unknown_label(&prime))
    }

    /// Codificação de Gödel do fato: `p(sujeito) × p(predicado) × p(objeto)`.
    pub fn encode_fact(&self, fact: &Fact) -> Encoding {
        let subject = self.prime_of(&fact.subject);
        let predicate = self.prime_of(&fact.predicate);
        let object = self.prime_of(&fact.object);
        BigUint::from(subject) * predicate * object
    }

    /// Decodifica uma codificação em fato.
    ///
    /// Só tem sucesso quando a fatoração tem exatamente três fatores
    /// (com multiplicidade). Os fatores são mapeados em ordem crescente
    /// para sujeito, predicado e objeto.
    pub fn decode_fact(&self, encoding: &Encoding) -> Option<Fact> {
        let factors = self.primes.factorize(encoding);
        if factors.len() != 3 {
            tracing::debug!(encoding = %encoding, factors = factors.len(), "Encoder: decodificação falhou");
            return None;
        }
        let names: Vec<String> = factors
            .iter()
            .map(|f| match f.to_u64() {
                Some(prime) => self.concept_of(prime),
                None => unknown_label(f),
            })
            .collect();
        Some(Fact::new(&names[0], &names[1], &names[2]))
    }

    /// Conceitos e primos, na ordem de atribuição.
    pub fn concepts(&self) -> Vec<(String, Prime)> {
        let table = self.table.read();
        table
            .order
            .iter()
            .map(|c| (c.clone(), table.forward[c]))
            .collect()
    }

    /// Número de conceitos registrados (incluindo [`VARIABLE_CONCEPT`]).
    pub fn concept_count(&self) -> usize {
        self.table.read().order.len()
    }
}

impl Default for ConceptEncoder {
    fn default() -> Self {
        Self::new()
    }
}

fn unknown_label(prime: &dyn std::fmt::Display) -> String {
    format!("<unknown:{}>", prime)
}
