//! # PrimeSource — A Fonte de Números Primos
//!
//! O [`PrimeSource`] gera e guarda em cache os números primos usados pela
//! codificação de Gödel. Ele responde três perguntas:
//!
//! - **`is_prime(n)`** — teste determinístico por divisão (memoizado)
//! - **`nth_prime(k)`** — o k-ésimo primo (índice 0 → 2)
//! - **`factorize(n)`** — fatoração em primos, em ordem crescente, com multiplicidade
//!
//! ## Estratégia
//!
//! ```text
//! new(limite)
//!   └── crivo de Eratóstenes até `limite` → primos[0..m]
//!
//! nth_prime(k), k ≥ m
//!   └── busca linear acima do maior primo conhecido
//!       └── cada primo novo entra no cache
//! ```
//!
//! Os caches só crescem. Como os vocabulários de conceitos são pequenos,
//! não há política de evicção.
//!
//! ## Concorrência
//!
//! O cache fica atrás de um `parking_lot::Mutex`, então um `&PrimeSource`
//! pode ser compartilhado entre várias consultas simultâneas.

use std::collections::HashMap;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use parking_lot::Mutex;

/// Limite padrão do crivo inicial (168 primos abaixo de 1000).
pub const DEFAULT_SIEVE_LIMIT: usize = 1000;

/// Fonte de primos com cache interno monotônico.
pub struct PrimeSource {
    cache: Mutex<PrimeCache>,
}

/// Estado mutável protegido pelo Mutex.
struct PrimeCache {
    /// Primos conhecidos, em ordem crescente e sem lacunas.
    primes: Vec<u64>,
    /// Memo de primalidade para números já testados.
    primality: HashMap<u64, bool>,
}

impl PrimeSource {
    /// Cria uma fonte com o crivo padrão ([`DEFAULT_SIEVE_LIMIT`]).
    pub fn new() -> Self {
        Self::with_sieve_limit(DEFAULT_SIEVE_LIMIT)
    }

    /// Cria uma fonte com o crivo de Eratóstenes até `limit` (inclusivo).
    pub fn with_sieve_limit(limit: usize) -> Self {
        let primes = sieve(limit);
        tracing::debug!(limit, count = primes.len(), "PrimeSource: crivo inicial");
        Self {
            cache: Mutex::new(PrimeCache {
                primes,
                primality: HashMap::new(),
            }),
        }
    }

    /// Teste de primalidade memoizado. `n ≤ 1` não é primo.
    pub fn is_prime(&self, n: u64) -> bool {
        self.cache.lock().is_prime(n)
    }

    /// Retorna o k-ésimo primo (índice 0 → 2, índice 4 → 11).
    ///
    /// Se `k` ultrapassa o crivo, estende a sequência por busca linear
    /// a partir do maior primo conhecido.
    pub fn nth_prime(&self, k: usize) -> u64 {
        self.cache.lock().nth(k)
    }

    /// Fatoração em primos, em ordem crescente e com multiplicidade.
    ///
    /// Divide `n` pelos primos conhecidos (estendendo a sequência quando
    /// necessário) até que `p² > resto`; um resto maior que 1 é primo e
    /// entra como último fator. Para `n ≤ 1` retorna vazio.
    ///
    /// ```text
    /// factorize(60)  → [2, 2, 3, 5]
    /// factorize(105) → [3, 5, 7]
    /// factorize(1)   → []
    /// ```
    pub fn factorize(&self, n: &BigUint) -> Vec<BigUint> {
        let mut factors = Vec::new();
        if *n <= BigUint::one() {
            return factors;
        }

        // o Mutex só cobre a busca de cada primo; as divisões rodam fora dele
        let mut rest = n.clone();
        let mut index = 0;
        loop {
            let p = BigUint::from(self.nth_prime(index));
            if &p * &p > rest {
                break;
            }
            loop {
                let (quotient, remainder) = rest.div_rem(&p);
                if !remainder.is_zero() {
                    break;
                }
                rest = quotient;
                factors.push(p.clone());
            }
            index += 1;
        }
        if rest > BigUint::one() {
            factors.push(rest);
        }
        factors
    }

    /// Quantidade de primos atualmente em cache.
    pub fn known_count(&self) -> usize {
        self.cache.lock().primes.len()
    }
}

impl Default for PrimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimeCache {
    fn is_prime(&mut self, n: u64) -> bool {
        if let Some(&known) = self.primality.get(&n) {
            return known;
        }
        let result = trial_division(n);
        self.primality.insert(n, result);
        result
    }

    fn nth(&mut self, k: usize) -> u64 {
        while self.primes.len() <= k {
            self.extend();
        }
        self.primes[k]
    }

    /// Acrescenta o próximo primo após o maior conhecido.
    fn extend(&mut self) {
        let mut candidate = self.primes.last().map_or(2, |p| p + 1);
        while !self.is_prime(candidate) {
            candidate += 1;
        }
        tracing::trace!(prime = candidate, index = self.primes.len(), "PrimeSource: sequência estendida");
        self.primes.push(candidate);
    }
}

/// Divisão por tentativa: elimina 2 e 3, depois testa `6k ± 1` até √n.
fn trial_division(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5u64;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Crivo de Eratóstenes até `limit` (inclusivo).
fn sieve(limit: usize) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }
    let mut is_candidate = vec![true; limit + 1];
    is_candidate[0] = false;
    is_candidate[1] = false;
    let mut i = 2;
    while i * i <= limit {
        if is_candidate[i] {
            for multiple in (i * i..=limit).step_by(i) {
                is_candidate[multiple] = false;
            }
        }
        i += 1;
    }
    is_candidate
        .iter()
        .enumerate()
        .filter(|(_, prime)| **prime)
        .map(|(n, _)| n as u64)
        .collect()
}
