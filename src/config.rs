//! # Configuração — Variáveis de Ambiente
//!
//! Todas as opções têm valor padrão; nada é lido de disco.
//!
//! | Variável | Padrão | Uso |
//! |----------|--------|-----|
//! | `GODEL_ADDR` | `0.0.0.0:3000` | endereço do servidor web |
//! | `GODEL_SIEVE_LIMIT` | `1000` | limite do crivo inicial do [`PrimeSource`](crate::core::PrimeSource) |
//! | `GODEL_MAX_DEPTH` | `256` | profundidade máxima da dedução |
//!
//! O nível de log continua vindo de `RUST_LOG` (ver `main`).

use std::str::FromStr;

use crate::core::prime_source::DEFAULT_SIEVE_LIMIT;
use crate::error::AppError;
use crate::inference::reasoning::DEFAULT_MAX_DEPTH;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Configuração de runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub addr: String,
    pub sieve_limit: usize,
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            sieve_limit: DEFAULT_SIEVE_LIMIT,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    /// Lê a configuração do ambiente do processo.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Lê a configuração de uma função de lookup (permite testar sem tocar no ambiente).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            addr: lookup("GODEL_ADDR").unwrap_or(defaults.addr),
            sieve_limit: parse_var(&lookup, "GODEL_SIEVE_LIMIT", defaults.sieve_limit)?,
            max_depth: parse_var(&lookup, "GODEL_MAX_DEPTH", defaults.max_depth)?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|_| AppError::Config { var, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.addr, "0.0.0.0:3000");
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("GODEL_ADDR", "127.0.0.1:8080"),
            ("GODEL_SIEVE_LIMIT", "50"),
            ("GODEL_MAX_DEPTH", " 12 "),
        ]))
        .unwrap();
        assert_eq!(cfg.addr, "127.0.0.1:8080");
        assert_eq!(cfg.sieve_limit, 50);
        assert_eq!(cfg.max_depth, 12);
    }

    #[test]
    fn invalid_number_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("GODEL_MAX_DEPTH", "deep")])).unwrap_err();
        assert!(matches!(err, AppError::Config { var: "GODEL_MAX_DEPTH", .. }));
    }
}
