#![allow(dead_code)]
//! # Gödel Reasoner
//!
//! **Ponto de entrada** do raciocinador simbólico com codificação de Gödel.
//!
//! Cada conceito recebe um número primo na ordem em que aparece; cada fato
//! `(sujeito, predicado, objeto)` é codificado como o produto dos três primos.
//! Perguntas são respondidas por encadeamento para trás sobre fatos e regras.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (RUST_LOG)
//!   ├── Lê Config do ambiente (GODEL_*)
//!   ├── Cria Session vazia e AppState
//!   ├── Monta Router
//!   └── Inicia servidor TCP
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! RUST_LOG=debug GODEL_ADDR=127.0.0.1:8080 cargo run
//! ```

/// Módulo `config` — configuração por variáveis de ambiente.
mod config;

/// Módulo `core` — primos, codificador de conceitos, fatos, regras e store.
mod core;

/// Módulo `error` — erros da camada externa.
mod error;

/// Módulo `inference` — motor de dedução por encadeamento para trás.
mod inference;

/// Módulo `nlu` — parser de frases em fatos, regras e perguntas.
mod nlu;

/// Módulo `orchestrator` — sessão de raciocínio (learn / query / reset).
mod orchestrator;

/// Módulo `web` — servidor axum, handlers e templates.
mod web;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::orchestrator::Session;
use crate::web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Gödel Reasoner — Starting...");

    let config = Config::from_env().context("invalid configuration")?;
    tracing::info!(
        addr = %config.addr,
        sieve_limit = config.sieve_limit,
        max_depth = config.max_depth,
        "Configuração carregada"
    );

    let state = AppState::new(Session::with_config(&config));
    let app = web::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!("Server running at http://{}", config.addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
