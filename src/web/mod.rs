//! # Módulo Web — A Interface do Raciocinador
//!
//! Camada de apresentação construída com **Axum** + **HTMX** + **Maud**.
//!
//! ## Rotas
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ Axum Router (este módulo)                            │
//! │  ├── GET  /               → página completa          │
//! │  ├── POST /learn          → HTMX fragment (linhas)   │
//! │  ├── POST /query          → HTMX fragment (resposta) │
//! │  ├── GET  /knowledge      → HTMX fragment (base)     │
//! │  ├── POST /sample         → HTMX fragment (linhas)   │
//! │  ├── POST /reset          → HTMX fragment            │
//! │  ├── GET  /api/knowledge  → JSON KnowledgeSummary    │
//! │  └── POST /api/query      → JSON QueryOutcome        │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submódulos
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`templates`] | Templates Maud (HTML server-side) |

pub mod handlers;
pub mod state;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // ── Página HTML ───────────────────────────────────────
        .route("/", get(handlers::index))
        // ── HTMX fragments ───────────────────────────────────
        .route("/learn", post(handlers::learn))
        .route("/query", post(handlers::query))
        .route("/knowledge", get(handlers::knowledge_panel))
        .route("/sample", post(handlers::load_sample))
        .route("/reset", post(handlers::reset_session))
        // ── API JSON ──────────────────────────────────────────
        .route("/api/knowledge", get(handlers::api_knowledge))
        .route("/api/query", post(handlers::api_query))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
