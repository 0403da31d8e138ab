//! # Estado da Aplicação Web
//!
//! A sessão de raciocínio é compartilhada entre os handlers por
//! `Arc<RwLock<Session>>`:
//!
//! ```text
//! POST /learn, /sample, /reset   → write lock (um escritor por vez)
//! POST /query, GET /knowledge    → read lock (várias leituras juntas)
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

use crate::orchestrator::Session;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Sessão atual; um reset troca o valor inteiro.
    pub session: Arc<RwLock<Session>>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
        }
    }
}
