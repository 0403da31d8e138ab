//! # Erros da Camada Externa
//!
//! O núcleo (codificação, store, dedução) não tem erros fatais: falhas de
//! parse e de decodificação viram `None`, ciclos viram um veredito. Os erros
//! abaixo existem só nas bordas: configuração inválida no boot e entradas
//! vazias nos endpoints JSON.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Texto ou pergunta vazia.
    #[error("input is empty")]
    EmptyInput,

    /// Variável de ambiente com valor inválido.
    #[error("invalid value for {var}: {value:?}")]
    Config { var: &'static str, value: String },
}

/// Corpo JSON de erro: `{ "error": "..." }`.
#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::EmptyInput => StatusCode::BAD_REQUEST,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(error = %self, "Requisição rejeitada");
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
