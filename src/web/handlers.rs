//! # Handlers HTTP — Os Endpoints do Raciocinador
//!
//! Cada função pública é um handler Axum mapeado em
//! [`super::create_router()`]. As rotas HTML devolvem **HTMX fragments**;
//! as rotas `/api/*` devolvem JSON.
//!
//! | Handler | Método | Retorno | Lock |
//! |---------|--------|---------|------|
//! | `index` | GET | HTML completo | read |
//! | `learn` | POST | fragment (linhas) | write |
//! | `query` | POST | fragment (resposta) | read |
//! | `knowledge_panel` | GET | fragment (base) | read |
//! | `load_sample` | POST | fragment (linhas) | write |
//! | `reset_session` | POST | fragment | write |
//! | `api_knowledge` | GET | JSON | read |
//! | `api_query` | POST | JSON | read |
//!
//! Rotas que alteram a base respondem com o header
//! `HX-Trigger: knowledge-changed`, que faz o painel lateral se recarregar.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use super::state::AppState;
use super::templates;
use crate::error::AppError;
use crate::orchestrator::{KnowledgeSummary, QueryOutcome};

/// Evento HTMX disparado quando a base muda.
const KNOWLEDGE_CHANGED: (&str, &str) = ("HX-Trigger", "knowledge-changed");

/// Converte Maud Markup em resposta Html<String> do Axum.
fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

/// Dados do formulário de aprendizado (campo `text`).
#[derive(serde::Deserialize)]
pub struct LearnForm {
    pub text: String,
}

/// Dados do formulário de pergunta (campo `question`).
#[derive(serde::Deserialize)]
pub struct QueryForm {
    pub question: String,
}

/// Corpo de `POST /api/query`.
#[derive(serde::Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

/// GET `/` — Página principal com o estado atual da base.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.read();
    markup_to_html(templates::full_page(
        &session.knowledge_summary(),
        &session.concept_table(),
    ))
}

/// POST `/learn` — Aprende o texto do formulário, frase por frase.
pub async fn learn(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<LearnForm>,
) -> Response {
    let text = form.text.trim();
    if text.is_empty() {
        // nada mudou: sem HX-Trigger
        return markup_to_html(maud::html! {}).into_response();
    }

    let lines = state.session.write().learn(text);
    ([KNOWLEDGE_CHANGED], markup_to_html(templates::learn_results(&lines))).into_response()
}

/// POST `/query` — Responde à pergunta do formulário.
pub async fn query(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<QueryForm>,
) -> Html<String> {
    let question = form.question.trim();
    if question.is_empty() {
        return markup_to_html(maud::html! {});
    }

    let outcome = state.session.read().query(question);
    markup_to_html(templates::query_result(&outcome))
}

/// GET `/knowledge` — Fragment do painel de fatos, regras e conceitos.
pub async fn knowledge_panel(State(state): State<AppState>) -> Html<String> {
    let session = state.session.read();
    markup_to_html(templates::knowledge_panel(
        &session.knowledge_summary(),
        &session.concept_table(),
    ))
}

/// POST `/sample` — Carrega a base de exemplo.
pub async fn load_sample(State(state): State<AppState>) -> impl IntoResponse {
    let lines = state.session.write().load_sample();
    tracing::info!(lines = lines.len(), "Base de exemplo carregada");
    ([KNOWLEDGE_CHANGED], markup_to_html(templates::learn_results(&lines)))
}

/// POST `/reset` — Troca a sessão por uma nova e vazia.
///
/// Todas as codificações emitidas pela sessão anterior deixam de valer.
pub async fn reset_session(State(state): State<AppState>) -> impl IntoResponse {
    {
        let mut guard = state.session.write();
        let fresh = guard.reset();
        *guard = fresh;
    }
    (
        [KNOWLEDGE_CHANGED],
        markup_to_html(templates::notice(
            "Knowledge base cleared. All facts, rules and concept primes were discarded.",
        )),
    )
}

/// GET `/api/knowledge` — Listagem JSON da base.
pub async fn api_knowledge(State(state): State<AppState>) -> Json<KnowledgeSummary> {
    Json(state.session.read().knowledge_summary())
}

/// POST `/api/query` — Pergunta via JSON.
pub async fn api_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryOutcome>, AppError> {
    let question = request.question.trim();
    if question.is_empty() {
        return Err(AppError::EmptyInput);
    }
    Ok(Json(state.session.read().query(question)))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::orchestrator::Session;
    use crate::web::create_router;
    use crate::web::state::AppState;

    fn app(state: &AppState) -> axum::Router {
        create_router(state.clone())
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // ─── HTML ──────────────────────────────────────────────────

    #[tokio::test]
    async fn index_renders_full_page() {
        let state = AppState::new(Session::new());
        let response = app(&state)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Gödel Reasoner"));
        assert!(html.contains("_variable_"));
    }

    #[tokio::test]
    async fn learn_then_query_through_forms() {
        let state = AppState::new(Session::new());

        let response = app(&state)
            .oneshot(form(
                "/learn",
                "text=Socrates+is+a+human.+All+humans+are+mortal.",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["HX-Trigger"], "knowledge-changed");
        let html = body_string(response).await;
        assert!(html.contains("Added fact: socrates is human"));
        assert!(html.contains("Added rule: All human are mortal"));

        let response = app(&state)
            .oneshot(form("/query", "question=Is+Socrates+mortal%3F"))
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(html.contains("answer-yes"));
    }

    #[tokio::test]
    async fn empty_learn_does_not_signal_a_change() {
        let state = AppState::new(Session::new());
        let response = app(&state).oneshot(form("/learn", "text=+++")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get("HX-Trigger").is_none());
        assert!(body_string(response).await.is_empty());
        assert_eq!(state.session.read().store().fact_count(), 0);
    }

    #[tokio::test]
    async fn reset_clears_the_session() {
        let state = AppState::new(Session::new());
        state.session.write().learn("Socrates is a human.");

        let response = app(&state)
            .oneshot(Request::post("/reset").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.session.read().knowledge_summary().facts.is_empty());
    }

    #[tokio::test]
    async fn sample_fills_the_knowledge_panel() {
        let state = AppState::new(Session::new());
        app(&state)
            .oneshot(Request::post("/sample").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let response = app(&state)
            .oneshot(Request::get("/knowledge").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(html.contains("socrates is human"));
        assert!(html.contains("All human are mortal"));
    }

    // ─── JSON ──────────────────────────────────────────────────

    #[tokio::test]
    async fn api_query_returns_outcome() {
        let state = AppState::new(Session::new());
        state.session.write().learn("Penguins are birds. All birds can fly.");

        let response = app(&state)
            .oneshot(json("/api/query", r#"{"question":"Can penguin fly?"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value["answer"], "Yes");
        assert_eq!(value["parsed_query"], "penguin can fly");
    }

    #[tokio::test]
    async fn api_query_rejects_empty_question() {
        let state = AppState::new(Session::new());
        let response = app(&state)
            .oneshot(json("/api/query", r#"{"question":"   "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value["error"], "input is empty");
    }

    #[tokio::test]
    async fn api_knowledge_lists_facts() {
        let state = AppState::new(Session::new());
        state.session.write().learn("Socrates is a human.");
        let response = app(&state)
            .oneshot(Request::get("/api/knowledge").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value["facts"][0], "socrates is human [105]");
        assert_eq!(value["rules"].as_array().map(Vec::len), Some(0));
    }
}
