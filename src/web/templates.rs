//! # Templates Maud — HTML Server-Side Rendering
//!
//! O servidor devolve fragmentos HTML e o HTMX os injeta no DOM.
//!
//! ## Layout Principal (`full_page`)
//!
//! ```text
//! ┌──────────────── header ─────────────────────┐
//! │ Gödel Reasoner                               │
//! ├──────────────────────────┬──────────────────┤
//! │ [ Learn textarea ]       │ Facts            │
//! │ [Learn] [Sample] [Reset] │ Rules            │
//! │ #learn-results           │ Concept → Prime  │
//! │ [ Question ] [Ask]       │                  │
//! │ #query-result            │                  │
//! └──────────────────────────┴──────────────────┘
//! ```

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::core::Prime;
use crate::orchestrator::{Answer, KnowledgeSummary, QueryOutcome};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f6f5f1; color: #222; }
header { padding: 1rem 2rem; background: #2d3142; color: #fff; }
main { display: grid; grid-template-columns: 3fr 2fr; gap: 2rem; padding: 2rem; }
textarea, input[type=text] { width: 100%; box-sizing: border-box; padding: .5rem; font-size: 1rem; }
button { margin: .5rem .5rem .5rem 0; padding: .4rem 1rem; }
.panel { background: #fff; border-radius: 6px; padding: 1rem 1.5rem; }
.line-ok { color: #2a7a3b; } .line-fail { color: #a33; }
.answer-yes { color: #2a7a3b; } .answer-no { color: #a33; } .answer-unknown { color: #888; }
code { background: #eee; padding: 0 .25rem; }
"#;

/// Página completa: aprendizado, perguntas e painel da base.
pub fn full_page(summary: &KnowledgeSummary, concepts: &[(String, Prime)]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Gödel Reasoner" }
                script src="https://unpkg.com/htmx.org@2.0.4" {}
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    h1 { "Gödel Reasoner" }
                    p { "Facts and rules encoded as products of primes, answered by backward chaining." }
                }
                main {
                    section class="panel" {
                        h2 { "Teach" }
                        form hx-post="/learn" hx-target="#learn-results" {
                            textarea name="text" rows="5"
                                placeholder="Socrates is a human. All humans are mortal." {}
                            button type="submit" { "Learn" }
                            button type="button" hx-post="/sample" hx-target="#learn-results" { "Sample data" }
                            button type="button" hx-post="/reset" hx-target="#learn-results"
                                hx-confirm="Discard all facts and rules?" { "Reset" }
                        }
                        div id="learn-results" {}

                        h2 { "Ask" }
                        form hx-post="/query" hx-target="#query-result" {
                            input type="text" name="question" placeholder="Is Socrates mortal?";
                            button type="submit" { "Ask" }
                        }
                        div id="query-result" {}
                    }
                    section class="panel" id="knowledge"
                        hx-get="/knowledge" hx-trigger="knowledge-changed from:body" {
                        (knowledge_panel(summary, concepts))
                    }
                }
            }
        }
    }
}

/// Linhas retornadas por `learn`.
pub fn learn_results(lines: &[String]) -> Markup {
    html! {
        ul {
            @for line in lines {
                @let class = if line.starts_with("Failed") { "line-fail" } else { "line-ok" };
                li class=(class) { (line) }
            }
        }
    }
}

/// Resposta a uma pergunta.
pub fn query_result(outcome: &QueryOutcome) -> Markup {
    let class = match outcome.answer {
        Answer::Yes => "answer-yes",
        Answer::No => "answer-no",
        Answer::Unknown => "answer-unknown",
    };
    html! {
        div {
            p { "Question: " em { (outcome.query) } }
            @if let Some(parsed) = &outcome.parsed_query {
                p { "Parsed as: " code { (parsed) } }
            }
            h3 class=(class) { (outcome.answer.to_string()) }
            p { (outcome.explanation) }
        }
    }
}

/// Fatos, regras e a tabela conceito → primo.
pub fn knowledge_panel(summary: &KnowledgeSummary, concepts: &[(String, Prime)]) -> Markup {
    html! {
        h2 { "Facts (" (summary.facts.len()) ")" }
        @if summary.facts.is_empty() {
            p { em { "No facts yet." } }
        }
        ul {
            @for fact in &summary.facts {
                li { (fact) }
            }
        }
        h2 { "Rules (" (summary.rules.len()) ")" }
        @if summary.rules.is_empty() {
            p { em { "No rules yet." } }
        }
        ul {
            @for rule in &summary.rules {
                li { (rule) }
            }
        }
        h2 { "Concepts" }
        table {
            @for (concept, prime) in concepts {
                tr {
                    td { code { (concept) } }
                    td { (prime) }
                }
            }
        }
    }
}

/// Mensagem curta de status.
pub fn notice(message: &str) -> Markup {
    html! {
        p class="line-ok" { (message) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_lines_are_marked() {
        let html = learn_results(&[
            "Added fact: socrates is human".to_string(),
            "Failed to parse: \"xyzzy\"".to_string(),
        ])
        .into_string();
        assert!(html.contains("line-ok"));
        assert!(html.contains("line-fail"));
        // aspas escapadas pelo maud
        assert!(html.contains("&quot;xyzzy&quot;"));
    }

    #[test]
    fn query_result_shows_answer() {
        let outcome = QueryOutcome {
            query: "Is Socrates mortal?".into(),
            parsed_query: Some("socrates is mortal".into()),
            answer: Answer::Yes,
            explanation: "Direct fact in knowledge base: socrates is mortal".into(),
        };
        let html = query_result(&outcome).into_string();
        assert!(html.contains("answer-yes"));
        assert!(html.contains(">Yes<"));
        assert!(html.contains("socrates is mortal"));
    }

    #[test]
    fn empty_panel_has_placeholders() {
        let html = knowledge_panel(&KnowledgeSummary::default(), &[]).into_string();
        assert!(html.contains("No facts yet."));
        assert!(html.contains("No rules yet."));
    }
}
