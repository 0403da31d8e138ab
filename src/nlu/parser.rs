//! # Parser de Sentenças — Templates Fixos em Inglês
//!
//! O [`SentenceParser`] transforma frases simples em [`Fact`]s, [`Rule`]s e
//! fatos-consulta, casando a frase normalizada contra uma lista ordenada de
//! expressões regulares. O primeiro template que casa vence.
//!
//! ## Templates
//!
//! | Tipo | Frase | Resultado |
//! |------|-------|-----------|
//! | Fato | `engine is part of car` | `(engine, part of, car)` |
//! | Fato | `penguins cannot fly` | `(penguins, cannot, fly)` |
//! | Fato | `birds can fly` | `(birds, can, fly)` |
//! | Fato | `penguins are birds` | `(penguin, is, bird)` — plural |
//! | Fato | `socrates is a human` | `(socrates, is, human)` |
//! | Fato | `alice has a cat` | `(alice, has, cat)` |
//! | Fato | `alice likes music` / `alice teaches bob` | `likes` / `teaches` |
//! | Regra | `all humans are mortal` | `Universal(human, mortal)` |
//! | Regra | `all birds can fly` | `Capability(bird, fly)` |
//! | Regra | `if A and B then C` | `Standard([A, B], C)` |
//! | Consulta | `is X part of Y?` / `is X a Y?` / `is X Y?` | `(X, part of / is, Y)` |
//! | Consulta | `are X Y?` | `(X, is, Y)` — plural |
//! | Consulta | `does X have/like/teach Y?` | `has` / `likes` / `teaches` |
//! | Consulta | `can X Y?` | `(X, can, Y)` |
//!
//! ## Normalização
//!
//! - Frases: espaços nas pontas removidos, minúsculas, pontuação final descartada
//! - Componentes: artigos iniciais (`a`, `an`, `the`) removidos
//! - Templates no plural (`are`, `all X`) passam os substantivos para o singular
//!   com uma heurística simples: `ies → y`, `s` final removido (exceto `ss`, `us`, `is`)

use regex::Regex;

use crate::core::{Fact, Rule};

/// Artigos removidos do início de cada componente.
const ARTICLES: &[&str] = &["a ", "an ", "the "];

/// Um template "X <conectivo> Y" que produz `(X, predicado, Y)`.
struct Template {
    pattern: Regex,
    predicate: &'static str,
    /// Passa X e Y para o singular.
    plural: bool,
}

impl Template {
    fn new(pattern: &str, predicate: &'static str, plural: bool) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            predicate,
            plural,
        }
    }

    fn apply(&self, sentence: &str) -> Option<Fact> {
        let caps = self.pattern.captures(sentence)?;
        let mut subject = clean_component(caps.get(1)?.as_str())?;
        let mut object = clean_component(caps.get(2)?.as_str())?;
        if self.plural {
            subject = singularize(&subject);
            object = singularize(&object);
        }
        Some(Fact::new(&subject, self.predicate, &object))
    }
}

/// Parser baseado em templates, sem estado entre chamadas.
///
/// As expressões regulares são compiladas uma única vez em [`new()`](SentenceParser::new).
pub struct SentenceParser {
    facts: Vec<Template>,
    queries: Vec<Template>,
    universal_re: Regex,
    capability_re: Regex,
    conditional_re: Regex,
}

impl SentenceParser {
    pub fn new() -> Self {
        Self {
            // a ordem importa: "part of" antes de "is", "cannot" antes de "can"
            facts: vec![
                Template::new(r"^(.+?) (?:is )?part of (.+)$", "part of", false),
                Template::new(r"^(.+?) cannot (.+)$", "cannot", false),
                Template::new(r"^(.+?) can (.+)$", "can", false),
                Template::new(r"^(.+?) are (.+)$", "is", true),
                Template::new(r"^(.+?) is (.+)$", "is", false),
                Template::new(r"^(.+?) (?:has|have) (.+)$", "has", false),
                Template::new(r"^(.+?) likes (.+)$", "likes", false),
                Template::new(r"^(.+?) teaches (.+)$", "teaches", false),
            ],
            queries: vec![
                Template::new(r"^is (.+?) part of (.+)$", "part of", false),
                Template::new(r"^is (.+?) (?:a|an) (.+)$", "is", false),
                Template::new(r"^is (.+?) (.+)$", "is", false),
                Template::new(r"^are (.+?) (.+)$", "is", true),
                Template::new(r"^does (.+?) have (.+)$", "has", false),
                Template::new(r"^does (.+?) like (.+)$", "likes", false),
                Template::new(r"^does (.+?) teach (.+)$", "teaches", false),
                Template::new(r"^can (.+?) (.+)$", "can", false),
            ],
            universal_re: Regex::new(r"^all (.+?) are (.+)$").unwrap(),
            capability_re: Regex::new(r"^all (.+?) can (.+)$").unwrap(),
            conditional_re: Regex::new(r"^if (.+?),? then (.+)$").unwrap(),
        }
    }

    /// Tenta interpretar a frase como fato.
    pub fn parse_fact(&self, sentence: &str) -> Option<Fact> {
        let sentence = normalize_sentence(sentence);
        self.facts.iter().find_map(|t| t.apply(&sentence))
    }

    /// Tenta interpretar a frase como regra (universal, capacidade ou condicional).
    pub fn parse_rule(&self, sentence: &str) -> Option<Rule> {
        let sentence = normalize_sentence(sentence);

        if let Some(caps) = self.universal_re.captures(&sentence) {
            return Some(Rule::Universal {
                category: singularize(&clean_component(&caps[1])?),
                property: singularize(&clean_component(&caps[2])?),
            });
        }

        if let Some(caps) = self.capability_re.captures(&sentence) {
            return Some(Rule::Capability {
                category: singularize(&clean_component(&caps[1])?),
                capability: clean_component(&caps[2])?,
            });
        }

        let caps = self.conditional_re.captures(&sentence)?;
        let conditions = caps[1]
            .split(" and ")
            .map(|part| self.parse_fact(part))
            .collect::<Option<Vec<Fact>>>()?;
        let conclusion = self.parse_fact(&caps[2])?;
        Some(Rule::Standard {
            conditions,
            conclusion,
        })
    }

    /// Tenta interpretar uma pergunta como fato-consulta.
    pub fn parse_query(&self, question: &str) -> Option<Fact> {
        let question = normalize_sentence(question);
        self.queries.iter().find_map(|t| t.apply(&question))
    }
}

impl Default for SentenceParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Minúsculas, sem espaços nas pontas e sem pontuação final.
pub fn normalize_sentence(sentence: &str) -> String {
    sentence
        .trim()
        .trim_end_matches(['.', '?', '!'])
        .trim()
        .to_lowercase()
}

/// Remove artigos iniciais. Componente vazio → `None`.
fn clean_component(component: &str) -> Option<String> {
    let mut component = component.trim();
    for article in ARTICLES {
        if let Some(rest) = component.strip_prefix(article) {
            component = rest.trim_start();
            break;
        }
    }
    if component.is_empty() {
        None
    } else {
        Some(component.to_string())
    }
}

/// Singular da última palavra de um componente.
///
/// `birds → bird`, `families → family`, `transportation systems → transportation system`.
/// Palavras terminadas em `ss`, `us` ou `is` ficam como estão.
pub fn singularize(component: &str) -> String {
    let (head, word) = match component.rsplit_once(' ') {
        Some((head, word)) => (Some(head), word),
        None => (None, component),
    };

    let singular = if word.len() > 3 && word.ends_with("ies") {
        format!("{}y", &word[..word.len() - 3])
    } else if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        word.to_string()
    } else if word.len() > 1 && word.ends_with('s') {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    };

    match head {
        Some(head) => format!("{} {}", head, singular),
        None => singular,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> SentenceParser {
        SentenceParser::new()
    }

    // ─── singularize ───────────────────────────────────────────

    #[test]
    fn singular_forms() {
        assert_eq!(singularize("birds"), "bird");
        assert_eq!(singularize("families"), "family");
        assert_eq!(singularize("glass"), "glass");
        assert_eq!(singularize("virus"), "virus");
        assert_eq!(singularize("mortal"), "mortal");
        assert_eq!(singularize("transportation systems"), "transportation system");
    }

    // ─── parse_fact ────────────────────────────────────────────

    #[test]
    fn is_fact_strips_articles() {
        assert_eq!(
            parser().parse_fact("Socrates is a human."),
            Some(Fact::new("socrates", "is", "human"))
        );
    }

    #[test]
    fn plural_fact_is_singularized() {
        assert_eq!(
            parser().parse_fact("Penguins are birds"),
            Some(Fact::new("penguin", "is", "bird"))
        );
    }

    #[test]
    fn part_of_fact() {
        assert_eq!(
            parser().parse_fact("The engine is part of the car"),
            Some(Fact::new("engine", "part of", "car"))
        );
        assert_eq!(
            parser().parse_fact("car part of transportation system"),
            Some(Fact::new("car", "part of", "transportation system"))
        );
    }

    #[test]
    fn cannot_is_a_plain_predicate() {
        assert_eq!(
            parser().parse_fact("Penguins cannot fly"),
            Some(Fact::new("penguins", "cannot", "fly"))
        );
        assert_eq!(
            parser().parse_fact("Birds can fly"),
            Some(Fact::new("birds", "can", "fly"))
        );
    }

    #[test]
    fn other_connectives() {
        let p = parser();
        assert_eq!(
            p.parse_fact("Alice has a cat"),
            Some(Fact::new("alice", "has", "cat"))
        );
        assert_eq!(
            p.parse_fact("Alice likes music"),
            Some(Fact::new("alice", "likes", "music"))
        );
        assert_eq!(
            p.parse_fact("Alice teaches Bob"),
            Some(Fact::new("alice", "teaches", "bob"))
        );
    }

    #[test]
    fn unknown_sentence_is_none() {
        assert_eq!(parser().parse_fact("xyzzy plugh"), None);
        assert_eq!(parser().parse_fact(""), None);
    }

    // ─── parse_rule ────────────────────────────────────────────

    #[test]
    fn universal_rule() {
        assert_eq!(
            parser().parse_rule("All humans are mortal."),
            Some(Rule::Universal {
                category: "human".into(),
                property: "mortal".into()
            })
        );
    }

    #[test]
    fn capability_rule() {
        assert_eq!(
            parser().parse_rule("All birds can fly"),
            Some(Rule::Capability {
                category: "bird".into(),
                capability: "fly".into()
            })
        );
    }

    #[test]
    fn conditional_rule() {
        assert_eq!(
            parser().parse_rule("If alice teaches bob and bob is a student, then alice is a teacher"),
            Some(Rule::Standard {
                conditions: vec![
                    Fact::new("alice", "teaches", "bob"),
                    Fact::new("bob", "is", "student"),
                ],
                conclusion: Fact::new("alice", "is", "teacher"),
            })
        );
    }

    #[test]
    fn conditional_with_unparseable_part_is_none() {
        assert_eq!(parser().parse_rule("if xyzzy then alice is happy"), None);
    }

    #[test]
    fn plain_fact_is_not_a_rule() {
        assert_eq!(parser().parse_rule("socrates is a human"), None);
    }

    // ─── parse_query ───────────────────────────────────────────

    #[test]
    fn is_queries() {
        let p = parser();
        assert_eq!(
            p.parse_query("Is Socrates mortal?"),
            Some(Fact::new("socrates", "is", "mortal"))
        );
        assert_eq!(
            p.parse_query("Is Socrates a human?"),
            Some(Fact::new("socrates", "is", "human"))
        );
        assert_eq!(
            p.parse_query("Is the engine part of the transportation system?"),
            Some(Fact::new("engine", "part of", "transportation system"))
        );
    }

    #[test]
    fn are_query_is_singularized() {
        assert_eq!(
            parser().parse_query("Are penguins birds?"),
            Some(Fact::new("penguin", "is", "bird"))
        );
    }

    #[test]
    fn does_and_can_queries() {
        let p = parser();
        assert_eq!(
            p.parse_query("Does Alice have a cat?"),
            Some(Fact::new("alice", "has", "cat"))
        );
        assert_eq!(
            p.parse_query("Does Alice like music?"),
            Some(Fact::new("alice", "likes", "music"))
        );
        assert_eq!(
            p.parse_query("Does Alice teach Bob?"),
            Some(Fact::new("alice", "teaches", "bob"))
        );
        assert_eq!(
            p.parse_query("Can penguin fly?"),
            Some(Fact::new("penguin", "can", "fly"))
        );
    }

    #[test]
    fn unknown_question_is_none() {
        assert_eq!(parser().parse_query("What is love?"), None);
    }
}
