use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dictionary::{VerbDictionary, VerbEntry, VerbLookup};
use crate::forms::{AdjectiveForms, Declension, NounForms, VerbForms};
use crate::grammar::{Case, Category, Gender, Number};
use crate::request::InflectionRequest;
use crate::{adjective, noun, verb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct InflectorOptions {
    /// Attach human-readable notes to each result.
    pub explain: bool,
}

impl Default for InflectorOptions {
    fn default() -> Self {
        Self { explain: true }
    }
}

/// Forms produced for one word, shaped by its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum Paradigm {
    Noun(Declension<NounForms>),
    Adjective(Declension<AdjectiveForms>),
    Verb {
        forms: VerbForms,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        entry: Option<VerbEntry>,
    },
}

impl Paradigm {
    pub fn category(&self) -> Category {
        match self {
            Paradigm::Noun(_) => Category::Noun,
            Paradigm::Adjective(_) => Category::Adjective,
            Paradigm::Verb { .. } => Category::Verb,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectionResult {
    #[serde(flatten)]
    pub paradigm: Paradigm,
    pub explanations: Vec<String>,
}

/// Routes a word to the paradigm for its category.
///
/// Stateless apart from the injected verb lookup, so one instance can be
/// shared across threads.
pub struct Inflector<D: VerbLookup = VerbDictionary> {
    dictionary: D,
    options: InflectorOptions,
}

impl Inflector<VerbDictionary> {
    pub fn builtin() -> Self {
        Self::new(VerbDictionary::builtin())
    }
}

impl<D: VerbLookup> Inflector<D> {
    pub fn new(dictionary: D) -> Self {
        Self::with_options(dictionary, InflectorOptions::default())
    }

    pub fn with_options(dictionary: D, options: InflectorOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    pub fn options(&self) -> InflectorOptions {
        self.options
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    pub fn inflect(&self, request: &InflectionRequest) -> InflectionResult {
        self.inflect_word(&request.word, request.category, request.case, request.gender)
    }

    /// Builds every form of `word`. `case` and `gender` only select which
    /// notes are attached; the forms themselves are always complete.
    pub fn inflect_word(
        &self,
        word: &str,
        category: Category,
        case: Option<Case>,
        gender: Option<Gender>,
    ) -> InflectionResult {
        debug!(word, %category, ?case, ?gender, "inflecting");

        let paradigm = match category {
            Category::Noun => Paradigm::Noun(noun::decline(word)),
            Category::Adjective => Paradigm::Adjective(adjective::decline(word)),
            Category::Verb => {
                let entry = self.dictionary.lookup(word).cloned();
                if entry.is_none() {
                    debug!(word, "verb not in dictionary");
                }
                Paradigm::Verb {
                    forms: verb::conjugate(word),
                    entry,
                }
            }
        };

        let explanations = if self.options.explain {
            explain(&paradigm, case, gender)
        } else {
            Vec::new()
        };

        InflectionResult {
            paradigm,
            explanations,
        }
    }
}

fn explain(paradigm: &Paradigm, case: Option<Case>, gender: Option<Gender>) -> Vec<String> {
    let mut notes = Vec::new();

    if let Some(case) = case {
        notes.push(format!("{} ({}): {}", case, case.question(), case.description()));
    }

    match paradigm {
        Paradigm::Noun(table) => {
            let row = table.get(case.unwrap_or(Case::Nominative));
            if let Some(case) = case {
                notes.push(format!(
                    "{} singular: {}, plural: {}",
                    case,
                    row.get(Number::Singular),
                    row.get(Number::Plural)
                ));
            }
            notes.push(format!(
                "after numerals: 1 {}, 2-4 {}, 5+ {}",
                row.for_count(1),
                row.for_count(2),
                row.for_count(5)
            ));
        }
        Paradigm::Adjective(table) => {
            if let Some(gender) = gender {
                let case = case.unwrap_or(Case::Nominative);
                notes.push(format!(
                    "{} {} agreement: {}",
                    case,
                    gender,
                    table.get(case).get(gender)
                ));
            }
        }
        Paradigm::Verb { forms, entry } => {
            if let Some(entry) = entry {
                notes.push(format!(
                    "{}: {} ({})",
                    entry.russian,
                    entry.english,
                    entry.aspect.as_str()
                ));
            }
            if let Some(gender) = gender {
                notes.push(format!(
                    "past {}: {}",
                    gender,
                    forms.past.get(gender, Number::Singular)
                ));
            }
        }
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Aspect, NoDictionary};

    #[test]
    fn test_dispatch_by_category() {
        let inflector = Inflector::builtin();
        let noun = inflector.inflect(&InflectionRequest::new("книга", Category::Noun));
        assert_eq!(noun.paradigm.category(), Category::Noun);
        let adjective = inflector.inflect(&InflectionRequest::new("новый", Category::Adjective));
        assert_eq!(adjective.paradigm.category(), Category::Adjective);
        let verb = inflector.inflect(&InflectionRequest::new("читать", Category::Verb));
        assert_eq!(verb.paradigm.category(), Category::Verb);
    }

    #[test]
    fn test_output_is_unmodified() {
        let inflector = Inflector::builtin();
        let request = InflectionRequest::new("книга", Category::Noun)
            .with_case(Case::Dative)
            .with_gender(Gender::Feminine);
        match inflector.inflect(&request).paradigm {
            Paradigm::Noun(table) => assert_eq!(table, noun::decline("книга")),
            other => panic!("expected noun, got {:?}", other),
        }
    }

    #[test]
    fn test_verb_metadata() {
        let inflector = Inflector::builtin();
        let result = inflector.inflect(&InflectionRequest::new("читать", Category::Verb));
        match &result.paradigm {
            Paradigm::Verb { forms, entry } => {
                assert_eq!(forms.present.singular.first, "читаю");
                let entry = entry.as_ref().unwrap();
                assert_eq!(entry.english, "to read");
                assert_eq!(entry.aspect, Aspect::Imperfective);
            }
            other => panic!("expected verb, got {:?}", other),
        }
        assert!(result.explanations.contains(&"читать: to read (imperfective)".to_string()));
    }

    #[test]
    fn test_verb_lookup_miss() {
        let inflector = Inflector::new(NoDictionary);
        let result = inflector.inflect(&InflectionRequest::new("читать", Category::Verb));
        match result.paradigm {
            Paradigm::Verb { entry, forms } => {
                assert!(entry.is_none());
                assert_eq!(forms.past.plural, "читали");
            }
            other => panic!("expected verb, got {:?}", other),
        }
    }

    #[test]
    fn test_explanations() {
        let inflector = Inflector::builtin();
        let request = InflectionRequest::new("новый", Category::Adjective)
            .with_case(Case::Genitive)
            .with_gender(Gender::Feminine);
        let result = inflector.inflect(&request);
        assert_eq!(
            result.explanations,
            vec![
                "genitive (кого/чего): Indicates possession or absence".to_string(),
                "genitive feminine agreement: новой".to_string(),
            ]
        );

        let result = inflector.inflect(&InflectionRequest::new("стол", Category::Noun));
        assert_eq!(result.explanations, vec!["after numerals: 1 стол, 2-4 стола, 5+ столов".to_string()]);
    }

    #[test]
    fn test_explanations_disabled() {
        let inflector =
            Inflector::with_options(VerbDictionary::builtin(), InflectorOptions { explain: false });
        let request = InflectionRequest::new("читать", Category::Verb).with_case(Case::Dative);
        assert!(inflector.inflect(&request).explanations.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let inflector = Inflector::builtin();
        let result = inflector.inflect(&InflectionRequest::new("книга", Category::Noun));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["category"], "noun");
        assert_eq!(json["genitive"]["plural"], "книг");
        assert_eq!(json["accusative"]["quantity234"], "книги");

        let result = inflector.inflect(&InflectionRequest::new("читать", Category::Verb));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["category"], "verb");
        assert_eq!(json["forms"]["future"]["plural"]["second"], "будете читать");
        assert_eq!(json["entry"]["aspect"], "imperfective");

        let back: InflectionResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }
}
