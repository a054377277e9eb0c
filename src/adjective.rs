use tracing::trace;

use crate::forms::{AdjectiveForms, Declension};
use crate::grammar::Case;
use crate::suffix::drop_chars;

/// Masculine nominative endings recognized as the adjective base, tried in order.
pub const BASE_SUFFIXES: [&str; 2] = ["ый", "ий"];

/// Replacement endings per case: masculine, feminine, neuter, plural.
/// `None` keeps the base form.
const ENDINGS: [(Case, [Option<&str>; 4]); 6] = [
    (Case::Nominative, [None, Some("ая"), Some("ое"), Some("ые")]),
    (Case::Genitive, [Some("ого"), Some("ой"), Some("ого"), Some("ых")]),
    (Case::Dative, [Some("ому"), Some("ой"), Some("ому"), Some("ым")]),
    // Animate accusative only: inanimate nouns would take the nominative forms.
    (Case::Accusative, [Some("ого"), Some("ую"), Some("ое"), Some("ых")]),
    (Case::Instrumental, [Some("ым"), Some("ой"), Some("ым"), Some("ыми")]),
    (Case::Prepositional, [Some("ом"), Some("ой"), Some("ом"), Some("ых")]),
];

/// Swaps a trailing "ый"/"ий" for `ending`. `None` when the word has neither.
pub fn replace_suffix(word: &str, ending: &str) -> Option<String> {
    BASE_SUFFIXES
        .iter()
        .find(|suffix| word.ends_with(*suffix))
        .map(|suffix| format!("{}{}", drop_chars(word, suffix.chars().count()), ending))
}

fn inflect(word: &str, ending: Option<&str>) -> String {
    ending
        .and_then(|ending| replace_suffix(word, ending))
        .unwrap_or_else(|| word.to_string())
}

fn endings_for(case: Case) -> [Option<&'static str>; 4] {
    ENDINGS
        .iter()
        .find(|(c, _)| *c == case)
        .map(|(_, endings)| *endings)
        .unwrap_or([None; 4])
}

/// Declines an adjective given in its masculine nominative form.
///
/// A word without a recognized ending comes back unchanged in every cell.
pub fn decline(word: &str) -> Declension<AdjectiveForms> {
    if replace_suffix(word, "").is_none() {
        trace!(word, "adjective without -ый/-ий ending, passing through");
    }

    Declension::from_fn(|case| {
        let [masculine, feminine, neuter, plural] = endings_for(case);
        AdjectiveForms {
            masculine: inflect(word, masculine),
            feminine: inflect(word, feminine),
            neuter: inflect(word, neuter),
            plural: inflect(word, plural),
        }
    })
}
