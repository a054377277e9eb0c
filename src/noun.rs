use tracing::trace;

use crate::forms::{Declension, NounForms};
use crate::grammar::Case;
use crate::suffix::{append, strip_and_spell};

/// Singular and plural for one case.
///
/// Words ending in "а" swap that letter for the case ending, with "ы"
/// spelled "и" after г/к/х/ж/ч/ш/щ; every other word takes the
/// hard-consonant masculine endings appended as is.
pub fn case_forms(word: &str, case: Case) -> (String, String) {
    if word.ends_with('а') {
        let (singular, plural) = match case {
            Case::Nominative => return (word.to_string(), strip_and_spell(word, "ы")),
            Case::Genitive => ("ы", ""),
            Case::Dative => ("е", "ам"),
            Case::Accusative => ("у", ""),
            Case::Instrumental => ("ой", "ами"),
            Case::Prepositional => ("е", "ах"),
        };
        (strip_and_spell(word, singular), strip_and_spell(word, plural))
    } else {
        let (singular, plural) = match case {
            Case::Nominative => ("", "ы"),
            Case::Genitive => ("а", "ов"),
            Case::Dative => ("у", "ам"),
            Case::Accusative => ("", "ов"),
            Case::Instrumental => ("ом", "ами"),
            Case::Prepositional => ("е", "ах"),
        };
        (append(word, singular), append(word, plural))
    }
}

/// Declines a noun across all six cases.
///
/// The quantity triple (after 1, after 2-4, after 5+) is taken from the
/// nominative row and repeated unchanged in every case, so it always
/// reflects nominative/genitive agreement rather than the row's own case.
pub fn decline(word: &str) -> Declension<NounForms> {
    let (quantity234, quantity5plus) = case_forms(word, Case::Genitive);
    if !word.ends_with('а') {
        trace!(word, "noun without -а ending, using consonant endings");
    }

    Declension::from_fn(|case| {
        let (singular, plural) = case_forms(word, case);
        NounForms {
            singular,
            plural,
            quantity1: word.to_string(),
            quantity234: quantity234.clone(),
            quantity5plus: quantity5plus.clone(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kniga() {
        let forms = decline("книга");
        assert_eq!(forms.nominative.singular, "книга");
        assert_eq!(forms.nominative.plural, "книги");
        assert_eq!(forms.genitive.singular, "книги");
        assert_eq!(forms.genitive.plural, "книг");
        assert_eq!(forms.dative.singular, "книге");
        assert_eq!(forms.dative.plural, "книгам");
        assert_eq!(forms.accusative.singular, "книгу");
        assert_eq!(forms.accusative.plural, "книг");
        assert_eq!(forms.instrumental.singular, "книгой");
        assert_eq!(forms.instrumental.plural, "книгами");
        assert_eq!(forms.prepositional.singular, "книге");
        assert_eq!(forms.prepositional.plural, "книгах");
    }

    #[test]
    fn test_stol() {
        let forms = decline("стол");
        assert_eq!(forms.nominative.plural, "столы");
        assert_eq!(forms.genitive.singular, "стола");
        assert_eq!(forms.genitive.plural, "столов");
        assert_eq!(forms.dative.singular, "столу");
        assert_eq!(forms.accusative.singular, "стол");
        assert_eq!(forms.accusative.plural, "столов");
        assert_eq!(forms.instrumental.singular, "столом");
        assert_eq!(forms.prepositional.plural, "столах");
    }

    #[test]
    fn test_quantities_copied_from_nominative() {
        let forms = decline("книга");
        for (_, row) in forms.iter() {
            assert_eq!(row.quantity1, "книга");
            assert_eq!(row.quantity234, "книги");
            assert_eq!(row.quantity5plus, "книг");
        }
        assert_eq!(forms.instrumental.for_count(5), "книг");
    }

    #[test]
    fn test_i_after_velar_and_sibilant() {
        let forms = decline("ручка");
        assert_eq!(forms.nominative.plural, "ручки");
        assert_eq!(forms.genitive.singular, "ручки");
        assert_eq!(forms.genitive.plural, "ручк");
        assert_eq!(forms.instrumental.singular, "ручкой");

        let forms = decline("каша");
        assert_eq!(forms.genitive.singular, "каши");
        assert_eq!(forms.nominative.quantity234, "каши");

        // Other stems keep "ы".
        assert_eq!(decline("мама").genitive.singular, "мамы");
    }

    #[test]
    fn test_unrecognized_ending_is_appended() {
        // Soft-sign and -я nouns fall through to the consonant pattern.
        let forms = decline("неделя");
        assert_eq!(forms.nominative.singular, "неделя");
        assert_eq!(forms.genitive.singular, "неделяа");
    }
}
