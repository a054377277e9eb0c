//! Character-level ending helpers shared by the paradigms.
//!
//! Cyrillic letters are two bytes in UTF-8, so every cut here counts chars.

/// `word` without its last `n` characters. Shorter words become empty.
pub fn drop_chars(word: &str, n: usize) -> &str {
    if n == 0 {
        return word;
    }
    match word.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &word[..idx],
        None => "",
    }
}

pub fn append(word: &str, ending: &str) -> String {
    format!("{}{}", word, ending)
}

/// Letters after which "ы" is spelled "и".
const VELAR_OR_SIBILANT: [char; 7] = ['г', 'к', 'х', 'ж', 'ч', 'ш', 'щ'];

/// Removes the last character, then appends `ending`. An ending starting
/// with "ы" is written with "и" when the stem ends in г/к/х/ж/ч/ш/щ.
pub fn strip_and_spell(word: &str, ending: &str) -> String {
    let stem = drop_chars(word, 1);
    match ending.strip_prefix('ы') {
        Some(rest) if stem.ends_with(VELAR_OR_SIBILANT) => format!("{}и{}", stem, rest),
        _ => format!("{}{}", stem, ending),
    }
}
