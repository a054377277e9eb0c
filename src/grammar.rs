use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseGrammarError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseGrammarError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Generates `Display`/`FromStr` over the same lowercase names serde uses.
macro_rules! named_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseGrammarError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    other => Err(ParseGrammarError::new($kind, other)),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Noun,
    Adjective,
    Verb,
}

named_enum!(Category, "category", {
    Noun => "noun",
    Adjective => "adjective",
    Verb => "verb",
});

/// The six Russian cases, ordered as they are conventionally listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Prepositional,
}

named_enum!(Case, "case", {
    Nominative => "nominative",
    Genitive => "genitive",
    Dative => "dative",
    Accusative => "accusative",
    Instrumental => "instrumental",
    Prepositional => "prepositional",
});

impl Case {
    pub const ALL: [Case; 6] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Prepositional,
    ];

    /// Auxiliary question words a learner asks to find the case.
    pub fn question(&self) -> &'static str {
        match self {
            Case::Nominative => "кто/что",
            Case::Genitive => "кого/чего",
            Case::Dative => "кому/чему",
            Case::Accusative => "кого/что",
            Case::Instrumental => "кем/чем",
            Case::Prepositional => "о ком/о чём",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Case::Nominative => "Used for the subject of a sentence",
            Case::Genitive => "Indicates possession or absence",
            Case::Dative => "Indicates the indirect object",
            Case::Accusative => "Used for the direct object",
            Case::Instrumental => "Indicates means or accompaniment",
            Case::Prepositional => "Used with certain prepositions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

named_enum!(Gender, "gender", {
    Masculine => "masculine",
    Feminine => "feminine",
    Neuter => "neuter",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Plural,
}

named_enum!(Number, "number", {
    Singular => "singular",
    Plural => "plural",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    First,
    Second,
    Third,
}

named_enum!(Person, "person", {
    First => "first",
    Second => "second",
    Third => "third",
});
