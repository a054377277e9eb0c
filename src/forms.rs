use serde::{Deserialize, Serialize};

use crate::agreement::QuantityBucket;
use crate::grammar::{Case, Gender, Number, Person};

/// One form per case. Serializes as a map keyed by the case names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declension<T> {
    pub nominative: T,
    pub genitive: T,
    pub dative: T,
    pub accusative: T,
    pub instrumental: T,
    pub prepositional: T,
}

impl<T> Declension<T> {
    /// Builds the table by calling `f` once per case, in case order.
    pub fn from_fn(mut f: impl FnMut(Case) -> T) -> Self {
        Self {
            nominative: f(Case::Nominative),
            genitive: f(Case::Genitive),
            dative: f(Case::Dative),
            accusative: f(Case::Accusative),
            instrumental: f(Case::Instrumental),
            prepositional: f(Case::Prepositional),
        }
    }

    pub fn get(&self, case: Case) -> &T {
        match case {
            Case::Nominative => &self.nominative,
            Case::Genitive => &self.genitive,
            Case::Dative => &self.dative,
            Case::Accusative => &self.accusative,
            Case::Instrumental => &self.instrumental,
            Case::Prepositional => &self.prepositional,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Case, &T)> {
        Case::ALL.into_iter().map(move |case| (case, self.get(case)))
    }
}

impl<T> std::ops::Index<Case> for Declension<T> {
    type Output = T;

    fn index(&self, case: Case) -> &T {
        self.get(case)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounForms {
    pub singular: String,
    pub plural: String,
    pub quantity1: String,
    pub quantity234: String,
    pub quantity5plus: String,
}

impl NounForms {
    pub fn get(&self, number: Number) -> &str {
        match number {
            Number::Singular => &self.singular,
            Number::Plural => &self.plural,
        }
    }

    /// The form that follows the numeral `n`.
    pub fn for_count(&self, n: u64) -> &str {
        match QuantityBucket::for_count(n) {
            QuantityBucket::One => &self.quantity1,
            QuantityBucket::Few => &self.quantity234,
            QuantityBucket::Many => &self.quantity5plus,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjectiveForms {
    pub masculine: String,
    pub feminine: String,
    pub neuter: String,
    pub plural: String,
}

impl AdjectiveForms {
    pub fn get(&self, gender: Gender) -> &str {
        match gender {
            Gender::Masculine => &self.masculine,
            Gender::Feminine => &self.feminine,
            Gender::Neuter => &self.neuter,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonForms {
    pub first: String,
    pub second: String,
    pub third: String,
}

impl PersonForms {
    pub fn get(&self, person: Person) -> &str {
        match person {
            Person::First => &self.first,
            Person::Second => &self.second,
            Person::Third => &self.third,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonTable {
    pub singular: PersonForms,
    pub plural: PersonForms,
}

impl PersonTable {
    pub fn get(&self, person: Person, number: Number) -> &str {
        match number {
            Number::Singular => self.singular.get(person),
            Number::Plural => self.plural.get(person),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastForms {
    pub masculine: String,
    pub feminine: String,
    pub neuter: String,
    pub plural: String,
}

impl PastForms {
    /// Plural past forms carry no gender, so `number` wins over `gender`.
    pub fn get(&self, gender: Gender, number: Number) -> &str {
        match (number, gender) {
            (Number::Plural, _) => &self.plural,
            (Number::Singular, Gender::Masculine) => &self.masculine,
            (Number::Singular, Gender::Feminine) => &self.feminine,
            (Number::Singular, Gender::Neuter) => &self.neuter,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImperativeForms {
    pub singular: String,
    pub plural: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbForms {
    pub infinitive: String,
    pub present: PersonTable,
    pub past: PastForms,
    pub future: PersonTable,
    pub imperative: ImperativeForms,
}
