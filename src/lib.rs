pub mod grammar;
pub mod forms;
pub mod agreement;
pub mod suffix;
pub mod noun;
pub mod adjective;
pub mod verb;
pub mod data;
pub mod dictionary;
pub mod request;
pub mod inflector;

pub use agreement::QuantityBucket;
pub use dictionary::{Aspect, NoDictionary, VerbDictionary, VerbEntry, VerbLookup};
pub use forms::{AdjectiveForms, Declension, NounForms, VerbForms};
pub use grammar::{Case, Category, Gender};
pub use inflector::{InflectionResult, Inflector, InflectorOptions, Paradigm};
pub use request::{InflectionRequest, RequestError};
