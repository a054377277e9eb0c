use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grammar::{Case, Category, Gender};

static CYRILLIC_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\u{0400}-\u{04FF}\s]+$").expect("static pattern compiles"));

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Only Cyrillic characters allowed: '{0}'")]
    InvalidCharacters(String),
    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Input to [`crate::Inflector::inflect`].
///
/// Also accepts the `wordType` / `grammaticalCase` field names used by
/// older clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InflectionRequest {
    pub word: String,
    #[serde(alias = "wordType")]
    pub category: Category,
    #[serde(default, alias = "grammaticalCase", skip_serializing_if = "Option::is_none")]
    pub case: Option<Case>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl InflectionRequest {
    pub fn new(word: impl Into<String>, category: Category) -> Self {
        Self {
            word: word.into(),
            category,
            case: None,
            gender: None,
        }
    }

    pub fn with_case(mut self, case: Case) -> Self {
        self.case = Some(case);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Parses and validates a JSON request body.
    pub fn from_json(body: &str) -> Result<Self, RequestError> {
        let request: Self = serde_json::from_str(body)?;
        request.validate()?;
        Ok(request)
    }

    /// Rejects words with anything but Cyrillic letters and whitespace.
    ///
    /// Inflection itself never validates; this is for callers at the edge.
    pub fn validate(&self) -> Result<(), RequestError> {
        if CYRILLIC_WORD.is_match(&self.word) {
            Ok(())
        } else {
            Err(RequestError::InvalidCharacters(self.word.clone()))
        }
    }
}
