use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::data;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("malformed verb table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate entry for '{0}'")]
    Duplicate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Imperfective,
    Perfective,
}

impl Aspect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aspect::Imperfective => "imperfective",
            Aspect::Perfective => "perfective",
        }
    }
}

/// Metadata about a known verb. Never affects its conjugated forms.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerbEntry {
    pub english: String,
    pub russian: String,
    pub aspect: Aspect,
}

/// Read-only lookup by exact Russian spelling.
pub trait VerbLookup: Send + Sync {
    fn lookup(&self, russian: &str) -> Option<&VerbEntry>;
}

/// Lookup that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDictionary;

impl VerbLookup for NoDictionary {
    fn lookup(&self, _russian: &str) -> Option<&VerbEntry> {
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct VerbDictionary {
    entries: Vec<VerbEntry>,
    by_russian: HashMap<String, usize>,
}

impl VerbDictionary {
    pub fn new(entries: Vec<VerbEntry>) -> Result<Self, DictionaryError> {
        let mut by_russian = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if by_russian.insert(entry.russian.clone(), idx).is_some() {
                return Err(DictionaryError::Duplicate(entry.russian.clone()));
            }
        }
        Ok(Self {
            entries,
            by_russian,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        Self::new(data::parse_verbs(json)?)
    }

    /// The bundled table of common verbs. Empty if the table fails to load.
    pub fn builtin() -> Self {
        match data::load_verbs().and_then(Self::new) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                warn!(error = %e, "bundled verb table unusable, continuing without it");
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[VerbEntry] {
        &self.entries
    }

    /// Case-insensitive substring search over both languages.
    /// A leading "to" followed by whitespace is ignored, so "to read" and
    /// "read" match alike.
    pub fn search(&self, query: &str) -> Vec<&VerbEntry> {
        let lower = query.to_lowercase();
        let needle = lower
            .strip_prefix("to")
            .filter(|rest| rest.starts_with(char::is_whitespace))
            .map(str::trim_start)
            .unwrap_or(lower.as_str());
        self.entries
            .iter()
            .filter(|entry| {
                entry.english.to_lowercase().contains(needle)
                    || entry.russian.to_lowercase().contains(needle)
            })
            .collect()
    }
}

impl VerbLookup for VerbDictionary {
    fn lookup(&self, russian: &str) -> Option<&VerbEntry> {
        self.by_russian.get(russian).map(|&idx| &self.entries[idx])
    }
}
