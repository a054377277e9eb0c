use crate::dictionary::{DictionaryError, VerbEntry};

pub const VERBS_JSON: &str = include_str!("../data/verbs.json");

pub fn load_verbs() -> Result<Vec<VerbEntry>, DictionaryError> {
    parse_verbs(VERBS_JSON)
}

pub fn parse_verbs(json: &str) -> Result<Vec<VerbEntry>, DictionaryError> {
    Ok(serde_json::from_str(json)?)
}
