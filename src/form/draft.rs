//! Draft persistence.
//!
//! A draft is the field name to value mapping last typed into a form,
//! stored as a JSON object under a fixed key so it survives a restart.

use super::error::FormError;
use crate::storage::{KeyValueStore, StorageError};
use log::*;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Field name to last typed value.
///
pub type DraftValues = BTreeMap<String, String>;

/// Decode a stored draft. Strings, numbers and booleans are kept as text;
/// any other entry is skipped on its own.
///
pub fn parse(raw: &str) -> Result<DraftValues, FormError> {
    let object: Map<String, Value> =
        serde_json::from_str(raw).map_err(|e| FormError::DraftParseFailure(e.to_string()))?;
    let mut values = DraftValues::new();
    for (name, value) in object {
        match value {
            Value::String(text) => {
                values.insert(name, text);
            }
            Value::Number(number) => {
                values.insert(name, number.to_string());
            }
            Value::Bool(flag) => {
                values.insert(name, flag.to_string());
            }
            other => debug!("Skipping draft entry '{}' holding {}", name, other),
        }
    }
    Ok(values)
}

/// Reads and writes the draft of one form in a key-value store.
///
pub struct DraftPersistence {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl DraftPersistence {
    pub fn new(store: Box<dyn KeyValueStore>, key: &str) -> Self {
        DraftPersistence {
            store,
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Return the stored draft. Missing, unreadable, or malformed data all
    /// count as no draft.
    ///
    pub fn load(&self) -> Option<DraftValues> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Could not read saved form data: {}", e);
                return None;
            }
        };
        match parse(&raw) {
            Ok(values) => {
                debug!("Loaded draft '{}' with {} field(s)", self.key, values.len());
                Some(values)
            }
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }

    pub fn write(&mut self, values: &DraftValues) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(values)?;
        self.store.set(&self.key, &encoded)
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use fake::faker::name::en::Name;
    use fake::Fake;

    const KEY: &str = "newCaseForm_draft";

    fn persistence_with(raw: Option<&str>) -> DraftPersistence {
        let mut store = MemoryStore::new();
        if let Some(raw) = raw {
            store.set(KEY, raw).unwrap();
        }
        DraftPersistence::new(Box::new(store), KEY)
    }

    #[test]
    fn test_parse_object() {
        let values = parse(r#"{"a":"1","b":"2"}"#).unwrap();
        assert_eq!(values.get("a").map(String::as_str), Some("1"));
        assert_eq!(values.get("b").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_parse_keeps_scalar_values() {
        let values = parse(r#"{"customer_name":"Ada","phone":628,"agree":true}"#).unwrap();
        assert_eq!(values.get("customer_name").map(String::as_str), Some("Ada"));
        assert_eq!(values.get("phone").map(String::as_str), Some("628"));
        assert_eq!(values.get("agree").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_parse_skips_only_unusable_entries() {
        let values = parse(r#"{"subject":"Help","tags":["a"],"extra":null}"#).unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values.get("subject").map(String::as_str), Some("Help"));
    }

    #[test]
    fn test_parse_rejects_malformed_data() {
        assert!(matches!(parse("{not json"), Err(FormError::DraftParseFailure(_))));
        assert!(matches!(parse("[1,2]"), Err(FormError::DraftParseFailure(_))));
    }

    #[test]
    fn test_load_missing_draft() {
        assert_eq!(persistence_with(None).load(), None);
    }

    #[test]
    fn test_load_malformed_draft_is_absent() {
        assert_eq!(persistence_with(Some("{\"a\":")).load(), None);
    }

    #[test]
    fn test_write_then_load() {
        let name: String = Name().fake();
        let mut drafts = persistence_with(None);
        let mut values = DraftValues::new();
        values.insert("customer_name".to_string(), name.clone());
        drafts.write(&values).unwrap();
        assert_eq!(drafts.load(), Some(values));
    }

    #[test]
    fn test_clear() {
        let mut drafts = persistence_with(Some(r#"{"a":"1"}"#));
        assert!(drafts.load().is_some());
        drafts.clear().unwrap();
        assert_eq!(drafts.load(), None);
    }
}
