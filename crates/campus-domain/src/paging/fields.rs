use serde::Serialize;
use std::collections::BTreeMap;

/// What a view needs to know about a sortable or filterable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMetadata {
    pub display_name: String,
}

/// Field key to metadata, keyed by the name the backend understands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldRegistry {
    fields: BTreeMap<String, FieldMetadata>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key`, replacing the display name if it is already known.
    pub fn register(&mut self, key: impl Into<String>, display_name: impl Into<String>) {
        self.fields.insert(
            key.into(),
            FieldMetadata {
                display_name: display_name.into(),
            },
        );
    }

    pub fn get(&self, key: &str) -> Option<&FieldMetadata> {
        self.fields.get(key)
    }

    pub fn display_name(&self, key: &str) -> Option<&str> {
        self.get(key).map(|field| field.display_name.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldMetadata)> {
        self.fields.iter().map(|(key, meta)| (key.as_str(), meta))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
