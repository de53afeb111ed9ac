use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

fn default_field_type() -> String {
    "text".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRestrictions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
}

/// One input of a server-described form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, rename = "defaultValue")]
    pub default_value: String,
    #[serde(rename = "type", default = "default_field_type")]
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub restrictions: FieldRestrictions,
}

/// Server-provided description of a form: where it submits and what it asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDescription {
    pub method: String,
    pub submit_url: String,
    #[serde(default)]
    pub fields: Vec<FormField>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },
}

impl FormDescription {
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Field values a freshly rendered form starts with.
    pub fn initial_values(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .map(|field| (field.name.clone(), field.default_value.clone()))
            .collect()
    }

    /// Check submitted values against the required flags and length
    /// restrictions. Errors are returned in field order.
    pub fn validate(&self, values: &HashMap<String, String>) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for field in &self.fields {
            let value = values.get(&field.name).map(|v| v.trim()).unwrap_or("");

            if value.is_empty() {
                if field.required {
                    errors.push(FieldError::Required {
                        field: field.name.clone(),
                    });
                }
                continue;
            }

            let length = value.chars().count();
            if let Some(max) = field.restrictions.max_length {
                if length > max {
                    errors.push(FieldError::TooLong {
                        field: field.name.clone(),
                        max,
                    });
                }
            }
            if let Some(min) = field.restrictions.min_length {
                if length < min {
                    errors.push(FieldError::TooShort {
                        field: field.name.clone(),
                        min,
                    });
                }
            }
        }

        errors
    }
}
