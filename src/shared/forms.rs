use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single validated field value supplied by the form/request boundary.
///
/// The web layer parses raw request bodies; this core only ever sees typed
/// values keyed by field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Date(NaiveDate),
    /// Nullable date (e.g. an actor's death date)
    OptionalDate(Option<NaiveDate>),
    Bool(bool),
    /// Single required reference to another entity
    Ref(i32),
    /// Single nullable reference (e.g. movie category, review parent)
    OptionalRef(Option<i32>),
    /// Many-to-many reference set
    Refs(Vec<i32>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

/// Mapping of field name to validated value, as delivered by the boundary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormData {
    values: BTreeMap<String, FieldValue>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: FieldValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: FieldValue) {
        self.values.insert(name.to_string(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn get_text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(FieldValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(FieldValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_date(&self, name: &str) -> Option<NaiveDate> {
        match self.values.get(name) {
            Some(FieldValue::Date(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_optional_date(&self, name: &str) -> Option<Option<NaiveDate>> {
        match self.values.get(name) {
            Some(FieldValue::OptionalDate(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(FieldValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_ref(&self, name: &str) -> Option<i32> {
        match self.values.get(name) {
            Some(FieldValue::Ref(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_optional_ref(&self, name: &str) -> Option<Option<i32>> {
        match self.values.get(name) {
            Some(FieldValue::OptionalRef(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_refs(&self, name: &str) -> Option<&[i32]> {
        match self.values.get(name) {
            Some(FieldValue::Refs(values)) => Some(values),
            _ => None,
        }
    }
}

/// A field-level validation message; `field: None` marks a form-wide error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormError {
    pub field: Option<String>,
    pub message: String,
}

/// A submitted form: field values plus the errors accumulated against them.
///
/// Expected user-input problems never raise; they land here and the web
/// layer re-renders the form with them inline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub data: FormData,
    errors: Vec<FormError>,
}

impl Form {
    pub fn new(data: FormData) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: Option<&str>, message: impl Into<String>) {
        self.errors.push(FormError {
            field: field.map(str::to_string),
            message: message.into(),
        });
    }

    /// Base validity: the boundary attached no parse/widget errors
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FormError] {
        &self.errors
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field.as_deref() == Some(field))
            .map(|e| e.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_getters_reject_mismatched_variants() {
        let data = FormData::new()
            .with("title", FieldValue::text("Heat"))
            .with("budget", FieldValue::Int(60_000_000));

        assert_eq!(data.get_text("title"), Some("Heat"));
        assert_eq!(data.get_int("title"), None);
        assert_eq!(data.get_int("budget"), Some(60_000_000));
    }

    #[test]
    fn field_errors_are_looked_up_by_name() {
        let mut form = Form::new(FormData::new());
        form.add_error(Some("name"), "Name \"Drama\" already exists");
        form.add_error(None, "Mismatch filled fields");

        assert!(!form.is_valid());
        assert_eq!(
            form.field_error("name"),
            Some("Name \"Drama\" already exists")
        );
        assert_eq!(form.field_error("url"), None);
    }
}
