//! Form validation errors
//!
//! Serialized in the shape the FastUI front-end reads from a 422 response:
//! `{"detail": {"form": [{"type": ..., "loc": [...], "msg": ...}]}}`.

use std::fmt;

use serde::Serialize;

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub loc: Vec<String>,
    pub msg: String,
}

impl FieldError {
    pub fn new(kind: &'static str, field: &str, msg: impl Into<String>) -> Self {
        Self {
            kind,
            loc: vec![field.to_owned()],
            msg: msg.into(),
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::new("missing", field, "Field required")
    }
}

/// All field errors collected from one submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    pub form: Vec<FieldError>,
}

impl FormErrors {
    pub fn push(&mut self, error: FieldError) {
        self.form.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.form.is_empty()
    }

    /// Field names that failed, in submission order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.form
            .iter()
            .filter_map(|e| e.loc.first().map(String::as_str))
    }
}

impl From<FieldError> for FormErrors {
    fn from(error: FieldError) -> Self {
        Self { form: vec![error] }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .form
            .iter()
            .map(|e| format!("{}: {}", e.loc.join("."), e.msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FormErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let mut errors = FormErrors::default();
        errors.push(FieldError::missing("name"));
        errors.push(FieldError::new("date_parsing", "dob", "Input should be a valid date"));
        assert_eq!(
            errors.to_string(),
            "name: Field required; dob: Input should be a valid date"
        );
    }

    #[test]
    fn serializes_in_form_envelope() {
        let errors = FormErrors::from(FieldError::missing("name"));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "form": [{"type": "missing", "loc": ["name"], "msg": "Field required"}]
            })
        );
    }
}
