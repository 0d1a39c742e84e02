use std::fmt::{self, Display};

use serde::Serialize;

/// A single rejected form field, keyed by its wire (camelCase) name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// Every failing field of one payload, at most one entry per field, sorted by
/// field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    /// Records an error for `field`, replacing any error already recorded for it.
    pub fn set(
        &mut self,
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) {
        let field = camel_case(&field.into());
        self.0.retain(|e| e.field != field);
        self.0.push(FieldError {
            field,
            code: code.into(),
            message: message.into(),
        });
        self.0.sort_by(|a, b| a.field.cmp(&b.field));
    }

    /// Adds the errors of `other` for fields that have none yet.
    pub fn merge(&mut self, other: FieldErrors) {
        for error in other.0 {
            if self.get(&error.field).is_none() {
                self.0.push(error);
            }
        }
        self.0.sort_by(|a, b| a.field.cmp(&b.field));
    }

    pub fn into_result(self) -> crate::Result<()> {
        if self.is_empty() {
            return Ok(());
        }

        Err(crate::Error::Validate(self))
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>();

        write!(f, "{}", parts.join("; "))
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(value: validator::ValidationErrors) -> Self {
        let mut errors = FieldErrors::new();

        for (field, field_errors) in value.field_errors() {
            let Some(error) = field_errors.first() else {
                continue;
            };

            let field = field.to_string();
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));

            errors.0.push(FieldError {
                field: camel_case(&field),
                code: error.code.to_string(),
                message,
            });
        }

        errors.0.sort_by(|a, b| a.field.cmp(&b.field));
        errors
    }
}

/// `project_type` -> `projectType`. Names without underscores pass through.
pub fn camel_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut upper = false;

    for c in value.chars() {
        if c == '_' {
            upper = true;
            continue;
        }

        if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }

    out
}
