use burmuda_shared::FieldErrors;
use serde_json::{Map, Value};

/// Pulls string fields out of a raw JSON body.
///
/// A field present with any JSON type other than string is recorded as an
/// `invalid_type` error and read as absent, so a single pass collects every
/// failing field instead of stopping at the first bad one. Null only counts as
/// absent for optional fields.
pub struct FormFields {
    fields: Map<String, Value>,
    errors: FieldErrors,
}

impl FormFields {
    pub fn new(body: Value) -> Self {
        match body {
            Value::Object(fields) => Self {
                fields,
                errors: FieldErrors::new(),
            },
            other => {
                let mut errors = FieldErrors::new();
                errors.set(
                    "body",
                    "invalid_type",
                    format!("Expected object, received {}", json_type(&other)),
                );

                Self {
                    fields: Map::new(),
                    errors,
                }
            }
        }
    }

    fn text(&mut self, key: &str, nullable: bool) -> Option<String> {
        match self.fields.remove(key) {
            None => None,
            Some(Value::Null) if nullable => None,
            Some(Value::String(value)) => Some(value),
            Some(other) => {
                self.errors.set(
                    key,
                    "invalid_type",
                    format!("Expected string, received {}", json_type(&other)),
                );
                None
            }
        }
    }

    pub fn required(&mut self, key: &str) -> String {
        self.text(key, false).unwrap_or_default()
    }

    /// Empty strings count as absent.
    pub fn optional(&mut self, key: &str) -> Option<String> {
        self.text(key, true).filter(|v| !v.is_empty())
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
