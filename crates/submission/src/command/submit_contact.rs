use serde_json::Value;
use validator::Validate;

use crate::{ContactForm, FormFields, Payload};

#[derive(Debug, Clone, Validate)]
pub struct SubmitContactInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[validate(length(min = 1, message = "Service selection is required"))]
    pub service: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl SubmitContactInput {
    /// Reads and validates a raw contact form body, reporting every failing
    /// field at once.
    pub fn from_json(body: Value) -> burmuda_shared::Result<Self> {
        let mut fields = FormFields::new(body);
        let input = Self {
            name: fields.required("name"),
            email: fields.required("email"),
            phone: fields.optional("phone"),
            company: fields.optional("company"),
            service: fields.required("service"),
            message: fields.required("message"),
        };

        let mut errors = fields.into_errors();
        if let Err(e) = input.validate() {
            errors.merge(e.into());
        }
        errors.into_result()?;

        Ok(input)
    }
}

impl super::Command {
    pub async fn submit_contact(&self, input: SubmitContactInput) -> burmuda_shared::Result<String> {
        input.validate()?;

        Ok(self
            .create(Payload::Contact(ContactForm {
                name: input.name,
                email: input.email,
                phone: input.phone,
                company: input.company,
                service: input.service,
                message: input.message,
            }))
            .await)
    }
}
