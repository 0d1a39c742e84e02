use serde_json::Value;
use validator::Validate;

use crate::{ConsultationForm, FormFields, Payload};

#[derive(Debug, Clone, Validate)]
pub struct SubmitConsultationInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    pub company: Option<String>,
    #[validate(length(min = 1, message = "Project type is required"))]
    pub project_type: String,
    pub consultation_type: Option<String>,
    pub preferred_time: Option<String>,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl SubmitConsultationInput {
    pub fn from_json(body: Value) -> burmuda_shared::Result<Self> {
        let mut fields = FormFields::new(body);
        let input = Self {
            name: fields.required("name"),
            email: fields.required("email"),
            phone: fields.required("phone"),
            company: fields.optional("company"),
            project_type: fields.required("projectType"),
            consultation_type: fields.optional("consultationType"),
            preferred_time: fields.optional("preferredTime"),
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
    pub async fn submit_consultation(
        &self,
        input: SubmitConsultationInput,
    ) -> burmuda_shared::Result<String> {
        input.validate()?;

        Ok(self
            .create(Payload::Consultation(ConsultationForm {
                name: input.name,
                email: input.email,
                phone: input.phone,
                company: input.company,
                project_type: input.project_type,
                consultation_type: input.consultation_type,
                preferred_time: input.preferred_time,
                message: input.message,
            }))
            .await)
    }
}
