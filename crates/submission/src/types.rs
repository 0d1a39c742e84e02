use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::OffsetDateTime;
use ulid::Ulid;

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
    Contact,
    Consultation,
}

/// Declaration order is the only allowed direction of travel.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    #[default]
    New,
    Read,
    Responded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub project_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultation_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Payload {
    Contact(ContactForm),
    Consultation(ConsultationForm),
}

impl Payload {
    pub fn kind(&self) -> Kind {
        match self {
            Payload::Contact(_) => Kind::Contact,
            Payload::Consultation(_) => Kind::Consultation,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Payload::Contact(form) => &form.name,
            Payload::Consultation(form) => &form.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Payload::Contact(form) => &form.email,
            Payload::Consultation(form) => &form.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    #[serde(flatten)]
    pub payload: Payload,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
    pub status: Status,
}

impl Submission {
    pub fn new(payload: Payload) -> Self {
        Self {
            id: Ulid::new().to_string(),
            payload,
            submitted_at: OffsetDateTime::now_utc(),
            status: Status::New,
        }
    }

    pub fn kind(&self) -> Kind {
        self.payload.kind()
    }
}
