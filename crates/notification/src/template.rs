use burmuda_submission::{Payload, Submission};
use time::macros::format_description;

const NOT_PROVIDED: &str = "Not provided";

/// Plain-text announcement of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
}

/// Renders `submission` into a notification. The output depends only on the
/// submission, including the timestamp line.
pub fn render(submission: &Submission) -> Notification {
    let submitted = submission
        .submitted_at
        .format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second] UTC"
        ))
        .unwrap_or_else(|_| submission.submitted_at.to_string());

    match &submission.payload {
        Payload::Contact(form) => Notification {
            subject: format!("New contact form submission from {}", form.name),
            body: format!(
                "New Contact Form Submission\n\
                 \n\
                 Name: {}\n\
                 Email: {}\n\
                 Phone: {}\n\
                 Company: {}\n\
                 Service Needed: {}\n\
                 \n\
                 Message:\n\
                 {}\n\
                 \n\
                 Submitted: {}",
                form.name,
                form.email,
                form.phone.as_deref().unwrap_or(NOT_PROVIDED),
                form.company.as_deref().unwrap_or(NOT_PROVIDED),
                form.service,
                form.message,
                submitted
            ),
        },
        Payload::Consultation(form) => Notification {
            subject: format!("New consultation request from {}", form.name),
            body: format!(
                "New Consultation Request\n\
                 \n\
                 Name: {}\n\
                 Email: {}\n\
                 Phone: {}\n\
                 Company: {}\n\
                 Project Type: {}\n\
                 Consultation Type: {}\n\
                 Preferred Time: {}\n\
                 \n\
                 Message:\n\
                 {}\n\
                 \n\
                 Submitted: {}",
                form.name,
                form.email,
                form.phone,
                form.company.as_deref().unwrap_or(NOT_PROVIDED),
                form.project_type,
                form.consultation_type.as_deref().unwrap_or("Not specified"),
                form.preferred_time.as_deref().unwrap_or("Flexible"),
                form.message,
                submitted
            ),
        },
    }
}

/// `mailto:` link an operator can open to forward a notification by hand.
pub fn mailto_link(to: &str, notification: &Notification) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        urlencoding::encode(&notification.subject),
        urlencoding::encode(&notification.body)
    )
}
