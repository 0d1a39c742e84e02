//! Email notification service using lettre

use anyhow::Context;
use burmuda_submission::Submission;
use futures::future::BoxFuture;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

use crate::{Notification, Sink, mailto_link};

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025
}

fn default_from_address() -> String {
    "noreply@burmuda.localhost".to_string()
}

fn default_contact_address() -> String {
    "hello@burmuda.localhost".to_string()
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: String,
    to: String,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            // Use builder_dangerous for unauthenticated SMTP (e.g., MailDev)
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
            to: config.contact_address.clone(),
        })
    }

    pub fn build_plain(
        &self,
        subject: impl Into<String>,
        plain: impl Into<String>,
    ) -> anyhow::Result<Message> {
        Ok(Message::builder()
            .from(self.from.parse::<Mailbox>().context("invalid from address")?)
            .to(self.to.parse::<Mailbox>().context("invalid contact address")?)
            .subject(subject)
            .header(header::ContentType::TEXT_PLAIN)
            .body(plain.into())?)
    }

    pub async fn send_plain(
        &self,
        subject: impl Into<String>,
        plain: impl Into<String>,
    ) -> anyhow::Result<()> {
        let message = self.build_plain(subject, plain)?;
        let mailer = self.mailer.clone();

        tracing::info!(to = %self.to, "Sending email text plain");

        // SmtpTransport blocks on network I/O.
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }
}

impl Sink for EmailService {
    fn name(&self) -> &'static str {
        "email"
    }

    fn deliver<'a>(
        &'a self,
        submission: &'a Submission,
        notification: &'a Notification,
    ) -> BoxFuture<'a, anyhow::Result<()>> {
        Box::pin(async move {
            let result = self
                .send_plain(notification.subject.to_owned(), notification.body.to_owned())
                .await;

            if let Err(e) = &result {
                tracing::error!(
                    error = %e,
                    submission_id = %submission.id,
                    fallback = %mailto_link(&self.to, notification),
                    "Email not sent, forward it manually"
                );
            }

            result
        })
    }
}
