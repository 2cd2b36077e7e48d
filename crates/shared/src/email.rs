//! Email collaborator for report delivery.
//!
//! Uses `lettre` for SMTP transport. The core engine never touches this;
//! the API layer renders a report body and hands it over.

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType, transport::smtp::authentication::Credentials,
};
use thiserror::Error;
use tracing::info;

use crate::config::EmailConfig;

/// Email service errors.
#[derive(Debug, Error)]
pub enum EmailError {
    /// Failed to build email message.
    #[error("Failed to build email: {0}")]
    Build(String),
    /// Failed to send email.
    #[error("Failed to send email: {0}")]
    Send(String),
    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

/// Email service for sending monthly report emails.
#[derive(Clone)]
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    /// Creates a new email service.
    #[must_use]
    pub const fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    fn create_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let creds = Credentials::new(
            self.config.smtp_username.clone(),
            self.config.smtp_password.clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)
            .map_err(|e| EmailError::Send(e.to_string()))?
            .port(self.config.smtp_port)
            .credentials(creds)
            .build();

        Ok(transport)
    }

    /// Builds the report message without sending it.
    fn build_message(&self, to: &str, subject: &str, body: &str) -> Result<Message, EmailError> {
        Message::builder()
            .from(
                self.config
                    .from_address
                    .parse()
                    .map_err(|_| EmailError::InvalidAddress(self.config.from_address.clone()))?,
            )
            .to(to
                .parse()
                .map_err(|_| EmailError::InvalidAddress(to.to_string()))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| EmailError::Build(e.to_string()))
    }

    /// Sends a monthly report email with a plain-text body.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be built or sent.
    pub async fn send_monthly_report(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), EmailError> {
        let message = self.build_message(to, subject, body)?;
        let transport = self.create_transport()?;

        transport
            .send(message)
            .await
            .map_err(|e| EmailError::Send(e.to_string()))?;

        info!(to = %to, subject = %subject, "Report email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EmailConfig {
        EmailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
            smtp_username: "user".to_string(),
            smtp_password: "pass".to_string(),
            from_address: "reports@profitpulse.app".to_string(),
        }
    }

    #[test]
    fn test_build_message_ok() {
        let service = EmailService::new(test_config());
        let message = service.build_message("owner@example.com", "Monthly report", "body");
        assert!(message.is_ok());
    }

    #[test]
    fn test_build_message_invalid_recipient() {
        let service = EmailService::new(test_config());
        let result = service.build_message("not-an-address", "Monthly report", "body");
        assert!(matches!(result, Err(EmailError::InvalidAddress(_))));
    }

    #[test]
    fn test_build_message_invalid_from() {
        let mut config = test_config();
        config.from_address = String::new();
        let service = EmailService::new(config);
        let result = service.build_message("owner@example.com", "Monthly report", "body");
        assert!(matches!(result, Err(EmailError::InvalidAddress(_))));
    }
}
