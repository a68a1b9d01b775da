// src/services/mailer.rs
//
// Outbound mail behind a trait seam so the dispatcher stays testable and the
// CLI can run without credentials. The SMTP implementation opens one STARTTLS
// session per message, mirroring the low-traffic usage pattern of the tool.

use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use thiserror::Error;

use crate::config::CoreConfig;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("adresse invalide: {0:?}")]
    Address(String),
    #[error("construction du message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("transport SMTP: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Send one HTML mail to one recipient.
pub trait Mailer: Send + Sync {
    fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<(), MailError>;
}

/// STARTTLS SMTP transport authenticated with the operator's credentials.
pub struct SmtpMailer {
    host: String,
    port: u16,
    from: String,
    credentials: Credentials,
    bcc: Option<String>,
}

impl SmtpMailer {
    pub fn from_config(cfg: &CoreConfig) -> Self {
        Self {
            host: cfg.smtp_host.clone(),
            port: cfg.smtp_port,
            from: cfg.from_email.clone(),
            credentials: Credentials::new(cfg.from_email.clone(), cfg.email_password.clone()),
            bcc: cfg.bcc_email.clone(),
        }
    }
}

impl Mailer for SmtpMailer {
    fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<(), MailError> {
        let from: Mailbox = self
            .from
            .parse()
            .map_err(|_| MailError::Address(self.from.clone()))?;
        let to_mbox: Mailbox = to.parse().map_err(|_| MailError::Address(to.to_string()))?;

        let mut builder = Message::builder().from(from).to(to_mbox).subject(subject);
        if let Some(bcc) = &self.bcc {
            let mbox: Mailbox = bcc.parse().map_err(|_| MailError::Address(bcc.clone()))?;
            builder = builder.bcc(mbox);
        }
        let message = builder.multipart(MultiPart::alternative_plain_html(
            subject.to_string(),
            html.to_string(),
        ))?;

        let transport = SmtpTransport::starttls_relay(&self.host)?
            .port(self.port)
            .credentials(self.credentials.clone())
            .build();
        transport.send(&message)?;
        Ok(())
    }
}

/// No-network mailer: logs the would-be send and reports success. Used by the
/// CLI when no SMTP credential is configured.
pub struct NullMailer;

impl Mailer for NullMailer {
    fn send_html(&self, to: &str, subject: &str, _html: &str) -> Result<(), MailError> {
        tracing::info!(to, subject, "mail non envoyé (transport désactivé)");
        Ok(())
    }
}
