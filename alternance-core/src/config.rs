// src/config.rs

use std::path::PathBuf;

/// Process configuration, read once at startup and passed by reference to the
/// components that need it. All values come from the environment; presence is
/// the only validation.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory holding the persisted collection (`contracts.json`).
    pub data_dir: PathBuf,
    /// Session secret for the (external) web layer.
    pub secret_key: String,
    /// Shared admin password for the (external) web layer.
    pub admin_password: String,
    /// Sender address for all outbound mail.
    pub from_email: String,
    /// SMTP credential paired with `from_email`. Empty disables mail.
    pub email_password: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    /// Optional operational address blind-copied on every outbound mail.
    pub bcc_email: Option<String>,
}

impl CoreConfig {
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var_os("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(Self::default_data_dir),
            secret_key: env_or("SECRET_KEY", "change-me"),
            admin_password: env_or("ADMIN_PASSWORD", "admin"),
            from_email: env_or("FROM_EMAIL", "ecole@integraleacademy.com"),
            email_password: env_or("EMAIL_PASSWORD", ""),
            smtp_host: env_or("SMTP_HOST", "smtp.gmail.com"),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|s| s.parse::<u16>().ok())
                .unwrap_or(587),
            bcc_email: std::env::var("BCC_EMAIL").ok().filter(|s| !s.is_empty()),
        }
    }

    /// Canonical path of the persisted collection.
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join("contracts.json")
    }

    /// Mail is only attempted when a credential is configured.
    pub fn mail_enabled(&self) -> bool {
        !self.email_password.is_empty()
    }

    fn default_data_dir() -> PathBuf {
        PathBuf::from("./data")
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
