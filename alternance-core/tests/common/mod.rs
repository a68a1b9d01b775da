// tests/common/mod.rs
// Shared helpers: in-memory mailers and a config pointing at a temp dir.
#![allow(dead_code)] // not every test binary uses every helper

use std::sync::Mutex;

use alternance_core::{CoreConfig, MailError, Mailer, RecordDraft};

/// Records every accepted send as `(to, subject)`.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(String, String)>>,
}

impl Mailer for RecordingMailer {
    fn send_html(&self, to: &str, subject: &str, _html: &str) -> Result<(), MailError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string()));
        Ok(())
    }
}

/// Rejects sends to one address, accepts the rest.
pub struct RejectingMailer {
    pub reject: String,
    pub sent: Mutex<Vec<String>>,
}

impl RejectingMailer {
    pub fn rejecting(addr: &str) -> Self {
        Self {
            reject: addr.to_string(),
            sent: Mutex::new(Vec::new()),
        }
    }
}

impl Mailer for RejectingMailer {
    fn send_html(&self, to: &str, _subject: &str, _html: &str) -> Result<(), MailError> {
        if to == self.reject {
            return Err(MailError::Address(to.to_string()));
        }
        self.sent.lock().unwrap().push(to.to_string());
        Ok(())
    }
}

/// Config rooted in a temp directory, mail transport unconfigured.
pub fn test_config(dir: &std::path::Path) -> CoreConfig {
    CoreConfig {
        data_dir: dir.to_path_buf(),
        secret_key: "test".into(),
        admin_password: "test".into(),
        from_email: "ecole@example.org".into(),
        email_password: String::new(),
        smtp_host: "localhost".into(),
        smtp_port: 587,
        bcc_email: None,
    }
}

/// A complete draft with both contact addresses populated.
pub fn full_draft() -> RecordDraft {
    RecordDraft {
        nom: "Dupont".into(),
        prenom: "Jean".into(),
        mail: "jean.dupont@example.org".into(),
        tel: "0611223344".into(),
        bts: "MCO".into(),
        entreprise: "Boulangerie Martin".into(),
        siret: "732 829 320 00074".into(),
        resp_nom: "Martin".into(),
        resp_mail: "contact@boulangerie-martin.fr".into(),
        resp_tel: "0499887766".into(),
        date_debut: "2025-09-01".into(),
    }
}
