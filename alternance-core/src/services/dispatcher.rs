// src/services/dispatcher.rs
//
// The status→notification table, the only non-trivial logic in the registry.
// Each status maps to zero, one or two (recipient, template) pairs; a
// recipient is attempted only when its address field is non-empty, and every
// successful send appends one line to the record's action trail.
//
// Fail-soft contract: a transport failure is logged and reported in the
// returned outcome but never propagated — one recipient failing must not
// block the other, and a mail failure must never abort the status update.

use crate::records::{ContractRecord, Status};
use crate::services::audit;
use crate::services::mailer::Mailer;
use crate::services::templates::{self, RenderedMail};

/// Which address field on the record a mail goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Recipient {
    Learner,
    EmployerContact,
}

/// One mail actually handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub label: &'static str,
    pub to: String,
}

/// One dispatched attempt the transport rejected.
#[derive(Debug, Clone)]
pub struct FailedMail {
    pub label: &'static str,
    pub to: String,
    pub error: String,
}

/// Result of one fan-out. Skipped recipients (empty address) appear in
/// neither list.
#[derive(Debug, Default)]
pub struct DispatchOutcome {
    pub sent: Vec<SentMail>,
    pub failures: Vec<FailedMail>,
}

/// Notify stakeholders of the record's (already updated) status.
pub fn dispatch_status_change(record: &mut ContractRecord, mailer: &dyn Mailer) -> DispatchOutcome {
    let plan = plan_for(record);
    run_plan(record, mailer, plan)
}

/// Acknowledgment to the learner after the public self-submission.
pub fn dispatch_submission_ack(record: &mut ContractRecord, mailer: &dyn Mailer) -> DispatchOutcome {
    let plan = vec![(
        Recipient::Learner,
        templates::submission_ack(&record.prenom, &record.nom),
    )];
    run_plan(record, mailer, plan)
}

// The lookup table. Rendering happens up front so the borrow of the record's
// name fields ends before the trail is appended to.
fn plan_for(record: &ContractRecord) -> Vec<(Recipient, RenderedMail)> {
    let (prenom, nom, entreprise) = (&record.prenom, &record.nom, &record.entreprise);
    match record.status {
        Status::ATraiter => Vec::new(),
        Status::SaisiParEntreprise => vec![
            (
                Recipient::Learner,
                templates::learner_captured(prenom, nom, entreprise),
            ),
            (
                Recipient::EmployerContact,
                templates::employer_capture_request(prenom, nom),
            ),
        ],
        Status::SignatureEnCours => vec![
            (Recipient::Learner, templates::learner_signature(prenom, nom)),
            (
                Recipient::EmployerContact,
                templates::employer_signature(prenom, nom),
            ),
        ],
        Status::TransmisOpco => vec![
            (Recipient::Learner, templates::learner_opco(prenom, nom)),
            (
                Recipient::EmployerContact,
                templates::employer_opco(prenom, nom, entreprise),
            ),
        ],
    }
}

fn run_plan(
    record: &mut ContractRecord,
    mailer: &dyn Mailer,
    plan: Vec<(Recipient, RenderedMail)>,
) -> DispatchOutcome {
    let mut outcome = DispatchOutcome::default();
    for (recipient, mail) in plan {
        let to = match recipient {
            Recipient::Learner => record.mail.clone(),
            Recipient::EmployerContact => record.resp_mail.clone(),
        };
        if to.is_empty() {
            continue;
        }
        match mailer.send_html(&to, &mail.subject, &mail.html) {
            Ok(()) => {
                audit::append(record, &format!("Mail \"{}\" envoyé à {}", mail.label, to));
                outcome.sent.push(SentMail {
                    label: mail.label,
                    to,
                });
            }
            Err(e) => {
                tracing::error!(
                    id = %record.id,
                    to = %to,
                    label = mail.label,
                    error = %e,
                    "échec d'envoi du mail"
                );
                outcome.failures.push(FailedMail {
                    label: mail.label,
                    to,
                    error: e.to_string(),
                });
            }
        }
    }
    outcome
}
