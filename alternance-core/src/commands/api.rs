// src/commands/api.rs
//
// Facade over the store, dispatcher and trail: the operations the (external)
// web layer or the admin CLI call. Every operation loads the whole collection,
// mutates it in memory and persists it wholesale; two concurrent operations
// can race last-writer-wins, an accepted limitation for a single-operator
// tool. Mail sends happen before the final persist and outside the store's
// write lock.

use serde_json::json;

use crate::config::CoreConfig;
use crate::error::RegistryError;
use crate::records::{ContractRecord, RecordDraft, Status};
use crate::services::dispatcher::{dispatch_status_change, dispatch_submission_ack, DispatchOutcome};
use crate::services::mailer::Mailer;
use crate::services::store::RecordStore;

pub struct Commands {
    store: RecordStore,
    mailer: Box<dyn Mailer>,
}

impl Commands {
    pub fn new(config: &CoreConfig, mailer: Box<dyn Mailer>) -> Result<Self, RegistryError> {
        let store = RecordStore::open(config.data_file())?;
        Ok(Self { store, mailer })
    }

    /// Public self-submission: new record at `A traiter`, acknowledgment mail
    /// attempted (fail-soft), then persisted. Returns the stored record.
    pub fn submit(&self, draft: RecordDraft) -> Result<ContractRecord, RegistryError> {
        let mut record = ContractRecord::from_draft(draft, Status::ATraiter);
        let outcome = dispatch_submission_ack(&mut record, self.mailer.as_ref());
        tracing::info!(
            id = %record.id,
            detail = %json!({ "sent": outcome.sent.len(), "failed": outcome.failures.len() }),
            "soumission publique enregistrée"
        );
        let mut records = self.store.load();
        records.push(record.clone());
        self.store.save(&records)?;
        Ok(record)
    }

    /// Admin manual entry at an arbitrary status. No mail is sent.
    pub fn add(&self, draft: RecordDraft, status: Status) -> Result<ContractRecord, RegistryError> {
        let record = ContractRecord::from_draft(draft, status);
        let mut records = self.store.load();
        records.push(record.clone());
        self.store.save(&records)?;
        Ok(record)
    }

    /// Full collection in stored order.
    pub fn list(&self) -> Vec<ContractRecord> {
        self.store.load()
    }

    /// Single record by id.
    pub fn get(&self, id: &str) -> Result<ContractRecord, RegistryError> {
        self.store
            .load()
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| RegistryError::NotFound { id: id.to_string() })
    }

    /// Update the workflow stage and fan out the matching notifications.
    /// The new status is persisted regardless of mail outcome; transport
    /// failures are only reported in the returned outcome.
    pub fn set_status(&self, id: &str, status: Status) -> Result<DispatchOutcome, RegistryError> {
        let mut records = self.store.load();
        let record = find_mut(&mut records, id)?;
        record.status = status;
        let outcome = dispatch_status_change(record, self.mailer.as_ref());
        tracing::info!(
            id = %id,
            status = %status,
            sent = outcome.sent.len(),
            failed = outcome.failures.len(),
            "statut mis à jour"
        );
        self.store.save(&records)?;
        Ok(outcome)
    }

    /// Replace the free-text comment (trimmed).
    pub fn set_comment(&self, id: &str, commentaire: &str) -> Result<(), RegistryError> {
        let mut records = self.store.load();
        let record = find_mut(&mut records, id)?;
        record.commentaire = commentaire.trim().to_string();
        self.store.save(&records)
    }

    /// Whole-record edit: replace the draft fields, status and comment.
    /// Identity, creation timestamp and the action trail are preserved.
    /// No mail is sent — only `set_status` notifies.
    pub fn edit(
        &self,
        id: &str,
        draft: &RecordDraft,
        status: Status,
        commentaire: &str,
    ) -> Result<ContractRecord, RegistryError> {
        let mut records = self.store.load();
        let record = find_mut(&mut records, id)?;
        record.apply_draft(draft);
        record.status = status;
        record.commentaire = commentaire.trim().to_string();
        let updated = record.clone();
        self.store.save(&records)?;
        Ok(updated)
    }

    /// Hard, non-recoverable removal. The remaining order is unchanged.
    pub fn delete(&self, id: &str) -> Result<(), RegistryError> {
        let mut records = self.store.load();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(RegistryError::NotFound { id: id.to_string() });
        }
        self.store.save(&records)
    }
}

fn find_mut<'a>(
    records: &'a mut [ContractRecord],
    id: &str,
) -> Result<&'a mut ContractRecord, RegistryError> {
    records
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| RegistryError::NotFound { id: id.to_string() })
}
