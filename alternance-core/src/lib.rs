// alternance-core/src/lib.rs
//
// Registre de contrats d'apprentissage. The library owns the record model,
// the JSON-file store, the status→mail dispatch table, and the per-record
// action trail. The HTTP layer (forms, session gate) lives outside and only
// calls the `Commands` facade.

pub mod commands;
pub mod config;
pub mod error;
pub mod records;
pub mod services;

pub use commands::Commands;
pub use config::CoreConfig;
pub use error::RegistryError;
pub use records::{digits_only, ContractRecord, RecordDraft, Status};
pub use services::dispatcher::{DispatchOutcome, FailedMail, SentMail};
pub use services::mailer::{MailError, Mailer, NullMailer, SmtpMailer};
pub use services::store::RecordStore;
