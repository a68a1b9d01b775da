// src/services/mod.rs

pub mod audit;      // per-record action trail, civil-time stamps
pub mod dispatcher; // status -> mail fan-out, fail-soft
pub mod mailer;     // SMTP transport behind the Mailer trait
pub mod store;      // the ONLY writer of contracts.json
pub mod templates;  // rendered French HTML mails

// Public API
pub use dispatcher::{dispatch_status_change, dispatch_submission_ack, DispatchOutcome};
pub use mailer::{Mailer, NullMailer, SmtpMailer};
pub use store::RecordStore;
