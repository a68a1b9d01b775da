// src/error.rs

use thiserror::Error;

/// Errors surfaced by the registry operations.
///
/// Mail-transport failures are deliberately *not* represented here: a send
/// that fails is reported inside `DispatchOutcome` and logged, it never aborts
/// the record mutation that triggered it.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Unknown record identifier.
    #[error("contrat introuvable: {id}")]
    NotFound { id: String },

    /// Persisting the collection failed (disk full, permissions, ...).
    /// Reads never raise this: an unreadable file loads as an empty
    /// collection.
    #[error("écriture du registre: {0}")]
    Store(#[from] std::io::Error),

    /// The collection could not be serialized.
    #[error("sérialisation du registre: {0}")]
    Serialize(#[from] serde_json::Error),
}
