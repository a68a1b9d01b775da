// src/records.rs
//
// Record model. Serde field names double as the persisted JSON keys, so the
// on-disk format stays readable next to the registry file itself.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Workflow stage of a contract. The serialized forms are fixed French labels;
/// no ordering is enforced between stages, a record may move backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "A traiter")]
    ATraiter,
    #[serde(rename = "Saisi par l'entreprise")]
    SaisiParEntreprise,
    #[serde(rename = "Signature en cours")]
    SignatureEnCours,
    #[serde(rename = "Transmis à l'OPCO")]
    TransmisOpco,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::ATraiter,
        Status::SaisiParEntreprise,
        Status::SignatureEnCours,
        Status::TransmisOpco,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::ATraiter => "A traiter",
            Status::SaisiParEntreprise => "Saisi par l'entreprise",
            Status::SignatureEnCours => "Signature en cours",
            Status::TransmisOpco => "Transmis à l'OPCO",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .iter()
            .copied()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| format!("statut inconnu: {s:?}"))
    }
}

/// One apprenticeship application. `id` and `created_at` are assigned at
/// creation and never change; `logs` is append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractRecord {
    pub id: String,
    pub created_at: String,
    pub nom: String,
    pub prenom: String,
    pub mail: String,
    pub tel: String,
    pub bts: String,
    pub entreprise: String,
    /// Digits-only, normalized at every write. Empty is permitted.
    pub siret: String,
    pub resp_nom: String,
    pub resp_mail: String,
    pub resp_tel: String,
    pub date_debut: String,
    pub status: Status,
    pub commentaire: String,
    /// Action trail, one human-readable line per notification actually sent.
    /// Insertion order is chronological; records persisted before the field
    /// existed load with an empty trail.
    #[serde(default)]
    pub logs: Vec<String>,
}

/// Field set shared by the public submission form and the admin entry/edit
/// forms. Identity, status, comment and trail are managed outside the draft.
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    pub nom: String,
    pub prenom: String,
    pub mail: String,
    pub tel: String,
    pub bts: String,
    pub entreprise: String,
    pub siret: String,
    pub resp_nom: String,
    pub resp_mail: String,
    pub resp_tel: String,
    pub date_debut: String,
}

impl ContractRecord {
    /// Build a fresh record from a draft. Assigns a v4 id and a UTC creation
    /// timestamp, normalizes the siret.
    pub fn from_draft(draft: RecordDraft, status: Status) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now().to_rfc3339(),
            nom: draft.nom,
            prenom: draft.prenom,
            mail: draft.mail,
            tel: draft.tel,
            bts: draft.bts,
            entreprise: draft.entreprise,
            siret: digits_only(&draft.siret),
            resp_nom: draft.resp_nom,
            resp_mail: draft.resp_mail,
            resp_tel: draft.resp_tel,
            date_debut: draft.date_debut,
            status,
            commentaire: String::new(),
            logs: Vec::new(),
        }
    }

    /// Replace the editable fields from a draft, trimming free-text input.
    /// Identity, creation timestamp, status, comment and trail are untouched.
    pub fn apply_draft(&mut self, draft: &RecordDraft) {
        self.nom = draft.nom.trim().to_string();
        self.prenom = draft.prenom.trim().to_string();
        self.mail = draft.mail.trim().to_string();
        self.tel = draft.tel.trim().to_string();
        self.bts = draft.bts.trim().to_string();
        self.entreprise = draft.entreprise.trim().to_string();
        self.siret = digits_only(&draft.siret);
        self.resp_nom = draft.resp_nom.trim().to_string();
        self.resp_mail = draft.resp_mail.trim().to_string();
        self.resp_tel = draft.resp_tel.trim().to_string();
        self.date_debut = draft.date_debut.trim().to_string();
    }
}

/// Keep only ASCII decimal digits. Used for siret normalization; idempotent.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_strips_everything_else() {
        assert_eq!(digits_only("123 456 789 00012"), "12345678900012");
        assert_eq!(digits_only("FR-512.244"), "512244");
        assert_eq!(digits_only(""), "");
    }

    #[test]
    fn digits_only_is_idempotent() {
        let once = digits_only("732 829 320 00074");
        assert_eq!(digits_only(&once), once);
    }

    #[test]
    fn status_labels_round_trip() {
        for st in Status::ALL {
            assert_eq!(st.as_str().parse::<Status>().unwrap(), st);
        }
        assert!("Terminé".parse::<Status>().is_err());
    }

    #[test]
    fn status_serializes_to_fixed_labels() {
        let json = serde_json::to_string(&Status::TransmisOpco).unwrap();
        assert_eq!(json, "\"Transmis à l'OPCO\"");
        let back: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Status::TransmisOpco);
    }

    #[test]
    fn from_draft_normalizes_siret_and_starts_empty() {
        let rec = ContractRecord::from_draft(
            RecordDraft {
                nom: "Durand".into(),
                siret: "512 244 130 00021".into(),
                ..Default::default()
            },
            Status::ATraiter,
        );
        assert_eq!(rec.siret, "51224413000021");
        assert_eq!(rec.status, Status::ATraiter);
        assert!(rec.commentaire.is_empty());
        assert!(rec.logs.is_empty());
        assert!(!rec.id.is_empty());
    }
}
