// src/services/templates.rs
//
// Rendered mail bodies. One function per mail; each returns the subject, the
// HTML body and a short label reused verbatim in the record's action trail.
// Name fields are interpolated as-is, they carry whatever the record holds.

/// A fully rendered outbound mail.
#[derive(Debug, Clone)]
pub struct RenderedMail {
    /// Short class name, e.g. `accusé de réception`. Shows up in trail lines.
    pub label: &'static str,
    pub subject: String,
    pub html: String,
}

/// Acknowledgment sent to the learner right after the public submission.
pub fn submission_ack(prenom: &str, nom: &str) -> RenderedMail {
    RenderedMail {
        label: "accusé de réception",
        subject: "✅ Accusé de réception — Intégrale Academy".to_string(),
        html: card(
            "✅ Accusé de réception",
            &format!(
                "<p>Bonjour <b>{prenom} {nom}</b>,</p>\
                 <p>Votre demande a bien été enregistrée ✅</p>\
                 <p>Notre équipe vous contactera très prochainement.</p>"
            ),
        ),
    }
}

/// Learner mail when the contract has been captured and handed to the employer.
pub fn learner_captured(prenom: &str, nom: &str, entreprise: &str) -> RenderedMail {
    RenderedMail {
        label: "contrat saisi",
        subject: "📄 Contrat d'apprentissage saisi — Intégrale Academy".to_string(),
        html: card(
            "📄 Contrat saisi",
            &format!(
                "<p>Bonjour <b>{prenom} {nom}</b>,</p>\
                 <p>Nous avons saisi votre contrat d'apprentissage et l'avons transmis \
                 à votre entreprise <b>{entreprise}</b> ✅</p>\
                 <p>L'entreprise doit maintenant compléter sa partie. Nous reviendrons \
                 vers vous dès que ce sera validé.</p>"
            ),
        ),
    }
}

/// Employer-contact mail asking them to complete their part.
pub fn employer_capture_request(prenom: &str, nom: &str) -> RenderedMail {
    RenderedMail {
        label: "contrat à compléter",
        subject: "📄 Contrat d'apprentissage à compléter — Intégrale Academy".to_string(),
        html: card(
            "📄 Contrat à compléter",
            &format!(
                "<p>Bonjour,</p>\
                 <p>Nous vous avons transmis le contrat d'apprentissage numérique \
                 concernant <b>{prenom} {nom}</b> ✅</p>\
                 <p>Merci de compléter votre partie dans les meilleurs délais.</p>"
            ),
        ),
    }
}

/// Learner mail when the digital signature round starts.
pub fn learner_signature(prenom: &str, nom: &str) -> RenderedMail {
    RenderedMail {
        label: "signature électronique",
        subject: "✍️ Signature électronique demandée — Intégrale Academy".to_string(),
        html: card(
            "✍️ Signature en cours",
            &format!(
                "<p>Bonjour <b>{prenom} {nom}</b>,</p>\
                 <p>Votre contrat d'apprentissage est prêt : vous allez recevoir une \
                 demande de signature électronique ✍️</p>\
                 <p>Merci de signer dès réception du lien.</p>"
            ),
        ),
    }
}

/// Employer-contact mail: two documents are waiting for signature.
pub fn employer_signature(prenom: &str, nom: &str) -> RenderedMail {
    RenderedMail {
        label: "documents à signer",
        subject: "✍️ 2 documents à signer — Intégrale Academy".to_string(),
        html: card(
            "✍️ 2 documents à signer",
            &format!(
                "<p>Bonjour,</p>\
                 <p>Deux documents concernant le contrat d'apprentissage de \
                 <b>{prenom} {nom}</b> attendent votre signature électronique ✍️</p>\
                 <p>Merci de les signer dans les meilleurs délais.</p>"
            ),
        ),
    }
}

/// Learner mail when the file is forwarded to the funding body.
pub fn learner_opco(prenom: &str, nom: &str) -> RenderedMail {
    RenderedMail {
        label: "transmission OPCO",
        subject: "📤 Contrat transmis à l'OPCO — Intégrale Academy".to_string(),
        html: card(
            "📤 Transmis à l'OPCO",
            &format!(
                "<p>Bonjour <b>{prenom} {nom}</b>,</p>\
                 <p>Votre contrat d'apprentissage signé a été transmis à l'OPCO pour \
                 prise en charge 📤</p>\
                 <p>Nous vous tiendrons informé de la suite du dossier.</p>"
            ),
        ),
    }
}

/// Employer-contact mail for the same forwarding step.
pub fn employer_opco(prenom: &str, nom: &str, entreprise: &str) -> RenderedMail {
    RenderedMail {
        label: "transmission OPCO",
        subject: "📤 Contrat transmis à l'OPCO — Intégrale Academy".to_string(),
        html: card(
            "📤 Transmis à l'OPCO",
            &format!(
                "<p>Bonjour,</p>\
                 <p>Le contrat d'apprentissage de <b>{prenom} {nom}</b> \
                 ({entreprise}) a été transmis à l'OPCO pour prise en charge 📤</p>\
                 <p>Nous reviendrons vers vous en cas de pièce manquante.</p>"
            ),
        ),
    }
}

// House card layout shared by every mail: school header, yellow banner, body,
// automatic-message footer.
fn card(banner: &str, body: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width:600px; margin:auto; background:#f9f9f9; padding:20px;">
  <div style="background:#fff; border-radius:12px; box-shadow:0 2px 8px rgba(0,0,0,0.1); overflow:hidden;">
    <div style="text-align:center; padding:20px 20px 10px 20px;">
      <h2 style="color:#000; font-size:18px; margin:10px 0 0 0;">Intégrale Academy</h2>
    </div>
    <div style="background:#F4C45A; padding:12px; text-align:center;">
      <h3 style="margin:0; font-size:18px; color:#000;">{banner}</h3>
    </div>
    <div style="padding:20px; font-size:15px; color:#333;">
      {body}
    </div>
    <div style="padding:15px; font-size:12px; color:#777; text-align:center; border-top:1px solid #eee;">
      Ceci est un message automatique — Intégrale Academy
    </div>
  </div>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_interpolated_verbatim() {
        let mail = learner_captured("Jean", "Dupont", "Boulangerie <Martin>");
        assert!(mail.html.contains("Jean Dupont"));
        // No escaping is applied; the record's content flows through as-is.
        assert!(mail.html.contains("Boulangerie <Martin>"));
    }

    #[test]
    fn every_mail_carries_subject_and_label() {
        let mails = [
            submission_ack("a", "b"),
            learner_captured("a", "b", "c"),
            employer_capture_request("a", "b"),
            learner_signature("a", "b"),
            employer_signature("a", "b"),
            learner_opco("a", "b"),
            employer_opco("a", "b", "c"),
        ];
        for m in mails {
            assert!(!m.subject.is_empty());
            assert!(!m.label.is_empty());
            assert!(m.html.contains("Intégrale Academy"));
        }
    }
}
