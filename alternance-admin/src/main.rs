use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use alternance_core::{
    Commands, CoreConfig, Mailer, NullMailer, RecordDraft, SmtpMailer, Status,
};

#[derive(Parser)]
#[command(
    name = "alternance-admin",
    about = "Administration du registre de contrats d'apprentissage"
)]
struct Cli {
    /// Never open an SMTP session, even if EMAIL_PASSWORD is set.
    #[arg(long, global = true)]
    no_mail: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// List all records (id, status, learner, employer)
    List,
    /// Print one record as JSON
    Show { id: String },
    /// Public-form submission: creates the record at "A traiter" and sends
    /// the acknowledgment mail to the learner
    Submit(DraftArgs),
    /// Manual entry at an arbitrary status; sends no mail
    Add {
        #[command(flatten)]
        draft: DraftArgs,
        #[arg(long, default_value = "A traiter")]
        status: String,
    },
    /// Update the workflow stage and send the matching notifications
    SetStatus { id: String, status: String },
    /// Replace the free-text comment
    Comment { id: String, text: String },
    /// Replace the record's fields, status and comment
    Edit {
        id: String,
        #[command(flatten)]
        draft: DraftArgs,
        #[arg(long)]
        status: String,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Remove a record permanently
    Delete { id: String },
}

#[derive(Args)]
struct DraftArgs {
    #[arg(long, default_value = "")]
    nom: String,
    #[arg(long, default_value = "")]
    prenom: String,
    #[arg(long, default_value = "")]
    mail: String,
    #[arg(long, default_value = "")]
    tel: String,
    #[arg(long, default_value = "")]
    bts: String,
    #[arg(long, default_value = "")]
    entreprise: String,
    #[arg(long, default_value = "")]
    siret: String,
    #[arg(long, default_value = "")]
    resp_nom: String,
    #[arg(long, default_value = "")]
    resp_mail: String,
    #[arg(long, default_value = "")]
    resp_tel: String,
    #[arg(long, default_value = "")]
    date_debut: String,
}

impl From<DraftArgs> for RecordDraft {
    fn from(a: DraftArgs) -> Self {
        RecordDraft {
            nom: a.nom,
            prenom: a.prenom,
            mail: a.mail,
            tel: a.tel,
            bts: a.bts,
            entreprise: a.entreprise,
            siret: a.siret,
            resp_nom: a.resp_nom,
            resp_mail: a.resp_mail,
            resp_tel: a.resp_tel,
            date_debut: a.date_debut,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = CoreConfig::from_env();
    let mailer: Box<dyn Mailer> = if cli.no_mail || !config.mail_enabled() {
        Box::new(NullMailer)
    } else {
        Box::new(SmtpMailer::from_config(&config))
    };
    let cmds = Commands::new(&config, mailer)?;

    match cli.cmd {
        Cmd::List => {
            for r in cmds.list() {
                println!(
                    "{}  [{}]  {} {}  — {}",
                    r.id, r.status, r.prenom, r.nom, r.entreprise
                );
            }
        }
        Cmd::Show { id } => {
            let rec = cmds.get(&id)?;
            println!("{}", serde_json::to_string_pretty(&rec)?);
        }
        Cmd::Submit(draft) => {
            let rec = cmds.submit(draft.into())?;
            println!("enregistré: {}", rec.id);
        }
        Cmd::Add { draft, status } => {
            let status = parse_status(&status)?;
            let rec = cmds.add(draft.into(), status)?;
            println!("ajouté: {}", rec.id);
        }
        Cmd::SetStatus { id, status } => {
            let status = parse_status(&status)?;
            let outcome = cmds.set_status(&id, status)?;
            println!(
                "statut: {status} — {} mail(s) envoyé(s), {} échec(s)",
                outcome.sent.len(),
                outcome.failures.len()
            );
            for f in &outcome.failures {
                eprintln!("échec {} ({}): {}", f.to, f.label, f.error);
            }
        }
        Cmd::Comment { id, text } => {
            cmds.set_comment(&id, &text)?;
            println!("commentaire mis à jour");
        }
        Cmd::Edit {
            id,
            draft,
            status,
            comment,
        } => {
            let status = parse_status(&status)?;
            let rec = cmds.edit(&id, &draft.into(), status, &comment)?;
            println!("modifié: {}", rec.id);
        }
        Cmd::Delete { id } => {
            cmds.delete(&id)?;
            println!("supprimé: {id}");
        }
    }
    Ok(())
}

fn parse_status(s: &str) -> Result<Status> {
    s.parse::<Status>().map_err(anyhow::Error::msg).with_context(|| {
        let accepted: Vec<&str> = Status::ALL.iter().map(|st| st.as_str()).collect();
        format!("statuts acceptés: {}", accepted.join(" | "))
    })
}
