// src/main.rs
//
// Calculatrice scientifique: point d’entrée en ligne de commande
// ---------------------------------------------------------------
// - `evaluate` : une expression -> une ligne (ou un objet JSON), code de sortie 1 sur erreur
// - `repl`     : session interactive sur stdin (EXE à chaque ligne, commandes `:xxx`)
//
// Traces : RUST_LOG (défaut "warn"), écrites sur stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use calculatrice_sci::app::{Reglages, Session};
use calculatrice_sci::noyau::{
    calculer_avec_demarche, format_nombre, Demarche, FormatNombre, UniteAngle,
};

#[derive(Parser)]
#[command(name = "calculatrice", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Évalue une expression et affiche le résultat
    Evaluate {
        /// Expression à évaluer (ex: "2sin(30)+3!")
        #[arg(allow_hyphen_values = true)]
        expression: String,

        #[command(flatten)]
        reglages: OptionsReglages,

        /// Valeur de Ans
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        ans: f64,

        /// Sortie JSON (affichage, ans, maj_ans)
        #[arg(long)]
        json: bool,

        /// Affiche aussi les jetons et l'arbre parenthésé
        #[arg(long)]
        demarche: bool,
    },
    /// Session interactive : une ligne = saisie + EXE
    Repl {
        #[command(flatten)]
        reglages: OptionsReglages,
    },
}

#[derive(Args)]
struct OptionsReglages {
    /// Unité d'angle
    #[arg(long, value_enum)]
    angle: Option<Angle>,

    /// Format d'affichage
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Fichier JSON de réglages ({"angle": "RAD", "format": "SCI"})
    #[arg(long, value_name = "FICHIER")]
    reglages: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Angle {
    Deg,
    Rad,
    Gra,
}

impl From<Angle> for UniteAngle {
    fn from(a: Angle) -> Self {
        match a {
            Angle::Deg => UniteAngle::Degre,
            Angle::Rad => UniteAngle::Radian,
            Angle::Gra => UniteAngle::Grade,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Norm,
    Sci,
}

impl From<Format> for FormatNombre {
    fn from(f: Format) -> Self {
        match f {
            Format::Norm => FormatNombre::Normal,
            Format::Sci => FormatNombre::Scientifique,
        }
    }
}

impl OptionsReglages {
    /// Fichier éventuel, puis les drapeaux par-dessus.
    fn resoudre(&self) -> anyhow::Result<Reglages> {
        let mut r = match &self.reglages {
            Some(chemin) => Reglages::charger(chemin)?,
            None => Reglages::default(),
        };
        if let Some(a) = self.angle {
            r.angle = a.into();
        }
        if let Some(f) = self.format {
            r.format = f.into();
        }
        Ok(r)
    }
}

#[derive(Serialize)]
struct RapportJson<'a> {
    affichage: &'a str,
    ans: Option<f64>,
    maj_ans: bool,
    reglages: Reglages,
    #[serde(skip_serializing_if = "Option::is_none")]
    demarche: Option<Demarche>,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            expression,
            reglages,
            ans,
            json,
            demarche,
        } => evaluate(&expression, reglages.resoudre()?, ans, json, demarche),
        Commands::Repl { reglages } => {
            repl(reglages.resoudre()?)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/* ------------------------ evaluate ------------------------ */

fn evaluate(
    expression: &str,
    reglages: Reglages,
    ans: f64,
    json: bool,
    avec_demarche: bool,
) -> anyhow::Result<ExitCode> {
    let (sortie, demarche) =
        calculer_avec_demarche(expression, ans, reglages.angle, reglages.format);
    let demarche = demarche.filter(|_| avec_demarche);

    let mut out = io::stdout().lock();
    if json {
        let rapport = RapportJson {
            affichage: &sortie.affichage,
            ans: sortie.ans,
            maj_ans: sortie.maj_ans(),
            reglages,
            demarche,
        };
        let texte = serde_json::to_string(&rapport).context("sérialisation JSON")?;
        writeln!(out, "{texte}")?;
    } else {
        if let Some(d) = &demarche {
            writeln!(out, "jetons : {}", d.jetons)?;
            writeln!(out, "résolus: {}", d.resolus)?;
            writeln!(out, "arbre  : {}", d.arbre)?;
        }
        writeln!(out, "{}", sortie.affichage)?;
    }

    Ok(if sortie.maj_ans() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/* ------------------------ repl ------------------------ */

fn repl(reglages: Reglages) -> anyhow::Result<()> {
    let mut session = Session::new(reglages);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    for ligne in stdin.lock().lines() {
        let ligne = ligne.context("lecture de stdin")?;
        let ligne = ligne.trim();

        if let Some(cmd) = ligne.strip_prefix(':') {
            match cmd {
                "quit" | "q" => break,
                "deg" => session.regler_angle(UniteAngle::Degre),
                "rad" => session.regler_angle(UniteAngle::Radian),
                "gra" => session.regler_angle(UniteAngle::Grade),
                "norm" | "sci" | "fmt" => {
                    let voulu = match cmd {
                        "norm" => FormatNombre::Normal,
                        "sci" => FormatNombre::Scientifique,
                        _ => session.reglages.format.bascule(),
                    };
                    if session.reglages.format != voulu {
                        session.basculer_format();
                    }
                    if !session.resultat.is_empty() {
                        writeln!(out, "{}", session.resultat)?;
                    }
                }
                "ans" => writeln!(
                    out,
                    "{}",
                    format_nombre(session.ans, session.reglages.format)
                )?,
                "del" => {
                    session.supprimer();
                    writeln!(out, "{}", session.expression)?;
                }
                "ac" => session.tout_effacer(),
                "tuteur" => {
                    let d = session.demande_tuteur();
                    writeln!(out, "{}", d.requete)?;
                    writeln!(out, "{}", d.contexte)?;
                }
                autre => tracing::warn!(commande = autre, "commande inconnue"),
            }
            continue;
        }

        // Ligne vide = EXE sur l'expression en cours (utile après :del).
        if !ligne.is_empty() {
            session.saisir(ligne);
        }
        if session.executer().is_some() {
            writeln!(out, "{}", session.resultat)?;
        }
    }

    Ok(())
}
