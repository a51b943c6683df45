//! src/app/reglages.rs
//!
//! Réglages de la calculatrice (unité d'angle + format d'affichage).
//!
//! Valeurs par défaut = celles de la machine à l'allumage : DEG + NORM.
//! Lecture depuis un fichier JSON optionnel ; tout champ absent garde sa valeur par défaut.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::noyau::{FormatNombre, UniteAngle};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub angle: UniteAngle,
    pub format: FormatNombre,
}

impl Reglages {
    pub fn depuis_json(texte: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(texte)
    }

    pub fn charger(chemin: &Path) -> anyhow::Result<Self> {
        let texte = std::fs::read_to_string(chemin)
            .with_context(|| format!("lecture des réglages: {}", chemin.display()))?;
        let r = Self::depuis_json(&texte)
            .with_context(|| format!("réglages invalides: {}", chemin.display()))?;
        tracing::debug!(angle = %r.angle, format = %r.format, "réglages chargés");
        Ok(r)
    }
}
