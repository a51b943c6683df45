//! src/app/etat.rs
//!
//! État de session (côté appelant, hors noyau).
//!
//! Rôle : contenir l'état de la calculatrice (expression, résultat affiché, Ans, réglages)
//! et offrir les actions du clavier (saisie, DEL, AC, EXE, FORMAT) sans logique d'affichage.
//!
//! Contrats :
//! - Le noyau reste pur : c'est ICI que vit `Ans`, et il n'est mis à jour que sur succès.
//! - Actions déterministes, sans effet de bord caché.

use tracing::debug;

use super::reglages::Reglages;
use crate::noyau::{calculer, format_nombre, Sortie, UniteAngle};

/// Une saisie qui commence par l'un de ces opérateurs continue depuis le résultat affiché.
const OPERATEURS_SUITE: &[char] = &['+', '-', '×', '÷', '*', '/', '^'];

/// Motifs du clavier retirés d'un seul coup par DEL.
const MOTIFS_CLAVIER: &[&str] = &["sin(", "cos(", "tan(", "log(", "ln(", "√(", "Abs(", "Ans"];

/// Requête envoyée au tuteur quand il n'y a ni expression ni résultat.
pub const REQUETE_PAR_DEFAUT: &str = "Help me with math.";

/// Ce que l'appelant transmet au tuteur externe (aucun appel réseau ici).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemandeTuteur {
    pub requete: String,
    pub contexte: String,
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    // --- entrée utilisateur ---
    pub expression: String,

    // --- sortie ---
    pub resultat: String, // nombre formaté ou message d'erreur ; vide = rien d'affiché

    // --- mémoire ---
    pub ans: f64, // 0 avant la première évaluation réussie

    // --- paramètres ---
    pub reglages: Reglages,

    // vrai si `resultat` provient d'une évaluation réussie (re-formatable)
    dernier_succes: bool,
}

impl Session {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            reglages,
            ..Self::default()
        }
    }

    /* ------------------------ Actions “touches” ------------------------ */

    /// Saisie d'une touche (ou d'un morceau de texte).
    ///
    /// Après un résultat : un opérateur continue le calcul depuis `Ans`,
    /// toute autre saisie démarre une nouvelle expression.
    pub fn saisir(&mut self, val: &str) {
        if self.resultat.is_empty() {
            self.expression.push_str(val);
            return;
        }

        let suite = val
            .chars()
            .next()
            .is_some_and(|c| OPERATEURS_SUITE.contains(&c));

        self.expression = if suite {
            format!("Ans{val}")
        } else {
            val.to_string()
        };
        self.effacer_resultat();
    }

    /// DEL : efface le résultat affiché puis le dernier symbole de l'expression
    /// (un motif complet comme "sin(" ou "Ans" part d'un coup).
    pub fn supprimer(&mut self) {
        self.effacer_resultat();

        while self.expression.ends_with(' ') {
            self.expression.pop();
        }

        for pat in MOTIFS_CLAVIER {
            if self.expression.ends_with(pat) {
                let n = self.expression.len() - pat.len();
                self.expression.truncate(n);
                return;
            }
        }

        self.expression.pop();
    }

    /// AC : efface l'expression et le résultat (Ans est conservé).
    pub fn tout_effacer(&mut self) {
        self.expression.clear();
        self.effacer_resultat();
    }

    /// EXE : évalue l'expression courante. Rien à faire si elle est vide.
    pub fn executer(&mut self) -> Option<Sortie> {
        if self.expression.trim().is_empty() {
            return None;
        }

        let sortie = calculer(
            &self.expression,
            self.ans,
            self.reglages.angle,
            self.reglages.format,
        );

        self.resultat = sortie.affichage.clone();
        self.dernier_succes = sortie.maj_ans();
        if let Some(v) = sortie.ans {
            self.ans = v;
        }

        debug!(
            expression = %self.expression,
            resultat = %self.resultat,
            ans = self.ans,
            "EXE"
        );
        Some(sortie)
    }

    /// FORMAT : bascule NORM/SCI et ré-affiche le dernier résultat réussi.
    pub fn basculer_format(&mut self) {
        self.reglages.format = self.reglages.format.bascule();
        if self.dernier_succes {
            self.resultat = format_nombre(self.ans, self.reglages.format);
        }
    }

    pub fn regler_angle(&mut self, unite: UniteAngle) {
        self.reglages.angle = unite;
    }

    /* ------------------------ Tuteur ------------------------ */

    /// Requête + contexte libre pour le tuteur externe.
    pub fn demande_tuteur(&self) -> DemandeTuteur {
        let requete = if !self.expression.is_empty() {
            self.expression.clone()
        } else if !self.resultat.is_empty() {
            self.resultat.clone()
        } else {
            REQUETE_PAR_DEFAUT.to_string()
        };

        let contexte = format!(
            "Mode: Calculate. Angle Unit: {}. Previous Result: {}. Current Expression: {}",
            self.reglages.angle, self.resultat, self.expression
        );

        DemandeTuteur { requete, contexte }
    }

    fn effacer_resultat(&mut self) {
        self.resultat.clear();
        self.dernier_succes = false;
    }
}
