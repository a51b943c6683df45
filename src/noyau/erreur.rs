// src/noyau/erreur.rs
//
// Erreurs du noyau.
// - ErreurSyntaxe : jetons / parse (structure invalide)
// - ErreurCalcul  : évaluation (domaine, division par zéro, non fini)
//
// À la frontière, tout se replie sur DEUX messages seulement :
// "Syntax Error" et "Math Error". Le détail reste pour les tests et les traces.

use thiserror::Error;

use super::jetons::Fonction;

/// Message affiché pour toute erreur de calcul.
pub const MSG_ERREUR_MATH: &str = "Math Error";

/// Message affiché pour toute erreur de structure.
pub const MSG_ERREUR_SYNTAXE: &str = "Syntax Error";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurSyntaxe {
    #[error("entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{car}' (position {pos})")]
    CaractereInattendu { car: char, pos: usize },

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("parenthèse fermante sans ouvrante (jeton {pos})")]
    ParentheseInattendue { pos: usize },

    #[error("parenthèses vides")]
    ParenthesesVides,

    #[error("opérande manquant (jeton {pos})")]
    OperandeManquant { pos: usize },

    #[error("{0} attend une parenthèse ouvrante")]
    AppelSansParenthese(Fonction),

    #[error("appel vide: {0}()")]
    CorpsVide(Fonction),

    #[error("jeton inattendu (jeton {pos})")]
    JetonInattendu { pos: usize },

    #[error("expression trop imbriquée")]
    TropImbrique,

    #[error("expression trop longue ({0} jetons)")]
    TropLongue(usize),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("hors domaine: {0}")]
    Domaine(&'static str),

    #[error("dépassement de capacité")]
    Depassement,

    #[error("résultat non fini")]
    NonFini,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurNoyau {
    #[error(transparent)]
    Syntaxe(#[from] ErreurSyntaxe),

    #[error(transparent)]
    Calcul(#[from] ErreurCalcul),
}

impl ErreurNoyau {
    /// Message utilisateur (un des deux littéraux).
    pub fn message_utilisateur(&self) -> &'static str {
        match self {
            ErreurNoyau::Syntaxe(_) => MSG_ERREUR_SYNTAXE,
            ErreurNoyau::Calcul(_) => MSG_ERREUR_MATH,
        }
    }
}
