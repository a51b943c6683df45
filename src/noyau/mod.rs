//! Noyau flottant de la calculatrice
//!
//! Organisation interne :
//! - jetons.rs    : tokenisation (liste blanche fermée : glyphes × ÷ π √, Ans, fonctions)
//! - implicite.rs : produits implicites (2(3), 2sin(, )( …)
//! - pratt.rs     : parse par précédence -> Expr
//! - expr.rs      : AST (noeuds fermés, aucun texte)
//! - calcul.rs    : évaluation f64 + classement des erreurs
//! - trig.rs      : unités d'angle + quarts de tour exacts
//! - format.rs    : affichage Normal / Scientifique (arrondi exact demi-pair)
//! - erreur.rs    : erreurs typées, repliées en "Syntax Error" / "Math Error"
//! - eval.rs      : pipeline complet

pub mod calcul;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod implicite;
pub mod jetons;
pub mod pratt;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurCalcul, ErreurNoyau, ErreurSyntaxe, MSG_ERREUR_MATH, MSG_ERREUR_SYNTAXE};
pub use eval::{calculer, calculer_avec_demarche, eval_expression, Demarche, Sortie};
pub use format::{format_nombre, FormatNombre};
pub use trig::UniteAngle;
