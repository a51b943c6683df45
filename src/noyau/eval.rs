//! Noyau: évaluation (pipeline réel)
//!
//! tokenize -> produits implicites -> parse (Pratt) -> Expr -> calcul (ans, unité) -> format
//!
//! Chaque étape est pure : rien n'est retenu d'un appel à l'autre.
//! La réponse précédente (`ans`) appartient à l'appelant, le noyau ne fait que la lire.

use serde::Serialize;
use tracing::{debug, trace};

use super::calcul::evaluer;
use super::erreur::{ErreurNoyau, ErreurSyntaxe};
use super::expr::Expr;
use super::format::{format_nombre, FormatNombre};
use super::implicite::resoudre_implicite;
use super::jetons::{format_tokens, tokenize};
use super::pratt::parse;
use super::trig::UniteAngle;

/// Trace lisible des étapes (jetons, jetons résolus, arbre parenthésé).
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Demarche {
    pub jetons: String,
    pub resolus: String,
    pub arbre: String,
}

/// Ce que reçoit l'afficheur.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sortie {
    /// Nombre formaté, ou "Math Error" / "Syntax Error".
    pub affichage: String,
    /// Valeur à mémoriser comme nouvel `Ans` (seulement en cas de succès).
    pub ans: Option<f64>,
}

impl Sortie {
    pub fn maj_ans(&self) -> bool {
        self.ans.is_some()
    }
}

/// Jetons -> arbre, sans rien évaluer.
pub fn analyser(expr_str: &str) -> Result<(Expr, Demarche), ErreurSyntaxe> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurSyntaxe::EntreeVide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;
    let jetons_txt = format_tokens(&jetons);
    trace!(jetons = %jetons_txt, "jetons");

    // 2) Produits implicites
    let resolus = resoudre_implicite(jetons);
    let resolus_txt = format_tokens(&resolus);
    trace!(resolus = %resolus_txt, "produits implicites");

    // 3) Arbre
    let arbre = parse(&resolus)?;

    let d = Demarche {
        jetons: jetons_txt,
        resolus: resolus_txt,
        arbre: arbre.to_string(),
    };
    Ok((arbre, d))
}

/// API publique : évalue une expression et retourne la valeur + la démarche.
pub fn eval_expression(
    expr_str: &str,
    ans: f64,
    unite: UniteAngle,
) -> Result<(f64, Demarche), ErreurNoyau> {
    let (arbre, d) = analyser(expr_str)?;
    let v = evaluer(&arbre, ans, unite)?;
    debug!(arbre = %d.arbre, valeur = v, unite = %unite, "évaluation");
    Ok((v, d))
}

/// API d'affichage : évalue puis formate ; les erreurs deviennent l'un des deux messages.
pub fn calculer(expr_str: &str, ans: f64, unite: UniteAngle, format: FormatNombre) -> Sortie {
    calculer_avec_demarche(expr_str, ans, unite, format).0
}

/// Comme `calculer`, en une seule analyse, avec la démarche quand l'expression s'analyse
/// (une erreur de calcul garde sa démarche, une erreur de syntaxe n'en a pas).
pub fn calculer_avec_demarche(
    expr_str: &str,
    ans: f64,
    unite: UniteAngle,
    format: FormatNombre,
) -> (Sortie, Option<Demarche>) {
    let (resultat, demarche) = match analyser(expr_str) {
        Ok((arbre, d)) => (evaluer(&arbre, ans, unite).map_err(ErreurNoyau::from), Some(d)),
        Err(e) => (Err(ErreurNoyau::from(e)), None),
    };

    let sortie = match resultat {
        Ok(v) => {
            debug!(valeur = v, unite = %unite, "évaluation");
            Sortie {
                affichage: format_nombre(v, format),
                ans: Some(v),
            }
        }
        Err(e) => {
            debug!(expression = expr_str, erreur = %e, "évaluation refusée");
            Sortie {
                affichage: e.message_utilisateur().to_string(),
                ans: None,
            }
        }
    };
    (sortie, demarche)
}
