// src/noyau/calcul.rs
//
// Évaluation de l'arbre (descente en profondeur) -> f64
//
// Règles de classement des échecs :
// - division par zéro (et 0^négatif)            => DivisionParZero
// - √ d'un négatif, log/ln d'un non-positif,
//   factorielle d'un négatif ou non entier,
//   base négative ^ exposant non entier          => Domaine
// - opérandes finis, résultat infini (+ - * / ^) => Depassement
// - NaN ou ±∞ en sortie                          => NonFini
//
// Convention conservée : n! pour n > 170 vaut +∞ (pas d'erreur immédiate).
// Cet infini suit l'arithmétique IEEE : 1/171! = 0, mais 171! seul => NonFini.

use super::erreur::ErreurCalcul;
use super::expr::{Expr, Op};
use super::jetons::Fonction;
use super::trig::{trig, TrigFn, UniteAngle};

/// Au-delà, n! n'est plus représentable en f64.
pub const FACTORIELLE_MAX: f64 = 170.0;

/// Évalue l'arbre avec la réponse précédente `ans` et l'unité d'angle courante.
pub fn evaluer(e: &Expr, ans: f64, unite: UniteAngle) -> Result<f64, ErreurCalcul> {
    let v = valeur(e, ans, unite)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalcul::NonFini)
    }
}

fn valeur(e: &Expr, ans: f64, unite: UniteAngle) -> Result<f64, ErreurCalcul> {
    match e {
        // littéral hors de portée du f64 (ex: 1E400)
        Expr::Lit(v) if v.is_infinite() => Err(ErreurCalcul::Depassement),
        Expr::Lit(v) => Ok(*v),
        Expr::Ans => Ok(ans),

        Expr::Neg(x) => Ok(-valeur(x, ans, unite)?),
        Expr::Groupe(x) => valeur(x, ans, unite),

        Expr::Bin(op, a, b) => {
            let a = valeur(a, ans, unite)?;
            let b = valeur(b, ans, unite)?;
            binaire(*op, a, b)
        }

        Expr::Appel(f, x) => {
            let x = valeur(x, ans, unite)?;
            fonction(*f, x, unite)
        }

        Expr::Fact(x) => factorielle(valeur(x, ans, unite)?),
    }
}

fn binaire(op: Op, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    let r = match op {
        Op::Add => a + b,
        Op::Sub => a - b,
        Op::Mul => a * b,
        Op::Div => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
        Op::Pow => puissance(a, b)?,
    };

    if r.is_infinite() && a.is_finite() && b.is_finite() {
        return Err(ErreurCalcul::Depassement);
    }
    Ok(r)
}

/// a^b via powf ; 0^0 = 1 (convention de la bibliothèque numérique).
fn puissance(a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    if a == 0.0 && b < 0.0 {
        return Err(ErreurCalcul::DivisionParZero);
    }
    let r = a.powf(b);
    if r.is_nan() && !a.is_nan() && !b.is_nan() {
        return Err(ErreurCalcul::Domaine("base négative, exposant non entier"));
    }
    Ok(r)
}

fn fonction(f: Fonction, x: f64, unite: UniteAngle) -> Result<f64, ErreurCalcul> {
    match f {
        // conversion d'angle : SEULEMENT sur l'argument direct de sin/cos/tan
        Fonction::Sin => trig(TrigFn::Sin, x, unite),
        Fonction::Cos => trig(TrigFn::Cos, x, unite),
        Fonction::Tan => trig(TrigFn::Tan, x, unite),

        Fonction::Log => {
            if x <= 0.0 {
                return Err(ErreurCalcul::Domaine("logarithme d'un non-positif"));
            }
            Ok(x.log10())
        }
        Fonction::Ln => {
            if x <= 0.0 {
                return Err(ErreurCalcul::Domaine("logarithme d'un non-positif"));
            }
            Ok(x.ln())
        }
        Fonction::Sqrt => {
            if x < 0.0 {
                return Err(ErreurCalcul::Domaine("racine d'un négatif"));
            }
            Ok(x.sqrt())
        }
        Fonction::Abs => Ok(x.abs()),
    }
}

fn factorielle(x: f64) -> Result<f64, ErreurCalcul> {
    if x == f64::INFINITY || (x.fract() == 0.0 && x > FACTORIELLE_MAX) {
        return Ok(f64::INFINITY);
    }
    if x.is_nan() || x < 0.0 || x.fract() != 0.0 {
        return Err(ErreurCalcul::Domaine("factorielle d'un négatif ou non entier"));
    }

    // même ordre de produits que le calcul d'origine : 1·2·3·…·n
    let n = x as u32;
    let mut r = 1.0_f64;
    for i in 2..=n {
        r *= f64::from(i);
    }
    Ok(r)
}
