//! Tests scientifiques (campagne) : propriétés observables du noyau.
//!
//! Chaque test passe par l'API d'affichage (`calculer`) : c'est ce que voit l'utilisateur.
//! Conventions épinglées ici volontairement :
//! - 0^0 = 1
//! - n! pour n > 170 vaut +∞ (donc "Math Error" seul, mais 1/171! = 0)
//! - arrondi demi-pair au 10e chiffre significatif

use super::{calculer, format_nombre, FormatNombre, UniteAngle};

fn aff(expr: &str, ans: f64, unite: UniteAngle, format: FormatNombre) -> String {
    calculer(expr, ans, unite, format).affichage
}

fn deg(expr: &str) -> String {
    aff(expr, 0.0, UniteAngle::Degre, FormatNombre::Normal)
}

const UNITES: [UniteAngle; 3] = [UniteAngle::Degre, UniteAngle::Radian, UniteAngle::Grade];

/* ------------------------ Produits implicites ------------------------ */

#[test]
fn sci_produit_implicite() {
    assert_eq!(deg("2(3+4)"), "14");
    for u in UNITES {
        assert_eq!(aff("2sin(0)", 0.0, u, FormatNombre::Normal), "0", "unité={u}");
    }
    assert_eq!(deg("(1+1)(2+2)"), "8");
    assert_eq!(deg("2√(9)"), "6");
}

/* ------------------------ Unités d'angle ------------------------ */

#[test]
fn sci_unites_d_angle() {
    assert_eq!(aff("sin(90)", 0.0, UniteAngle::Degre, FormatNombre::Normal), "1");
    assert_eq!(aff("sin(π/2)", 0.0, UniteAngle::Radian, FormatNombre::Normal), "1");
    assert_eq!(aff("sin(100)", 0.0, UniteAngle::Grade, FormatNombre::Normal), "1");
    assert_eq!(aff("cos(60)", 0.0, UniteAngle::Degre, FormatNombre::Normal), "0.5");
    assert_eq!(aff("tan(45)", 0.0, UniteAngle::Degre, FormatNombre::Normal), "1");
    assert_eq!(aff("sin(180)", 0.0, UniteAngle::Degre, FormatNombre::Normal), "0");
    assert_eq!(aff("tan(90)", 0.0, UniteAngle::Degre, FormatNombre::Normal), "Math Error");
}

/* ------------------------ Précédence / associativité ------------------------ */

#[test]
fn sci_precedence() {
    assert_eq!(deg("2+3×4"), "14");
    assert_eq!(deg("2^3^2"), "512");
    assert_eq!(deg("(2+3)^2"), "25");
    assert_eq!(deg("10-4-3"), "3");
    assert_eq!(deg("-3^2"), "-9");
    assert_eq!(deg("2^3!"), "64");
}

#[test]
fn sci_zero_puissance_zero() {
    assert_eq!(deg("0^0"), "1");
}

/* ------------------------ Factorielle ------------------------ */

#[test]
fn sci_factorielle() {
    assert_eq!(deg("5!"), "120");
    assert_eq!(deg("171!"), "Math Error");
    assert_eq!(deg("(-1)!"), "Math Error");
    assert_eq!(deg("1/171!"), "0");
    assert_eq!(deg("0.5!"), "Math Error");
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_erreurs_mathematiques() {
    for e in ["1/0", "sqrt(-1)", "log(0)", "ln(-2)", "10^400", "(-8)^(1/3)"] {
        assert_eq!(deg(e), "Math Error", "expr={e:?}");
    }
}

#[test]
fn sci_erreurs_de_syntaxe() {
    for e in ["2+", "((2+3)", "2@3", "2+*3", "sin()", ")", "2E", "x", "", "   "] {
        assert_eq!(deg(e), "Syntax Error", "expr={e:?}");
    }
}

/* ------------------------ Ans ------------------------ */

#[test]
fn sci_ans() {
    assert_eq!(aff("Ans+1", 7.0, UniteAngle::Degre, FormatNombre::Normal), "8");
    assert_eq!(aff("Ans×Ans", 7.0, UniteAngle::Degre, FormatNombre::Normal), "49");
    assert_eq!(aff("Ans", 0.0, UniteAngle::Degre, FormatNombre::Normal), "0");
}

/* ------------------------ Formatage ------------------------ */

#[test]
fn sci_format_scientifique() {
    assert_eq!(format_nombre(120000.0, FormatNombre::Scientifique), "1.2e5");
    assert_eq!(format_nombre(0.0001234567, FormatNombre::Scientifique), "1.23457e-4");
    assert_eq!(
        aff("2^20", 0.0, UniteAngle::Degre, FormatNombre::Scientifique),
        "1.04858e6"
    );
}

#[test]
fn sci_format_demi_pair_epingle() {
    assert_eq!(deg("12345678905"), "12345678900");
    assert_eq!(deg("12345678915"), "12345678920");
}

/* ------------------------ Aller-retour ------------------------ */

#[test]
fn sci_aller_retour_normal() {
    let valeurs = [
        0.0,
        1.0,
        -1.0,
        14.0,
        0.5,
        -2.75,
        1.0 / 3.0,
        std::f64::consts::PI,
        123456.789,
        1e-7,
        -9.87654321e-5,
        6.02214076e23,
        1e100,
    ];

    for v in valeurs {
        let texte = format_nombre(v, FormatNombre::Normal);
        assert_eq!(deg(&texte), texte, "v={v}");
    }
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn sci_determinisme() {
    for e in ["sin(30)+cos(60)", "2π÷3", "√(2)^2", "1/0", "2@3", "Ans!"] {
        let a = aff(e, 4.0, UniteAngle::Grade, FormatNombre::Scientifique);
        let b = aff(e, 4.0, UniteAngle::Grade, FormatNombre::Scientifique);
        assert_eq!(a.as_bytes(), b.as_bytes(), "expr={e:?}");
    }
}
