// src/noyau/format.rs
//
// Affichage d'un f64 fini :
// - Normal       : 10 chiffres significatifs, décimal simple (jamais d'exposant)
// - Scientifique : mantisse à 5 décimales, exposant "e<n>" (120000 -> 1.2e5)
//
// Arrondi : demi-pair (banquier) sur la valeur EXACTE du double.
// Le double est décomposé en m·2^e puis traité en rationnel exact :
// aucune erreur d'arrondi intermédiaire, résultat déterministe.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Float, One, Zero};
use serde::{Deserialize, Serialize};

use super::erreur::MSG_ERREUR_MATH;

/// Chiffres significatifs en mode Normal.
pub const CHIFFRES_NORMAL: usize = 10;

/// Chiffres significatifs en mode Scientifique (1 + 5 décimales).
pub const CHIFFRES_SCI: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatNombre {
    #[default]
    #[serde(rename = "NORM")]
    Normal,
    #[serde(rename = "SCI")]
    Scientifique,
}

impl FormatNombre {
    pub fn bascule(self) -> FormatNombre {
        match self {
            FormatNombre::Normal => FormatNombre::Scientifique,
            FormatNombre::Scientifique => FormatNombre::Normal,
        }
    }

    pub fn etiquette(self) -> &'static str {
        match self {
            FormatNombre::Normal => "NORM",
            FormatNombre::Scientifique => "SCI",
        }
    }
}

impl fmt::Display for FormatNombre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.etiquette())
    }
}

/// Rend `v` selon `mode`. Totale : un non-fini donne "Math Error".
pub fn format_nombre(v: f64, mode: FormatNombre) -> String {
    if !v.is_finite() {
        return MSG_ERREUR_MATH.to_string();
    }

    // couvre aussi -0
    if v == 0.0 {
        return match mode {
            FormatNombre::Normal => "0".to_string(),
            FormatNombre::Scientifique => "0e0".to_string(),
        };
    }

    let signe = if v < 0.0 { "-" } else { "" };

    match mode {
        FormatNombre::Normal => {
            let (chiffres, exp) = chiffres_significatifs(v.abs(), CHIFFRES_NORMAL);
            format!("{signe}{}", rendu_decimal(&chiffres, exp))
        }
        FormatNombre::Scientifique => {
            let (chiffres, exp) = chiffres_significatifs(v.abs(), CHIFFRES_SCI);
            format!("{signe}{}", rendu_scientifique(&chiffres, exp))
        }
    }
}

/* ------------------------ Arrondi exact ------------------------ */

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

/// 10^k en rationnel (k signé).
fn puissance10(k: i32) -> BigRational {
    if k >= 0 {
        BigRational::from_integer(pow10(k.unsigned_abs()))
    } else {
        BigRational::new(BigInt::one(), pow10(k.unsigned_abs()))
    }
}

/// Valeur exacte d'un double fini positif : m·2^e.
fn rationnel_exact(x: f64) -> BigRational {
    let (mantisse, exposant, _signe) = Float::integer_decode(x);
    let m = BigInt::from(mantisse);
    let deux = BigInt::from(2);

    if exposant >= 0 {
        BigRational::from_integer(m * deux.pow(exposant.unsigned_abs().into()))
    } else {
        BigRational::new(m, deux.pow(exposant.unsigned_abs().into()))
    }
}

/// Entier le plus proche, demi-pair.
fn arrondi_demi_pair(q: &BigRational) -> BigInt {
    let bas = q.floor();
    let reste = q - &bas;
    let demi = BigRational::new(BigInt::one(), BigInt::from(2));

    let mut n = bas.to_integer();
    match reste.cmp(&demi) {
        Ordering::Greater => n += BigInt::one(),
        Ordering::Less => {}
        Ordering::Equal => {
            if !(&n % BigInt::from(2)).is_zero() {
                n += BigInt::one();
            }
        }
    }
    n
}

/// `x` > 0 fini -> (n chiffres significatifs, exposant décimal du premier chiffre).
///
/// Ex: (123.456, 4) -> ("1235", 2)
fn chiffres_significatifs(x: f64, n: usize) -> (String, i32) {
    let r = rationnel_exact(x);

    // estimation flottante, puis ajustement exact : 10^k <= r < 10^(k+1)
    let mut k = x.log10().floor() as i32;
    while r < puissance10(k) {
        k -= 1;
    }
    while r >= puissance10(k + 1) {
        k += 1;
    }

    let n = n as i32;
    let mut entier = arrondi_demi_pair(&(&r * puissance10(n - 1 - k)));

    // 9.99…95 -> 10.0… : un chiffre de trop
    if entier == pow10(n.unsigned_abs()) {
        entier = pow10(n.unsigned_abs() - 1);
        k += 1;
    }

    (entier.to_string(), k)
}

/* ------------------------ Rendu texte ------------------------ */

/// "1234", exp=1 -> "12.34" ; exp=-3 -> "0.001234" ; exp=5 -> "123400"
fn rendu_decimal(chiffres: &str, exp: i32) -> String {
    let c = chiffres.trim_end_matches('0');

    if exp >= 0 {
        let ent = exp.unsigned_abs() as usize + 1;
        if c.len() <= ent {
            format!("{c}{}", "0".repeat(ent - c.len()))
        } else {
            format!("{}.{}", &c[..ent], &c[ent..])
        }
    } else {
        let zeros = exp.unsigned_abs() as usize - 1;
        format!("0.{}{c}", "0".repeat(zeros))
    }
}

/// "120000", exp=5 -> "1.2e5" ; "100000", exp=-2 -> "1e-2"
fn rendu_scientifique(chiffres: &str, exp: i32) -> String {
    let c = chiffres.trim_end_matches('0');
    if c.len() <= 1 {
        format!("{c}e{exp}")
    } else {
        format!("{}.{}e{exp}", &c[..1], &c[1..])
    }
}
