// src/noyau/trig.rs
//
// Trig en flottant pour sin/cos/tan
// ---------------------------------
// - Unité d'angle fournie à chaque appel (jamais stockée)
// - Degrés / grades : réduction modulo un tour (fmod exact), puis
//   quarts de tour reconnus EXACTEMENT (sin(180°) = 0, cos(90°) = 0, tan(90°) indéfini)
// - Sinon conversion en radians : ×(π/180) ou ×(π/200), radians inchangés

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UniteAngle {
    #[default]
    #[serde(rename = "DEG")]
    Degre,
    #[serde(rename = "RAD")]
    Radian,
    #[serde(rename = "GRA")]
    Grade,
}

impl UniteAngle {
    /// Tour complet dans l'unité. En radians, pas de réduction exacte possible.
    fn tour(self) -> Option<f64> {
        match self {
            UniteAngle::Degre => Some(360.0),
            UniteAngle::Grade => Some(400.0),
            UniteAngle::Radian => None,
        }
    }

    pub fn vers_radians(self, x: f64) -> f64 {
        match self {
            UniteAngle::Degre => x * (PI / 180.0),
            UniteAngle::Grade => x * (PI / 200.0),
            UniteAngle::Radian => x,
        }
    }

    pub fn etiquette(self) -> &'static str {
        match self {
            UniteAngle::Degre => "DEG",
            UniteAngle::Radian => "RAD",
            UniteAngle::Grade => "GRA",
        }
    }
}

impl fmt::Display for UniteAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.etiquette())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

/// sin/cos/tan de `x` exprimé dans `unite`.
pub fn trig(f: TrigFn, x: f64, unite: UniteAngle) -> Result<f64, ErreurCalcul> {
    if !x.is_finite() {
        return Err(ErreurCalcul::Domaine("angle non fini"));
    }

    let Some(tour) = unite.tour() else {
        return applique(f, x);
    };

    let r = reduire(x, tour);
    if let Some(exact) = quart_de_tour(f, r, tour) {
        return exact;
    }

    applique(f, unite.vers_radians(r))
}

fn applique(f: TrigFn, rad: f64) -> Result<f64, ErreurCalcul> {
    let v = match f {
        TrigFn::Sin => rad.sin(),
        TrigFn::Cos => rad.cos(),
        TrigFn::Tan => rad.tan(),
    };
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalcul::Domaine("tangente indéfinie"))
    }
}

/// Ramène `x` dans [0, tour).
fn reduire(x: f64, tour: f64) -> f64 {
    let r = x % tour;
    if r < 0.0 {
        r + tour
    } else {
        r
    }
}

/// Valeur exacte si `r` est un multiple exact d'un quart de tour.
fn quart_de_tour(f: TrigFn, r: f64, tour: f64) -> Option<Result<f64, ErreurCalcul>> {
    let quart = tour / 4.0;
    if r % quart != 0.0 {
        return None;
    }

    // r peut valoir `tour` après r + tour (x négatif minuscule) : modulo 4
    let q = (r / quart) as u32 % 4;

    let v = match (f, q) {
        (TrigFn::Sin, 0) | (TrigFn::Sin, 2) => Ok(0.0),
        (TrigFn::Sin, 1) => Ok(1.0),
        (TrigFn::Sin, _) => Ok(-1.0),

        (TrigFn::Cos, 0) => Ok(1.0),
        (TrigFn::Cos, 2) => Ok(-1.0),
        (TrigFn::Cos, _) => Ok(0.0),

        (TrigFn::Tan, 0) | (TrigFn::Tan, 2) => Ok(0.0),
        (TrigFn::Tan, _) => Err(ErreurCalcul::Domaine("tangente indéfinie")),
    };

    Some(v)
}
