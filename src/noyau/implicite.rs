// src/noyau/implicite.rs
//
// Multiplication implicite : insère un `*` entre deux jetons adjacents
// que la notation calculatrice lit comme un produit.
//
//   2(3)    -> 2*(3)
//   2sin(   -> 2*sin(
//   )(      -> )*(
//   2π, πAns, 5!2, )2 ...
//
// Réécriture pure, jamais en échec. Le parse n'a donc aucun cas d'adjacence.
// NOTE: `Num Num` (ex: "2 3") n'est PAS réécrit : le parse le refusera.

use super::jetons::Tok;

/// Jeton qui termine une valeur (peut être suivi d'un produit implicite).
fn ferme_une_valeur(t: &Tok) -> bool {
    matches!(t, Tok::Num(_) | Tok::RPar | Tok::Bang | Tok::Pi | Tok::Ans)
}

/// Jeton qui commence une valeur sans opérateur devant.
fn ouvre_une_valeur(t: &Tok) -> bool {
    matches!(t, Tok::LPar | Tok::Ident(_) | Tok::Pi | Tok::Ans)
}

fn produit_implicite(a: &Tok, b: &Tok) -> bool {
    if !ferme_une_valeur(a) {
        return false;
    }
    match b {
        Tok::Num(_) => !matches!(a, Tok::Num(_)),
        _ => ouvre_une_valeur(b),
    }
}

/// Renvoie la suite de jetons avec les `*` implicites rendus explicites.
pub fn resoudre_implicite(tokens: Vec<Tok>) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len() * 2);

    for tok in tokens {
        if let Some(prec) = out.last() {
            if produit_implicite(prec, &tok) {
                out.push(Tok::Star);
            }
        }
        out.push(tok);
    }

    out
}
