// src/noyau/pratt.rs
//
// Parse par précédence (Pratt) -> Expr
//
// Puissances de liaison, de la plus faible à la plus forte :
//   + -   binaire, gauche         (1, 2)
//   * /   binaire, gauche         (3, 4)
//   -     unaire préfixe           5     (+ unaire accepté, sans effet)
//   ^     binaire, DROITE         (7, 6)
//   !     postfixe                 9
//   f(x) et (x) : atomes
//
// Conséquences : -2^2 = -(2^2), 2^3^2 = 2^(3^2), 2^3! = 2^(3!), -3! = -(3!).
//
// Une passe, un jeton d'avance, pas de retour arrière : après la résolution
// des produits implicites la grammaire est LL(1).

use std::f64::consts::PI;

use super::erreur::ErreurSyntaxe;
use super::expr::{Expr, Op};
use super::jetons::Tok;

/// Garde-fou : profondeur de récursion du parse (parenthèses, préfixes, ^ en chaîne).
pub const PROFONDEUR_MAX: usize = 200;

/// Garde-fou : longueur maximale (l'évaluation et l'affichage sont récursifs).
pub const JETONS_MAX: usize = 1024;

const BP_PREFIXE: u8 = 5;
const BP_POSTFIXE: u8 = 9;

fn infixe(t: &Tok) -> Option<(Op, u8, u8)> {
    match t {
        Tok::Plus => Some((Op::Add, 1, 2)),
        Tok::Minus => Some((Op::Sub, 1, 2)),
        Tok::Star => Some((Op::Mul, 3, 4)),
        Tok::Slash => Some((Op::Div, 3, 4)),
        Tok::Caret => Some((Op::Pow, 7, 6)),
        _ => None,
    }
}

/// Construit l'arbre à partir d'une suite de jetons (produits implicites déjà résolus).
pub fn parse(tokens: &[Tok]) -> Result<Expr, ErreurSyntaxe> {
    if tokens.is_empty() {
        return Err(ErreurSyntaxe::EntreeVide);
    }
    if tokens.len() > JETONS_MAX {
        return Err(ErreurSyntaxe::TropLongue(tokens.len()));
    }

    let mut p = Parseur {
        tokens,
        pos: 0,
        profondeur: 0,
    };
    let e = p.expr_bp(0)?;

    match p.peek() {
        None => Ok(e),
        Some(Tok::RPar) => Err(ErreurSyntaxe::ParentheseInattendue { pos: p.pos }),
        Some(_) => Err(ErreurSyntaxe::JetonInattendu { pos: p.pos }),
    }
}

struct Parseur<'a> {
    tokens: &'a [Tok],
    pos: usize,
    profondeur: usize,
}

impl Parseur<'_> {
    fn peek(&self) -> Option<&Tok> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Tok> {
        let t = self.tokens.get(self.pos).cloned();
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn expr_bp(&mut self, min_bp: u8) -> Result<Expr, ErreurSyntaxe> {
        self.profondeur += 1;
        if self.profondeur > PROFONDEUR_MAX {
            return Err(ErreurSyntaxe::TropImbrique);
        }
        let r = self.expr_bp_interne(min_bp);
        self.profondeur -= 1;
        r
    }

    fn expr_bp_interne(&mut self, min_bp: u8) -> Result<Expr, ErreurSyntaxe> {
        let mut lhs = self.atome()?;

        loop {
            let Some(tok) = self.peek() else {
                break;
            };

            if matches!(tok, Tok::Bang) {
                if BP_POSTFIXE < min_bp {
                    break;
                }
                self.pos += 1;
                lhs = Expr::Fact(Box::new(lhs));
                continue;
            }

            let Some((op, l_bp, r_bp)) = infixe(tok) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            self.pos += 1;

            let rhs = self.expr_bp(r_bp)?;
            lhs = Expr::bin(op, lhs, rhs);
        }

        Ok(lhs)
    }

    /// Atome : nombre, constante, Ans, préfixe, (x), f(x).
    fn atome(&mut self) -> Result<Expr, ErreurSyntaxe> {
        let pos = self.pos;
        let Some(tok) = self.next() else {
            return Err(ErreurSyntaxe::OperandeManquant { pos });
        };

        match tok {
            Tok::Num(v) => Ok(Expr::Lit(v)),
            Tok::Pi => Ok(Expr::Lit(PI)),
            Tok::Ans => Ok(Expr::Ans),

            Tok::Minus => {
                let x = self.expr_bp(BP_PREFIXE)?;
                Ok(Expr::Neg(Box::new(x)))
            }
            Tok::Plus => self.expr_bp(BP_PREFIXE),

            Tok::LPar => {
                if matches!(self.peek(), Some(Tok::RPar)) {
                    return Err(ErreurSyntaxe::ParenthesesVides);
                }
                let x = self.expr_bp(0)?;
                self.attendre_fermante()?;
                Ok(Expr::Groupe(Box::new(x)))
            }

            Tok::Ident(f) => {
                if !matches!(self.next(), Some(Tok::LPar)) {
                    return Err(ErreurSyntaxe::AppelSansParenthese(f));
                }
                if matches!(self.peek(), Some(Tok::RPar)) {
                    return Err(ErreurSyntaxe::CorpsVide(f));
                }
                let x = self.expr_bp(0)?;
                self.attendre_fermante()?;
                Ok(Expr::Appel(f, Box::new(x)))
            }

            Tok::Star | Tok::Slash | Tok::Caret | Tok::Bang | Tok::RPar => {
                Err(ErreurSyntaxe::OperandeManquant { pos })
            }
        }
    }

    fn attendre_fermante(&mut self) -> Result<(), ErreurSyntaxe> {
        let pos = self.pos;
        match self.next() {
            Some(Tok::RPar) => Ok(()),
            None => Err(ErreurSyntaxe::ParentheseNonFermee),
            Some(_) => Err(ErreurSyntaxe::JetonInattendu { pos }),
        }
    }
}
