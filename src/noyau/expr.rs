// src/noyau/expr.rs
//
// AST flottant (f64).
// - Lit  : littéral (nombre tapé, ou π déjà remplacé par sa valeur)
// - Ans  : réponse précédente (valeur fournie par l'appelant à l'évaluation)
// - Neg  : moins unaire
// - Bin  : opération binaire + - * / ^
// - Appel: fonction de la liste blanche appliquée à UN argument
// - Fact : factorielle postfixe
// - Groupe : parenthèses explicites (gardées pour la démarche)
//
// IMPORTANT (SAFE):
// - aucun noeud ne porte de texte : tout ce qui est dans l'arbre est énumérable.
// - chaque noeud possède ses enfants (Box) : pas de partage, pas de cycle.

use std::fmt;

use super::jetons::Fonction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Op {
    pub fn symbole(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Pow => "^",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Lit(f64),
    Ans,

    Neg(Box<Expr>),
    Bin(Op, Box<Expr>, Box<Expr>),

    Appel(Fonction, Box<Expr>),
    Fact(Box<Expr>),

    Groupe(Box<Expr>),
}

impl Expr {
    pub fn bin(op: Op, a: Expr, b: Expr) -> Expr {
        Expr::Bin(op, Box::new(a), Box::new(b))
    }
}

/// Rendu complètement parenthésé (démarche) : la structure se lit sans ambiguïté.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Lit(v) => write!(f, "{v}"),
            Expr::Ans => f.write_str("Ans"),
            Expr::Neg(x) => write!(f, "(-{x})"),
            Expr::Bin(op, a, b) => write!(f, "({a} {} {b})", op.symbole()),
            Expr::Appel(fonction, x) => write!(f, "{fonction}[{x}]"),
            Expr::Fact(x) => write!(f, "({x}!)"),
            Expr::Groupe(x) => write!(f, "{x}"),
        }
    }
}
