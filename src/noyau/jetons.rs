// src/noyau/jetons.rs

use std::fmt;

use super::erreur::ErreurSyntaxe;

/// Fonctions unaires reconnues (liste blanche fermée).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Abs,
}

impl Fonction {
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Sqrt => "sqrt",
            Fonction::Abs => "Abs",
        }
    }
}

impl fmt::Display for Fonction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Pi,
    Ans,

    Ident(Fonction),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    Bang, // ! (factorielle, postfixe)

    LPar,
    RPar,
}

/// Mots reconnus tels quels (sensibles à la casse, comme sur le clavier).
const MOTS: &[(&str, Tok)] = &[
    ("sqrt", Tok::Ident(Fonction::Sqrt)),
    ("sin", Tok::Ident(Fonction::Sin)),
    ("cos", Tok::Ident(Fonction::Cos)),
    ("tan", Tok::Ident(Fonction::Tan)),
    ("log", Tok::Ident(Fonction::Log)),
    ("ln", Tok::Ident(Fonction::Ln)),
    ("Abs", Tok::Ident(Fonction::Abs)),
    ("Ans", Tok::Ans),
];

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5) avec exposant optionnel `E` (ex: 2E3, 1.5E-4)
/// - opérateurs + - * / ^ et leurs glyphes × ÷
/// - factorielle postfixe !
/// - parenthèses ( )
/// - π
/// - √ (équivaut à Ident(Sqrt)), sqrt, sin, cos, tan, log, ln, Abs
/// - Ans (réponse précédente)
///
/// Tout autre caractère est refusé : la liste blanche EST la grammaire.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurSyntaxe> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Symboles d'un seul caractère
        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' | '×' => Some(Tok::Star),
            '/' | '÷' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            '!' => Some(Tok::Bang),
            'π' => Some(Tok::Pi),
            '√' => Some(Tok::Ident(Fonction::Sqrt)),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre : chiffres [. chiffres] [E [+|-] chiffres]
        let debut_fraction = c == '.' && chars.get(i + 1).is_some_and(|d| d.is_ascii_digit());
        if c.is_ascii_digit() || debut_fraction {
            let (valeur, fin) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(valeur));
            i = fin;
            continue;
        }

        // Mots de la liste blanche
        if let Some((mot, tok)) = MOTS.iter().find(|(mot, _)| commence_par(&chars, i, mot)) {
            out.push(tok.clone());
            i += mot.chars().count();
            continue;
        }

        return Err(ErreurSyntaxe::CaractereInattendu { car: c, pos: i });
    }

    Ok(out)
}

/// Lit un nombre à partir de `debut`; renvoie (valeur, index de fin).
fn lire_nombre(chars: &[char], debut: usize) -> Result<(f64, usize), ErreurSyntaxe> {
    let mut i = debut;
    let chiffres = |i: &mut usize| {
        while *i < chars.len() && chars[*i].is_ascii_digit() {
            *i += 1;
        }
    };

    chiffres(&mut i);

    // un seul point décimal
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        chiffres(&mut i);
    }

    // exposant : E obligatoirement suivi de chiffres
    if i < chars.len() && chars[i] == 'E' {
        i += 1;
        if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
            i += 1;
        }
        let debut_exp = i;
        chiffres(&mut i);
        if i == debut_exp {
            let texte: String = chars[debut..i].iter().collect();
            return Err(ErreurSyntaxe::NombreInvalide(texte));
        }
    }

    let texte: String = chars[debut..i].iter().collect();
    let valeur = texte
        .parse::<f64>()
        .map_err(|_| ErreurSyntaxe::NombreInvalide(texte.clone()))?;

    Ok((valeur, i))
}

fn commence_par(chars: &[char], i: usize, mot: &str) -> bool {
    let mut j = i;
    for m in mot.chars() {
        if chars.get(j) != Some(&m) {
            return false;
        }
        j += 1;
    }
    true
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Pi => "π".to_string(),
            Tok::Ans => "Ans".to_string(),
            Tok::Ident(f) => f.nom().to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Bang => "!".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
