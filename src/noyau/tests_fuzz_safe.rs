//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : la sortie est TOUJOURS un nombre relisible,
//!   ou exactement "Math Error" / "Syntax Error" (jamais de panique)

use std::time::{Duration, Instant};

use super::{calculer, FormatNombre, UniteAngle, MSG_ERREUR_MATH, MSG_ERREUR_SYNTAXE};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

const UNITES: [UniteAngle; 3] = [UniteAngle::Degre, UniteAngle::Radian, UniteAngle::Grade];
const FORMATS: [FormatNombre; 2] = [FormatNombre::Normal, FormatNombre::Scientifique];

/// Invariant de sortie : nombre relisible par le noyau, ou l'un des deux messages.
fn check_sortie(expr: &str, affichage: &str, ans: Option<f64>) {
    if affichage == MSG_ERREUR_MATH || affichage == MSG_ERREUR_SYNTAXE {
        assert!(ans.is_none(), "erreur => Ans inchangé: expr={expr:?}");
        return;
    }

    let v = ans.unwrap_or_else(|| panic!("succès sans valeur: expr={expr:?}"));
    assert!(v.is_finite(), "valeur non finie acceptée: expr={expr:?}");

    // le texte affiché se relit (ex: "1.2e5" -> 1.2E5)
    let relu = affichage.replace('e', "E");
    let s = calculer(&relu, 0.0, UniteAngle::Radian, FormatNombre::Normal);
    assert!(
        s.ans.is_some(),
        "affichage non relisible: expr={expr:?} affichage={affichage:?}"
    );
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(7) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}.{}", rng.pick(100), rng.pick(100)),
        3 => format!("{}E{}", 1 + rng.pick(9), rng.pick(12)),
        4 => format!("{}E-{}", 1 + rng.pick(9), rng.pick(12)),
        5 => "180".to_string(),
        _ => format!("{}", 1 + rng.pick(200)),
    }
}

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(5) {
        0 | 1 => gen_nombre(rng),
        2 => "π".to_string(),
        3 => "Ans".to_string(),
        _ => format!("({})", gen_nombre(rng)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atome(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(14) {
        0 => gen_atome(rng),
        1 => format!("{a}+{}", gen_expr(rng, depth - 1)),
        2 => format!("{a}-{}", gen_expr(rng, depth - 1)),
        3 => format!("{a}×{}", gen_expr(rng, depth - 1)),
        4 => format!("{a}÷{}", gen_expr(rng, depth - 1)),
        5 => format!("({a})^{}", gen_atome(rng)),
        6 => format!("({a})!"),
        7 => format!("-{a}"),
        8 => format!("{}({a})", gen_nombre(rng)), // produit implicite
        9 => format!("sin({a})"),
        10 => format!("cos({a})"),
        11 => format!("tan({a})"),
        12 => {
            if rng.coin() {
                format!("√({a})")
            } else {
                format!("Abs({a})")
            }
        }
        _ => {
            if rng.coin() {
                format!("log({a})")
            } else {
                format!("ln({a})")
            }
        }
    }
}

/// Soupe de caractères : glyphes valides ET invalides, sans structure.
fn gen_soupe(rng: &mut Rng) -> String {
    const ALPHABET: &[&str] = &[
        "1", "2", "9", "0", ".", "E", "+", "-", "×", "÷", "*", "/", "^", "!", "(", ")", "π", "√",
        "sin", "cos", "tan", "log", "ln", "Abs", "Ans", " ", "@", "x", "%", "e",
    ];
    let n = 1 + rng.pick(16);
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_structurees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for k in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let unite = UNITES[k % UNITES.len()];
        let format = FORMATS[k % FORMATS.len()];
        let ans = f64::from(rng.pick(50)) - 25.0;

        let s = calculer(&expr, ans, unite, format);
        check_sortie(&expr, &s.affichage, s.ans);

        if s.ans.is_some() {
            seen_ok += 1;
        } else {
            seen_err += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_soupe_de_caracteres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_soupe(&mut rng);
        let s = calculer(&expr, 3.0, UniteAngle::Degre, FormatNombre::Normal);
        check_sortie(&expr, &s.affichage, s.ans);
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);

    for _ in 0..60 {
        let ea = gen_expr(&mut a, 3);
        let eb = gen_expr(&mut b, 3);
        assert_eq!(ea, eb);

        let sa = calculer(&ea, 1.5, UniteAngle::Grade, FormatNombre::Scientifique);
        let sb = calculer(&eb, 1.5, UniteAngle::Grade, FormatNombre::Scientifique);
        assert_eq!(sa, sb, "expr={ea:?}");
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let expr = somme_balancee("1÷2", 100);

    // 100*(1/2) = 50
    let s = calculer(&expr, 0.0, UniteAngle::Degre, FormatNombre::Normal);
    assert_eq!(s.affichage, "50");
}

#[test]
fn fuzz_safe_entrees_geantes_refusees_proprement() {
    let profond = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));
    let s = calculer(&profond, 0.0, UniteAngle::Degre, FormatNombre::Normal);
    assert_eq!(s.affichage, MSG_ERREUR_SYNTAXE);

    let moins = format!("{}1", "-".repeat(5000));
    let s = calculer(&moins, 0.0, UniteAngle::Degre, FormatNombre::Normal);
    assert_eq!(s.affichage, MSG_ERREUR_SYNTAXE);

    let puissances = vec!["2"; 300].join("^");
    let s = calculer(&puissances, 0.0, UniteAngle::Degre, FormatNombre::Normal);
    assert_eq!(s.affichage, MSG_ERREUR_SYNTAXE);
}
