//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - référence : chaque expression générée est évaluée pendant sa génération,
//!   totalement parenthésée, donc avec exactement les mêmes opérations flottantes
//! - entrées bruitées : seules les erreurs typées sont acceptées (jamais de panique)

use std::time::{Duration, Instant};

use super::erreur::Categorie;
use super::Parser;

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

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Nombre positif simple, avec ou sans décimales ('.' ou ',').
fn gen_nombre(rng: &mut Rng) -> (String, f64) {
    let entier = rng.pick(20);
    if rng.coin() {
        return (format!("{entier}"), entier as f64);
    }

    let frac = rng.pick(100);
    let sep = if rng.coin() { '.' } else { ',' };
    let texte = format!("{entier}{sep}{frac:02}");
    let valeur: f64 = format!("{entier}.{frac:02}")
        .parse()
        .unwrap_or_else(|e| panic!("nombre généré invalide: {e}"));
    (texte, valeur)
}

/// Expression totalement parenthésée + sa valeur de référence.
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 || rng.pick(4) == 0 {
        return gen_nombre(rng);
    }

    let (a, va) = gen_expr(rng, depth - 1);
    let (b, vb) = gen_expr(rng, depth - 1);

    let (sym, v) = match rng.pick(5) {
        0 => ('+', va + vb),
        1 => ('-', va - vb),
        2 => ('*', va * vb),
        3 => ('/', va / vb),
        _ => ('^', va.powf(vb)),
    };

    let espace = if rng.coin() { " " } else { "" };
    (format!("({a}{espace}{sym}{espace}{b})"), v)
}

fn meme_valeur(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_reference_parenthesee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(800);

    let mut rng = Rng::new(0x5eed_1234);
    let mut p = Parser::default();

    for _ in 0..400 {
        let (expr, attendu) = gen_expr(&mut rng, 5);

        p.parse(&expr)
            .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        let v = p.solve();

        assert!(
            meme_valeur(v, attendu),
            "expr={expr:?} obtenu={v} attendu={attendu}"
        );
        budget(t0, max);
    }
}

#[test]
fn fuzz_determinisme_rpn() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(42);

    for _ in 0..200 {
        let (expr, _) = gen_expr(&mut rng, 4);

        let r1 = Parser::default().parse(&expr);
        let r2 = Parser::default().parse(&expr);
        assert_eq!(r1, r2, "expr={expr:?}");

        // la RPN ne contient jamais de parenthèse
        let rpn = r1.unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert!(!rpn.contains('(') && !rpn.contains(')'), "rpn={rpn:?}");

        budget(t0, max);
    }
}

#[test]
fn fuzz_chaine_sans_parentheses_associe_a_gauche() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(7);

    for _ in 0..200 {
        // même priorité partout : a - b + c - d ... évalué de gauche à droite
        let n = 2 + rng.pick(8) as usize;
        let (premier, mut attendu) = gen_nombre(&mut rng);
        let mut expr = premier;

        for _ in 1..n {
            let (t, v) = gen_nombre(&mut rng);
            if rng.coin() {
                expr.push_str(" + ");
                attendu += v;
            } else {
                expr.push_str(" - ");
                attendu -= v;
            }
            expr.push_str(&t);
        }

        let mut p = Parser::default();
        p.parse(&expr)
            .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert!(
            meme_valeur(p.solve(), attendu),
            "expr={expr:?} obtenu={} attendu={attendu}",
            p.solve()
        );

        budget(t0, max);
    }
}

#[test]
fn fuzz_entrees_bruitees_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // alphabet volontairement hostile
    const ALPHABET: &[char] = &[
        '0', '1', '7', '.', ',', ' ', '+', '-', '*', '/', '^', '(', ')', 'x', '%', 'é',
    ];

    let mut rng = Rng::new(0xdead_beef);
    let mut p = Parser::default();

    for _ in 0..2_000 {
        let len = rng.pick(24) as usize;
        let s: String = (0..len)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        match p.parse(&s) {
            Ok(_) => {
                // un arbre existe : solve() est total
                let _ = p.solve();
                assert!(p.print_ast().is_some(), "s={s:?}");
            }
            Err(e) => {
                assert_ne!(e.categorie(), Categorie::Config, "s={s:?} err={e}");
                assert_eq!(p.solve(), 0.0, "s={s:?}");
            }
        }

        budget(t0, max);
    }
}
