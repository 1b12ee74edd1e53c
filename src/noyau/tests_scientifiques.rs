//! Tests scientifiques (campagne) : propriétés observables du Parser.
//!
//! - valeurs attendues sur les 4 opérations + parenthèses
//! - réécriture des unaires
//! - priorités et associativité (gauche partout, '^' compris)
//! - parenthèses non appariées (les deux sens)
//! - IEEE-754 : ∞ / NaN au lieu d’erreurs
//! - RPN “golden” stable
//! - stress borné (budget temps)

use std::time::{Duration, Instant};

use super::erreur::{Categorie, ParseError};
use super::{Parser, TablePriorites};

const EPS: f64 = 1e-12;

fn solve_ok(expr: &str) -> f64 {
    let mut p = Parser::default();
    p.parse(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    p.solve()
}

fn rpn_ok(expr: &str) -> String {
    Parser::default()
        .parse(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = solve_ok(expr);
    assert!(
        (v - attendu).abs() <= EPS * attendu.abs().max(1.0),
        "expr={expr:?} obtenu={v} attendu={attendu}"
    );
}

fn assert_syntaxe(expr: &str) {
    let e = Parser::default()
        .parse(expr)
        .expect_err(&format!("erreur attendue pour {expr:?}"));
    assert_eq!(e.categorie(), Categorie::Syntaxe, "expr={expr:?} err={e}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Valeurs attendues ------------------------ */

#[test]
fn sci_quatre_operations() {
    assert_proche("2 + 3 * 4", 14.0);
    assert_proche("(2 + 3) * 4", 20.0);
    assert_proche("10 / 4 - 1", 1.5);
    assert_proche("((1 + 2) * (3 + 4)) / 7", 3.0);
    assert_proche("0.1 + 0.2", 0.1 + 0.2);
    assert_proche("2,5 * 2", 5.0);
}

#[test]
fn sci_nombre_seul() {
    assert_proche("42", 42.0);
    assert_proche("(((7)))", 7.0);
    assert_eq!(rpn_ok("42"), "42");
}

/* ------------------------ Unaires ------------------------ */

#[test]
fn sci_unaires_reecrits() {
    assert_eq!(rpn_ok("-3 + 4"), rpn_ok("0 - 3 + 4"));
    assert_eq!(rpn_ok("-(-3)"), rpn_ok("0-(0-3)"));
    assert_proche("-(-3)", 3.0);
    // "--3" devient "0-0-3" = (0-0)-3
    assert_proche("--3", -3.0);
    assert_proche("+5", 5.0);
}

#[test]
fn sci_unaire_apres_operateur_textuel() {
    // "2 * -3" devient "2 * 0-3" = (2*0) - 3
    assert_eq!(rpn_ok("2 * -3"), "2 0 * 3 -");
    assert_proche("2 * -3", -3.0);
}

/* ------------------------ Priorités / associativité ------------------------ */

#[test]
fn sci_priorite_puissance() {
    assert_proche("2 + 3 ^ 2", 11.0);
    assert_proche("2 * 3 ^ 2", 18.0);
}

#[test]
fn sci_puissance_associative_a_gauche() {
    // (2^3)^2 = 64, et non 2^(3^2) = 512
    assert_proche("2 ^ 3 ^ 2", 64.0);
    assert_proche("2 ^ (3 ^ 2)", 512.0);
}

#[test]
fn sci_soustraction_division_a_gauche() {
    assert_proche("8 - 3 - 2", 3.0);
    assert_proche("16 / 4 / 2", 2.0);
}

#[test]
fn sci_table_personnalisee() {
    // '+' lie plus fort que '*'
    let table = TablePriorites::from_pairs([("+", 3), ("-", 3), ("*", 1), ("/", 1), ("^", 2)])
        .unwrap_or_else(|e| panic!("table: {e}"));
    let mut p = Parser::new(table);
    p.parse("2 + 3 * 4").unwrap();
    assert_eq!(p.solve(), 20.0);
}

/* ------------------------ Parenthèses ------------------------ */

#[test]
fn sci_parentheses_non_appariees() {
    assert_syntaxe("(2 + 3");
    assert_syntaxe("2 + 3)");
    assert_syntaxe("((1)");
    assert_syntaxe(")(");
}

#[test]
fn sci_autres_erreurs_syntaxe() {
    assert_syntaxe("2 +");
    assert_syntaxe("2 3");
    assert_syntaxe("()");
    assert_eq!(
        Parser::default().parse("2 3 4"),
        Err(ParseError::ExpressionMalFormee(3))
    );
}

#[test]
fn sci_erreurs_lexicales() {
    for expr in ["2 + x", "3 % 2", "1.2.3 + 1", "12abc"] {
        let e = Parser::default()
            .parse(expr)
            .expect_err(&format!("erreur attendue pour {expr:?}"));
        assert_eq!(e.categorie(), Categorie::Lexicale, "expr={expr:?} err={e}");
    }
}

/* ------------------------ IEEE-754 ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_eq!(solve_ok("1 / 0"), f64::INFINITY);
    assert_eq!(solve_ok("-1 / 0"), f64::NEG_INFINITY);
    assert!(solve_ok("0 / 0").is_nan());
}

#[test]
fn sci_puissance_hors_domaine() {
    assert!(solve_ok("(0 - 8) ^ 0.5").is_nan());
    assert_proche("(0 - 2) ^ 2", 4.0);
}

/* ------------------------ Session ------------------------ */

#[test]
fn sci_solve_instance_neuve() {
    assert_eq!(Parser::default().solve(), 0.0);
}

/* ------------------------ Golden ------------------------ */

#[test]
fn sci_golden_rpn_et_valeur() {
    let expr = "-3 + 4.323 * -2.03 / (-1.15 - 5)^6";
    let attendu = "0 3 - 4.323 0 * + 2.03 0 1.15 - 5 - 6 ^ / -";

    let mut p = Parser::default();
    assert_eq!(p.parse(expr).unwrap(), attendu);
    // déterminisme : même entrée, même sortie
    assert_eq!(p.parse(expr).unwrap(), attendu);

    let reference = 0.0 - 3.0 + 4.323 * 0.0 - 2.03 / (0.0 - 1.15 - 5.0_f64).powf(6.0);
    assert_eq!(p.solve(), reference);
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut expr = String::new();
    for k in 0..500 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("0.5");
        budget(t0, max);
    }

    assert_proche(&expr, 250.0);
    budget(t0, max);
}

#[test]
fn sci_stress_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1_000);

    let n = 20_000;
    let expr = format!("{}1{}", "(1+".repeat(n), ")".repeat(n));

    assert_proche(&expr, (n + 1) as f64);
    budget(t0, max);
}

#[test]
fn sci_chaine_cent_mille_termes() {
    // arbre en peigne de 100 000 niveaux : parse, solve et libération
    let n = 100_000;
    let expr = vec!["1"; n].join("+");

    let mut p = Parser::default();
    p.parse(&expr)
        .unwrap_or_else(|e| panic!("parse(chaîne de {n}) erreur: {e}"));
    assert_eq!(p.arbre().map(|a| a.profondeur()), Some(n));
    assert_eq!(p.solve(), n as f64);

    // le nouvel arbre remplace (et libère) l’ancien
    p.parse("2 * 3").unwrap();
    assert_eq!(p.solve(), 6.0);
}
