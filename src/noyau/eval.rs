//! Noyau — évaluation de l’arbre
//!
//! Réduction pure et totale : aucune erreur possible sur un arbre
//! bien formé. Parcours postfixe sur une pile de valeurs (pas de récursion,
//! la profondeur de l’arbre suit la longueur de l’entrée). Division par zéro et puissances hors domaine suivent IEEE-754
//! (+∞, -∞, NaN).

use num_traits::{Float, NumCast};

use super::arbre::AstNode;
use super::jetons::Op;

/// Évalue l’arbre dans le type flottant demandé (f64 pour le Parser).
pub fn evaluer<F: Float>(arbre: &AstNode) -> F {
    let mut valeurs: Vec<F> = Vec::new();

    for noeud in arbre.postordre() {
        let v = match noeud {
            AstNode::Feuille(v) => <F as NumCast>::from(*v).unwrap_or_else(F::nan),
            AstNode::Noeud { op, .. } => {
                let (Some(b), Some(a)) = (valeurs.pop(), valeurs.pop()) else {
                    return F::nan();
                };
                appliquer(*op, a, b)
            }
        };
        valeurs.push(v);
    }

    valeurs.pop().unwrap_or_else(F::nan)
}

fn appliquer<F: Float>(op: Op, a: F, b: F) -> F {
    match op {
        Op::Plus => a + b,
        Op::Minus => a - b,
        Op::Star => a * b,
        Op::Slash => a / b,
        Op::Caret => a.powf(b),
    }
}
