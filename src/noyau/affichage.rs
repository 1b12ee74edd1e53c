// src/noyau/affichage.rs
//
// Rendu texte (lecture seule) : RPN, arbre, valeur.
// L’arbre n’est parcouru que via jeton() / gauche() / droite().

use super::arbre::AstNode;
use super::jetons::Tok;

/* ------------------------ RPN ------------------------ */

/// Jetons séparés par un espace (ex: "2 3 4 * +").
pub fn format_rpn(rpn: &[Tok]) -> String {
    rpn.iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/* ------------------------ Arbre ------------------------ */

const RETRAIT: usize = 4;

enum Etape<'a> {
    Visite(&'a AstNode, usize),
    Ecrit(&'a AstNode, usize),
}

/// Arbre “couché” : sous-arbre droit en haut, gauche en bas.
/// Format propre à la crate : une ligne par noeud, 4 espaces par niveau,
/// pas de ligne vide entre les noeuds (différent de l’affichage console à
/// retrait n-1 suivi d’une ligne vide).
/// Un noeud affiche '/' s’il a un enfant gauche et '\' s’il a un enfant droit.
pub fn format_arbre(racine: &AstNode) -> String {
    let mut out = String::new();
    let mut pile = vec![Etape::Visite(racine, 0)];

    while let Some(etape) = pile.pop() {
        match etape {
            Etape::Visite(noeud, niveau) => {
                if let Some(g) = noeud.gauche() {
                    pile.push(Etape::Visite(g, niveau + 1));
                }
                pile.push(Etape::Ecrit(noeud, niveau));
                if let Some(d) = noeud.droite() {
                    pile.push(Etape::Visite(d, niveau + 1));
                }
            }
            Etape::Ecrit(noeud, niveau) => ecrire_ligne(&mut out, noeud, niveau),
        }
    }

    out
}

fn ecrire_ligne(out: &mut String, noeud: &AstNode, niveau: usize) {
    out.push_str(&" ".repeat(niveau * RETRAIT));
    out.push_str(&noeud.jeton().to_string());
    if noeud.gauche().is_some() {
        out.push('/');
    }
    if noeud.droite().is_some() {
        out.push('\\');
    }
    out.push('\n');
}

/* ------------------------ Valeur ------------------------ */

/// Valeur lisible : ∞ et NaN explicites, sinon Display Rust (le plus court exact).
pub fn format_valeur(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+∞".to_string()
    } else if v == f64::NEG_INFINITY {
        "-∞".to_string()
    } else {
        format!("{v}")
    }
}
