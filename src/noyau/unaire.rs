// src/noyau/unaire.rs
//
// Moins / plus unaire : on injecte un 0 devant l’opérateur.
// "-3" => "0-3", "(-3" => "(0-3", "--3" => "0-0-3".
//
// Un opérateur est unaire si le dernier caractère non blanc déjà écrit est
// absent, '(' ou lui-même un opérateur. Rien d’autre n’est modifié.
//
// NOTE: la règle est purement textuelle. "2*-3" devient "2*0-3", soit (2*0)-3.

use super::jetons::est_operateur;

pub fn normalise_unaires(formule: &str) -> String {
    let mut out = String::with_capacity(formule.len() + 4);

    for c in formule.chars() {
        if est_operateur(c) {
            match out.trim_end().chars().next_back() {
                None | Some('(') => out.push('0'),
                Some(p) if est_operateur(p) => out.push('0'),
                _ => {}
            }
        }
        out.push(c);
    }

    out
}
