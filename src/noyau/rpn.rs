// src/noyau/rpn.rs
//
// Shunting-yard : jetons (tirés un par un du Lecteur) -> RPN (postfix).
//
// Règles:
// - une parenthèse ouvrante sentinelle borne toute l’expression ; le ')' final
//   ajouté par le Parser la referme, et la conversion s’arrête quand la pile est vide
// - opérateur : on dépile tout opérateur du haut de priorité >= (donc tout est
//   associatif à gauche, '^' compris : 2^3^2 = (2^3)^2)
// - ')' : dépile jusqu’à '(' (la parenthèse n’est jamais sortie)
// - la sortie ne contient que Num / Op
//
// Parenthèses non appariées :
// - "(2+3"  : fin d’entrée alors que la pile n’est pas vide
// - "2+3)"  : jeton restant après fermeture de la sentinelle

use super::erreur::ParseError;
use super::jetons::{Lecteur, Tok};
use super::priorites::TablePriorites;

pub fn to_rpn(lecteur: &mut Lecteur<'_>, table: &TablePriorites) -> Result<Vec<Tok>, ParseError> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = vec![Tok::LPar];

    while !ops.is_empty() {
        let tok = lecteur
            .suivant()?
            .ok_or(ParseError::ParenthesesNonAppariees)?;

        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(op) => {
                let p = table.priorite(op)?;

                while let Some(&Tok::Op(top)) = ops.last() {
                    if table.priorite(top)? < p {
                        break;
                    }
                    out.push(Tok::Op(top));
                    ops.pop();
                }

                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => depile_jusqu_a_ouvrante(&mut ops, &mut out)?,
        }
    }

    if lecteur.suivant()?.is_some() {
        return Err(ParseError::ParenthesesNonAppariees);
    }

    log::trace!("rpn: {} jetons, {} octets lus", out.len(), lecteur.curseur());
    Ok(out)
}

fn depile_jusqu_a_ouvrante(ops: &mut Vec<Tok>, out: &mut Vec<Tok>) -> Result<(), ParseError> {
    while let Some(top) = ops.pop() {
        if matches!(top, Tok::LPar) {
            return Ok(());
        }
        out.push(top);
    }
    Err(ParseError::ParenthesesNonAppariees)
}
