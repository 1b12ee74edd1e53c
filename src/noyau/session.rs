// src/noyau/session.rs
//
// Parser : possède la table de priorités (toute sa vie) et le dernier arbre construit.
//
// Pipeline d’un parse :
//   normalise_unaires -> + ")" -> Lecteur (tiré par to_rpn) -> RPN -> from_rpn -> arbre
//
// L’état de travail (pile d’opérateurs, sortie, pile d’arbres) est local à to_rpn / from_rpn.
// Un parse efface d’abord l’arbre précédent : après une erreur, solve() == 0.
//
// Pas de verrou interne : un seul appel à la fois par instance (&mut self).

use super::affichage::{format_arbre, format_rpn};
use super::arbre::{from_rpn, AstNode};
use super::erreur::ParseError;
use super::eval::evaluer;
use super::jetons::Lecteur;
use super::priorites::TablePriorites;
use super::rpn::to_rpn;
use super::unaire::normalise_unaires;

#[derive(Clone, Debug, Default)]
pub struct Parser {
    table: TablePriorites,
    arbre: Option<AstNode>,
}

impl Parser {
    pub fn new(table: TablePriorites) -> Self {
        Self { table, arbre: None }
    }

    pub fn table(&self) -> &TablePriorites {
        &self.table
    }

    /// Parse l’expression, reconstruit l’arbre et retourne la RPN en texte.
    pub fn parse(&mut self, expression: &str) -> Result<String, ParseError> {
        self.arbre = None;

        let source = format!("{})", normalise_unaires(expression));
        let mut lecteur = Lecteur::new(&source);

        let rpn = to_rpn(&mut lecteur, &self.table).inspect_err(|e| {
            log::debug!("parse({expression:?}) échoue en conversion: {e}");
        })?;
        let texte = format_rpn(&rpn);

        let arbre = from_rpn(&rpn).inspect_err(|e| {
            log::debug!("parse({expression:?}) échoue en construction: {e}");
        })?;

        log::debug!(
            "parse({expression:?}) -> [{texte}] (profondeur {})",
            arbre.profondeur()
        );
        self.arbre = Some(arbre);

        Ok(texte)
    }

    /// Valeur du dernier arbre ; 0 s’il n’y en a pas.
    pub fn solve(&self) -> f64 {
        self.arbre.as_ref().map_or(0.0, evaluer::<f64>)
    }

    pub fn arbre(&self) -> Option<&AstNode> {
        self.arbre.as_ref()
    }

    /// Rendu texte du dernier arbre (voir affichage::format_arbre).
    pub fn print_ast(&self) -> Option<String> {
        self.arbre.as_ref().map(format_arbre)
    }
}
