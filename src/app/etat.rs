//! src/app/etat.rs
//!
//! État UI : entrée, résultat, erreur, démarche + le Parser (session du noyau).
//!
//! Contrats :
//! - Aucun dessin ici (voir vue.rs).
//! - `evaluer_entree` est le seul point qui appelle le noyau.

use crate::noyau::affichage::format_valeur;
use crate::noyau::unaire::normalise_unaires;
use crate::noyau::{Parser, TablePriorites};

/// Au-delà, le dessin de l’arbre (retrait par niveau) n’est plus lisible.
const PROFONDEUR_DESSIN_MAX: usize = 64;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub normalisee: String,
    pub rpn: String,
    pub arbre: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- noyau ---
    parser: Parser,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_table(TablePriorites::standard())
    }
}

impl AppCalc {
    pub fn avec_table(table: TablePriorites) -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            parser: Parser::new(table),
            focus_entree: true,
        }
    }

    pub fn table(&self) -> &TablePriorites {
        self.parser.table()
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// On conserve le dernier résultat affiché ; la démarche n’est plus fiable.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /* ------------------------ Noyau ------------------------ */

    fn dessin_arbre(&self) -> String {
        match self.parser.arbre().map(|a| a.profondeur()) {
            Some(p) if p > PROFONDEUR_DESSIN_MAX => {
                format!("(arbre de profondeur {p} : trop profond pour être dessiné)")
            }
            _ => self.parser.print_ast().unwrap_or_default(),
        }
    }

    /// parse + solve de l’entrée courante.
    pub fn evaluer_entree(&mut self) {
        let s = self.entree.trim().to_string();
        if s.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        match self.parser.parse(&s) {
            Ok(rpn) => {
                self.demarche = Demarche {
                    normalisee: normalise_unaires(&s),
                    rpn,
                    arbre: self.dessin_arbre(),
                };
                self.resultat = format_valeur(self.parser.solve());
                self.erreur.clear();
            }
            Err(e) => {
                log::debug!("évaluation refusée ({:?}) : {e}", e.categorie());
                self.set_erreur(e.to_string());
            }
        }

        self.focus_entree = true;
    }
}
