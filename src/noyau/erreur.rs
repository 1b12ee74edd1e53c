// src/noyau/erreur.rs
//
// Erreurs du noyau.
// Trois familles :
// - Config   : table de priorités incomplète ou invalide (fatal, pas une faute de saisie)
// - Lexicale : caractère inattendu, nombre mal formé
// - Syntaxe  : parenthèses, opérandes manquants ou en trop
//
// L’évaluation ne produit jamais d’erreur (∞ / NaN selon IEEE-754).

use thiserror::Error;

use super::jetons::Op;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurConfig {
    #[error("aucune priorité définie pour l’opérateur '{0}'")]
    PrioriteManquante(Op),

    #[error("opérateur '{0}' déclaré plusieurs fois")]
    Doublon(Op),

    #[error("symbole non supporté : {0:?} (attendu: + - * / ^)")]
    SymboleInconnu(String),

    #[error("priorité nulle pour '{0}' (entier strictement positif attendu)")]
    PrioriteNulle(Op),

    #[error("ligne {ligne} : {msg}")]
    LigneInvalide { ligne: usize, msg: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("configuration : {0}")]
    Config(#[from] ErreurConfig),

    #[error("caractère inattendu '{car}' (position {pos})")]
    CaractereInattendu { car: char, pos: usize },

    #[error("nombre mal formé : {0:?}")]
    NombreMalForme(String),

    #[error("parenthèses non appariées")]
    ParenthesesNonAppariees,

    #[error("opérandes insuffisants pour '{0}'")]
    OperandesInsuffisants(Op),

    #[error("expression mal formée ({0} termes restants au lieu de 1)")]
    ExpressionMalFormee(usize),
}

/// Famille d’une erreur de parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    Config,
    Lexicale,
    Syntaxe,
}

impl ParseError {
    pub fn categorie(&self) -> Categorie {
        match self {
            ParseError::Config(_) => Categorie::Config,
            ParseError::CaractereInattendu { .. } | ParseError::NombreMalForme(_) => {
                Categorie::Lexicale
            }
            ParseError::ParenthesesNonAppariees
            | ParseError::OperandesInsuffisants(_)
            | ParseError::ExpressionMalFormee(_) => Categorie::Syntaxe,
        }
    }
}
