//! Noyau : expression infixe -> RPN -> arbre -> valeur (f64)
//!
//! Organisation interne :
//! - jetons.rs     : Tok / Op + lecteur incrémental
//! - unaire.rs     : moins/plus unaire => 0 injecté
//! - priorites.rs  : table symbole -> priorité (fournie de l’extérieur)
//! - rpn.rs        : shunting-yard (tire les jetons un par un)
//! - arbre.rs      : AstNode + construction depuis la RPN
//! - eval.rs       : réduction récursive (IEEE-754, jamais d’erreur)
//! - affichage.rs  : RPN / arbre / valeur en texte
//! - session.rs    : Parser (parse, solve, print_ast)
//! - erreur.rs     : Config / Lexicale / Syntaxe

pub mod affichage;
pub mod arbre;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod priorites;
pub mod rpn;
pub mod session;
pub mod unaire;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{Categorie, ErreurConfig, ParseError};
pub use priorites::TablePriorites;
pub use session::Parser;
