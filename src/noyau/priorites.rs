// src/noyau/priorites.rs
//
// Table des priorités (symbole -> entier, plus grand = lie plus fort).
// Construite une fois, puis lue seulement pendant toute la vie du Parser.
//
// Format texte (une paire par ligne) :
//   + 1
//   * 2
//   # commentaire
// Lignes vides et commentaires ignorés.

use std::collections::HashMap;

use super::erreur::ErreurConfig;
use super::jetons::Op;

/// Table standard (identique à assets/priorites.txt).
const PRIORITES_STANDARD: [(Op, u32); 5] = [
    (Op::Plus, 1),
    (Op::Minus, 1),
    (Op::Star, 2),
    (Op::Slash, 2),
    (Op::Caret, 3),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TablePriorites {
    table: HashMap<Op, u32>,
}

impl Default for TablePriorites {
    fn default() -> Self {
        Self::standard()
    }
}

impl TablePriorites {
    pub fn standard() -> Self {
        Self {
            table: PRIORITES_STANDARD.into_iter().collect(),
        }
    }

    /// Construit la table depuis des paires (symbole, priorité).
    /// Un symbole en double est refusé (pas de “dernier gagnant” silencieux).
    pub fn from_pairs<I, S>(paires: I) -> Result<Self, ErreurConfig>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let mut table = HashMap::new();

        for (symbole, priorite) in paires {
            let op = op_depuis_symbole(symbole.as_ref())?;
            if priorite == 0 {
                return Err(ErreurConfig::PrioriteNulle(op));
            }
            if table.insert(op, priorite).is_some() {
                return Err(ErreurConfig::Doublon(op));
            }
        }

        Ok(Self { table })
    }

    /// Lit le format texte décrit en tête de module.
    pub fn lire(texte: &str) -> Result<Self, ErreurConfig> {
        let mut paires = Vec::new();

        for (i, ligne) in texte.lines().enumerate() {
            let ligne = ligne.trim();
            if ligne.is_empty() || ligne.starts_with('#') {
                continue;
            }

            let champs: Vec<&str> = ligne.split_whitespace().collect();
            let &[symbole, priorite] = champs.as_slice() else {
                return Err(ErreurConfig::LigneInvalide {
                    ligne: i + 1,
                    msg: format!("attendu « symbole priorité », lu {ligne:?}"),
                });
            };

            let priorite: u32 = priorite.parse().map_err(|_| ErreurConfig::LigneInvalide {
                ligne: i + 1,
                msg: format!("priorité invalide {priorite:?}"),
            })?;

            paires.push((symbole, priorite));
        }

        Self::from_pairs(paires)
    }

    /// Priorité d’un opérateur ; absente = erreur de configuration.
    pub fn priorite(&self, op: Op) -> Result<u32, ErreurConfig> {
        self.table
            .get(&op)
            .copied()
            .ok_or(ErreurConfig::PrioriteManquante(op))
    }

    /// Paires triées par symbole (affichage, déterminisme).
    pub fn paires(&self) -> Vec<(Op, u32)> {
        let mut v: Vec<(Op, u32)> = self.table.iter().map(|(op, p)| (*op, *p)).collect();
        v.sort();
        v
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

fn op_depuis_symbole(symbole: &str) -> Result<Op, ErreurConfig> {
    let mut chars = symbole.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Op::from_char(c),
        _ => None,
    }
    .ok_or_else(|| ErreurConfig::SymboleInconnu(symbole.to_string()))
}
