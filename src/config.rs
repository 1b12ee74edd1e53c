// src/config.rs
//
// Fournisseur de la table de priorités (hors noyau).
//
// - Web (wasm32) : table standard, toujours.
// - Natif        : fichier désigné par CALC_RPN_PRIORITES si la variable existe,
//                  sinon table standard. En cas d’échec : avertissement + table standard.
//
// Format du fichier : voir noyau/priorites.rs (et assets/priorites.txt).

use std::path::Path;

use thiserror::Error;

use crate::noyau::{ErreurConfig, TablePriorites};

/// Variable d’environnement : chemin du fichier de priorités.
pub const VAR_PRIORITES: &str = "CALC_RPN_PRIORITES";

#[derive(Error, Debug)]
pub enum ErreurChargement {
    #[error("lecture impossible : {0}")]
    Io(#[from] std::io::Error),

    #[error("table invalide : {0}")]
    Config(#[from] ErreurConfig),
}

pub fn table_depuis_fichier(chemin: &Path) -> Result<TablePriorites, ErreurChargement> {
    let texte = std::fs::read_to_string(chemin)?;
    Ok(TablePriorites::lire(&texte)?)
}

/// Table à utiliser au démarrage de l’application.
#[cfg(not(target_arch = "wasm32"))]
pub fn charger_table() -> TablePriorites {
    match std::env::var_os(VAR_PRIORITES) {
        Some(chemin) => table_ou_standard(Path::new(&chemin)),
        None => {
            log::info!("{VAR_PRIORITES} absent : table de priorités standard");
            TablePriorites::standard()
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn charger_table() -> TablePriorites {
    TablePriorites::standard()
}

#[cfg(not(target_arch = "wasm32"))]
fn table_ou_standard(chemin: &Path) -> TablePriorites {
    match table_depuis_fichier(chemin) {
        Ok(table) => {
            if table.is_empty() {
                log::warn!("{} : table vide, tout opérateur sera refusé", chemin.display());
            }
            log::info!(
                "table de priorités chargée depuis {} ({} opérateurs)",
                chemin.display(),
                table.len()
            );
            table
        }
        Err(e) => {
            log::warn!(
                "{} : {e} ; repli sur la table standard",
                chemin.display()
            );
            TablePriorites::standard()
        }
    }
}
