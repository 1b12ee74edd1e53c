// src/journal.rs
//
// Backend minimal pour la façade `log` : une ligne par message sur stderr.
// Niveau lu dans CALC_RPN_LOG (error | warn | info | debug | trace | off), défaut: warn.
// Installé par l’entrée NATIVE seulement.

use std::str::FromStr;
use std::sync::OnceLock;

use log::{LevelFilter, Log, Metadata, Record};

/// Variable d’environnement : niveau de journal.
pub const VAR_NIVEAU: &str = "CALC_RPN_LOG";

const NIVEAU_DEFAUT: LevelFilter = LevelFilter::Warn;

struct JournalStderr {
    niveau: LevelFilter,
}

impl Log for JournalStderr {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.niveau
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{:<5}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static JOURNAL: OnceLock<JournalStderr> = OnceLock::new();

/// Niveau demandé ; valeur absente ou illisible => défaut.
pub fn niveau_depuis(valeur: Option<&str>) -> LevelFilter {
    valeur
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(NIVEAU_DEFAUT)
}

/// Installe le journal (un second appel est sans effet).
pub fn init() {
    let niveau = niveau_depuis(std::env::var(VAR_NIVEAU).ok().as_deref());
    let journal = JOURNAL.get_or_init(|| JournalStderr { niveau });

    if log::set_logger(journal).is_ok() {
        log::set_max_level(journal.niveau);
    }
}
