// src/noyau/jetons.rs
//
// Jetons + lecteur incrémental.
// Le convertisseur (rpn.rs) tire les jetons un par un : aucune liste n’est construite d’avance.
//
// Supporte:
// - nombres décimaux (ex: 12, 4.323, 2,03) : '.' et ',' valent tous deux le séparateur décimal
// - opérateurs + - * / ^
// - parenthèses ( )
// - espaces (ignorés)

use std::fmt;

use super::erreur::ParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
}

impl Op {
    pub fn from_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '^' => Some(Op::Caret),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Caret => '^',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Op),
    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Op(op) => write!(f, "{op}"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

pub fn est_operateur(c: char) -> bool {
    Op::from_char(c).is_some()
}

fn est_separateur_decimal(c: char) -> bool {
    c == '.' || c == ','
}

/// Caractère qui termine proprement un nombre (sinon : caractère inattendu).
fn termine_nombre(c: char) -> bool {
    est_operateur(c) || c == '(' || c == ')' || c.is_whitespace()
}

/// Lecteur de jetons sur une chaîne déjà normalisée (voir unaire.rs).
/// `pos` est un offset en octets, croissant pendant toute la lecture.
#[derive(Clone, Debug)]
pub struct Lecteur<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lecteur<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Offset courant en octets (nom distinct de `Iterator::position`).
    pub fn curseur(&self) -> usize {
        self.pos
    }

    /// Jeton suivant, `Ok(None)` en fin d’entrée.
    pub fn suivant(&mut self) -> Result<Option<Tok>, ParseError> {
        self.saute_espaces();

        let Some(c) = self.courant() else {
            return Ok(None);
        };

        if let Some(op) = Op::from_char(c) {
            self.pos += c.len_utf8();
            return Ok(Some(Tok::Op(op)));
        }

        match c {
            '(' => {
                self.pos += 1;
                Ok(Some(Tok::LPar))
            }
            ')' => {
                self.pos += 1;
                Ok(Some(Tok::RPar))
            }
            _ if c.is_ascii_digit() => self.lire_nombre().map(Some),
            _ => Err(ParseError::CaractereInattendu {
                car: c,
                pos: self.pos,
            }),
        }
    }

    fn courant(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn saute_espaces(&mut self) {
        while let Some(c) = self.courant() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Plus longue suite de chiffres / séparateurs à partir de `pos`.
    fn lire_nombre(&mut self) -> Result<Tok, ParseError> {
        let debut = self.pos;
        let mut fin = self.source.len();

        for (i, c) in self.source[debut..].char_indices() {
            if c.is_ascii_digit() || est_separateur_decimal(c) {
                continue;
            }
            if termine_nombre(c) {
                fin = debut + i;
                break;
            }
            return Err(ParseError::CaractereInattendu {
                car: c,
                pos: debut + i,
            });
        }

        let texte = &self.source[debut..fin];
        self.pos = fin;

        let v: f64 = texte
            .replace(',', ".")
            .parse()
            .map_err(|_| ParseError::NombreMalForme(texte.to_string()))?;

        Ok(Tok::Num(v))
    }
}

impl Iterator for Lecteur<'_> {
    type Item = Result<Tok, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.suivant().transpose()
    }
}
