// src/noyau/arbre.rs
//
// Arbre syntaxique binaire + construction depuis la RPN.
//
// Un Noeud porte toujours ses deux enfants : un arbre mal formé
// (opérateur avec 0 ou 1 enfant) n’est pas représentable.
//
// Une somme de n termes donne un arbre de profondeur n : aucun parcours
// (évaluation, copie, comparaison, libération) n’est récursif.

use std::fmt;
use std::mem;

use super::erreur::ParseError;
use super::jetons::{Op, Tok};

pub enum AstNode {
    Feuille(f64),
    Noeud {
        op: Op,
        gauche: Box<AstNode>,
        droite: Box<AstNode>,
    },
}

impl AstNode {
    pub fn noeud(op: Op, gauche: AstNode, droite: AstNode) -> Self {
        AstNode::Noeud {
            op,
            gauche: Box::new(gauche),
            droite: Box::new(droite),
        }
    }

    /// Contenu du noeud : Num pour une feuille, Op sinon.
    pub fn jeton(&self) -> Tok {
        match self {
            AstNode::Feuille(v) => Tok::Num(*v),
            AstNode::Noeud { op, .. } => Tok::Op(*op),
        }
    }

    pub fn gauche(&self) -> Option<&AstNode> {
        match self {
            AstNode::Feuille(_) => None,
            AstNode::Noeud { gauche, .. } => Some(gauche),
        }
    }

    pub fn droite(&self) -> Option<&AstNode> {
        match self {
            AstNode::Feuille(_) => None,
            AstNode::Noeud { droite, .. } => Some(droite),
        }
    }

    pub fn profondeur(&self) -> usize {
        let mut max = 0;
        let mut pile = vec![(self, 1)];
        while let Some((noeud, niveau)) = pile.pop() {
            max = max.max(niveau);
            if let AstNode::Noeud { gauche, droite, .. } = noeud {
                pile.push((&**gauche, niveau + 1));
                pile.push((&**droite, niveau + 1));
            }
        }
        max
    }

    /// Noeuds en ordre postfixe (gauche, droite, noeud) : l’ordre de la RPN.
    pub fn postordre(&self) -> Vec<&AstNode> {
        let mut pile = vec![self];
        let mut out = Vec::new();
        while let Some(noeud) = pile.pop() {
            out.push(noeud);
            if let AstNode::Noeud { gauche, droite, .. } = noeud {
                pile.push(&**gauche);
                pile.push(&**droite);
            }
        }
        out.reverse();
        out
    }

    /// RPN équivalente (reconstruit un arbre identique via from_rpn).
    pub fn jetons(&self) -> Vec<Tok> {
        self.postordre().into_iter().map(AstNode::jeton).collect()
    }
}

impl Clone for AstNode {
    fn clone(&self) -> Self {
        // from_rpn ne peut pas refuser la RPN d’un arbre complet.
        from_rpn(&self.jetons()).unwrap_or(AstNode::Feuille(f64::NAN))
    }
}

// La RPN d’un arbre binaire complet le détermine entièrement.
impl PartialEq for AstNode {
    fn eq(&self, other: &Self) -> bool {
        self.postordre()
            .into_iter()
            .map(AstNode::jeton)
            .eq(other.postordre().into_iter().map(AstNode::jeton))
    }
}

impl fmt::Debug for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AstNode").field(&self.jetons()).finish()
    }
}

impl Drop for AstNode {
    fn drop(&mut self) {
        let mut pile: Vec<AstNode> = Vec::new();
        detache_enfants(self, &mut pile);
        while let Some(mut noeud) = pile.pop() {
            detache_enfants(&mut noeud, &mut pile);
        }
    }
}

/// Remplace les sous-arbres internes par des feuilles et les empile :
/// chaque noeud est libéré avec des enfants déjà détachés.
fn detache_enfants(noeud: &mut AstNode, pile: &mut Vec<AstNode>) {
    if let AstNode::Noeud { gauche, droite, .. } = noeud {
        for enfant in [&mut **gauche, &mut **droite] {
            if matches!(enfant, AstNode::Noeud { .. }) {
                pile.push(mem::replace(enfant, AstNode::Feuille(0.0)));
            }
        }
    }
}

/// Construit l’arbre à partir d’une RPN.
/// Premier dépilé = opérande droit, second = opérande gauche.
pub fn from_rpn(rpn: &[Tok]) -> Result<AstNode, ParseError> {
    let mut st: Vec<AstNode> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match *tok {
            Tok::Num(v) => st.push(AstNode::Feuille(v)),

            Tok::Op(op) => {
                let (Some(b), Some(a)) = (st.pop(), st.pop()) else {
                    return Err(ParseError::OperandesInsuffisants(op));
                };
                st.push(AstNode::noeud(op, a, b));
            }

            Tok::LPar | Tok::RPar => return Err(ParseError::ParenthesesNonAppariees),
        }
    }

    match st.pop() {
        Some(racine) if st.is_empty() => Ok(racine),
        Some(_) => Err(ParseError::ExpressionMalFormee(st.len() + 1)),
        None => Err(ParseError::ExpressionMalFormee(0)),
    }
}
