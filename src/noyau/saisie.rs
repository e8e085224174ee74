// src/noyau/saisie.rs
//
// Accumulateur de saisie : machine à états qui construit l'expression au
// fil des touches (chiffres, point, parenthèses, opérateurs binaires).
//
// Représentation interne : liste d'unités (runs numériques / opérateurs /
// parenthèses), PAS une chaîne — la forme canonique et la forme d'affichage
// sont des projections dérivées à la demande.
//
// Invariants tenus ici :
// - au plus un point décimal par run numérique
// - jamais d'opérateur binaire en tête d'expression
// - l'opérateur de queue est toujours unique (re-presser un opérateur
//   REMPLACE le précédent, la dernière touche gagne)
// - aucun contrôle d'équilibre des parenthèses à la saisie : une
//   expression mal parenthésée n'échoue qu'à l'évaluation.

use super::format::projeter_affichage;

/// Opérateurs binaires du tampon (les six touches).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Division,
    Modulo,
    Puissance,
}

impl Op {
    /// Caractère canonique (ASCII) de l'opérateur.
    pub fn canonique(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '*',
            Op::Division => '/',
            Op::Modulo => '%',
            Op::Puissance => '^',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parenthese {
    Ouvrante,
    Fermante,
}

#[derive(Clone, Debug, PartialEq)]
enum Unite {
    Nombre(String),
    Operateur(Op),
    Ouvrante,
    Fermante,
}

/// Valeur affichée quand le tampon est vide (remplaçable, jamais évaluée
/// comme contenu résiduel).
pub const SENTINELLE: &str = "0";

#[derive(Clone, Debug, Default)]
pub struct Saisie {
    unites: Vec<Unite>,
}

impl Saisie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn est_vide(&self) -> bool {
        self.unites.is_empty()
    }

    /// Vrai si le tampon ne contient que le zéro « frais » (sentinelle
    /// matérialisée par la touche 0).
    fn est_zero_frais(&self) -> bool {
        matches!(self.unites.as_slice(), [Unite::Nombre(n)] if n == "0")
    }

    /* ------------------------ touches ------------------------ */

    /// Chiffre : remplace la sentinelle, sinon prolonge le run courant
    /// (ou en démarre un après un opérateur/une parenthèse).
    pub fn chiffre(&mut self, c: char) {
        debug_assert!(c.is_ascii_digit());

        if self.est_zero_frais() {
            self.unites[0] = Unite::Nombre(c.to_string());
            return;
        }

        match self.unites.last_mut() {
            Some(Unite::Nombre(n)) => n.push(c),
            _ => self.unites.push(Unite::Nombre(c.to_string())),
        }
    }

    /// Point décimal : au plus un par run numérique ; après un opérateur
    /// ou sur tampon vide, démarre le run "0.".
    pub fn point(&mut self) {
        match self.unites.last_mut() {
            Some(Unite::Nombre(n)) => {
                if !n.contains('.') {
                    n.push('.');
                }
            }
            _ => self.unites.push(Unite::Nombre("0.".to_string())),
        }
    }

    /// Opérateur binaire : ignoré sur tampon vide ; s'il y a déjà un
    /// opérateur en queue, le nouveau le remplace.
    pub fn operateur(&mut self, op: Op) {
        if self.unites.is_empty() {
            return;
        }
        if let Some(Unite::Operateur(dernier)) = self.unites.last_mut() {
            *dernier = op;
            return;
        }
        self.unites.push(Unite::Operateur(op));
    }

    /// Parenthèse : placée comme un chiffre (remplace la sentinelle,
    /// sinon s'ajoute), sans contrôle d'équilibre.
    pub fn parenthese(&mut self, p: Parenthese) {
        if self.est_zero_frais() {
            self.unites.clear();
        }
        self.unites.push(match p {
            Parenthese::Ouvrante => Unite::Ouvrante,
            Parenthese::Fermante => Unite::Fermante,
        });
    }

    /// Retour arrière : retire un chiffre du run de queue, ou l'unité
    /// de queue entière (opérateur, parenthèse).
    pub fn retour(&mut self) {
        match self.unites.last_mut() {
            Some(Unite::Nombre(n)) => {
                n.pop();
                if n.is_empty() {
                    self.unites.pop();
                }
            }
            Some(_) => {
                self.unites.pop();
            }
            None => {}
        }
    }

    /// Remise à zéro : retour à la sentinelle.
    pub fn effacer(&mut self) {
        self.unites.clear();
    }

    /* ------------------------ accès pour les fonctions ------------------------ */

    /// Valeur du run numérique de queue, si la saisie se termine par un
    /// nombre (cible des touches fonction, forme « jeton de queue »).
    pub fn nombre_de_queue(&self) -> Option<f64> {
        match self.unites.last() {
            Some(Unite::Nombre(n)) => n.parse().ok(),
            _ => None,
        }
    }

    /// Remplace le run numérique de queue (résultat d'une fonction).
    /// Sur tampon vide, dépose le nombre seul.
    pub fn remplacer_queue(&mut self, texte: &str) {
        match self.unites.last_mut() {
            Some(Unite::Nombre(n)) => *n = texte.to_string(),
            _ => self.unites.push(Unite::Nombre(texte.to_string())),
        }
    }

    /// Remplace TOUT le tampon par un nombre (résultat de "=").
    pub fn tout_remplacer(&mut self, texte: &str) {
        self.unites.clear();
        self.unites.push(Unite::Nombre(texte.to_string()));
    }

    /* ------------------------ projections ------------------------ */

    /// Forme canonique : ASCII, point décimal, opérateurs encadrés
    /// d'espaces simples (" op ") — seule entrée de l'évaluation.
    pub fn canonique(&self) -> String {
        let mut s = String::new();
        for u in &self.unites {
            match u {
                Unite::Nombre(n) => s.push_str(n),
                Unite::Operateur(op) => {
                    s.push(' ');
                    s.push(op.canonique());
                    s.push(' ');
                }
                Unite::Ouvrante => s.push('('),
                Unite::Fermante => s.push(')'),
            }
        }
        s
    }

    /// Forme d'affichage : projection glyphes + séparateur local de la
    /// forme canonique ("0" si le tampon est vide).
    pub fn affichage(&self, separateur: char) -> String {
        if self.unites.is_empty() {
            return SENTINELLE.to_string();
        }
        projeter_affichage(&self.canonique(), separateur)
    }
}
