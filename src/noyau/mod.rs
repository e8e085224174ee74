//! Noyau d'évaluation (IEEE-754 double)
//!
//! Organisation interne :
//! - jetons.rs     : normalisation glyphes + tokenisation
//! - saisie.rs     : accumulateur de saisie (tampon d'expression)
//! - puissance.rs  : pré-réduction des a ^ b en littéraux
//! - rpn.rs        : shunting-yard + évaluation f64
//! - fonctions.rs  : fonctions scientifiques à un argument
//! - verdict.rs    : classification Nombre / Indéfini / Indéterminé
//! - format.rs     : littéral canonique + projection d'affichage
//! - eval.rs       : pipeline complet
//! - moteur.rs     : façade clavier (une opération par touche)

pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod puissance;
pub mod rpn;
pub mod saisie;
pub mod verdict;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::evaluer_expression;
pub use fonctions::Fonction;
pub use moteur::{Affichage, Moteur};
pub use saisie::{Op, Parenthese};
pub use verdict::{Genre, Verdict};
