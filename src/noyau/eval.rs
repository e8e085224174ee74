//! Noyau — évaluation (pipeline réel)
//!
//! normaliser -> jetons -> pré-contrôle zéro littéral -> réduction ^
//!            -> RPN -> f64 -> classement (NaN/∞)
//!
//! Remarque : le pré-contrôle passe AVANT la réduction des puissances et
//! avant l'évaluation générique — on ne compte jamais sur le back-end
//! arithmétique pour distinguer Indéfini d'Indéterminé sur un zéro
//! littéral.

use super::jetons::{normaliser, tokenize};
use super::puissance::reduire;
use super::rpn::{eval_rpn, to_rpn};
use super::verdict::{classer_nombre, detecter_zero_litteral, Verdict};

/// API publique : évalue une expression (forme affichée ou canonique) et
/// retourne son verdict.
///
/// Les échecs de syntaxe (parenthèses déséquilibrées, '^' mal placé,
/// opérande manquant, entrée vide) remontent en Err ; l'appelant les
/// rabat sur la catégorie Indéfini (pas de troisième étiquette visible).
pub fn evaluer_expression(expr_str: &str, separateur: char) -> Result<Verdict, String> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err("Entrée vide".into());
    }

    // 1) Forme canonique (glyphes/séparateur -> ASCII, point décimal)
    let canonique = normaliser(s, separateur);

    // 2) Jetons
    let jetons = tokenize(&canonique)?;

    // 3) Pré-contrôle : zéro littéral au dénominateur
    //    (0/0 et 0%0 => Indéterminé ; autre /0 ou %0 => Indéfini,
    //    l'évaluateur générique n'est jamais invoqué pour ces entrées)
    if let Some(v) = detecter_zero_litteral(&jetons) {
        return Ok(v);
    }

    // 4) Réduction des puissances (a ^ b -> littéral, NaN compris)
    let jetons = reduire(jetons);

    // 5) RPN + évaluation générique
    let rpn = to_rpn(&jetons)?;
    let brut = eval_rpn(&rpn)?;

    // 6) Classement du double brut
    Ok(classer_nombre(brut))
}
