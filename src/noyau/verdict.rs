// src/noyau/verdict.rs
//
// Classification des résultats : la sortie d'une évaluation est soit un
// nombre, soit l'une des DEUX catégories d'échec visibles :
// - Indéfini     : pas de réponse réelle (1/0, ln(x≤0), (-1)!, tan(90°)…)
// - Indéterminé  : la réponse dépend d'un passage à la limite (0/0, 0%0,
//                  tout résultat infini)
//
// Ordre du contrat (important) :
// 1. AVANT l'évaluation générique, le flux de jetons est scanné pour les
//    dénominateurs LITTÉRAUX zéro — on ne compte jamais sur le back-end
//    arithmétique pour distinguer les deux catégories.
// 2. APRÈS l'évaluation, le double brut est classé NaN/∞/nombre.

use super::jetons::Tok;

/// Résultat classé d'une évaluation. Créé à chaque appel, jamais persisté.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Verdict {
    Nombre(f64),
    Indefini,
    Indetermine,
}

/// Catégorie d'échec visible (pour le style d'affichage côté collaborateur).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genre {
    Indefini,
    Indetermine,
}

impl Verdict {
    pub fn genre(&self) -> Option<Genre> {
        match self {
            Verdict::Nombre(_) => None,
            Verdict::Indefini => Some(Genre::Indefini),
            Verdict::Indetermine => Some(Genre::Indetermine),
        }
    }
}

/// Pré-contrôle : division/modulo par un zéro LITTÉRAL.
///
/// Scan du flux de jetons (donc insensible aux espaces de l'accumulateur) :
/// - `0 / 0` ou `0 % 0` (les DEUX opérandes littéraux zéro) => Indéterminé
/// - tout autre `/ 0` ou `% 0` littéral                     => Indéfini
///
/// Ne court-circuite QUE les zéros littéraux : un dénominateur calculé
/// (ex: `1 / (3 - 3)`) passe par l'évaluation générique puis par
/// classer_nombre (∞ => Indéterminé).
pub fn detecter_zero_litteral(tokens: &[Tok]) -> Option<Verdict> {
    for i in 0..tokens.len() {
        if !matches!(tokens[i], Tok::Slash | Tok::Percent) {
            continue;
        }
        let Some(Tok::Num(droite)) = tokens.get(i + 1) else {
            continue;
        };
        if *droite != 0.0 {
            continue;
        }

        // zéro littéral à droite : 0/0 ou 0%0 si la gauche est aussi 0
        if let Some(Tok::Num(gauche)) = i.checked_sub(1).and_then(|j| tokens.get(j)) {
            if *gauche == 0.0 {
                return Some(Verdict::Indetermine);
            }
        }
        return Some(Verdict::Indefini);
    }
    None
}

/// Post-contrôle : classe un double brut.
/// NaN => Indéfini ; ±∞ => Indéterminé ; sinon Nombre.
pub fn classer_nombre(v: f64) -> Verdict {
    if v.is_nan() {
        return Verdict::Indefini;
    }
    if v.is_infinite() {
        return Verdict::Indetermine;
    }
    Verdict::Nombre(v)
}
