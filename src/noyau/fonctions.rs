// src/noyau/fonctions.rs
//
// Fonctions scientifiques à UN argument, appliquées à la valeur affichée
// (jamais intégrées à la grammaire du tampon d'expression).
//
// Contrat :
// - préconditions EXPLICITES (inverse de 0, tan aux asymptotes, ln/log de
//   x ≤ 0, factorielle négative) => Indéfini court-circuité
// - toute branche repasse quand même par classer_nombre : un débordement
//   flottant (exp, 10^x, n!) peut encore produire ∞ => Indéterminé
// - trigonométrie en DEGRÉS

use super::verdict::{classer_nombre, Verdict};

/// Ensemble fermé des touches fonction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Carre,        // x²
    RacineCarree, // ²√x
    Inverse,      // ¹⁄ₓ
    Factorielle,  // n!
    Exp,          // eˣ
    DixPuissance, // 10ˣ
    Sin,
    Cos,
    Tan,
    Ln,
    Log10,
    Pourcent, // v/100 (touche unaire, PAS l'opérateur % du tampon)
    Negation, // ±
}

/// Applique une fonction à une valeur, puis classe le résultat brut.
pub fn appliquer(f: Fonction, v: f64) -> Verdict {
    use Fonction::*;

    let brut = match f {
        Carre => v * v,

        // v < 0 => sqrt renvoie NaN => classé Indéfini en sortie
        RacineCarree => v.sqrt(),

        Inverse => {
            if v == 0.0 {
                return Verdict::Indefini;
            }
            1.0 / v
        }

        Factorielle => {
            if v < 0.0 {
                return Verdict::Indefini;
            }
            factorielle(v)
        }

        Exp => v.exp(),
        DixPuissance => 10f64.powf(v),

        Sin => v.to_radians().sin(),
        Cos => v.to_radians().cos(),

        Tan => {
            // vraie asymptote verticale : 90° + k·180°
            if (v % 180.0).abs() == 90.0 {
                return Verdict::Indefini;
            }
            v.to_radians().tan()
        }

        Ln => {
            if v <= 0.0 {
                return Verdict::Indefini;
            }
            v.ln()
        }

        Log10 => {
            if v <= 0.0 {
                return Verdict::Indefini;
            }
            v.log10()
        }

        Pourcent => v / 100.0,
        Negation => -v,
    };

    classer_nombre(brut)
}

/// ∏ 1..⌊v⌋ en f64 (v ≥ 0, troncature vers zéro).
/// Arrêt anticipé dès que l'accumulateur déborde en ∞ : au-delà de 170!
/// le produit est infini, inutile de continuer à multiplier.
fn factorielle(v: f64) -> f64 {
    let n = v.trunc() as i64;
    let mut acc = 1.0f64;
    for i in 1..=n {
        acc *= i as f64;
        if acc.is_infinite() {
            break;
        }
    }
    acc
}
