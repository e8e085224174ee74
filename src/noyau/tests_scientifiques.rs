//! Tests scientifiques (campagne) : table des fonctions + classification +
//! réduction des puissances + propriétés de bout en bout.
//!
//! Notes (alignées avec l'état du noyau) :
//! - La trigonométrie travaille en DEGRÉS (contrat des touches sin/cos/tan).
//! - Les préconditions explicites (inverse de 0, tan aux asymptotes,
//!   ln/log de x ≤ 0, factorielle négative) court-circuitent AVANT tout
//!   calcul flottant ; les autres branches repassent quand même par la
//!   classification (un débordement peut encore produire ∞).
//! - 0/0 et 0%0 sont Indéterminé, jamais Indéfini, quel que soit
//!   l'espacement : le pré-contrôle scanne des jetons, pas des sous-chaînes.

use super::eval::evaluer_expression;
use super::fonctions::{appliquer, Fonction};
use super::jetons::{format_tokens, tokenize};
use super::puissance::reduire;
use super::verdict::Verdict;

const EPS: f64 = 1e-9;

fn nombre(expr: &str) -> f64 {
    match evaluer_expression(expr, '.') {
        Ok(Verdict::Nombre(v)) => v,
        autre => panic!("expr={expr:?} attendu Nombre, obtenu {autre:?}"),
    }
}

fn fn_nombre(f: Fonction, v: f64) -> f64 {
    match appliquer(f, v) {
        Verdict::Nombre(x) => x,
        autre => panic!("appliquer({f:?}, {v}) attendu Nombre, obtenu {autre:?}"),
    }
}

fn assert_proche(obtenu: f64, attendu: f64) {
    assert!(
        (obtenu - attendu).abs() <= EPS * attendu.abs().max(1.0),
        "obtenu={obtenu} attendu={attendu}"
    );
}

fn assert_fn_indefinie(f: Fonction, v: f64) {
    assert_eq!(
        appliquer(f, v),
        Verdict::Indefini,
        "appliquer({f:?}, {v}) devrait être Indéfini"
    );
}

/* ------------------------ Table des fonctions ------------------------ */

#[test]
fn sci_carre_et_racine() {
    assert_proche(fn_nombre(Fonction::Carre, 12.0), 144.0);
    assert_proche(fn_nombre(Fonction::Carre, -3.0), 9.0);

    assert_proche(fn_nombre(Fonction::RacineCarree, 9.0), 3.0);
    assert_proche(fn_nombre(Fonction::RacineCarree, 2.0), std::f64::consts::SQRT_2);

    // v < 0 : sqrt produit NaN, classé Indéfini en sortie
    assert_fn_indefinie(Fonction::RacineCarree, -4.0);
}

#[test]
fn sci_inverse() {
    assert_proche(fn_nombre(Fonction::Inverse, 4.0), 0.25);
    assert_proche(fn_nombre(Fonction::Inverse, -0.5), -2.0);

    // court-circuit explicite AVANT la division
    assert_fn_indefinie(Fonction::Inverse, 0.0);
}

#[test]
fn sci_factorielle() {
    assert_proche(fn_nombre(Fonction::Factorielle, 5.0), 120.0);
    assert_proche(fn_nombre(Fonction::Factorielle, 0.0), 1.0);

    // troncature vers zéro avant le produit : 4.9! = 4! = 24
    assert_proche(fn_nombre(Fonction::Factorielle, 4.9), 24.0);

    assert_fn_indefinie(Fonction::Factorielle, -1.0);

    // 171! déborde le double => Indéterminé (pas un gel)
    assert_eq!(appliquer(Fonction::Factorielle, 171.0), Verdict::Indetermine);
}

#[test]
fn sci_exponentielles() {
    assert_proche(fn_nombre(Fonction::Exp, 0.0), 1.0);
    assert_proche(fn_nombre(Fonction::Exp, 1.0), std::f64::consts::E);

    assert_proche(fn_nombre(Fonction::DixPuissance, 3.0), 1000.0);
    assert_proche(fn_nombre(Fonction::DixPuissance, -2.0), 0.01);

    // débordement flottant : classé, pas propagé en ∞ silencieux
    assert_eq!(appliquer(Fonction::Exp, 1000.0), Verdict::Indetermine);
    assert_eq!(appliquer(Fonction::DixPuissance, 400.0), Verdict::Indetermine);
}

#[test]
fn sci_trig_en_degres() {
    assert_proche(fn_nombre(Fonction::Sin, 30.0), 0.5);
    assert_proche(fn_nombre(Fonction::Cos, 60.0), 0.5);
    assert_proche(fn_nombre(Fonction::Tan, 45.0), 1.0);

    assert_proche(fn_nombre(Fonction::Sin, 0.0), 0.0);
    assert_proche(fn_nombre(Fonction::Cos, 0.0), 1.0);
}

#[test]
fn sci_tan_asymptotes() {
    // vraie asymptote verticale : 90° + k·180°
    assert_fn_indefinie(Fonction::Tan, 90.0);
    assert_fn_indefinie(Fonction::Tan, 270.0);
    assert_fn_indefinie(Fonction::Tan, -90.0);
    assert_fn_indefinie(Fonction::Tan, 450.0);

    // juste à côté de l'asymptote : un (très grand) nombre, pas un échec
    assert!(matches!(
        appliquer(Fonction::Tan, 89.999),
        Verdict::Nombre(v) if v > 1000.0
    ));
}

#[test]
fn sci_logarithmes() {
    assert_proche(fn_nombre(Fonction::Ln, std::f64::consts::E), 1.0);
    assert_proche(fn_nombre(Fonction::Log10, 1000.0), 3.0);

    // x ≤ 0 : Indéfini explicite (PAS le -∞/NaN du back-end flottant)
    assert_fn_indefinie(Fonction::Ln, 0.0);
    assert_fn_indefinie(Fonction::Ln, -1.0);
    assert_fn_indefinie(Fonction::Log10, 0.0);
    assert_fn_indefinie(Fonction::Log10, -0.001);
}

#[test]
fn sci_pourcent_et_negation() {
    assert_proche(fn_nombre(Fonction::Pourcent, 50.0), 0.5);
    assert_proche(fn_nombre(Fonction::Pourcent, 0.0), 0.0);

    assert_proche(fn_nombre(Fonction::Negation, 5.0), -5.0);
    assert_proche(fn_nombre(Fonction::Negation, -5.0), 5.0);
}

/* ------------------------ Réduction des puissances ------------------------ */

fn reduire_texte(expr: &str) -> String {
    let toks = tokenize(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    format_tokens(&reduire(toks))
}

#[test]
fn sci_puissance_simple() {
    assert_eq!(reduire_texte("2 ^ 3"), "8");
}

#[test]
fn sci_puissance_chaine_sans_caret_restant() {
    // collapse complet gauche->droite
    let txt = reduire_texte("2 ^ 0.5 ^ 2");
    assert!(!txt.contains('^'), "caret restant: {txt}");
}

#[test]
fn sci_puissance_signes() {
    assert_eq!(reduire_texte("2 ^ -2"), "0.25");
    assert_eq!(reduire_texte("-2 ^ 2"), "4"); // le signe appartient à la base
}

#[test]
fn sci_puissance_nan_porteur() {
    // base négative, exposant fractionnaire : littéral NaN conservé
    assert_eq!(reduire_texte("-8 ^ 0.5"), "NaN");
}

#[test]
fn sci_puissance_moins_binaire_non_avale() {
    // le '-' entre deux nombres est une soustraction, pas un signe
    assert_eq!(reduire_texte("5 - 2 ^ 3"), "5 - 8");
}

#[test]
fn sci_puissance_forme_non_conforme_laissee() {
    // '^' collé à une parenthèse : laissé en place (rejeté plus loin)
    let txt = reduire_texte("( 2 + 1 ) ^ 2");
    assert!(txt.contains('^'));
}

/* ------------------------ Propriétés de bout en bout ------------------------ */

#[test]
fn sci_division_generique_proche_du_quotient() {
    // quelques paires (a, b≠0) représentatives, epsilon près
    let paires = [
        (1.0, 3.0),
        (-7.5, 2.5),
        (10.0, -4.0),
        (0.1, 0.3),
        (1e10, 7.0),
    ];
    for (a, b) in paires {
        let v = nombre(&format!("{a} / {b}"));
        assert_proche(v, a / b);
    }
}

#[test]
fn sci_chaine_complete_avec_fonctions() {
    // √(144) = 12, puis 12 + 3 = 15
    let r = fn_nombre(Fonction::RacineCarree, 144.0);
    assert_proche(nombre(&format!("{r} + 3")), 15.0);
}

#[test]
fn sci_indetermine_prioritaire_sur_indefini() {
    // 0/0 est détecté comme forme indéterminée AVANT le test « /0 »
    assert_eq!(
        evaluer_expression("0 / 0", '.').unwrap(),
        Verdict::Indetermine
    );
    assert_eq!(
        evaluer_expression("5 / 0", '.').unwrap(),
        Verdict::Indefini
    );
}
