// src/noyau/format.rs
//
// Rendu texte :
// - formater_nombre : f64 -> littéral canonique (point décimal, sans zéros
//   traînants — le Display de f64 est déjà la forme la plus courte qui
//   round-trip, on s'appuie dessus)
// - projeter_affichage : forme canonique -> forme d'affichage (glyphes
//   × ÷ – et séparateur décimal local). Projection pure, jamais re-parsé.

/// f64 -> littéral canonique.
///
/// NaN/∞ ne doivent jamais arriver ici : ils sont classés en amont
/// (verdict.rs). On les rend quand même de façon stable pour le debug.
pub fn formater_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    // -0.0 s'affiche "0" (le signe n'apporte rien à l'utilisateur)
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Forme canonique -> forme d'affichage.
///
/// Substitutions (inverses exactes de jetons::normaliser) :
/// - '*' → '×', '/' → '÷', '-' → '–'
/// - '.' → séparateur local
///
/// Le tiret s'applique aussi au signe d'un nombre négatif : c'est voulu,
/// l'affichage n'est qu'une projection cosmétique.
pub fn projeter_affichage(canonique: &str, separateur: char) -> String {
    canonique
        .chars()
        .map(|c| match c {
            '*' => '×',
            '/' => '÷',
            '-' => '–',
            '.' => separateur,
            c => c,
        })
        .collect()
}
