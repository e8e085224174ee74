// src/noyau/puissance.rs
//
// Pré-réduction des puissances : l'évaluateur générique (rpn.rs) n'a pas
// d'opérateur exposant natif, donc chaque sous-expression
// `<nombre-signé> ^ <nombre-signé>` est remplacée par son résultat AVANT
// l'évaluation, en boucle, collapse gauche→droite (2 ^ 0.5 ^ 2 se réduit
// entièrement, sans '^' restant).
//
// Cas NaN : base négative + exposant fractionnaire => powf renvoie NaN, le
// littéral reste dans le flux et les étages suivants le classent Indéfini.
//
// Cas non conforme : un '^' collé à une parenthèse ne matche jamais la
// forme à deux opérandes numériques ; il est laissé en place et rejeté par
// rpn.rs comme erreur de syntaxe (terminaison garantie : chaque passe
// retire un '^', la boucle s'arrête dès qu'aucun ne matche).

use super::jetons::Tok;

/// Réduit toutes les occurrences `a ^ b` du flux de jetons.
pub fn reduire(mut tokens: Vec<Tok>) -> Vec<Tok> {
    loop {
        let Some((debut, fin, a, b)) = premier_motif(&tokens) else {
            return tokens;
        };
        let val = a.powf(b);
        tokens.splice(debut..fin, [Tok::Num(val)]);
    }
}

/// Cherche le motif le plus à gauche : [signe?] Num ^ [signe?] Num.
/// Renvoie (début inclus, fin exclue, base, exposant).
fn premier_motif(tokens: &[Tok]) -> Option<(usize, usize, f64, f64)> {
    for i in 0..tokens.len() {
        if !matches!(tokens[i], Tok::Caret) {
            continue;
        }

        // opérande droit : Num, ou Minus Num (signe unique)
        let (b, fin) = match (tokens.get(i + 1), tokens.get(i + 2)) {
            (Some(Tok::Num(v)), _) => (*v, i + 2),
            (Some(Tok::Minus), Some(Tok::Num(v))) => (-v, i + 3),
            _ => continue,
        };

        // opérande gauche : Num, précédé d'un Minus UNAIRE éventuel
        let Some(j) = i.checked_sub(1) else { continue };
        let Some(&Tok::Num(mut a)) = tokens.get(j) else {
            continue;
        };
        let mut debut = j;

        if j >= 1 && matches!(tokens[j - 1], Tok::Minus) && minus_est_unaire(tokens, j - 1) {
            a = -a;
            debut = j - 1;
        }

        return Some((debut, fin, a, b));
    }
    None
}

/// Un '-' est un signe (et non une soustraction) si rien ne le précède,
/// ou si ce qui le précède n'est pas une valeur fermée (Num ou ')').
fn minus_est_unaire(tokens: &[Tok], pos: usize) -> bool {
    match pos.checked_sub(1).and_then(|k| tokens.get(k)) {
        None => true,
        Some(Tok::Num(_)) | Some(Tok::RPar) => false,
        Some(_) => true,
    }
}
