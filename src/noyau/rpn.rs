// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> f64
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer sur une pile de doubles
//
// Règles:
// - Précédence standard : * / % au-dessus de + - ; associativité gauche.
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur, on injecte 0 :
//      "-x" => "0 x -"
// - Un '^' qui atteint cet étage n'a pas été réduit par puissance.rs :
//   erreur de syntaxe (l'évaluateur générique n'a pas d'exposant natif).
// - La division par un zéro LITTÉRAL n'arrive jamais ici (interceptée par
//   verdict.rs avant l'évaluation) ; un dénominateur CALCULÉ nul produit
//   légitimement ±∞/NaN, classés en aval.

use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(12), Plus, Num(3), Star, Num(2)]
///   rpn:    [Num(12), Num(3), Num(2), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, String> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                let mut ouvrante_vue = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante_vue = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante_vue {
                    return Err("parenthèse fermante en trop".into());
                }
                prev_was_value = true;
            }

            Tok::Plus | Tok::Star | Tok::Slash | Tok::Percent => {
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    // associativité gauche : on dépile à précédence égale
                    if precedence(top) >= precedence(&tok) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Minus => {
                if !prev_was_value {
                    // moins unaire : injecte 0 et s'empile SANS dépiler, pour
                    // rester collé à son opérande (sinon "5 * -3" sortirait
                    // le '*' trop tôt et donnerait (5*0)-3)
                    out.push(Tok::Num(0.0));
                    ops.push(Tok::Minus);
                    prev_was_value = false;
                    continue;
                }

                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    if precedence(top) >= precedence(&Tok::Minus) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(Tok::Minus);
                prev_was_value = false;
            }

            Tok::Caret => {
                return Err("'^' mal placé (forme nombre ^ nombre attendue)".into());
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err("parenthèses non fermées".into());
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur une pile de doubles.
///
/// Rejette tout ce qui survivrait à l'accumulation : opérateurs
/// consécutifs, opérateur sans opérande, expression vide.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, String> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(*v),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent => {
                let b = st.pop().ok_or("expression invalide")?;
                let a = st.pop().ok_or("expression invalide")?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => a / b,
                    Tok::Percent => a % b,
                    _ => unreachable!(),
                };

                st.push(v);
            }

            Tok::Caret | Tok::LPar | Tok::RPar => {
                return Err("jeton inattendu en RPN".into());
            }
        }
    }

    if st.len() != 1 {
        return Err("expression invalide".into());
    }
    Ok(st.pop().unwrap())
}
