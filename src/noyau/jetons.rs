// src/noyau/jetons.rs

/// Jetons de la forme canonique (ASCII, point décimal).
#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret, // ^ — réduit par puissance.rs avant l'évaluation générique

    LPar,
    RPar,
}

/// Normalise une chaîne d'affichage vers la forme canonique :
/// - glyphes visuels  ×  ÷  –  →  *  /  -
/// - séparateur décimal local (',' ou autre) → '.'
///
/// La forme canonique est la SEULE entrée de l'évaluation ; l'affichage
/// n'est jamais parsé directement.
pub fn normaliser(s: &str, separateur: char) -> String {
    s.chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '–' | '−' => '-',
            ',' => '.',
            c if c == separateur => '.',
            c => c,
        })
        .collect()
}

/// Tokenize une chaîne canonique en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5)
/// - le littéral "NaN" (porteur d'indéfini injecté par la pré-réduction ^)
/// - opérateurs + - * / % ^
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, String> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '%' => {
                out.push(Tok::Percent);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Caret);
                i += 1;
                continue;
            }
            _ => {}
        }

        // "NaN" / "nan" : littéral indéfini (sortie possible de puissance.rs)
        if c == 'N' || c == 'n' {
            let reste: String = chars[i..].iter().take(3).collect();
            if reste.eq_ignore_ascii_case("nan") {
                out.push(Tok::Num(f64::NAN));
                i += 3;
                continue;
            }
            return Err(format!("caractère inattendu: '{c}'"));
        }

        // Nombre décimal : chiffres, un point au plus (".5" accepté)
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point_vu = false;

            while i < chars.len() {
                let d = chars[i];
                if d.is_ascii_digit() {
                    i += 1;
                } else if d == '.' && !point_vu {
                    point_vu = true;
                    i += 1;
                } else {
                    break;
                }
            }

            let lit: String = chars[start..i].iter().collect();
            if lit == "." {
                return Err("nombre invalide: '.'".into());
            }
            let v: f64 = lit.parse().map_err(|_| format!("nombre invalide: '{lit}'"))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}

/// Format utilitaire (debug/tests) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => {
                if v.is_nan() {
                    "NaN".to_string()
                } else {
                    format!("{v}")
                }
            }
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Percent => "%".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
