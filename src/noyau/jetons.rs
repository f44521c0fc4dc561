// src/noyau/jetons.rs

use std::fmt;

use super::erreurs::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Jeton + position (indice de caractère) dans la chaîne analysée.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jeton {
    pub tok: Tok,
    pub pos: usize,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Plus => f.write_str("+"),
            Tok::Minus => f.write_str("-"),
            Tok::Star => f.write_str("*"),
            Tok::Slash => f.write_str("/"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Tokenize une chaîne (déjà nettoyée et sans pourcent) en jetons.
/// Supporte:
/// - nombres décimaux `chiffres ('.' chiffres)?` (pas de "5." ni de ".5")
/// - opérateurs + - * /
/// - parenthèses ( )
/// - blancs ignorés
///
/// Le moins unaire reste un opérateur : c’est l’analyse qui décide.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let tok = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(tok) = tok {
            out.push(Jeton { tok, pos: i });
            i += 1;
            continue;
        }

        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }

            if i < chars.len() && chars[i] == '.' {
                i += 1;
                let start_frac = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                if i == start_frac {
                    return Err(ErreurCalcul::syntaxe(
                        start_frac - 1,
                        "chiffre attendu après le point décimal",
                    ));
                }
            }

            let texte: String = chars[start..i].iter().collect();
            let v = texte
                .parse::<f64>()
                .map_err(|_| ErreurCalcul::syntaxe(start, format!("nombre invalide: {texte}")))?;

            out.push(Jeton {
                tok: Tok::Num(v),
                pos: start,
            });
            continue;
        }

        let message = match c {
            '.' => "point décimal inattendu".to_string(),
            '%' => "pourcent sans nombre devant".to_string(),
            _ => format!("caractère inattendu: '{c}'"),
        };
        return Err(ErreurCalcul::syntaxe(i, message));
    }

    Ok(out)
}
