// src/noyau/nettoyage.rs
//
// Nettoyage de l’entrée brute.
// - alphabet permis : chiffres, + - * / ( ) . % et blancs
// - glyphes alternatifs : × -> *, ÷ -> /
// - tout autre caractère => InvalidCharacter (position = indice de caractère)

use super::erreurs::ErreurCalcul;

/// Vrai si `c` appartient à l’alphabet canonique (après normalisation).
pub fn est_permis(c: char) -> bool {
    c.is_ascii_digit()
        || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.' | '%')
        || c.is_whitespace()
}

/// Valide et normalise une entrée brute.
///
/// Une chaîne vide reste vide. La substitution est 1:1 en caractères.
pub fn sanitize(raw: &str) -> Result<String, ErreurCalcul> {
    let mut out = String::with_capacity(raw.len());

    for (position, c) in raw.chars().enumerate() {
        let canon = match c {
            '×' => '*',
            '÷' => '/',
            c if est_permis(c) => c,
            caractere => {
                return Err(ErreurCalcul::InvalidCharacter {
                    caractere,
                    position,
                })
            }
        };
        out.push(canon);
    }

    Ok(out)
}
