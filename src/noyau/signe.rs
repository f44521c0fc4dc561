// src/noyau/signe.rs
//
// Bascule de signe (touche ±), purement textuelle.
// - cible : dernier nombre `-?chiffres(.chiffres)?` en fin de chaîne (blancs finaux ignorés)
// - trouvé  : on retire / ajoute son '-' ; les blancs finaux disparaissent
// - absent  : on ajoute '-' (début d’un nombre négatif)
//
// Le '-' collé au nombre lui appartient, quoi qu’il y ait devant : "5-3" -> "53".

/// Bascule le signe du dernier nombre de `expr`.
pub fn toggle_sign(expr: &str) -> String {
    let chars: Vec<char> = expr.chars().collect();

    let mut fin = chars.len();
    while fin > 0 && chars[fin - 1].is_whitespace() {
        fin -= 1;
    }

    let Some(debut) = debut_nombre_final(&chars[..fin]) else {
        let mut out = expr.to_string();
        out.push('-');
        return out;
    };

    let mut out = String::with_capacity(fin + 1);
    match debut.checked_sub(1).filter(|&signe| chars[signe] == '-') {
        Some(signe) => out.extend(&chars[..signe]),
        None => {
            out.extend(&chars[..debut]);
            out.push('-');
        }
    }
    out.extend(&chars[debut..fin]);
    out
}

/// Début du nombre qui termine `chars`, s’il y en a un.
fn debut_nombre_final(chars: &[char]) -> Option<usize> {
    let mut i = chars.len();
    while i > 0 && chars[i - 1].is_ascii_digit() {
        i -= 1;
    }
    if i == chars.len() {
        return None;
    }

    // partie entière devant un point : "12.5"
    if i >= 2 && chars[i - 1] == '.' && chars[i - 2].is_ascii_digit() {
        i -= 1;
        while i > 0 && chars[i - 1].is_ascii_digit() {
            i -= 1;
        }
    }

    Some(i)
}
