// src/noyau/pourcent.rs
//
// Réécriture textuelle du pourcent : "n%" -> "(n/100)".
//
// Règles:
// - n = chiffres, optionnellement '.' + chiffres
// - le '%' doit suivre immédiatement n (pas d’espace)
// - balayage gauche -> droite, sans chevauchement, premier départ possible gagne
// - aucune lecture du contexte (opérateurs, parenthèses) : "A + B%" -> "A + (B/100)"
// - un '%' orphelin reste tel quel (l’analyse le refusera)

/// Remplace chaque `n%` par `(n/100)`.
pub fn desugar_percent(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 8);
    let mut i: usize = 0;

    while i < chars.len() {
        match nombre_pourcent(&chars, i) {
            Some(p) => {
                // chars[i..p] = nombre, chars[p] = '%'
                out.push('(');
                out.extend(&chars[i..p]);
                out.push_str("/100)");
                i = p + 1;
            }
            None => {
                // aucun départ dans la même suite de chiffres ne peut réussir :
                // elle finit au même endroit. La partie décimale, elle, sera revue.
                let suite = fin_chiffres(&chars, i).max(i + 1);
                out.extend(&chars[i..suite]);
                i = suite;
            }
        }
    }

    out
}

/// Si un `n%` commence exactement en `i`, renvoie l’indice du '%'.
///
/// La partie décimale n’est prise que si elle est suivie du '%'
/// ("1.5.2%" : rien en 0, mais "5.2%" en 2).
fn nombre_pourcent(chars: &[char], i: usize) -> Option<usize> {
    let entier = fin_chiffres(chars, i);
    if entier == i {
        return None;
    }

    match chars.get(entier) {
        Some('%') => Some(entier),
        Some('.') => {
            let frac = fin_chiffres(chars, entier + 1);
            if frac > entier + 1 && chars.get(frac) == Some(&'%') {
                Some(frac)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn fin_chiffres(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    i
}
