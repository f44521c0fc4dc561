// src/app/affichage.rs
//
// Affichage d’un f64 (présentation seulement, hors noyau).
// - arrondi à `chiffres` chiffres significatifs, zéros finaux retirés
// - "-0" affiché "0"
// - notation exposant hors de [1e-6, 1e21) : "1e+21", "1.5e-7"
// - non fini (inf, NaN) => chaîne vide (rien à montrer)

/// Chiffres significatifs par défaut.
pub const CHIFFRES_DEFAUT: usize = 12;

/// Au-delà, f64 n’a plus rien à dire.
pub const CHIFFRES_MAX: usize = 17;

pub fn formater_nombre(n: f64, chiffres: usize) -> String {
    if !n.is_finite() {
        return String::new();
    }

    let chiffres = chiffres.clamp(1, CHIFFRES_MAX);
    let arrondi = format!("{:.*e}", chiffres - 1, n)
        .parse::<f64>()
        .unwrap_or(n);

    if arrondi == 0.0 {
        return "0".to_string();
    }

    let a = arrondi.abs();
    if !(1e-6..1e21).contains(&a) {
        return notation_exposant(arrondi);
    }

    format!("{arrondi}")
}

fn notation_exposant(x: f64) -> String {
    let s = format!("{x:e}");
    match s.split_once('e') {
        Some((mantisse, exposant)) if !exposant.starts_with('-') => {
            format!("{mantisse}e+{exposant}")
        }
        _ => s,
    }
}
