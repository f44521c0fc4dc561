//! Noyau arithmétique (sans état)
//!
//! Organisation interne :
//! - erreurs.rs   : ErreurCalcul (caractère invalide / syntaxe / entrée vide)
//! - nettoyage.rs : alphabet permis + glyphes × ÷
//! - pourcent.rs  : réécriture "n%" -> "(n/100)"
//! - jetons.rs    : tokenisation
//! - analyse.rs   : descente récursive + évaluation f64
//! - eval.rs      : pipeline complet
//! - signe.rs     : bascule de signe (touche ±)

pub mod analyse;
pub mod erreurs;
pub mod eval;
pub mod jetons;
pub mod nettoyage;
pub mod pourcent;
pub mod signe;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurCalcul;
pub use eval::{eval_expression, evaluate};
pub use nettoyage::sanitize;
pub use pourcent::desugar_percent;
pub use signe::toggle_sign;
