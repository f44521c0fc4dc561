//! Noyau — évaluation (pipeline réel)
//!
//! sanitize -> desugar_percent -> tokenize -> analyse (descente récursive) -> f64
//!
//! Remarque : les positions d’erreur de `evaluate` se rapportent à la chaîne
//! reçue (donc déjà réécrite par `desugar_percent` dans le pipeline complet).

use super::analyse::analyser;
use super::erreurs::ErreurCalcul;
use super::jetons::tokenize;
use super::nettoyage::sanitize;
use super::pourcent::desugar_percent;

/// Évalue une chaîne nettoyée et sans pourcent.
///
/// - vide / blancs seulement => `EmptyExpression`
/// - grammaire violée        => `Syntax`
/// - résultat non fini (inf, NaN) => `Ok`, c’est à l’appelant de trancher
pub fn evaluate(s: &str) -> Result<f64, ErreurCalcul> {
    if s.trim().is_empty() {
        return Err(ErreurCalcul::EmptyExpression);
    }

    let jetons = tokenize(s)?;
    analyser(&jetons, s.chars().count())
}

/// API publique : pipeline complet depuis une entrée brute.
pub fn eval_expression(raw: &str) -> Result<f64, ErreurCalcul> {
    let propre = sanitize(raw)?;
    evaluate(&desugar_percent(&propre))
}
