// src/noyau/erreurs.rs
//
// Erreurs du noyau.
// - InvalidCharacter : levée par le nettoyage (alphabet interdit)
// - Syntax           : levée par les jetons ou l’analyse (grammaire)
// - EmptyExpression  : levée par l’évaluation (entrée vide / blanche)
//
// Les positions sont des indices de CARACTÈRES (pas d’octets).

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("caractère invalide '{caractere}' (position {position})")]
    InvalidCharacter { caractere: char, position: usize },

    #[error("erreur de syntaxe (position {position}) : {message}")]
    Syntax { position: usize, message: String },

    #[error("Entrée vide")]
    EmptyExpression,
}

impl ErreurCalcul {
    pub(crate) fn syntaxe(position: usize, message: impl Into<String>) -> Self {
        ErreurCalcul::Syntax {
            position,
            message: message.into(),
        }
    }

    /// Vrai si rien n’a été saisi (pas une “vraie” faute pendant la frappe).
    pub fn est_vide(&self) -> bool {
        matches!(self, ErreurCalcul::EmptyExpression)
    }
}
