// src/noyau/analyse.rs
//
// Descente récursive avec évaluation directe (pas d’AST).
//
//   expr    := term (('+' | '-') term)*
//   term    := unary (('*' | '/') unary)*
//   unary   := '-' unary | primary
//   primary := NUMBER | '(' expr ')'
//
// Règles:
// - gauche-associatif : 8-3-2 = 3, 8/4/2 = 1
// - chaînes binaires et moins unaires en boucle (aucune récursion)
// - seule la parenthèse récurse : profondeur bornée par PROFONDEUR_MAX
// - pas de multiplication implicite : "2(3)" est refusé
// - division par zéro : IEEE-754 (inf / -inf / NaN), jamais une erreur ici

use super::erreurs::ErreurCalcul;
use super::jetons::{Jeton, Tok};

/// Garde-fou : imbrication maximale de parenthèses (anti débordement de pile).
pub const PROFONDEUR_MAX: usize = 256;

/// Analyse et évalue une suite de jetons.
///
/// `fin` = longueur (en caractères) de la chaîne source, pour situer
/// les erreurs “en fin d’expression”.
pub fn analyser(jetons: &[Jeton], fin: usize) -> Result<f64, ErreurCalcul> {
    let mut a = Analyseur {
        jetons,
        i: 0,
        profondeur: 0,
        fin,
    };

    let v = a.expr()?;

    // Tout doit être consommé
    if let Some(j) = a.courant() {
        let message = match j.tok {
            Tok::RPar => "parenthèse fermante sans ouvrante",
            Tok::Num(_) | Tok::LPar => {
                "opérateur manquant (multiplication implicite interdite, utiliser '*')"
            }
            _ => "jeton inattendu",
        };
        return Err(ErreurCalcul::syntaxe(j.pos, message));
    }

    Ok(v)
}

struct Analyseur<'a> {
    jetons: &'a [Jeton],
    i: usize,
    profondeur: usize,
    fin: usize,
}

impl Analyseur<'_> {
    fn courant(&self) -> Option<Jeton> {
        self.jetons.get(self.i).copied()
    }

    fn voir(&self) -> Option<Tok> {
        self.courant().map(|j| j.tok)
    }

    fn expr(&mut self) -> Result<f64, ErreurCalcul> {
        let mut acc = self.term()?;

        loop {
            match self.voir() {
                Some(Tok::Plus) => {
                    self.i += 1;
                    acc += self.term()?;
                }
                Some(Tok::Minus) => {
                    self.i += 1;
                    acc -= self.term()?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn term(&mut self) -> Result<f64, ErreurCalcul> {
        let mut acc = self.unary()?;

        loop {
            match self.voir() {
                Some(Tok::Star) => {
                    self.i += 1;
                    acc *= self.unary()?;
                }
                Some(Tok::Slash) => {
                    self.i += 1;
                    acc /= self.unary()?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn unary(&mut self) -> Result<f64, ErreurCalcul> {
        // '-' unary : une parité suffit (--x = x)
        let mut negatif = false;
        while let Some(Tok::Minus) = self.voir() {
            negatif = !negatif;
            self.i += 1;
        }

        let v = self.primary()?;
        Ok(if negatif { -v } else { v })
    }

    fn primary(&mut self) -> Result<f64, ErreurCalcul> {
        let Some(j) = self.courant() else {
            return Err(ErreurCalcul::syntaxe(
                self.fin,
                "opérande manquant en fin d’expression",
            ));
        };

        match j.tok {
            Tok::Num(v) => {
                self.i += 1;
                Ok(v)
            }

            Tok::LPar => {
                if self.profondeur >= PROFONDEUR_MAX {
                    return Err(ErreurCalcul::syntaxe(
                        j.pos,
                        format!("imbrication trop profonde (max {PROFONDEUR_MAX})"),
                    ));
                }

                self.i += 1;
                self.profondeur += 1;
                let v = self.expr()?;
                self.profondeur -= 1;

                match self.voir() {
                    Some(Tok::RPar) => {
                        self.i += 1;
                        Ok(v)
                    }
                    _ => Err(ErreurCalcul::syntaxe(j.pos, "parenthèse non fermée")),
                }
            }

            Tok::RPar => Err(ErreurCalcul::syntaxe(
                j.pos,
                "opérande manquant avant ')'",
            )),

            op @ (Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash) => Err(
                ErreurCalcul::syntaxe(j.pos, format!("opérande manquant avant '{op}'")),
            ),
        }
    }
}
