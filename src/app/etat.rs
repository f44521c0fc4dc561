//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’expression en cours de frappe, l’erreur visible et la
//! précision d’affichage, et appliquer les touches de la calculatrice.
//! Le noyau reste sans état : on lui passe l’expression entière à chaque calcul.
//!
//! Contrats :
//! - Aperçu : silencieux (aucune erreur montrée pendant la frappe).
//! - "=" : toute erreur, ou un résultat non fini, devient visible.

use crate::noyau::{self, ErreurCalcul};

use super::affichage::{formater_nombre, CHIFFRES_DEFAUT, CHIFFRES_MAX};

/// Une touche (bouton ou clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// chiffre, point, opérateur ou parenthèse
    Saisie(char),
    Pourcent,
    Signe,
    Clear,
    Retour,
    Egal,
}

impl Touche {
    /// Touches clavier reconnues : `0-9 + - * / ( ) . %` et `=`.
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        match c {
            '0'..='9' | '+' | '-' | '*' | '/' | '(' | ')' | '.' => Some(Touche::Saisie(c)),
            '%' => Some(Touche::Pourcent),
            '=' => Some(Touche::Egal),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub expr: String,

    // --- sortie ---
    pub erreur: String, // message visible après "=" (vide sinon)

    // --- paramètres ---
    pub chiffres: usize, // chiffres significatifs à l’affichage
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            expr: String::new(),
            erreur: String::new(),
            chiffres: CHIFFRES_DEFAUT,
        }
    }
}

impl AppCalc {
    pub fn appliquer(&mut self, touche: Touche) {
        match touche {
            Touche::Saisie(c) => self.saisir(c),
            Touche::Pourcent => self.pourcent(),
            Touche::Signe => self.basculer_signe(),
            Touche::Clear => self.clear(),
            Touche::Retour => self.effacer_dernier(),
            Touche::Egal => self.egal(),
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Ajoute un caractère. Pour '.', un seul point par opérande, et "0" devant
    /// un point qui ouvre l’opérande.
    pub fn saisir(&mut self, c: char) {
        if c == '.' {
            let dernier = dernier_operande(&self.expr);
            if dernier.contains('.') {
                return;
            }
            if dernier.is_empty() {
                self.expr.push('0');
            }
        }

        self.expr.push(c);
        self.erreur.clear();
    }

    pub fn pourcent(&mut self) {
        self.expr.push('%');
        self.erreur.clear();
    }

    pub fn basculer_signe(&mut self) {
        self.expr = noyau::toggle_sign(&self.expr);
        self.erreur.clear();
    }

    /// C : tout effacer (expression + erreur).
    pub fn clear(&mut self) {
        self.expr.clear();
        self.erreur.clear();
    }

    pub fn effacer_dernier(&mut self) {
        self.expr.pop();
        self.erreur.clear();
    }

    /// "=" : remplace l’expression par son résultat, ou la vide et montre l’erreur.
    pub fn egal(&mut self) {
        tracing::debug!(expr = %self.expr, "calcul demandé");

        match noyau::eval_expression(&self.expr) {
            Ok(v) if v.is_finite() => {
                let txt = formater_nombre(v, self.chiffres);
                tracing::info!(expr = %self.expr, resultat = %txt, "calcul terminé");
                self.expr = txt;
                self.erreur.clear();
            }
            Ok(v) => {
                tracing::warn!(expr = %self.expr, valeur = v, "résultat non fini");
                self.expr.clear();
                self.erreur = "Erreur : résultat non fini (division par zéro ?)".to_string();
            }
            Err(e) => {
                if !e.est_vide() {
                    tracing::warn!(expr = %self.expr, erreur = %e, "calcul impossible");
                }
                self.expr.clear();
                self.erreur = message_erreur(&e);
            }
        }
    }

    /* ------------------------ Lecture ------------------------ */

    /// Aperçu en direct : seulement si l’expression finit par un chiffre ou ')'.
    /// Toute erreur, ou une valeur non finie => pas d’aperçu.
    pub fn apercu(&self) -> String {
        let Ok(propre) = noyau::sanitize(&self.expr) else {
            return String::new();
        };
        if !propre.ends_with(|c: char| c.is_ascii_digit() || c == ')') {
            return String::new();
        }

        // pipeline à la main : le texte nettoyé sert d’abord au test de fin ci-dessus
        match noyau::evaluate(&noyau::desugar_percent(&propre)) {
            Ok(v) => formater_nombre(v, self.chiffres),
            Err(_) => String::new(),
        }
    }

    /// Texte de l’écran principal.
    pub fn affichage(&self) -> &str {
        if self.expr.is_empty() {
            "0"
        } else {
            &self.expr
        }
    }

    /// Garde-fou : borne la précision d’affichage.
    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.chiffres = chiffres.clamp(1, CHIFFRES_MAX);
    }
}

/// Texte après le dernier opérateur / blanc / parenthèse.
fn dernier_operande(expr: &str) -> &str {
    expr.rsplit(|c: char| matches!(c, '+' | '-' | '*' | '/' | '(' | ')') || c.is_whitespace())
        .next()
        .unwrap_or("")
}

fn message_erreur(e: &ErreurCalcul) -> String {
    match e {
        ErreurCalcul::EmptyExpression => "Entrée vide".to_string(),
        autre => format!("Erreur : {autre}"),
    }
}
