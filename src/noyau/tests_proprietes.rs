//! Propriétés du noyau (proptest).
//!
//! - nettoyage : alphabet accepté tel quel (longueur conservée), tout le reste refusé
//! - nettoyage idempotent
//! - pourcent : n% -> (n/100), no-op sans '%'
//! - évaluation idempotente
//! - bascule de signe involutive sur un nombre final (hors '-' binaire)
//! - bascule sur "a-b" : le '-' collé à b est pris comme son signe

use proptest::prelude::*;

use super::nettoyage::est_permis;
use super::{desugar_percent, evaluate, sanitize, toggle_sign, ErreurCalcul};

fn alphabet() -> impl Strategy<Value = String> {
    "[0-9+*/().% \t×÷-]{0,40}".prop_map(|s| s.to_string())
}

fn etranger() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("hors alphabet", |c| !est_permis(*c) && *c != '×' && *c != '÷')
}

fn nombre() -> impl Strategy<Value = String> {
    "[0-9]{1,6}(\\.[0-9]{1,4})?".prop_map(|s| s.to_string())
}

proptest! {
    #[test]
    fn nettoyage_accepte_l_alphabet(s in alphabet()) {
        let propre = sanitize(&s).unwrap();
        prop_assert_eq!(propre.chars().count(), s.chars().count());
        prop_assert!(propre.chars().all(est_permis));
    }

    #[test]
    fn nettoyage_refuse_le_reste(avant in alphabet(), c in etranger(), apres in alphabet()) {
        let s = format!("{avant}{c}{apres}");
        prop_assert_eq!(
            sanitize(&s),
            Err(ErreurCalcul::InvalidCharacter {
                caractere: c,
                position: avant.chars().count(),
            })
        );
    }

    #[test]
    fn nettoyage_idempotent(s in alphabet()) {
        let une = sanitize(&s).unwrap();
        let deux = sanitize(&une).unwrap();
        prop_assert_eq!(une, deux);
    }

    #[test]
    fn pourcent_local(n in nombre(), reste in "[+*/-][0-9]{1,3}") {
        prop_assert_eq!(desugar_percent(&format!("{n}%")), format!("({n}/100)"));
        prop_assert_eq!(
            desugar_percent(&format!("{n}%{reste}")),
            format!("({n}/100){reste}")
        );
    }

    #[test]
    fn pourcent_absent_no_op(s in "[0-9+*/(). -]{0,40}") {
        prop_assert_eq!(desugar_percent(&s), s);
    }

    #[test]
    fn evaluation_idempotente(s in alphabet()) {
        let propre = desugar_percent(&sanitize(&s).unwrap());
        match (evaluate(&propre), evaluate(&propre)) {
            (Ok(a), Ok(b)) => prop_assert!((a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()),
            (a, b) => prop_assert_eq!(a, b),
        }
    }

    #[test]
    fn bascule_involutive(
        prefixe in "([0-9]{1,3}[+*/]){0,4}",
        signe in "-?",
        n in nombre(),
    ) {
        let s = format!("{prefixe}{signe}{n}");
        let une = toggle_sign(&s);
        prop_assert_ne!(&une, &s);
        prop_assert_eq!(toggle_sign(&une), s);
    }

    #[test]
    fn bascule_inverse_la_valeur(
        a in 0u32..1000,
        op in "[+*/]",
        b in 1u32..1000,
    ) {
        let s = format!("{a}{op}{b}");
        let v = evaluate(&s).unwrap();
        let w = evaluate(&toggle_sign(&s)).unwrap();
        let attendu = match op.as_str() {
            "+" => a as f64 - b as f64,
            "*" => -(a as f64 * b as f64),
            _ => -(a as f64 / b as f64),
        };
        prop_assert_eq!(w.to_bits(), attendu.to_bits(), "s={} v={}", s, v);
    }

    #[test]
    fn bascule_moins_binaire_litterale(a in 0u32..1000, b in 0u32..1000) {
        prop_assert_eq!(toggle_sign(&format!("{a}-{b}")), format!("{a}{b}"));
        prop_assert_eq!(toggle_sign(&format!("{a} -{b}")), format!("{a} {b}"));
    }
}
