//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - oracle : chaque expression générée porte sa valeur attendue (mêmes opérations f64)
//! - invariant clé : une entrée dans l’alphabet ne donne jamais InvalidCharacter

use std::time::{Duration, Instant};

use super::analyse::PROFONDEUR_MAX;
use super::{eval_expression, ErreurCalcul};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers ------------------------ */

/// Égalité bit à bit, NaN == NaN.
fn meme_f64(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

fn blanc(rng: &mut Rng) -> &'static str {
    if rng.pick(4) == 0 {
        " "
    } else {
        ""
    }
}

/* ------------------------ Génération avec oracle (bornée) ------------------------ */

fn gen_atome(rng: &mut Rng) -> (String, f64) {
    match rng.pick(4) {
        0 => {
            let n = rng.pick(100);
            (format!("{n}"), n as f64)
        }
        1 => {
            let txt = format!("{}.{:02}", rng.pick(10), rng.pick(100));
            let v = txt.parse::<f64>().unwrap();
            (txt, v)
        }
        2 => {
            // pourcent : n% == n/100
            let n = rng.pick(300);
            (format!("{n}%"), n as f64 / 100.0)
        }
        _ => (String::from("0"), 0.0),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 {
        return gen_atome(rng);
    }

    match rng.pick(7) {
        0 => gen_atome(rng),
        1 => {
            let (a, va) = gen_expr(rng, depth - 1);
            (format!("-({a})"), -va)
        }
        _ => {
            let (a, va) = gen_expr(rng, depth - 1);
            let (b, vb) = gen_expr(rng, depth - 1);
            let (op, v) = match rng.pick(4) {
                0 => ("+", va + vb),
                1 => ("-", va - vb),
                2 => (if rng.coin() { "*" } else { "×" }, va * vb),
                _ => (if rng.coin() { "/" } else { "÷" }, va / vb),
            };
            let (g, d) = (blanc(rng), blanc(rng));
            (format!("({a}{g}{op}{d}{b})"), v)
        }
    }
}

fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: [char; 17] = [
        '0', '1', '2', '5', '9', '+', '-', '*', '/', '(', ')', '.', '%', ' ', '×', '÷', '\t',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_oracle_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 5);
        let v = eval_expression(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));

        assert!(
            meme_f64(v, attendu),
            "expr={expr:?} obtenu={v} attendu={attendu}"
        );
    }
}

#[test]
fn fuzz_safe_bruit_dans_l_alphabet() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for i in 0..2000 {
        budget(t0, max);

        let expr = gen_bruit(&mut rng, 1 + i % 12);
        let r1 = eval_expression(&expr);
        let r2 = eval_expression(&expr);

        // déterminisme
        match (&r1, &r2) {
            (Ok(a), Ok(b)) => assert!(meme_f64(*a, *b), "expr={expr:?}"),
            (a, b) => assert_eq!(a, b, "expr={expr:?}"),
        }

        match r1 {
            Ok(_) => seen_ok += 1,
            Err(ErreurCalcul::InvalidCharacter { .. }) => {
                panic!("alphabet refusé: expr={expr:?}")
            }
            Err(_) => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_imbrication_profonde_sans_pile() {
    let t0 = Instant::now();
    let max = Duration::from_secs(1);

    for n in [PROFONDEUR_MAX + 1, 10_000, 100_000] {
        let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
        assert!(matches!(
            eval_expression(&expr),
            Err(ErreurCalcul::Syntax { .. })
        ));
        budget(t0, max);
    }
}
