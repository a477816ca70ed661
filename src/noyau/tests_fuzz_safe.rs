//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - référence : chaque expression générée porte sa valeur f64 calculée dans le même ordre
//! - invariant clé : aucune entrée ne fait paniquer `evaluer`

use std::time::{Duration, Instant};

use super::erreur::GenreErreur;
use super::evaluer;
use super::format::formater_resultat;

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
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Littéral + sa valeur. Inclut 0 (divisions par zéro voulues) et les formes "2." / ".5".
fn gen_litteral(rng: &mut Rng) -> (String, f64) {
    let s = match rng.pick(10) {
        0 => "0",
        1 => "1",
        2 => "2",
        3 => "3",
        4 => "10",
        5 => "4.5",
        6 => "0.1",
        7 => "2.",
        8 => ".5",
        _ => "38",
    };
    let v = s.parse::<f64>().unwrap_or_else(|e| panic!("littéral {s:?}: {e}"));
    (s.to_string(), v)
}

/// Expression complètement parenthésée : l’ordre des opérations est celui de la référence.
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 {
        return gen_litteral(rng);
    }

    match rng.pick(5) {
        0 => gen_litteral(rng),
        k => {
            let (sa, a) = gen_expr(rng, depth - 1);
            let (sb, b) = gen_expr(rng, depth - 1);
            match k {
                1 => (format!("({sa}+{sb})"), a + b),
                2 => (format!("({sa}-{sb})"), a - b),
                3 => (format!("({sa}*{sb})"), a * b),
                _ => (format!("({sa}/{sb})"), a / b),
            }
        }
    }
}

/// Soupe de caractères (alphabet + quelques intrus).
fn gen_soupe(rng: &mut Rng) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '9', '.', '+', '-', '*', '/', '(', ')', ' ', ',', 'x',
    ];
    let n = rng.pick(12) as usize;
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_conforme_a_la_reference() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 5);

        match evaluer(&expr) {
            Ok(s) => {
                assert!(attendu.is_finite(), "expr={expr:?} => {s:?}");
                assert_eq!(s, formater_resultat(attendu), "expr={expr:?}");
                seen_ok += 1;
            }
            Err(e) => {
                assert_eq!(e.genre(), GenreErreur::Depassement, "expr={expr:?} err={e}");
                assert!(!attendu.is_finite(), "expr={expr:?}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut r1 = Rng::new(0xBADC0DE_u64);
    let mut r2 = Rng::new(0xBADC0DE_u64);

    for _ in 0..60 {
        let (e1, _) = gen_expr(&mut r1, 4);
        let (e2, _) = gen_expr(&mut r2, 4);
        assert_eq!(e1, e2);
        assert_eq!(evaluer(&e1), evaluer(&e2), "expr={e1:?}");
    }
}

#[test]
fn fuzz_safe_soupe_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..2000 {
        budget(t0, max);

        let s = gen_soupe(&mut rng);
        // Seule exigence : un résultat ou une erreur, jamais de panique.
        if let Ok(v) = evaluer(&s) {
            let x: f64 = v
                .parse()
                .unwrap_or_else(|e| panic!("sortie illisible {v:?} pour {s:?}: {e}"));
            assert!(x.is_finite(), "s={s:?}");
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_secs(1);

    let expr = somme_balancee("1", 800);
    let s = evaluer(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(s, "800");
}
