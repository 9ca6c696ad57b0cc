//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : toute sortie est un nombre, "" ou une sentinelle
//!   (jamais de panique, jamais de texte non réduit qui fuit)

use std::time::{Duration, Instant};

use super::erreur::est_sentinelle;
use super::evaluer;

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

/* ------------------------ Helpers fuzz ------------------------ */

fn sortie_conforme(s: &str) -> bool {
    s.is_empty() || est_sentinelle(s) || matches!(s.parse::<f64>(), Ok(v) if v.is_finite())
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let n = rng.pick(100);
    if rng.coin() {
        let d = rng.pick(100);
        format!("{n}.{d}")
    } else {
        format!("{n}")
    }
}

fn gen_op(rng: &mut Rng) -> char {
    match rng.pick(5) {
        0 => '+',
        1 => '-',
        2 => '*',
        3 => '/',
        _ => '^',
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(6) {
        0 => gen_nombre(rng),
        1 => format!("({})", gen_expr(rng, depth - 1)),
        2 => format!("-({})", gen_expr(rng, depth - 1)),
        // juxtaposition : multiplication implicite
        3 => format!(
            "({})({})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        _ => format!(
            "{}{}{}",
            gen_expr(rng, depth - 1),
            gen_op(rng),
            gen_expr(rng, depth - 1)
        ),
    }
}

/// Mutile une expression valide : troncature, caractère parasite, doublage d'op.
fn mutile(rng: &mut Rng, expr: &str) -> String {
    let mut s: Vec<char> = expr.chars().collect();
    if s.is_empty() {
        return String::new();
    }

    match rng.pick(3) {
        0 => {
            // troncature
            let coupe = rng.pick(s.len() as u32) as usize;
            s.truncate(coupe);
        }
        1 => {
            // caractère parasite
            let pos = rng.pick(s.len() as u32) as usize;
            let parasite = ['e', '&', '.', '-', '(', ')'][rng.pick(6) as usize];
            s.insert(pos, parasite);
        }
        _ => {
            // doublage du caractère en place
            let pos = rng.pick(s.len() as u32) as usize;
            let c = s[pos];
            s.insert(pos, c);
        }
    }

    s.into_iter().collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_totalite_et_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut sorties_a = Vec::new();
    for passe in 0..2 {
        let mut rng = Rng::new(0xC0FFEE_u64);
        let mut sorties = Vec::new();

        for _ in 0..200 {
            budget(t0, max);

            let expr = gen_expr(&mut rng, 4);
            let r = evaluer(&expr);
            assert!(sortie_conforme(&r), "entrée={expr:?} sortie={r:?}");
            sorties.push(r);
        }

        if passe == 0 {
            sorties_a = sorties;
        } else {
            assert_eq!(sorties_a, sorties, "le moteur doit être déterministe");
        }
    }
}

#[test]
fn fuzz_safe_entrees_mutilees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut vues_sentinelles = 0usize;
    for _ in 0..200 {
        budget(t0, max);

        let base = gen_expr(&mut rng, 3);
        let expr = mutile(&mut rng, &base);
        let r = evaluer(&expr);
        assert!(sortie_conforme(&r), "entrée={expr:?} sortie={r:?}");

        if est_sentinelle(&r) {
            vues_sentinelles += 1;
        }
    }

    // la mutilation doit produire un mélange succès/échecs, sinon rien n'est balayé
    assert!(vues_sentinelles > 10, "fuzz trop “sage”: {vues_sentinelles}");
}

#[test]
fn fuzz_safe_profondeur_bornee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // imbrication pure : la profondeur de récursion suit la profondeur de
    // parenthésage, on reste volontairement bas
    let mut rng = Rng::new(0xFEED_u64);
    for _ in 0..40 {
        budget(t0, max);

        let niveaux = 1 + rng.pick(30) as usize;
        let mut expr = gen_nombre(&mut rng);
        for _ in 0..niveaux {
            expr = format!("({expr})");
        }

        let r = evaluer(&expr);
        assert!(sortie_conforme(&r), "entrée={expr:?} sortie={r:?}");
    }
}
