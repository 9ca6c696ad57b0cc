//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier les propriétés du moteur sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur)
//!
//! Propriétés couvertes :
//! - totalité : toute entrée donne un nombre, "" ou une sentinelle
//! - idempotence : un nombre s'évalue en lui-même
//! - ordre de réduction ^ > * > / > + (associativité gauche partout)
//! - arrondi 4 décimales à chaque étape binaire
//! - propagation des échecs depuis les groupes imbriqués

use std::time::{Duration, Instant};

use super::erreur::est_sentinelle;
use super::evaluer;

fn est_nombre(s: &str) -> bool {
    // "inf"/"NaN" se parsent en f64 : seul un nombre FINI est un numéral
    matches!(s.parse::<f64>(), Ok(v) if v.is_finite())
}

/// Sortie admise par le contrat frontière.
fn sortie_conforme(s: &str) -> bool {
    s.is_empty() || est_nombre(s) || est_sentinelle(s)
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Totalité ------------------------ */

#[test]
fn sci_totalite_entrees_tordues() {
    // aucune de ces entrées ne doit paniquer ni sortir du contrat
    let tordues = [
        "",
        "   ",
        "(",
        ")",
        ")(",
        "()",
        "+",
        "-",
        "--",
        "*",
        "^",
        "1+",
        "+1",
        "1++2",
        "1**2",
        "1^^2",
        "..",
        ".",
        "1..2",
        "1.2.3",
        "5+-",
        "((((",
        "1+2)",
        "(1+2",
        "2e",
        "2e+",
        "2e3",
        "abc",
        "1,5",
        "🙂",
        "1/0/0",
        "-",
        "-(",
    ];

    for e in tordues {
        let r = evaluer(e);
        assert!(sortie_conforme(&r), "entrée={e:?} sortie={r:?}");
    }
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn sci_idempotence_sur_les_nombres() {
    let entrees = ["7.5", "-2", "0", "0.3333", "1/3", "2+3*4", "-(1-4)*2"];

    for e in entrees {
        let r1 = evaluer(e);
        if est_nombre(&r1) {
            let r2 = evaluer(&r1);
            assert_eq!(r1, r2, "ré-évaluation de {e:?}");
        }
    }
}

/* ------------------------ Ordre de réduction ------------------------ */

#[test]
fn sci_ordre_de_reduction() {
    // ^ avant tout
    assert_eq!(evaluer("2*3^2"), "18");
    assert_eq!(evaluer("2^2*3"), "12");

    // * avant / (réduction la plus à gauche du '*' d'abord)
    assert_eq!(evaluer("8/2*4"), "1");
    assert_eq!(evaluer("12/2/3"), "2");

    // + en dernier
    assert_eq!(evaluer("1+2*3+4"), "11");

    // ^ associatif à gauche
    assert_eq!(evaluer("2^3^2"), "64");
}

/* ------------------------ Arrondi ------------------------ */

#[test]
fn sci_arrondi_intermediaire_visible() {
    // chaque étape binaire arrondit : (1/3)*3 = 0.3333*3 = 0.9999
    assert_eq!(evaluer("1/3*3"), "0.1111"); // '*' d'abord : 1/(3*3) = 1/9
    assert_eq!(evaluer("(1/3)*3"), "0.9999");
}

#[test]
fn sci_arrondi_exposant_ecrase_les_petits() {
    // 10^-5 arrondi à 4 décimales => 0, puis 1*0
    assert_eq!(evaluer("1e-5"), "0");
}

/* ------------------------ Propagation des échecs ------------------------ */

#[test]
fn sci_propagation_depuis_groupe() {
    assert_eq!(evaluer("1+(5/0)"), "Math error");
    assert_eq!(evaluer("((1/0))"), "Math error");
    assert_eq!(evaluer("2*((0-4)^0.5)"), "NaN");
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_imbrication_moderee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 60 niveaux : profondeur de récursion = profondeur d'imbrication, bornée
    let mut expr = "1".to_string();
    for _ in 0..60 {
        expr = format!("({expr}+0)");
        budget(t0, max);
    }

    assert_eq!(evaluer(&expr), "1");
}

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut expr = String::new();
    for k in 0..400 {
        if k > 0 {
            expr.push('+');
        }
        expr.push_str("0.5");
        budget(t0, max);
    }

    // 400*0.5 = 200
    assert_eq!(evaluer(&expr), "200");
}

#[test]
fn sci_stress_multiplications_implicites_en_chaine() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // (1+1)(1+1)...(1+1) : 10 groupes juxtaposés = 2^10
    let expr = "(1+1)".repeat(10);
    budget(t0, max);

    assert_eq!(evaluer(&expr), "1024");
}
