// src/noyau/calcul.rs
//
// Primitive arithmétique binaire.
// Invariant d'arrondi : CHAQUE résultat binaire est arrondi à 4 décimales
// (au plus proche, demi loin de zéro) immédiatement, avant d'être réutilisé.
// Un résultat intermédiaire ne porte jamais plus de précision que l'affichage.

use super::erreur::ErreurEval;

const ECHELLE: f64 = 10_000.0;

/// Arrondi à 4 décimales, demi loin de zéro (f64::round).
pub fn arrondir(x: f64) -> f64 {
    (x * ECHELLE).round() / ECHELLE
}

/// Classe le résultat brut puis arrondit :
/// - NaN            => Domaine (pas de valeur réelle)
/// - non fini       => Structure (débordement; le contrat interdit "Infinity")
/// - fini           => valeur arrondie
///
/// Le test de finitude porte sur la valeur ARRONDIE : `x * 10000`
/// déborde déjà pour un brut fini au-delà de ~1.8e304.
fn classer(brut: f64) -> Result<f64, ErreurEval> {
    if brut.is_nan() {
        return Err(ErreurEval::Domaine);
    }
    let arrondi = arrondir(brut);
    if !arrondi.is_finite() {
        return Err(ErreurEval::structure("débordement"));
    }
    Ok(arrondi)
}

pub fn addition(a: f64, b: f64) -> Result<f64, ErreurEval> {
    classer(a + b)
}

pub fn multiplication(a: f64, b: f64) -> Result<f64, ErreurEval> {
    classer(a * b)
}

/// Division : le zéro au dénominateur est une erreur de structure,
/// détectée AVANT le calcul (pas d'infini/NaN silencieux).
pub fn division(a: f64, b: f64) -> Result<f64, ErreurEval> {
    if b == 0.0 {
        return Err(ErreurEval::structure("division par zéro"));
    }
    classer(a / b)
}

/// Puissance réelle. Base négative ^ exposant fractionnaire donne NaN
/// en IEEE => Domaine (sentinelle "NaN" à la frontière).
pub fn puissance(a: f64, b: f64) -> Result<f64, ErreurEval> {
    classer(a.powf(b))
}

/* ------------------------ Tests ------------------------ */
