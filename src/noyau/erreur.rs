// src/noyau/erreur.rs
//
// Taxonomie à deux niveaux :
// - Structure : entrée cassée (parenthèses, nombre malformé, division par zéro,
//   réduction impossible). Sentinelle frontière : "Math error".
// - Domaine : calcul bien formé mais sans résultat réel (base négative ^ exposant
//   fractionnaire). Sentinelle frontière : "NaN".
//
// Le noyau reste typé de bout en bout; la conversion en sentinelle se fait
// uniquement dans moteur::evaluer (frontière d'affichage).

use thiserror::Error;

/// Sentinelle frontière : entrée structurellement invalide.
pub const SENTINELLE_STRUCTURE: &str = "Math error";

/// Sentinelle frontière : résultat non réel.
pub const SENTINELLE_DOMAINE: &str = "NaN";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("expression invalide: {0}")]
    Structure(String),

    #[error("résultat non réel")]
    Domaine,
}

impl ErreurEval {
    pub fn structure(msg: impl Into<String>) -> Self {
        ErreurEval::Structure(msg.into())
    }

    /// Sentinelle d'affichage associée à l'erreur.
    pub fn sentinelle(&self) -> &'static str {
        match self {
            ErreurEval::Structure(_) => SENTINELLE_STRUCTURE,
            ErreurEval::Domaine => SENTINELLE_DOMAINE,
        }
    }
}

/// Vrai si `s` est l'une des deux sentinelles.
/// Seul “parsing” du résultat autorisé côté UI.
pub fn est_sentinelle(s: &str) -> bool {
    s == SENTINELLE_STRUCTURE || s == SENTINELLE_DOMAINE
}
