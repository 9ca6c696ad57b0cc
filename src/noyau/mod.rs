//! Noyau d'évaluation arithmétique
//!
//! Organisation interne :
//! - normalise.rs : réécritures du texte brut (signes, multiplication implicite)
//! - valide.rs    : parenthèses + grammaire des nombres signés
//! - jetons.rs    : tokenisation
//! - rpn.rs       : shunting-yard + construction Expr
//! - expr.rs      : arbre + évaluation descendante
//! - calcul.rs    : primitive binaire + arrondi 4 décimales
//! - format.rs    : valeur finale -> texte décimal
//! - erreur.rs    : erreurs typées + sentinelles frontière
//! - moteur.rs    : pipeline complet

pub mod calcul;
pub mod erreur;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod normalise;
pub mod rpn;
pub mod valide;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale : ce que la vue consomme réellement
pub use erreur::est_sentinelle;
pub use moteur::{evaluer, evaluer_avec_demarche};
