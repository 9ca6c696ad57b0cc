//! Noyau — évaluation (pipeline réel)
//!
//! normaliser -> valider (parenthèses) -> jetons -> RPN -> Expr -> évaluation
//!
//! Une seule passe d'analyse : les groupes parenthésés sont portés par l'arbre
//! (plus de re-découpage récursif de sous-chaînes comme dans le moteur
//! d'origine). La grammaire des nombres est contrôlée au moment du découpage,
//! donc toujours avant la première opération arithmétique.

use log::{debug, trace};

use super::erreur::ErreurEval;
use super::format::format_nombre;
use super::jetons::{decouper, format_jetons};
use super::normalise::normaliser;
use super::rpn::{depuis_rpn, vers_rpn};
use super::valide::verifier_parentheses;

/// Trace du pipeline (panneau “démarche” de l'UI).
#[derive(Default, Clone, Debug)]
pub struct DemarcheMoteur {
    pub normalise: String,
    pub jetons: String,
    pub rpn: String,
}

/// API frontière : toujours une chaîne affichable.
/// - nombre décimal arrondi à 4 décimales,
/// - "" pour une entrée vide,
/// - "Math error" (structure) ou "NaN" (domaine) sinon.
/// Totale : aucune entrée ne panique.
pub fn evaluer(expression: &str) -> String {
    evaluer_avec_demarche(expression).0
}

/// Comme evaluer, avec la trace du pipeline en plus (panneau UI).
/// La trace est vide quand l'évaluation échoue ou que l'entrée est vide.
pub fn evaluer_avec_demarche(expression: &str) -> (String, DemarcheMoteur) {
    match evaluer_detail(expression) {
        Ok((None, _)) => (String::new(), DemarcheMoteur::default()),
        Ok((Some(v), d)) => (format_nombre(v), d),
        Err(e) => {
            debug!("évaluation en échec: {e}");
            (e.sentinelle().to_string(), DemarcheMoteur::default())
        }
    }
}

/// Cœur typé : Ok(None) pour une entrée vide, sinon la valeur finale.
pub fn evaluer_valeur(expression: &str) -> Result<Option<f64>, ErreurEval> {
    Ok(evaluer_detail(expression)?.0)
}

/// Pipeline typé complet : valeur (None si entrée vide) + trace.
fn evaluer_detail(
    expression: &str,
) -> Result<(Option<f64>, DemarcheMoteur), ErreurEval> {
    // 1) Normalisation (opérateurs explicites, signes locaux)
    let propre = normaliser(expression);
    trace!("normalisé: {propre:?}");

    // 2) Validation structurelle
    verifier_parentheses(&propre)?;

    // 3) Jetons (nombres signés typés dès ici)
    let jetons = decouper(&propre)?;
    let jetons_txt = format_jetons(&jetons);
    trace!("jetons: {jetons_txt}");

    if jetons.is_empty() {
        // comportement choisi : entrée vide => résultat vide
        return Ok((None, DemarcheMoteur::default()));
    }

    // 4) RPN puis arbre, une seule évaluation descendante
    let rpn = vers_rpn(&jetons)?;
    let rpn_txt = format_jetons(&rpn);
    trace!("rpn: {rpn_txt}");

    let arbre = depuis_rpn(&rpn)?;
    let valeur = arbre.evaluer()?;

    let d = DemarcheMoteur {
        normalise: propre,
        jetons: jetons_txt,
        rpn: rpn_txt,
    };

    Ok((Some(valeur), d))
}
