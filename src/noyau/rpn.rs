// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Jeton en RPN (postfix)
// - Puis reconstruire Expr
//
// Précédences : ^ > * > / > +, TOUTES associatives à gauche.
// C'est l'ordre de réduction du moteur d'origine (passes ^, *, /, + en
// prenant l'occurrence la plus à gauche) exprimé en niveaux stricts :
// - '*' lie plus fort que '/' (8/2*4 = 8/(2*4) = 1)
// - '^' est associatif à GAUCHE (2^3^2 = (2^3)^2 = 64)
//
// Pas de moins : la normalisation l'a éliminé. Pas de fonctions, pas de
// variables : le seul atome est le nombre signé.

use super::erreur::ErreurEval;
use super::expr::Expr;
use super::jetons::Jeton;

fn precedence(j: &Jeton) -> i32 {
    match j {
        Jeton::Accent => 4,
        Jeton::Etoile => 3,
        Jeton::Barre => 2,
        Jeton::Plus => 1,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Nombre(2), Plus, Nombre(3), Etoile, Nombre(4)]
///   rpn:    [Nombre(2), Nombre(3), Nombre(4), Etoile, Plus]
pub fn vers_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurEval> {
    let mut out: Vec<Jeton> = Vec::new();
    let mut ops: Vec<Jeton> = Vec::new();

    for jeton in jetons.iter().copied() {
        match jeton {
            Jeton::Nombre(_) => out.push(jeton),

            Jeton::ParO => ops.push(jeton),

            Jeton::ParF => {
                // dépile jusqu'à '('
                let mut fermee = false;
                while let Some(haut) = ops.pop() {
                    if matches!(haut, Jeton::ParO) {
                        fermee = true;
                        break;
                    }
                    out.push(haut);
                }
                if !fermee {
                    // déjà exclu par le validateur; garde locale quand même
                    return Err(ErreurEval::structure("parenthèse fermante orpheline"));
                }
            }

            Jeton::Plus | Jeton::Etoile | Jeton::Barre | Jeton::Accent => {
                // associativité gauche : on sort tant que le sommet est de
                // précédence supérieure OU ÉGALE
                while let Some(&haut) = ops.last() {
                    if matches!(haut, Jeton::ParO) || precedence(&haut) < precedence(&jeton) {
                        break;
                    }
                    ops.pop();
                    out.push(haut);
                }
                ops.push(jeton);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Jeton::ParO) {
            return Err(ErreurEval::structure("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d'une RPN.
/// Toute indiscipline de pile (opérande manquant, valeurs juxtaposées sans
/// opérateur, ex: ")5") est une erreur de structure.
pub fn depuis_rpn(rpn: &[Jeton]) -> Result<Expr, ErreurEval> {
    let mut pile: Vec<Expr> = Vec::new();

    for jeton in rpn.iter().copied() {
        match jeton {
            Jeton::Nombre(v) => pile.push(Expr::Nombre(v)),

            Jeton::Plus | Jeton::Etoile | Jeton::Barre | Jeton::Accent => {
                let b = pile
                    .pop()
                    .ok_or_else(|| ErreurEval::structure("opérande droit manquant"))?;
                let a = pile
                    .pop()
                    .ok_or_else(|| ErreurEval::structure("opérande gauche manquant"))?;

                let e = match jeton {
                    Jeton::Plus => Expr::Add(Box::new(a), Box::new(b)),
                    Jeton::Etoile => Expr::Mul(Box::new(a), Box::new(b)),
                    Jeton::Barre => Expr::Div(Box::new(a), Box::new(b)),
                    Jeton::Accent => Expr::Pow(Box::new(a), Box::new(b)),
                    _ => unreachable!(),
                };

                pile.push(e);
            }

            Jeton::ParO | Jeton::ParF => {
                return Err(ErreurEval::structure("parenthèse inattendue en RPN"));
            }
        }
    }

    match (pile.pop(), pile.is_empty()) {
        (Some(e), true) => Ok(e),
        _ => Err(ErreurEval::structure("expression invalide")),
    }
}

/* ------------------------ Tests ------------------------ */
