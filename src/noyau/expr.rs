// src/noyau/expr.rs
//
// AST minimal : la soustraction n'existe pas (normalisée en addition d'un
// nombre négatif) et le moins unaire non plus (signe porté par le nombre).
// L'évaluation est une descente unique, chaque nœud binaire passant par la
// primitive de calcul.rs (arrondi 4 décimales inclus).

use super::calcul;
use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),

    Add(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évaluation récursive. La profondeur de récursion est bornée par la
    /// profondeur d'imbrication de l'entrée (un appel par nœud).
    pub fn evaluer(&self) -> Result<f64, ErreurEval> {
        use Expr::*;

        match self {
            Nombre(v) => Ok(*v),

            Add(a, b) => calcul::addition(a.evaluer()?, b.evaluer()?),
            Mul(a, b) => calcul::multiplication(a.evaluer()?, b.evaluer()?),
            Div(a, b) => calcul::division(a.evaluer()?, b.evaluer()?),
            Pow(a, b) => calcul::puissance(a.evaluer()?, b.evaluer()?),
        }
    }
}
