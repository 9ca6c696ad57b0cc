// src/noyau/jetons.rs

use super::erreur::ErreurEval;
use super::valide::analyser_nombre;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),

    Plus,
    Etoile,
    Barre,
    Accent, // ^

    ParO,
    ParF,
}

/// Découpe un texte NORMALISÉ en jetons.
/// - opérateurs et parenthèses : délimiteurs d'un caractère
/// - tout le reste (chiffres, '.', '-') s'accumule en un nombre signé,
///   validé puis converti en f64 par valide::analyser_nombre
/// - les découpes vides sont ignorées
///
/// Pas de Jeton::Moins : après normalisation, '-' n'existe plus qu'en
/// préfixe de nombre. Un '-' isolé donnera un nombre malformé (erreur).
pub fn decouper(s: &str) -> Result<Vec<Jeton>, ErreurEval> {
    let mut out = Vec::new();
    let mut courant = String::new();

    fn flush(courant: &mut String, out: &mut Vec<Jeton>) -> Result<(), ErreurEval> {
        if courant.is_empty() {
            return Ok(());
        }
        let v = analyser_nombre(courant)?;
        out.push(Jeton::Nombre(v));
        courant.clear();
        Ok(())
    }

    for c in s.chars() {
        let delim = match c {
            '+' => Some(Jeton::Plus),
            '*' => Some(Jeton::Etoile),
            '/' => Some(Jeton::Barre),
            '^' => Some(Jeton::Accent),
            '(' => Some(Jeton::ParO),
            ')' => Some(Jeton::ParF),
            _ => None,
        };

        match delim {
            Some(j) => {
                flush(&mut courant, &mut out)?;
                out.push(j);
            }
            None => {
                if c.is_ascii_digit() || c == '.' || c == '-' {
                    courant.push(c);
                } else {
                    return Err(ErreurEval::structure(format!("caractère inattendu: '{c}'")));
                }
            }
        }
    }

    flush(&mut courant, &mut out)?;
    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::new();
    for j in jetons {
        let s = match j {
            Jeton::Nombre(v) => format!("{v}"),

            Jeton::Plus => "+".to_string(),
            Jeton::Etoile => "*".to_string(),
            Jeton::Barre => "/".to_string(),
            Jeton::Accent => "^".to_string(),

            Jeton::ParO => "(".to_string(),
            Jeton::ParF => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

/* ------------------------ Tests ------------------------ */
