// src/noyau/valide.rs
//
// Validation structurelle, AVANT toute arithmétique :
// - équilibre des parenthèses (compteur, une passe)
// - grammaire des nombres signés (préfixe de moins, chiffres, au plus un point)
//
// Grammaire d'un nombre (post-normalisation) :
//   moins* chiffres [ '.' chiffres ]
// - une suite PAIRE de moins en tête s'annule (double négation), une suite
//   impaire donne un nombre négatif
// - un moins INTÉRIEUR est illégal (la normalisation doit l'avoir éliminé;
//   s'il en reste un, l'entrée était cassée)

use super::erreur::ErreurEval;

/// Équilibre des parenthèses : chaque ')' doit fermer une '(' ouverte,
/// et rien ne doit rester ouvert en fin de parcours.
pub fn verifier_parentheses(s: &str) -> Result<(), ErreurEval> {
    let mut ouvertes: usize = 0;

    for c in s.chars() {
        match c {
            '(' => ouvertes += 1,
            ')' => {
                if ouvertes == 0 {
                    return Err(ErreurEval::structure("parenthèse fermante orpheline"));
                }
                ouvertes -= 1;
            }
            _ => {}
        }
    }

    if ouvertes != 0 {
        return Err(ErreurEval::structure("parenthèses non fermées"));
    }
    Ok(())
}

/// Analyse un nombre signé conforme à la grammaire ci-dessus.
/// Retourne la valeur f64 (le signe est résolu par parité des moins de tête).
pub fn analyser_nombre(texte: &str) -> Result<f64, ErreurEval> {
    let chars: Vec<char> = texte.chars().collect();

    // préfixe de moins : parité
    let mut i = 0;
    while i < chars.len() && chars[i] == '-' {
        i += 1;
    }
    let negatif = i % 2 == 1;

    let corps = &chars[i..];
    if corps.is_empty() {
        return Err(ErreurEval::structure(format!("nombre vide: {texte:?}")));
    }

    let mut points = 0usize;
    let mut a_un_chiffre = false;
    for &c in corps {
        match c {
            '0'..='9' => a_un_chiffre = true,
            '.' => points += 1,
            // tout moins restant est intérieur => illégal
            _ => {
                return Err(ErreurEval::structure(format!("nombre malformé: {texte:?}")));
            }
        }
    }

    if points > 1 || !a_un_chiffre {
        return Err(ErreurEval::structure(format!("nombre malformé: {texte:?}")));
    }

    let corps: String = corps.iter().collect();
    let v: f64 = corps
        .parse()
        .map_err(|_| ErreurEval::structure(format!("nombre illisible: {texte:?}")))?;

    Ok(if negatif { -v } else { v })
}

/* ------------------------ Tests ------------------------ */
