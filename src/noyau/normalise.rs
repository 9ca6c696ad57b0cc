// src/noyau/normalise.rs
//
// Normalisation du texte brut, AVANT toute validation/tokenisation.
// Objectif : après passage ici, chaque opérateur est explicite et le signe de
// chaque nombre se lit localement, sans regarder plus loin.
//
// Réécritures, DANS CET ORDRE (chaque règle est une passe complète; l'ordre
// compte car les règles aval consomment ce que les règles amont produisent) :
// 0. espaces retirés (pré-passe)
// 1. notation scientifique : "e+N" / "e-N"  ->  "*10^N" / "*10^-N"
// 2. moins devant parenthèse : "-("  ->  "-1*("
// 3. multiplication implicite : terme suivi de "("  ->  "*(" inséré
//    (terme = chiffre, '.' ou ')'; jamais après un opérateur ni après '(')
// 4. double moins après un terme : "#--"  ->  "#+"
// 5. moins simple après un terme : "#-"  ->  "#+-"
//
// Après la règle 5, '-' ne survit QUE comme préfixe de nombre : la soustraction
// n'existe plus, elle est devenue addition d'un nombre négatif.

/// Passe complète de normalisation.
pub fn normaliser(brut: &str) -> String {
    let sans_espaces: String = brut.chars().filter(|c| !c.is_whitespace()).collect();

    let s = etend_notation_scientifique(&sans_espaces);
    let s = moins_devant_parenthese(&s);
    let s = multiplication_implicite(&s);
    moins_apres_terme(&s)
}

/// Un caractère qui TERMINE un terme (valeur fermée à sa gauche).
fn fin_de_terme(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ')'
}

/* ------------------------ Règle 1 : notation scientifique ------------------------ */

/// "2e+3" -> "2*10^3" ; "2e-3" -> "2*10^-3".
/// Un 'e' sans signe explicite + chiffre n'est pas touché (il échouera plus loin,
/// en caractère inattendu).
fn etend_notation_scientifique(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        let signe = if i + 2 < chars.len() && c == 'e' {
            match (chars[i + 1], chars[i + 2].is_ascii_digit()) {
                ('+', true) => Some('+'),
                ('-', true) => Some('-'),
                _ => None,
            }
        } else {
            None
        };

        match signe {
            Some(sg) => {
                out.push_str("*10^");
                if sg == '-' {
                    out.push('-');
                }
                // le '+' d'exposant est abandonné
                i += 2;
            }
            None => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

/* ------------------------ Règle 2 : "-(" -> "-1*(" ------------------------ */

/// Le moins unaire devant parenthèse devient un facteur -1 explicite.
/// Cas "3-(2)" : donne "3-1*(2)", que la règle 5 achève en "3+-1*(2)".
fn moins_devant_parenthese(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '-' && i + 1 < chars.len() && chars[i + 1] == '(' {
            out.push_str("-1*(");
            i += 2;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}

/* ------------------------ Règle 3 : multiplication implicite ------------------------ */

/// Insère '*' entre un terme fermé et une '(' qui le suit :
/// ")(", "2(", ".5(" etc. Jamais après '*' (la règle 2 vient d'en produire),
/// ni après un autre opérateur, ni après '('.
fn multiplication_implicite(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prec: Option<char> = None;

    for c in s.chars() {
        if c == '(' {
            if let Some(p) = prec {
                if fin_de_terme(p) {
                    out.push('*');
                }
            }
        }
        out.push(c);
        prec = Some(c);
    }

    out
}

/* ------------------------ Règles 4 + 5 : moins après un terme ------------------------ */

/// "#--" -> "#+" (double négation) puis "#-" -> "#+-" (soustraction devient
/// addition d'un négatif). Une seule passe gauche-droite suffit : elle produit
/// exactement le même texte que les deux passes successives.
/// S'applique après un chiffre OU après ')' (le texte d'origine ignorait ")-"
/// et laissait fuir du texte non réduit; ici ")-3" devient ")+-3").
fn moins_apres_terme(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        out.push(c);

        let apres_terme = c.is_ascii_digit() || c == ')';
        if apres_terme && i + 1 < chars.len() && chars[i + 1] == '-' {
            if i + 2 < chars.len() && chars[i + 2] == '-' {
                // "#--" -> "#+"
                out.push('+');
                i += 3;
            } else {
                // "#-" -> "#+-"
                out.push('+');
                out.push('-');
                i += 2;
            }
            continue;
        }

        i += 1;
    }

    out
}

/* ------------------------ Tests ------------------------ */
