// src/noyau/format.rs

/// Formate une valeur finale pour l'affichage.
/// - f64 Display donne déjà la forme décimale la plus courte qui relit la
///   même valeur ("14", "7.5", "0.3333"), jamais de notation scientifique
/// - le zéro négatif est replié sur "0"
pub fn format_nombre(v: f64) -> String {
    // -0.0 == 0.0 : remet le signe à plat avant affichage
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v}")
}
