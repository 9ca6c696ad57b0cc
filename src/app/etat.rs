//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'état de la calculatrice (entrée, aperçu, historique)
//! et offrir des opérations simples (C/AC/DEL, insertion, historique)
//! sans logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - La composition "expression = résultat" appartient à cette couche,
//!   jamais au noyau : le noyau rend un résultat nu.
//! - Actions déterministes, sans effet de bord caché.

/// Garde-fou : on borne l'historique (anti-abus / anti-gel).
const HISTORIQUE_MAX: usize = 200;

/// Trace du pipeline pour le panneau “démarche” (copie UI, sans type noyau).
#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub normalise: String,
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- aperçu en direct (résultat de l'entrée courante, opaque) ---
    pub apercu: String,
    // entrée pour laquelle l'aperçu a été calculé (mémo, évite le recalcul par frame)
    pub apercu_pour: String,

    // --- démarche (trace du pipeline pour l'entrée courante) ---
    pub demarche: Demarche,

    // --- historique : lignes "expression = résultat" déjà validées ---
    pub historique: Vec<String>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            apercu: String::new(),
            apercu_pour: String::new(),
            demarche: Demarche::default(),
            historique: Vec::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + aperçu + démarche + historique).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.apercu.clear();
        self.apercu_pour.clear();
        self.demarche = Demarche::default();
        self.historique.clear();
        self.focus_entree = true;
    }

    /// C : effacer seulement l'entrée (l'historique reste).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// DEL : retirer le dernier caractère de l'entrée.
    pub fn effacer_dernier(&mut self) {
        self.entree.pop();
        self.focus_entree = true;
    }

    /// Insertion brute en fin d'entrée (boutons du pavé).
    pub fn inserer(&mut self, texte: &str) {
        self.entree.push_str(texte);
        self.focus_entree = true;
    }

    /// Dépose l'aperçu calculé par la vue (résultat opaque, sentinelle comprise)
    /// et la démarche associée (vide si l'évaluation a échoué).
    pub fn set_apercu(&mut self, pour: &str, resultat: String, demarche: Demarche) {
        self.apercu_pour = pour.to_string();
        self.apercu = resultat;
        self.demarche = demarche;
    }

    /// Valide une évaluation : compose et archive "expression = résultat".
    /// C'est ICI (couche UI) que la forme "a = b" est construite.
    pub fn pousser_historique(&mut self, expression: &str, resultat: &str) {
        if expression.is_empty() {
            return;
        }
        self.historique
            .push(format!("{expression} = {resultat}"));

        if self.historique.len() > HISTORIQUE_MAX {
            let excedent = self.historique.len() - HISTORIQUE_MAX;
            self.historique.drain(..excedent);
        }
        self.focus_entree = true;
    }

    /// Efface l'historique seul.
    pub fn vider_historique(&mut self) {
        self.historique.clear();
        self.focus_entree = true;
    }
}
