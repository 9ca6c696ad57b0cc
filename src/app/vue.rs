// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter valide ("="), le champ gère le reste
// - Aperçu en direct : l'entrée courante est ré-évaluée à chaque modification
// - Historique : lignes "expression = résultat" cliquables (rappel du résultat)
//
// Frontière noyau (contrat) :
// - le résultat est un texte OPAQUE; la vue ne l'inspecte que pour détecter
//   les deux sentinelles (est_sentinelle), jamais plus finement
// - la composition "a = b" est faite par etat.rs, pas par le noyau

use eframe::egui;

use super::etat::{AppCalc, Demarche};
use crate::noyau::{est_sentinelle, evaluer, evaluer_avec_demarche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice de poche");
                ui.add_space(6.0);

                self.ui_historique(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_entree(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    /* ------------------------ Entrée + aperçu ------------------------ */

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (1+1)(8-7), 2*(3--4), 1.5e+2")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton (pavé / C / AC / DEL), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Aperçu en direct : recalcule seulement quand l'entrée a changé
        if self.entree != self.apercu_pour {
            let pour = self.entree.clone();
            let (resultat, d_noyau) = evaluer_avec_demarche(&pour);
            let demarche = Demarche {
                normalise: d_noyau.normalise,
                jetons: d_noyau.jetons,
                rpn: d_noyau.rpn,
            };
            self.set_apercu(&pour, resultat, demarche);
        }

        // Enter valide (seulement si le champ est focus)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.valider();
        }

        ui.add_space(4.0);

        // Aperçu : résultat opaque de l'entrée courante
        ui.horizontal(|ui| {
            ui.label("=");
            if est_sentinelle(&self.apercu) {
                ui.colored_label(ui.visuals().error_fg_color, &self.apercu);
            } else {
                ui.monospace(&self.apercu);
            }
        });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l'entrée", Action::ClearEntree);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 30.0], egui::Button::new("="));
            if eq.clicked() {
                self.valider();
            }
        });

        ui.add_space(6.0);

        egui::Grid::new("pave_calc_poche")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7");
                self.bouton_insert(ui, "8");
                self.bouton_insert(ui, "9");
                self.bouton_insert(ui, "/");
                ui.end_row();

                self.bouton_insert(ui, "4");
                self.bouton_insert(ui, "5");
                self.bouton_insert(ui, "6");
                self.bouton_insert(ui, "*");
                ui.end_row();

                self.bouton_insert(ui, "1");
                self.bouton_insert(ui, "2");
                self.bouton_insert(ui, "3");
                self.bouton_insert(ui, "-");
                ui.end_row();

                self.bouton_insert(ui, "0");
                self.bouton_insert(ui, ".");
                self.bouton_insert(ui, "^");
                self.bouton_insert(ui, "+");
                ui.end_row();

                self.bouton_insert(ui, "(");
                self.bouton_insert(ui, ")");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    /* ------------------------ Démarche ------------------------ */

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        if self.demarche.jetons.is_empty() {
            return;
        }

        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Normalisé", &self.demarche.normalise);
                Self::champ_demarche(ui, "Jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, contenu: &str) {
        ui.horizontal(|ui| {
            ui.label(format!("{titre} :"));
            ui.monospace(contenu);
        });
    }

    /* ------------------------ Historique ------------------------ */

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        if self.historique.is_empty() {
            return;
        }

        let mut rappel: Option<String> = None;

        egui::ScrollArea::vertical()
            .id_salt("historique_scroll")
            .max_height(120.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for ligne in &self.historique {
                    let resp = ui
                        .add(egui::Label::new(egui::RichText::new(ligne).monospace()).sense(
                            egui::Sense::click(),
                        ))
                        .on_hover_text("Rappeler ce résultat dans l'entrée");
                    if resp.clicked() {
                        rappel = Some(ligne.clone());
                    }
                }
            });

        if let Some(ligne) = rappel {
            self.rappel_historique(&ligne);
        }

        if ui.small_button("Effacer l'historique").clicked() {
            self.vider_historique();
        }
    }

    /// Rappel : ré-insère la valeur d'une ligne "expression = résultat".
    /// Les lignes en sentinelle ne se rappellent pas (rien à réutiliser).
    fn rappel_historique(&mut self, ligne: &str) {
        let Some(pos) = ligne.rfind(" = ") else {
            return;
        };
        let valeur = &ligne[pos + 3..];
        if valeur.is_empty() || est_sentinelle(valeur) {
            return;
        }
        let valeur = valeur.to_string();
        self.inserer(&valeur);
    }

    /* ------------------------ Boutons ------------------------ */

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.effacer_dernier(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.inserer(label);
        }
    }

    /// "=" : évalue via le noyau, archive "expression = résultat" et, si le
    /// résultat est un nombre, le reprend comme nouvelle entrée (enchaînement).
    fn valider(&mut self) {
        let expression = self.entree.trim().to_string();
        if expression.is_empty() {
            self.focus_entree = true;
            return;
        }

        let resultat = evaluer(&expression);
        self.pousser_historique(&expression, &resultat);

        if !est_sentinelle(&resultat) && !resultat.is_empty() {
            self.entree = resultat;
        }
        self.focus_entree = true;
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ResetTotal,
    Backspace,
}
