// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : expression (ou "0") + aperçu en direct
// - Pavé tactile 4 colonnes : gros boutons, une Touche par bouton
// - Réglage : chiffres significatifs de l’affichage
//
// Note :
// - Le clavier est géré dans app.rs (événements globaux, pas de champ texte)

use eframe::egui;

use super::affichage::CHIFFRES_MAX;
use super::etat::{AppCalc, Touche};

const TAILLE_BOUTON: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading(crate::TITRE_APP);
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);

        ui.add_space(8.0);
        self.ui_reglages(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let apercu = self.apercu();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(egui::RichText::new(self.affichage()).monospace().size(24.0));
                // ligne d’aperçu toujours présente (hauteur stable)
                ui.label(egui::RichText::new(apercu).monospace().weak());
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", Touche::Clear);
                self.bouton(ui, "(", Touche::Saisie('('));
                self.bouton(ui, ")", Touche::Saisie(')'));
                self.bouton(ui, "÷", Touche::Saisie('/'));
                ui.end_row();

                self.bouton(ui, "7", Touche::Saisie('7'));
                self.bouton(ui, "8", Touche::Saisie('8'));
                self.bouton(ui, "9", Touche::Saisie('9'));
                self.bouton(ui, "×", Touche::Saisie('*'));
                ui.end_row();

                self.bouton(ui, "4", Touche::Saisie('4'));
                self.bouton(ui, "5", Touche::Saisie('5'));
                self.bouton(ui, "6", Touche::Saisie('6'));
                self.bouton(ui, "−", Touche::Saisie('-'));
                ui.end_row();

                self.bouton(ui, "1", Touche::Saisie('1'));
                self.bouton(ui, "2", Touche::Saisie('2'));
                self.bouton(ui, "3", Touche::Saisie('3'));
                self.bouton(ui, "+", Touche::Saisie('+'));
                ui.end_row();

                self.bouton(ui, "±", Touche::Signe);
                self.bouton(ui, "0", Touche::Saisie('0'));
                self.bouton(ui, ".", Touche::Saisie('.'));
                self.bouton(ui, "%", Touche::Pourcent);
                ui.end_row();

                self.bouton(ui, "DEL", Touche::Retour);
                ui.label("");
                ui.label("");
                self.bouton(ui, "=", Touche::Egal);
                ui.end_row();
            });
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Affichage :");
            let mut d = self.chiffres as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(1..=CHIFFRES_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_chiffres(d as usize);
            }
        });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label));
        if resp.clicked() {
            self.appliquer(touche);
        }
    }
}
